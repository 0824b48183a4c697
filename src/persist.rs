// created = "2026-10-17"
// modified = "2026-10-17"

//! Saving and loading chains as decimal text.
//!
//! A file holds one line: the value in base 10. `read_decimal` and
//! `write_decimal` report I/O errors; `load` and `save` are best-effort and
//! only log them. A file that cannot be read loads as zero.

use std::fs::File;
use std::io;
use std::io::BufRead;
use std::io::BufReader;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;

use crate::chain::DigitChain;
use crate::config::Profile;

/// Read the first line, without its terminator. `None` at end of input.
pub fn read_decimal<R: BufRead>(mut reader: R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    return Ok(Some(line));
}

/// Write the value in base 10 followed by a newline.
pub fn write_decimal<W: Write>(chain: &DigitChain, mut writer: W) -> io::Result<()> {
    writeln!(writer, "{}", chain.to_decimal_string())?;
    return writer.flush();
}

/// Load a chain from a file. Any failure gives the empty chain.
pub fn load<P: AsRef<Path>>(path: P, profile: Profile) -> DigitChain {
    let path = path.as_ref();
    if !path.is_file() {
        log::warn!("{} is not a file, loading zero", path.display());
        return DigitChain::new(profile);
    }

    let line = File::open(path).and_then(|file| read_decimal(BufReader::new(file)));
    return match line {
        Ok(line) => DigitChain::parse_decimal_opt(profile, line.as_deref()),
        Err(err) => {
            log::warn!("failed to read {}: {}", path.display(), err);
            DigitChain::new(profile)
        }
    };
}

/// Save a chain to a file, reporting failure.
pub fn try_save<P: AsRef<Path>>(chain: &DigitChain, path: P) -> io::Result<()> {
    let file = File::create(path)?;
    return write_decimal(chain, BufWriter::new(file));
}

/// Save a chain to a file. Failures are logged and otherwise ignored.
pub fn save<P: AsRef<Path>>(chain: &DigitChain, path: P) {
    let path = path.as_ref();
    if let Err(err) = try_save(chain, path) {
        log::warn!("failed to save {}: {}", path.display(), err);
    }
}
