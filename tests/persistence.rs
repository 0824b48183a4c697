// created = "2026-10-17"
// modified = "2026-10-17"

//! Tests for best-effort decimal file persistence.

use std::fs;
use std::path::PathBuf;

use radix_chain::Config;
use radix_chain::DigitChain;
use radix_chain::Profile;
use radix_chain::logging::init_logger;
use radix_chain::persist;

/// A fresh path in the temp directory, unique per test.
fn temp_path(name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("radix-chain-{}-{}.txt", std::process::id(), name));
    let _ = fs::remove_file(&path);
    return path;
}

#[test]
fn save_then_load() {
    init_logger(true);
    let profile = Config::new(4).resolve().unwrap();
    let path = temp_path("save_then_load");

    let chain = DigitChain::parse_decimal(profile, "1234567890123456789");
    persist::save(&chain, &path);
    assert_eq!(fs::read_to_string(&path).unwrap(), "1234567890123456789\n");

    let loaded = persist::load(&path, profile);
    assert_eq!(loaded, chain);
    assert_eq!(loaded.radix(), 16);

    let _ = fs::remove_file(&path);
}

#[test]
fn load_missing_file_is_zero() {
    init_logger(true);
    let path = temp_path("missing");
    let loaded = persist::load(&path, Profile::default());
    assert!(loaded.is_empty());
}

#[test]
fn load_directory_is_zero() {
    init_logger(true);
    let loaded = persist::load(std::env::temp_dir(), Profile::default());
    assert!(loaded.is_empty());
}

#[test]
fn load_malformed_is_zero() {
    init_logger(true);
    let path = temp_path("malformed");
    fs::write(&path, "-17\n").unwrap();
    assert!(persist::load(&path, Profile::default()).is_empty());

    fs::write(&path, "").unwrap();
    assert!(persist::load(&path, Profile::default()).is_empty());

    let _ = fs::remove_file(&path);
}

#[test]
fn load_reads_first_line() {
    init_logger(true);
    let path = temp_path("first_line");
    fs::write(&path, " 42 \n99\n").unwrap();
    assert_eq!(persist::load(&path, Profile::default()).to_decimal_string(), "42");
    let _ = fs::remove_file(&path);
}

#[test]
fn save_failure_is_swallowed() {
    init_logger(true);
    let mut path = temp_path("no_such_dir");
    path.push("nested.txt");
    let chain = DigitChain::parse_decimal(Profile::default(), "5");

    persist::save(&chain, &path);
    assert!(persist::try_save(&chain, &path).is_err());
    assert!(!path.exists());
}
