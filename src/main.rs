// created = "2026-10-17"
// modified = "2026-10-17"

use std::env;
use std::process::ExitCode;

use radix_chain::chain::DigitChain;
use radix_chain::config::Config;
use radix_chain::logging::init_logger;

const USAGE: &str = "usage: radix-chain [--id N] <decimal> [<decimal>]";

fn main() -> ExitCode {
    init_logger(false);

    let mut config = Config::default();
    let mut operands = Vec::new();
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--id" {
            match args.next().and_then(|id| id.parse().ok()) {
                Some(id) => config.id = id,
                None => {
                    eprintln!("{}", USAGE);
                    return ExitCode::FAILURE;
                }
            }
        } else {
            operands.push(arg);
        }
    }
    if operands.is_empty() || operands.len() > 2 {
        eprintln!("{}", USAGE);
        return ExitCode::FAILURE;
    }

    let profile = match config.resolve() {
        Ok(profile) => profile,
        Err(err) => {
            eprintln!("invalid config: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let number = DigitChain::parse_decimal(profile, &operands[0]);
    println!("radix {}: {}", number.radix(), number);
    let converted = number.convert();
    println!("radix {}: {}", converted.radix(), converted);

    if let Some(other) = operands.get(1) {
        let other = DigitChain::parse_decimal(profile, other);
        if let Some(result) = number.combine(Some(&other)) {
            println!(
                "{} {} {} = {} (radix {}: {})",
                number.to_decimal_string(),
                profile.operator(),
                other.to_decimal_string(),
                result.to_decimal_string(),
                result.radix(),
                result,
            );
        }
    }
    return ExitCode::SUCCESS;
}
