use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use num_bigint::BigInt;
use num_traits::Num;

use shamir_recover::{field, recover_from_file, ShareFile};

#[derive(Parser)]
#[clap(name = "shamir-recover")]
#[clap(version = "0.1.0")]
#[clap(about = "Reconstruct a Shamir-shared secret from JSON share files.", long_about = None)]
struct Cli {
    /// Share files to reconstruct, one secret per file
    #[clap(required = true)]
    files: Vec<PathBuf>,

    /// Field modulus, decimal or 0x-prefixed hex (defaults to the built-in
    /// 256-bit prime)
    #[clap(short, long)]
    modulus: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let modulus = match &cli.modulus {
        Some(text) => parse_modulus(text)?,
        None => field::default_prime(),
    };

    for path in &cli.files {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read share file {}", path.display()))?;
        let file: ShareFile = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse share file {}", path.display()))?;
        let secret = recover_from_file(&file, &modulus)
            .with_context(|| format!("Failed to reconstruct secret from {}", path.display()))?;
        println!("{}", secret);
    }

    Ok(())
}

fn parse_modulus(text: &str) -> Result<BigInt> {
    let parsed = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => BigInt::from_str_radix(hex, 16),
        None => BigInt::from_str_radix(text, 10),
    };
    parsed.with_context(|| format!("Failed to parse modulus {:?}", text))
}
