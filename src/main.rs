use std::io::{self, Read as _};

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use sso_signer::keys::generate_secret_key;
use sso_signer::token::{decode_signature, split_token};
use sso_signer::types::DEFAULT_SECRET_KEY_LEN;
use sso_signer::{SecretKey, Signer, Zeroizing};

#[derive(Parser)]
#[command(name = "sso-signer", about = "Sign and verify tamper-evident string tokens")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Sign data and print the token.
    Sign {
        /// Key file path: raw key bytes (or hex with --hex-key).
        #[arg(short, long)]
        key: String,

        /// Interpret the key file as hex-encoded.
        #[arg(long, default_value_t = false)]
        hex_key: bool,

        /// Data to sign. If omitted, reads from stdin.
        #[arg(short, long)]
        data: Option<String>,
    },

    /// Verify a token and print the data it carries.
    Unsign {
        /// Key file path: raw key bytes (or hex with --hex-key).
        #[arg(short, long)]
        key: String,

        /// Interpret the key file as hex-encoded.
        #[arg(long, default_value_t = false)]
        hex_key: bool,

        /// Token string. If omitted, reads from stdin.
        #[arg(short, long)]
        token: Option<String>,
    },

    /// Split a token and display its parts as JSON, without verifying it.
    Inspect {
        /// Token string. If omitted, reads from stdin.
        #[arg(short, long)]
        token: Option<String>,
    },

    /// Generate a random secret key and print it as hex.
    GenerateKey {
        /// Key length in bytes.
        #[arg(short, long, default_value_t = DEFAULT_SECRET_KEY_LEN)]
        length: usize,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Sign { key, hex_key, data } => cmd_sign(&key, hex_key, data),
        Command::Unsign {
            key,
            hex_key,
            token,
        } => cmd_unsign(&key, hex_key, token),
        Command::Inspect { token } => cmd_inspect(token),
        Command::GenerateKey { length } => cmd_generate_key(length),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn cmd_sign(
    key_path: &str,
    hex_key: bool,
    data_arg: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let signer: Signer = Signer::from_secret(read_key_file(key_path, hex_key)?);
    let data = read_arg_or_stdin(data_arg)?;
    println!("{}", signer.sign(&data));
    Ok(())
}

fn cmd_unsign(
    key_path: &str,
    hex_key: bool,
    token_arg: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let signer: Signer = Signer::from_secret(read_key_file(key_path, hex_key)?);
    let token = read_arg_or_stdin(token_arg)?;
    let data = signer.unsign(&token)?;
    println!("{data}");
    Ok(())
}

fn cmd_inspect(token_arg: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let token = read_arg_or_stdin(token_arg)?;
    let parts = split_token(&token)?;

    let mac = match decode_signature(parts.signature) {
        Ok(mac) => serde_json::json!({ "hex": hex::encode(&mac), "len": mac.len() }),
        Err(e) => serde_json::json!({ "error": e.to_string() }),
    };

    let output = serde_json::json!({
        "parts": parts,
        "mac": mac,
        "total_len": token.len(),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn cmd_generate_key(length: usize) -> Result<(), Box<dyn std::error::Error>> {
    if length == 0 {
        return Err("key length must be at least 1 byte".into());
    }
    let key = generate_secret_key(length);
    println!("{}", hex::encode(key.as_bytes()));
    Ok(())
}

/// Use the CLI argument if given, otherwise read stdin. A single trailing
/// newline from stdin is dropped.
fn read_arg_or_stdin(arg: Option<String>) -> Result<String, Box<dyn std::error::Error>> {
    match arg {
        Some(s) => Ok(s),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            if buf.ends_with('\n') {
                buf.pop();
                if buf.ends_with('\r') {
                    buf.pop();
                }
            }
            Ok(buf)
        }
    }
}

/// Read key bytes from a file, optionally hex-decoding.
fn read_key_file(path: &str, hex_encoded: bool) -> Result<SecretKey, Box<dyn std::error::Error>> {
    let raw = std::fs::read(path)?;
    if hex_encoded {
        let hex_str = Zeroizing::new(
            String::from_utf8(raw).map_err(|_| "hex key file is not valid UTF-8")?,
        );
        Ok(SecretKey::from_hex(&hex_str)?)
    } else {
        Ok(SecretKey::new(raw))
    }
}
