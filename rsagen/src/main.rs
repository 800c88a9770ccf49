mod keypair;
mod primes;

use anyhow::{Context, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use clap::Parser;
use keypair::KeyGen;
use std::io::Read;
use std::path::PathBuf;

const EXTENSION: &str = ".json";

#[derive(Parser)]
#[command(name = "rsagen")]
#[command(about = "Derive an RSA key pair from a generated byte stream")]
struct Cli {
    /// Private key output file
    #[arg(default_value = "private.json")]
    private: PathBuf,

    /// Public key output file
    #[arg(default_value = "public.json")]
    public: PathBuf,
}

/// Append the key-document extension when the caller left it off.
fn ensure_extension(path: PathBuf) -> PathBuf {
    if path.to_string_lossy().ends_with(EXTENSION) {
        path
    } else {
        let mut os = path.into_os_string();
        os.push(EXTENSION);
        PathBuf::from(os)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // The stream arrives base64 encoded on stdin, the way the generator
    // emits it by default.
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .context("reading stream from stdin")?;
    let stream = STANDARD
        .decode(text.trim())
        .context("stream is not valid base64")?;

    let generator = KeyGen::new(&stream)?;
    let (private_doc, public_doc) = generator.generate()?;

    let private_path = ensure_extension(cli.private);
    let public_path = ensure_extension(cli.public);
    std::fs::write(&private_path, serde_json::to_string_pretty(&private_doc)?)
        .with_context(|| format!("writing {}", private_path.display()))?;
    std::fs::write(&public_path, serde_json::to_string_pretty(&public_doc)?)
        .with_context(|| format!("writing {}", public_path.display()))?;

    println!(
        "Wrote {} and {}",
        private_path.display(),
        public_path.display()
    );
    Ok(())
}
