use crate::error::{Result, SeedstreamError};
use crate::pipeline::Generator;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::io::Write;
use std::path::Path;

/// Output encoding options for the generated stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    #[default]
    Base64,
    Hex,
    Raw,
}

impl std::str::FromStr for Encoding {
    type Err = SeedstreamError;
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "base64" => Ok(Self::Base64),
            "hex" => Ok(Self::Hex),
            "raw" => Ok(Self::Raw),
            _ => Err(SeedstreamError::UnsupportedEncoding(s.to_string())),
        }
    }
}

/// Options for the generate command
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub password: String,
    pub confusion: String,
    pub iterations: u32,
    pub encoding: Encoding,
    pub max_segment_bytes: Option<usize>,
}

/// Run the generator and encode the stream for output.
///
/// String arguments are passed to the core as their UTF-8 bytes; the core
/// itself never decodes text. An empty confusion string is rejected here,
/// at the outer interface.
pub fn run_generate(options: &GenerateOptions) -> Result<Vec<u8>> {
    if options.confusion.is_empty() {
        return Err(SeedstreamError::EmptyPattern);
    }

    let mut generator = Generator::new(
        options.password.as_bytes(),
        options.confusion.as_bytes(),
        options.iterations,
    );
    if let Some(cap) = options.max_segment_bytes {
        generator = generator.segment_cap(cap);
    }

    let stream = generator.generate()?;
    Ok(encode_stream(&stream, options.encoding))
}

fn encode_stream(stream: &[u8], encoding: Encoding) -> Vec<u8> {
    match encoding {
        Encoding::Base64 => STANDARD.encode(stream).into_bytes(),
        Encoding::Hex => hex::encode(stream).into_bytes(),
        Encoding::Raw => stream.to_vec(),
    }
}

/// Write an encoded stream to a file, or to stdout when no path is given.
pub fn write_stream(encoded: &[u8], output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => std::fs::write(path, encoded)?,
        None => std::io::stdout().lock().write_all(encoded)?,
    }
    Ok(())
}
