use clap::{Parser, Subcommand};
use seedstream::cli::{
    run_bench, run_generate, write_stream, BenchOptions, Encoding, GenerateOptions,
};
use std::path::PathBuf;
use std::process::ExitCode;

/// Version info from build.rs
const VERSION: &str = env!("SEEDSTREAM_VERSION");
const BUILD: &str = env!("SEEDSTREAM_BUILD");
const PROFILE: &str = env!("SEEDSTREAM_PROFILE");
const GIT_HASH: &str = env!("SEEDSTREAM_GIT_HASH");

/// Combined version string (compile-time concatenation not possible, so we build at runtime)
fn get_version() -> &'static str {
    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();
    VERSION_STRING.get_or_init(|| {
        format!("{} {} build {} ({})", PROFILE, VERSION, BUILD, GIT_HASH)
    })
}

#[derive(Parser)]
#[command(name = "seedstream")]
#[command(author, about = "Password-seeded deterministic pseudorandom stream generator", long_about = None)]
struct Cli {
    /// Print version
    #[arg(short = 'V', long)]
    version: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a stream from a password and a confusion string
    #[command(alias = "g")]
    Generate {
        /// Password (its UTF-8 bytes feed the key derivation)
        password: String,

        /// Confusion string (UTF-8 bytes; KDF salt and stopping pattern)
        confusion: String,

        /// Iteration count: chain length and KDF work factor in one
        iterations: u32,

        /// Output file (stdout when omitted)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Stream encoding
        #[arg(long, default_value = "base64", value_parser = parse_encoding)]
        encoding: Encoding,

        /// Fail if any segment grows past this many bytes
        #[arg(long)]
        max_segment_bytes: Option<usize>,
    },

    /// Time the generator over random inputs
    #[command(alias = "b")]
    Bench {
        /// Iteration counts to sweep
        #[arg(long, value_delimiter = ',', default_values_t = vec![10u32, 50, 100])]
        iterations: Vec<u32>,

        /// Largest confusion-string length (odd lengths from 1 are swept)
        #[arg(long, default_value_t = 15)]
        max_pattern_len: usize,

        /// Emit measurements as JSON for external plotting
        #[arg(long)]
        json: bool,
    },
}

fn parse_encoding(s: &str) -> Result<Encoding, String> {
    s.parse().map_err(|e| format!("{}", e))
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Handle --version flag
    if cli.version {
        println!("seedstream {}", get_version());
        return ExitCode::SUCCESS;
    }

    // Require a command if not showing version
    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            // Show help when no command provided
            use clap::CommandFactory;
            Cli::command().print_help().unwrap();
            println!();
            return ExitCode::SUCCESS;
        }
    };

    let result = match command {
        Commands::Generate {
            password,
            confusion,
            iterations,
            output,
            encoding,
            max_segment_bytes,
        } => {
            let options = GenerateOptions {
                password,
                confusion,
                iterations,
                encoding,
                max_segment_bytes,
            };

            match run_generate(&options) {
                Ok(encoded) => write_stream(&encoded, output.as_deref()),
                Err(e) => Err(e),
            }
        }

        Commands::Bench {
            iterations,
            max_pattern_len,
            json,
        } => {
            let options = BenchOptions {
                iteration_counts: iterations,
                max_pattern_len,
                json,
            };

            match run_bench(&options) {
                Ok(report) => {
                    print!("{}", report);
                    Ok(())
                }
                Err(e) => Err(e),
            }
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
