//! yar CLI - encode and inspect YAR RPC messages
//!
//! Commands:
//! - `yar encode-request` - Frame a method call
//! - `yar encode-response` - Frame a call result
//! - `yar inspect` - Print the headers and bodies stored in a file

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use yar_transport::Envelope;

mod config;
mod encode;
mod inspect;

#[derive(Parser)]
#[command(name = "yar")]
#[command(author, version, about = "Encode and inspect YAR RPC messages", long_about = None)]
struct Cli {
    /// Path to a TOML codec config
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Frame a request and write it to a file or stdout
    EncodeRequest {
        /// Transaction id
        #[arg(short, long)]
        id: u32,

        /// Remote method name
        #[arg(short, long)]
        method: String,

        /// Positional params as a JSON array
        #[arg(short, long, default_value = "[]")]
        params: String,

        /// Provider to stamp into the header
        #[arg(long)]
        provider: Option<String>,

        /// Token to stamp into the header
        #[arg(long)]
        token: Option<String>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Frame a response and write it to a file or stdout
    EncodeResponse {
        /// Transaction id of the originating request
        #[arg(short, long)]
        id: u32,

        /// Status code
        #[arg(short, long, default_value_t = 0, allow_hyphen_values = true)]
        status: i32,

        /// Return value as JSON
        #[arg(short, long, default_value = "null")]
        result: String,

        /// Captured standard output
        #[arg(long, default_value = "")]
        output: String,

        /// Error message
        #[arg(short, long, default_value = "")]
        error: String,

        /// Provider to stamp into the header
        #[arg(long)]
        provider: Option<String>,

        /// Token to stamp into the header
        #[arg(long)]
        token: Option<String>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Print the messages stored in a file
    Inspect {
        /// File holding one or more framed messages
        file: PathBuf,

        /// Reject headers with a wrong magic number or version
        #[arg(long)]
        validate: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let file_config = config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::EncodeRequest {
            id,
            method,
            params,
            provider,
            token,
            out,
        } => {
            let config = config::with_overrides(file_config, provider, token, cli.log_level);
            yar_logging::init_from_config(&config)?;
            let frame = encode::encode_request(id, &method, &params, &Envelope::from_config(&config))?;
            encode::emit(&frame, out.as_deref())?;
        }
        Commands::EncodeResponse {
            id,
            status,
            result,
            output,
            error,
            provider,
            token,
            out,
        } => {
            let config = config::with_overrides(file_config, provider, token, cli.log_level);
            yar_logging::init_from_config(&config)?;
            let frame = encode::encode_response(
                id,
                status,
                &result,
                &output,
                &error,
                &Envelope::from_config(&config),
            )?;
            encode::emit(&frame, out.as_deref())?;
        }
        Commands::Inspect { file, validate } => {
            let config = config::with_overrides(file_config, None, None, cli.log_level);
            yar_logging::init_from_config(&config)?;
            inspect::run(&file, validate, &config)?;
        }
    }

    Ok(())
}
