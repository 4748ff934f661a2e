use anyhow::Context;
use clap::{Parser, Subcommand};
use clap::error::ErrorKind;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use colorfield::RenderRequest;
use colorfield::encode;

#[derive(Parser)]
#[command(name = "colorfield")]
#[command(about = "Generate solid, gradient and multipoint PNG images")]
#[command(version)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Write the PNG to this file instead of standard output
    #[arg(short, long, value_name = "FILE", global = true)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fill the whole image with one color
    #[command(allow_negative_numbers = true)]
    Solid {
        /// Image width in pixels
        width: String,
        /// Image height in pixels
        height: String,
        /// RGB color in hex (e.g. FF0000 or #FF0000 for red)
        hex_color: String,
    },

    /// Linear gradient between two colors
    #[command(allow_negative_numbers = true)]
    Gradient {
        /// Image width in pixels
        width: String,
        /// Image height in pixels
        height: String,
        /// Starting RGB color in hex
        start_color: String,
        /// Ending RGB color in hex
        end_color: String,
        /// Rotation angle (0 = left-to-right, 90 = top-to-bottom)
        degrees: String,
    },

    /// Inverse-distance-weighted blend of colored points
    #[command(allow_negative_numbers = true)]
    Multipoint {
        /// Image width in pixels
        width: String,
        /// Image height in pixels
        height: String,
        /// Points as x:y:RRGGBB (e.g. 50:50:FF0000), at least two.
        /// Options such as -v or -o must come before the subcommand.
        #[arg(value_name = "POINT", required = true, allow_hyphen_values = true)]
        points: Vec<String>,
    },
}

impl Command {
    fn into_request(self) -> colorfield::Result<RenderRequest> {
        match self {
            Command::Solid { width, height, hex_color } => {
                RenderRequest::solid(&width, &height, &hex_color)
            }
            Command::Gradient { width, height, start_color, end_color, degrees } => {
                RenderRequest::gradient(&width, &height, &start_color, &end_color, &degrees)
            }
            Command::Multipoint { width, height, points } => {
                RenderRequest::multipoint(&width, &height, &points)
            }
        }
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .target(env_logger::Target::Stderr)
        .init();
}

fn run(args: Cli) -> anyhow::Result<()> {
    let output = args.output;
    let request = args.command.into_request()?;

    let buffer = request.render()?;
    let bytes = encode::encode_png(&buffer)?;

    // The image is fully encoded before anything reaches its destination
    match output {
        Some(path) => encode::write_atomically(&path, &bytes)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(&bytes)
                .and_then(|_| stdout.flush())
                .context("Failed to write image to standard output")?;
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = match Cli::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(1),
            };
        }
    };

    init_logging(args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("{:?}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::from(1)
        }
    }
}
