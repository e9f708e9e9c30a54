use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use serde_json::{json, Value};

use microversion_parse::{
    extract_version_with_legacy, get_version, parse_version_string, HeaderSource,
    MicroversionError,
};

#[derive(Parser)]
#[command(name = "microversion-cli")]
#[command(about = "Inspect OpenStack-style microversion negotiation offline", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Negotiate a version against a supported list
    Negotiate {
        #[command(flatten)]
        request: RequestArgs,

        /// Supported versions, earliest first (comma separated)
        #[arg(long, value_delimiter = ',', required = true)]
        versions: Vec<String>,
    },
    /// Show the raw version token requested, without validation
    Requested {
        #[command(flatten)]
        request: RequestArgs,
    },
    /// Parse a single version literal
    Parse { literal: String },
}

#[derive(Args)]
struct RequestArgs {
    /// Service type to negotiate for
    #[arg(short, long)]
    service: String,

    /// Request header as "Name: value" (repeatable)
    #[arg(short = 'H', long = "header")]
    headers: Vec<String>,

    /// Read headers from a JSON file ("-" for stdin): an object or [name, value] pairs
    #[arg(long, conflicts_with = "headers")]
    headers_json: Option<PathBuf>,

    /// Treat --headers-json as a CGI-style environ (HTTP_* keys)
    #[arg(long, requires = "headers_json")]
    environ: bool,

    /// Legacy header to probe when the standard header is absent (repeatable)
    #[arg(short, long = "legacy")]
    legacy: Vec<String>,
}

impl RequestArgs {
    fn header_source(&self) -> Result<HeaderSource, Box<dyn std::error::Error>> {
        if let Some(path) = &self.headers_json {
            let text = if path.as_os_str() == "-" {
                let mut buf = String::new();
                std::io::stdin().read_to_string(&mut buf)?;
                buf
            } else {
                fs::read_to_string(path)?
            };
            let value: Value = serde_json::from_str(&text)?;
            let source = if self.environ {
                HeaderSource::environ_from_json(&value)?
            } else {
                HeaderSource::from_json(&value)?
            };
            return Ok(source);
        }

        let pairs = self
            .headers
            .iter()
            .map(|raw| {
                raw.split_once(':')
                    .map(|(name, value)| (name.trim().to_string(), value.to_string()))
                    .ok_or_else(|| MicroversionError::InvalidHeaderSource {
                        reason: format!("header {raw:?} is not \"Name: value\""),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(HeaderSource::Pairs(pairs))
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli.command) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> Result<String, Box<dyn std::error::Error>> {
    let output = match command {
        Commands::Negotiate { request, versions } => {
            let headers = request.header_source()?;
            let version =
                extract_version_with_legacy(&headers, &request.service, &versions, &request.legacy)?;
            json!({
                "service_type": request.service,
                "version": version.version(),
                "min_version": version.min_version(),
                "max_version": version.max_version(),
            })
        }
        Commands::Requested { request } => {
            let headers = request.header_source()?;
            let requested = get_version(&headers, &request.service, &request.legacy);
            json!({ "service_type": request.service, "requested": requested })
        }
        Commands::Parse { literal } => {
            let version = parse_version_string(&literal)?;
            json!({ "major": version.major, "minor": version.minor, "version": version })
        }
    };
    Ok(serde_json::to_string_pretty(&output)?)
}
