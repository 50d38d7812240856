//! Prints a parsed pom.xml as JSON, or a single property from it.
//!
//! ```text
//! pom-dump <path-to-pom.xml> [property]
//! ```
//!
//! Logging goes to stderr and is controlled by `RUST_LOG` (default `warn`).

use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (path, property) = match args.as_slice() {
        [path] => (path, None),
        [path, property] => (path, Some(property)),
        _ => {
            eprintln!("Usage: pom-dump <path-to-pom.xml> [property]");
            return ExitCode::from(2);
        }
    };

    let project = match pom_parser::parse(path) {
        Ok(project) => project,
        Err(e) => {
            tracing::error!("Failed to parse {}: {}", path, e);
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Some(key) = property {
        return match project.get_property(key) {
            Some(value) => {
                println!("{value}");
                ExitCode::SUCCESS
            }
            None => {
                eprintln!("property '{key}' not found in {path}");
                ExitCode::FAILURE
            }
        };
    }

    match serde_json::to_string_pretty(&project) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
