use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use glossgen::glossary::site::{DEFAULT_INPUT, DEFAULT_OUTPUT_DIR};
use glossgen::{build_site, LookupPolicy, SiteOptions};
use tracing_subscriber::EnvFilter;

/// Generate a cross-linked HTML glossary from a term file.
#[derive(Parser, Debug)]
#[command(name = "glossgen", version, about)]
struct Cli {
    /// Term file: a term line, its definition lines, then a blank line.
    #[arg(default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Directory receiving index.html and one page per term.
    #[arg(default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Link definition words to terms regardless of letter case.
    #[arg(long)]
    ignore_case: bool,

    /// Encoding of the term file (e.g. utf-8, latin1, gbk). A BOM takes precedence.
    #[arg(long, value_name = "LABEL")]
    encoding: Option<String>,
}

impl From<Cli> for SiteOptions {
    fn from(cli: Cli) -> Self {
        Self {
            input: cli.input,
            output_dir: cli.output_dir,
            policy: if cli.ignore_case {
                LookupPolicy::IgnoreCase
            } else {
                LookupPolicy::ExactCase
            },
            encoding: cli.encoding,
            ..Self::default()
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("glossgen=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let options = SiteOptions::from(Cli::parse());

    match build_site(&options) {
        Ok(report) => {
            for failure in &report.failures {
                eprintln!("Error writing the term file for: {}", failure.term);
                eprintln!("  {}", failure.error);
            }
            if let Some(error) = &report.index_close_error {
                eprintln!("Error closing the files.");
                eprintln!("  {}", error);
            }
            println!("Files created.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error processing the files.");
            eprintln!("  {}", e);
            ExitCode::FAILURE
        }
    }
}
