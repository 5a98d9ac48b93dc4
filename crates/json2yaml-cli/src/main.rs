//! `json2yaml` CLI — convert a JSON document to YAML.
//!
//! ## Usage
//!
//! ```sh
//! # openapi.json → openapi.yaml in the current directory
//! json2yaml
//!
//! # Explicit paths
//! json2yaml -i spec.json -o spec.yaml
//!
//! # stdin → stdout
//! cat spec.json | json2yaml -i - -o -
//!
//! # Keys sorted instead of in source order
//! json2yaml --sort-keys
//! ```
//!
//! Diagnostics go to stderr; set `RUST_LOG=json2yaml=debug` to see each step.

use anyhow::{Context, Result};
use clap::Parser;
use json2yaml::{EmitOptions, DEFAULT_INPUT, DEFAULT_OUTPUT};
use std::io::{self, Read, Write};
use std::path::Path;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Path value meaning stdin (for `--input`) or stdout (for `--output`).
const STDIO_PATH: &str = "-";

#[derive(Parser)]
#[command(name = "json2yaml", version, about = "Convert a JSON document to YAML")]
struct Cli {
    /// Input JSON file ("-" reads stdin)
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    input: String,

    /// Output YAML file, overwritten if present ("-" writes stdout)
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: String,

    /// Emit mapping keys sorted instead of in source order
    #[arg(long)]
    sort_keys: bool,
}

impl Cli {
    fn emit_options(&self) -> EmitOptions {
        EmitOptions::default().with_sort_keys(self.sort_keys)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let options = cli.emit_options();
    debug!(?options, input = %cli.input, output = %cli.output, "starting conversion");

    if cli.input != STDIO_PATH && cli.output != STDIO_PATH {
        let summary = json2yaml::convert_file(
            Path::new(&cli.input),
            Path::new(&cli.output),
            &options,
        )
        .with_context(|| format!("Failed to convert {} to YAML", cli.input))?;
        debug!(
            input_bytes = summary.input_bytes,
            output_bytes = summary.output_bytes,
            root = summary.root_kind,
            "conversion finished"
        );
        println!("Conversion completed. YAML file created: {}", cli.output);
        return Ok(());
    }

    let json = read_input(&cli.input)?;
    let yaml = json2yaml::encode_with(&json, &options).context("Failed to encode JSON to YAML")?;
    write_output(&cli.output, &yaml)?;
    if cli.output != STDIO_PATH {
        println!("Conversion completed. YAML file created: {}", cli.output);
    }

    Ok(())
}

fn read_input(path: &str) -> Result<String> {
    if path == STDIO_PATH {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read from stdin")?;
        Ok(buf)
    } else {
        Ok(json2yaml::read_input(Path::new(path))?)
    }
}

fn write_output(path: &str, content: &str) -> Result<()> {
    if path == STDIO_PATH {
        io::stdout()
            .write_all(content.as_bytes())
            .context("Failed to write to stdout")?;
    } else {
        std::fs::write(path, content).with_context(|| format!("Failed to write file: {}", path))?;
    }
    Ok(())
}
