//! flowchart-ascii CLI entry point.

use std::fs;
use std::io::{self, Read, Write};
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use flowchart_ascii::{Direction, RenderConfig, render_or_source, render_to_string};

/// Flowchart source to ASCII/Unicode diagram output.
#[derive(Parser, Debug)]
#[command(
    name = "flowchart-ascii",
    version = env!("FLOWCHART_ASCII_VERSION"),
    about = "Flowchart source to ASCII/Unicode diagram output"
)]
struct Cli {
    /// Input file (reads from stdin if not provided)
    input: Option<String>,

    /// Use plain ASCII instead of Unicode box-drawing characters
    #[arg(short = 'a', long = "ascii")]
    use_ascii: bool,

    /// Override direction (LR, RL, TB, BT)
    #[arg(short = 'd', long = "direction")]
    direction: Option<Direction>,

    /// Blank columns between a node border and its label
    #[arg(short = 'p', long = "padding", default_value = "1")]
    padding: usize,

    /// Write output to this file instead of stdout
    #[arg(short = 'o', long = "output")]
    output: Option<String>,

    /// On a render error, print the source unchanged and exit successfully
    #[arg(long = "fallback")]
    fallback: bool,

    /// Log pipeline details to stderr
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with_writer(io::stderr)
        .without_time()
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Read input from file or stdin
    let text = if let Some(ref path) = cli.input {
        match fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("error: cannot read '{}': {}", path, e);
                process::exit(1);
            }
        }
    } else {
        let mut buf = String::new();
        if let Err(e) = io::stdin().read_to_string(&mut buf) {
            eprintln!("error: cannot read stdin: {}", e);
            process::exit(1);
        }
        buf
    };

    let base = if cli.use_ascii {
        RenderConfig::ascii()
    } else {
        RenderConfig::default()
    };
    let mut config = base.with_padding(cli.padding);
    if let Some(direction) = cli.direction {
        config = config.with_direction(direction);
    }

    let rendered = if cli.fallback {
        let mut out = render_or_source(&text, &config).join("\n");
        out.push('\n');
        out
    } else {
        match render_to_string(&text, &config) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("error: {}", e);
                process::exit(1);
            }
        }
    };

    // Write output to file or stdout
    if let Some(ref path) = cli.output {
        if let Err(e) = fs::write(path, rendered) {
            eprintln!("error: cannot write '{}': {}", path, e);
            process::exit(1);
        }
    } else {
        print!("{}", rendered);
        if let Err(e) = io::stdout().flush() {
            eprintln!("error: cannot flush stdout: {}", e);
            process::exit(1);
        }
    }
}
