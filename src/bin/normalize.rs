//! Line-oriented normalization harness.
//!
//! Reads text from stdin, writes spoken Greek to stdout. `--tagged` prints
//! the structured intermediate form per token instead; `--config FILE`
//! loads a TOML configuration.

use std::io::BufRead;
use std::path::PathBuf;

use anyhow::Context;

use glossa::{Normalizer, NormalizerConfig};

struct Args {
    config: Option<PathBuf>,
    tagged: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    if let Err(e) = run() {
        eprintln!("glossa failed: {e}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let args = parse_args()?;

    let config = match &args.config {
        Some(path) => NormalizerConfig::from_toml_path(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => NormalizerConfig::default(),
    };
    let normalizer = Normalizer::new(config).context("building normalizer")?;

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        if args.tagged {
            let report: Vec<serde_json::Value> = line
                .split_whitespace()
                .map(|token| {
                    let sets: Vec<String> = normalizer
                        .classify(token)
                        .iter()
                        .map(ToString::to_string)
                        .collect();
                    serde_json::json!({ "token": token, "tagged": sets })
                })
                .collect();
            println!("{}", serde_json::to_string(&report)?);
        } else {
            println!("{}", normalizer.normalize_line(&line));
        }
    }
    Ok(())
}

fn parse_args() -> anyhow::Result<Args> {
    let mut args = Args {
        config: None,
        tagged: false,
    };
    let mut argv = std::env::args().skip(1);
    while let Some(arg) = argv.next() {
        match arg.as_str() {
            "--config" => {
                let path = argv.next().context("--config needs a path")?;
                args.config = Some(PathBuf::from(path));
            }
            "--tagged" => args.tagged = true,
            other => anyhow::bail!("unknown argument: {other}"),
        }
    }
    Ok(args)
}
