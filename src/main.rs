// Fri Oct 16 2026 - Alex

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use heap_scanner::{
    utils::init_logger, HeapSnapshot, OutputFormat, Pattern, ScanConfig, TailPolicy,
};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "Scan raw heap snapshots for repeated values and byte patterns", long_about = None)]
struct Args {
    /// Raw heap dump to scan
    snapshot: PathBuf,

    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(long)]
    json: bool,

    /// Wildcards past the end of the heap never match
    #[arg(long)]
    strict_tail: bool,

    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Find runs of a single repeated byte
    Repeat {
        #[arg(value_parser = parse_byte)]
        value: u8,

        #[arg(short, long)]
        run_length: Option<usize>,
    },
    /// Find a byte pattern, e.g. "48 8B ?? 89"
    Pattern {
        pattern: String,
    },
}

#[derive(Serialize)]
struct ScanReport<'a> {
    snapshot: &'a str,
    mode: &'static str,
    match_length: usize,
    count: usize,
    offsets: &'a [usize],
}

fn parse_byte(s: &str) -> Result<u8, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u8::from_str_radix(hex, 16),
        None => s.parse::<u8>(),
    };
    parsed.map_err(|e| format!("'{}' is not a byte value: {}", s, e))
}

/// CLI flags win over the loaded config.
fn apply_overrides(args: &Args, mut config: ScanConfig) -> ScanConfig {
    if args.json {
        config.output_format = OutputFormat::Json;
    }
    if args.strict_tail {
        config.tail_policy = TailPolicy::Strict;
    }
    if let Command::Repeat { run_length: Some(run_length), .. } = &args.command {
        config.run_length = *run_length;
    }
    config
}

/// Scans only log at debug and below, so a verbose config means debug.
fn verbosity(args: &Args, config: &ScanConfig) -> u8 {
    if args.verbose == 0 && config.verbose {
        2
    } else {
        args.verbose
    }
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("{} {:#}", "[!]".red(), e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => ScanConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => ScanConfig::default(),
    };
    let config = apply_overrides(&args, config);
    init_logger(verbosity(&args, &config));

    let snapshot = HeapSnapshot::open(&args.snapshot)
        .with_context(|| format!("failed to open snapshot {}", args.snapshot.display()))?;
    let scanner = snapshot.scanner().with_tail_policy(config.tail_policy);

    let start_time = Instant::now();

    let (mode, match_length, offsets) = match &args.command {
        Command::Repeat { value, .. } => {
            let offsets = scanner.scan_repeating_value(*value, config.run_length)?;
            ("repeat", config.run_length, offsets)
        }
        Command::Pattern { pattern } => {
            let pattern = Pattern::parse(pattern)
                .with_context(|| format!("invalid pattern '{}'", pattern))?;
            let offsets = scanner.scan_pattern(&pattern)?;
            ("pattern", pattern.len(), offsets)
        }
    };

    let elapsed = start_time.elapsed();
    let snapshot_name = args.snapshot.display().to_string();

    match config.output_format {
        OutputFormat::Json => {
            let report = ScanReport {
                snapshot: &snapshot_name,
                mode,
                match_length,
                count: offsets.len(),
                offsets: &offsets,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => {
            println!(
                "{} {} ({} bytes) {} scan, match length {}",
                "[*]".blue(),
                snapshot_name,
                snapshot.len(),
                mode,
                match_length
            );
            for offset in &offsets {
                println!("  0x{:08x}", offset);
            }
            println!(
                "{} {} matches in {:.2}ms",
                "[+]".green(),
                offsets.len().to_string().green(),
                elapsed.as_secs_f64() * 1000.0
            );
        }
    }

    Ok(())
}
