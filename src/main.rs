//! Domain Alterations - command line front end
//!
//! Reads discovered names from the arguments (or stdin) and prints every
//! alteration produced by the enabled techniques, one name per line.

use anyhow::{bail, Context};
use domain_alterations::{Alteration, AlterationConfig, AlterationPipeline};
use indicatif::{ProgressBar, ProgressStyle};
use std::env;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

const BATCH_SIZE: usize = 100;

/// Parsed command line
#[derive(Debug, Default)]
struct CliOptions {
    names: Vec<String>,
    config: Option<PathBuf>,
    wordlist: Option<PathBuf>,
    min_flip: Option<u64>,
    edit_distance: Option<usize>,
    only: Option<Vec<Alteration>>,
    json: bool,
    verbose: bool,
    help: bool,
}

#[tokio::main]
async fn main() {
    // Initialize the library
    if let Err(e) = domain_alterations::init() {
        eprintln!("❌ Failed to initialize: {}", e);
        process::exit(1);
    }

    let args: Vec<String> = env::args().skip(1).collect();
    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("❌ {:#}\n💡 Use --help for usage information", e);
            process::exit(2);
        }
    };

    if options.help {
        print_help();
        return;
    }

    init_tracing(options.verbose);

    if let Err(e) = run(options).await {
        eprintln!("❌ Error: {:#}", e);
        process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "info" } else { "error" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn parse_args(args: &[String]) -> anyhow::Result<CliOptions> {
    let mut options = CliOptions::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => options.help = true,
            "-v" | "--verbose" => options.verbose = true,
            "--json" => options.json = true,
            "-c" | "--config" => {
                options.config = Some(PathBuf::from(flag_value(&mut iter, arg)?));
            }
            "-w" | "--wordlist" => {
                options.wordlist = Some(PathBuf::from(flag_value(&mut iter, arg)?));
            }
            "--min-flip" => {
                let value = flag_value(&mut iter, arg)?;
                options.min_flip = Some(
                    value
                        .parse()
                        .with_context(|| format!("Invalid --min-flip value '{}'", value))?,
                );
            }
            "-d" | "--edit-distance" => {
                let value = flag_value(&mut iter, arg)?;
                options.edit_distance = Some(
                    value
                        .parse()
                        .with_context(|| format!("Invalid --edit-distance value '{}'", value))?,
                );
            }
            "--only" => {
                let value = flag_value(&mut iter, arg)?;
                let only = value
                    .split(',')
                    .filter(|s| !s.trim().is_empty())
                    .map(str::parse)
                    .collect::<domain_alterations::Result<Vec<Alteration>>>()?;
                options.only = Some(only);
            }
            flag if flag.starts_with('-') && flag.len() > 1 => {
                bail!("Unknown option '{}'", flag);
            }
            name => options.names.push(name.to_string()),
        }
    }

    Ok(options)
}

fn flag_value<'a>(iter: &mut std::slice::Iter<'a, String>, flag: &str) -> anyhow::Result<&'a str> {
    iter.next()
        .map(String::as_str)
        .with_context(|| format!("Option '{}' needs a value", flag))
}

/// Read names from stdin, one per line
fn read_stdin_names() -> anyhow::Result<Vec<String>> {
    let stdin = io::stdin();
    let mut names = Vec::new();
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read names from stdin")?;
        names.push(line);
    }
    Ok(names)
}

fn normalize_names(raw: Vec<String>) -> Vec<String> {
    raw.into_iter()
        .map(|name| name.trim().trim_end_matches('.').to_lowercase())
        .filter(|name| !name.is_empty())
        .collect()
}

async fn run(options: CliOptions) -> anyhow::Result<()> {
    let mut config = match &options.config {
        Some(path) => AlterationConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => AlterationConfig::from_env()?,
    };

    if let Some(wordlist) = options.wordlist {
        config.wordlist = Some(wordlist);
    }
    if let Some(min) = options.min_flip {
        config.min_for_word_flip = min;
    }
    if let Some(distance) = options.edit_distance {
        config.edit_distance = distance;
    }

    let raw = if options.names.is_empty() {
        read_stdin_names()?
    } else {
        options.names
    };
    let names = normalize_names(raw);
    if names.is_empty() {
        bail!("No names given on the command line or stdin");
    }

    let mut pipeline = AlterationPipeline::from_config(&config)?;
    if let Some(only) = options.only {
        pipeline = AlterationPipeline::new(Arc::clone(pipeline.state()), only, config.concurrency);
    }

    let progress = ProgressBar::new(names.len() as u64);
    progress.set_style(
        ProgressStyle::with_template("{spinner} [{bar:40}] {pos}/{len} names ({elapsed})")
            .context("Invalid progress template")?
            .progress_chars("=>-"),
    );

    let report = pipeline
        .run(&names, BATCH_SIZE, |done, _| progress.set_position(done as u64))
        .await;
    progress.finish_and_clear();

    for failed in &report.failed {
        eprintln!("{}", failed.error.user_message());
    }

    let metrics = pipeline.metrics_snapshot();
    tracing::info!(
        names_processed = %metrics.names_processed,
        names_generated = %metrics.names_generated,
        names_rejected = %metrics.names_rejected,
        unique_names = %report.names.len(),
        "Alteration run completed"
    );

    if report.failed.len() == report.processed {
        bail!("None of the {} input name(s) could be altered", report.processed);
    }

    let generated = report.names.export_sorted();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    if options.json {
        serde_json::to_writer_pretty(&mut out, &generated).context("Failed to write JSON output")?;
        writeln!(out)?;
    } else {
        for name in &generated {
            writeln!(out, "{}", name)?;
        }
    }
    out.flush()?;

    Ok(())
}

/// Print help information
fn print_help() {
    println!("🔀 Domain Alterations - name permutations for subdomain discovery");
    println!("═══════════════════════════════════════════════════════════════");
    println!();
    println!("USAGE:");
    println!("    domain-alter [OPTIONS] [NAME...]");
    println!("    cat names.txt | domain-alter [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -c, --config <FILE>         JSON configuration file");
    println!("    -w, --wordlist <FILE>       Seed vocabulary, one word per line");
    println!("        --min-flip <N>          Minimum word count for flips and appends");
    println!("    -d, --edit-distance <N>     Fuzzy search rounds (0 disables)");
    println!("        --only <LIST>           Comma separated techniques to run:");
    println!("                                flip_words, flip_numbers, append_numbers,");
    println!("                                add_suffix_word, add_prefix_word, fuzzy_label_search");
    println!("        --json                  Print a JSON array instead of lines");
    println!("    -v, --verbose               Log progress to stderr");
    println!("    -h, --help                  Show this help");
    println!();
    println!("ENVIRONMENT VARIABLES:");
    println!("    ALTERATIONS_MIN_FOR_WORD_FLIP   default: 3");
    println!("    ALTERATIONS_EDIT_DISTANCE       default: 1");
    println!("    ALTERATIONS_FLIP_WORDS          default: true");
    println!("    ALTERATIONS_FLIP_NUMBERS        default: true");
    println!("    ALTERATIONS_ADD_WORDS           default: true");
    println!("    ALTERATIONS_ADD_NUMBERS         default: true");
    println!("    ALTERATIONS_WORDLIST            built-in list when unset");
    println!("    ALTERATIONS_CONCURRENCY         default: 20");
    println!("    RUST_LOG                        log filter, e.g. domain_alterations=debug");
}
