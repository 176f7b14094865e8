//! CLI for Korean text sentiment scoring and mood sorting
//!
//! Usage:
//! ```bash
//! datamood analyze --text "이 영화 정말 너무 재미있었어요"
//! datamood analyze --file reviews.txt --lines
//! datamood sort ./inbox -o ./sorted --report
//! datamood init-config datamood.toml
//! ```

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use datamood::{
    config::{load_config, save_config},
    logging::init_logging,
    sentiment::AnalysisResult,
    AppConfig, MoodSorter, SentimentAnalyzer,
};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "datamood")]
#[command(version)]
#[command(about = "Lexicon based Korean sentiment scoring and file sorting", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (json, toml or yaml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level, overrides the configuration file
    #[arg(short, long, global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a text or a text file
    Analyze {
        /// Text to analyze
        #[arg(short, long, conflicts_with = "file")]
        text: Option<String>,

        /// UTF-8 text file to analyze
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Analyze each non-blank line separately
        #[arg(long)]
        lines: bool,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Sort a file or directory into label directories
    Sort {
        /// Input file or directory
        input: PathBuf,

        /// Output directory
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Move files instead of copying them
        #[arg(long = "move")]
        move_files: bool,

        /// Write a JSON report into the output directory
        #[arg(long)]
        report: bool,
    },

    /// Write the default configuration to a file
    InitConfig {
        /// Destination (json, toml or yaml)
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => AppConfig::default(),
    };
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    init_logging(&config.logging);

    match cli.command {
        Commands::Analyze {
            text,
            file,
            lines,
            json,
        } => run_analyze(&config, text, file, lines, json),
        Commands::Sort {
            input,
            output,
            move_files,
            report,
        } => run_sort(config, input, output, move_files, report),
        Commands::InitConfig { path } => {
            save_config(&AppConfig::default(), &path)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("Wrote default configuration to {}", path.display());
            Ok(())
        }
    }
}

fn run_analyze(
    config: &AppConfig,
    text: Option<String>,
    file: Option<PathBuf>,
    lines: bool,
    json: bool,
) -> Result<()> {
    let analyzer = SentimentAnalyzer::from_config(&config.engine)
        .context("failed to build analyzer")?;

    let text = match (text, file) {
        (Some(text), _) => text,
        (None, Some(path)) => std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        (None, None) => bail!("provide --text or --file"),
    };

    if lines {
        let results = analyzer.analyze_lines(&text);
        if json {
            println!("{}", serde_json::to_string_pretty(&results)?);
        } else {
            for line in &results {
                println!("[line {}]", line.line);
                print_result(&line.result);
                println!();
            }
        }
    } else {
        let result = analyzer.analyze(&text);
        if json {
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            print_result(&result);
        }
    }

    Ok(())
}

fn print_result(result: &AnalysisResult) {
    println!("Text: {}", result.text.trim());
    println!("Tokens: {}", result.tokens.join(" "));
    println!(
        "Label: {} ({})",
        result.label.korean(),
        result.label.as_str()
    );
    println!("Score: {:.2}", result.score);
    println!("Percentage: {:.1}%", result.percentage);
    println!(
        "Sentiment words: {}/{}",
        result.sentiment_word_count, result.total_word_count
    );

    if !result.trace.is_empty() {
        println!("Trace:");
        for line in &result.trace {
            println!("  {line}");
        }
    }
}

fn run_sort(
    mut config: AppConfig,
    input: PathBuf,
    output: Option<PathBuf>,
    move_files: bool,
    report: bool,
) -> Result<()> {
    if let Some(output) = output {
        config.sorter.output_dir = output;
    }
    config.sorter.move_files |= move_files;
    config.sorter.write_report |= report;

    let analyzer = SentimentAnalyzer::from_config(&config.engine)
        .context("failed to build analyzer")?;
    let sorter = MoodSorter::new(analyzer, config.sorter);

    info!(input = %input.display(), "sorting");
    let summary = sorter
        .sort_path(&input)
        .with_context(|| format!("failed to sort {}", input.display()))?;

    println!(
        "Sorted {} file(s) into {}",
        summary.sorted(),
        summary.output_dir.display()
    );
    for (bucket, count) in &summary.counts {
        println!("  {bucket:<20} {count}");
    }
    for failure in &summary.failures {
        eprintln!("  failed: {} ({})", failure.path.display(), failure.error);
    }

    Ok(())
}
