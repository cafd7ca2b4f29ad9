// SPDX-License-Identifier: PMPL-1.0-or-later
//! Accessweb CLI - web page accessibility auditor

use accessweb::config::{self, Config};
use accessweb::contrast::{ConformanceLevel, ContrastEvaluator};
use accessweb::report::{FileSink, OutputFormat, ReportSink, StdoutSink};
use accessweb::scanner;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Accessibility auditor for HTML pages
#[derive(Parser)]
#[command(name = "accessweb")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Audit an HTML page or a directory of pages
    Audit {
        /// Page or directory to audit
        path: PathBuf,

        /// Contrast conformance level (overrides config)
        #[arg(long)]
        level: Option<LevelArg>,

        /// Output format (overrides config)
        #[arg(long)]
        format: Option<FormatArg>,

        /// Output file (stdout if not specified)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Configuration file
        #[arg(long = "config", default_value = ".accessweb.toml")]
        config_path: PathBuf,

        /// Divide foreground by background luminance without ordering them
        #[arg(long)]
        legacy_ratio: bool,

        /// Enable verbose logging
        #[arg(long, short)]
        verbose: bool,
    },

    /// Evaluate the contrast of one foreground/background pair
    Contrast {
        /// Text color (#rrggbb, #rgb, rgb() or rgba())
        foreground: String,

        /// Background color
        background: String,

        /// Contrast conformance level
        #[arg(long, default_value = "aa-normal")]
        level: LevelArg,

        /// Divide foreground by background luminance without ordering them
        #[arg(long)]
        legacy_ratio: bool,

        /// Enable verbose logging
        #[arg(long, short)]
        verbose: bool,
    },

    /// Write a default configuration file
    InitConfig {
        /// Where to write it
        path: Option<PathBuf>,
    },
}

/// Contrast conformance level CLI argument
#[derive(Debug, Clone, Copy, ValueEnum)]
enum LevelArg {
    /// AA, normal text (4.5:1)
    AaNormal,
    /// AA, large text (3:1)
    AaLarge,
    /// AAA, normal text (7:1)
    AaaNormal,
    /// AAA, large text (4.5:1)
    AaaLarge,
}

impl From<LevelArg> for ConformanceLevel {
    fn from(arg: LevelArg) -> Self {
        match arg {
            LevelArg::AaNormal => ConformanceLevel::AaNormal,
            LevelArg::AaLarge => ConformanceLevel::AaLarge,
            LevelArg::AaaNormal => ConformanceLevel::AaaNormal,
            LevelArg::AaaLarge => ConformanceLevel::AaaLarge,
        }
    }
}

/// Output format CLI argument
#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    /// Human-readable text
    Text,
    /// Structured JSON
    Json,
    /// SARIF for IDE/CI
    Sarif,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Sarif => OutputFormat::Sarif,
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("accessweb=debug")
    } else {
        EnvFilter::new("accessweb=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Audit { path, level, format, output, config_path, legacy_ratio, verbose } => {
            init_logging(verbose);
            let mut config = config::load_config(&config_path)?;
            apply_overrides(&mut config, level, format, legacy_ratio);

            let findings = scanner::scan_path(&path, &config)?;

            let mut sink: Box<dyn ReportSink> = match output {
                Some(p) => Box::new(FileSink::new(p, config.report.format)),
                None => Box::new(StdoutSink { format: config.report.format }),
            };
            sink.accept(&findings)?;

            if findings.has_errors() {
                std::process::exit(1);
            }
        }

        Commands::Contrast { foreground, background, level, legacy_ratio, verbose } => {
            init_logging(verbose);
            let evaluator = ContrastEvaluator::new(level.into())
                .with_strict_normalization(!legacy_ratio);
            let outcome = evaluator.evaluate_str(&foreground, &background)?;

            println!(
                "Foreground: {} (luminance {:.4})",
                outcome.foreground, outcome.foreground_luminance
            );
            println!(
                "Background: {} (luminance {:.4})",
                outcome.background, outcome.background_luminance
            );
            println!("Contrast ratio: {:.2}:1", outcome.ratio);
            println!("Threshold ({}): > {}:1", evaluator.level, outcome.threshold);
            println!("Result: {}", if outcome.passes { "PASS" } else { "FAIL" });

            if !outcome.passes {
                std::process::exit(1);
            }
        }

        Commands::InitConfig { path } => {
            let path = path.unwrap_or_else(config::default_config_path);
            config::write_default_config(&path)?;
            eprintln!("Configuration written to {}", path.display());
        }
    }

    Ok(())
}

/// Command-line flags take precedence over the config file
fn apply_overrides(
    config: &mut Config,
    level: Option<LevelArg>,
    format: Option<FormatArg>,
    legacy_ratio: bool,
) {
    if let Some(level) = level {
        config.contrast.level = level.into();
    }
    if let Some(format) = format {
        config.report.format = format.into();
    }
    if legacy_ratio {
        config.contrast.strict_wcag_normalization = false;
    }
}
