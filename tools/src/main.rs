use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use codec::{DecodeOptions, Limits, VERSION};
use glob::Pattern;
use mti_tools::{
    export_file, format_inspect_pretty, import_file, inspect_bytes, load_placements,
    log_filter_from_env, ImportReport, InspectReport,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(
    name = "mti-tools",
    version,
    about = "Export, import, and inspect MTI placement files"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode a JSON placement list into an MTI file.
    Export {
        /// JSON array of placements.
        input: PathBuf,
        /// Output path (defaults to the input with an `.mti` extension).
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Format version written to the header.
        #[arg(long, default_value_t = VERSION)]
        version: u32,
        /// Seed for `@TYPE(...)` choices, for reproducible output.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Decode an MTI file into source-space positions.
    Import {
        /// Path to the MTI file.
        file: PathBuf,
        /// Reject unknown signatures and versions.
        #[arg(long)]
        strict: bool,
        /// Lift the file-size limit.
        #[arg(long)]
        unlimited: bool,
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
    /// Summarise file structure and contents.
    Inspect {
        /// Path to an MTI file or a directory of them.
        path: PathBuf,
        /// Reject unknown signatures and versions.
        #[arg(long)]
        strict: bool,
        /// Lift the file-size limit.
        #[arg(long)]
        unlimited: bool,
        /// Optional glob filter when inspecting a directory.
        #[arg(long)]
        glob: Option<String>,
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Pretty)]
        format: OutputFormat,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Json,
    Pretty,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter_from_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Export {
            input,
            output,
            version,
            seed,
        } => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };
            let placements = load_placements(&input, &mut rng)?;
            let output = output.unwrap_or_else(|| input.with_extension("mti"));
            let report = export_file(&output, &placements, version)
                .with_context(|| format!("export {}", output.display()))?;
            println!("{}", report.status());
        }
        Command::Import {
            file,
            strict,
            unlimited,
            format,
        } => {
            let report = import_file(&file, &decode_options(strict, unlimited))?;
            match format {
                OutputFormat::Json => {
                    let json = serde_json::to_string_pretty(&report).context("serialize json")?;
                    println!("{json}");
                }
                OutputFormat::Pretty => print_import_report(&report),
            }
        }
        Command::Inspect {
            path,
            strict,
            unlimited,
            glob,
            format,
        } => {
            let options = decode_options(strict, unlimited);
            let files = if path.is_dir() {
                collect_files(&path, glob.as_deref())?
            } else {
                vec![path]
            };
            let many = files.len() > 1;
            for file in files {
                let bytes =
                    fs::read(&file).with_context(|| format!("read file {}", file.display()))?;
                let report = inspect_bytes(&bytes, &options)
                    .with_context(|| format!("inspect {}", file.display()))?;
                if many {
                    println!("== {} ==", file.display());
                }
                print_inspect_report(&report, format)?;
            }
        }
    }
    Ok(())
}

fn decode_options(strict: bool, unlimited: bool) -> DecodeOptions {
    let options = if strict {
        DecodeOptions::strict()
    } else {
        DecodeOptions::lenient()
    };
    if unlimited {
        options.with_limits(Limits::unlimited())
    } else {
        options
    }
}

fn collect_files(dir: &Path, glob: Option<&str>) -> Result<Vec<PathBuf>> {
    let pattern = match glob {
        Some(value) => Some(Pattern::new(value).context("invalid glob pattern")?),
        None => None,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("read dir {}", dir.display()))? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let selected = match &pattern {
            Some(pattern) => {
                pattern.matches_path(&path)
                    || path
                        .file_name()
                        .and_then(|name| name.to_str())
                        .is_some_and(|name| pattern.matches(name))
            }
            None => path.extension().is_some_and(|ext| ext == "mti"),
        };
        if selected {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn print_import_report(report: &ImportReport) {
    println!("{}", report.status());
    for advisory in &report.advisories {
        println!("warning: {advisory}");
    }
    for (index, [x, y, z]) in report.positions.iter().enumerate() {
        println!("  {index:>6}: {x:>12.4} {y:>12.4} {z:>12.4}");
    }
}

fn print_inspect_report(report: &InspectReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(report).context("serialize json")?;
            println!("{json}");
        }
        OutputFormat::Pretty => print!("{}", format_inspect_pretty(report)),
    }
    Ok(())
}
