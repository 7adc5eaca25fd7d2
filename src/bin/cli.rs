//! CTG Monitor CLI
//!
//! Command-line access to the analysis backend:
//! - List records
//! - Render a record's charts to SVG files
//! - Generate a config file

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use ctg_monitor::client::{AnalysisClient, ClientConfig};
use ctg_monitor::config::{generate_default_config, Config};
use ctg_monitor::dashboard::Series;
use ctg_monitor::render::{LineChart, ZPlane};

#[derive(Parser)]
#[command(name = "ctg-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Fetal heart-rate analysis from the command line")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Analysis backend URL (overrides config)
    #[arg(long, global = true)]
    pub backend_url: Option<String>,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List records available on the backend
    Records,

    /// Fetch a record and write its charts as SVG
    Render {
        /// Record name
        record: String,
        /// Directory for the SVG files
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,
        /// Series to plot (original, filtered)
        #[arg(short, long, default_value = "filtered")]
        series: Series,
        /// Line chart width in pixels
        #[arg(long)]
        width: Option<u32>,
        /// Line chart height in pixels
        #[arg(long)]
        height: Option<u32>,
        /// Pole-zero plot size in pixels
        #[arg(long)]
        plane_size: Option<u32>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load_default();
    if let Some(url) = cli.backend_url {
        config.backend.base_url = url;
    }

    match cli.command {
        Commands::Records => {
            let client = connect(&config)?;
            let records = client.try_list_records().await.with_context(|| {
                format!("Cannot list records from {}", client.config().base_url)
            })?;

            if cli.format == "json" {
                println!("{}", serde_json::to_string_pretty(&records)?);
            } else if records.is_empty() {
                println!("No records available.");
            } else {
                println!("{:<6} {}", "#", "Record");
                println!("{}", "-".repeat(24));
                for (i, record) in records.iter().enumerate() {
                    println!("{:<6} {}", i + 1, record);
                }
            }
        }

        Commands::Render {
            record,
            out_dir,
            series,
            width,
            height,
            plane_size,
        } => {
            check_file_stem(&record)?;

            let client = connect(&config)?;
            let signal = client
                .try_process_signal(&record)
                .await
                .with_context(|| format!("Failed to process record {}", record))?;

            let (original, filtered, coefficients) = signal.into_parts();
            let data = match series {
                Series::Original => original,
                Series::Filtered => filtered,
            };
            if data.is_empty() {
                bail!("Record {} returned no {} samples", record, series);
            }

            let chart = LineChart::new(
                f64::from(width.unwrap_or(config.charts.signal_width)),
                f64::from(height.unwrap_or(config.charts.signal_height)),
            );
            let size = f64::from(plane_size.unwrap_or(config.charts.plane_size));
            let plane = ZPlane::new(size, size);

            std::fs::create_dir_all(&out_dir)
                .with_context(|| format!("Cannot create {}", out_dir.display()))?;

            let signal_path = out_dir.join(format!("{}-signal.svg", record));
            write_file(&signal_path, &chart.render(&data).to_markup())?;

            let plane_path = out_dir.join(format!("{}-zplane.svg", record));
            write_file(&plane_path, &plane.render(&coefficients).to_markup())?;

            if cli.format == "json" {
                let summary = serde_json::json!({
                    "record": record,
                    "series": series,
                    "samples": data.len(),
                    "zeros": coefficients.zeros.len(),
                    "poles": coefficients.poles.len(),
                    "stable": coefficients.is_stable(),
                    "files": [signal_path, plane_path],
                });
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("Record:  {}", record);
                println!("Series:  {} ({} samples)", series.label(), data.len());
                println!(
                    "Filter:  {} zeros, {} poles ({})",
                    coefficients.zeros.len(),
                    coefficients.poles.len(),
                    if coefficients.is_stable() { "stable" } else { "unstable" }
                );
                println!();
                println!("Wrote {}", signal_path.display());
                println!("Wrote {}", plane_path.display());
            }
        }

        Commands::Config { output } => {
            let content = generate_default_config();

            match output {
                Some(path) => {
                    write_file(&path, &content)?;
                    println!("Config written to {}", path.display());
                }
                None => {
                    print!("{}", content);
                }
            }
        }
    }

    Ok(())
}

fn connect(config: &Config) -> anyhow::Result<AnalysisClient> {
    AnalysisClient::new(ClientConfig::from(&config.backend)).context("Failed to build HTTP client")
}

/// A record name becomes part of a file name inside `--out-dir`
fn check_file_stem(record: &str) -> anyhow::Result<()> {
    if record.is_empty() || record == "." || record == ".." {
        bail!("Invalid record name {:?}", record);
    }
    if record.contains(['/', '\\', '\0']) {
        bail!("Record name {:?} must not contain path separators", record);
    }
    Ok(())
}

fn write_file(path: &Path, content: &str) -> anyhow::Result<()> {
    std::fs::write(path, content).with_context(|| format!("Cannot write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_names_stay_inside_out_dir() {
        assert!(check_file_stem("1001").is_ok());
        assert!(check_file_stem("rec-1.a").is_ok());

        assert!(check_file_stem("../x").is_err());
        assert!(check_file_stem("a/b").is_err());
        assert!(check_file_stem("..\\x").is_err());
        assert!(check_file_stem("..").is_err());
        assert!(check_file_stem("").is_err());
    }

    #[test]
    fn test_render_args() {
        let cli = Cli::try_parse_from(["ctg-cli", "render", "1001", "--series", "original"]).unwrap();
        match cli.command {
            Commands::Render { record, series, .. } => {
                assert_eq!(record, "1001");
                assert_eq!(series, Series::Original);
            }
            _ => panic!("expected render"),
        }
    }
}
