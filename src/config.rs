use std::path::{Path, PathBuf};

use clap::Parser;
use serde::{Deserialize, Serialize};

/// Command line of the dashboard binary.
#[derive(Debug, Parser)]
#[command(
    name = "admitted-dashboard",
    version,
    about = "Explore the admitted-students table through filters and charts"
)]
pub struct Cli {
    /// Dataset to load (.csv, .json or .parquet); overrides `data_path`
    #[arg(value_name = "DATA")]
    pub data: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, value_name = "FILE", default_value = "dashboard.toml")]
    pub config: PathBuf,

    /// Print the unfiltered dashboard as JSON and exit
    #[arg(long)]
    pub summary: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub data_path: PathBuf,
    pub title: String,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("data/alunos_classificados.csv"),
            title: "Dashboard de Aprovados em Universidades Públicas".to_string(),
            window_width: 1280.0,
            window_height: 860.0,
        }
    }
}

impl Config {
    pub fn load_from_file(file_path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(file_path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Config file if present, defaults otherwise, then command-line overrides.
    pub fn resolve(cli: &Cli) -> anyhow::Result<Self> {
        let mut config = if cli.config.exists() {
            log::info!("Loading configuration from {}", cli.config.display());
            Self::load_from_file(&cli.config)?
        } else {
            log::debug!(
                "No configuration file at {}, using defaults",
                cli.config.display()
            );
            Self::default()
        };

        if let Some(data) = &cli.data {
            config.data_path = data.clone();
        }
        Ok(config)
    }
}
