#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::config::cli::{Command, LogFormat};
#[cfg(feature = "cli")]
use crate::config::toml_config::SiteConfig;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "mundialnet")]
#[command(about = "MundialNet plans, speed calculator, coverage and lead forms")]
pub struct CliConfig {
    /// Site configuration file; the built-in content is used when omitted
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 載入網站配置 (檔案或內建)
    pub fn load_site_config(&self) -> Result<SiteConfig> {
        match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading site configuration from: {}", path.display());
                SiteConfig::from_file(path)
            }
            None => {
                tracing::debug!("Using built-in site configuration");
                SiteConfig::builtin()
            }
        }
    }
}
