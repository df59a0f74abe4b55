use crate::config::{self, ConfigError};
use clap::{Parser, Subcommand};
use folio_core::SectionId;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "folio", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Read configuration from this file instead of the default location
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Do not observe the viewport; every section is shown straight away
    #[arg(long)]
    pub no_observer: bool,

    /// Scroll to this section (home, skills, services, projects, contact) once laid out
    #[arg(short = 's', long)]
    pub section: Option<SectionId>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write the default configuration file and print its path
    InitConfig,
}

impl Cli {
    /// Absolute path of the config file; the watcher compares it against
    /// the absolute paths `notify` reports.
    pub fn config_path(&self) -> Result<PathBuf, ConfigError> {
        match &self.config {
            Some(path) => Ok(std::path::absolute(path)?),
            None => config::get_config_path(),
        }
    }
}

/// What the window needs from the command line.
#[derive(Debug, Clone)]
pub struct LaunchOptions {
    pub config_path: PathBuf,
    pub observe: bool,
    pub section: Option<SectionId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_section_and_flags() {
        let cli = Cli::try_parse_from(["folio", "--no-observer", "-s", "Projects"]).unwrap();
        assert!(cli.no_observer);
        assert_eq!(cli.section, Some(SectionId::Projects));
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_unknown_section_rejected() {
        let parsed = Cli::try_parse_from(["folio", "--section", "footer"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_explicit_config_path() {
        let cli = Cli::try_parse_from(["folio", "--config", "/tmp/folio.toml"]).unwrap();
        assert_eq!(cli.config_path().unwrap(), PathBuf::from("/tmp/folio.toml"));
    }

    #[test]
    fn test_relative_config_path_made_absolute() {
        let cli = Cli::try_parse_from(["folio", "-c", "folio.toml"]).unwrap();
        let path = cli.config_path().unwrap();
        assert!(path.is_absolute());
        assert_eq!(path, std::env::current_dir().unwrap().join("folio.toml"));
    }

    #[test]
    fn test_init_config_subcommand() {
        let cli = Cli::try_parse_from(["folio", "init-config"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::InitConfig)));
    }
}
