#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;

use clap::Parser;
use eyre::{Context, Result};

use crate::config::{self, Configuration, load_configuration, lookup_config_path};

#[derive(Debug, Parser)]
#[command(
    version,
    about,
    long_about = r#"A terminal task board seeded from a demo todo API

Default configuration file location looks up in the following order:
    * $XDG_CONFIG_HOME/taskboard/config.toml
    * $HOME/.config/taskboard/config.toml
    * $HOME/.taskboard.toml
"#,
    disable_version_flag = true
)]
pub struct Command {
    /// Configuration file path
    #[arg(short, long, value_name = "PATH")]
    config: Option<String>,

    /// Open the task list directly
    #[arg(long)]
    skip_home: bool,

    /// Start with an empty board instead of fetching demo tasks
    #[arg(long)]
    offline: bool,

    /// Show the version
    #[arg(short, long)]
    version: bool,
}

impl Command {
    pub fn new() -> Command {
        Self::parse()
    }

    /// Loads the configuration file and applies the command line overrides.
    pub fn get_config(&self) -> Result<Configuration> {
        let config_path = self
            .config
            .clone()
            .unwrap_or_else(|| lookup_config_path().unwrap_or_default());

        let mut config = if config_path.is_empty() {
            Configuration::default()
        } else {
            load_configuration(config_path.as_str()).wrap_err("loading configuration")?
        };

        if self.skip_home {
            config.general.skip_home = true;
        }
        if self.offline {
            config.seed.enabled = false;
        }
        Ok(config)
    }

    pub fn version(&self) -> bool {
        self.version
    }

    pub fn print_version(&self) {
        println!("{}", config::version())
    }
}

impl Default for Command {
    fn default() -> Self {
        Self::new()
    }
}
