// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::config::load_config::{find_in_parent, resolve_config_path};
use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::{env, path::PathBuf};

pub const DEFAULT_CONFIG_NAME: &str = "secret-finder.config.yaml";
pub const ENV_PREFIX: &str = "SECRET_FINDER_";

/// Which k shares of a document feed the solver
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// The first k shares in document order
    #[default]
    FirstK,
    /// The k shares with the smallest x
    SortedByX,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    strategy: Strategy,
    format: OutputFormat,
    print_polynomial: bool,
    /// The file this config was read from, if any
    #[serde(skip)]
    config_file: Option<PathBuf>,
}

impl AppConfig {
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn print_polynomial(&self) -> bool {
        self.print_polynomial
    }

    pub fn config_file(&self) -> Option<&PathBuf> {
        self.config_file.as_ref()
    }
}

/// Values passed on the command line. `None` leaves lower layers untouched.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CliOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy: Option<Strategy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<OutputFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub print_polynomial: Option<bool>,
}

/// Load the config layering defaults, the yaml file, `SECRET_FINDER_*` env vars and cli flags
pub fn load_config(cli_file: Option<PathBuf>, overrides: &CliOverrides) -> Result<AppConfig> {
    let explicit = cli_file.is_some();
    let resolved_config_path = resolve_config_path(
        find_in_parent,      // finding strategy
        env::current_dir()?, // cwd
        DEFAULT_CONFIG_NAME, // hardcoded to secret-finder.config.yaml
        cli_file,            // config file passed on the cli
    );

    let mut figment = Figment::from(Serialized::defaults(AppConfig::default()));

    if let Some(path) = &resolved_config_path {
        if explicit && !path.exists() {
            bail!("Configuration file not found: {}", path.display());
        }
        figment = figment.merge(Yaml::file(path));
    }

    let mut config: AppConfig = figment
        .merge(Env::prefixed(ENV_PREFIX))
        .merge(Serialized::defaults(overrides))
        .extract()
        .context("Could not parse configuration")?;

    config.config_file = resolved_config_path;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_defaults_without_file() {
        Jail::expect_with(|_jail| {
            let config =
                load_config(None, &CliOverrides::default()).map_err(|e| e.to_string())?;
            assert_eq!(config.strategy(), Strategy::FirstK);
            assert_eq!(config.format(), OutputFormat::Text);
            assert!(!config.print_polynomial());
            assert_eq!(config.config_file(), None);
            Ok(())
        });
    }

    #[test]
    fn test_layering() {
        Jail::expect_with(|jail| {
            jail.create_file(
                DEFAULT_CONFIG_NAME,
                r#"
strategy: sorted-by-x
format: json
print_polynomial: true
"#,
            )?;

            let config =
                load_config(None, &CliOverrides::default()).map_err(|e| e.to_string())?;
            assert_eq!(config.strategy(), Strategy::SortedByX);
            assert_eq!(config.format(), OutputFormat::Json);
            assert!(config.print_polynomial());
            assert!(config.config_file().is_some());

            // env overrides the file
            jail.set_env("SECRET_FINDER_FORMAT", "text");
            let config =
                load_config(None, &CliOverrides::default()).map_err(|e| e.to_string())?;
            assert_eq!(config.format(), OutputFormat::Text);
            assert_eq!(config.strategy(), Strategy::SortedByX);

            // cli overrides env and file
            let overrides = CliOverrides {
                strategy: Some(Strategy::FirstK),
                format: Some(OutputFormat::Json),
                print_polynomial: None,
            };
            let config = load_config(None, &overrides).map_err(|e| e.to_string())?;
            assert_eq!(config.strategy(), Strategy::FirstK);
            assert_eq!(config.format(), OutputFormat::Json);
            assert!(config.print_polynomial());
            Ok(())
        });
    }

    #[test]
    fn test_explicit_config_file() {
        Jail::expect_with(|jail| {
            jail.create_file("custom.yaml", "strategy: sorted-by-x")?;

            let config = load_config(Some(PathBuf::from("custom.yaml")), &CliOverrides::default())
                .map_err(|e| e.to_string())?;
            assert_eq!(config.strategy(), Strategy::SortedByX);

            let missing = load_config(Some(PathBuf::from("missing.yaml")), &CliOverrides::default());
            assert!(missing.is_err());
            Ok(())
        });
    }

    #[test]
    fn test_invalid_value_is_rejected() {
        Jail::expect_with(|jail| {
            jail.set_env("SECRET_FINDER_STRATEGY", "random");
            assert!(load_config(None, &CliOverrides::default()).is_err());
            Ok(())
        });
    }
}
