//! Runtime environment and the closed set of configuration stages.
//!
//! Responsibilities:
//! - Parse the free-form environment token into `Environment`.
//! - Map each environment to the configuration stages it loads.
//! - Derive the filename whitelist from `ConfigStage`.
//!
//! Invariants:
//! - Only `dev` and `test` select an override stage.
//! - `ConfigStage::Base` is always first in a load order.

use std::convert::Infallible;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Serialize;

use crate::constants::{BASE_FILE_STEM, CONFIG_EXTENSIONS, DEV_FILE_STEM, TEST_FILE_STEM};

/// Environment token selected at process start.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Environment {
    Prod,
    Dev,
    Test,
    Other(String),
}

impl Environment {
    pub fn as_str(&self) -> &str {
        match self {
            Environment::Prod => "prod",
            Environment::Dev => "dev",
            Environment::Test => "test",
            Environment::Other(name) => name,
        }
    }

    /// The override stage merged after the base file, if any.
    pub fn override_stage(&self) -> Option<ConfigStage> {
        match self {
            Environment::Dev => Some(ConfigStage::DevOverride),
            Environment::Test => Some(ConfigStage::TestOverride),
            Environment::Prod | Environment::Other(_) => None,
        }
    }

    /// Stages in merge order: base first, then the optional override.
    pub fn load_order(&self) -> Vec<ConfigStage> {
        let mut stages = vec![ConfigStage::Base];
        stages.extend(self.override_stage());
        stages
    }
}

impl From<&str> for Environment {
    fn from(token: &str) -> Self {
        match token {
            "prod" => Environment::Prod,
            "dev" => Environment::Dev,
            "test" => Environment::Test,
            other => Environment::Other(other.to_string()),
        }
    }
}

impl FromStr for Environment {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Environment::from(s))
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One file slot of the three-file convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigStage {
    Base,
    DevOverride,
    TestOverride,
}

impl ConfigStage {
    pub const ALL: [ConfigStage; 3] = [
        ConfigStage::Base,
        ConfigStage::DevOverride,
        ConfigStage::TestOverride,
    ];

    pub fn file_stem(self) -> &'static str {
        match self {
            ConfigStage::Base => BASE_FILE_STEM,
            ConfigStage::DevOverride => DEV_FILE_STEM,
            ConfigStage::TestOverride => TEST_FILE_STEM,
        }
    }

    /// Candidate file names for this stage, in lookup priority order.
    pub fn file_names(self) -> impl Iterator<Item = String> {
        CONFIG_EXTENSIONS
            .into_iter()
            .map(move |ext| format!("{}.{}", self.file_stem(), ext))
    }

    /// Candidate paths for this stage inside `directory`.
    pub fn candidates(self, directory: &Path) -> Vec<PathBuf> {
        self.file_names().map(|name| directory.join(name)).collect()
    }
}

impl fmt::Display for ConfigStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ConfigStage::Base => "base",
            ConfigStage::DevOverride => "dev override",
            ConfigStage::TestOverride => "test override",
        })
    }
}

/// Every file name permitted inside a configuration directory.
pub fn allowed_file_names() -> Vec<String> {
    ConfigStage::ALL
        .into_iter()
        .flat_map(ConfigStage::file_names)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_parsing() {
        assert_eq!(Environment::from("prod"), Environment::Prod);
        assert_eq!(Environment::from("dev"), Environment::Dev);
        assert_eq!(Environment::from("test"), Environment::Test);
        assert_eq!(
            "staging".parse::<Environment>().unwrap(),
            Environment::Other("staging".to_string())
        );
    }

    #[test]
    fn test_environment_tokens_are_case_sensitive() {
        assert_eq!(
            Environment::from("DEV"),
            Environment::Other("DEV".to_string())
        );
        assert_eq!(Environment::from("DEV").override_stage(), None);
    }

    #[test]
    fn test_load_order() {
        assert_eq!(Environment::Prod.load_order(), vec![ConfigStage::Base]);
        assert_eq!(
            Environment::Dev.load_order(),
            vec![ConfigStage::Base, ConfigStage::DevOverride]
        );
        assert_eq!(
            Environment::Test.load_order(),
            vec![ConfigStage::Base, ConfigStage::TestOverride]
        );
        assert_eq!(
            Environment::Other("staging".into()).load_order(),
            vec![ConfigStage::Base]
        );
    }

    #[test]
    fn test_allowed_file_names() {
        assert_eq!(
            allowed_file_names(),
            vec![
                "services.yaml",
                "services.yml",
                "services_dev.yaml",
                "services_dev.yml",
                "services_test.yaml",
                "services_test.yml",
            ]
        );
    }

    #[test]
    fn test_candidates_prefer_yaml() {
        let candidates = ConfigStage::DevOverride.candidates(Path::new("/cfg"));
        assert_eq!(candidates[0], PathBuf::from("/cfg/services_dev.yaml"));
        assert_eq!(candidates[1], PathBuf::from("/cfg/services_dev.yml"));
    }

    #[test]
    fn test_display_round_trips_token() {
        assert_eq!(Environment::Other("qa".into()).to_string(), "qa");
        assert_eq!(Environment::Dev.to_string(), "dev");
    }
}
