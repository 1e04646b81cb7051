use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::GenError;

pub const CONFIG_VERSION: u32 = 1;

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct GenConfig {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default = "default_output_root")]
    pub output_root: PathBuf,
    #[serde(default = "default_map_name")]
    pub map_name: String,
    #[serde(default = "default_start_map")]
    pub start_map: String,
    #[serde(default = "default_pak_name")]
    pub pak_name: String,
}

fn default_version() -> u32 {
    CONFIG_VERSION
}

fn default_output_root() -> PathBuf {
    PathBuf::from("carnifex")
}

fn default_map_name() -> String {
    "e1m1".to_string()
}

fn default_start_map() -> String {
    "start".to_string()
}

fn default_pak_name() -> String {
    "pak0.pak".to_string()
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            output_root: default_output_root(),
            map_name: default_map_name(),
            start_map: default_start_map(),
            pak_name: default_pak_name(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct ConfigValidation {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ConfigValidation {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

impl GenConfig {
    pub fn parse_toml(text: &str) -> Result<Self, String> {
        toml::from_str(text).map_err(|err| err.to_string())
    }

    pub fn load(path: &Path) -> Result<Self, GenError> {
        let text = fs::read_to_string(path).map_err(|err| GenError::io(path, err))?;
        Self::parse_toml(&text)
            .map_err(|err| GenError::Config(format!("{}: {}", path.display(), err)))
    }

    pub fn map_path(&self) -> String {
        format!("maps/{}.bsp", self.map_name)
    }

    pub fn start_map_path(&self) -> String {
        format!("maps/{}.bsp", self.start_map)
    }

    pub fn validate(&self) -> ConfigValidation {
        let mut validation = ConfigValidation::default();
        if self.version != CONFIG_VERSION {
            validation
                .errors
                .push(format!("unsupported config version {}", self.version));
        }
        if self.output_root.as_os_str().is_empty() {
            validation
                .errors
                .push("output_root must not be empty".to_string());
        }
        for (field, value) in [
            ("map_name", &self.map_name),
            ("start_map", &self.start_map),
        ] {
            if !is_plain_name(value) {
                validation.errors.push(format!(
                    "{} must be a plain file stem, got {:?}",
                    field, value
                ));
            }
        }
        if self.map_name == self.start_map {
            validation
                .errors
                .push("start_map must differ from map_name".to_string());
        }
        if !is_plain_name(self.pak_name.trim_end_matches(".pak")) {
            validation
                .errors
                .push(format!("pak_name must be a plain file name, got {:?}", self.pak_name));
        } else if !self.pak_name.ends_with(".pak") {
            validation
                .warnings
                .push(format!("pak_name {:?} has no .pak extension", self.pak_name));
        }
        validation
    }
}

fn is_plain_name(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let config = GenConfig::parse_toml("").expect("parse");
        assert_eq!(config, GenConfig::default());
        assert_eq!(config.map_path(), "maps/e1m1.bsp");
        assert_eq!(config.start_map_path(), "maps/start.bsp");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn overrides_are_read() {
        let text = r#"
version = 1
output_root = "build/id1"
map_name = "dm1"
start_map = "intro"
pak_name = "pak1.pak"
"#;
        let config = GenConfig::parse_toml(text).expect("parse");
        assert_eq!(config.output_root, PathBuf::from("build/id1"));
        assert_eq!(config.map_path(), "maps/dm1.bsp");
        assert_eq!(config.start_map_path(), "maps/intro.bsp");
        let validation = config.validate();
        assert!(validation.is_ok(), "{:?}", validation.errors);
        assert!(validation.warnings.is_empty());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(GenConfig::parse_toml("colour = 3").is_err());
    }

    #[test]
    fn validation_catches_bad_names() {
        let config = GenConfig {
            version: 2,
            map_name: "../e1m1".to_string(),
            start_map: "start".to_string(),
            pak_name: "bundle".to_string(),
            ..GenConfig::default()
        };
        let validation = config.validate();
        assert!(!validation.is_ok());
        assert_eq!(validation.errors.len(), 2);
        assert_eq!(validation.warnings.len(), 1);
    }

    #[test]
    fn start_map_must_differ() {
        let config = GenConfig {
            start_map: "e1m1".to_string(),
            ..GenConfig::default()
        };
        assert!(!config.validate().is_ok());
    }
}
