//! Optional TOML configuration for fusetool

use crossworld_fuse::{FuseOptions, Pairing, Rgb};
use serde::Deserialize;
use std::path::Path;

/// Pairing strategy as written in the config file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PairingMode {
    Ordered,
    #[default]
    Shuffled,
}

/// Configuration loaded from an optional TOML file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FuseConfig {
    /// Color treated as empty space
    #[serde(default = "default_background")]
    pub background: [u8; 3],
    #[serde(default)]
    pub pairing: PairingMode,
    /// Seed for shuffled pairing (omitted = random each run)
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_background() -> [u8; 3] {
    [255, 255, 255]
}

impl Default for FuseConfig {
    fn default() -> Self {
        Self {
            background: default_background(),
            pairing: PairingMode::default(),
            seed: None,
        }
    }
}

impl FuseConfig {
    pub fn from_toml(text: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    pub fn to_options(&self) -> FuseOptions {
        let pairing = match (self.pairing, self.seed) {
            (PairingMode::Ordered, _) => Pairing::Ordered,
            (PairingMode::Shuffled, Some(seed)) => Pairing::Seeded(seed),
            (PairingMode::Shuffled, None) => Pairing::Shuffled,
        };
        FuseOptions::default()
            .with_background(Rgb(self.background))
            .with_pairing(pairing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = FuseConfig::from_toml("").unwrap();
        assert_eq!(config, FuseConfig::default());
        assert_eq!(config.to_options(), FuseOptions::default());
    }

    #[test]
    fn test_full_file() {
        let config = FuseConfig::from_toml(
            r#"
            background = [0, 0, 0]
            pairing = "shuffled"
            seed = 42
            "#,
        )
        .unwrap();

        let options = config.to_options();
        assert_eq!(options.background, Rgb::BLACK);
        assert_eq!(options.pairing, Pairing::Seeded(42));
    }

    #[test]
    fn test_ordered_ignores_seed() {
        let config = FuseConfig::from_toml("pairing = \"ordered\"\nseed = 3\n").unwrap();
        assert_eq!(config.to_options().pairing, Pairing::Ordered);
    }

    #[test]
    fn test_rejects_unknown_keys() {
        assert!(FuseConfig::from_toml("colour = [1, 2, 3]").is_err());
        assert!(FuseConfig::from_toml("pairing = \"sideways\"").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("fuse.toml");
        std::fs::write(&path, "pairing = \"ordered\"\nbackground = [0, 0, 0]\n").unwrap();

        let config = FuseConfig::load(&path).unwrap();
        assert_eq!(config.pairing, PairingMode::Ordered);
        assert_eq!(config.to_options().background, Rgb::BLACK);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        assert!(FuseConfig::load(&dir.path().join("absent.toml")).is_err());
    }
}
