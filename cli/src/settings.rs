//! Game settings, read from an optional TOML file and then overridden from the command line.

use anyhow::Context;
use prospector_core::{Coord, GameConfig, Uses};
use std::fs;
use std::path::Path;

#[derive(clap::Args, Debug, Default)]
pub struct Overrides {
    /// Board width in tiles
    #[arg(long)]
    width: Option<Coord>,

    /// Board height in tiles
    #[arg(long)]
    height: Option<Coord>,

    /// Scans per game
    #[arg(long)]
    scans: Option<Uses>,

    /// Extractions per game
    #[arg(long)]
    extractions: Option<Uses>,
}

impl Overrides {
    fn apply(&self, config: &mut GameConfig) {
        if let Some(width) = self.width {
            config.size.0 = width;
        }
        if let Some(height) = self.height {
            config.size.1 = height;
        }
        if let Some(scans) = self.scans {
            config.max_scans = scans;
        }
        if let Some(extractions) = self.extractions {
            config.max_extractions = extractions;
        }
    }
}

pub fn load(path: Option<&Path>, overrides: &Overrides) -> anyhow::Result<GameConfig> {
    let mut config = match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("could not read {}", path.display()))?;
            parse(&text).with_context(|| format!("invalid settings in {}", path.display()))?
        }
        None => GameConfig::default(),
    };

    overrides.apply(&mut config);
    config.validate()?;
    log::debug!("Settings: {:?}", config);
    Ok(config)
}

pub fn parse(text: &str) -> Result<GameConfig, toml::de::Error> {
    toml::from_str(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use prospector_core::ResourceRange;

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let config = parse("max_scans = 2\n").unwrap();

        assert_eq!(
            config,
            GameConfig {
                max_scans: 2,
                ..GameConfig::default()
            }
        );
    }

    #[test]
    fn parses_full_settings() {
        let text = r#"
            size = [20, 12]
            clusters = [3, 5]
            max_scans = 8
            max_extractions = 4

            [resources]
            min = 100
            max = 900
        "#;

        let config = parse(text).unwrap();

        assert_eq!(config.size, (20, 12));
        assert_eq!(config.clusters, (3, 5));
        assert_eq!(config.resources, ResourceRange::new(100, 900));
        assert_eq!(config.max_extractions, 4);
    }

    #[test]
    fn overrides_win_over_defaults() {
        let overrides = Overrides {
            width: Some(9),
            extractions: Some(1),
            ..Default::default()
        };

        let config = load(None, &overrides).unwrap();

        assert_eq!(config.size, (9, 16));
        assert_eq!(config.max_extractions, 1);
        assert_eq!(config.max_scans, GameConfig::default().max_scans);
    }

    #[test]
    fn overrides_are_validated() {
        let overrides = Overrides {
            width: Some(0),
            ..Default::default()
        };

        assert!(load(None, &overrides).is_err());
    }
}
