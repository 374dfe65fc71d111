use crate::font::{FontSource, DEFAULT_FONT_PATHS};
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Edge lengths of the iOS app icon set, in pixels
const DEFAULT_SIZES: [u32; 13] = [20, 29, 40, 58, 60, 76, 80, 87, 120, 152, 167, 180, 1024];

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    #[serde(default = "default_icons")]
    pub icons: Vec<IconSpec>,
    /// Font files tried in order before the built-in font
    #[serde(default = "default_fonts")]
    pub fonts: Vec<PathBuf>,
}

/// One output file and the edge length it is rendered at.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct IconSpec {
    pub name: String,
    pub size: u32,
}

impl IconSpec {
    /// Conventional `icon_<W>x<H>.png` entry for a square icon
    pub fn square(size: u32) -> Self {
        IconSpec {
            name: format!("icon_{}x{}.png", size, size),
            size,
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("Assets.xcassets/AppIcon.appiconset")
}

fn default_icons() -> Vec<IconSpec> {
    DEFAULT_SIZES.iter().copied().map(IconSpec::square).collect()
}

fn default_fonts() -> Vec<PathBuf> {
    DEFAULT_FONT_PATHS.iter().map(PathBuf::from).collect()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            output_dir: default_output_dir(),
            icons: default_icons(),
            fonts: default_fonts(),
        }
    }
}

impl Config {
    /// Read, parse and validate a YAML config file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let mut config = Self::from_yaml(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        config.output_dir = expand_home(&config.output_dir)?;
        Ok(config)
    }

    pub fn from_yaml(contents: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.icons.is_empty() {
            bail!("icons must list at least one icon");
        }

        let mut seen = HashSet::new();
        for icon in &self.icons {
            if icon.name.is_empty() {
                bail!("icon name cannot be empty");
            }
            if !icon.name.ends_with(".png") {
                bail!("icon name '{}' must end in .png", icon.name);
            }
            if icon.size == 0 {
                bail!("icon '{}' must have a size greater than 0", icon.name);
            }
            if !seen.insert(icon.name.as_str()) {
                bail!("icon name '{}' is listed more than once", icon.name);
            }
        }

        Ok(())
    }

    /// The configured font files followed by the built-in font.
    pub fn font_sources(&self) -> Vec<FontSource> {
        FontSource::chain(self.fonts.as_slice())
    }
}

/// Replace a leading `~` with the user's home directory.
pub fn expand_home(path: &Path) -> Result<PathBuf> {
    match path.strip_prefix("~") {
        Ok(rest) => {
            let home = dirs::home_dir().context("Failed to get home directory")?;
            Ok(home.join(rest))
        }
        Err(_) => Ok(path.to_path_buf()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table() {
        let config = Config::default();
        assert_eq!(config.icons.len(), 13);
        assert_eq!(config.icons[0], IconSpec::square(20));
        assert_eq!(config.icons[0].name, "icon_20x20.png");
        assert_eq!(config.icons[12].name, "icon_1024x1024.png");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = Config::from_yaml("output_dir: /tmp/icons\n").unwrap();
        assert_eq!(config.output_dir, PathBuf::from("/tmp/icons"));
        assert_eq!(config.icons, Config::default().icons);
        assert_eq!(config.fonts, Config::default().fonts);
    }

    #[test]
    fn test_custom_icons_and_fonts() {
        let yaml = "icons:\n  - name: small.png\n    size: 16\nfonts: []\n";
        let config = Config::from_yaml(yaml).unwrap();
        assert_eq!(config.icons, vec![IconSpec { name: "small.png".to_string(), size: 16 }]);
        assert_eq!(config.font_sources(), vec![FontSource::Builtin]);
    }

    #[test]
    fn test_validate_rejects_bad_tables() {
        let mut config = Config::default();
        config.icons.clear();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.icons[3].size = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.icons.push(IconSpec::square(20));
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.icons[0].name = "icon.jpg".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = Config::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        assert_eq!(Config::from_yaml(&yaml).unwrap(), config);
    }

    #[test]
    fn test_expand_home() {
        let plain = PathBuf::from("/var/icons");
        assert_eq!(expand_home(&plain).unwrap(), plain);

        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home(Path::new("~/icons")).unwrap(), home.join("icons"));
        }
    }
}
