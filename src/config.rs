//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/monotree/monotree.toml`
//! 3. Local config: `<dir>/.monotree.toml` (dir = `-C` or cwd)
//! 4. Explicit config file (`--config` / `MONOTREE_CONFIG`)
//! 5. Environment variables: `MONOTREE_*` prefix

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::{ApplicationError, IoResultExt};
use crate::domain::symbols::is_builtin;
use crate::domain::{SymbolRegistry, SymbolSet, DEFAULT_MARKER, SYMBOL_SET_FANCY};
use crate::util::path::expand_path;

/// A user-defined symbol set. All four glyphs are required.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SymbolSetConfig {
    pub empty: String,
    pub passthrough: String,
    pub junction: String,
    pub terminal: String,
}

impl From<&SymbolSetConfig> for SymbolSet {
    fn from(c: &SymbolSetConfig) -> Self {
        SymbolSet::new(
            c.empty.as_str(),
            c.passthrough.as_str(),
            c.junction.as_str(),
            c.terminal.as_str(),
        )
    }
}

/// Raw settings for intermediate parsing (`None` = not specified in this layer).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub marker: Option<char>,
    pub symbols: Option<String>,
    pub strict_depth: Option<bool>,
    pub skip_blank_lines: Option<bool>,
    pub symbol_sets: Option<BTreeMap<String, SymbolSetConfig>>,
}

/// Unified configuration for monotree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Depth marker character (default: '>')
    pub marker: char,
    /// Symbol set used when a block does not name one (default: "fancy")
    pub symbols: String,
    /// Reject lines nested more than one level below the previous line
    pub strict_depth: bool,
    /// Drop whitespace-only lines instead of failing on them
    pub skip_blank_lines: bool,
    /// Additional named symbol sets
    pub symbol_sets: BTreeMap<String, SymbolSetConfig>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER,
            symbols: SYMBOL_SET_FANCY.to_string(),
            strict_depth: false,
            skip_blank_lines: false,
            symbol_sets: BTreeMap::new(),
        }
    }
}

/// Get the XDG config directory for monotree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "monotree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("monotree.toml"))
}

/// Get the path to the local config file in a directory.
pub fn local_config_path(dir: &Path) -> PathBuf {
    dir.join(".monotree.toml")
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).config_context("read", path)?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Merge overlay config onto self (base).
    ///
    /// - Scalar options: overlay wins if Some, otherwise keep base
    /// - Symbol sets: union by name, overlay wins for the same name
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        let mut symbol_sets = self.symbol_sets.clone();
        if let Some(sets) = &overlay.symbol_sets {
            symbol_sets.extend(sets.iter().map(|(k, v)| (k.clone(), v.clone())));
        }
        Self {
            marker: overlay.marker.unwrap_or(self.marker),
            symbols: overlay
                .symbols
                .clone()
                .unwrap_or_else(|| self.symbols.clone()),
            strict_depth: overlay.strict_depth.unwrap_or(self.strict_depth),
            skip_blank_lines: overlay.skip_blank_lines.unwrap_or(self.skip_blank_lines),
            symbol_sets,
        }
    }

    fn merge_file(self, path: &Path) -> Result<Self, ApplicationError> {
        debug!("config: merging {}", path.display());
        let raw = load_raw_settings(path)?;
        Ok(self.merge_with(&raw))
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `local_dir` - Directory searched for `.monotree.toml`
    /// * `explicit` - Config file given on the command line; must exist
    pub fn load(local_dir: Option<&Path>, explicit: Option<&Path>) -> Result<Self, ApplicationError> {
        Self::load_with_env(local_dir, explicit, default_environment())
    }

    /// Same as [`Settings::load`] with a caller-supplied environment source.
    pub fn load_with_env(
        local_dir: Option<&Path>,
        explicit: Option<&Path>,
        env: Environment,
    ) -> Result<Self, ApplicationError> {
        Self::load_layers(global_config_path().as_deref(), local_dir, explicit, env)
    }

    /// Load every layer from explicit locations.
    ///
    /// `global` is skipped when `None` or missing, like the XDG file in [`Settings::load`].
    pub fn load_layers(
        global: Option<&Path>,
        local_dir: Option<&Path>,
        explicit: Option<&Path>,
        env: Environment,
    ) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global {
            if global_path.exists() {
                current = current.merge_file(global_path)?;
            }
        }

        if let Some(dir) = local_dir {
            let local_path = local_config_path(dir);
            if local_path.exists() {
                current = current.merge_file(&local_path)?;
            }
        }

        if let Some(path) = explicit {
            let path = expand_path(path);
            if !path.is_file() {
                return Err(ApplicationError::Config {
                    message: format!("config file not found: {}", path.display()),
                });
            }
            current = current.merge_file(&path)?;
        }

        current = Self::apply_env_overrides(current, env)?;
        current.validate()?;
        Ok(current)
    }

    /// Apply MONOTREE_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self, env: Environment) -> Result<Self, ApplicationError> {
        let config = Config::builder().add_source(env).build().map_err(config_err)?;

        if let Ok(val) = config.get_string("marker") {
            settings.marker = single_char(&val)?;
        }
        if let Ok(val) = config.get_string("symbols") {
            settings.symbols = val;
        }
        if let Some(val) = env_bool(&config, "strict_depth")? {
            settings.strict_depth = val;
        }
        if let Some(val) = env_bool(&config, "skip_blank_lines")? {
            settings.skip_blank_lines = val;
        }

        Ok(settings)
    }

    /// Reject configured sets that would shadow a built-in one.
    fn validate(&self) -> Result<(), ApplicationError> {
        if let Some(name) = self.symbol_sets.keys().find(|name| is_builtin(name)) {
            return Err(ApplicationError::Config {
                message: format!("symbol set '{}' redefines a built-in set", name),
            });
        }
        Ok(())
    }

    /// Registry of built-in sets plus the configured ones.
    pub fn symbol_registry(&self) -> Result<SymbolRegistry, ApplicationError> {
        self.validate()?;
        Ok(self
            .symbol_sets
            .iter()
            .fold(SymbolRegistry::builtin(), |registry, (name, set)| {
                registry.with_set(name.as_str(), SymbolSet::from(set))
            }))
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# monotree configuration
#
# Locations (by precedence, lowest to highest):
#   Global:   ~/.config/monotree/monotree.toml
#   Local:    <dir>/.monotree.toml
#   Explicit: --config FILE or MONOTREE_CONFIG
#   Env:      MONOTREE_MARKER, MONOTREE_SYMBOLS,
#             MONOTREE_STRICT_DEPTH, MONOTREE_SKIP_BLANK_LINES

# Character that marks depth, repeated once per level ("> root", ">> child")
# marker = ">"

# Symbol set used when a block does not choose one (fancy, simple, or a set below)
# symbols = "fancy"

# Reject lines nested more than one level below the previous line
# strict_depth = false

# Drop whitespace-only lines instead of failing on them
# skip_blank_lines = false

# Additional symbol sets; all four glyphs are required
# [symbol_sets.rounded]
# empty = "    "
# passthrough = "│   "
# junction = "├── "
# terminal = "╰── "
"#
        .to_string()
    }
}

/// Environment source for MONOTREE_* variables.
pub fn default_environment() -> Environment {
    Environment::with_prefix("MONOTREE")
        .prefix_separator("_")
        .separator("__")
}

fn single_char(val: &str) -> Result<char, ApplicationError> {
    let mut chars = val.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(ApplicationError::Config {
            message: format!("marker must be a single character, got {:?}", val),
        }),
    }
}

/// A boolean env override; absent is `None`, unparsable is an error.
fn env_bool(config: &Config, key: &str) -> Result<Option<bool>, ApplicationError> {
    match config.get_bool(key) {
        Ok(val) => Ok(Some(val)),
        Err(ConfigError::NotFound(_)) => Ok(None),
        Err(e) => Err(ApplicationError::Config {
            message: format!("MONOTREE_{}: {}", key.to_uppercase(), e),
        }),
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn env_from(pairs: &[(&str, &str)]) -> Environment {
        let source: config::Map<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        default_environment().source(Some(source))
    }

    fn rounded() -> SymbolSetConfig {
        SymbolSetConfig {
            empty: "    ".to_string(),
            passthrough: "│   ".to_string(),
            junction: "├── ".to_string(),
            terminal: "╰── ".to_string(),
        }
    }

    #[test]
    fn given_defaults_when_created_then_uses_fancy_and_angle_marker() {
        let settings = Settings::default();
        assert_eq!(settings.marker, '>');
        assert_eq!(settings.symbols, "fancy");
        assert!(!settings.strict_depth);
        assert!(!settings.skip_blank_lines);
        assert!(settings.symbol_sets.is_empty());
    }

    #[test]
    fn given_overlay_when_merging_then_specified_scalars_win() {
        let overlay = RawSettings {
            marker: Some('*'),
            strict_depth: Some(true),
            ..Default::default()
        };

        let merged = Settings::default().merge_with(&overlay);

        assert_eq!(merged.marker, '*');
        assert!(merged.strict_depth);
        assert_eq!(merged.symbols, "fancy");
        assert!(!merged.skip_blank_lines);
    }

    #[test]
    fn given_symbol_sets_in_two_layers_when_merging_then_union_by_name() {
        let mut base = Settings::default();
        base.symbol_sets.insert("rounded".into(), rounded());
        base.symbol_sets.insert("dots".into(), rounded());

        let mut dots = rounded();
        dots.empty = "....".into();
        let overlay = RawSettings {
            symbol_sets: Some([("dots".to_string(), dots.clone())].into_iter().collect()),
            ..Default::default()
        };

        let merged = base.merge_with(&overlay);

        assert_eq!(merged.symbol_sets.len(), 2);
        assert_eq!(merged.symbol_sets["dots"], dots);
        assert_eq!(merged.symbol_sets["rounded"], rounded());
    }

    #[test]
    fn given_env_vars_when_applying_overrides_then_replace_values() {
        let env = env_from(&[
            ("MONOTREE_MARKER", "#"),
            ("MONOTREE_SYMBOLS", "simple"),
            ("MONOTREE_STRICT_DEPTH", "true"),
        ]);

        let settings = Settings::apply_env_overrides(Settings::default(), env).unwrap();

        assert_eq!(settings.marker, '#');
        assert_eq!(settings.symbols, "simple");
        assert!(settings.strict_depth);
    }

    #[test]
    fn given_multi_char_marker_env_when_applying_overrides_then_fails() {
        let env = env_from(&[("MONOTREE_MARKER", ">>")]);
        let err = Settings::apply_env_overrides(Settings::default(), env).unwrap_err();
        assert!(err.to_string().contains("single character"), "{err}");
    }

    #[rstest]
    #[case("MONOTREE_STRICT_DEPTH")]
    #[case("MONOTREE_SKIP_BLANK_LINES")]
    fn given_non_bool_env_when_applying_overrides_then_fails(#[case] var: &str) {
        let env = env_from(&[(var, "maybe")]);

        let err = Settings::apply_env_overrides(Settings::default(), env).unwrap_err();

        assert!(matches!(err, ApplicationError::Config { .. }));
        assert!(err.to_string().contains(var), "{err}");
    }

    #[test]
    fn given_set_shadowing_builtin_when_building_registry_then_fails() {
        let mut settings = Settings::default();
        settings.symbol_sets.insert("fancy".into(), rounded());
        assert!(matches!(
            settings.symbol_registry(),
            Err(ApplicationError::Config { .. })
        ));
    }

    #[test]
    fn given_custom_set_when_building_registry_then_resolvable() {
        let mut settings = Settings::default();
        settings.symbol_sets.insert("rounded".into(), rounded());

        let registry = settings.symbol_registry().unwrap();

        assert!(registry.get("rounded").is_some());
        assert!(registry.get("fancy").is_some());
    }

    #[test]
    fn given_template_when_parsed_then_is_valid_toml() {
        let raw: RawSettings = toml::from_str(&Settings::template()).expect("template parses");
        assert!(raw.marker.is_none());
        assert!(raw.symbol_sets.is_none());
    }

    #[test]
    fn given_settings_when_serialized_then_round_trips_through_raw() {
        let mut settings = Settings::default();
        settings.symbol_sets.insert("rounded".into(), rounded());

        let text = settings.to_toml().unwrap();
        let raw: RawSettings = toml::from_str(&text).unwrap();

        assert_eq!(Settings::default().merge_with(&raw), settings);
    }
}
