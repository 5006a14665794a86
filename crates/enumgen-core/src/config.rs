//! Configuration schema (enumgen.toml)

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::spec::{ArtifactKind, Namespace};

/// Default config file name, looked up in the project directory
pub const CONFIG_FILE_NAME: &str = "enumgen.toml";

/// Maps a namespace prefix to a source directory (e.g. `App` -> `src`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoloadRule {
    /// Namespace prefix
    pub namespace: String,

    /// Directory, relative to the project root
    pub directory: PathBuf,
}

impl AutoloadRule {
    pub fn new(namespace: impl Into<String>, directory: impl Into<PathBuf>) -> Self {
        Self {
            namespace: namespace.into(),
            directory: directory.into(),
        }
    }

    /// Segments of `namespace` left after this rule's prefix, if it applies
    fn strip<'a>(&self, namespace: &'a Namespace) -> Option<Vec<&'a str>> {
        let prefix: Vec<&str> = self.namespace.split('\\').filter(|s| !s.is_empty()).collect();
        let segments: Vec<&str> = namespace.segments().collect();

        if segments.len() >= prefix.len() && segments[..prefix.len()] == prefix[..] {
            Some(segments[prefix.len()..].to_vec())
        } else {
            None
        }
    }
}

/// Replacement template files
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateOverrides {
    /// Template for the enum file
    #[serde(default, rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_template: Option<PathBuf>,

    /// Template for the type adapter file
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_template: Option<PathBuf>,
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Namespace used when the enum namespace prompt is left blank
    #[serde(default = "default_enum_namespace")]
    pub enum_namespace: String,

    /// Namespace used when the type namespace prompt is left blank
    #[serde(default = "default_type_namespace")]
    pub type_namespace: String,

    /// Fully qualified base class the generated adapters extend
    #[serde(default = "default_base_type")]
    pub base_type: String,

    /// Replace existing files instead of refusing to write
    #[serde(default)]
    pub overwrite: bool,

    /// Namespace to directory mapping
    #[serde(default = "default_autoload")]
    pub autoload: Vec<AutoloadRule>,

    /// Template overrides
    #[serde(default)]
    pub templates: TemplateOverrides,

    /// Project root path (for resolving relative paths)
    #[serde(skip)]
    pub project_root: PathBuf,
}

fn default_enum_namespace() -> String {
    "App\\Enum".to_string()
}

fn default_type_namespace() -> String {
    "App\\Type".to_string()
}

fn default_base_type() -> String {
    "ArtFatal\\DoctrineEnumBundle\\Type\\EnumType".to_string()
}

fn default_autoload() -> Vec<AutoloadRule> {
    vec![AutoloadRule::new("App", "src")]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            enum_namespace: default_enum_namespace(),
            type_namespace: default_type_namespace(),
            base_type: default_base_type(),
            overwrite: false,
            autoload: default_autoload(),
            templates: TemplateOverrides::default(),
            project_root: std::env::current_dir().unwrap_or_default(),
        }
    }
}

impl Config {
    /// Load config from TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::IoError(format!("{}: {}", path.display(), e)))?;

        let mut config = Self::from_toml(&contents)?;

        // Set project root to parent of config file
        if let Some(parent) = path.parent() {
            config.project_root = parent.to_path_buf();
        }

        Ok(config)
    }

    /// Load config from TOML string
    pub fn from_toml(toml: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(toml)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// Load `enumgen.toml` from `project_root`, or fall back to defaults
    pub fn discover(project_root: &Path) -> Result<Self, ConfigError> {
        let path = project_root.join(CONFIG_FILE_NAME);
        if path.exists() {
            Self::from_file(&path)
        } else {
            Ok(Self::default().with_project_root(project_root))
        }
    }

    /// Save config to TOML file
    pub fn save_to_file(&self, path: &Path) -> Result<(), ConfigError> {
        let toml = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::SerializeError(e.to_string()))?;

        std::fs::write(path, toml)
            .map_err(|e| ConfigError::IoError(format!("{}: {}", path.display(), e)))?;

        Ok(())
    }

    pub fn with_project_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.project_root = root.into();
        self
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (key, value) in [
            ("enum_namespace", &self.enum_namespace),
            ("type_namespace", &self.type_namespace),
            ("base_type", &self.base_type),
        ] {
            Namespace::parse(value).map_err(|e| ConfigError::InvalidValue {
                key: key.to_string(),
                message: e.to_string(),
            })?;
        }
        Ok(())
    }

    /// Namespace offered when the enum namespace prompt is left blank
    pub fn default_enum_namespace(&self) -> Result<Namespace, ConfigError> {
        Self::namespace_value("enum_namespace", &self.enum_namespace)
    }

    /// Namespace offered when the type namespace prompt is left blank
    pub fn default_type_namespace(&self) -> Result<Namespace, ConfigError> {
        Self::namespace_value("type_namespace", &self.type_namespace)
    }

    /// Base class reference for generated adapters
    pub fn base_class(&self) -> Result<Namespace, ConfigError> {
        Self::namespace_value("base_type", &self.base_type)
    }

    fn namespace_value(key: &str, value: &str) -> Result<Namespace, ConfigError> {
        Namespace::parse(value).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })
    }

    /// Directory holding the classes of `namespace`.
    ///
    /// The longest matching autoload prefix is replaced by its directory and
    /// remaining segments become subdirectories. Without a match every
    /// segment becomes a directory under the project root.
    pub fn namespace_to_path(&self, namespace: &Namespace) -> PathBuf {
        let matched = self
            .autoload
            .iter()
            .filter_map(|rule| rule.strip(namespace).map(|rest| (rule, rest)))
            .max_by_key(|(_, rest)| std::cmp::Reverse(rest.len()));

        let (mut path, rest) = match matched {
            Some((rule, rest)) => (self.project_root.join(&rule.directory), rest),
            None => (self.project_root.clone(), namespace.segments().collect()),
        };

        for segment in rest {
            path.push(segment);
        }
        path
    }

    /// Read the override template for `kind`, if one is configured
    pub fn read_template(&self, kind: ArtifactKind) -> Result<Option<String>, ConfigError> {
        let configured = match kind {
            ArtifactKind::Enum => &self.templates.enum_template,
            ArtifactKind::Type => &self.templates.type_template,
        };

        let Some(relative) = configured else {
            return Ok(None);
        };

        let path = self.project_root.join(relative);
        std::fs::read_to_string(&path)
            .map(Some)
            .map_err(|e| ConfigError::TemplateError(format!("{}: {}", path.display(), e)))
    }
}

/// Config error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),

    #[error("Invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    #[error("Template error: {0}")]
    TemplateError(String),
}
