use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use spool_log::LogFormat as SinkFormat;

use crate::error::SubmitError;

/// Site-wide defaults, loaded from the `[site]` table (§4.G).
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// Root directory under which every peer gets its own spool
    /// subdirectory.
    pub spool_root: PathBuf,
    /// Directory holding `LCK..*` files.
    pub lock_dir: PathBuf,
    /// This host's own public directory, the anchor for local `~`/`~/...`
    /// tokens (§4.A rule 2).
    pub public_dir: PathBuf,
    /// This host's name, written into every execute file's `U` line.
    pub local_host: String,
    /// Default file mode for staged data files, as an octal string
    /// (e.g. `"0666"`).
    #[serde(default = "default_mode_string")]
    pub default_mode: String,
    /// Which of the three on-disk log/stats dialects to use.
    #[serde(default)]
    pub log_format: ConfigLogFormat,
    /// Default grade assigned to a job when the caller supplies none.
    #[serde(default = "default_grade_char")]
    pub default_grade: char,
    /// Whether a peer absent from the `[hosts]` table may still be used,
    /// falling back to `spool_root/<name>` with no site-wide public
    /// directory override.
    #[serde(default)]
    pub unknown_hosts_ok: bool,
}

fn default_mode_string() -> String {
    "0666".to_string()
}

fn default_grade_char() -> char {
    'n'
}

impl SiteConfig {
    /// Parses `self.default_mode` as an octal file mode.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::ConfigInvalid`] if the string is not valid
    /// octal.
    pub fn default_mode(&self) -> Result<u32, SubmitError> {
        u32::from_str_radix(&self.default_mode, 8).map_err(|_| SubmitError::ConfigInvalid {
            detail: format!("default_mode {:?} is not a valid octal mode", self.default_mode),
        })
    }
}

/// The three on-disk log dialects, named the way a config file author
/// would spell them (§4.F); converts to [`spool_log::LogFormat`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigLogFormat {
    #[default]
    Taylor,
    V2,
    Hdb,
}

impl From<ConfigLogFormat> for SinkFormat {
    fn from(value: ConfigLogFormat) -> Self {
        match value {
            ConfigLogFormat::Taylor => SinkFormat::Taylor,
            ConfigLogFormat::V2 => SinkFormat::V2,
            ConfigLogFormat::Hdb => SinkFormat::Hdb,
        }
    }
}

/// One entry of the `[hosts.<name>]` table (§4.G).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HostConfig {
    /// This peer's own public directory, used when resolving a token
    /// destined for its queue. Defaults to `spool_root/<name>/PUBDIR`.
    pub public_dir: Option<PathBuf>,
    /// Grade this peer uses when a job omits one, overriding the site
    /// default.
    pub default_grade: Option<char>,
}

/// The file this crate's `doctor` subcommand and submission pipelines load
/// (§4.G): `[site]` plus zero or more `[hosts.<name>]` tables.
#[derive(Debug, Clone, Deserialize)]
struct ConfigFile {
    site: SiteConfig,
    #[serde(default)]
    hosts: HashMap<String, HostConfig>,
}

/// A resolved peer: its spool directory, public directory, and default
/// grade, with every `Option` in [`HostConfig`] filled from site defaults.
#[derive(Debug, Clone)]
pub struct Host {
    pub name: String,
    pub spool_dir: PathBuf,
    pub public_dir: PathBuf,
    pub default_grade: char,
}

/// The parsed site configuration and host table (§4.G), combining
/// `[site]` with every `[hosts.<name>]` entry.
#[derive(Debug, Clone)]
pub struct SystemTable {
    pub site: SiteConfig,
    hosts: HashMap<String, HostConfig>,
}

impl SystemTable {
    /// Parses a system table from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::ConfigInvalid`] if the text is not valid
    /// TOML or is missing required fields.
    pub fn parse(text: &str) -> Result<Self, SubmitError> {
        let file: ConfigFile = toml::from_str(text).map_err(|source| SubmitError::ConfigInvalid {
            detail: source.to_string(),
        })?;
        Ok(Self {
            site: file.site,
            hosts: file.hosts,
        })
    }

    /// Loads and parses a system table from `path`.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::ConfigInvalid`] if the file cannot be read
    /// or parsed.
    pub fn load(path: &Path) -> Result<Self, SubmitError> {
        let text = std::fs::read_to_string(path).map_err(|source| SubmitError::ConfigInvalid {
            detail: format!("reading {}: {source}", path.display()),
        })?;
        Self::parse(&text)
    }

    /// Resolves `name` to a fully-defaulted [`Host`].
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::UnknownHost`] if `name` is absent from the
    /// host table and `unknown_hosts_ok` is false.
    pub fn host(&self, name: &str) -> Result<Host, SubmitError> {
        match self.hosts.get(name) {
            Some(entry) => Ok(Host {
                name: name.to_string(),
                spool_dir: self.site.spool_root.join(name),
                public_dir: entry
                    .public_dir
                    .clone()
                    .unwrap_or_else(|| self.site.spool_root.join(name).join("PUBDIR")),
                default_grade: entry.default_grade.unwrap_or(self.site.default_grade),
            }),
            None if self.site.unknown_hosts_ok => Ok(Host {
                name: name.to_string(),
                spool_dir: self.site.spool_root.join(name),
                public_dir: self.site.spool_root.join(name).join("PUBDIR"),
                default_grade: self.site.default_grade,
            }),
            None => Err(SubmitError::UnknownHost(name.to_string())),
        }
    }

    /// Every host name explicitly listed in the table, in no particular
    /// order.
    #[must_use]
    pub fn known_hosts(&self) -> Vec<&str> {
        self.hosts.keys().map(String::as_str).collect()
    }
}
