//! Shared configuration for DNA Center tooling.
//!
//! TOML profiles, credential resolution (env indirection + plaintext), and
//! translation to `dnac_api` connection types. A profile names a
//! controller, its software version, and how to authenticate; [`Config::resolve`]
//! turns one into everything [`dnac_api::ControllerSession`] needs.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use dnac_api::auth::Credentials;
use dnac_api::transport::{TlsMode, TransportConfig};
use dnac_api::version::ControllerVersion;

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("no profile named '{profile}'")]
    UnknownProfile { profile: String },

    #[error("no credentials configured for profile '{profile}'")]
    NoCredentials { profile: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Default profile name.
    pub default_profile: Option<String>,

    /// Global defaults applied when a profile doesn't override them.
    #[serde(default)]
    pub defaults: Defaults,

    /// Named controller profiles.
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: Some("default".into()),
            defaults: Defaults::default(),
            profiles: HashMap::new(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Defaults {
    /// Skip TLS certificate verification. Defaults on: controllers ship
    /// with self-signed certificates.
    #[serde(default = "default_insecure")]
    pub insecure: bool,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            insecure: default_insecure(),
            timeout: default_timeout(),
        }
    }
}

fn default_insecure() -> bool {
    true
}
fn default_timeout() -> u64 {
    5
}

/// A named controller profile.
#[derive(Debug, Deserialize, Serialize)]
pub struct Profile {
    /// Controller base URL (e.g., "https://sandboxdnac.example.com").
    pub controller: String,

    /// Controller software version, e.g. "1.2.8".
    pub version: String,

    /// Username for the token exchange.
    pub username: Option<String>,

    /// Password (plaintext -- prefer `password_env`).
    pub password: Option<String>,

    /// Environment variable holding the password.
    pub password_env: Option<String>,

    /// Pre-acquired auth token (plaintext -- prefer `token_env`).
    pub token: Option<String>,

    /// Environment variable holding an auth token.
    pub token_env: Option<String>,

    /// Path to a custom CA certificate.
    pub ca_cert: Option<PathBuf>,

    /// Override the insecure TLS default.
    pub insecure: Option<bool>,

    /// Override the timeout default (seconds).
    pub timeout: Option<u64>,
}

// ── Resolution ──────────────────────────────────────────────────────

/// Everything needed to open a session from one profile.
#[derive(Debug)]
pub struct ResolvedProfile {
    pub base_url: Url,
    pub version: ControllerVersion,
    pub credentials: Credentials,
    pub transport: TransportConfig,
}

impl Config {
    /// Load from the default path plus `DNAC_*` environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(default_config_path()?)
    }

    /// Load from an explicit TOML path plus environment overrides.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let figment = Figment::new()
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed("DNAC_").split("__"));
        Ok(figment.extract()?)
    }

    /// Write the config out as TOML, creating parent directories.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let rendered = toml::to_string_pretty(self)?;
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, rendered)?;
        Ok(())
    }

    /// The profile used when none is named explicitly.
    pub fn default_profile_name(&self) -> &str {
        self.default_profile.as_deref().unwrap_or("default")
    }

    /// Resolve a profile (or the default) into connection material.
    pub fn resolve(&self, name: Option<&str>) -> Result<ResolvedProfile, ConfigError> {
        let name = name.unwrap_or_else(|| self.default_profile_name());
        let profile = self
            .profiles
            .get(name)
            .ok_or_else(|| ConfigError::UnknownProfile {
                profile: name.into(),
            })?;

        let base_url = Url::parse(&profile.controller).map_err(|e| ConfigError::Validation {
            field: "controller".into(),
            reason: e.to_string(),
        })?;

        let version: ControllerVersion =
            profile
                .version
                .parse()
                .map_err(|e: dnac_api::Error| ConfigError::Validation {
                    field: "version".into(),
                    reason: e.to_string(),
                })?;

        let credentials = resolve_credentials(name, profile)?;

        let tls = match (&profile.ca_cert, profile.insecure.unwrap_or(self.defaults.insecure)) {
            (Some(path), _) => TlsMode::CustomCa(path.clone()),
            (None, true) => TlsMode::DangerAcceptInvalid,
            (None, false) => TlsMode::System,
        };
        let transport = TransportConfig {
            tls,
            timeout: Duration::from_secs(profile.timeout.unwrap_or(self.defaults.timeout)),
        };

        Ok(ResolvedProfile {
            base_url,
            version,
            credentials,
            transport,
        })
    }
}

/// Token (direct, then env) wins over username/password; a profile with
/// neither fails rather than producing an unauthenticated session.
fn resolve_credentials(name: &str, profile: &Profile) -> Result<Credentials, ConfigError> {
    if let Some(token) = secret_value(profile.token.as_deref(), profile.token_env.as_deref()) {
        return Ok(Credentials::Token(token));
    }

    if let Some(username) = &profile.username {
        if let Some(password) =
            secret_value(profile.password.as_deref(), profile.password_env.as_deref())
        {
            return Ok(Credentials::Basic {
                username: username.clone(),
                password,
            });
        }
    }

    Err(ConfigError::NoCredentials {
        profile: name.into(),
    })
}

fn secret_value(direct: Option<&str>, env_var: Option<&str>) -> Option<SecretString> {
    if let Some(value) = direct {
        return Some(SecretString::from(value.to_owned()));
    }
    env_var.and_then(|var| std::env::var(var).ok().map(SecretString::from))
}

/// Platform-appropriate `config.toml` path (e.g. `~/.config/dnac/`).
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let dirs = ProjectDirs::from("", "", "dnac").ok_or_else(|| ConfigError::Validation {
        field: "config_path".into(),
        reason: "could not determine a home directory".into(),
    })?;
    Ok(dirs.config_dir().join("config.toml"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use secrecy::ExposeSecret;

    const SAMPLE: &str = r#"
        default_profile = "lab"

        [defaults]
        timeout = 10

        [profiles.lab]
        controller = "https://dnac.lab.example.com"
        version = "1.2.8"
        username = "admin"
        password = "hunter2"

        [profiles.prod]
        controller = "https://dnac.example.com"
        version = "1.2.8"
        token = "abc123"
        insecure = false
        timeout = 30
    "#;

    fn sample() -> Config {
        Figment::new()
            .merge(Toml::string(SAMPLE))
            .extract()
            .unwrap()
    }

    #[test]
    fn parses_profiles_and_defaults() {
        let config = sample();
        assert_eq!(config.default_profile_name(), "lab");
        assert_eq!(config.profiles.len(), 2);
        assert_eq!(config.defaults.timeout, 10);
        assert!(config.defaults.insecure);
    }

    #[test]
    fn resolves_default_profile_with_basic_credentials() {
        let resolved = sample().resolve(None).unwrap();

        assert_eq!(resolved.base_url.as_str(), "https://dnac.lab.example.com/");
        assert_eq!(resolved.version, ControllerVersion::new(1, 2, 8));
        assert_eq!(resolved.transport.timeout, Duration::from_secs(10));
        assert!(matches!(resolved.transport.tls, TlsMode::DangerAcceptInvalid));

        match resolved.credentials {
            Credentials::Basic { ref username, ref password } => {
                assert_eq!(username, "admin");
                assert_eq!(password.expose_secret(), "hunter2");
            }
            Credentials::Token(_) => panic!("expected basic credentials"),
        }
    }

    #[test]
    fn resolves_token_profile_with_overrides() {
        let resolved = sample().resolve(Some("prod")).unwrap();

        assert_eq!(resolved.transport.timeout, Duration::from_secs(30));
        assert!(matches!(resolved.transport.tls, TlsMode::System));
        assert!(matches!(resolved.credentials, Credentials::Token(_)));
    }

    #[test]
    fn unknown_profile_errors() {
        let err = sample().resolve(Some("nope")).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownProfile { ref profile } if profile == "nope"));
    }

    #[test]
    fn profile_without_credentials_errors() {
        let config: Config = Figment::new()
            .merge(Toml::string(
                r#"
                [profiles.bare]
                controller = "https://dnac.example.com"
                version = "1.2.8"
                "#,
            ))
            .extract()
            .unwrap();

        let err = config.resolve(Some("bare")).unwrap_err();
        assert!(matches!(err, ConfigError::NoCredentials { ref profile } if profile == "bare"));
    }

    #[test]
    fn bad_version_is_a_validation_error() {
        let config: Config = Figment::new()
            .merge(Toml::string(
                r#"
                [profiles.odd]
                controller = "https://dnac.example.com"
                version = "one.two"
                token = "abc"
                "#,
            ))
            .extract()
            .unwrap();

        let err = config.resolve(Some("odd")).unwrap_err();
        assert!(matches!(err, ConfigError::Validation { ref field, .. } if field == "version"));
    }

    #[test]
    fn bad_controller_url_is_a_validation_error() {
        let config: Config = Figment::new()
            .merge(Toml::string(
                r#"
                [profiles.odd]
                controller = "not a url"
                version = "1.2.8"
                token = "abc"
                "#,
            ))
            .extract()
            .unwrap();

        let err = config.resolve(Some("odd")).unwrap_err();
        assert!(matches!(err, ConfigError::Validation { ref field, .. } if field == "controller"));
    }

    #[test]
    fn round_trips_through_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        sample().save_to(&path).unwrap();
        let reloaded = Config::load_from(&path).unwrap();

        assert_eq!(reloaded.default_profile_name(), "lab");
        let resolved = reloaded.resolve(Some("prod")).unwrap();
        assert_eq!(resolved.base_url.as_str(), "https://dnac.example.com/");
        assert!(matches!(resolved.credentials, Credentials::Token(_)));
    }

    #[test]
    fn ca_cert_wins_over_insecure() {
        let config: Config = Figment::new()
            .merge(Toml::string(
                r#"
                [profiles.ca]
                controller = "https://dnac.example.com"
                version = "1.2.8"
                token = "abc"
                ca_cert = "/etc/ssl/dnac.pem"
                insecure = true
                "#,
            ))
            .extract()
            .unwrap();

        let resolved = config.resolve(Some("ca")).unwrap();
        assert!(matches!(resolved.transport.tls, TlsMode::CustomCa(_)));
    }
}
