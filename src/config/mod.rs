//! Configuration management

use anyhow::Result;
use serde::Deserialize;
use std::path::PathBuf;

use crate::contact::DEFAULT_RELAY_ENDPOINT;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub site: SiteConfig,

    #[serde(default)]
    pub contact: ContactConfig,

    #[serde(default)]
    pub assets: AssetsConfig,
}

fn default_port() -> u16 {
    8080
}

/// Content shown on the page
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    pub owner: String,
    pub title: String,
    pub tagline: String,
    /// Address behind the copy-email button
    pub email: String,
    pub about: String,
    pub projects: Vec<ProjectConfig>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            owner: "Your Name".into(),
            title: "Portfolio".into(),
            tagline: "Software developer".into(),
            email: "hello@example.com".into(),
            about: "I build things for the web.".into(),
            projects: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ProjectConfig {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub endpoint: String,
    pub access_key: Option<String>,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_RELAY_ENDPOINT.into(),
            access_key: None,
        }
    }
}

impl ContactConfig {
    /// Access key, if one is set and non-blank
    pub fn access_key(&self) -> Option<&str> {
        self.access_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    /// Directory holding the wasm bundle served under /pkg
    pub pkg_dir: PathBuf,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            pkg_dir: PathBuf::from("./pkg"),
        }
    }
}

/// Get config directory (PORTFOLIO_CONFIG_DIR or platform default)
pub fn get_config_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("PORTFOLIO_CONFIG_DIR") {
        return PathBuf::from(dir);
    }

    #[cfg(target_os = "macos")]
    {
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home).join("Library/Application Support/portfolio-site");
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("portfolio-site");
        }
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home).join(".config/portfolio-site");
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Ok(appdata) = std::env::var("APPDATA") {
            return PathBuf::from(appdata).join("portfolio-site");
        }
    }

    // Fallback to current directory
    PathBuf::from(".")
}

pub fn load_config() -> Result<Config> {
    let config_dir = get_config_dir();

    let mut builder = ::config::Config::builder()
        .set_default("port", default_port() as i64)?
        // Optional config.{toml,json,yaml} in the config dir
        .add_source(
            ::config::File::with_name(&config_dir.join("config").to_string_lossy()).required(false),
        )
        // PORTFOLIO_SITE__OWNER, PORTFOLIO_CONTACT__ACCESS_KEY, ...
        .add_source(
            ::config::Environment::with_prefix("PORTFOLIO")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

    // Port precedence: PORTFOLIO_PORT > PORT > config file > default
    if let Ok(port) = std::env::var("PORTFOLIO_PORT") {
        if let Ok(port_num) = port.parse::<u16>() {
            builder = builder.set_override("port", port_num as i64)?;
        }
    } else if let Ok(port) = std::env::var("PORT") {
        if let Ok(port_num) = port.parse::<u16>() {
            builder = builder.set_override("port", port_num as i64)?;
        }
    }

    let config = builder.build()?;

    Ok(config.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    fn clear_env() {
        for var in [
            "PORTFOLIO_PORT",
            "PORT",
            "PORTFOLIO_SITE__OWNER",
            "PORTFOLIO_CONTACT__ACCESS_KEY",
        ] {
            env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_defaults_without_file_or_env() {
        clear_env();
        env::set_var("PORTFOLIO_CONFIG_DIR", "/tmp/portfolio-test-nonexistent");

        let config = load_config().expect("config should load");

        env::remove_var("PORTFOLIO_CONFIG_DIR");

        assert_eq!(config.port, 8080);
        assert_eq!(config.contact.endpoint, DEFAULT_RELAY_ENDPOINT);
        assert_eq!(config.contact.access_key(), None);
        assert_eq!(config.assets.pkg_dir, PathBuf::from("./pkg"));
        assert!(config.site.projects.is_empty());
    }

    #[test]
    #[serial]
    fn test_port_env_precedence() {
        clear_env();
        env::set_var("PORTFOLIO_CONFIG_DIR", "/tmp/portfolio-test-nonexistent");
        env::set_var("PORT", "9000");

        let legacy = load_config().expect("config should load");

        env::set_var("PORTFOLIO_PORT", "9100");
        let explicit = load_config().expect("config should load");

        clear_env();
        env::remove_var("PORTFOLIO_CONFIG_DIR");

        assert_eq!(legacy.port, 9000);
        assert_eq!(explicit.port, 9100);
    }

    #[test]
    #[serial]
    fn test_config_file_and_env_override() {
        clear_env();
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("config.toml"),
            r#"
port = 3000

[site]
owner = "Ada Lovelace"
email = "ada@example.com"

[[site.projects]]
name = "Engine"
description = "Analytical"
url = "https://example.com/engine"

[contact]
access_key = "from-file"
"#,
        )
        .unwrap();

        env::set_var("PORTFOLIO_CONFIG_DIR", dir.path());
        env::set_var("PORTFOLIO_CONTACT__ACCESS_KEY", "from-env");

        let config = load_config().expect("config should load");

        clear_env();
        env::remove_var("PORTFOLIO_CONFIG_DIR");

        assert_eq!(config.port, 3000);
        assert_eq!(config.site.owner, "Ada Lovelace");
        assert_eq!(config.site.email, "ada@example.com");
        assert_eq!(config.site.title, "Portfolio");
        assert_eq!(config.site.projects.len(), 1);
        assert_eq!(
            config.site.projects[0].url.as_deref(),
            Some("https://example.com/engine")
        );
        assert_eq!(config.contact.access_key(), Some("from-env"));
    }

    #[test]
    #[serial]
    fn test_nested_env_without_file() {
        clear_env();
        env::set_var("PORTFOLIO_CONFIG_DIR", "/tmp/portfolio-test-nonexistent");
        env::set_var("PORTFOLIO_CONTACT__ACCESS_KEY", "env-only-key");
        env::set_var("PORTFOLIO_SITE__OWNER", "Grace Hopper");

        let config = load_config().expect("config should load");

        clear_env();
        env::remove_var("PORTFOLIO_CONFIG_DIR");

        assert_eq!(config.contact.access_key(), Some("env-only-key"));
        assert_eq!(config.site.owner, "Grace Hopper");
        assert_eq!(config.contact.endpoint, DEFAULT_RELAY_ENDPOINT);
    }

    #[test]
    fn test_blank_access_key_is_unset() {
        let contact = ContactConfig {
            access_key: Some("  ".into()),
            ..ContactConfig::default()
        };
        assert_eq!(contact.access_key(), None);
    }
}
