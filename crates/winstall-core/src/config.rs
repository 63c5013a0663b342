//! Configuration: remote endpoints and pipeline policies.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use url::Url;

/// Where the downloaded installer is persisted before execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstallDir {
    /// Current working directory.
    Cwd,
    /// System temporary directory.
    #[default]
    Temp,
}

impl InstallDir {
    /// Resolve to a concrete directory.
    pub fn resolve(self) -> std::io::Result<PathBuf> {
        match self {
            InstallDir::Cwd => std::env::current_dir(),
            InstallDir::Temp => Ok(std::env::temp_dir()),
        }
    }
}

/// Whether a failed install blocks deletion of the downloaded file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CleanupPolicy {
    /// Best-effort deletion whether or not the install succeeded.
    #[default]
    Always,
    /// Delete only after a successful install; a failed one leaves the
    /// file on disk for inspection.
    OnSuccess,
    /// Never delete (the CLI's `--keep`).
    Never,
}

/// Global configuration loaded from `~/.config/winstall/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WinstallConfig {
    /// Directory URL the installer and its checksum descriptor live under.
    /// Must end with a trailing slash so file names resolve beneath it.
    pub base_url: String,
    /// Installer file name under `base_url`; also the local file name.
    pub installer_name: String,
    /// Checksum descriptor file name under `base_url`.
    pub checksum_name: String,
    /// Where to persist the installer before running it.
    #[serde(default)]
    pub install_dir: InstallDir,
    /// Cleanup behavior after the install step.
    #[serde(default)]
    pub cleanup: CleanupPolicy,
    /// Flags passed to the installer for an unattended run.
    #[serde(default = "default_silent_args")]
    pub silent_args: Vec<String>,
}

fn default_silent_args() -> Vec<String> {
    vec!["/S".to_string(), "/L=1033".to_string()]
}

impl Default for WinstallConfig {
    fn default() -> Self {
        Self {
            base_url: "https://download.videolan.org/pub/videolan/vlc/3.0.21/win64/".to_string(),
            installer_name: "vlc-3.0.21-win64.exe".to_string(),
            checksum_name: "vlc-3.0.21-win64.exe.sha256".to_string(),
            install_dir: InstallDir::default(),
            cleanup: CleanupPolicy::default(),
            silent_args: default_silent_args(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("winstall")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<WinstallConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = WinstallConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: WinstallConfig = toml::from_str(&data)?;
    Ok(cfg)
}

/// Absolute URLs for the two remote resources, resolved from config before
/// the pipeline starts.
#[derive(Debug, Clone)]
pub struct Endpoints {
    pub checksum_url: Url,
    pub installer_url: Url,
}

impl Endpoints {
    pub fn from_config(cfg: &WinstallConfig) -> Result<Self> {
        let base = Url::parse(&cfg.base_url)
            .with_context(|| format!("invalid base_url: {}", cfg.base_url))?;
        let checksum_url = base
            .join(&cfg.checksum_name)
            .with_context(|| format!("invalid checksum_name: {}", cfg.checksum_name))?;
        let installer_url = base
            .join(&cfg.installer_name)
            .with_context(|| format!("invalid installer_name: {}", cfg.installer_name))?;
        Ok(Endpoints {
            checksum_url,
            installer_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = WinstallConfig::default();
        assert!(cfg.base_url.ends_with('/'));
        assert_eq!(cfg.installer_name, "vlc-3.0.21-win64.exe");
        assert_eq!(cfg.checksum_name, "vlc-3.0.21-win64.exe.sha256");
        assert_eq!(cfg.install_dir, InstallDir::Temp);
        assert_eq!(cfg.cleanup, CleanupPolicy::Always);
        assert_eq!(cfg.silent_args, vec!["/S", "/L=1033"]);
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = WinstallConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: WinstallConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.base_url, cfg.base_url);
        assert_eq!(parsed.installer_name, cfg.installer_name);
        assert_eq!(parsed.checksum_name, cfg.checksum_name);
        assert_eq!(parsed.cleanup, cfg.cleanup);
        assert_eq!(parsed.silent_args, cfg.silent_args);
    }

    #[test]
    fn config_toml_policies() {
        let toml = r#"
            base_url = "https://mirror.example.org/vlc/"
            installer_name = "vlc.exe"
            checksum_name = "vlc.exe.sha256"
            install_dir = "cwd"
            cleanup = "on_success"
        "#;
        let cfg: WinstallConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.install_dir, InstallDir::Cwd);
        assert_eq!(cfg.cleanup, CleanupPolicy::OnSuccess);
        // Omitted fields fall back to defaults.
        assert_eq!(cfg.silent_args, vec!["/S", "/L=1033"]);
    }

    #[test]
    fn endpoints_resolve_under_base() {
        let cfg = WinstallConfig::default();
        let eps = Endpoints::from_config(&cfg).unwrap();
        assert_eq!(
            eps.installer_url.as_str(),
            "https://download.videolan.org/pub/videolan/vlc/3.0.21/win64/vlc-3.0.21-win64.exe"
        );
        assert!(eps.checksum_url.as_str().ends_with(".sha256"));
    }

    #[test]
    fn endpoints_reject_bad_base() {
        let cfg = WinstallConfig {
            base_url: "not a url".to_string(),
            ..WinstallConfig::default()
        };
        assert!(Endpoints::from_config(&cfg).is_err());
    }

    #[test]
    fn install_dir_temp_resolves() {
        let dir = InstallDir::Temp.resolve().unwrap();
        assert!(dir.is_dir());
    }
}
