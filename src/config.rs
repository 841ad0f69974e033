//! Environment-driven service configuration

use std::{
    env,
    path::{Path, PathBuf},
};

/// Server configuration for the HTTP listener
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub ip: String,
    pub port: String,
}

impl ServerConfig {
    /// Load server configuration from environment variables
    ///
    /// Environment variables:
    /// - SERVICE_IP: IP address to bind (default: "0.0.0.0")
    /// - SERVICE_PORT: Port to bind (default: "3000")
    pub fn from_env() -> Self {
        let ip = env::var("SERVICE_IP").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("SERVICE_PORT").unwrap_or_else(|_| "3000".to_string());

        Self { ip, port }
    }

    /// Get the bind address as "ip:port"
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,

    /// CATALOG_PATH (default: "data/products.json")
    pub catalog_path: PathBuf,

    /// ASSETS_DIR, or a located `frontend/dist` when unset
    pub assets_dir: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let catalog_path = env::var("CATALOG_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data/products.json"));

        let assets_dir = env::var("ASSETS_DIR").map(PathBuf::from).unwrap_or_else(|_| {
            let current_dir = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
            locate_assets_directory(&current_dir)
        });

        Self {
            server: ServerConfig::from_env(),
            catalog_path,
            assets_dir,
        }
    }
}

/// Relative location of the built frontend
const ASSETS_SUBDIR: &str = "frontend/dist";

/// Attempts to locate the frontend build directory
pub fn locate_assets_directory(current_dir: &Path) -> PathBuf {
    // 1. ./frontend/dist
    // 2. ../frontend/dist (if running from a subdir)
    // 3. Fallback to the relative path

    if current_dir.join(ASSETS_SUBDIR).exists() {
        return current_dir.join(ASSETS_SUBDIR);
    }

    if let Some(parent) = current_dir.parent() {
        if parent.join(ASSETS_SUBDIR).exists() {
            return parent.join(ASSETS_SUBDIR);
        }
    }

    PathBuf::from(ASSETS_SUBDIR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_create_bind_address_from_ip_and_port() {
        let config = ServerConfig {
            ip: "127.0.0.1".to_string(),
            port: "3000".to_string(),
        };

        assert_eq!(config.bind_address(), "127.0.0.1:3000");
    }

    #[test]
    fn should_locate_assets_in_current_dir() {
        let root = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(root.path().join(ASSETS_SUBDIR)).unwrap();

        assert_eq!(
            locate_assets_directory(root.path()),
            root.path().join(ASSETS_SUBDIR)
        );
    }

    #[test]
    fn should_locate_assets_in_parent_dir() {
        let root = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(root.path().join(ASSETS_SUBDIR)).unwrap();
        let nested = root.path().join("server");
        std::fs::create_dir_all(&nested).unwrap();

        assert_eq!(
            locate_assets_directory(&nested),
            root.path().join(ASSETS_SUBDIR)
        );
    }

    #[test]
    fn should_fall_back_to_relative_assets_path() {
        let root = tempfile::tempdir().unwrap();
        let nested = root.path().join("a");
        std::fs::create_dir_all(&nested).unwrap();

        assert_eq!(locate_assets_directory(&nested), PathBuf::from(ASSETS_SUBDIR));
    }
}
