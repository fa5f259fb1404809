//! sitewright: a static content pipeline for a consulting site
//!
//! The pipeline runs leaf to root: an in-memory content store holds the
//! site's posts and submissions, a batch exporter flattens the store into
//! static artifacts, a cached loader reconstitutes typed posts from those
//! artifacts, and a block renderer turns post bodies into display structure.

pub mod commands;
pub mod config;
pub mod contact;
pub mod content;
pub mod export;
pub mod loader;
pub mod server;
pub mod store;

use anyhow::Result;
use std::path::Path;

/// The main application context
#[derive(Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Public (output) directory
    pub public_dir: std::path::PathBuf,
    /// Content root for exported artifacts
    pub content_dir: std::path::PathBuf,
}

impl Site {
    /// Create a new Site instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let public_dir = base_dir.join(&config.public_dir);
        let content_dir = public_dir.join(&config.content_dir);

        Ok(Self {
            config,
            base_dir,
            public_dir,
            content_dir,
        })
    }

    /// Export the static artifact set
    pub fn export(&self) -> Result<()> {
        commands::export::run(self)
    }

    /// Clean the public directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}
