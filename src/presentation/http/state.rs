// src/presentation/http/state.rs
use crate::application::{carousel::SlideRotationController, services::ApplicationServices};
use crate::config::AppConfig;
use sha2::{Digest, Sha256};
use std::{path::PathBuf, sync::Arc};

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    pub hero: Arc<SlideRotationController>,
    pub settings: Arc<HttpSettings>,
}

/// Request-handling knobs read once at startup.
#[derive(Debug, Clone, Default)]
pub struct HttpSettings {
    pub maintenance_mode: bool,
    pub admin_token: Option<AdminToken>,
    pub allowed_origins: Vec<String>,
    /// Directory served under `/media`; `None` disables the static route.
    pub media_root: Option<PathBuf>,
    pub upload_max_bytes: usize,
}

impl HttpSettings {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            maintenance_mode: config.maintenance_mode(),
            admin_token: config.admin_api_token().map(AdminToken::new),
            allowed_origins: config.allowed_origins().to_vec(),
            media_root: Some(config.media_root().to_path_buf()),
            upload_max_bytes: config.upload_max_bytes(),
        }
    }
}

/// Admin bearer token, kept only as its SHA-256 digest.
#[derive(Clone)]
pub struct AdminToken([u8; 32]);

impl AdminToken {
    pub fn new(token: &str) -> Self {
        Self(Sha256::digest(token.as_bytes()).into())
    }

    /// Compares digests without short-circuiting on the first differing byte.
    pub fn matches(&self, presented: &str) -> bool {
        let candidate: [u8; 32] = Sha256::digest(presented.as_bytes()).into();
        self.0
            .iter()
            .zip(candidate.iter())
            .fold(0u8, |acc, (a, b)| acc | (a ^ b))
            == 0
    }
}

impl std::fmt::Debug for AdminToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AdminToken(..)")
    }
}
