//! Server configuration
//!
//! Every flag has an environment fallback. The Gemini API key is only read
//! from the environment (`GEMINI_API_KEY`) so it never shows up in process
//! listings.

use clap::Parser;
use lumina_translate::mt::gemini::API_KEY_VAR;
use lumina_translate::mt::{GeminiProvider, MtResult};
use std::net::SocketAddr;
use std::time::Duration;

/// Default request body cap for uploads: 10 MiB
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "lumina-translate-web",
    version,
    about = "Web endpoint translating uploaded documents between English and Indonesian"
)]
pub struct ServerConfig {
    /// Address to listen on
    #[arg(long, env = "LUMINA_BIND", default_value = "127.0.0.1:3000")]
    pub bind: SocketAddr,

    /// Gemini model name
    #[arg(long, env = "GEMINI_MODEL")]
    pub model: Option<String>,

    /// Gemini API root, e.g. a proxy in front of generativelanguage.googleapis.com
    #[arg(long, env = "GEMINI_API_BASE")]
    pub api_base: Option<String>,

    /// Largest accepted request body in bytes
    #[arg(long, env = "LUMINA_MAX_UPLOAD_BYTES", default_value_t = DEFAULT_MAX_UPLOAD_BYTES)]
    pub max_upload_bytes: usize,

    /// Give up on the translation service after this many seconds (unset: wait forever)
    #[arg(long, env = "LUMINA_UPSTREAM_TIMEOUT_SECS")]
    pub upstream_timeout_secs: Option<u64>,
}

impl ServerConfig {
    /// Build the Gemini provider from `GEMINI_API_KEY`
    pub fn gemini_from_env(&self) -> MtResult<GeminiProvider> {
        let api_key = std::env::var(API_KEY_VAR).unwrap_or_default();
        self.gemini(api_key)
    }

    /// Build the Gemini provider with an explicit key, applying the model,
    /// API base and timeout overrides
    pub fn gemini(&self, api_key: String) -> MtResult<GeminiProvider> {
        let timeout = self.upstream_timeout_secs.map(Duration::from_secs);
        let mut provider = GeminiProvider::with_timeout(api_key, timeout)?;
        if let Some(model) = &self.model {
            provider = provider.with_model(model.clone());
        }
        if let Some(api_base) = &self.api_base {
            provider = provider.with_base_url(api_base.clone());
        }
        Ok(provider)
    }
}
