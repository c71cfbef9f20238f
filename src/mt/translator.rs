//! Machine Translation trait
//!
//! This module defines the `MachineTranslator` trait for provider abstraction,
//! so the web endpoint and the CLI can run against Gemini, a mock, or any
//! other backend without knowing which one they hold.
//!
//! # Example
//!
//! ```ignore
//! use lumina_translate::mt::{Direction, GeminiProvider, MachineTranslator};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = GeminiProvider::from_env()?;
//!     let result = provider.translate("Hello world", Direction::EnId).await?;
//!     println!("{}", result); // "Halo dunia"
//!     Ok(())
//! }
//! ```

use crate::mt::direction::Direction;
use crate::mt::error::MtResult;
use async_trait::async_trait;

/// Generic trait for machine translation providers
///
/// Implementations receive the whole decoded document and return the whole
/// translation. There is no chunking and no retry at this level.
#[async_trait]
pub trait MachineTranslator: Send + Sync {
    /// Translate a document in the given direction
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The translated text
    /// * `Err(MtError::UpstreamError)` - The service could not be reached or refused the call
    /// * `Err(MtError::ParseError)` - The service answered in an unexpected shape
    async fn translate(&self, text: &str, direction: Direction) -> MtResult<String>;

    /// Name of this translation provider, for logs and the health route
    fn provider_name(&self) -> &str;
}
