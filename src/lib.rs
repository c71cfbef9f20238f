//! English↔Indonesian document translation
//!
//! - [`mt`]: directions, the translation prompt, and the providers that run it
//!   (Google Gemini, or a deterministic mock)
//! - [`client`]: the upload widget and page controller that drive the
//!   `POST /api/translate` endpoint served by `lumina-translate-web`

pub mod client;
pub mod mt;

pub use client::{HttpTranslateClient, PageController, SelectedFile, TranslationState};
pub use mt::{Direction, GeminiProvider, MachineTranslator, MockMode, MockTranslator, MtError, MtResult};
