/// Machine Translation Module
///
/// This module turns an uploaded document into a translated one. It knows the
/// two supported directions, how the prompt for the generative model is laid
/// out, and how to talk to the model.
///
/// # Overview
///
/// 1. **Direction** - The English↔Indonesian pair and its wire form
/// 2. **Prompt** - Document decoding and the fixed translation instruction
/// 3. **MT Trait & Providers** - `MachineTranslator` with a Gemini and a mock implementation
///
/// # Example
///
/// ```ignore
/// use lumina_translate::mt::{Direction, GeminiProvider, MachineTranslator, decode_document};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let bytes = std::fs::read("report.txt")?;
///     let text = decode_document(&bytes);
///
///     let provider = GeminiProvider::from_env()?;
///     let translated = provider.translate(&text, Direction::EnId).await?;
///
///     println!("{}", translated);
///     Ok(())
/// }
/// ```
pub mod direction;
pub mod error;
pub mod gemini;
pub mod mock;
pub mod prompt;
pub mod translator;

pub use direction::Direction;
pub use error::{MtError, MtResult};
pub use gemini::GeminiProvider;
pub use mock::{MockMode, MockTranslator};
pub use prompt::{build_prompt, decode_document};
pub use translator::MachineTranslator;
