//! Prompt construction and document decoding
//!
//! Uploaded documents are not parsed: their bytes are decoded as UTF-8 and
//! sent to the model verbatim beneath a fixed instruction.

use crate::mt::direction::Direction;

/// Separator between the instruction and the document body
const BODY_SEPARATOR: &str = "\n\n---\n\n";

/// Build the translation prompt for `content` in the given direction.
///
/// The instruction asks the model to keep line breaks, paragraphs and spacing,
/// and to answer with the translated text only.
pub fn build_prompt(direction: Direction, content: &str) -> String {
    format!(
        "Translate the following text from {} to {}. Preserve the original formatting, \
         including line breaks, paragraphs, and spacing, as closely as possible. \
         Do not add any extra commentary, introductory text, or explanations. \
         Only provide the translated text.{}{}",
        direction.source_language(),
        direction.target_language(),
        BODY_SEPARATOR,
        content
    )
}

/// Decode uploaded bytes as text.
///
/// Invalid UTF-8 sequences become U+FFFD and a leading byte order mark is
/// dropped. `.doc`/`.docx` containers go through the same path, so their
/// binary structure reaches the model as-is.
pub fn decode_document(bytes: &[u8]) -> String {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    String::from_utf8_lossy(bytes).into_owned()
}
