//! Mock Machine Translator for testing
//!
//! This module provides a deterministic, API-free translator for exercising
//! the endpoint and the CLI without an API key or network access.
//!
//! # Example
//!
//! ```ignore
//! use lumina_translate::mt::{Direction, MachineTranslator, MockMode, MockTranslator};
//!
//! #[tokio::test]
//! async fn test_translation() {
//!     let mock = MockTranslator::new(MockMode::Suffix);
//!     let result = mock.translate("hello", Direction::EnId).await.unwrap();
//!     assert_eq!(result, "hello_id");
//! }
//! ```

use crate::mt::direction::Direction;
use crate::mt::error::{MtError, MtResult};
use crate::mt::translator::MachineTranslator;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Mock translation modes for testing different scenarios
#[derive(Debug, Clone)]
pub enum MockMode {
    /// Append the target locale: "hello" → "hello_id"
    Suffix,

    /// Always answer with the same text, whatever the input
    Fixed(String),

    /// Use predefined mappings for realistic translations
    /// (text, direction) → translation, falling back to `Suffix`
    Mappings(HashMap<(String, Direction), String>),

    /// Fail every call with this error
    Error(MtError),

    /// No-op: return input unchanged
    NoOp,
}

/// Mock translator that simulates various translation scenarios
///
/// Clones share one call counter, so a test can hand a clone to the server
/// and still observe how many times it was called.
#[derive(Debug, Clone)]
pub struct MockTranslator {
    mode: MockMode,
    /// Optional simulated network delay (in milliseconds)
    delay_ms: u64,
    calls: Arc<AtomicUsize>,
}

impl MockTranslator {
    pub fn new(mode: MockMode) -> Self {
        Self::with_delay(mode, 0)
    }

    /// Create a MockTranslator with simulated network delay
    pub fn with_delay(mode: MockMode, delay_ms: u64) -> Self {
        Self {
            mode,
            delay_ms,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of `translate` calls made so far, across all clones
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    async fn apply_delay(&self) {
        if self.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
        }
    }

    fn apply_translation(&self, text: &str, direction: Direction) -> MtResult<String> {
        let (_, target) = direction.locales();
        match &self.mode {
            MockMode::Suffix => Ok(format!("{}_{}", text, target)),
            MockMode::Fixed(result) => Ok(result.clone()),
            MockMode::Mappings(map) => Ok(map
                .get(&(text.to_string(), direction))
                .cloned()
                .unwrap_or_else(|| format!("{}_{}", text, target))),
            MockMode::Error(err) => Err(err.clone()),
            MockMode::NoOp => Ok(text.to_string()),
        }
    }
}

#[async_trait]
impl MachineTranslator for MockTranslator {
    async fn translate(&self, text: &str, direction: Direction) -> MtResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.apply_delay().await;
        self.apply_translation(text, direction)
    }

    fn provider_name(&self) -> &str {
        "Mock Translator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_suffix_uses_target_locale() {
        let mock = MockTranslator::new(MockMode::Suffix);
        assert_eq!(
            mock.translate("hello", Direction::EnId).await.unwrap(),
            "hello_id"
        );
        assert_eq!(
            mock.translate("halo", Direction::IdEn).await.unwrap(),
            "halo_en"
        );
    }

    #[tokio::test]
    async fn test_fixed_ignores_input() {
        let mock = MockTranslator::new(MockMode::Fixed("Halo dunia".to_string()));
        assert_eq!(
            mock.translate("anything", Direction::EnId).await.unwrap(),
            "Halo dunia"
        );
    }

    #[tokio::test]
    async fn test_mapping_and_fallback() {
        let mut map = HashMap::new();
        map.insert(
            ("Hello world".to_string(), Direction::EnId),
            "Halo dunia".to_string(),
        );
        let mock = MockTranslator::new(MockMode::Mappings(map));

        assert_eq!(
            mock.translate("Hello world", Direction::EnId).await.unwrap(),
            "Halo dunia"
        );
        // Same text, other direction: not mapped
        assert_eq!(
            mock.translate("Hello world", Direction::IdEn).await.unwrap(),
            "Hello world_en"
        );
    }

    #[tokio::test]
    async fn test_error_mode_returns_error() {
        let mock = MockTranslator::new(MockMode::Error(MtError::UpstreamError(
            "API unavailable".to_string(),
        )));
        match mock.translate("hello", Direction::EnId).await {
            Err(MtError::UpstreamError(msg)) => assert_eq!(msg, "API unavailable"),
            other => panic!("Expected UpstreamError, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_noop_returns_unchanged() {
        let mock = MockTranslator::new(MockMode::NoOp);
        let text = "Line one\n\nLine two";
        assert_eq!(mock.translate(text, Direction::EnId).await.unwrap(), text);
    }

    #[tokio::test]
    async fn test_call_count_shared_between_clones() {
        let mock = MockTranslator::new(MockMode::NoOp);
        let handed_out = mock.clone();
        assert_eq!(mock.call_count(), 0);

        handed_out.translate("a", Direction::EnId).await.unwrap();
        handed_out.translate("b", Direction::IdEn).await.unwrap();
        assert_eq!(mock.call_count(), 2);
    }

    #[tokio::test]
    async fn test_error_calls_are_counted() {
        let mock = MockTranslator::new(MockMode::Error(MtError::Other("x".to_string())));
        let _ = mock.translate("a", Direction::EnId).await;
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn test_delay_adds_latency() {
        let mock = MockTranslator::with_delay(MockMode::Suffix, 50);
        let start = std::time::Instant::now();
        let _ = mock.translate("hello", Direction::EnId).await.unwrap();
        assert!(start.elapsed().as_millis() >= 50);
    }

    #[test]
    fn test_provider_name() {
        let mock = MockTranslator::new(MockMode::Suffix);
        assert_eq!(mock.provider_name(), "Mock Translator");
    }
}
