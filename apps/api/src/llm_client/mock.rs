//! In-memory `TextGenerator` for tests. Records every call it receives.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use super::{LlmError, TextGenerator};

/// What the mock answers with.
#[derive(Debug, Clone)]
pub enum MockReply {
    Text(String),
    /// Behaves like a completion with no choices.
    Empty,
    /// Behaves like a service-level failure.
    ApiFailure { status: u16, message: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub prompt: String,
    pub system: String,
    pub temperature: f64,
    pub max_output_tokens: u32,
}

pub struct MockGenerator {
    reply: MockReply,
    calls: AtomicUsize,
    last_call: Mutex<Option<RecordedCall>>,
}

impl MockGenerator {
    pub fn new(reply: MockReply) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
            last_call: Mutex::new(None),
        }
    }

    pub fn replying(text: &str) -> Self {
        Self::new(MockReply::Text(text.to_string()))
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_call(&self) -> Option<RecordedCall> {
        self.last_call.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn generate(
        &self,
        prompt: &str,
        system: &str,
        temperature: f64,
        max_output_tokens: u32,
    ) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_call.lock().unwrap() = Some(RecordedCall {
            prompt: prompt.to_string(),
            system: system.to_string(),
            temperature,
            max_output_tokens,
        });

        match &self.reply {
            MockReply::Text(text) if text.trim().is_empty() => Err(LlmError::EmptyContent),
            MockReply::Text(text) => Ok(text.clone()),
            MockReply::Empty => Err(LlmError::EmptyContent),
            MockReply::ApiFailure { status, message } => Err(LlmError::Api {
                status: *status,
                message: message.clone(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_blank_text_follows_empty_content_contract() {
        for blank in ["", "  \n"] {
            let mock = MockGenerator::replying(blank);
            let result = mock.generate("p", "s", 0.7, 3000).await;
            assert!(matches!(result, Err(LlmError::EmptyContent)));
            assert_eq!(mock.call_count(), 1);
        }
    }

    #[tokio::test]
    async fn test_text_is_returned_verbatim() {
        let mock = MockGenerator::replying("  RPP  ");
        assert_eq!(mock.generate("p", "s", 0.7, 3000).await.unwrap(), "  RPP  ");
    }
}
