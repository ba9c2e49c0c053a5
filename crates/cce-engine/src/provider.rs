//! Provider capability boundary
//!
//! The engine never constructs HTTP clients or encodes provider-specific
//! branching; callers inject whatever adapter they run (OpenAI-style
//! endpoint, local model, test stub) behind [`ContentGenerator`].
//! Retry and timeout policy live in that adapter, not here.

use async_trait::async_trait;

/// Failure of the injected generation capability
///
/// Every variant is non-fatal to the caller: the orchestrator converts
/// provider failures into fallback content instead of propagating them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProviderError {
    /// The call exceeded the adapter's deadline
    #[error("request timed out after {duration_secs}s")]
    Timeout {
        /// Deadline that was exceeded
        duration_secs: u64,
    },

    /// Connection or protocol failure
    #[error("transport error: {0}")]
    Transport(String),

    /// Credentials rejected
    #[error("authentication rejected")]
    Auth,

    /// Rate or usage quota exhausted
    #[error("quota exhausted")]
    Quota,

    /// The provider reported a failure of its own
    #[error("provider failure: {0}")]
    Provider(String),
}

impl ProviderError {
    /// Whether the caller's adapter could reasonably retry this failure
    ///
    /// Informational only; the engine itself never retries.
    #[inline]
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Timeout { .. } | Self::Transport(_) | Self::Quota
        )
    }
}

/// Injected text-generation capability
///
/// One prompt in, completion text out. Implementations own transport,
/// credentials, model selection, and cancellation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    /// Generate completion text for a prompt
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_error_display() {
        let err = ProviderError::Timeout { duration_secs: 30 };
        assert!(err.to_string().contains("30s"));

        let err = ProviderError::Transport("connection reset".to_string());
        assert!(err.to_string().contains("connection reset"));
    }

    #[test]
    fn retryability_classification() {
        assert!(ProviderError::Timeout { duration_secs: 10 }.is_retryable());
        assert!(ProviderError::Quota.is_retryable());
        assert!(!ProviderError::Auth.is_retryable());
        assert!(!ProviderError::Provider("bad".to_string()).is_retryable());
    }

    #[test]
    fn mock_generator_round_trip() {
        let mut mock = MockContentGenerator::new();
        mock.expect_generate()
            .returning(|_| Ok("[{\"title\": \"A\"}]".to_string()));

        let text = tokio_test::block_on(mock.generate("prompt")).unwrap();
        assert!(text.contains("title"));
    }
}
