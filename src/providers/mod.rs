mod gemini;

use crate::error::Result;

pub use gemini::{GeminiClient, DEFAULT_BASE_URL, DEFAULT_MODEL};

/// A text-completion backend: one prompt in, one generated text out.
///
/// Implementations make a single attempt; retries and caching are left to
/// callers.
// Backends are used through generics and awaited in place, never spawned, so
// the returned future needs no `Send` bound.
#[allow(async_fn_in_trait)]
pub trait CompletionBackend {
    /// Short human-readable name, used in logs and reports.
    fn name(&self) -> &str;

    async fn complete(&self, prompt: &str) -> Result<String>;
}
