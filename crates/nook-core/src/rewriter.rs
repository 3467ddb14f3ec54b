use crate::Result;
use async_trait::async_trait;

/// A backend that rewrites prose: grammar correction and paraphrasing.
#[async_trait]
pub trait TextRewriter: Send + Sync {
    async fn correct_grammar(&self, text: &str) -> Result<String>;

    async fn paraphrase(&self, text: &str) -> Result<String>;
}
