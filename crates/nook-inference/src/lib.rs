mod client;

pub use client::{extract_generated_text, HuggingFaceRewriter, RewriterSettings};
