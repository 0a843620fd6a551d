mod client;
mod types;

pub use client::{GeminiClient, DEFAULT_BASE_URL, DEFAULT_MODEL};
