//! Model invocation: prompt adapters and the inference client

pub mod adapter;
pub mod client;

// Re-export main types for convenience
pub use adapter::{PromptAdapter, adapter_for_model};
pub use client::{BedrockInferenceClient, InferenceClient, InvokeRequest};
