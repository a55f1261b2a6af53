//! Configuration and request/response models shared by the handler.

pub mod config;
pub mod models;
