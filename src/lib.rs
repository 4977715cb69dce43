//! tube-tutor — an interactive learning guide.
//!
//! A topic goes in; the model suggests a few videos, summarizes each one,
//! and then answers follow-up questions using those summaries as context.
//! The binary entry point is `src/main.rs`.

pub mod config;
pub mod console;
pub mod credential;
pub mod error;
pub mod guide;
pub mod llm;
pub mod logger;
pub mod session;
