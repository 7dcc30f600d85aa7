//! Utility modules
//!
//! This module contains utilities and helpers:
//! - Error types and result types
//! - Clipboard sinks for handing rendered tables to the OS

pub mod clipboard;
pub mod error;

// Re-export commonly used items
pub use clipboard::{ClipboardError, ClipboardPayload, ClipboardSink, MemoryClipboard, NoopClipboard};
pub use error::{ConversionError, ConversionOutput, ConversionResult, ConversionWarning};

#[cfg(not(target_arch = "wasm32"))]
pub use clipboard::CommandClipboard;
