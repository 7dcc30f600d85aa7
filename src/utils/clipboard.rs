//! Clipboard sinks for rendered tables
//!
//! The converter itself never touches the OS clipboard. It hands a
//! [`ClipboardPayload`] to a [`ClipboardSink`], which decides what to do
//! with it:
//! - `CommandClipboard`: pipes a full HTML document into an external
//!   copy utility (CLI)
//! - `MemoryClipboard`: keeps payloads in memory (testing)
//! - `NoopClipboard`: refuses every copy (WASM fallback)

use std::fmt;
use std::sync::Mutex;

#[cfg(not(target_arch = "wasm32"))]
use std::io::Write;
#[cfg(not(target_arch = "wasm32"))]
use std::process::{Command, Stdio};

use crate::core::render::wrap_html_document;
use crate::utils::error::ConversionError;

/// Environment variable holding a shell command that overrides the
/// platform copy utility. The command receives the HTML document on stdin.
pub const COPY_COMMAND_ENV: &str = "TABCLIP_COPY_COMMAND";

/// What gets copied: the rendered HTML table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardPayload {
    /// Compact `<table>` fragment
    pub html: String,
}

impl ClipboardPayload {
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }

    /// The fragment wrapped in a complete UTF-8 HTML document
    pub fn document(&self) -> String {
        wrap_html_document(&self.html)
    }
}

/// Trait for handing a rendered table to the clipboard
pub trait ClipboardSink: Send + Sync {
    /// Copy the payload
    fn copy(&self, payload: &ClipboardPayload) -> Result<(), ClipboardError>;

    /// Short human-readable name for status output
    fn name(&self) -> &str;
}

/// Error type for clipboard sinks
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    /// The copy utility could not be started
    Spawn { program: String, message: String },
    /// Writing to or waiting on the copy utility failed
    Io(String),
    /// The copy utility ran but reported failure
    ExitStatus { program: String, code: Option<i32> },
    /// No clipboard is available in this environment
    NotSupported(String),
}

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClipboardError::Spawn { program, message } => {
                write!(f, "could not run '{}': {}", program, message)
            }
            ClipboardError::Io(msg) => write!(f, "I/O error: {}", msg),
            ClipboardError::ExitStatus { program, code } => match code {
                Some(c) => write!(f, "'{}' exited with status {}", program, c),
                None => write!(f, "'{}' was terminated by a signal", program),
            },
            ClipboardError::NotSupported(msg) => write!(f, "not supported: {}", msg),
        }
    }
}

impl std::error::Error for ClipboardError {}

impl From<ClipboardError> for ConversionError {
    fn from(err: ClipboardError) -> Self {
        ConversionError::clipboard(err.to_string())
    }
}

/// Clipboard backed by an external copy utility
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandClipboard {
    program: String,
    args: Vec<String>,
}

#[cfg(not(target_arch = "wasm32"))]
impl CommandClipboard {
    pub fn new(program: impl Into<String>, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Run `command` through the platform shell
    pub fn shell(command: &str) -> Self {
        if cfg!(windows) {
            Self::new("cmd", ["/C", command])
        } else {
            Self::new("sh", ["-c", command])
        }
    }

    /// Pick a copy utility for the current platform.
    ///
    /// `TABCLIP_COPY_COMMAND` wins when set. Otherwise macOS converts the
    /// document to RTF with `textutil` and copies it with `pbcopy`,
    /// Wayland sessions use `wl-copy`, and other Unix systems use `xclip`.
    pub fn platform_default() -> Result<Self, ClipboardError> {
        if let Ok(command) = std::env::var(COPY_COMMAND_ENV) {
            if !command.trim().is_empty() {
                return Ok(Self::shell(&command));
            }
        }

        if cfg!(target_os = "macos") {
            Ok(Self::shell(
                "textutil -stdin -format html -convert rtf -stdout | pbcopy -Prefer rtf",
            ))
        } else if cfg!(unix) {
            if std::env::var_os("WAYLAND_DISPLAY").is_some() {
                Ok(Self::new("wl-copy", ["--type", "text/html"]))
            } else {
                Ok(Self::new(
                    "xclip",
                    ["-selection", "clipboard", "-t", "text/html"],
                ))
            }
        } else {
            Err(ClipboardError::NotSupported(format!(
                "no clipboard utility known for this platform; set {}",
                COPY_COMMAND_ENV
            )))
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl ClipboardSink for CommandClipboard {
    fn copy(&self, payload: &ClipboardPayload) -> Result<(), ClipboardError> {
        log::debug!("copying via {} {:?}", self.program, self.args);

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .spawn()
            .map_err(|e| ClipboardError::Spawn {
                program: self.program.clone(),
                message: e.to_string(),
            })?;

        // stdin is dropped before waiting so the child sees EOF
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(payload.document().as_bytes()),
            None => Ok(()),
        };

        let status = child
            .wait()
            .map_err(|e| ClipboardError::Io(e.to_string()))?;
        if !status.success() {
            return Err(ClipboardError::ExitStatus {
                program: self.program.clone(),
                code: status.code(),
            });
        }
        written.map_err(|e| ClipboardError::Io(e.to_string()))
    }

    fn name(&self) -> &str {
        &self.program
    }
}

/// In-memory clipboard that records every payload
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    copies: Mutex<Vec<ClipboardPayload>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently copied payload
    pub fn last(&self) -> Option<ClipboardPayload> {
        self.copies.lock().ok()?.last().cloned()
    }

    /// Number of payloads copied so far
    pub fn len(&self) -> usize {
        self.copies.lock().map(|c| c.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ClipboardSink for MemoryClipboard {
    fn copy(&self, payload: &ClipboardPayload) -> Result<(), ClipboardError> {
        let mut copies = self
            .copies
            .lock()
            .map_err(|e| ClipboardError::Io(e.to_string()))?;
        copies.push(payload.clone());
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

/// Clipboard that refuses every copy
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopClipboard;

impl ClipboardSink for NoopClipboard {
    fn copy(&self, _payload: &ClipboardPayload) -> Result<(), ClipboardError> {
        Err(ClipboardError::NotSupported(
            "clipboard access is not available".to_string(),
        ))
    }

    fn name(&self) -> &str {
        "noop"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_document() {
        let payload = ClipboardPayload::new("<table></table>");
        assert_eq!(
            payload.document(),
            "<!DOCTYPE html><html><head><meta charset=\"utf-8\"></head><body><table></table></body></html>"
        );
    }

    #[test]
    fn test_memory_clipboard() {
        let clipboard = MemoryClipboard::new();
        assert!(clipboard.is_empty());

        clipboard
            .copy(&ClipboardPayload::new("<table></table>"))
            .unwrap();
        clipboard
            .copy(&ClipboardPayload::new("<table><tr></tr></table>"))
            .unwrap();

        assert_eq!(clipboard.len(), 2);
        assert_eq!(clipboard.last().unwrap().html, "<table><tr></tr></table>");
    }

    #[test]
    fn test_noop_clipboard() {
        let err = NoopClipboard
            .copy(&ClipboardPayload::new("<table></table>"))
            .unwrap_err();
        assert!(matches!(err, ClipboardError::NotSupported(_)));
    }

    #[test]
    fn test_clipboard_error_into_conversion_error() {
        let err: ConversionError = ClipboardError::ExitStatus {
            program: "xclip".to_string(),
            code: Some(1),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Failed to copy to clipboard: 'xclip' exited with status 1"
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_command_clipboard_runs_shell() {
        let sink = CommandClipboard::shell("cat > /dev/null");
        assert_eq!(sink.program(), "sh");
        sink.copy(&ClipboardPayload::new("<table></table>"))
            .unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn test_command_clipboard_reports_failure() {
        let sink = CommandClipboard::shell("cat > /dev/null; exit 3");
        let err = sink
            .copy(&ClipboardPayload::new("<table></table>"))
            .unwrap_err();
        assert_eq!(
            err,
            ClipboardError::ExitStatus {
                program: "sh".to_string(),
                code: Some(3),
            }
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_command_clipboard_reaps_child_that_ignores_stdin() {
        let sink = CommandClipboard::shell("exec true");
        let html = format!("<table><tr><td>{}</td></tr></table>", "x".repeat(1 << 20));

        // The child exits without reading, so the write hits a closed pipe
        let err = sink.copy(&ClipboardPayload::new(html)).unwrap_err();
        assert!(matches!(err, ClipboardError::Io(_)));
    }

    #[cfg(unix)]
    #[test]
    fn test_command_clipboard_exit_status_wins_over_broken_pipe() {
        let sink = CommandClipboard::shell("exit 4");
        let html = "x".repeat(1 << 20);

        let err = sink.copy(&ClipboardPayload::new(html)).unwrap_err();
        assert_eq!(
            err,
            ClipboardError::ExitStatus {
                program: "sh".to_string(),
                code: Some(4),
            }
        );
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_missing_program() {
        let sink = CommandClipboard::new("tabclip-definitely-missing-program", Vec::<String>::new());
        let err = sink
            .copy(&ClipboardPayload::new("<table></table>"))
            .unwrap_err();
        assert!(matches!(err, ClipboardError::Spawn { .. }));
    }
}
