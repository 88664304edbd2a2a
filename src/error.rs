//! Error types for report rendering.
//!
//! Ragged tables and unsupported characters are never errors: the parser pads
//! rows and the sanitizer drops what it cannot represent. What remains here are
//! the caller precondition (non-empty input) and the internal failures that make
//! the whole render call fail.

/// Result type alias for rendering operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while laying out or serializing a report.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Input text was empty or whitespace-only
    #[error("Empty input: nothing to render")]
    EmptyInput,

    /// A measured string contains a character the font has no glyph for
    #[error("Font error: no glyph for {ch:?} (U+{code:04X}) while measuring '{text}'", code = codepoint(.ch))]
    MissingGlyph {
        /// Offending character
        ch: char,
        /// String being measured
        text: String,
    },

    /// A drawn string contains a character WinAnsiEncoding cannot represent
    #[error("Encoding error: cannot encode {ch:?} (U+{code:04X}) in '{text}'", code = codepoint(.ch))]
    Encoding {
        /// Offending character
        ch: char,
        /// String being encoded
        text: String,
    },

    /// Layout invariant violated
    #[error("Layout error: {0}")]
    Layout(String),

    /// Malformed request payload
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn codepoint(ch: &char) -> u32 {
    *ch as u32
}

impl Error {
    /// Whether the error was caused by the caller's input rather than by the renderer.
    ///
    /// An HTTP layer maps client errors to 400 and everything else to 500.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::EmptyInput | Error::InvalidRequest(_) | Error::Json(_))
    }
}
