//! Error types for Tessera.
//!
//! Layout and text wrapping never fail once a tree has been built; these
//! errors cover configuration loading and structural mistakes made while
//! assembling a layout tree.

/// Errors produced by the Tessera crates.
#[derive(Debug, thiserror::Error)]
pub enum TesseraError {
    #[error("config error: {0}")]
    Config(String),

    #[error("invalid layout tree: {0}")]
    InvalidTree(String),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, TesseraError>;
