//! Content loading - quiz questions and final messages.
//!
//! The default content ships inside the binary as an obfuscated blob produced by
//! the `packer` tool (JSON XOR-ed with [`OBFUSCATION_KEY`]). A plain JSON file can
//! be loaded instead for custom quizzes.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::types::Config;

/// Single-byte XOR key used by the packer.
pub const OBFUSCATION_KEY: u8 = 0xAA;

static EMBEDDED: &[u8] = include_bytes!("../assets/questions.bin");

/// Failure to load quiz content. Always fatal at startup.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to parse game data")]
    Decode(#[from] serde_json::Error),
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("game data contains no questions")]
    Empty,
}

/// XOR every byte with [`OBFUSCATION_KEY`].
pub fn obfuscate(data: &[u8]) -> Vec<u8> {
    data.iter().map(|b| b ^ OBFUSCATION_KEY).collect()
}

/// Inverse of [`obfuscate`] (XOR is its own inverse).
pub fn deobfuscate(data: &[u8]) -> Vec<u8> {
    obfuscate(data)
}

/// Decode and validate a plain JSON document.
pub fn parse_config(json: &[u8]) -> Result<Config, ContentError> {
    let config: Config = serde_json::from_slice(json)?;
    if config.questions.is_empty() {
        return Err(ContentError::Empty);
    }
    Ok(config)
}

/// Load the content compiled into the binary.
pub fn load_embedded() -> Result<Config, ContentError> {
    parse_config(&deobfuscate(EMBEDDED))
}

/// Load plain JSON content from a file.
pub fn load_from_path(path: &Path) -> Result<Config, ContentError> {
    let raw = std::fs::read(path).map_err(|source| ContentError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&raw)
}
