//! Export and share token configuration

use serde::Deserialize;
use std::path::PathBuf;

use crate::domain::export::{ShareCodec, DEFAULT_COMPRESSION_LEVEL, DEFAULT_MAX_DECODED_BYTES};

use super::error::ValidationError;

/// Where artifacts land and how tokens are compressed.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Directory that receives `insiktskarta.md` and `mirror-garden.json`
    pub output_dir: PathBuf,

    /// zlib level used when encoding share tokens (0-9)
    pub compression_level: u32,

    /// Upper bound on the decompressed size of an incoming token
    pub max_decoded_bytes: u64,
}

impl ExportConfig {
    /// Builds the codec these settings describe.
    pub fn codec(&self) -> ShareCodec {
        ShareCodec::new()
            .with_compression_level(self.compression_level)
            .with_max_decoded_bytes(self.max_decoded_bytes)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.compression_level > 9 {
            return Err(ValidationError::InvalidCompressionLevel);
        }
        if self.max_decoded_bytes == 0 {
            return Err(ValidationError::InvalidPayloadLimit);
        }
        Ok(())
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            compression_level: DEFAULT_COMPRESSION_LEVEL,
            max_decoded_bytes: DEFAULT_MAX_DECODED_BYTES,
        }
    }
}
