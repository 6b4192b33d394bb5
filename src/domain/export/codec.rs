//! Share token codec.
//!
//! A token is the snapshot as compact JSON, zlib-compressed at level 9 and
//! encoded with the URL-safe base64 alphabet without padding. Decoding accepts
//! padded tokens as well and fails closed with a single [`InvalidToken`].

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, NO_PAD};
use base64::engine::DecodePaddingMode;
use base64::Engine;
use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use flate2::Compression;
use std::fmt;
use std::io::{Read, Write};
use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

use super::snapshot::SessionSnapshot;

/// Default zlib level for new tokens.
pub const DEFAULT_COMPRESSION_LEVEL: u32 = 9;

/// Default cap on the decompressed size of a token.
pub const DEFAULT_MAX_DECODED_BYTES: u64 = 1024 * 1024;

const TOKEN_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    NO_PAD.with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// An encoded snapshot, safe to place in a URL query.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShareToken(String);

impl ShareToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ShareToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ShareToken {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Errors while producing a token.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("failed to serialize snapshot: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to compress snapshot: {0}")]
    Compress(#[from] std::io::Error),
}

impl From<CodecError> for DomainError {
    fn from(err: CodecError) -> Self {
        DomainError::new(ErrorCode::InternalError, err.to_string())
    }
}

/// Stage at which a token was rejected.
///
/// Only for diagnostics; callers treat every stage the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeStage {
    Empty,
    Base64,
    Decompress,
    TooLarge,
    Json,
    Shape,
}

/// The token could not be turned back into a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid share token")]
pub struct InvalidToken {
    stage: DecodeStage,
}

impl InvalidToken {
    fn at(stage: DecodeStage) -> Self {
        Self { stage }
    }

    pub fn stage(&self) -> DecodeStage {
        self.stage
    }
}

impl From<InvalidToken> for DomainError {
    fn from(err: InvalidToken) -> Self {
        DomainError::new(ErrorCode::InvalidToken, err.to_string())
            .with_detail("stage", format!("{:?}", err.stage))
    }
}

/// Packs snapshots into share tokens and back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShareCodec {
    compression_level: u32,
    max_decoded_bytes: u64,
}

impl Default for ShareCodec {
    fn default() -> Self {
        Self {
            compression_level: DEFAULT_COMPRESSION_LEVEL,
            max_decoded_bytes: DEFAULT_MAX_DECODED_BYTES,
        }
    }
}

impl ShareCodec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the zlib level, clamped to 0-9.
    pub fn with_compression_level(mut self, level: u32) -> Self {
        self.compression_level = level.min(9);
        self
    }

    /// Sets the cap on decompressed JSON size.
    pub fn with_max_decoded_bytes(mut self, max: u64) -> Self {
        self.max_decoded_bytes = max;
        self
    }

    /// Encodes a snapshot into a token.
    pub fn encode(&self, snapshot: &SessionSnapshot) -> Result<ShareToken, CodecError> {
        let json = serde_json::to_vec(snapshot)?;
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::new(self.compression_level));
        encoder.write_all(&json)?;
        let compressed = encoder.finish()?;
        Ok(ShareToken(TOKEN_ENGINE.encode(compressed)))
    }

    /// Decodes a token into a snapshot.
    ///
    /// Total: any malformed input yields [`InvalidToken`].
    pub fn decode(&self, token: &str) -> Result<SessionSnapshot, InvalidToken> {
        let token = token.trim();
        if token.is_empty() {
            return Err(InvalidToken::at(DecodeStage::Empty));
        }

        let compressed = TOKEN_ENGINE
            .decode(token)
            .map_err(|_| InvalidToken::at(DecodeStage::Base64))?;

        let mut json = Vec::new();
        ZlibDecoder::new(compressed.as_slice())
            .take(self.max_decoded_bytes + 1)
            .read_to_end(&mut json)
            .map_err(|_| InvalidToken::at(DecodeStage::Decompress))?;
        if json.len() as u64 > self.max_decoded_bytes {
            return Err(InvalidToken::at(DecodeStage::TooLarge));
        }

        let snapshot: SessionSnapshot =
            serde_json::from_slice(&json).map_err(|_| InvalidToken::at(DecodeStage::Json))?;
        snapshot
            .validate()
            .map_err(|_| InvalidToken::at(DecodeStage::Shape))?;
        Ok(snapshot)
    }
}
