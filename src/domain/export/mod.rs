//! Export module - snapshots, share tokens and the downloadable report.

mod codec;
mod report;
mod snapshot;

pub use codec::{
    CodecError, DecodeStage, InvalidToken, ShareCodec, ShareToken, DEFAULT_COMPRESSION_LEVEL,
    DEFAULT_MAX_DECODED_BYTES,
};
pub use report::{render_json, render_markdown, DATA_FILE_NAME, REPORT_FILE_NAME};
pub use snapshot::{AppInfo, SessionSnapshot, SnapshotMeta, APP_NAME, APP_VERSION};
