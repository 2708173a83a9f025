#![deny(missing_docs)]
//! TDX core: interim block model, export classification, and frontmatter helpers.

/// Interim block model and JSON decoding.
pub mod block;
/// Transform error types.
pub mod error;
/// Export statement classification.
pub mod export;
/// Frontmatter doc comment rendering and YAML helpers.
pub mod frontmatter;
/// Transform options.
pub mod options;

pub use block::{Block, BlockKind, DecodedBlock, blocks_from_json, decode_blocks};
pub use error::{ReExportForm, TdxError};
pub use export::{ExportForm, classify_export};
pub use frontmatter::{
    ATTRIBUTION_LINE, FrontmatterError, RECOGNIZED_KEYS, frontmatter_props_from_yaml,
    render_doc_comment,
};
pub use options::ToJsxOptions;
