//! Interim block model handed over by the TDX tree builder.

use crate::frontmatter::{FrontmatterError, frontmatter_props_from_yaml, scalar_to_string};
use crate::TdxError;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value as JsonValue;
use std::collections::HashMap;

/// One classified unit of parsed document content.
///
/// The tree builder emits these in document order; the order is preserved
/// in both the declaration and the body stream of the generated module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Block {
    /// Document frontmatter, already parsed into string properties.
    Yaml {
        /// Frontmatter properties keyed by name.
        #[serde(default, deserialize_with = "deserialize_props")]
        props: HashMap<String, String>,
    },
    /// A top-level `import` statement.
    Import {
        /// Verbatim statement source.
        src: String,
    },
    /// A top-level `export` statement.
    Export {
        /// Verbatim statement source.
        src: String,
    },
    /// Prose with its rendered markup precomputed upstream.
    Md {
        /// Rendered JSX for the prose.
        value: String,
    },
    /// A fenced code block.
    Code {
        /// Verbatim code text.
        src: String,
        /// Info-string language, if any.
        #[serde(default)]
        language: Option<String>,
    },
    /// Embedded JSX or HTML markup.
    #[serde(alias = "html")]
    Jsx {
        /// Verbatim markup source.
        src: String,
    },
    /// A document comment.
    Comment {
        /// Comment text without delimiters.
        src: String,
    },
}

/// Fieldless discriminant of [`Block`], used for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// Frontmatter metadata.
    Yaml,
    /// Import statement.
    Import,
    /// Export statement.
    Export,
    /// Rendered prose.
    Md,
    /// Fenced code.
    Code,
    /// Embedded markup.
    Jsx,
    /// Comment.
    Comment,
}

impl BlockKind {
    /// Wire tag used in the interim JSON representation.
    pub fn as_str(self) -> &'static str {
        match self {
            BlockKind::Yaml => "yaml",
            BlockKind::Import => "import",
            BlockKind::Export => "export",
            BlockKind::Md => "md",
            BlockKind::Code => "code",
            BlockKind::Jsx => "jsx",
            BlockKind::Comment => "comment",
        }
    }

    /// Resolves a wire tag (including the `html` alias) to a kind.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "yaml" => Some(BlockKind::Yaml),
            "import" => Some(BlockKind::Import),
            "export" => Some(BlockKind::Export),
            "md" => Some(BlockKind::Md),
            "code" => Some(BlockKind::Code),
            "jsx" | "html" => Some(BlockKind::Jsx),
            "comment" => Some(BlockKind::Comment),
            _ => None,
        }
    }

    /// Returns true for kinds that contribute to the rendered body.
    pub fn is_renderable(self) -> bool {
        matches!(
            self,
            BlockKind::Md | BlockKind::Code | BlockKind::Jsx | BlockKind::Comment
        )
    }
}

impl std::fmt::Display for BlockKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Block {
    /// Creates a frontmatter block from already-parsed properties.
    pub fn yaml(props: HashMap<String, String>) -> Self {
        Block::Yaml { props }
    }

    /// Creates a frontmatter block by parsing a raw YAML mapping.
    pub fn yaml_from_source(src: &str) -> Result<Self, FrontmatterError> {
        Ok(Block::Yaml {
            props: frontmatter_props_from_yaml(src)?,
        })
    }

    /// Creates an import block.
    pub fn import(src: impl Into<String>) -> Self {
        Block::Import { src: src.into() }
    }

    /// Creates an export block.
    pub fn export(src: impl Into<String>) -> Self {
        Block::Export { src: src.into() }
    }

    /// Creates a prose block from rendered markup.
    pub fn md(value: impl Into<String>) -> Self {
        Block::Md {
            value: value.into(),
        }
    }

    /// Creates a fenced code block.
    pub fn code(src: impl Into<String>, language: Option<&str>) -> Self {
        Block::Code {
            src: src.into(),
            language: language.map(str::to_string),
        }
    }

    /// Creates an embedded markup block.
    pub fn jsx(src: impl Into<String>) -> Self {
        Block::Jsx { src: src.into() }
    }

    /// Creates a comment block.
    pub fn comment(src: impl Into<String>) -> Self {
        Block::Comment { src: src.into() }
    }

    /// Returns the kind of this block.
    pub fn kind(&self) -> BlockKind {
        match self {
            Block::Yaml { .. } => BlockKind::Yaml,
            Block::Import { .. } => BlockKind::Import,
            Block::Export { .. } => BlockKind::Export,
            Block::Md { .. } => BlockKind::Md,
            Block::Code { .. } => BlockKind::Code,
            Block::Jsx { .. } => BlockKind::Jsx,
            Block::Comment { .. } => BlockKind::Comment,
        }
    }
}

/// A decoded interim block, or the `type` tag of one no kind matches.
pub type DecodedBlock = Result<Block, String>;

/// Decodes the interim JSON array produced by the tree builder.
///
/// Any `type` tag outside the known kinds is reported as
/// [`TdxError::UnknownBlockKind`] rather than a generic decode failure.
pub fn blocks_from_json(input: &str) -> Result<Vec<Block>, TdxError> {
    decode_blocks(input)?
        .into_iter()
        .map(|decoded| decoded.map_err(|kind| TdxError::UnknownBlockKind { kind }))
        .collect()
}

/// Decodes the interim JSON array, keeping unknown kinds in place.
///
/// Unknown tags come back as `Err(tag)` so callers decide where in the
/// transform they become fatal. Malformed known blocks fail the whole call.
pub fn decode_blocks(input: &str) -> Result<Vec<DecodedBlock>, TdxError> {
    let raw: Vec<JsonValue> =
        serde_json::from_str(input).map_err(|err| TdxError::InvalidBlocks(err.to_string()))?;
    raw.into_iter().map(block_from_value).collect()
}

fn block_from_value(value: JsonValue) -> Result<DecodedBlock, TdxError> {
    match value.get("type").and_then(JsonValue::as_str) {
        Some(tag) => match BlockKind::from_tag(tag) {
            Some(BlockKind::Yaml) if value.get("props").is_none() => {
                if let Some(src) = value.get("src").and_then(JsonValue::as_str) {
                    return Ok(Ok(Block::yaml_from_source(src)?));
                }
            }
            Some(_) => {}
            None => return Ok(Err(tag.to_string())),
        },
        None => {
            return Err(TdxError::InvalidBlocks(
                "block is missing a string `type` tag".to_string(),
            ));
        }
    }
    serde_json::from_value(value)
        .map(Ok)
        .map_err(|err| TdxError::InvalidBlocks(err.to_string()))
}

fn deserialize_props<'de, D>(deserializer: D) -> Result<HashMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = HashMap::<String, JsonValue>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .filter_map(|(key, value)| scalar_to_string(value).map(|value| (key, value)))
        .collect())
}
