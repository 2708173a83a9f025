use serde_json::Value as JsonValue;
use std::collections::HashMap;
use thiserror::Error;

/// Frontmatter keys surfaced in the generated doc comment, in output order.
pub const RECOGNIZED_KEYS: [&str; 6] = [
    "title",
    "author",
    "repository",
    "license",
    "version",
    "tiniaVersion",
];

/// Attribution line closing every generated doc comment.
pub const ATTRIBUTION_LINE: &str = " *  ** this file was system generated by @tinia/tdx **";

/// Errors emitted while converting YAML frontmatter into block properties.
#[derive(Debug, Error)]
pub enum FrontmatterError {
    /// YAML failed to parse.
    #[error("Frontmatter parse error: {0}")]
    Parse(String),
    /// Top-level YAML node was not a mapping.
    #[error("Frontmatter must be a YAML mapping at the top level")]
    InvalidRootType,
}

/// Renders frontmatter properties as the module's leading doc comment.
///
/// Only [`RECOGNIZED_KEYS`] with a non-empty value produce a line, always in
/// the fixed key order regardless of how `props` was built.
pub fn render_doc_comment(props: &HashMap<String, String>) -> String {
    let mut lines = vec!["/**".to_string()];
    for key in RECOGNIZED_KEYS {
        if let Some(value) = props.get(key).filter(|value| !value.is_empty()) {
            lines.push(format!(" * {key}: {value}"));
        }
    }
    lines.push(ATTRIBUTION_LINE.to_string());
    lines.push(" */".to_string());
    lines.join("\n")
}

/// Parses a raw YAML mapping into string-valued frontmatter properties.
///
/// Scalars are stringified; nulls, sequences and nested mappings are dropped.
pub fn frontmatter_props_from_yaml(
    block: &str,
) -> Result<HashMap<String, String>, FrontmatterError> {
    if block.trim().is_empty() {
        return Ok(HashMap::new());
    }

    let yaml_value: serde_yaml::Value =
        serde_yaml::from_str(block).map_err(|err| FrontmatterError::Parse(err.to_string()))?;
    let json_value =
        serde_json::to_value(yaml_value).map_err(|err| FrontmatterError::Parse(err.to_string()))?;

    match json_value {
        JsonValue::Null => Ok(HashMap::new()),
        JsonValue::Object(map) => Ok(map
            .into_iter()
            .filter_map(|(key, value)| scalar_to_string(value).map(|value| (key, value)))
            .collect()),
        _ => Err(FrontmatterError::InvalidRootType),
    }
}

pub(crate) fn scalar_to_string(value: JsonValue) -> Option<String> {
    match value {
        JsonValue::String(s) => Some(s),
        JsonValue::Number(n) => Some(n.to_string()),
        JsonValue::Bool(b) => Some(b.to_string()),
        JsonValue::Null | JsonValue::Array(_) | JsonValue::Object(_) => None,
    }
}
