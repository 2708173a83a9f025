use crate::frontmatter::FrontmatterError;
use thiserror::Error;

/// Which rejected re-export-as-default shape was encountered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReExportForm {
    /// `export { default } from './Layout'`
    FromModule,
    /// `export { Layout as default }`
    LocalAlias,
}

impl ReExportForm {
    /// Corrective example shown to the document author.
    pub fn guidance(&self) -> &'static str {
        match self {
            ReExportForm::FromModule => {
                "For example, instead of:\n\nexport { default } from './Layout'\n\nuse:\n\nimport Layout from './Layout'\nexport default Layout"
            }
            ReExportForm::LocalAlias => {
                "For example, instead of:\n\nexport { Layout as default }\n\nuse:\n\nexport default Layout"
            }
        }
    }
}

/// Errors that abort the block-to-module transform.
///
/// None of these are recoverable per block: the whole document fails.
#[derive(Debug, Error)]
pub enum TdxError {
    /// A `default` re-export was used instead of an `export default` statement.
    #[error(
        "TDX doesn't support using \"default\" as a named export, use \"export default\" statement instead.\n\n{}",
        .form.guidance()
    )]
    RejectedExportPattern {
        /// Which of the rejected shapes matched.
        form: ReExportForm,
        /// The offending statement.
        statement: String,
    },
    /// A block kind outside the known set reached the transform.
    #[error("unknown block type `{kind}` in document body")]
    UnknownBlockKind {
        /// The unrecognized `type` tag.
        kind: String,
    },
    /// The interim block sequence could not be decoded.
    #[error("Invalid block sequence: {0}")]
    InvalidBlocks(String),
    /// Frontmatter could not be converted into block properties.
    #[error("Frontmatter error: {0}")]
    Frontmatter(#[from] FrontmatterError),
}

impl TdxError {
    /// Create a rejected export error for the given statement
    pub fn rejected_export(form: ReExportForm, statement: impl Into<String>) -> Self {
        Self::RejectedExportPattern {
            form,
            statement: statement.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_from_module_message() {
        let err = TdxError::rejected_export(
            ReExportForm::FromModule,
            "export { default } from './Layout'",
        );
        let message = err.to_string();
        assert!(message.starts_with("TDX doesn't support using \"default\" as a named export"));
        assert!(message.contains("import Layout from './Layout'\nexport default Layout"));
        assert!(!message.lines().any(|line| line.starts_with(' ')));
    }

    #[test]
    fn test_rejected_local_alias_message() {
        let message =
            TdxError::rejected_export(ReExportForm::LocalAlias, "export { Layout as default }")
                .to_string();
        assert!(message.contains("export { Layout as default }"));
        assert!(message.ends_with("use:\n\nexport default Layout"));
        assert!(!message.contains("import Layout"));
    }

    #[test]
    fn test_unknown_block_kind_message() {
        let err = TdxError::UnknownBlockKind {
            kind: "table".to_string(),
        };
        assert_eq!(err.to_string(), "unknown block type `table` in document body");
    }
}
