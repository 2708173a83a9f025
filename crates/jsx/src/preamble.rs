//! Declaration stream: doc comment, imports, and export bookkeeping.

use tdx_core::{Block, ExportForm, TdxError, classify_export, render_doc_comment};

/// Result of folding the block sequence into the module's declaration region.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Preamble {
    /// Emitted declaration fragments in block order.
    pub declarations: Vec<String>,
    /// Expression captured from the document's `export default`, if any.
    pub layout: Option<String>,
    /// Names introduced by declaration exports, in encounter order.
    pub export_names: Vec<String>,
}

impl Preamble {
    /// Joins the declarations with a blank line between each.
    pub fn text(&self) -> String {
        self.declarations.join("\n\n")
    }

    fn push_declaration(&mut self, declaration: String) {
        if !declaration.is_empty() {
            self.declarations.push(declaration);
        }
    }

    fn absorb(mut self, block: &Block) -> Result<Self, TdxError> {
        match block {
            Block::Yaml { props } => self.push_declaration(render_doc_comment(props)),
            Block::Import { src } => self.push_declaration(src.clone()),
            Block::Export { src } => match classify_export(src) {
                ExportForm::Default { expression } => {
                    if let Some(previous) = &self.layout {
                        log::warn!(
                            "multiple default exports; layout `{}` replaced by `{}`",
                            previous,
                            expression
                        );
                    }
                    self.layout = Some(expression.to_string());
                }
                ExportForm::RejectedReExport { form } => {
                    return Err(TdxError::rejected_export(form, src.as_str()));
                }
                ExportForm::Named { name, statement } => {
                    self.export_names.push(name.to_string());
                    self.push_declaration(statement.to_string());
                }
                ExportForm::Other { statement } => self.push_declaration(statement.to_string()),
            },
            Block::Md { .. } | Block::Code { .. } | Block::Jsx { .. } | Block::Comment { .. } => {
                log::trace!("preamble skips {} block", block.kind());
            }
        }
        Ok(self)
    }
}

/// Builds the declaration stream, failing on the first rejected export.
pub fn build_preamble(blocks: &[Block]) -> Result<Preamble, TdxError> {
    let preamble = blocks
        .iter()
        .try_fold(Preamble::default(), |acc, block| acc.absorb(block))?;
    log::debug!(
        "preamble: {} declarations, {} export names, layout {}",
        preamble.declarations.len(),
        preamble.export_names.len(),
        if preamble.layout.is_some() { "set" } else { "unset" }
    );
    Ok(preamble)
}
