#![deny(missing_docs)]
//! TDX JSX emitter: turns interim blocks into a component module.

/// Module assembly and JS literal helpers.
pub mod codegen;
/// Declaration stream (doc comment, imports, exports).
pub mod preamble;
/// Body stream (prose, code, markup, comments).
pub mod sections;

pub use codegen::{ModuleParts, assemble_module};
pub use preamble::{Preamble, build_preamble};
pub use sections::build_sections;
pub use tdx_core::{Block, BlockKind, ReExportForm, TdxError, ToJsxOptions};

/// Generates the component module for one document.
///
/// Fails without partial output if a rejected `default` re-export is found.
pub fn to_jsx(blocks: &[Block], options: &ToJsxOptions) -> Result<String, TdxError> {
    let preamble = build_preamble(blocks)?;
    Ok(emit_module(&preamble, blocks, options))
}

/// Decodes interim blocks from JSON and generates the component module.
///
/// Unknown block kinds are skipped by the declaration stream, so a rejected
/// export anywhere in the document is reported first. An unknown kind then
/// fails the body stream as [`TdxError::UnknownBlockKind`].
pub fn to_jsx_from_json(input: &str, options: &ToJsxOptions) -> Result<String, TdxError> {
    let decoded = tdx_core::decode_blocks(input)?;
    let mut blocks = Vec::with_capacity(decoded.len());
    let mut first_unknown = None;
    for entry in decoded {
        match entry {
            Ok(block) => blocks.push(block),
            Err(kind) => {
                log::trace!("preamble skips unknown `{}` block", kind);
                first_unknown.get_or_insert(kind);
            }
        }
    }

    let preamble = build_preamble(&blocks)?;
    if let Some(kind) = first_unknown {
        return Err(TdxError::UnknownBlockKind { kind });
    }
    Ok(emit_module(&preamble, &blocks, options))
}

fn emit_module(preamble: &Preamble, blocks: &[Block], options: &ToJsxOptions) -> String {
    let sections = build_sections(blocks);
    let preamble_text = preamble.text();
    assemble_module(&ModuleParts {
        preamble: &preamble_text,
        sections: &sections,
        layout: preamble.layout.as_deref(),
        export_names: &preamble.export_names,
        skip_export: options.skip_export,
    })
}
