//! Body stream: renderable content in document order.

use crate::codegen::js_string_literal;
use tdx_core::Block;

/// Builds the body stream, joining fragments with a blank line.
pub fn build_sections(blocks: &[Block]) -> String {
    let fragments: Vec<String> = blocks
        .iter()
        .filter_map(section_for_block)
        .filter(|fragment| !fragment.is_empty())
        .collect();
    log::debug!("sections: {} fragments from {} blocks", fragments.len(), blocks.len());
    fragments.join("\n\n")
}

/// Renders one block into its body fragment, if it has one.
pub fn section_for_block(block: &Block) -> Option<String> {
    match block {
        Block::Md { value } => Some(value.clone()),
        Block::Code { src, language } => Some(code_fragment(src, language.as_deref())),
        Block::Jsx { src } => Some(src.clone()),
        Block::Comment { src } => Some(format!("{{/*{src}*/}}")),
        Block::Import { .. } | Block::Export { .. } | Block::Yaml { .. } => None,
    }
}

fn code_fragment(src: &str, language: Option<&str>) -> String {
    let mut result = String::from("<Md name=\"pre\">");
    match language {
        Some(lang) => {
            let class_name = js_string_literal(&format!("language-{lang}"));
            result.push_str(&format!(
                "<Md name=\"code\" props={{{{ className: {class_name} }}}}>"
            ));
        }
        None => result.push_str("<Md name=\"code\">"),
    }
    result.push_str(src);
    result.push_str("</Md></Md>");
    result
}
