//! Module assembly for the generated TDX component.

use std::fmt::Write as FmtWrite;

/// Binding used for the wrapper component when the default export is skipped.
pub const CONTENT_BINDING: &str = "TDXContent";

/// Converts a Rust string to a JavaScript string literal.
///
/// Uses JSON serialization to properly escape special characters.
///
/// # Examples
///
/// ```
/// use tdx_jsx::codegen::js_string_literal;
///
/// assert_eq!(js_string_literal("language-rust"), "\"language-rust\"");
/// assert_eq!(js_string_literal("say \"hi\""), "\"say \\\"hi\\\"\"");
/// ```
pub fn js_string_literal(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

/// Inputs for [`assemble_module`].
#[derive(Debug, Clone, Default)]
pub struct ModuleParts<'a> {
    /// Joined declaration stream.
    pub preamble: &'a str,
    /// Joined body stream.
    pub sections: &'a str,
    /// Layout expression from the document's default export.
    pub layout: Option<&'a str>,
    /// Names exposed to the layout through `layoutProps`.
    pub export_names: &'a [String],
    /// Declare the wrapper as a local binding instead of the default export.
    pub skip_export: bool,
}

fn emit_wrapper_header(code: &mut String, parts: &ModuleParts<'_>, layout: Option<&str>) {
    if parts.skip_export {
        let _ = writeln!(code, "const {} = (props) => {{", CONTENT_BINDING);
    } else {
        let _ = writeln!(code, "export default (props) => {{");
    }
    let _ = writeln!(code, "  const layout = {};", layout.unwrap_or("null"));
    let _ = writeln!(
        code,
        "  const env = typeof useEnv === 'function' ? useEnv() : {{}};"
    );
    if parts.export_names.is_empty() {
        let _ = writeln!(code, "  const layoutProps = {{}};");
    } else {
        let _ = writeln!(
            code,
            "  const layoutProps = {{ {} }};",
            parts.export_names.join(", ")
        );
    }
    code.push('\n');
}

fn emit_wrapper_body(code: &mut String, parts: &ModuleParts<'_>, has_layout: bool) {
    code.push_str("  return <Md name=\"wrapper\" props={{ id: \"tdx\" }}");
    if has_layout {
        code.push_str(" Layout={layout} layoutProps={Object.assign({}, layoutProps, props)}");
    }
    code.push_str(">\n");
    if !parts.sections.is_empty() {
        code.push_str(parts.sections);
        code.push('\n');
    }
    let _ = writeln!(code, "  </Md>;");
    let _ = writeln!(code, "}};");
}

/// Generates the component module from the two streams.
///
/// The output contains, in order:
/// - The preamble (doc comment, imports, passed-through exports)
/// - The wrapper component, default-exported unless `skip_export`
/// - `layout`, `env`, and `layoutProps` locals
/// - A `wrapper` root node, wired to the layout only when one was set
pub fn assemble_module(parts: &ModuleParts<'_>) -> String {
    let layout = parts.layout.filter(|expr| !expr.is_empty());
    let mut code = String::new();
    if !parts.preamble.is_empty() {
        code.push_str(parts.preamble);
        code.push_str("\n\n");
    }
    emit_wrapper_header(&mut code, parts, layout);
    emit_wrapper_body(&mut code, parts, layout.is_some());
    code
}
