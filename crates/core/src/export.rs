//! Lexical classification of top-level `export` statements.
//!
//! This is a heuristic over statement text, not a JavaScript parser. It is the
//! only place that inspects export source; everything downstream works on
//! [`ExportForm`].

use crate::error::ReExportForm;
use once_cell::sync::Lazy;
use regex::Regex;

static DEFAULT_EXPORT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^export\s+default\b").expect("default export pattern"));

static DEFAULT_REEXPORT_FROM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^export\s*\{\s*default\s*\}\s*from\b").expect("default re-export pattern")
});

static ALIASED_DEFAULT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^export\s*\{[^}]*\bas\s+default\s*\}").expect("aliased default pattern")
});

static FROM_CLAUSE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\}\s*from\s+").expect("from clause pattern"));

static NAMED_DECLARATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^export\s+(?:(?:var|const|let|class)\s+|(?:async\s+)?function(?:\s*\*\s*|\s+))([A-Za-z_$][\w$]*)",
    )
    .expect("named declaration pattern")
});

/// Shape of an export statement, as far as module generation cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportForm<'a> {
    /// `export default <expression>;` designating the layout.
    Default {
        /// The exported expression without prefix or trailing semicolon.
        expression: &'a str,
    },
    /// `export { default } from ...` or `export { X as default }`.
    RejectedReExport {
        /// Which rejected shape matched.
        form: ReExportForm,
    },
    /// A declaration export that introduces a binding.
    Named {
        /// Declared binding name.
        name: &'a str,
        /// The statement to pass through.
        statement: &'a str,
    },
    /// Any other export, passed through without contributing a name.
    Other {
        /// The statement to pass through.
        statement: &'a str,
    },
}

/// Classifies a single export statement.
pub fn classify_export(src: &str) -> ExportForm<'_> {
    let trimmed = src.trim();

    if let Some(prefix) = DEFAULT_EXPORT.find(trimmed) {
        let rest = trimmed[prefix.end()..].trim();
        let expression = rest.strip_suffix(';').unwrap_or(rest).trim_end();
        return ExportForm::Default { expression };
    }

    if DEFAULT_REEXPORT_FROM.is_match(trimmed) || ALIASED_DEFAULT.is_match(trimmed) {
        let form = if FROM_CLAUSE.is_match(trimmed) {
            ReExportForm::FromModule
        } else {
            ReExportForm::LocalAlias
        };
        return ExportForm::RejectedReExport { form };
    }

    match NAMED_DECLARATION.captures(trimmed).and_then(|caps| caps.get(1)) {
        Some(name) => ExportForm::Named {
            name: name.as_str(),
            statement: src,
        },
        None => ExportForm::Other { statement: src },
    }
}
