use std::collections::HashMap;
use tdx_jsx::{Block, ReExportForm, TdxError, ToJsxOptions, to_jsx, to_jsx_from_json};

fn props(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn sample_document() -> Vec<Block> {
    vec![
        Block::yaml(props(&[("title", "Doc")])),
        Block::import("import Foo from './Foo'"),
        Block::export("export default Foo;"),
        Block::md("<Md name=\"h1\">Hi</Md>"),
        Block::export("export const x = 1;"),
    ]
}

#[test]
fn compile_sample_document() {
    let code = to_jsx(&sample_document(), &ToJsxOptions::default()).expect("compile should succeed");
    insta::assert_snapshot!(code, @r#"
/**
 * title: Doc
 *  ** this file was system generated by @tinia/tdx **
 */

import Foo from './Foo'

export const x = 1;

export default (props) => {
  const layout = Foo;
  const env = typeof useEnv === 'function' ? useEnv() : {};
  const layoutProps = { x };

  return <Md name="wrapper" props={{ id: "tdx" }} Layout={layout} layoutProps={Object.assign({}, layoutProps, props)}>
<Md name="h1">Hi</Md>
  </Md>;
};
"#);
}

#[test]
fn compile_sample_document_skip_export() {
    let options = ToJsxOptions {
        skip_export: true,
        ..Default::default()
    };
    let default_code = to_jsx(&sample_document(), &ToJsxOptions::default()).unwrap();
    let skipped_code = to_jsx(&sample_document(), &options).unwrap();

    assert!(skipped_code.contains("const TDXContent = (props) => {\n"));
    assert!(!skipped_code.contains("export default (props)"));
    assert_eq!(
        skipped_code.replace("const TDXContent =", "export default"),
        default_code
    );
}

#[test]
fn single_block_option_has_no_effect() {
    let options = ToJsxOptions {
        single_block: true,
        ..Default::default()
    };
    assert_eq!(
        to_jsx(&sample_document(), &options).unwrap(),
        to_jsx(&sample_document(), &ToJsxOptions::default()).unwrap()
    );
}

#[test]
fn body_only_document_has_no_preamble_or_layout() {
    let blocks = vec![
        Block::md("<p>One</p>"),
        Block::code("fn main() {}", Some("rust")),
        Block::jsx("<Chart data={data} />"),
        Block::comment(" draft "),
    ];
    let code = to_jsx(&blocks, &ToJsxOptions::default()).unwrap();
    insta::assert_snapshot!(code, @r#"
export default (props) => {
  const layout = null;
  const env = typeof useEnv === 'function' ? useEnv() : {};
  const layoutProps = {};

  return <Md name="wrapper" props={{ id: "tdx" }}>
<p>One</p>

<Md name="pre"><Md name="code" props={{ className: "language-rust" }}>fn main() {}</Md></Md>

<Chart data={data} />

{/* draft */}
  </Md>;
};
"#);
}

#[test]
fn body_fragments_follow_block_order() {
    let blocks = vec![
        Block::md("<p>first</p>"),
        Block::import("import A from './A'"),
        Block::jsx("<A>second</A>"),
        Block::export("export const meta = {}"),
        Block::comment("third"),
        Block::md("<p>fourth</p>"),
    ];
    let code = to_jsx(&blocks, &ToJsxOptions::default()).unwrap();
    let positions: Vec<usize> = ["<p>first</p>", "<A>second</A>", "{/*third*/}", "<p>fourth</p>"]
        .iter()
        .map(|needle| code.find(needle).expect("fragment should be present"))
        .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn default_export_only_appears_as_layout() {
    let blocks = vec![
        Block::import("import Base from './Base'"),
        Block::export("export default Base;"),
        Block::md("<p/>"),
    ];
    let code = to_jsx(&blocks, &ToJsxOptions::default()).unwrap();
    assert!(!code.contains("export default Base"));
    assert_eq!(code.matches("const layout = Base;").count(), 1);
    assert!(code.contains("Layout={layout}"));
}

#[test]
fn last_default_export_wins() {
    let blocks = vec![
        Block::export("export default First;"),
        Block::export("export default Second;"),
    ];
    let code = to_jsx(&blocks, &ToJsxOptions::default()).unwrap();
    assert!(code.contains("const layout = Second;"));
    assert!(!code.contains("First"));
}

#[test]
fn named_exports_become_layout_props() {
    let blocks = vec![
        Block::export("export const title = 'A'"),
        Block::export("export function meta() {}"),
        Block::export("export { helper } from './helpers'"),
        Block::export("export const title = 'B'"),
    ];
    let code = to_jsx(&blocks, &ToJsxOptions::default()).unwrap();
    assert!(code.contains("const layoutProps = { title, meta, title };"));
    assert!(code.contains("export { helper } from './helpers'"));
    assert!(!code.contains("Layout={layout}"));
}

#[test]
fn rejected_reexport_yields_no_output() {
    for (src, expected) in [
        ("export { default } from './Layout'", ReExportForm::FromModule),
        ("export { Layout as default }", ReExportForm::LocalAlias),
    ] {
        let blocks = vec![Block::md("<p/>"), Block::export(src)];
        let err = to_jsx(&blocks, &ToJsxOptions::default()).unwrap_err();
        assert!(
            matches!(err, TdxError::RejectedExportPattern { form, .. } if form == expected),
            "{src}: {err:?}"
        );
    }
}

#[test]
fn frontmatter_lines_use_fixed_key_order() {
    let blocks = vec![Block::yaml(props(&[
        ("version", "1.2.0"),
        ("title", "Guide"),
        ("draft", "yes"),
        ("author", ""),
    ]))];
    let code = to_jsx(&blocks, &ToJsxOptions::default()).unwrap();
    assert!(code.starts_with("/**\n * title: Guide\n * version: 1.2.0\n *  ** this file"));
    assert!(!code.contains("draft"));
    assert!(!code.contains("author"));
}

#[test]
fn compile_from_json() {
    let input = r#"[
        {"type": "yaml", "props": {"title": "Doc"}},
        {"type": "import", "src": "import Foo from './Foo'"},
        {"type": "export", "src": "export default Foo;"},
        {"type": "md", "value": "<Md name=\"h1\">Hi</Md>"},
        {"type": "export", "src": "export const x = 1;"}
    ]"#;
    let options: ToJsxOptions = serde_json::from_str(r#"{"singleBlock": false}"#).unwrap();
    let from_json = to_jsx_from_json(input, &options).unwrap();
    let direct = to_jsx(&sample_document(), &ToJsxOptions::default()).unwrap();
    assert_eq!(from_json, direct);
}

#[test]
fn compile_from_json_rejects_unknown_kind() {
    let err = to_jsx_from_json(r#"[{"type": "table", "src": "|a|"}]"#, &ToJsxOptions::default())
        .unwrap_err();
    assert_eq!(err.to_string(), "unknown block type `table` in document body");
}

#[test]
fn compile_from_json_reports_rejected_export_before_unknown_kind() {
    let input = r#"[
        {"type": "table", "src": "|a|"},
        {"type": "export", "src": "export { default } from './Layout'"}
    ]"#;
    let err = to_jsx_from_json(input, &ToJsxOptions::default()).unwrap_err();
    assert!(
        matches!(
            err,
            TdxError::RejectedExportPattern {
                form: ReExportForm::FromModule,
                ..
            }
        ),
        "{err:?}"
    );
}

#[test]
fn compile_from_json_unknown_kind_after_clean_preamble() {
    let input = r#"[
        {"type": "export", "src": "export const a = 1"},
        {"type": "table", "src": "|a|"},
        {"type": "chart", "src": ""}
    ]"#;
    let err = to_jsx_from_json(input, &ToJsxOptions::default()).unwrap_err();
    match err {
        TdxError::UnknownBlockKind { kind } => assert_eq!(kind, "table"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn compile_from_json_stringifies_frontmatter_scalars() {
    let input = r#"[
        {"type": "yaml", "props": {"title": "Doc", "version": 1, "tags": ["a"]}},
        {"type": "md", "value": "<p/>"}
    ]"#;
    let code = to_jsx_from_json(input, &ToJsxOptions::default()).unwrap();
    assert!(code.starts_with("/**\n * title: Doc\n * version: 1\n *  ** this file"));
}

#[test]
fn compile_from_json_parses_raw_frontmatter_source() {
    let input = r#"[
        {"type": "yaml", "src": "title: Guide\nlicense: MIT\ndraft: true"},
        {"type": "md", "value": "<p/>"}
    ]"#;
    let code = to_jsx_from_json(input, &ToJsxOptions::default()).unwrap();
    assert!(code.starts_with("/**\n * title: Guide\n * license: MIT\n *  ** this file"));
    assert!(!code.contains("draft"));
}

#[test]
fn empty_fragments_leave_no_extra_blank_lines() {
    let blocks = vec![
        Block::import("import A from './A'"),
        Block::import(""),
        Block::md("<p>a</p>"),
        Block::md(""),
        Block::md("<p>b</p>"),
    ];
    let code = to_jsx(&blocks, &ToJsxOptions::default()).unwrap();
    assert!(code.starts_with("import A from './A'\n\nexport default (props) => {\n"));
    assert!(code.contains("<p>a</p>\n\n<p>b</p>\n"));
    assert!(!code.contains("\n\n\n"));
}
