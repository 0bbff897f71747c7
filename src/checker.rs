//! Unlocalized string detection.
//!
//! Walks a parsed module once and reports string literals, template
//! literals, and JSX text that are not marked for translation with the
//! Lingui macros (t``, msg``) or the `<Trans>` component.
//!
//! Whether a node is exempt often depends on an enclosing construct that
//! the walk enters before reaching the node itself (a `<Trans>` ancestor,
//! a tagged template, an ignored attribute). Entry handlers record those
//! decisions in a per-file exemption set keyed by node span; the node's
//! own exit check consumes the entry exactly once. The set lives and dies
//! with one file's traversal, so parallel file checks cannot interfere.

use std::collections::HashSet;

use swc_common::{BytePos, SourceMap, Span, comments::SingleThreadedComments};
use swc_ecma_ast::{
    Expr, ImportDecl, JSXAttr, JSXAttrName, JSXElement, JSXElementName, JSXText, Lit, Module,
    Str, TaggedTpl, Tpl, TsConstAssertion,
};
use swc_ecma_visit::{Visit, VisitWith};

use crate::config::CompiledOptions;
use crate::directives::DisableContext;
use crate::issues::{Issue, MessageKind};

/// Template tags that mark a string as already localized.
const LOCALIZATION_TAGS: &[&str] = &["t", "msg"];

/// Component whose JSX text children are already localized.
const LOCALIZATION_COMPONENT: &str = "Trans";

pub struct UnlocalizedChecker<'a> {
    file_path: &'a str,
    options: &'a CompiledOptions,
    source_map: &'a SourceMap,
    disable_context: DisableContext,
    /// Nodes pre-exempted by an enclosing construct. Written on entry of
    /// the construct, consumed exactly once by the node's own check.
    exempted: HashSet<Span>,
    /// Name of the innermost JSX attribute currently being visited.
    current_attr: Option<String>,
    /// Inside a `<Trans>` element, at any depth.
    in_trans: bool,
    issues: Vec<Issue>,
}

impl<'a> UnlocalizedChecker<'a> {
    pub fn new(
        file_path: &'a str,
        options: &'a CompiledOptions,
        source_map: &'a SourceMap,
        comments: &SingleThreadedComments,
    ) -> Self {
        let disable_context = DisableContext::from_comments(comments, source_map);
        Self {
            file_path,
            options,
            source_map,
            disable_context,
            exempted: HashSet::new(),
            current_attr: None,
            in_trans: false,
            issues: Vec::new(),
        }
    }

    pub fn check(mut self, module: &Module) -> Vec<Issue> {
        self.visit_module(module);
        self.issues
    }

    fn is_ignored_attribute(&self, name: &str) -> bool {
        self.options
            .ignore_attributes
            .iter()
            .any(|re| re.is_match(name))
    }

    fn is_ignored_text(&self, text: &str) -> bool {
        self.options.ignore.iter().any(|re| re.is_match(text))
    }

    fn report(&mut self, pos: BytePos, text: &str, kind: MessageKind) {
        let loc = self.source_map.lookup_char_pos(pos);
        if self.disable_context.should_ignore(loc.line) {
            return;
        }
        let source_line = loc.file.get_line(loc.line - 1).map(|cow| cow.to_string());
        self.issues.push(Issue::new(
            self.file_path,
            loc.line,
            loc.col_display + 1,
            text,
            kind,
            source_line,
        ));
    }
}

fn unwrap_parens(expr: &Expr) -> &Expr {
    match expr {
        Expr::Paren(paren) => unwrap_parens(&paren.expr),
        _ => expr,
    }
}

/// Static chunks joined with `*` placeholders for the interpolations.
fn template_preview(tpl: &Tpl) -> String {
    let mut preview = String::new();
    for (i, quasi) in tpl.quasis.iter().enumerate() {
        if let Some(chunk) = quasi.cooked.as_ref().and_then(|cooked| cooked.as_str()) {
            preview.push_str(chunk);
        }
        if i < tpl.quasis.len() - 1 {
            preview.push('*');
        }
    }
    preview
}

impl Visit for UnlocalizedChecker<'_> {
    fn visit_import_decl(&mut self, node: &ImportDecl) {
        // Import sources are module paths, not UI text
        self.exempted.insert(node.src.span);
        node.visit_children_with(self);
    }

    fn visit_tagged_tpl(&mut self, node: &TaggedTpl) {
        if let Expr::Ident(tag) = &*node.tag
            && LOCALIZATION_TAGS.contains(&tag.sym.as_str())
        {
            self.exempted.insert(node.tpl.span);
        }
        node.visit_children_with(self);
    }

    fn visit_ts_const_assertion(&mut self, node: &TsConstAssertion) {
        // `"foo" as const` narrows the value to its literal type; it is a
        // type-level idiom, not display text
        match unwrap_parens(&node.expr) {
            Expr::Lit(Lit::Str(s)) => {
                self.exempted.insert(s.span);
            }
            Expr::Tpl(tpl) => {
                self.exempted.insert(tpl.span);
            }
            _ => {}
        }
        node.visit_children_with(self);
    }

    fn visit_jsx_element(&mut self, node: &JSXElement) {
        let is_trans = matches!(
            &node.opening.name,
            JSXElementName::Ident(ident) if ident.sym == LOCALIZATION_COMPONENT
        );
        let prev = self.in_trans;
        self.in_trans = prev || is_trans;
        node.visit_children_with(self);
        self.in_trans = prev;
    }

    fn visit_jsx_attr(&mut self, node: &JSXAttr) {
        let attr_name = match &node.name {
            JSXAttrName::Ident(ident) => ident.sym.to_string(),
            JSXAttrName::JSXNamespacedName(ns) => {
                format!("{}-{}", ns.ns.sym, ns.name.sym)
            }
        };
        let prev = self.current_attr.replace(attr_name);
        node.visit_children_with(self);
        self.current_attr = prev;
    }

    fn visit_str(&mut self, node: &Str) {
        // A literal under an ignored attribute is pre-exempted on entry.
        // Template literals deliberately do not get this treatment.
        let in_ignored_attr = self
            .current_attr
            .as_deref()
            .is_some_and(|attr| self.is_ignored_attribute(attr));
        if in_ignored_attr {
            self.exempted.insert(node.span);
        }

        if self.exempted.remove(&node.span) {
            return;
        }
        let Some(value) = node.value.as_str() else {
            // Lone surrogates cannot be user-facing copy
            return;
        };
        if self.is_ignored_text(value) {
            return;
        }
        self.report(node.span.lo, value, MessageKind::Default);
    }

    fn visit_tpl(&mut self, node: &Tpl) {
        // Nested expressions first; an interpolated string gets its own check
        node.visit_children_with(self);

        if self.exempted.remove(&node.span) {
            return;
        }
        // Every static chunk has to match an ignore pattern for the template
        // as a whole to be skipped; a partial match is not enough
        let all_ignored = node.quasis.iter().all(|quasi| {
            quasi
                .cooked
                .as_ref()
                .and_then(|cooked| cooked.as_str())
                .is_some_and(|chunk| self.is_ignored_text(chunk))
        });
        if all_ignored {
            return;
        }
        let preview = template_preview(node);
        self.report(node.span.lo, &preview, MessageKind::Default);
    }

    fn visit_jsx_text(&mut self, node: &JSXText) {
        if self.in_trans {
            self.exempted.insert(node.span);
        }

        if self.exempted.remove(&node.span) {
            return;
        }
        let raw_value = &node.value;
        let trimmed = raw_value.trim();
        if trimmed.is_empty() {
            return;
        }
        if self.is_ignored_text(raw_value) {
            return;
        }

        // Point at the first non-whitespace character so multiline text
        // reports the line the text starts on, not the opening tag's
        let trim_start_offset = raw_value.len() - raw_value.trim_start().len();
        let pos = node.span.lo + BytePos(trim_start_offset as u32);
        self.report(pos, trimmed, MessageKind::ForJsxText);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::config::Config;
    use crate::parser::parse_source;

    fn check_code(code: &str, config: &Config) -> Vec<Issue> {
        let options = config.compiled().expect("invalid test config");
        let parsed = parse_source(code.to_string(), "test.tsx").expect("parse failed");
        let checker =
            UnlocalizedChecker::new("test.tsx", &options, &parsed.source_map, &parsed.comments);
        checker.check(&parsed.module)
    }

    fn config_with(ignore_attributes: &[&str], ignore: &[&str]) -> Config {
        Config {
            ignore_attributes: ignore_attributes.iter().map(|s| s.to_string()).collect(),
            ignore: ignore.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_bare_literal_reported() {
        let issues = check_code(r#"const label = "Submit";"#, &Config::default());

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].text, "Submit");
        assert_eq!(issues[0].kind, MessageKind::Default);
        assert_eq!(issues[0].line, 1);
    }

    #[test]
    fn test_import_source_not_reported() {
        let code = "import { t } from \"@lingui/macro\";\nconst label = \"Save\";";
        let issues = check_code(code, &Config::default());

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].text, "Save");
    }

    #[test]
    fn test_non_string_literals_not_reported() {
        let code = "const n = 42;\nconst b = true;\nconst r = /pattern/;";
        let issues = check_code(code, &Config::default());

        assert!(issues.is_empty());
    }

    #[test]
    fn test_ignore_pattern_exempts_literal() {
        let config = config_with(&[], &["^https?://"]);
        let issues = check_code(r#"const url = "https://example.com";"#, &config);

        assert!(issues.is_empty());
    }

    #[test]
    fn test_ignore_pattern_is_unanchored_search() {
        let config = config_with(&[], &["av"]);
        let issues = check_code(r#"const label = "Save";"#, &config);

        assert!(issues.is_empty());
    }

    #[test]
    fn test_const_assertion_exempt() {
        let code = "const x = \"foo\" as const;\nconst y = (\"bar\") as const;\nconst z = `baz` as const;";
        let issues = check_code(code, &Config::default());

        assert!(issues.is_empty(), "got {:?}", issues);
    }

    #[test]
    fn test_widening_cast_still_reported() {
        let issues = check_code(r#"const x = "foo" as string;"#, &Config::default());

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].text, "foo");
    }

    #[test]
    fn test_localization_tags_exempt_templates() {
        let code = "const a = t`Hello ${name}`;\nconst b = msg`Hello`;";
        let issues = check_code(code, &Config::default());

        assert!(issues.is_empty(), "got {:?}", issues);
    }

    #[test]
    fn test_other_templates_reported() {
        let code = "const a = gql`query { me }`;\nconst b = `Hello`;";
        let issues = check_code(code, &Config::default());

        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].kind, MessageKind::Default);
        assert_eq!(issues[1].text, "Hello");
    }

    #[test]
    fn test_template_interpolation_preview() {
        let issues = check_code("const a = `Hi ${name}!`;", &Config::default());

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].text, "Hi *!");
    }

    #[test]
    fn test_template_exempt_when_every_chunk_ignored() {
        let config = config_with(&[], &["^Hello$", "^World$"]);
        let issues = check_code("const a = `Hello`;\nconst b = `Hello${x}World`;", &config);

        assert!(issues.is_empty(), "got {:?}", issues);
    }

    #[test]
    fn test_template_partial_chunk_match_still_reported() {
        let config = config_with(&[], &["^Hello$"]);
        let issues = check_code("const a = `Hello${x}Bye`;", &config);

        assert_eq!(issues.len(), 1);
    }

    #[test]
    fn test_string_inside_tagged_template_interpolation_reported() {
        let issues = check_code(r#"const a = t`Hi ${"there"}`;"#, &Config::default());

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].text, "there");
    }

    #[test]
    fn test_jsx_text_reported() {
        let code = "export function App() {\n  return <div>Hello</div>;\n}";
        let issues = check_code(code, &Config::default());

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].text, "Hello");
        assert_eq!(issues[0].kind, MessageKind::ForJsxText);
        assert_eq!(issues[0].line, 2);
    }

    #[test]
    fn test_trans_exempts_jsx_text_at_any_depth() {
        let code = r#"export function App() {
  return (
    <Trans>
      <div>
        <span>Deeply wrapped</span>
      </div>
    </Trans>
  );
}"#;
        let issues = check_code(code, &Config::default());

        assert!(issues.is_empty(), "got {:?}", issues);
    }

    #[test]
    fn test_string_expression_inside_trans_still_reported() {
        let code = "export function App() {\n  return <Trans>{\"Hello\"}</Trans>;\n}";
        let issues = check_code(code, &Config::default());

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, MessageKind::Default);
    }

    #[test]
    fn test_trans_exemption_does_not_leak_to_siblings() {
        let code = r#"export function App() {
  return (
    <>
      <Trans>hi</Trans>
      <div>hi</div>
    </>
  );
}"#;
        let issues = check_code(code, &Config::default());

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, MessageKind::ForJsxText);
        assert_eq!(issues[0].line, 5);
    }

    #[test]
    fn test_whitespace_jsx_text_not_reported() {
        let code = r#"export function App() {
  return (
    <div>
      <span>Hello</span>

      <span>World</span>
    </div>
  );
}"#;
        let issues = check_code(code, &Config::default());

        assert_eq!(issues.len(), 2, "got {:?}", issues);
        assert!(issues.iter().any(|i| i.text == "Hello"));
        assert!(issues.iter().any(|i| i.text == "World"));
    }

    #[test]
    fn test_multiline_jsx_text_reports_text_line() {
        let code = "export function App() {\n  return (\n    <div>\n\n      Hello World\n\n    </div>\n  );\n}";
        let issues = check_code(code, &Config::default());

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].text, "Hello World");
        assert_eq!(issues[0].line, 5);
    }

    #[test]
    fn test_attribute_value_falls_through_to_default() {
        let code = "export function App() {\n  return <div title=\"Save\">Hello</div>;\n}";
        let issues = check_code(code, &Config::default());

        assert_eq!(issues.len(), 2, "got {:?}", issues);
        assert_eq!(issues[0].text, "Save");
        assert_eq!(issues[0].kind, MessageKind::Default);
        assert_eq!(issues[1].text, "Hello");
        assert_eq!(issues[1].kind, MessageKind::ForJsxText);
    }

    #[test]
    fn test_ignored_attribute_value_not_reported() {
        let config = config_with(&["^className$"], &[]);
        let code =
            "export function App() {\n  return <div className=\"flex items-center\">text</div>;\n}";
        let issues = check_code(code, &config);

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].text, "text");
        assert_eq!(issues[0].kind, MessageKind::ForJsxText);
    }

    #[test]
    fn test_ignored_attribute_covers_nested_literals() {
        let config = config_with(&["^title$"], &[]);
        let code = "export function App() {\n  return <div title={ok ? \"Yes\" : \"No\"}>x</div>;\n}";
        let issues = check_code(code, &config);

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].text, "x");
    }

    #[test]
    fn test_attribute_name_match_is_unanchored() {
        let config = config_with(&["testid"], &[]);
        let code = "export function App() {\n  return <div data-testid=\"main-panel\">x</div>;\n}";
        let issues = check_code(code, &config);

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].text, "x");
    }

    #[test]
    fn test_template_in_ignored_attribute_still_reported() {
        // Attribute exemption covers string literals only
        let config = config_with(&["^title$"], &[]);
        let code = "export function App() {\n  return <div title={`Save`}>x</div>;\n}";
        let issues = check_code(code, &config);

        assert_eq!(issues.len(), 2, "got {:?}", issues);
        assert_eq!(issues[0].text, "Save");
        assert_eq!(issues[0].kind, MessageKind::Default);
    }

    #[test]
    fn test_object_string_keys_reported() {
        let issues = check_code(r#"const o = { "key": 1 };"#, &Config::default());

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].text, "key");
    }

    #[test]
    fn test_disable_next_line() {
        let code = r#"export function App() {
  return (
    <div>
      {/* translint-disable-next-line */}
      <span>Hidden</span>
      <span>Visible</span>
    </div>
  );
}"#;
        let issues = check_code(code, &Config::default());

        assert_eq!(issues.len(), 1, "got {:?}", issues);
        assert_eq!(issues[0].text, "Visible");
    }

    #[test]
    fn test_disable_range_with_consecutive_disables() {
        let code = r#"export function App() {
  return (
    <div>
      {/* translint-disable */}
      <span>Hello</span>
      {/* translint-disable */}
      <span>World</span>
      {/* translint-enable */}
      <span>Visible</span>
    </div>
  );
}"#;
        let issues = check_code(code, &Config::default());

        assert_eq!(issues.len(), 1, "got {:?}", issues);
        assert_eq!(issues[0].text, "Visible");
    }

    #[test]
    fn test_rerun_is_idempotent() {
        let code = r#"export function App() {
  return (
    <div title="Save">
      Hello
      <Trans>wrapped</Trans>
      {t`tagged`}
    </div>
  );
}"#;
        let config = config_with(&["^data-"], &["^x$"]);

        let first = check_code(code, &config);
        let second = check_code(code, &config);

        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }
}
