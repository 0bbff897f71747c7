use anyhow::{Result, anyhow};
use swc_common::{
    FileName, GLOBALS, Globals, SourceMap, comments::SingleThreadedComments,
};
use swc_ecma_ast::Module;
use swc_ecma_parser::{Parser, StringInput, Syntax, TsSyntax};

/// A parsed source file together with the side tables the checker needs.
pub struct ParsedSource {
    pub module: Module,
    pub source_map: SourceMap,
    pub comments: SingleThreadedComments,
}

/// Parse a JS/TS/JSX/TSX source string into an AST.
///
/// Everything is parsed as TypeScript with TSX enabled, which is a superset
/// of the other supported dialects. Each call creates its own SourceMap so
/// files can be parsed from parallel workers.
pub fn parse_source(code: String, file_path: &str) -> Result<ParsedSource> {
    GLOBALS.set(&Globals::new(), || {
        let source_map = SourceMap::default();
        let source_file =
            source_map.new_source_file(FileName::Real(file_path.into()).into(), code);

        let syntax = Syntax::Typescript(TsSyntax {
            tsx: true,
            ..Default::default()
        });
        let comments = SingleThreadedComments::default();
        let mut parser = Parser::new(syntax, StringInput::from(&*source_file), Some(&comments));
        let module = parser
            .parse_module()
            .map_err(|e| anyhow!("Failed to parse: {:?}", e))?;

        Ok(ParsedSource {
            module,
            source_map,
            comments,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tsx() {
        let code = "export function App() { return <div>hi</div>; }";
        let parsed = parse_source(code.to_string(), "app.tsx").unwrap();
        assert_eq!(parsed.module.body.len(), 1);
    }

    #[test]
    fn test_parse_failure() {
        let code = "export default (]";
        assert!(parse_source(code.to_string(), "broken.ts").is_err());
    }
}
