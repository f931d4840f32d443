use anyhow::{Result, anyhow};
use swc_common::{BytePos, FileName, SourceMap};
use swc_ecma_ast::Module;
use swc_ecma_parser::{Parser, StringInput, Syntax, TsSyntax};

#[derive(Debug)]
pub struct ParsedJSX {
    pub module: Module,
    /// Position of the first byte of the file within the source map. Spans on
    /// AST nodes are offset by this, so splicing subtracts it to get plain
    /// byte offsets into `source`.
    pub start_pos: BytePos,
    pub source: String,
}

/// Parse JSX/TSX source code string into an AST.
pub fn parse_jsx_source(code: String, file_path: &str) -> Result<ParsedJSX> {
    let source_map = SourceMap::default();
    let source_file =
        source_map.new_source_file(FileName::Real(file_path.into()).into(), code.clone());

    let syntax = Syntax::Typescript(TsSyntax {
        tsx: true,
        ..Default::default()
    });
    let mut parser = Parser::new(syntax, StringInput::from(&*source_file), None);
    let module = parser
        .parse_module()
        .map_err(|e| anyhow!("Failed to parse {}: {:?}", file_path, e))?;

    Ok(ParsedJSX {
        module,
        start_pos: source_file.start_pos,
        source: code,
    })
}
