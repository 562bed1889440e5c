//! Parser for import statements

use nom::{
    Parser as _,
    character::complete::{char, space0},
    combinator::{opt, verify},
    multi::many0,
};
use pydream_it_ast::{
    Import, ImportedName, ImportedNames, Node,
    import::ImportNode,
    naming::IdentifierNode,
};

use crate::{
    call::identifier_node,
    error::{ErrorHandlingParser, ParserError},
    token::{
        Token,
        error::TokenError,
        naming::{identifier, word},
        structure::trivia,
        symbol::{comma, dot, paren_left, paren_right},
    },
    util::{InputSpan, Parser, Result, span_from},
};

/// Parses an `import` or `from ... import` statement.
///
/// `import a, b` imports two modules, so a statement can produce more than
/// one import. Relative imports are not parsed.
pub fn parse(input: InputSpan<'_>) -> Result<'_, Vec<ImportNode>, ParserError> {
    if let Ok((rest, _)) = keyword("from").parse(input) {
        let (rest, module) = module_path.convert_errors().parse(rest)?;
        let (rest, _) = keyword("import").convert_errors().parse(rest)?;
        let (rest, names) = imported_names(rest)?;

        let import = Import::From { module, names };
        return Ok((rest, vec![Node::new(import, span_from(input, rest))]));
    }

    let (mut rest, _) = keyword("import").convert_errors().parse(input)?;
    let mut imports = vec![];
    loop {
        let start = rest;
        let (after_module, module) = module_path.convert_errors().parse(rest)?;
        let (after_alias, alias) = opt(alias).convert_errors().parse(after_module)?;
        imports.push(Node::new(
            Import::Module { module, alias },
            span_from(start, after_alias),
        ));

        match comma(after_alias) {
            Ok((after_comma, _)) => rest = after_comma,
            Err(_) => return Ok((after_alias, imports)),
        }
    }
}

/// Parses the given keyword, such as `import`.
fn keyword<'a>(expected: &'static str) -> impl Parser<'a, Token<'a>, TokenError> {
    verify(word, move |word: &Token<'_>| word.lexeme() == expected)
}

/// Parses a dotted module path such as `pysb.macros`.
fn module_path(input: InputSpan<'_>) -> Result<'_, String, TokenError> {
    let (rest, first) = identifier(input)?;
    let (rest, others) = many0(|input| {
        let (rest, _) = dot(input)?;
        identifier(rest)
    })
    .parse(rest)?;

    let path = std::iter::once(first)
        .chain(others)
        .map(|segment| segment.lexeme())
        .collect::<Vec<_>>()
        .join(".");
    Ok((rest, path))
}

/// Parses `as name`.
fn alias(input: InputSpan<'_>) -> Result<'_, IdentifierNode, TokenError> {
    let (rest, _) = keyword("as").parse(input)?;
    let (rest, name) = identifier(rest)?;
    Ok((rest, identifier_node(name)))
}

/// Parses what follows `import` in a `from` statement: `*`, a list of
/// names, or a parenthesized list of names that may span lines.
fn imported_names(input: InputSpan<'_>) -> Result<'_, ImportedNames, ParserError> {
    if let Ok((rest, _)) = (char::<_, TokenError>('*'), space0).parse(input) {
        return Ok((rest, ImportedNames::Glob));
    }

    if let Ok((rest, _)) = paren_left(input) {
        let (rest, ()) = trivia.convert_errors().parse(rest)?;
        let (rest, names) = name_list(rest, true)?;
        let (rest, ()) = trivia.convert_errors().parse(rest)?;
        let (rest, _) = paren_right.convert_errors().parse(rest)?;
        return Ok((rest, ImportedNames::List(names)));
    }

    let (rest, names) = name_list(input, false)?;
    Ok((rest, ImportedNames::List(names)))
}

/// Parses `name [as alias], ...`. Inside parentheses, newlines and comments
/// may separate the names and a trailing comma is allowed.
fn name_list(
    input: InputSpan<'_>,
    parenthesized: bool,
) -> Result<'_, Vec<ImportedName>, ParserError> {
    let mut names = vec![];
    let mut rest = input;

    loop {
        let (after_name, name) = identifier.convert_errors().parse(rest)?;
        let (after_alias, alias) = opt(alias).convert_errors().parse(after_name)?;
        names.push(ImportedName::new(identifier_node(name), alias));

        let Ok((after_comma, _)) = comma(after_alias) else {
            return Ok((after_alias, names));
        };
        rest = after_comma;

        if parenthesized {
            let (after_trivia, ()) = trivia.convert_errors().parse(rest)?;
            if paren_right(after_trivia).is_ok() {
                return Ok((after_trivia, names));
            }
            rest = after_trivia;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Config;

    fn parse_imports(source: &str) -> Vec<Import> {
        let input = InputSpan::new_extra(source, Config::default());
        let (_, imports) = parse(input).expect("should parse import");
        imports.into_iter().map(Node::take_value).collect()
    }

    fn bound_names(import: &Import) -> Vec<&str> {
        match import {
            Import::From {
                names: ImportedNames::List(names),
                ..
            } => names.iter().map(ImportedName::bound_name).collect(),
            Import::From {
                names: ImportedNames::Glob,
                ..
            }
            | Import::Module { .. } => vec![],
        }
    }

    #[test]
    fn from_import_names() {
        let imports = parse_imports("from pysb.macros import bind, degrade as deg\n");

        assert_eq!(imports.len(), 1);
        assert_eq!(imports[0].module(), "pysb.macros");
        assert_eq!(bound_names(&imports[0]), vec!["bind", "deg"]);
    }

    #[test]
    fn from_import_glob() {
        let imports = parse_imports("from pysb.macros import *");
        assert!(matches!(
            &imports[0],
            Import::From {
                names: ImportedNames::Glob,
                ..
            }
        ));
    }

    #[test]
    fn from_import_parenthesized() {
        let imports = parse_imports("from pysb.macros import (\n    bind,\n    catalyze,  # enzymes\n)");
        assert_eq!(bound_names(&imports[0]), vec!["bind", "catalyze"]);
    }

    #[test]
    fn import_modules_with_alias() {
        let imports = parse_imports("import numpy as np, pysb.macros as m");

        assert_eq!(imports.len(), 2);
        assert_eq!(imports[1].module(), "pysb.macros");
        let Import::Module { alias, .. } = &imports[1] else {
            panic!("expected a module import");
        };
        assert_eq!(alias.as_ref().map(|alias| alias.as_str()), Some("m"));
    }

    #[test]
    fn relative_import_is_not_parsed() {
        let input = InputSpan::new_extra("from . import shared", Config::default());
        let Err(nom::Err::Error(_)) = parse(input) else {
            panic!("relative imports are not parsed");
        };
    }
}
