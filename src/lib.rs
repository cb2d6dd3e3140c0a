//! `chemlex` checks textual chemical equations.
//!
//! An equation such as `2H2 + O2 -> 2H2O` is first split into tokens by
//! [`TokenStream::tokenize`], then validated by a [`SyntaxChecker`]. Only lexical and syntactic
//! well-formedness is checked; equations are neither balanced nor checked for chemical
//! plausibility.

#![deny(
    missing_debug_implementations,
    missing_copy_implementations,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    clippy::missing_errors_doc
)]
#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::missing_panics_doc, clippy::missing_const_for_fn)]

pub mod base;
pub mod catalog;
pub mod lexical;
pub mod report;
pub mod syntax;

use base::{source_file::Source, Handler, PrintHandler, Result};
use catalog::{ElementCatalog, PeriodicTable};
use syntax::checker::{ArrowRule, SyntaxChecker};

use crate::lexical::token_stream::TokenStream;

/// Converts the given equation to tokens.
#[must_use]
pub fn tokenize(input: &str, catalog: &impl ElementCatalog) -> TokenStream {
    let source = Source::new("<input>", input);

    TokenStream::tokenize(&source, catalog)
}

/// Tokenizes and checks the given equation.
///
/// The diagnostic of a rejected equation is sent to the `handler` before being returned.
///
/// # Errors
/// - If the equation is not syntactically well-formed.
pub fn check<C, H>(input: &str, catalog: &C, rule: ArrowRule, handler: &H) -> Result<TokenStream>
where
    C: ElementCatalog,
    H: Handler<base::Error>,
{
    let tokens = tokenize(input, catalog);

    SyntaxChecker::new(catalog)
        .with_rule(rule)
        .check(&tokens)
        .map_err(|err| {
            let err = base::Error::from(err);
            handler.receive(err.clone());
            err
        })?;

    Ok(tokens)
}

/// Checks the given equation against the periodic table, printing the diagnostic to stderr on
/// failure.
///
/// # Errors
/// - If the equation is not syntactically well-formed.
pub fn validate(input: &str) -> Result<TokenStream> {
    check(
        input,
        &PeriodicTable,
        ArrowRule::default(),
        &PrintHandler::new(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::SilentHandler;

    #[test]
    fn test_check_reports_to_handler() {
        let handler = SilentHandler::new();
        let result = check("H2 -> H2O#", &PeriodicTable, ArrowRule::Scan, &handler);

        assert!(result.is_err());
        assert_eq!(handler.into_received(), vec![result.unwrap_err()]);
    }

    #[test]
    fn test_validate_rejects_invalid_equation() {
        assert!(matches!(
            validate("H2 -> H2O#"),
            Err(base::Error::ParseError(_))
        ));
        assert!(validate("2H2 + O2 -> 2H2O").is_ok());
    }

    #[test]
    fn test_check_accepts_without_reporting() {
        let handler = SilentHandler::new();
        let tokens = check("H2 + O2 -> H2O", &PeriodicTable, ArrowRule::Scan, &handler).unwrap();

        assert!(handler.is_empty());
        assert_eq!(tokens.to_source_string(), "H2 + O2 -> H2O");
    }
}
