//! Contains the [`TokenStream`] struct.

use std::{fmt::Debug, sync::Arc};

use derive_more::Deref;

use crate::{base::source_file::Source, catalog::ElementCatalog};

use super::token::{ElementCount, Token, TokenizeError};

/// Is an ordered list of [`Token`]s covering the whole equation.
///
/// This struct is the final output of the lexical analysis phase and is meant to be consumed by
/// the [`SyntaxChecker`](crate::syntax::checker::SyntaxChecker). It is never mutated after
/// tokenization.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Deref)]
pub struct TokenStream {
    #[deref]
    tokens: Vec<Token>,
}

impl Debug for TokenStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.tokens.iter()).finish()
    }
}

impl TokenStream {
    /// Tokenizes the given equation.
    ///
    /// This function tokenizes the source by calling [`Token::tokenize()`] repeatedly until the
    /// source is exhausted. Every element written without subscript is followed by an implicit
    /// [`ElementCount`] of 1.
    ///
    /// Tokenization is total: every character of the source ends up in exactly one token.
    ///
    /// A subscript too large for `u64` is lexed as an [`Invalid`](super::token::Invalid) token
    /// and its element gets no [`ElementCount`] at all; the checker rejects such a stream anyway.
    #[must_use]
    #[tracing::instrument(level = "debug", skip_all, fields(source = %source.identifier()))]
    pub fn tokenize(source: &Arc<Source>, catalog: &impl ElementCatalog) -> Self {
        let mut tokens = Vec::new();
        let mut source_iterator = source.iter();

        loop {
            match Token::tokenize(&mut source_iterator, catalog, tokens.last()) {
                Ok(token) => {
                    tracing::trace!(kind = %token.kind(), text = token.span().str(), "lexed token");

                    let implicit_count = token.as_element().and_then(|element| {
                        let has_subscript = source_iterator
                            .peek()
                            .is_some_and(|(_, character)| character.is_ascii_digit());

                        (!has_subscript).then(|| ElementCount::implicit_after(element))
                    });

                    tokens.push(token);
                    tokens.extend(implicit_count.map(Token::from));
                }
                Err(TokenizeError::EndOfSourceCodeIteratorArgument) => {
                    break;
                }
            }
        }

        tracing::debug!(amount = tokens.len(), "Tokenized equation");

        Self { tokens }
    }

    /// Iterates over the tokens that are not whitespace.
    pub fn significant(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter().filter(|token| token.is_significant())
    }

    /// Reassembles the text the tokens were lexed from.
    #[must_use]
    pub fn to_source_string(&self) -> String {
        self.tokens.iter().map(|token| token.span().str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        catalog::{CustomCatalog, PeriodicTable},
        lexical::token::TokenKind,
    };

    fn kinds(stream: &TokenStream) -> Vec<TokenKind> {
        stream.iter().map(Token::kind).collect()
    }

    #[test]
    fn test_implicit_count_follows_element() {
        let source = Source::new("test", "O");
        let stream = TokenStream::tokenize(&source, &PeriodicTable);

        assert_eq!(kinds(&stream), vec![TokenKind::Element, TokenKind::ElementCount]);

        let count = stream[1].as_element_count().unwrap();
        assert!(count.implicit);
        assert_eq!(count.value, 1);
        assert!(count.span.is_empty());
    }

    #[test]
    fn test_whitespace_breaks_subscript_binding() {
        let source = Source::new("test", "H 2");
        let stream = TokenStream::tokenize(&source, &PeriodicTable);

        assert_eq!(
            kinds(&stream),
            vec![
                TokenKind::Element,
                TokenKind::ElementCount,
                TokenKind::Whitespace,
                TokenKind::Coefficient,
            ]
        );
    }

    #[test]
    fn test_subscript_after_unknown_element() {
        let source = Source::new("test", "Xx3");
        let stream = TokenStream::tokenize(&source, &PeriodicTable);

        assert_eq!(
            kinds(&stream),
            vec![TokenKind::InvalidElement, TokenKind::ElementCount]
        );
        assert_eq!(stream[1].as_element_count().unwrap().value, 3);
    }

    #[test]
    fn test_overflowing_subscript_leaves_element_without_count() {
        let source = Source::new("test", "H99999999999999999999999");
        let stream = TokenStream::tokenize(&source, &PeriodicTable);

        assert_eq!(kinds(&stream), vec![TokenKind::Element, TokenKind::Invalid]);
        assert_eq!(
            stream[1].as_invalid().unwrap().kind,
            crate::lexical::token::InvalidKind::Overflow
        );
    }

    #[test]
    fn test_custom_catalog_is_used() {
        let catalog = CustomCatalog::new().with("O", "Oxygen");
        let source = Source::new("test", "H2O");
        let stream = TokenStream::tokenize(&source, &catalog);

        assert_eq!(
            kinds(&stream),
            vec![
                TokenKind::InvalidElement,
                TokenKind::ElementCount,
                TokenKind::Element,
                TokenKind::ElementCount,
            ]
        );
    }

    #[test]
    fn test_significant_skips_whitespace() {
        let source = Source::new("test", " H2 ->\tO2 ");
        let stream = TokenStream::tokenize(&source, &PeriodicTable);

        assert!(stream.significant().all(Token::is_significant));
        assert_eq!(stream.significant().count(), 5);
        assert_eq!(stream.to_source_string(), " H2 ->\tO2 ");
    }
}
