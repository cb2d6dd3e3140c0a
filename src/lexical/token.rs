//! Contains the [`Token`] enum and its related types.

use std::str::FromStr;

use derive_more::From;
use enum_as_inner::EnumAsInner;
use strum_macros::Display;

use crate::{
    base::source_file::{SourceIterator, Span},
    catalog::{ElementCatalog, ElementKind},
};

/// Characters that are explicitly excluded from the equation grammar.
pub const RESERVED_SYMBOLS: &[char] = &[
    '.', ',', '_', ';', ':', '{', '}', '[', ']', '\'', '"', '!', '#', '$', '%', '&', '/', '(', ')',
    '¿', '¡', '?',
];

/// Is an enumeration containing all kinds of tokens of a chemical equation.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, From, EnumAsInner)]
#[allow(missing_docs)]
pub enum Token {
    WhiteSpaces(WhiteSpaces),
    Coefficient(Coefficient),
    Element(Element),
    ElementCount(ElementCount),
    Arrow(Arrow),
    Plus(Plus),
    Invalid(Invalid),
    InvalidElement(InvalidElement),
}

/// Fieldless discriminant of a [`Token`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[allow(missing_docs)]
pub enum TokenKind {
    #[strum(serialize = "white spaces")]
    Whitespace,
    #[strum(serialize = "coefficient")]
    Coefficient,
    #[strum(serialize = "element")]
    Element,
    #[strum(serialize = "element count")]
    ElementCount,
    #[strum(serialize = "arrow")]
    Arrow,
    #[strum(serialize = "plus")]
    Plus,
    #[strum(serialize = "invalid symbol")]
    Invalid,
    #[strum(serialize = "invalid element")]
    InvalidElement,
}

impl Token {
    /// Returns the span of the token.
    #[must_use]
    pub fn span(&self) -> &Span {
        match self {
            Self::WhiteSpaces(token) => &token.span,
            Self::Coefficient(token) => &token.span,
            Self::Element(token) => &token.span,
            Self::ElementCount(token) => &token.span,
            Self::Arrow(token) => &token.span,
            Self::Plus(token) => &token.span,
            Self::Invalid(token) => &token.span,
            Self::InvalidElement(token) => &token.span,
        }
    }

    /// Returns the kind of the token.
    #[must_use]
    pub fn kind(&self) -> TokenKind {
        match self {
            Self::WhiteSpaces(..) => TokenKind::Whitespace,
            Self::Coefficient(..) => TokenKind::Coefficient,
            Self::Element(..) => TokenKind::Element,
            Self::ElementCount(..) => TokenKind::ElementCount,
            Self::Arrow(..) => TokenKind::Arrow,
            Self::Plus(..) => TokenKind::Plus,
            Self::Invalid(..) => TokenKind::Invalid,
            Self::InvalidElement(..) => TokenKind::InvalidElement,
        }
    }

    /// Whether the token carries meaning for the equation structure, i.e. is not whitespace.
    #[must_use]
    pub fn is_significant(&self) -> bool {
        !self.is_white_spaces()
    }

    /// Whether the token is an operator separating species (`+` or `->`).
    #[must_use]
    pub fn is_operator(&self) -> bool {
        matches!(self, Self::Arrow(..) | Self::Plus(..))
    }
}

/// Represents a contiguous sequence of whitespace characters.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WhiteSpaces {
    /// Is the span that makes up the token.
    pub span: Span,
}

/// Represents a stoichiometric multiplier in front of a species, e.g. the `2` in `2H2O`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coefficient {
    /// Is the span that makes up the token.
    pub span: Span,

    /// Is the numeric value of the digits.
    pub value: u64,
}

/// Represents an element symbol that was found in the catalog.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Element {
    /// Is the span that makes up the token.
    pub span: Span,
}

impl Element {
    /// Returns the symbol of the element.
    #[must_use]
    pub fn symbol(&self) -> &str {
        self.span.str()
    }

    /// Returns the [`ElementKind`] of the symbol, if it is a symbol of the periodic table.
    ///
    /// Custom catalogs may accept symbols that are not part of the periodic table.
    #[must_use]
    pub fn element_kind(&self) -> Option<ElementKind> {
        ElementKind::from_str(self.symbol()).ok()
    }
}

/// Represents the number of atoms of the element right before it, e.g. the `2` in `H2`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementCount {
    /// Is the span that makes up the token. Empty if the count is implicit.
    pub span: Span,

    /// Is the number of atoms.
    pub value: u64,

    /// Whether the count was not written and defaults to 1.
    pub implicit: bool,
}

impl ElementCount {
    /// Creates the implicit count of 1 that follows an element written without subscript.
    #[must_use]
    pub fn implicit_after(element: &Element) -> Self {
        Self {
            span: element.span.empty_after(),
            value: 1,
            implicit: true,
        }
    }
}

/// Represents the reaction arrow `->`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Arrow {
    /// Is the span that makes up the token.
    pub span: Span,
}

/// Represents a `+` separating two species.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Plus {
    /// Is the span that makes up the token.
    pub span: Span,
}

/// Is an enumeration of the reasons why a piece of text is an [`Invalid`] token.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum InvalidKind {
    /// A character of [`RESERVED_SYMBOLS`].
    Reserved,

    /// A character that matches no rule of the grammar.
    Unrecognized,

    /// A run of digits too large to be represented.
    Overflow,
}

/// Represents a piece of text that is not part of the equation grammar.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Invalid {
    /// Is the span that makes up the token.
    pub span: Span,

    /// Is the reason why the text is invalid.
    pub kind: InvalidKind,
}

/// Represents a well-formed element symbol that is missing from the catalog.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InvalidElement {
    /// Is the span that makes up the token.
    pub span: Span,
}

impl InvalidElement {
    /// Returns the candidate symbol as written.
    #[must_use]
    pub fn symbol(&self) -> &str {
        self.span.str()
    }
}

/// Is an error that can occur when invoking the [`Token::tokenize`] method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, thiserror::Error)]
#[allow(missing_docs)]
pub enum TokenizeError {
    #[error("the iterator argument is at the end of the source code.")]
    EndOfSourceCodeIteratorArgument,
}

impl Token {
    /// Increments the iterator while the predicate returns true.
    pub fn walk_iter(iter: &mut SourceIterator, predicate: impl Fn(char) -> bool) {
        while let Some((_, character)) = iter.peek() {
            if !predicate(character) {
                break;
            }

            iter.next();
        }
    }

    /// Creates a span from the given start location to the current location of the iterator.
    fn create_span(start: usize, iter: &mut SourceIterator) -> Span {
        let end = iter
            .peek()
            .map_or_else(|| iter.source().content().len(), |(index, _)| index);

        Span::new_unchecked(iter.source().clone(), start, end)
    }

    /// Handles a contiguous sequence of whitespace characters.
    fn handle_whitespace(iter: &mut SourceIterator, start: usize) -> Self {
        Self::walk_iter(iter, char::is_whitespace);

        WhiteSpaces {
            span: Self::create_span(start, iter),
        }
        .into()
    }

    /// Handles an uppercase letter optionally followed by a lowercase letter.
    fn handle_element_candidate(
        iter: &mut SourceIterator,
        start: usize,
        catalog: &impl ElementCatalog,
    ) -> Self {
        if iter
            .peek()
            .is_some_and(|(_, character)| character.is_ascii_lowercase())
        {
            iter.next();
        }

        let span = Self::create_span(start, iter);

        if catalog.contains(span.str()) {
            Element { span }.into()
        } else {
            InvalidElement { span }.into()
        }
    }

    /// Handles a sequence of digits.
    ///
    /// Digits written right after an element symbol are its subscript, every other run of digits
    /// is a coefficient.
    fn handle_numeric(iter: &mut SourceIterator, start: usize, prev_token: Option<&Self>) -> Self {
        Self::walk_iter(iter, |character| character.is_ascii_digit());

        let span = Self::create_span(start, iter);
        let Ok(value) = span.str().parse::<u64>() else {
            return Invalid {
                span,
                kind: InvalidKind::Overflow,
            }
            .into();
        };

        let is_subscript = prev_token.is_some_and(|token| {
            matches!(token, Self::Element(..) | Self::InvalidElement(..))
                && token.span().end() == start
        });

        if is_subscript {
            ElementCount {
                span,
                value,
                implicit: false,
            }
            .into()
        } else {
            Coefficient { span, value }.into()
        }
    }

    /// Lexes the equation from the given iterator.
    ///
    /// The tokenization starts at the current location of the iterator. The function moves the
    /// iterator at least once and forwards it until it makes a token. After the token is made, the
    /// iterator is left at the next character that is not part of the token.
    ///
    /// Lexing never fails on malformed input: text outside of the grammar becomes an [`Invalid`]
    /// or [`InvalidElement`] token.
    ///
    /// # Errors
    /// - [`TokenizeError::EndOfSourceCodeIteratorArgument`] - The iterator argument is at the end of the
    ///   source code.
    pub fn tokenize(
        iter: &mut SourceIterator,
        catalog: &impl ElementCatalog,
        prev_token: Option<&Self>,
    ) -> Result<Self, TokenizeError> {
        // Gets the first character
        let (start, character) = iter
            .next()
            .ok_or(TokenizeError::EndOfSourceCodeIteratorArgument)?;

        // Found white spaces
        if character.is_whitespace() {
            Ok(Self::handle_whitespace(iter, start))
        }
        // Found element symbol candidate
        else if character.is_ascii_uppercase() {
            Ok(Self::handle_element_candidate(iter, start, catalog))
        }
        // Found coefficient/element count
        else if character.is_ascii_digit() {
            Ok(Self::handle_numeric(iter, start, prev_token))
        } else if character == '+' {
            Ok(Plus {
                span: Self::create_span(start, iter),
            }
            .into())
        }
        // Found arrow, a lone `-` falls through to invalid
        else if character == '-' && iter.next_if_eq('>').is_some() {
            Ok(Arrow {
                span: Self::create_span(start, iter),
            }
            .into())
        } else {
            let kind = if RESERVED_SYMBOLS.contains(&character) {
                InvalidKind::Reserved
            } else {
                InvalidKind::Unrecognized
            };

            Ok(Invalid {
                span: Self::create_span(start, iter),
                kind,
            }
            .into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{base::source_file::Source, catalog::PeriodicTable};

    fn lex_first(content: &str) -> Token {
        let source = Source::new("test", content);
        let mut iter = source.iter();
        Token::tokenize(&mut iter, &PeriodicTable, None).unwrap()
    }

    #[test]
    fn test_longest_symbol_match() {
        let token = lex_first("Co2");
        assert_eq!(token.as_element().unwrap().symbol(), "Co");
        assert_eq!(
            token.as_element().unwrap().element_kind(),
            Some(ElementKind::Cobalt)
        );

        let token = lex_first("CO2");
        assert_eq!(token.as_element().unwrap().symbol(), "C");
    }

    #[test]
    fn test_unknown_candidate_keeps_full_text() {
        let token = lex_first("Cx");
        assert_eq!(token.as_invalid_element().unwrap().symbol(), "Cx");
    }

    #[test]
    fn test_arrow_and_lone_dash() {
        assert_eq!(lex_first("->").kind(), TokenKind::Arrow);

        let token = lex_first("-");
        assert_eq!(token.as_invalid().unwrap().kind, InvalidKind::Unrecognized);
        assert_eq!(token.span().str(), "-");
    }

    #[test]
    fn test_invalid_kinds() {
        assert_eq!(lex_first("#").as_invalid().unwrap().kind, InvalidKind::Reserved);
        assert_eq!(lex_first("¿").as_invalid().unwrap().kind, InvalidKind::Reserved);
        assert_eq!(lex_first("h").as_invalid().unwrap().kind, InvalidKind::Unrecognized);
        assert_eq!(lex_first("→").span().str(), "→");
        assert_eq!(
            lex_first("99999999999999999999999").as_invalid().unwrap().kind,
            InvalidKind::Overflow
        );
    }

    #[test]
    fn test_digits_without_element_are_coefficient() {
        let token = lex_first("12");
        assert_eq!(token.as_coefficient().unwrap().value, 12);
    }

    #[test]
    fn test_end_of_source() {
        let source = Source::new("test", "");
        let mut iter = source.iter();
        assert_eq!(
            Token::tokenize(&mut iter, &PeriodicTable, None),
            Err(TokenizeError::EndOfSourceCodeIteratorArgument)
        );
    }
}
