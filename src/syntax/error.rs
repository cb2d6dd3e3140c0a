//! Contains the error types that can occur while checking the syntax of an equation.

use std::fmt::Display;

use getset::{CopyGetters, Getters};
use itertools::Itertools as _;

use crate::{
    base::{
        log::{Message, Severity, SourceCodeDisplay},
        source_file::Span,
    },
    catalog::ElementCatalog,
    lexical::token::InvalidKind,
};

/// Result type for checking operations.
pub type ParseResult<T> = Result<T, Error>;

/// An enumeration containing all kinds of syntactic errors that can occur while checking an
/// equation.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, thiserror::Error)]
#[allow(missing_docs)]
pub enum Error {
    #[error(transparent)]
    InvalidSymbol(#[from] InvalidSymbol),
    #[error(transparent)]
    UnknownElement(#[from] UnknownElement),
    #[error(transparent)]
    MalformedStructure(#[from] MalformedStructure),
}

/// A piece of text matches no rule of the grammar.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Getters, CopyGetters)]
pub struct InvalidSymbol {
    /// The span of the offending text.
    #[get = "pub"]
    span: Span,

    /// The reason why the text is invalid.
    #[get_copy = "pub"]
    kind: InvalidKind,
}

impl InvalidSymbol {
    /// Creates a new [`InvalidSymbol`] error.
    #[must_use]
    pub fn new(span: Span, kind: InvalidKind) -> Self {
        Self { span, kind }
    }

    /// The offending text as written.
    #[must_use]
    pub fn text(&self) -> &str {
        self.span.str()
    }
}

impl Display for InvalidSymbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = match self.kind {
            InvalidKind::Overflow => format!("number `{}` is too large", self.text()),
            InvalidKind::Reserved | InvalidKind::Unrecognized => {
                format!("invalid symbol `{}`", self.text())
            }
        };
        let help = match self.kind {
            InvalidKind::Reserved => "this symbol is not allowed in a chemical equation",
            InvalidKind::Unrecognized => {
                "only element symbols, numbers, `+` and `->` may appear in a chemical equation"
            }
            InvalidKind::Overflow => "coefficients and element counts must fit in 64 bits",
        };

        write!(f, "{}", Message::new(Severity::Error, message))?;
        write!(f, "\n{}", SourceCodeDisplay::new(&self.span, Some(help)))
    }
}

impl std::error::Error for InvalidSymbol {}

/// A well-formed element symbol is missing from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Getters)]
pub struct UnknownElement {
    /// The span of the candidate symbol.
    #[get = "pub"]
    span: Span,

    /// Known symbols that are similar to the candidate.
    #[get = "pub"]
    alternatives: Vec<String>,
}

impl UnknownElement {
    /// Creates the error for the candidate symbol at `span`, looking for similar symbols in the
    /// given catalog.
    #[must_use]
    pub fn from_context(span: Span, catalog: &impl ElementCatalog) -> Self {
        let own_symbol = span.str();
        let alternatives = catalog
            .symbols()
            .into_iter()
            .filter_map(|symbol| {
                let normalized_distance = strsim::normalized_damerau_levenshtein(
                    &own_symbol.to_lowercase(),
                    &symbol.to_lowercase(),
                );
                (normalized_distance >= 0.5).then_some((normalized_distance, symbol))
            })
            .sorted_by(|a, b| {
                b.0.partial_cmp(&a.0)
                    .unwrap_or(std::cmp::Ordering::Equal)
                    .then_with(|| a.1.cmp(b.1))
            })
            .map(|(_, symbol)| symbol.to_string())
            .take(8)
            .collect::<Vec<_>>();

        Self { span, alternatives }
    }

    /// The candidate symbol as written.
    #[must_use]
    pub fn symbol(&self) -> &str {
        self.span.str()
    }
}

impl Display for UnknownElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = format!("unknown element `{}`", self.symbol());
        write!(f, "{}", Message::new(Severity::Error, message))?;

        let help_message = if self.alternatives.is_empty() {
            None
        } else {
            Some(format!(
                "did you mean {}?",
                self.alternatives
                    .iter()
                    .map(|alternative| format!("`{alternative}`"))
                    .join(", ")
            ))
        };

        write!(
            f,
            "\n{}",
            SourceCodeDisplay::new(&self.span, help_message.as_ref())
        )
    }
}

impl std::error::Error for UnknownElement {}

/// Enumeration of the ways the token stream can miss the `<species> -> <species>` shape.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StructureViolation {
    /// Fewer than three significant tokens.
    TooFewTokens,
    /// No `->` at all.
    MissingArrow,
    /// A `->` exists but not right after the first species.
    MisplacedArrow,
    /// More than one `->`.
    MultipleArrows,
    /// Nothing but operators before the `->`.
    MissingReactants,
    /// Nothing but operators after the `->`.
    MissingProducts,
}

impl StructureViolation {
    fn description(self) -> &'static str {
        match self {
            Self::TooFewTokens => "equation is too short",
            Self::MissingArrow => "equation has no reaction arrow `->`",
            Self::MisplacedArrow => "reaction arrow `->` is expected right after the first species",
            Self::MultipleArrows => "equation has more than one reaction arrow `->`",
            Self::MissingReactants => "equation has no reactants before the reaction arrow",
            Self::MissingProducts => "equation has no products after the reaction arrow",
        }
    }
}

/// The token stream lacks the minimal arrow-anchored shape of an equation.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Getters, CopyGetters)]
pub struct MalformedStructure {
    /// The way the structure is violated.
    #[get_copy = "pub"]
    violation: StructureViolation,

    /// The span pointing at the problem, absent for an empty equation.
    #[get = "pub"]
    span: Option<Span>,
}

impl MalformedStructure {
    /// Creates a new [`MalformedStructure`] error.
    #[must_use]
    pub fn new(violation: StructureViolation, span: Option<Span>) -> Self {
        Self { violation, span }
    }
}

impl Display for MalformedStructure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            Message::new(Severity::Error, self.violation.description())
        )?;

        self.span.as_ref().map_or(Ok(()), |span| {
            write!(
                f,
                "\n{}",
                SourceCodeDisplay::new(
                    span,
                    Some("an equation has the shape `<reactants> -> <products>`")
                )
            )
        })
    }
}

impl std::error::Error for MalformedStructure {}
