//! Contains the [`SyntaxChecker`] that validates the structure of a [`TokenStream`].

use getset::{CopyGetters, Getters};
use itertools::Itertools as _;

use crate::{
    base::source_file::Span,
    catalog::{ElementCatalog, PeriodicTable},
    lexical::{token::Token, token_stream::TokenStream},
};

use super::error::{
    InvalidSymbol, MalformedStructure, ParseResult, StructureViolation, UnknownElement,
};

/// Minimum number of significant tokens of an equation, e.g. `H -> H` without counts.
pub const MIN_SIGNIFICANT_TOKENS: usize = 3;

/// Is an enumeration of the rules deciding where the reaction arrow may appear.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum ArrowRule {
    /// The arrow must directly follow the first species.
    ///
    /// Equations with more than one reactant, like `H2 + O2 -> H2O`, are rejected.
    Anchored,

    /// Exactly one arrow, with at least one species on each side.
    #[default]
    Scan,
}

/// A unit of the equation: a species or a single operator token.
#[derive(Debug, Clone)]
enum Unit<'a> {
    Species(Span),
    Operator(&'a Token),
}

/// Validates token streams against the equation grammar.
///
/// Checks run in a fixed order and the first violation wins:
/// 1. the position of the reaction arrow, according to the [`ArrowRule`]
/// 2. the legality of every token, in order of appearance
#[derive(Debug, Clone, Copy, Default, Getters, CopyGetters)]
pub struct SyntaxChecker<C = PeriodicTable> {
    /// Get the rule deciding where the reaction arrow may appear.
    #[get_copy = "pub"]
    rule: ArrowRule,

    /// Get the catalog used to suggest alternatives for unknown elements.
    #[get = "pub"]
    catalog: C,
}

impl<C: ElementCatalog> SyntaxChecker<C> {
    /// Creates a checker using the default [`ArrowRule`].
    #[must_use]
    pub fn new(catalog: C) -> Self {
        Self {
            rule: ArrowRule::default(),
            catalog,
        }
    }

    /// Sets the [`ArrowRule`] of the checker.
    #[must_use]
    pub fn with_rule(mut self, rule: ArrowRule) -> Self {
        self.rule = rule;
        self
    }

    /// Checks the given token stream.
    ///
    /// # Errors
    /// - [`MalformedStructure`] if the reaction arrow is missing or misplaced.
    /// - [`InvalidSymbol`] for the first token outside of the grammar.
    /// - [`UnknownElement`] for the first element symbol missing from the catalog.
    #[tracing::instrument(level = "debug", skip_all, fields(rule = ?self.rule))]
    pub fn check(&self, tokens: &TokenStream) -> ParseResult<()> {
        let result = self
            .check_structure(tokens)
            .and_then(|()| self.check_legality(tokens));

        match &result {
            Ok(()) => tracing::debug!("Equation accepted"),
            Err(err) => tracing::warn!(error = ?err, "Equation rejected"),
        }

        result
    }

    fn check_structure(&self, tokens: &TokenStream) -> ParseResult<()> {
        let significant = tokens.significant().collect::<Vec<_>>();

        if significant.len() < MIN_SIGNIFICANT_TOKENS {
            return Err(MalformedStructure::new(
                StructureViolation::TooFewTokens,
                Self::covering_span(&significant),
            )
            .into());
        }

        match self.rule {
            ArrowRule::Anchored => Self::check_anchored_arrow(&significant),
            ArrowRule::Scan => Self::check_single_arrow(&significant),
        }
    }

    /// Checks that the unit following the first species is the arrow.
    fn check_anchored_arrow(significant: &[&Token]) -> ParseResult<()> {
        let units = significant
            .iter()
            .map(|&token| {
                if token.is_operator() {
                    Unit::Operator(token)
                } else {
                    Unit::Species(token.span().clone())
                }
            })
            .coalesce(|prev, next| match (prev, next) {
                (Unit::Species(first), Unit::Species(last)) => {
                    Ok(Unit::Species(first.join(&last).unwrap_or(first)))
                }
                (prev, next) => Err((prev, next)),
            })
            .collect::<Vec<_>>();

        tracing::debug!(units = units.len(), "Checking arrow at anchor position");

        if let Some(Unit::Operator(Token::Arrow(..))) = units.get(1) {
            return Ok(());
        }

        let violation = significant
            .iter()
            .find(|token| token.is_arrow())
            .map_or_else(
                || {
                    MalformedStructure::new(
                        StructureViolation::MissingArrow,
                        Self::covering_span(significant),
                    )
                },
                |arrow| {
                    MalformedStructure::new(
                        StructureViolation::MisplacedArrow,
                        Some(arrow.span().clone()),
                    )
                },
            );

        Err(violation.into())
    }

    /// Checks that there is exactly one arrow, with a species on each side.
    fn check_single_arrow(significant: &[&Token]) -> ParseResult<()> {
        let arrows = significant
            .iter()
            .positions(|token| token.is_arrow())
            .collect::<Vec<_>>();

        tracing::debug!(arrows = arrows.len(), "Scanning for arrow");

        let index = match arrows.as_slice() {
            [] => {
                return Err(MalformedStructure::new(
                    StructureViolation::MissingArrow,
                    Self::covering_span(significant),
                )
                .into())
            }
            [index] => *index,
            [_, second, ..] => {
                return Err(MalformedStructure::new(
                    StructureViolation::MultipleArrows,
                    Some(significant[*second].span().clone()),
                )
                .into())
            }
        };

        let arrow_span = significant[index].span().clone();
        let has_species = |side: &[&Token]| side.iter().any(|token| !token.is_operator());

        if !has_species(&significant[..index]) {
            Err(MalformedStructure::new(StructureViolation::MissingReactants, Some(arrow_span)).into())
        } else if !has_species(&significant[index + 1..]) {
            Err(MalformedStructure::new(StructureViolation::MissingProducts, Some(arrow_span)).into())
        } else {
            Ok(())
        }
    }

    /// Re-scans every token and fails on the first one outside of the grammar.
    fn check_legality(&self, tokens: &TokenStream) -> ParseResult<()> {
        for token in tokens.iter() {
            match token {
                Token::Invalid(invalid) => {
                    return Err(InvalidSymbol::new(invalid.span.clone(), invalid.kind).into());
                }
                Token::InvalidElement(element) => {
                    return Err(
                        UnknownElement::from_context(element.span.clone(), &self.catalog).into(),
                    );
                }
                Token::WhiteSpaces(..)
                | Token::Coefficient(..)
                | Token::Element(..)
                | Token::ElementCount(..)
                | Token::Arrow(..)
                | Token::Plus(..) => {}
            }
        }

        Ok(())
    }

    /// Span from the first to the last of the given tokens.
    fn covering_span(tokens: &[&Token]) -> Option<Span> {
        let first = tokens.first()?.span();
        let last = tokens.last()?.span();

        first.join(last)
    }
}
