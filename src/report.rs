//! Human readable summary of the elements of an accepted equation.

use std::fmt::Display;

use colored::Colorize;

use crate::{
    catalog::ElementCatalog,
    lexical::{token::Token, token_stream::TokenStream},
};

/// One line item of an [`ElementReport`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ReportEntry {
    /// A coefficient in front of a species.
    Coefficient {
        /// The value of the coefficient.
        value: u64,
    },
    /// An element with its number of atoms.
    Element {
        /// The symbol as written.
        symbol: String,
        /// The display name from the catalog.
        name: String,
        /// The number of atoms, 1 if no subscript was written.
        atoms: u64,
    },
}

/// Lists the coefficients and elements of a token stream in order of appearance.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ElementReport {
    entries: Vec<ReportEntry>,
}

impl ElementReport {
    /// Builds the report of the given token stream.
    ///
    /// Tokens other than coefficients and known elements are skipped, so the report is only
    /// meaningful for streams accepted by the checker.
    #[must_use]
    pub fn from_tokens(tokens: &TokenStream, catalog: &impl ElementCatalog) -> Self {
        let mut entries = Vec::new();
        let mut iter = tokens.iter().peekable();

        while let Some(token) = iter.next() {
            match token {
                Token::Coefficient(coefficient) => entries.push(ReportEntry::Coefficient {
                    value: coefficient.value,
                }),
                Token::Element(element) => {
                    let atoms = iter
                        .next_if(|next| next.is_element_count())
                        .and_then(Token::as_element_count)
                        .map_or(1, |count| count.value);
                    let symbol = element.symbol();

                    entries.push(ReportEntry::Element {
                        symbol: symbol.to_string(),
                        name: catalog.lookup(symbol).unwrap_or(symbol).to_string(),
                        atoms,
                    });
                }
                _ => {}
            }
        }

        Self { entries }
    }

    /// The entries of the report.
    #[must_use]
    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }
}

impl Display for ElementReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for entry in &self.entries {
            match entry {
                ReportEntry::Coefficient { value } => {
                    writeln!(f, "{} {value}", "Coefficient:".bold())?;
                }
                ReportEntry::Element {
                    symbol,
                    name,
                    atoms,
                } => {
                    writeln!(f, "{} {name}", "Element:".bold())?;
                    writeln!(f, "{} {atoms}", "Atoms:".bold())?;
                    writeln!(f, "{} {symbol}", "Symbol:".bold())?;
                    writeln!(f, "-----")?;
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{base::source_file::Source, catalog::PeriodicTable};

    #[test]
    fn test_report_entries() {
        let source = Source::new("test", "2H2O -> 2H2 + O2");
        let tokens = TokenStream::tokenize(&source, &PeriodicTable);
        let report = ElementReport::from_tokens(&tokens, &PeriodicTable);

        assert_eq!(report.entries().len(), 6);
        assert_eq!(report.entries()[0], ReportEntry::Coefficient { value: 2 });
        assert_eq!(
            report.entries()[2],
            ReportEntry::Element {
                symbol: "O".to_string(),
                name: "Oxygen".to_string(),
                atoms: 1,
            }
        );
        assert_eq!(
            report.entries()[5],
            ReportEntry::Element {
                symbol: "O".to_string(),
                name: "Oxygen".to_string(),
                atoms: 2,
            }
        );
    }

    #[test]
    fn test_report_display() {
        colored::control::set_override(false);

        let source = Source::new("test", "Na");
        let tokens = TokenStream::tokenize(&source, &PeriodicTable);
        let report = ElementReport::from_tokens(&tokens, &PeriodicTable);

        assert_eq!(
            report.to_string(),
            "Element: Sodium\nAtoms: 1\nSymbol: Na\n-----\n"
        );
    }
}
