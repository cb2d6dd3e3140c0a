//! The catalog of chemical elements that the tokenizer validates candidate symbols against.

use std::{collections::BTreeMap, collections::HashMap, str::FromStr, sync::OnceLock};

use strum::IntoEnumIterator;
use strum_macros::{EnumIter, IntoStaticStr};

/// A read-only mapping from element symbols to their display names.
///
/// Lookups are exact: `"Co"` and `"CO"` are different keys and no fuzzy matching happens here.
pub trait ElementCatalog {
    /// Looks up the display name of the element with the given symbol.
    fn lookup(&self, symbol: &str) -> Option<&str>;

    /// Lists every symbol known to the catalog.
    fn symbols(&self) -> Vec<&str>;

    /// Whether the catalog knows the given symbol.
    fn contains(&self, symbol: &str) -> bool {
        self.lookup(symbol).is_some()
    }
}

impl<C: ElementCatalog + ?Sized> ElementCatalog for &C {
    fn lookup(&self, symbol: &str) -> Option<&str> {
        (**self).lookup(symbol)
    }

    fn symbols(&self) -> Vec<&str> {
        (**self).symbols()
    }
}

/// Is an enumeration of all chemical elements, ordered by atomic number.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, IntoStaticStr)]
#[allow(missing_docs)]
pub enum ElementKind {
    Hydrogen = 1,
    Helium,
    Lithium,
    Beryllium,
    Boron,
    Carbon,
    Nitrogen,
    Oxygen,
    Fluorine,
    Neon,
    Sodium,
    Magnesium,
    Aluminium,
    Silicon,
    Phosphorus,
    Sulfur,
    Chlorine,
    Argon,
    Potassium,
    Calcium,
    Scandium,
    Titanium,
    Vanadium,
    Chromium,
    Manganese,
    Iron,
    Cobalt,
    Nickel,
    Copper,
    Zinc,
    Gallium,
    Germanium,
    Arsenic,
    Selenium,
    Bromine,
    Krypton,
    Rubidium,
    Strontium,
    Yttrium,
    Zirconium,
    Niobium,
    Molybdenum,
    Technetium,
    Ruthenium,
    Rhodium,
    Palladium,
    Silver,
    Cadmium,
    Indium,
    Tin,
    Antimony,
    Tellurium,
    Iodine,
    Xenon,
    Caesium,
    Barium,
    Lanthanum,
    Cerium,
    Praseodymium,
    Neodymium,
    Promethium,
    Samarium,
    Europium,
    Gadolinium,
    Terbium,
    Dysprosium,
    Holmium,
    Erbium,
    Thulium,
    Ytterbium,
    Lutetium,
    Hafnium,
    Tantalum,
    Tungsten,
    Rhenium,
    Osmium,
    Iridium,
    Platinum,
    Gold,
    Mercury,
    Thallium,
    Lead,
    Bismuth,
    Polonium,
    Astatine,
    Radon,
    Francium,
    Radium,
    Actinium,
    Thorium,
    Protactinium,
    Uranium,
    Neptunium,
    Plutonium,
    Americium,
    Curium,
    Berkelium,
    Californium,
    Einsteinium,
    Fermium,
    Mendelevium,
    Nobelium,
    Lawrencium,
    Rutherfordium,
    Dubnium,
    Seaborgium,
    Bohrium,
    Hassium,
    Meitnerium,
    Darmstadtium,
    Roentgenium,
    Copernicium,
    Nihonium,
    Flerovium,
    Moscovium,
    Livermorium,
    Tennessine,
    Oganesson,
}

/// Is an error that is returned when a string cannot be parsed into an [`ElementKind`] in
/// [`FromStr`] trait implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, thiserror::Error)]
#[error("invalid string representation of element symbol.")]
pub struct ElementParseError;

impl FromStr for ElementKind {
    type Err = ElementParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        static SYMBOL_ELEMENT_MAP: OnceLock<HashMap<&'static str, ElementKind>> = OnceLock::new();
        let map = SYMBOL_ELEMENT_MAP.get_or_init(|| Self::iter().map(|e| (e.symbol(), e)).collect());

        map.get(s).copied().ok_or(ElementParseError)
    }
}

impl std::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

impl ElementKind {
    /// Gets the atomic number of the element.
    #[must_use]
    pub fn atomic_number(self) -> u8 {
        self as u8
    }

    /// Gets the symbol of the element.
    #[must_use]
    #[allow(clippy::too_many_lines)]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Hydrogen => "H",
            Self::Helium => "He",
            Self::Lithium => "Li",
            Self::Beryllium => "Be",
            Self::Boron => "B",
            Self::Carbon => "C",
            Self::Nitrogen => "N",
            Self::Oxygen => "O",
            Self::Fluorine => "F",
            Self::Neon => "Ne",
            Self::Sodium => "Na",
            Self::Magnesium => "Mg",
            Self::Aluminium => "Al",
            Self::Silicon => "Si",
            Self::Phosphorus => "P",
            Self::Sulfur => "S",
            Self::Chlorine => "Cl",
            Self::Argon => "Ar",
            Self::Potassium => "K",
            Self::Calcium => "Ca",
            Self::Scandium => "Sc",
            Self::Titanium => "Ti",
            Self::Vanadium => "V",
            Self::Chromium => "Cr",
            Self::Manganese => "Mn",
            Self::Iron => "Fe",
            Self::Cobalt => "Co",
            Self::Nickel => "Ni",
            Self::Copper => "Cu",
            Self::Zinc => "Zn",
            Self::Gallium => "Ga",
            Self::Germanium => "Ge",
            Self::Arsenic => "As",
            Self::Selenium => "Se",
            Self::Bromine => "Br",
            Self::Krypton => "Kr",
            Self::Rubidium => "Rb",
            Self::Strontium => "Sr",
            Self::Yttrium => "Y",
            Self::Zirconium => "Zr",
            Self::Niobium => "Nb",
            Self::Molybdenum => "Mo",
            Self::Technetium => "Tc",
            Self::Ruthenium => "Ru",
            Self::Rhodium => "Rh",
            Self::Palladium => "Pd",
            Self::Silver => "Ag",
            Self::Cadmium => "Cd",
            Self::Indium => "In",
            Self::Tin => "Sn",
            Self::Antimony => "Sb",
            Self::Tellurium => "Te",
            Self::Iodine => "I",
            Self::Xenon => "Xe",
            Self::Caesium => "Cs",
            Self::Barium => "Ba",
            Self::Lanthanum => "La",
            Self::Cerium => "Ce",
            Self::Praseodymium => "Pr",
            Self::Neodymium => "Nd",
            Self::Promethium => "Pm",
            Self::Samarium => "Sm",
            Self::Europium => "Eu",
            Self::Gadolinium => "Gd",
            Self::Terbium => "Tb",
            Self::Dysprosium => "Dy",
            Self::Holmium => "Ho",
            Self::Erbium => "Er",
            Self::Thulium => "Tm",
            Self::Ytterbium => "Yb",
            Self::Lutetium => "Lu",
            Self::Hafnium => "Hf",
            Self::Tantalum => "Ta",
            Self::Tungsten => "W",
            Self::Rhenium => "Re",
            Self::Osmium => "Os",
            Self::Iridium => "Ir",
            Self::Platinum => "Pt",
            Self::Gold => "Au",
            Self::Mercury => "Hg",
            Self::Thallium => "Tl",
            Self::Lead => "Pb",
            Self::Bismuth => "Bi",
            Self::Polonium => "Po",
            Self::Astatine => "At",
            Self::Radon => "Rn",
            Self::Francium => "Fr",
            Self::Radium => "Ra",
            Self::Actinium => "Ac",
            Self::Thorium => "Th",
            Self::Protactinium => "Pa",
            Self::Uranium => "U",
            Self::Neptunium => "Np",
            Self::Plutonium => "Pu",
            Self::Americium => "Am",
            Self::Curium => "Cm",
            Self::Berkelium => "Bk",
            Self::Californium => "Cf",
            Self::Einsteinium => "Es",
            Self::Fermium => "Fm",
            Self::Mendelevium => "Md",
            Self::Nobelium => "No",
            Self::Lawrencium => "Lr",
            Self::Rutherfordium => "Rf",
            Self::Dubnium => "Db",
            Self::Seaborgium => "Sg",
            Self::Bohrium => "Bh",
            Self::Hassium => "Hs",
            Self::Meitnerium => "Mt",
            Self::Darmstadtium => "Ds",
            Self::Roentgenium => "Rg",
            Self::Copernicium => "Cn",
            Self::Nihonium => "Nh",
            Self::Flerovium => "Fl",
            Self::Moscovium => "Mc",
            Self::Livermorium => "Lv",
            Self::Tennessine => "Ts",
            Self::Oganesson => "Og",
        }
    }

    /// Gets the english name of the element.
    #[must_use]
    pub fn name(self) -> &'static str {
        <&'static str>::from(self)
    }
}

/// The periodic table of the 118 named elements, with english display names.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PeriodicTable;

impl ElementCatalog for PeriodicTable {
    fn lookup(&self, symbol: &str) -> Option<&str> {
        ElementKind::from_str(symbol).ok().map(ElementKind::name)
    }

    fn symbols(&self) -> Vec<&str> {
        ElementKind::iter().map(ElementKind::symbol).collect()
    }
}

/// A catalog built from arbitrary symbol/name pairs.
///
/// Useful to restrict the accepted elements, or to display names in another language.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CustomCatalog {
    elements: BTreeMap<String, String>,
}

impl CustomCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an element to the catalog, replacing the name of an already known symbol.
    #[must_use]
    pub fn with(mut self, symbol: impl Into<String>, name: impl Into<String>) -> Self {
        self.elements.insert(symbol.into(), name.into());
        self
    }

    /// Number of elements in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the catalog has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl<S, N> FromIterator<(S, N)> for CustomCatalog
where
    S: Into<String>,
    N: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (S, N)>>(iter: I) -> Self {
        Self {
            elements: iter
                .into_iter()
                .map(|(symbol, name)| (symbol.into(), name.into()))
                .collect(),
        }
    }
}

impl ElementCatalog for CustomCatalog {
    fn lookup(&self, symbol: &str) -> Option<&str> {
        self.elements.get(symbol).map(String::as_str)
    }

    fn symbols(&self) -> Vec<&str> {
        self.elements.keys().map(String::as_str).collect()
    }
}
