use chemlex::{
    base::{Error, SilentHandler, VoidHandler},
    catalog::{CustomCatalog, PeriodicTable},
    check,
    syntax::{
        checker::{ArrowRule, SyntaxChecker},
        error::{self, StructureViolation},
    },
    tokenize,
};

fn check_with(input: &str, rule: ArrowRule) -> Result<(), error::Error> {
    let tokens = tokenize(input, &PeriodicTable);
    SyntaxChecker::new(PeriodicTable)
        .with_rule(rule)
        .check(&tokens)
}

fn structure_violation(result: Result<(), error::Error>) -> Option<StructureViolation> {
    match result {
        Err(error::Error::MalformedStructure(err)) => Some(err.violation()),
        _ => None,
    }
}

#[test]
fn checking_well_formed_equation() {
    assert!(check_with("H2 + O2 -> H2O", ArrowRule::Scan).is_ok());
    assert!(check_with("CH4 + 2O2 -> CO2 + 2H2O", ArrowRule::Scan).is_ok());
    assert!(check_with("2H2O->2H2+O2", ArrowRule::Scan).is_ok());
}

#[test]
fn checking_invalid_symbol() {
    let handler = SilentHandler::new();
    let result = check("H2+O2->H2O#", &PeriodicTable, ArrowRule::Scan, &handler);

    match result {
        Err(Error::ParseError(error::Error::InvalidSymbol(err))) => assert_eq!(err.text(), "#"),
        other => panic!("expected invalid symbol, got {other:?}"),
    }
    assert_eq!(handler.len(), 1);
}

#[test]
fn checking_unknown_element() {
    match check_with("H2 -> Xx", ArrowRule::Scan) {
        Err(error::Error::UnknownElement(err)) => {
            assert_eq!(err.symbol(), "Xx");
        }
        other => panic!("expected unknown element, got {other:?}"),
    }
}

#[test]
fn checking_missing_arrow() {
    for rule in [ArrowRule::Anchored, ArrowRule::Scan] {
        assert_eq!(
            structure_violation(check_with("H2 O2", rule)),
            Some(StructureViolation::MissingArrow)
        );
    }
}

#[test]
fn checking_empty_input() {
    for rule in [ArrowRule::Anchored, ArrowRule::Scan] {
        assert_eq!(
            structure_violation(check_with("", rule)),
            Some(StructureViolation::TooFewTokens)
        );
    }
}

#[test]
fn checking_structure_before_legality() {
    // both a missing arrow and an invalid symbol, the structure wins
    assert_eq!(
        structure_violation(check_with("H2 # O2", ArrowRule::Scan)),
        Some(StructureViolation::MissingArrow)
    );
    assert_eq!(
        structure_violation(check_with("Xx + Yy", ArrowRule::Anchored)),
        Some(StructureViolation::MissingArrow)
    );
}

#[test]
fn checking_anchored_and_scanning_rules_side_by_side() {
    let cases = [
        ("H2 -> H2O", true, true),
        ("H2 + O2 -> H2O", false, true),
        ("2H2 + O2 -> 2H2O", false, true),
        ("H2 -> O2 -> H2O", true, false),
        ("H2 ->", true, false),
    ];

    for (input, anchored, scan) in cases {
        assert_eq!(
            check_with(input, ArrowRule::Anchored).is_ok(),
            anchored,
            "anchored rule on {input:?}"
        );
        assert_eq!(
            check_with(input, ArrowRule::Scan).is_ok(),
            scan,
            "scan rule on {input:?}"
        );
    }

    assert_eq!(
        structure_violation(check_with("H2 + O2 -> H2O", ArrowRule::Anchored)),
        Some(StructureViolation::MisplacedArrow)
    );
}

#[test]
fn checking_with_smaller_catalog() {
    let catalog = CustomCatalog::new().with("H", "Hydrogen");

    assert!(check("H2 -> H H", &catalog, ArrowRule::Scan, &VoidHandler).is_ok());
    assert!(check("H2 + O2 -> H2O", &catalog, ArrowRule::Scan, &VoidHandler).is_err());
}
