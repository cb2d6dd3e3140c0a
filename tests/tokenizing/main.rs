use chemlex::{
    catalog::{CustomCatalog, PeriodicTable},
    lexical::token::{Token, TokenKind},
    tokenize,
};

/// Kind and text of every significant token.
fn significant(input: &str) -> Vec<(TokenKind, String)> {
    tokenize(input, &PeriodicTable)
        .significant()
        .map(|token| (token.kind(), token.span().str().to_string()))
        .collect()
}

fn numeric_value(token: &Token) -> Option<u64> {
    match token {
        Token::Coefficient(coefficient) => Some(coefficient.value),
        Token::ElementCount(count) => Some(count.value),
        _ => None,
    }
}

#[test]
fn tokenizing_covers_whole_input() {
    let inputs = [
        "",
        "H2 + O2 -> H2O",
        "  2Fe2O3\t+ 3C ->\n4Fe + 3CO2  ",
        "¿Qué? -> ¡Nada!",
        "Xx9 -- >> h2o → 🧪",
        "99999999999999999999999 Na",
    ];

    for input in inputs {
        let tokens = tokenize(input, &PeriodicTable);
        assert_eq!(tokens.to_source_string(), input);

        let mut end = 0;
        for token in tokens.iter() {
            assert_eq!(token.span().start(), end, "gap before {token:?} in {input:?}");
            end = token.span().end();
        }
        assert_eq!(end, input.len());
    }
}

#[test]
fn tokenizing_is_idempotent() {
    let input = "2KClO3 -> 2KCl + 3O2";
    let first = tokenize(input, &PeriodicTable);
    let second = tokenize(input, &PeriodicTable);

    let describe = |tokens: &chemlex::lexical::token_stream::TokenStream| {
        tokens
            .iter()
            .map(|token| (token.kind(), token.span().start(), token.span().end(), numeric_value(token)))
            .collect::<Vec<_>>()
    };

    assert_eq!(describe(&first), describe(&second));
}

#[test]
fn tokenizing_subscript_binding() {
    let tokens = tokenize("H2O", &PeriodicTable);
    let kinds = tokens.iter().map(Token::kind).collect::<Vec<_>>();
    let values = tokens.iter().map(numeric_value).collect::<Vec<_>>();

    assert_eq!(
        kinds,
        vec![
            TokenKind::Element,
            TokenKind::ElementCount,
            TokenKind::Element,
            TokenKind::ElementCount,
        ]
    );
    assert_eq!(values, vec![None, Some(2), None, Some(1)]);
    assert_eq!(tokens[0].span().str(), "H");
    assert_eq!(tokens[2].span().str(), "O");
}

#[test]
fn tokenizing_coefficient_and_subscript() {
    let tokens = tokenize("2H2O", &PeriodicTable);
    let kinds = tokens.iter().map(Token::kind).collect::<Vec<_>>();
    let values = tokens.iter().map(numeric_value).collect::<Vec<_>>();

    assert_eq!(
        kinds,
        vec![
            TokenKind::Coefficient,
            TokenKind::Element,
            TokenKind::ElementCount,
            TokenKind::Element,
            TokenKind::ElementCount,
        ]
    );
    assert_eq!(values, vec![Some(2), None, Some(2), None, Some(1)]);
}

#[test]
fn tokenizing_unknown_element() {
    assert_eq!(
        significant("Xx"),
        vec![(TokenKind::InvalidElement, "Xx".to_string())]
    );
}

#[test]
fn tokenizing_invalid_character() {
    let tokens = significant("H2+O2->H2O#");
    let invalid = tokens
        .iter()
        .filter(|(kind, _)| *kind == TokenKind::Invalid)
        .collect::<Vec<_>>();

    assert_eq!(invalid, vec![&(TokenKind::Invalid, "#".to_string())]);
    assert!(tokens.contains(&(TokenKind::Plus, "+".to_string())));
    assert!(tokens.contains(&(TokenKind::Arrow, "->".to_string())));
}

#[test]
fn tokenizing_empty_input() {
    assert!(tokenize("", &PeriodicTable).is_empty());
    assert!(significant(" \t\n").is_empty());
}

#[test]
fn tokenizing_with_smaller_catalog() {
    let catalog = CustomCatalog::new().with("H", "Hidrógeno").with("O", "Oxígeno");

    let kinds = tokenize("NaOH", &catalog)
        .iter()
        .map(Token::kind)
        .collect::<Vec<_>>();

    assert_eq!(
        kinds,
        vec![
            TokenKind::InvalidElement,
            TokenKind::Element,
            TokenKind::ElementCount,
            TokenKind::Element,
            TokenKind::ElementCount,
        ]
    );
}
