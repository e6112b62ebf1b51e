mod support;

use std::collections::BTreeSet;
use std::error::Error;

use cfg_first::{
    build_grammar, parse_production, Built, ConstructionError, Grammar, GrammarError,
    GrammarType, NameNotFound, Production, Symbol, SymbolKind, SymbolRegistry, ValidationError,
    ValidationErrorKind,
};
use test_case::test_case;

fn simple_registry() -> SymbolRegistry {
    SymbolRegistry::from_names(["A", "B"], ["a", "b"])
}

#[test]
fn test_parse_production() {
    let registry = simple_registry();
    let [a_nt, b_nt, a, b] = ["A", "B", "a", "b"].map(|name| registry.recognize(name).unwrap());

    let production = parse_production(&registry, "A -> a B b").unwrap();
    assert_eq!(production.lhs(), [a_nt]);
    assert_eq!(production.rhs(), [a, b_nt, b]);

    let compact = parse_production(&registry, "A->a").unwrap();
    assert_eq!(compact, Production::new([a_nt], [a]));

    let empty = parse_production(&registry, "B ->   epsilon ").unwrap();
    assert!(empty.is_epsilon());
    assert_eq!(empty, Production::epsilon(b_nt));
}

#[test_case("A a b", ValidationErrorKind::MissingSeparator ; "missing separator")]
#[test_case("A -> a -> b", ValidationErrorKind::RepeatedSeparator ; "repeated separator")]
#[test_case(" -> a", ValidationErrorKind::EmptyLhs ; "empty lhs")]
#[test_case("A ->  ", ValidationErrorKind::EmptyRhs ; "empty rhs")]
#[test_case(
    "A -> a c",
    ValidationErrorKind::UnknownName(NameNotFound { name: "c".to_string() })
    ; "unknown name"
)]
fn test_parse_production_errors(rule: &str, kind: ValidationErrorKind) {
    let registry = simple_registry();

    let expected = GrammarError::Validation(ValidationError {
        rule: rule.to_string(),
        kind,
    });
    assert_eq!(parse_production(&registry, rule), Err(expected));
}

#[test]
fn test_unknown_name_is_reported_as_source() {
    let err = build_grammar(["S"], ["a"], ["S -> a missing"], "S").unwrap_err();

    let source = err.source().expect("unknown name should be the source");
    assert_eq!(source.to_string(), "name not found: \"missing\"");
    assert!(err.to_string().contains("S -> a missing"));
}

#[test]
fn test_unknown_start() {
    let err = build_grammar(["S"], ["a"], ["S -> a"], "T").unwrap_err();

    assert_eq!(
        err,
        GrammarError::NameNotFound(NameNotFound {
            name: "T".to_string()
        })
    );
}

#[test_case("a" ; "terminal")]
#[test_case("epsilon" ; "epsilon")]
fn test_start_must_be_nonterminal(start: &str) {
    let err = build_grammar(["S"], ["a"], ["S -> a"], start).unwrap_err();

    assert!(matches!(
        err,
        GrammarError::Construction(ConstructionError::StartNotNonterminal { .. })
    ));
}

#[test]
fn test_from_spec() {
    support::init_logger();
    let grammar = Grammar::from_spec(
        ["S", "A"],
        ["a"],
        ["S -> A a", "A -> epsilon", "A -> a"],
        "S",
    )
    .unwrap();
    let registry = grammar.registry();
    let [start, a_nt, a] = ["S", "A", "a"].map(|name| registry.recognize(name).unwrap());

    assert_eq!(grammar.start_sym(), start);
    assert_eq!(grammar.productions().len(), 3);
    // Rules are stored in lexical order of their text.
    assert_eq!(
        grammar.productions(),
        [
            Production::new([a_nt], [a]),
            Production::epsilon(a_nt),
            Production::new([start], [a_nt, a]),
        ]
    );
    assert_eq!(grammar.productions_for(a_nt).count(), 2);
    assert!(grammar.is_context_free());
}

#[test]
fn test_from_parts() {
    let mut registry = SymbolRegistry::new();
    let start = registry.allocate("S", SymbolKind::Nonterminal);
    let x = registry.allocate("x", SymbolKind::Terminal);
    let productions = vec![
        Production::new([start], [x, start]),
        Production::epsilon(start),
    ];

    let grammar = Grammar::from_parts(registry, productions, start).unwrap();
    assert_eq!(grammar.productions().len(), 2);
    assert_eq!(grammar.registry().name_of(x), Some("x"));
}

#[test]
fn test_from_parts_rejects_mismatched_parts() {
    let registry = simple_registry();
    let [a_nt, a] = ["A", "a"].map(|name| registry.recognize(name).unwrap());
    let mut larger = SymbolRegistry::from_names(["A", "B", "C"], ["a"]);
    let foreign = larger.allocate("z", SymbolKind::Terminal);

    let empty_rhs = Grammar::from_parts(
        registry.clone(),
        vec![Production::new([a_nt], Vec::<Symbol>::new())],
        a_nt,
    );
    assert_eq!(
        empty_rhs.unwrap_err(),
        GrammarError::Construction(ConstructionError::EmptyRhs { production: 0 })
    );

    let empty_lhs = Grammar::from_parts(
        registry.clone(),
        vec![Production::new([a_nt], [a]), Production::new(Vec::<Symbol>::new(), [a])],
        a_nt,
    );
    assert_eq!(
        empty_lhs.unwrap_err(),
        GrammarError::Construction(ConstructionError::EmptyLhs { production: 1 })
    );

    let foreign_rhs = Grammar::from_parts(
        registry.clone(),
        vec![Production::new([a_nt], [foreign])],
        a_nt,
    );
    assert_eq!(
        foreign_rhs.unwrap_err(),
        GrammarError::Construction(ConstructionError::ForeignSymbol {
            production: 0,
            id: foreign.id(),
        })
    );

    let foreign_start = Grammar::from_parts(registry.clone(), vec![], foreign);
    assert_eq!(
        foreign_start.unwrap_err(),
        GrammarError::Construction(ConstructionError::ForeignStart { id: foreign.id() })
    );

    let terminal_start = Grammar::from_parts(registry, vec![], a);
    assert_eq!(
        terminal_start.unwrap_err(),
        GrammarError::Construction(ConstructionError::StartNotNonterminal { id: a.id() })
    );
}

#[test_case(&["A a -> b"] ; "two symbols on the left")]
#[test_case(&["a -> b"] ; "terminal on the left")]
#[test_case(&["epsilon -> a"] ; "epsilon on the left")]
#[test_case(&["A -> a", "A B -> b"] ; "one bad rule among good ones")]
fn test_not_context_free(rules: &[&str]) {
    let grammar = build_grammar(["A", "B"], ["a", "b"], rules, "A").unwrap();

    assert!(!grammar.is_context_free());
    // The check does not alter the grammar.
    assert!(!grammar.is_context_free());
    let err = grammar.analyze_ll1().unwrap_err();
    assert_eq!(err, GrammarError::NotContextFree);
    assert_eq!(
        err.to_string(),
        "cannot analyze a non-context-free grammar for LL(1)"
    );
    assert!(matches!(
        grammar.build(Some(GrammarType::Ll1)),
        Err(GrammarError::NotContextFree)
    ));
}

#[test]
fn test_from_existing_aliases_storage() {
    let grammar = build_grammar(["A"], ["a"], ["A -> a"], "A").unwrap();
    let copy = Grammar::from_existing(&grammar);

    assert!(copy.shares_storage(&grammar));
    assert_eq!(copy.start_sym(), grammar.start_sym());
    assert!(std::ptr::eq(copy.productions(), grammar.productions()));

    let rebuilt = build_grammar(["A"], ["a"], ["A -> a"], "A").unwrap();
    assert!(!rebuilt.shares_storage(&grammar));
}

#[test]
fn test_build() {
    let grammar = build_grammar(["A"], ["a", "b"], ["A -> A a", "A -> b"], "A").unwrap();

    match grammar.build(None).unwrap() {
        Built::Grammar(plain) => assert!(plain.shares_storage(&grammar)),
        Built::Ll1(_) => panic!("no analysis was requested"),
    }

    let analysis = match grammar.build(Some(GrammarType::Ll1)).unwrap() {
        Built::Ll1(analysis) => analysis,
        Built::Grammar(_) => panic!("LL(1) analysis was requested"),
    };
    assert!(analysis.grammar().shares_storage(&grammar));
    support::assert_first(&analysis, "A", &["b"]);

    match analysis.build(None) {
        Built::Grammar(plain) => assert!(plain.shares_storage(&grammar)),
        Built::Ll1(_) => panic!("no analysis was requested"),
    }
    match analysis.build(Some(GrammarType::Ll1)) {
        Built::Ll1(again) => assert_eq!(again.first_sets(), analysis.first_sets()),
        Built::Grammar(_) => panic!("LL(1) analysis was requested"),
    }
}

#[test]
fn test_grammar_parse_production_uses_own_registry() {
    let grammar = build_grammar(["A"], ["a"], ["A -> a"], "A").unwrap();

    let production = grammar.parse_production("A -> a a epsilon").unwrap();
    assert_eq!(production.rhs().len(), 3);
    assert_eq!(production.rhs()[2], Symbol::EPSILON);
    assert!(grammar.parse_production("A -> b").is_err());
    // Parsing does not add productions.
    assert_eq!(grammar.productions().len(), 1);
}

#[test]
fn test_end_marker_on_the_right() {
    let mut registry = SymbolRegistry::new();
    let start = registry.allocate("S", SymbolKind::Nonterminal);
    let productions = vec![Production::new([start], [Symbol::END_MARKER])];
    let grammar = Grammar::from_parts(registry, productions, start).unwrap();
    let analysis = grammar.analyze_ll1().unwrap();

    let end = BTreeSet::from([Symbol::END_MARKER]);
    assert_eq!(analysis.first_set(Symbol::END_MARKER), Some(&end));
    assert_eq!(analysis.first_set(start), Some(&end));
    support::assert_first(&analysis, "S", &["dollar"]);

    let plain = build_grammar(["S"], ["a"], ["S -> a"], "S").unwrap();
    let analysis = plain.analyze_ll1().unwrap();
    assert_eq!(analysis.first_set(Symbol::END_MARKER), None);
}
