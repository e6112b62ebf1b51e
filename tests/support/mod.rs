#![allow(dead_code)]

use std::collections::{BTreeMap, BTreeSet};

use cfg_first::{Grammar, Ll1Analysis, PerSymbolSets, SymbolRegistry};

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// FIRST sets keyed and filled by symbol names, so that expectations do not
/// depend on identity values.
pub fn named_sets(
    registry: &SymbolRegistry,
    sets: &PerSymbolSets,
) -> BTreeMap<String, BTreeSet<String>> {
    let name = |sym| {
        registry
            .name_of(sym)
            .expect("symbol unknown to the registry")
            .to_string()
    };
    sets.iter()
        .map(|(&sym, set)| (name(sym), set.iter().map(|&elem| name(elem)).collect()))
        .collect()
}

pub fn named_first_sets(analysis: &Ll1Analysis) -> BTreeMap<String, BTreeSet<String>> {
    named_sets(analysis.grammar().registry(), analysis.first_sets())
}

pub fn names(list: &[&str]) -> BTreeSet<String> {
    list.iter().map(|name| name.to_string()).collect()
}

pub fn analyze(
    nonterminals: &[&str],
    terminals: &[&str],
    rules: &[&str],
    start: &str,
) -> Ll1Analysis {
    init_logger();
    let grammar =
        Grammar::from_spec(nonterminals, terminals, rules, start).expect("grammar should build");
    grammar
        .analyze_ll1()
        .expect("grammar should be context-free")
}

pub fn assert_first(analysis: &Ll1Analysis, name: &str, expected: &[&str]) {
    let sets = named_first_sets(analysis);
    let actual = sets
        .get(name)
        .unwrap_or_else(|| panic!("no FIRST set for {:?}", name));
    assert_eq!(actual, &names(expected), "FIRST({})", name);
}
