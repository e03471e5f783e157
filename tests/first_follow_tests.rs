//! Integration tests for Nullable/FIRST/FOLLOW, across both strategies and
//! the grammar catalog.

use lr_tables::catalog;
use lr_tables::{analysis, SetStrategy, Symbol};

#[test]
fn dragon_4_48_first_and_follow_match_the_textbook() {
    let grammar = catalog::dragon_4_48();
    let sets = analysis::compute(&grammar, SetStrategy::NaiveFixedPoint);

    let symbols = grammar.symbols();
    let l = symbols.nonterminal("L").unwrap();
    let r = symbols.nonterminal("R").unwrap();
    let id = symbols.terminal("id").unwrap();
    let star = symbols.terminal("*").unwrap();
    let eq = symbols.terminal("=").unwrap();

    assert!(sets.first_of(l).contains(id));
    assert!(sets.first_of(l).contains(star));
    assert!(sets.first_of(r).contains(id));
    assert!(sets.follow_of(r).contains(Symbol::Eof));
    assert!(sets.follow_of(l).contains(eq));
    assert!(sets.follow_of(l).contains(Symbol::Eof));
}

#[test]
fn naive_and_digraph_strategies_agree_on_every_catalog_grammar() {
    let grammars = [
        catalog::dragon_4_48(),
        catalog::dragon_4_52(),
        catalog::dragon_4_54(),
        catalog::stanford_shift_reduce(),
        catalog::stanford_reduce_reduce(),
        catalog::dangling_else(),
    ];

    for grammar in &grammars {
        let naive = analysis::compute(grammar, SetStrategy::NaiveFixedPoint);
        let digraph = analysis::compute(grammar, SetStrategy::Digraph);

        for nt in grammar.nonterminals() {
            assert_eq!(naive.is_nullable(nt), digraph.is_nullable(nt));
            for t in grammar.terminals().chain(std::iter::once(Symbol::Eof)) {
                assert_eq!(naive.first_of(nt).contains(t), digraph.first_of(nt).contains(t));
                assert_eq!(naive.follow_of(nt).contains(t), digraph.follow_of(nt).contains(t));
            }
        }
    }
}

#[test]
fn nullable_matches_epsilon_membership_in_first_on_every_catalog_grammar() {
    let grammars = [
        catalog::dragon_4_48(),
        catalog::dragon_4_52(),
        catalog::stanford_shift_reduce(),
    ];
    for grammar in &grammars {
        let sets = analysis::compute(grammar, SetStrategy::NaiveFixedPoint);
        for nt in grammar.nonterminals() {
            assert_eq!(sets.is_nullable(nt), sets.first_of(nt).contains(Symbol::Epsilon));
        }
    }
}

#[test]
fn follow_never_contains_epsilon_on_any_catalog_grammar() {
    let grammars = [catalog::dragon_4_52(), catalog::stanford_reduce_reduce()];
    for grammar in &grammars {
        let sets = analysis::compute(grammar, SetStrategy::Digraph);
        for nt in grammar.nonterminals() {
            assert!(!sets.follow_of(nt).contains(Symbol::Epsilon));
        }
    }
}
