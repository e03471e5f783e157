//! Integration tests for the symbol module

use lr_tables::{Symbol, SymbolTable};

#[test]
fn interning_the_same_name_twice_returns_the_same_symbol() {
    let mut table = SymbolTable::new();
    let a = table.intern_terminal("a");
    let a_again = table.intern_terminal("a");
    assert_eq!(a, a_again);
}

#[test]
fn terminals_and_nonterminals_have_independent_index_spaces() {
    let mut table = SymbolTable::new();
    let a = table.intern_terminal("a");
    let s = table.intern_nonterminal("S");
    assert_eq!(a, Symbol::Terminal(0));
    assert_eq!(s, Symbol::Nonterminal(0));
    assert_ne!(a, s);
}

#[test]
fn eof_is_an_action_terminal_but_not_a_declared_terminal() {
    assert!(Symbol::Eof.is_action_terminal());
    assert!(!Symbol::Eof.is_terminal());
    assert!(!Symbol::Eof.is_nonterminal());
}

#[test]
fn epsilon_is_neither_terminal_nor_nonterminal() {
    assert!(Symbol::Epsilon.is_epsilon());
    assert!(!Symbol::Epsilon.is_terminal());
    assert!(!Symbol::Epsilon.is_nonterminal());
}

#[test]
fn ordering_ranks_epsilon_then_terminal_then_nonterminal_then_eof() {
    assert!(Symbol::Epsilon < Symbol::Terminal(0));
    assert!(Symbol::Terminal(9) < Symbol::Nonterminal(0));
    assert!(Symbol::Nonterminal(9) < Symbol::Eof);
}

#[test]
fn names_round_trip_through_the_table() {
    let mut table = SymbolTable::new();
    let id = table.intern_terminal("id");
    let expr = table.intern_nonterminal("Expr");
    assert_eq!(table.name(id), "id");
    assert_eq!(table.name(expr), "Expr");
}
