//! Nullable / FIRST / FOLLOW computation, behind two interchangeable
//! strategies: naive fixed-point iteration (the reference implementation)
//! and a Tarjan-digraph algorithm (DeRemer & Pennello) for large grammars.

pub mod digraph;
pub mod naive;

use crate::grammar::Grammar;
use crate::item::TerminalSet;
use crate::symbol::Symbol;
use std::collections::HashMap;

/// Selects which algorithm computes FIRST/FOLLOW. Both must agree on every
/// grammar; `naive` is the reference used by tests, `digraph` is the
/// variant that scales to large grammars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetStrategy {
    NaiveFixedPoint,
    Digraph,
}

/// The computed nullable/FIRST/FOLLOW sets for a grammar.
#[derive(Debug, Clone)]
pub struct FirstFollowSets {
    /// FIRST(X) for every terminal and nonterminal X.
    pub first: HashMap<Symbol, TerminalSet>,
    /// FOLLOW(A) for every nonterminal A.
    pub follow: HashMap<Symbol, TerminalSet>,
    /// Nullable(A) for every nonterminal A.
    pub nullable: HashMap<Symbol, bool>,
}

impl FirstFollowSets {
    pub fn first_of(&self, symbol: Symbol) -> TerminalSet {
        self.first.get(&symbol).cloned().unwrap_or_default()
    }

    pub fn follow_of(&self, symbol: Symbol) -> TerminalSet {
        self.follow.get(&symbol).cloned().unwrap_or_default()
    }

    pub fn is_nullable(&self, symbol: Symbol) -> bool {
        self.nullable.get(&symbol).copied().unwrap_or(false)
    }
}

/// Computes nullable/FIRST/FOLLOW using the selected strategy.
pub fn compute(grammar: &Grammar, strategy: SetStrategy) -> FirstFollowSets {
    match strategy {
        SetStrategy::NaiveFixedPoint => naive::compute(grammar),
        SetStrategy::Digraph => digraph::compute(grammar),
    }
}

/// FIRST(X1 X2 … Xk) given already-computed per-symbol FIRST sets.
///
/// Adds FIRST(X1) \ {ε}; if ε ∈ FIRST(X1), also adds FIRST(X2) \ {ε}; and
/// so on. If every Xi is nullable, adds ε to the result.
pub fn first_of_string(first: &HashMap<Symbol, TerminalSet>, symbols: &[Symbol]) -> TerminalSet {
    let mut result = TerminalSet::new();
    let mut all_nullable = true;

    for symbol in symbols {
        let first_symbol = first.get(symbol).cloned().unwrap_or_default();
        result.union_without_epsilon(&first_symbol);
        if !first_symbol.contains(Symbol::Epsilon) {
            all_nullable = false;
            break;
        }
    }

    if all_nullable {
        result.insert(Symbol::Epsilon);
    }

    result
}

/// FIRST(β a) for a string `beta` followed by a single terminal `lookahead`,
/// as used when computing LR(1) closure lookaheads. `lookahead` is never
/// itself epsilon.
pub fn first_of_string_with_trailing(
    first: &HashMap<Symbol, TerminalSet>,
    beta: &[Symbol],
    lookahead: Symbol,
) -> TerminalSet {
    let first_beta = first_of_string(first, beta);
    let mut result = TerminalSet::new();
    result.union_without_epsilon(&first_beta);
    if first_beta.contains(Symbol::Epsilon) || beta.is_empty() {
        result.insert(lookahead);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::GrammarBuilder;

    fn dragon_4_48() -> Grammar {
        // S -> L = R | R
        // L -> * R | id
        // R -> L
        let mut b = GrammarBuilder::new();
        let s = b.nonterminal("S");
        let l = b.nonterminal("L");
        let r = b.nonterminal("R");
        let eq = b.terminal("=");
        let star = b.terminal("*");
        let id = b.terminal("id");
        b.start("S");
        b.production(s, vec![l, eq, r]);
        b.production(s, vec![r]);
        b.production(l, vec![star, r]);
        b.production(l, vec![id]);
        b.production(r, vec![l]);
        b.build().unwrap()
    }

    #[test]
    fn both_strategies_agree_on_dragon_4_48() {
        let grammar = dragon_4_48();
        let naive = compute(&grammar, SetStrategy::NaiveFixedPoint);
        let digraph = compute(&grammar, SetStrategy::Digraph);

        for nt in grammar.nonterminals() {
            assert_eq!(
                naive.is_nullable(nt),
                digraph.is_nullable(nt),
                "nullable mismatch for {:?}",
                nt
            );
            let naive_first = naive.first_of(nt);
            let digraph_first = digraph.first_of(nt);
            for t in grammar.terminals() {
                assert_eq!(
                    naive_first.contains(t),
                    digraph_first.contains(t),
                    "FIRST mismatch for {:?} on {:?}",
                    nt,
                    t
                );
            }
            let naive_follow = naive.follow_of(nt);
            let digraph_follow = digraph.follow_of(nt);
            for t in grammar.terminals() {
                assert_eq!(
                    naive_follow.contains(t),
                    digraph_follow.contains(t),
                    "FOLLOW mismatch for {:?} on {:?}",
                    nt,
                    t
                );
            }
            assert_eq!(naive_follow.contains(Symbol::Eof), digraph_follow.contains(Symbol::Eof));
        }
    }

    #[test]
    fn nullable_iff_epsilon_in_first() {
        let grammar = dragon_4_48();
        let sets = compute(&grammar, SetStrategy::NaiveFixedPoint);
        for nt in grammar.nonterminals() {
            assert_eq!(sets.is_nullable(nt), sets.first_of(nt).contains(Symbol::Epsilon));
        }
    }

    #[test]
    fn follow_never_contains_epsilon() {
        let grammar = dragon_4_48();
        let sets = compute(&grammar, SetStrategy::NaiveFixedPoint);
        for nt in grammar.nonterminals() {
            assert!(!sets.follow_of(nt).contains(Symbol::Epsilon));
        }
    }
}
