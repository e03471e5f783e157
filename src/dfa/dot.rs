//! Graphviz export for any [`super::FiniteAutomaton`].

use super::FiniteAutomaton;
use crate::symbol::{Symbol, SymbolTable};
use std::fmt::Write as _;

/// Layout direction, controlling the Graphviz `size` hint only (not
/// `rankdir`, which Graphviz infers from edge order well enough for these
/// small teaching automata).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    LeftToRight,
    TopToBottom,
}

/// Renders `fa` as a `digraph dfa { ... }` document. State 0 (the error
/// sink) and any transition into it are omitted, per the trimmed-output
/// convention used throughout this module.
pub fn to_dot_language(
    fa: &impl FiniteAutomaton,
    alphabet: &[Symbol],
    symbols: &SymbolTable,
    direction: Direction,
) -> String {
    let size = match direction {
        Direction::LeftToRight => "11,8.25",
        Direction::TopToBottom => "8.25,11",
    };

    let mut out = String::new();
    writeln!(out, "digraph dfa {{").unwrap();
    writeln!(out, "  size=\"{}\";", size).unwrap();
    writeln!(out, "  n999999 [style=invis];").unwrap();
    writeln!(out, "  n999999 -> n{};", fa.start()).unwrap();

    for state in fa.states() {
        if state == 0 {
            continue;
        }
        if fa.is_accepting(state) {
            writeln!(out, "  n{} [label=\"{}\", peripheries=2];", state, state).unwrap();
        } else {
            writeln!(out, "  n{} [label=\"{}\"];", state, state).unwrap();
        }
    }

    for state in fa.states() {
        if state == 0 {
            continue;
        }
        for &symbol in alphabet {
            if let Some(target) = fa.step(state, symbol) {
                if target == 0 {
                    continue;
                }
                writeln!(
                    out,
                    "  n{} -> n{} [label=\"{}\"];",
                    state,
                    target,
                    symbols.name(symbol)
                )
                .unwrap();
            }
        }
    }

    writeln!(out, "}}").unwrap();
    out
}
