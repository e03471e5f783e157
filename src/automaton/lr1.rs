//! Canonical LR(1) collection of item sets.

use crate::analysis::first_of_string_with_trailing;
use crate::grammar::Grammar;
use crate::item::{Lr0Item, Lr1Item, Lr1ItemSet};
use crate::symbol::Symbol;
use log::{debug, trace};
use std::collections::{HashMap, HashSet, VecDeque};

#[derive(Debug, Clone)]
pub struct Lr1Automaton {
    pub states: Vec<Lr1ItemSet>,
    pub transitions: HashMap<(usize, Symbol), usize>,
}

/// Closes a set of LR(1) items: for `[A → α•Bβ, a]` with B nonterminal,
/// adds `[B → •γ, b]` for every production `B → γ` and every
/// `b ∈ FIRST(βa)`.
pub fn closure(
    grammar: &Grammar,
    first: &HashMap<Symbol, crate::item::TerminalSet>,
    items: Lr1ItemSet,
) -> Lr1ItemSet {
    let mut result = items;
    let mut changed = true;

    while changed {
        changed = false;
        let current: Vec<Lr1Item> = result.iter().copied().collect();
        for item in current {
            let Some(symbol) = item.symbol_after_dot(grammar) else {
                continue;
            };
            if !symbol.is_nonterminal() {
                continue;
            }

            let body = &grammar.production(item.core.production).body;
            let beta = &body[item.core.dot + 1..];
            let lookaheads = first_of_string_with_trailing(first, beta, item.lookahead);

            for &production in grammar.productions_for(symbol) {
                for lookahead in lookaheads.iter() {
                    let new_item = Lr1Item::new(production, 0, lookahead);
                    if result.insert(new_item) {
                        changed = true;
                    }
                }
            }
        }
    }

    result
}

/// `goto(I, X)` on LR(1) items: advances the dot over `X`, preserving
/// lookaheads, then closes.
pub fn goto(
    grammar: &Grammar,
    first: &HashMap<Symbol, crate::item::TerminalSet>,
    items: &Lr1ItemSet,
    symbol: Symbol,
) -> Lr1ItemSet {
    let moved: Lr1ItemSet = items
        .iter()
        .filter(|item| item.symbol_after_dot(grammar) == Some(symbol))
        .map(|item| item.advanced())
        .collect();

    closure(grammar, first, moved)
}

/// Builds the canonical LR(1) collection by BFS from
/// `closure({[S' → •S, Eof]})`.
pub fn build(grammar: &Grammar, first: &HashMap<Symbol, crate::item::TerminalSet>) -> Lr1Automaton {
    let initial_item = Lr1Item::new(0, 0, Symbol::Eof);
    let initial_state = closure(grammar, first, Lr1ItemSet::from([initial_item]));

    let mut states = vec![initial_state];
    let mut transitions = HashMap::new();
    let mut worklist: VecDeque<usize> = VecDeque::from([0]);

    while let Some(state_id) = worklist.pop_front() {
        let state = states[state_id].clone();

        let mut symbols: HashSet<Symbol> = HashSet::new();
        for item in &state {
            if let Some(symbol) = item.symbol_after_dot(grammar) {
                symbols.insert(symbol);
            }
        }

        for symbol in symbols {
            let next_state = goto(grammar, first, &state, symbol);
            if next_state.is_empty() {
                continue;
            }
            trace!("lr1 goto(state {}, {:?}) has {} items", state_id, symbol, next_state.len());

            let existing = states.iter().position(|s| s == &next_state);
            let target = match existing {
                Some(id) => id,
                None => {
                    let id = states.len();
                    states.push(next_state);
                    worklist.push_back(id);
                    debug!("discovered LR(1) state {}", id);
                    id
                }
            };
            transitions.insert((state_id, symbol), target);
        }
    }

    Lr1Automaton { states, transitions }
}

/// The LR(0) core of an LR(1) item (drops the lookahead).
pub fn core_of(item: &Lr1Item) -> Lr0Item {
    item.core
}
