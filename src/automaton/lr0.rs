//! Canonical LR(0) collection of item sets.

use crate::grammar::Grammar;
use crate::item::{Lr0Item, Lr0ItemSet};
use crate::symbol::Symbol;
use log::{debug, trace};
use std::collections::{HashMap, HashSet, VecDeque};

/// The canonical LR(0) automaton: states (closed item sets) discovered by
/// BFS from `closure({[S' → •S]})`, plus the goto edges between them.
#[derive(Debug, Clone)]
pub struct Lr0Automaton {
    pub states: Vec<Lr0ItemSet>,
    pub transitions: HashMap<(usize, Symbol), usize>,
}

/// Closes a set of LR(0) items: for every item `[A → α•Bβ]` with B a
/// nonterminal, adds `[B → •γ]` for every production `B → γ`.
pub fn closure(grammar: &Grammar, items: Lr0ItemSet) -> Lr0ItemSet {
    let mut result = items;
    let mut changed = true;

    while changed {
        changed = false;
        let current: Vec<Lr0Item> = result.iter().copied().collect();
        for item in current {
            if let Some(symbol) = item.symbol_after_dot(grammar) {
                if symbol.is_nonterminal() {
                    for &production in grammar.productions_for(symbol) {
                        let new_item = Lr0Item::initial(production);
                        if result.insert(new_item) {
                            changed = true;
                        }
                    }
                }
            }
        }
    }

    result
}

/// `goto(I, X)`: the closure of the items obtained by advancing the dot
/// over `X` in every item of `I` that has `X` immediately after the dot.
pub fn goto(grammar: &Grammar, items: &Lr0ItemSet, symbol: Symbol) -> Lr0ItemSet {
    let moved: Lr0ItemSet = items
        .iter()
        .filter(|item| item.symbol_after_dot(grammar) == Some(symbol))
        .map(|item| item.advanced())
        .collect();

    closure(grammar, moved)
}

/// Builds the canonical LR(0) collection by BFS from the initial state.
pub fn build(grammar: &Grammar) -> Lr0Automaton {
    let initial_item = Lr0Item::initial(0);
    let initial_state = closure(grammar, Lr0ItemSet::from([initial_item]));

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
            let next_state = goto(grammar, &state, symbol);
            if next_state.is_empty() {
                continue;
            }
            trace!("goto(state {}, {:?}) has {} items", state_id, symbol, next_state.len());

            let existing = states.iter().position(|s| s == &next_state);
            let target = match existing {
                Some(id) => id,
                None => {
                    let id = states.len();
                    states.push(next_state);
                    worklist.push_back(id);
                    debug!("discovered LR(0) state {}", id);
                    id
                }
            };
            transitions.insert((state_id, symbol), target);
        }
    }

    Lr0Automaton { states, transitions }
}
