//! Compressed double-array representation (base/check), the classic
//! trie-compression trick adapted to DFAs: `step(state, symbol)` is a
//! single array read plus an ownership check, and storage is proportional
//! to the number of real transitions rather than `states × alphabet`.
//!
//! `base[state] + code(symbol)` addresses a cell in `check`/`next`;
//! `check[cell] == state` confirms the cell actually belongs to `state`
//! (another state may have claimed the same offset for a different code).

use super::FiniteAutomaton;
use crate::symbol::Symbol;
use std::collections::HashSet;

#[derive(Debug, Clone)]
pub struct CompressedDfa {
    alphabet: Vec<Symbol>,
    base: Vec<i64>,
    check: Vec<i64>,
    next: Vec<usize>,
    start: usize,
    accepting: HashSet<usize>,
}

impl CompressedDfa {
    /// Builds a compressed double-array from any other [`FiniteAutomaton`],
    /// over the given alphabet (the set of symbols whose transitions are
    /// worth encoding; omitting a symbol simply makes `step` return `None`
    /// for it).
    pub fn from_dfa(fa: &impl FiniteAutomaton, alphabet: &[Symbol]) -> Self {
        let states = fa.states();
        let state_count = states.iter().copied().max().map(|m| m + 1).unwrap_or(0);
        let mut base = vec![0i64; state_count];
        let mut check: Vec<i64> = Vec::new();
        let mut next: Vec<usize> = Vec::new();
        let mut accepting = HashSet::new();

        for &state in &states {
            if fa.is_accepting(state) {
                accepting.insert(state);
            }

            let transitions: Vec<(usize, usize)> = alphabet
                .iter()
                .enumerate()
                .filter_map(|(code, &symbol)| fa.step(state, symbol).map(|target| (code, target)))
                .collect();
            if transitions.is_empty() {
                continue;
            }

            let mut offset = 0i64;
            loop {
                let fits = transitions.iter().all(|&(code, _)| {
                    let index = (offset + code as i64) as usize;
                    check.get(index).copied().unwrap_or(-1) == -1
                });
                if fits {
                    break;
                }
                offset += 1;
            }
            base[state] = offset;

            let needed = transitions
                .iter()
                .map(|&(code, _)| (offset + code as i64) as usize + 1)
                .max()
                .unwrap();
            if needed > check.len() {
                check.resize(needed, -1);
                next.resize(needed, 0);
            }
            for (code, target) in transitions {
                let index = (offset + code as i64) as usize;
                check[index] = state as i64;
                next[index] = target;
            }
        }

        Self {
            alphabet: alphabet.to_vec(),
            base,
            check,
            next,
            start: fa.start(),
            accepting,
        }
    }
}

impl FiniteAutomaton for CompressedDfa {
    fn start(&self) -> usize {
        self.start
    }

    fn is_accepting(&self, state: usize) -> bool {
        self.accepting.contains(&state)
    }

    fn step(&self, state: usize, symbol: Symbol) -> Option<usize> {
        let code = self.alphabet.iter().position(|&s| s == symbol)?;
        let index = (self.base.get(state).copied()? + code as i64) as usize;
        if self.check.get(index).copied()? == state as i64 {
            Some(self.next[index])
        } else {
            None
        }
    }

    fn states(&self) -> Vec<usize> {
        (0..self.base.len()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dfa::hashed::HashedDfa;
    use std::collections::HashMap;

    #[test]
    fn matches_source_automaton_transitions() {
        let a = Symbol::Terminal(0);
        let b = Symbol::Terminal(1);
        let mut transitions = HashMap::new();
        transitions.insert((0, a), 1);
        transitions.insert((1, b), 0);
        let source = HashedDfa::new(2, transitions, 0, HashSet::from([1])).unwrap();

        let compressed = CompressedDfa::from_dfa(&source, &[a, b]);
        assert_eq!(compressed.step(0, a), Some(1));
        assert_eq!(compressed.step(1, b), Some(0));
        assert_eq!(compressed.step(0, b), None);
        assert!(compressed.is_accepting(1));
    }

    #[test]
    fn distinguishes_states_sharing_an_offset() {
        // Both states transition on 'a' to different targets; the double
        // array must not let state 1's check leak into state 0's lookup.
        let a = Symbol::Terminal(0);
        let mut transitions = HashMap::new();
        transitions.insert((0, a), 1);
        transitions.insert((1, a), 0);
        let source = HashedDfa::new(2, transitions, 0, HashSet::new()).unwrap();

        let compressed = CompressedDfa::from_dfa(&source, &[a]);
        assert_eq!(compressed.step(0, a), Some(1));
        assert_eq!(compressed.step(1, a), Some(0));
    }
}
