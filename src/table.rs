//! ACTION/GOTO table construction for LR(0), SLR(1), LR(1), and LALR(1),
//! and the conflict model shared by all four.

use crate::analysis::{self, FirstFollowSets, SetStrategy};
use crate::automaton::{lr0, lr1};
use crate::grammar::Grammar;
use crate::item::{Lr0ItemSet, Lr1ItemSet};
use crate::symbol::Symbol;
use log::warn;
use std::collections::HashMap;
use std::iter::once;

/// Which construction produced a [`ParseTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    Lr0,
    Slr1,
    Lr1,
    Lalr1,
}

/// An ACTION-table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Shift(usize),
    Reduce(usize),
    Accept,
}

/// One of the non-error entries proposed for a conflicted cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictEntry {
    Shift(usize),
    Reduce(usize),
    Accept,
}

/// The classification of a [`Conflict`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictKind {
    ShiftReduce,
    ReduceReduce,
}

/// A state × terminal cell to which two or more distinct non-error entries
/// were proposed during construction. Not a failure: the table still has a
/// value, with `entries[0]`-derived winner kept as the live ACTION entry
/// (see [`ActionBuilder::resolve`] for the resolution policy).
#[derive(Debug, Clone)]
pub struct Conflict {
    pub state: usize,
    pub terminal: Symbol,
    pub entries: Vec<ConflictEntry>,
}

impl Conflict {
    pub fn kind(&self) -> ConflictKind {
        let reduces = self
            .entries
            .iter()
            .filter(|e| matches!(e, ConflictEntry::Reduce(_)))
            .count();
        let shifts = self
            .entries
            .iter()
            .any(|e| matches!(e, ConflictEntry::Shift(_)));
        if shifts && reduces >= 1 {
            ConflictKind::ShiftReduce
        } else {
            ConflictKind::ReduceReduce
        }
    }
}

/// ACTION/GOTO tables for one of the four LR table families, plus any
/// conflicts recorded while constructing them.
#[derive(Debug, Clone)]
pub struct ParseTable {
    pub kind: TableKind,
    pub action: HashMap<(usize, Symbol), Action>,
    pub goto: HashMap<(usize, Symbol), usize>,
    pub conflicts: Vec<Conflict>,
    pub state_count: usize,
}

impl ParseTable {
    pub fn any_conflicts(&self) -> bool {
        !self.conflicts.is_empty()
    }
}

/// Accumulates ACTION-table proposals, recording conflicts and resolving
/// them by a fixed policy: shift-over-reduce, lowest-production-index wins
/// among reduces.
#[derive(Default)]
struct ActionBuilder {
    action: HashMap<(usize, Symbol), Action>,
    conflicts: HashMap<(usize, Symbol), Vec<ConflictEntry>>,
}

impl ActionBuilder {
    fn propose(&mut self, state: usize, terminal: Symbol, proposed: Action) {
        let key = (state, terminal);
        match self.action.get(&key).copied() {
            None => {
                self.action.insert(key, proposed);
            }
            Some(existing) => {
                if existing == proposed {
                    return;
                }
                let winner = Self::resolve(existing, proposed);
                self.action.insert(key, winner);
                let entries = self
                    .conflicts
                    .entry(key)
                    .or_insert_with(|| vec![to_entry(existing)]);
                entries.push(to_entry(proposed));
                warn!(
                    "conflict at state {}, symbol {:?}: {:?} vs {:?}",
                    state, terminal, existing, proposed
                );
            }
        }
    }

    fn resolve(a: Action, b: Action) -> Action {
        match (a, b) {
            (Action::Shift(_), _) => a,
            (_, Action::Shift(_)) => b,
            (Action::Accept, _) => a,
            (_, Action::Accept) => b,
            (Action::Reduce(p1), Action::Reduce(p2)) => {
                if p1 <= p2 {
                    a
                } else {
                    b
                }
            }
        }
    }

    fn finish(self) -> (HashMap<(usize, Symbol), Action>, Vec<Conflict>) {
        let conflicts = self
            .conflicts
            .into_iter()
            .map(|((state, terminal), entries)| Conflict {
                state,
                terminal,
                entries,
            })
            .collect();
        (self.action, conflicts)
    }
}

fn to_entry(action: Action) -> ConflictEntry {
    match action {
        Action::Shift(s) => ConflictEntry::Shift(s),
        Action::Reduce(p) => ConflictEntry::Reduce(p),
        Action::Accept => ConflictEntry::Accept,
    }
}

/// Is production `index` the synthetic augmentation `S' → S`? If so, its
/// final item belongs at the accept cell, never at `reduce 0`.
fn is_accept_production(index: usize) -> bool {
    index == 0
}

fn action_terminals(grammar: &Grammar) -> impl Iterator<Item = Symbol> + '_ {
    grammar.terminals().chain(once(Symbol::Eof))
}

/// Builds the (unrestricted) LR(0) table: every final item reduces on
/// every terminal and Eof, with no lookahead restriction. This table's
/// conflicts are a superset of SLR(1)'s, which are in turn a superset of
/// LALR(1)'s, which are a superset of LR(1)'s.
pub fn build_lr0_table(grammar: &Grammar) -> ParseTable {
    let automaton = lr0::build(grammar);
    let mut builder = ActionBuilder::default();
    let mut goto = HashMap::new();

    for (state_id, state) in automaton.states.iter().enumerate() {
        for item in state {
            if item.is_final(grammar) {
                if is_accept_production(item.production) {
                    builder.propose(state_id, Symbol::Eof, Action::Accept);
                } else {
                    for terminal in action_terminals(grammar) {
                        builder.propose(state_id, terminal, Action::Reduce(item.production));
                    }
                }
            } else if let Some(symbol) = item.symbol_after_dot(grammar) {
                if symbol.is_action_terminal() {
                    if let Some(&target) = automaton.transitions.get(&(state_id, symbol)) {
                        builder.propose(state_id, symbol, Action::Shift(target));
                    }
                }
            }
        }
    }

    for (&(state_id, symbol), &target) in &automaton.transitions {
        if symbol.is_nonterminal() {
            goto.insert((state_id, symbol), target);
        }
    }

    let (action, conflicts) = builder.finish();
    ParseTable {
        kind: TableKind::Lr0,
        action,
        goto,
        conflicts,
        state_count: automaton.states.len(),
    }
}

/// Builds the SLR(1) table: final items reduce only on FOLLOW(head).
pub fn build_slr1_table(grammar: &Grammar, strategy: SetStrategy) -> ParseTable {
    let sets = analysis::compute(grammar, strategy);
    let automaton = lr0::build(grammar);
    let mut builder = ActionBuilder::default();
    let mut goto = HashMap::new();

    for (state_id, state) in automaton.states.iter().enumerate() {
        for item in state {
            if item.is_final(grammar) {
                if is_accept_production(item.production) {
                    builder.propose(state_id, Symbol::Eof, Action::Accept);
                } else {
                    let head = grammar.production(item.production).head;
                    for terminal in sets.follow_of(head).iter() {
                        builder.propose(state_id, terminal, Action::Reduce(item.production));
                    }
                }
            } else if let Some(symbol) = item.symbol_after_dot(grammar) {
                if symbol.is_action_terminal() {
                    if let Some(&target) = automaton.transitions.get(&(state_id, symbol)) {
                        builder.propose(state_id, symbol, Action::Shift(target));
                    }
                }
            }
        }
    }

    for (&(state_id, symbol), &target) in &automaton.transitions {
        if symbol.is_nonterminal() {
            goto.insert((state_id, symbol), target);
        }
    }

    let (action, conflicts) = builder.finish();
    ParseTable {
        kind: TableKind::Slr1,
        action,
        goto,
        conflicts,
        state_count: automaton.states.len(),
    }
}

/// Builds the canonical LR(1) table: final items reduce only at their own
/// lookahead.
pub fn build_lr1_table(grammar: &Grammar, strategy: SetStrategy) -> ParseTable {
    let sets = analysis::compute(grammar, strategy);
    let automaton = lr1::build(grammar, &sets.first);
    build_from_lr1_automaton(grammar, &automaton, TableKind::Lr1)
}

/// Builds the LALR(1) table via brute-force merge: build the LR(1)
/// automaton, partition states by LR(0) core, fuse lookaheads within each
/// partition, then build the table exactly as for LR(1).
pub fn build_lalr1_table(grammar: &Grammar, strategy: SetStrategy) -> ParseTable {
    let sets = analysis::compute(grammar, strategy);
    let lr1_automaton = lr1::build(grammar, &sets.first);
    let merged = merge_by_lr0_core(&lr1_automaton);
    build_from_lr1_automaton(grammar, &merged, TableKind::Lalr1)
}

fn merge_by_lr0_core(automaton: &lr1::Lr1Automaton) -> lr1::Lr1Automaton {
    let core_of = |state: &Lr1ItemSet| -> Lr0ItemSet { state.iter().map(|item| item.core).collect() };

    let mut core_to_merged: HashMap<Lr0ItemSet, usize> = HashMap::new();
    let mut merged_states: Vec<Lr1ItemSet> = Vec::new();
    let mut old_to_merged: Vec<usize> = vec![0; automaton.states.len()];

    for (old_id, state) in automaton.states.iter().enumerate() {
        let key = core_of(state);
        let merged_id = *core_to_merged.entry(key).or_insert_with(|| {
            merged_states.push(Lr1ItemSet::new());
            merged_states.len() - 1
        });
        old_to_merged[old_id] = merged_id;
        for item in state {
            merged_states[merged_id].insert(*item);
        }
    }

    let mut merged_transitions: HashMap<(usize, Symbol), usize> = HashMap::new();
    for (&(old_state, symbol), &old_target) in &automaton.transitions {
        merged_transitions.insert((old_to_merged[old_state], symbol), old_to_merged[old_target]);
    }

    lr1::Lr1Automaton {
        states: merged_states,
        transitions: merged_transitions,
    }
}

fn build_from_lr1_automaton(
    grammar: &Grammar,
    automaton: &lr1::Lr1Automaton,
    kind: TableKind,
) -> ParseTable {
    let mut builder = ActionBuilder::default();
    let mut goto = HashMap::new();

    for (state_id, state) in automaton.states.iter().enumerate() {
        for item in state.iter().copied() {
            if item.is_final(grammar) {
                if is_accept_production(item.core.production) {
                    builder.propose(state_id, Symbol::Eof, Action::Accept);
                } else {
                    builder.propose(state_id, item.lookahead, Action::Reduce(item.core.production));
                }
            } else if let Some(symbol) = item.symbol_after_dot(grammar) {
                if symbol.is_action_terminal() {
                    if let Some(&target) = automaton.transitions.get(&(state_id, symbol)) {
                        builder.propose(state_id, symbol, Action::Shift(target));
                    }
                }
            }
        }
    }

    for (&(state_id, symbol), &target) in &automaton.transitions {
        if symbol.is_nonterminal() {
            goto.insert((state_id, symbol), target);
        }
    }

    let (action, conflicts) = builder.finish();
    ParseTable {
        kind,
        action,
        goto,
        conflicts,
        state_count: automaton.states.len(),
    }
}

/// Handy alias used by callers that want the computed sets alongside a
/// table (e.g. the writer's `print_first_and_follow_sets`).
pub fn compute_sets(grammar: &Grammar, strategy: SetStrategy) -> FirstFollowSets {
    analysis::compute(grammar, strategy)
}
