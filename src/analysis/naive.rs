//! Naive fixed-point computation of Nullable, FIRST, and FOLLOW.
//!
//! The textbook fixed-point algorithm, over indexed [`Symbol`]s. Terminates
//! in at most `|V|` passes for nullable, and a bounded number of passes for
//! FIRST/FOLLOW over `|P|` productions.

use super::{first_of_string, FirstFollowSets};
use crate::grammar::Grammar;
use crate::item::TerminalSet;
use crate::symbol::Symbol;
use log::debug;
use std::collections::HashMap;

pub fn compute(grammar: &Grammar) -> FirstFollowSets {
    let nullable = compute_nullable(grammar);
    let first = compute_first(grammar, &nullable);
    let follow = compute_follow(grammar, &first);
    FirstFollowSets {
        first,
        follow,
        nullable,
    }
}

fn compute_nullable(grammar: &Grammar) -> HashMap<Symbol, bool> {
    let mut nullable: HashMap<Symbol, bool> = grammar.nonterminals().map(|nt| (nt, false)).collect();

    let mut changed = true;
    let mut passes = 0;
    while changed {
        changed = false;
        passes += 1;
        for production in grammar.all_productions() {
            if nullable[&production.head] {
                continue;
            }
            let body_nullable = production
                .body
                .iter()
                .all(|sym| sym.is_nonterminal() && nullable[sym]);
            if body_nullable {
                nullable.insert(production.head, true);
                changed = true;
            }
        }
    }
    debug!("nullable fixed point converged after {} passes", passes);
    nullable
}

fn compute_first(grammar: &Grammar, nullable: &HashMap<Symbol, bool>) -> HashMap<Symbol, TerminalSet> {
    let mut first: HashMap<Symbol, TerminalSet> = HashMap::new();

    for terminal in grammar.terminals() {
        let mut set = TerminalSet::new();
        set.insert(terminal);
        first.insert(terminal, set);
    }
    for nt in grammar.nonterminals() {
        let mut set = TerminalSet::new();
        if nullable[&nt] {
            set.insert(Symbol::Epsilon);
        }
        first.insert(nt, set);
    }

    let mut changed = true;
    let mut passes = 0;
    while changed {
        changed = false;
        passes += 1;
        for production in grammar.all_productions() {
            let rhs_first = first_of_string(&first, &production.body);
            let entry = first.get_mut(&production.head).unwrap();
            if entry.union_with(&rhs_first) {
                changed = true;
            }
        }
    }
    debug!("FIRST fixed point converged after {} passes", passes);
    first
}

fn compute_follow(grammar: &Grammar, first: &HashMap<Symbol, TerminalSet>) -> HashMap<Symbol, TerminalSet> {
    let mut follow: HashMap<Symbol, TerminalSet> =
        grammar.nonterminals().map(|nt| (nt, TerminalSet::new())).collect();

    follow
        .get_mut(&grammar.start_symbol())
        .unwrap()
        .insert(Symbol::Eof);

    let mut changed = true;
    let mut passes = 0;
    while changed {
        changed = false;
        passes += 1;
        for production in grammar.all_productions() {
            let head = production.head;
            let body = &production.body;

            for (i, symbol) in body.iter().enumerate() {
                if !symbol.is_nonterminal() {
                    continue;
                }

                let beta = &body[i + 1..];
                let first_beta = first_of_string(first, beta);

                let head_follow = follow.get(&head).cloned().unwrap_or_default();
                let entry = follow.get_mut(symbol).unwrap();

                if entry.union_without_epsilon(&first_beta) {
                    changed = true;
                }
                if beta.is_empty() || first_beta.contains(Symbol::Epsilon) {
                    if entry.union_with(&head_follow) {
                        changed = true;
                    }
                }
            }
        }
    }
    debug!("FOLLOW fixed point converged after {} passes", passes);
    follow
}
