//! Tarjan-style digraph computation of FIRST and FOLLOW (DeRemer &
//! Pennello). Builds a "reads"/"includes" relation over nonterminals and
//! solves it by strongly-connected-component traversal instead of
//! naive fixed-point iteration, so FIRST/FOLLOW converge in O(|P| + |V|)
//! rather than repeated whole-grammar passes.
//!
//! Nullable is still computed by fixed point: it already terminates in
//! ≤ |V| passes, so a digraph variant buys nothing here.

use super::{first_of_string, FirstFollowSets};
use crate::grammar::Grammar;
use crate::item::TerminalSet;
use crate::symbol::Symbol;
use log::debug;
use std::collections::{HashMap, HashSet};

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
    while changed {
        changed = false;
        for production in grammar.all_productions() {
            if nullable[&production.head] {
                continue;
            }
            if production
                .body
                .iter()
                .all(|sym| sym.is_nonterminal() && nullable[sym])
            {
                nullable.insert(production.head, true);
                changed = true;
            }
        }
    }
    nullable
}

/// FIRST(X) for terminals is trivially `{X}`; for nonterminals, solved via
/// the "reads" relation: A reads B when some production `A → X1…Xk` has a
/// (possibly empty) nullable prefix immediately followed by nonterminal B.
fn compute_first(grammar: &Grammar, nullable: &HashMap<Symbol, bool>) -> HashMap<Symbol, TerminalSet> {
    let mut first: HashMap<Symbol, TerminalSet> = HashMap::new();
    for terminal in grammar.terminals() {
        let mut set = TerminalSet::new();
        set.insert(terminal);
        first.insert(terminal, set);
    }

    let mut init: HashMap<Symbol, TerminalSet> = HashMap::new();
    let mut edges: HashMap<Symbol, Vec<Symbol>> = HashMap::new();
    for nt in grammar.nonterminals() {
        init.insert(nt, TerminalSet::new());
        edges.insert(nt, Vec::new());
    }

    for production in grammar.all_productions() {
        let head = production.head;
        for symbol in &production.body {
            match symbol {
                Symbol::Terminal(_) => {
                    init.get_mut(&head).unwrap().insert(*symbol);
                    break;
                }
                Symbol::Nonterminal(_) => {
                    edges.get_mut(&head).unwrap().push(*symbol);
                    if nullable[symbol] {
                        continue;
                    } else {
                        break;
                    }
                }
                _ => unreachable!("production bodies never contain Epsilon/Eof symbols"),
            }
        }
        // Whole body nullable (vacuously true if empty) — add ε directly,
        // independent of the reads-edges added above.
        let reached_end = production.body.is_empty()
            || production
                .body
                .iter()
                .all(|s| matches!(s, Symbol::Nonterminal(_)) && nullable[s]);
        if reached_end {
            init.get_mut(&head).unwrap().insert(Symbol::Epsilon);
        }
    }

    let mut solver = Digraph::new(&edges, &init);
    for nt in grammar.nonterminals() {
        solver.traverse(nt);
    }
    debug!("FIRST digraph solved over {} nonterminals", solver.result.len());

    for (nt, set) in solver.result {
        first.insert(nt, set);
    }
    first
}

/// FOLLOW(B) is solved via the "includes" relation: for a production
/// `A → α B β`, FIRST(β) \ {ε} contributes directly to FOLLOW(B); if β is
/// nullable or empty, B "includes" A, meaning FOLLOW(A) flows into
/// FOLLOW(B).
fn compute_follow(grammar: &Grammar, first: &HashMap<Symbol, TerminalSet>) -> HashMap<Symbol, TerminalSet> {
    let mut init: HashMap<Symbol, TerminalSet> = HashMap::new();
    let mut edges: HashMap<Symbol, Vec<Symbol>> = HashMap::new();
    for nt in grammar.nonterminals() {
        init.insert(nt, TerminalSet::new());
        edges.insert(nt, Vec::new());
    }
    init.get_mut(&grammar.start_symbol()).unwrap().insert(Symbol::Eof);

    for production in grammar.all_productions() {
        let head = production.head;
        let body = &production.body;
        for (i, symbol) in body.iter().enumerate() {
            if !symbol.is_nonterminal() {
                continue;
            }
            let beta = &body[i + 1..];
            let first_beta = first_of_string(first, beta);
            init.get_mut(symbol).unwrap().union_without_epsilon(&first_beta);
            if beta.is_empty() || first_beta.contains(Symbol::Epsilon) {
                edges.get_mut(symbol).unwrap().push(head);
            }
        }
    }

    let mut solver = Digraph::new(&edges, &init);
    for nt in grammar.nonterminals() {
        solver.traverse(nt);
    }
    debug!("FOLLOW digraph solved over {} nonterminals", solver.result.len());
    solver.result
}

/// Generic Tarjan-SCC solver for a "digraph" relation over nonterminals:
/// `F(X) = init(X) ∪ ⋃_{X→Y} F(Y)`, with all members of a cycle converging
/// to the same set.
struct Digraph<'a> {
    edges: &'a HashMap<Symbol, Vec<Symbol>>,
    init: &'a HashMap<Symbol, TerminalSet>,
    result: HashMap<Symbol, TerminalSet>,
    index: HashMap<Symbol, usize>,
    low: HashMap<Symbol, usize>,
    stack: Vec<Symbol>,
    on_stack: HashSet<Symbol>,
    counter: usize,
}

impl<'a> Digraph<'a> {
    fn new(edges: &'a HashMap<Symbol, Vec<Symbol>>, init: &'a HashMap<Symbol, TerminalSet>) -> Self {
        Self {
            edges,
            init,
            result: HashMap::new(),
            index: HashMap::new(),
            low: HashMap::new(),
            stack: Vec::new(),
            on_stack: HashSet::new(),
            counter: 0,
        }
    }

    fn traverse(&mut self, x: Symbol) {
        if self.index.contains_key(&x) {
            return;
        }

        self.counter += 1;
        let d = self.counter;
        self.index.insert(x, d);
        self.low.insert(x, d);
        self.stack.push(x);
        self.on_stack.insert(x);
        self.result
            .insert(x, self.init.get(&x).cloned().unwrap_or_default());

        let successors = self.edges.get(&x).cloned().unwrap_or_default();
        for y in successors {
            if !self.index.contains_key(&y) {
                self.traverse(y);
                let ly = self.low[&y];
                let lx = self.low.get_mut(&x).unwrap();
                *lx = (*lx).min(ly);
            } else if self.on_stack.contains(&y) {
                let iy = self.index[&y];
                let lx = self.low.get_mut(&x).unwrap();
                *lx = (*lx).min(iy);
            }
            let fy = self.result.get(&y).cloned().unwrap_or_default();
            let fx = self.result.get_mut(&x).unwrap();
            fx.union_with(&fy);
        }

        if self.low[&x] == self.index[&x] {
            let mut members = Vec::new();
            loop {
                let y = self.stack.pop().unwrap();
                self.on_stack.remove(&y);
                members.push(y);
                if y == x {
                    break;
                }
            }
            if members.len() > 1 {
                let mut merged = TerminalSet::new();
                for &m in &members {
                    let fm = self.result.get(&m).cloned().unwrap_or_default();
                    merged.union_with(&fm);
                }
                for &m in &members {
                    self.result.insert(m, merged.clone());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::GrammarBuilder;

    #[test]
    fn handles_mutually_recursive_nonterminals() {
        // A -> B | a ; B -> A | b
        let mut g = GrammarBuilder::new();
        let a = g.nonterminal("A");
        let bnt = g.nonterminal("B");
        let a_tok = g.terminal("a");
        let b_tok = g.terminal("b");
        g.start("A");
        g.production(a, vec![bnt]);
        g.production(a, vec![a_tok]);
        g.production(bnt, vec![a]);
        g.production(bnt, vec![b_tok]);
        let grammar = g.build().unwrap();

        let sets = compute(&grammar);
        assert!(sets.first_of(a).contains(a_tok));
        assert!(sets.first_of(a).contains(b_tok));
        assert!(sets.first_of(bnt).contains(a_tok));
        assert!(sets.first_of(bnt).contains(b_tok));
    }
}
