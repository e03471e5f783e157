//! Output abstraction shared by the table printer and the driver's trace
//! renderer, so callers can capture either into a `String`, a `Vec<String>`,
//! or (in an embedding binary) stdout, without the library depending on
//! `std::io` directly.

use crate::analysis::FirstFollowSets;
use crate::grammar::Grammar;
use crate::table::{Action, ParseTable};

/// A line-oriented output sink.
pub trait OutputWriter {
    fn write_line(&mut self, line: &str);
}

impl OutputWriter for String {
    fn write_line(&mut self, line: &str) {
        self.push_str(line);
        self.push('\n');
    }
}

impl OutputWriter for Vec<String> {
    fn write_line(&mut self, line: &str) {
        self.push(line.to_string());
    }
}

/// Prints the ACTION/GOTO tables state by state, one line per non-empty
/// cell, in state order.
pub fn print_parsing_table(table: &ParseTable, grammar: &Grammar, out: &mut impl OutputWriter) {
    let symbols = grammar.symbols();
    for state in 0..table.state_count {
        out.write_line(&format!("state {}:", state));
        for terminal in grammar.terminals().chain(std::iter::once(crate::symbol::Symbol::Eof)) {
            if let Some(action) = table.action.get(&(state, terminal)) {
                let action_text = match action {
                    Action::Shift(target) => format!("shift {}", target),
                    Action::Reduce(production) => {
                        format!("reduce {}", grammar.production(*production).display(symbols))
                    }
                    Action::Accept => "accept".to_string(),
                };
                out.write_line(&format!("  on {}: {}", symbols.name(terminal), action_text));
            }
        }
        for nonterminal in grammar.nonterminals() {
            if let Some(target) = table.goto.get(&(state, nonterminal)) {
                out.write_line(&format!("  goto {} on {}", target, symbols.name(nonterminal)));
            }
        }
    }
    for conflict in &table.conflicts {
        out.write_line(&format!(
            "conflict ({:?}) at state {} on {}",
            conflict.kind(),
            conflict.state,
            symbols.name(conflict.terminal)
        ));
    }
}

/// Prints FIRST/FOLLOW/Nullable for every nonterminal, in declaration order.
pub fn print_first_and_follow_sets(sets: &FirstFollowSets, grammar: &Grammar, out: &mut impl OutputWriter) {
    let symbols = grammar.symbols();
    for nt in grammar.nonterminals() {
        out.write_line(&format!(
            "FIRST({}) = {}, FOLLOW({}) = {}, nullable = {}",
            symbols.name(nt),
            sets.first_of(nt),
            symbols.name(nt),
            sets.follow_of(nt),
            sets.is_nullable(nt)
        ));
    }
}
