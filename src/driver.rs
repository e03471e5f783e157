//! Shift-reduce driver: runs a [`crate::table::ParseTable`] over a token
//! stream, recording each move instead of just a yes/no answer.

use crate::error::{GrammarError, Result};
use crate::grammar::Grammar;
use crate::symbol::Symbol;
use crate::table::{Action, ParseTable};
use crate::writer::OutputWriter;
use log::trace;

/// A single input token. Carries only its grammar symbol: this driver
/// never builds a parse tree or runs semantic actions, so no payload is
/// needed beyond what the ACTION table is keyed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub symbol: Symbol,
}

impl Token {
    pub fn new(symbol: Symbol) -> Self {
        Self { symbol }
    }
}

/// Supplies tokens to the driver. `peek` must be idempotent until the next
/// `advance`; both yield an unbounded run of [`Symbol::Eof`] once the
/// underlying input is exhausted.
pub trait TokenStream {
    fn peek(&mut self) -> Token;
    fn advance(&mut self) -> Token;
}

/// A [`TokenStream`] over a fixed sequence of terminal symbols.
pub struct VecTokenStream {
    tokens: Vec<Symbol>,
    position: usize,
}

impl VecTokenStream {
    pub fn new(tokens: Vec<Symbol>) -> Self {
        Self { tokens, position: 0 }
    }

    fn current(&self) -> Symbol {
        self.tokens.get(self.position).copied().unwrap_or(Symbol::Eof)
    }
}

impl TokenStream for VecTokenStream {
    fn peek(&mut self) -> Token {
        Token::new(self.current())
    }

    fn advance(&mut self) -> Token {
        let token = Token::new(self.current());
        if self.position < self.tokens.len() {
            self.position += 1;
        }
        token
    }
}

/// One step the driver took. A completed parse's [`Trace`] is the full
/// sequence of these, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    Shift { state: usize, symbol: Symbol },
    Reduce { production: usize, head: Symbol, len: usize },
    Goto { state: usize },
    Accept,
}

/// The full move-by-move record of a parse.
pub type Trace = Vec<Move>;

/// Drives a [`ParseTable`] over a [`TokenStream`], shifting and reducing
/// until accept or a consulted `error` cell. Every move is pushed onto the
/// returned [`Trace`] and, simultaneously, rendered through the caller's
/// [`OutputWriter`].
pub struct Parser<'a> {
    grammar: &'a Grammar,
    table: &'a ParseTable,
}

impl<'a> Parser<'a> {
    pub fn new(grammar: &'a Grammar, table: &'a ParseTable) -> Self {
        Self { grammar, table }
    }

    /// Parses the full token stream, returning the move trace on success
    /// or a [`GrammarError::SyntaxError`] carrying the trace made so far.
    pub fn parse(&self, tokens: &mut impl TokenStream, out: &mut impl OutputWriter) -> Result<Trace> {
        let symbols = self.grammar.symbols();
        let mut state_stack: Vec<usize> = vec![0];
        let mut trace: Trace = Vec::new();
        let mut lookahead = tokens.peek();

        loop {
            let state = *state_stack.last().expect("state stack never empties");
            match self.table.action.get(&(state, lookahead.symbol)).copied() {
                Some(Action::Shift(target)) => {
                    tokens.advance();
                    trace!("shift to state {} on {:?}", target, lookahead.symbol);
                    out.write_line(&format!("shift {} on {}", target, symbols.name(lookahead.symbol)));
                    trace.push(Move::Shift {
                        state: target,
                        symbol: lookahead.symbol,
                    });
                    state_stack.push(target);
                    lookahead = tokens.peek();
                }
                Some(Action::Reduce(production_index)) => {
                    let production = self.grammar.production(production_index);
                    let len = production.body.len();
                    let head = production.head;
                    trace!("reduce by production {}", production_index);
                    out.write_line(&format!("reduce by {}", production.display(symbols)));
                    for _ in 0..len {
                        state_stack.pop();
                    }
                    trace.push(Move::Reduce {
                        production: production_index,
                        head,
                        len,
                    });

                    let top = *state_stack.last().expect("state stack never empties");
                    match self.table.goto.get(&(top, head)).copied() {
                        Some(target) => {
                            trace!("goto state {}", target);
                            out.write_line(&format!("goto {}", target));
                            trace.push(Move::Goto { state: target });
                            state_stack.push(target);
                        }
                        None => {
                            return Err(GrammarError::SyntaxError {
                                token: lookahead,
                                state: top,
                                trace,
                            });
                        }
                    }
                }
                Some(Action::Accept) => {
                    out.write_line("accept");
                    trace.push(Move::Accept);
                    return Ok(trace);
                }
                None => {
                    return Err(GrammarError::SyntaxError {
                        token: lookahead,
                        state,
                        trace,
                    });
                }
            }
        }
    }
}
