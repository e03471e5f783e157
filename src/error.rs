//! Error types for the LR table construction toolkit.

use crate::driver::{Move, Token};
use thiserror::Error;

/// Errors that can occur during grammar construction, DFA construction, or
/// parsing. Table construction itself never returns an error: a built
/// [`crate::table::ParseTable`] always has a value, and any conflicts found
/// while building it are recorded as data on the table (see
/// [`crate::table::Conflict`]) rather than surfaced here.
#[derive(Error, Debug)]
pub enum GrammarError {
    /// The declared start symbol was never declared as a nonterminal.
    #[error("start symbol {0:?} is not a declared nonterminal")]
    UnknownStart(String),

    /// A production body referenced a symbol name that was never declared
    /// as a terminal or nonterminal.
    #[error("symbol {symbol:?} used in production for {head:?} was never declared")]
    SymbolNotDeclared { head: String, symbol: String },

    /// The declared terminal or nonterminal universe was empty.
    #[error("grammar has no declared {0}")]
    EmptyAlphabet(&'static str),

    /// Raised while constructing a [`crate::dfa`] representation: a
    /// transition, the start state, or an accepting state named a state
    /// index outside the declared state count.
    #[error("state out of range: {0}")]
    UnsupportedAlphabet(String),

    /// The shift-reduce driver consulted an `error` cell in the ACTION
    /// table. Carries the offending token, the state the driver was in,
    /// and the trace of moves made before the failure.
    #[error("syntax error at {token:?} in state {state}")]
    SyntaxError {
        token: Token,
        state: usize,
        trace: Vec<Move>,
    },
}

/// Type alias for `Result`s in this crate.
pub type Result<T> = std::result::Result<T, GrammarError>;
