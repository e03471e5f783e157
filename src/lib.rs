//! LR(0)/SLR(1)/LR(1)/LALR(1) parsing table construction over context-free
//! grammars.
//!
//! Builds the characteristic LR(0) and LR(1) automata over a grammar's
//! items, assembles ACTION/GOTO tables for all four table families,
//! classifies shift/reduce and reduce/reduce conflicts, and drives a
//! table-driven shift-reduce parser over a token stream. As a secondary
//! capability, [`dfa`] represents deterministic finite automata in several
//! space/time trade-offs and exports any of them as a Graphviz digraph.

pub mod analysis;
pub mod automaton;
pub mod catalog;
pub mod dfa;
pub mod driver;
pub mod error;
pub mod grammar;
pub mod item;
pub mod symbol;
pub mod table;
pub mod writer;

pub use analysis::{FirstFollowSets, SetStrategy};
pub use automaton::{lr0::Lr0Automaton, lr1::Lr1Automaton};
pub use driver::{Move, Parser, Token, TokenStream, Trace, VecTokenStream};
pub use error::{GrammarError, Result};
pub use grammar::{Grammar, GrammarBuilder, Production};
pub use item::{Lr0Item, Lr1Item, TerminalSet};
pub use symbol::{Symbol, SymbolTable};
pub use table::{
    build_lalr1_table, build_lr0_table, build_lr1_table, build_slr1_table, Action, Conflict,
    ConflictEntry, ConflictKind, ParseTable, TableKind,
};
pub use writer::{print_first_and_follow_sets, print_parsing_table, OutputWriter};
