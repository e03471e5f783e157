//! The characteristic LR(0) and LR(1) automata over a grammar's items.

pub mod lr0;
pub mod lr1;
