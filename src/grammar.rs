//! Grammar assembly for context-free grammars.
//!
//! [`GrammarBuilder`] accepts a declared terminal/nonterminal universe, a
//! start symbol, and a list of productions, and validates and augments them
//! into an immutable [`Grammar`].

use crate::error::{GrammarError, Result};
use crate::symbol::{Symbol, SymbolTable};
use std::collections::HashMap;
use std::fmt;

/// A production rule in a context-free grammar: `head → body`.
///
/// `body` may be empty (an epsilon-production). Production 0 in any built
/// [`Grammar`] is always the synthetic `S' → S` augmentation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Production {
    pub index: usize,
    pub head: Symbol,
    pub body: Vec<Symbol>,
}

impl Production {
    pub fn new(index: usize, head: Symbol, body: Vec<Symbol>) -> Self {
        Self { index, head, body }
    }

    /// Wraps this production with a symbol table so it can be displayed
    /// with real names instead of bare `Symbol` tags.
    pub fn display<'a>(&'a self, symbols: &'a SymbolTable) -> ProductionDisplay<'a> {
        ProductionDisplay {
            production: self,
            symbols,
        }
    }
}

/// Renders a [`Production`] using a [`SymbolTable`] for names.
pub struct ProductionDisplay<'a> {
    production: &'a Production,
    symbols: &'a SymbolTable,
}

impl fmt::Display for ProductionDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} →", self.symbols.name(self.production.head))?;
        if self.production.body.is_empty() {
            write!(f, " ε")
        } else {
            for sym in &self.production.body {
                write!(f, " {}", self.symbols.name(*sym))?;
            }
            Ok(())
        }
    }
}

/// A context-free grammar, built once and immutable thereafter.
///
/// Owns the terminal universe, the nonterminal universe (including the
/// augmented start `S'`), and the production list. Analyses (FIRST/FOLLOW,
/// automata, tables) are pure functions of a `&Grammar`.
#[derive(Debug, Clone)]
pub struct Grammar {
    symbols: SymbolTable,
    productions: Vec<Production>,
    /// The augmented start nonterminal `S'`.
    start: Symbol,
    /// The user's declared start nonterminal `S`.
    user_start: Symbol,
    production_map: HashMap<Symbol, Vec<usize>>,
}

impl Grammar {
    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// Returns the indices of all productions headed by `nt`.
    pub fn productions_for(&self, nt: Symbol) -> &[usize] {
        self.production_map
            .get(&nt)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Returns a production by its index.
    pub fn production(&self, index: usize) -> &Production {
        &self.productions[index]
    }

    /// Returns all productions in the grammar, production 0 first.
    pub fn all_productions(&self) -> &[Production] {
        &self.productions
    }

    /// Iterates all nonterminals, including the augmented start `S'`.
    pub fn nonterminals(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.symbols.nonterminals()
    }

    /// Iterates all terminals (excluding Eof).
    pub fn terminals(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.symbols.terminals()
    }

    /// The augmented start symbol `S'`.
    pub fn start_symbol(&self) -> Symbol {
        self.start
    }

    /// The user's declared start symbol `S` (before augmentation).
    pub fn user_start_symbol(&self) -> Symbol {
        self.user_start
    }
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for production in &self.productions {
            writeln!(f, "{}", production.display(&self.symbols))?;
        }
        Ok(())
    }
}

/// Builds a [`Grammar`] from a declared symbol universe and a list of
/// productions, validating and augmenting it with `S' → S`.
#[derive(Debug, Default)]
pub struct GrammarBuilder {
    symbols: SymbolTable,
    start_name: Option<String>,
    productions: Vec<(Symbol, Vec<Symbol>)>,
}

impl GrammarBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares (or re-declares) the start nonterminal by name. Must also
    /// be declared via [`GrammarBuilder::nonterminal`].
    pub fn start(&mut self, name: &str) -> &mut Self {
        self.start_name = Some(name.to_string());
        self
    }

    /// Declares a terminal, returning its `Symbol`.
    pub fn terminal(&mut self, name: &str) -> Symbol {
        self.symbols.intern_terminal(name)
    }

    /// Declares a nonterminal, returning its `Symbol`.
    pub fn nonterminal(&mut self, name: &str) -> Symbol {
        self.symbols.intern_nonterminal(name)
    }

    /// Adds a production `head → body`. An empty `body` denotes an
    /// epsilon-production.
    pub fn production(&mut self, head: Symbol, body: Vec<Symbol>) -> &mut Self {
        self.productions.push((head, body));
        self
    }

    /// Validates and builds the grammar, prepending the synthetic
    /// augmentation `S' → S` as production 0.
    pub fn build(self) -> Result<Grammar> {
        let GrammarBuilder {
            mut symbols,
            start_name,
            productions,
        } = self;

        if symbols.nonterminal_count() == 0 {
            return Err(GrammarError::EmptyAlphabet("nonterminals"));
        }

        let start_name = start_name.ok_or_else(|| GrammarError::UnknownStart(String::new()))?;
        let user_start = symbols
            .nonterminal(&start_name)
            .ok_or_else(|| GrammarError::UnknownStart(start_name.clone()))?;

        for (head, body) in &productions {
            Self::validate_symbol(&symbols, *head, &start_name)?;
            if !head.is_nonterminal() {
                return Err(GrammarError::SymbolNotDeclared {
                    head: symbols.name(*head).to_string(),
                    symbol: symbols.name(*head).to_string(),
                });
            }
            for sym in body {
                Self::validate_symbol(&symbols, *sym, symbols.name(*head))?;
            }
        }

        let augmented_start = symbols.intern_nonterminal("S'");

        let mut all = Vec::with_capacity(productions.len() + 1);
        all.push(Production::new(0, augmented_start, vec![user_start]));
        for (i, (head, body)) in productions.into_iter().enumerate() {
            all.push(Production::new(i + 1, head, body));
        }

        let mut production_map: HashMap<Symbol, Vec<usize>> = HashMap::new();
        for production in &all {
            production_map
                .entry(production.head)
                .or_default()
                .push(production.index);
        }

        Ok(Grammar {
            symbols,
            productions: all,
            start: augmented_start,
            user_start,
            production_map,
        })
    }

    fn validate_symbol(symbols: &SymbolTable, symbol: Symbol, head_name: &str) -> Result<()> {
        let in_range = match symbol {
            Symbol::Terminal(i) => (i as usize) < symbols.terminal_count(),
            Symbol::Nonterminal(i) => (i as usize) < symbols.nonterminal_count(),
            Symbol::Epsilon => true,
            Symbol::Eof => false,
        };
        if in_range {
            Ok(())
        } else {
            Err(GrammarError::SymbolNotDeclared {
                head: head_name.to_string(),
                symbol: symbol.to_string(),
            })
        }
    }
}
