//! The six concrete grammars used throughout the test suite as binding
//! scenarios, built once here instead of re-derived ad hoc in every test
//! file.

use crate::grammar::{Grammar, GrammarBuilder};

/// Dragon book 4.48: `S → L = R | R; L → * R | id; R → L`. Has exactly one
/// SLR(1) shift/reduce conflict (on `=`) and is LR(1)-conflict-free.
pub fn dragon_4_48() -> Grammar {
    let mut b = GrammarBuilder::new();
    let s = b.nonterminal("S");
    let l = b.nonterminal("L");
    let r = b.nonterminal("R");
    let eq = b.terminal("=");
    let star = b.terminal("*");
    let id = b.terminal("id");
    b.start("S");
    b.production(s, vec![l, eq, r]);
    b.production(s, vec![r]);
    b.production(l, vec![star, r]);
    b.production(l, vec![id]);
    b.production(r, vec![l]);
    b.build().expect("catalog grammar must be well-formed")
}

/// Dragon book 4.52, the `a*ba*b` grammar: `S → B B; B → a B | b`.
/// Conflict-free under all four table kinds.
pub fn dragon_4_52() -> Grammar {
    let mut b = GrammarBuilder::new();
    let s = b.nonterminal("S");
    let bnt = b.nonterminal("B");
    let a = b.terminal("a");
    let b_tok = b.terminal("b");
    b.start("S");
    b.production(s, vec![bnt, bnt]);
    b.production(bnt, vec![a, bnt]);
    b.production(bnt, vec![b_tok]);
    b.build().expect("catalog grammar must be well-formed")
}

/// Dragon book 4.54, the `c*dc*d` grammar: `S → C C; C → c C | d`.
pub fn dragon_4_54() -> Grammar {
    let mut b = GrammarBuilder::new();
    let s = b.nonterminal("S");
    let c = b.nonterminal("C");
    let c_tok = b.terminal("c");
    let d_tok = b.terminal("d");
    b.start("S");
    b.production(s, vec![c, c]);
    b.production(c, vec![c_tok, c]);
    b.production(c, vec![d_tok]);
    b.build().expect("catalog grammar must be well-formed")
}

/// Stanford shift/reduce example: `S → E; E → E + T | T; T → (E) | id |
/// id[E]`. LR(0) has a shift/reduce conflict on `[` that SLR(1) resolves.
pub fn stanford_shift_reduce() -> Grammar {
    let mut b = GrammarBuilder::new();
    let s = b.nonterminal("S");
    let e = b.nonterminal("E");
    let t = b.nonterminal("T");
    let plus = b.terminal("+");
    let lparen = b.terminal("(");
    let rparen = b.terminal(")");
    let id = b.terminal("id");
    let lbracket = b.terminal("[");
    let rbracket = b.terminal("]");
    b.start("S");
    b.production(s, vec![e]);
    b.production(e, vec![e, plus, t]);
    b.production(e, vec![t]);
    b.production(t, vec![lparen, e, rparen]);
    b.production(t, vec![id]);
    b.production(t, vec![id, lbracket, e, rbracket]);
    b.build().expect("catalog grammar must be well-formed")
}

/// Stanford reduce/reduce example: [`stanford_shift_reduce`] plus `E → V =
/// E; V → id`. LR(0) has a reduce/reduce conflict between `T → id•` and
/// `V → id•` on every terminal; SLR(1) still conflicts.
pub fn stanford_reduce_reduce() -> Grammar {
    let mut b = GrammarBuilder::new();
    let s = b.nonterminal("S");
    let e = b.nonterminal("E");
    let t = b.nonterminal("T");
    let v = b.nonterminal("V");
    let plus = b.terminal("+");
    let lparen = b.terminal("(");
    let rparen = b.terminal(")");
    let id = b.terminal("id");
    let lbracket = b.terminal("[");
    let rbracket = b.terminal("]");
    let eq = b.terminal("=");
    b.start("S");
    b.production(s, vec![e]);
    b.production(e, vec![e, plus, t]);
    b.production(e, vec![t]);
    b.production(e, vec![v, eq, e]);
    b.production(t, vec![lparen, e, rparen]);
    b.production(t, vec![id]);
    b.production(t, vec![id, lbracket, e, rbracket]);
    b.production(v, vec![id]);
    b.build().expect("catalog grammar must be well-formed")
}

/// The dangling-else grammar: `S → i E t S | i E t S e S; E → 0 | 1`. SLR(1)
/// has a shift/reduce conflict on `e`; preferring shift binds `else` to the
/// nearest `if`.
pub fn dangling_else() -> Grammar {
    let mut b = GrammarBuilder::new();
    let s = b.nonterminal("S");
    let e = b.nonterminal("E");
    let i = b.terminal("i");
    let t = b.terminal("t");
    let else_tok = b.terminal("e");
    let zero = b.terminal("0");
    let one = b.terminal("1");
    b.start("S");
    b.production(s, vec![i, e, t, s]);
    b.production(s, vec![i, e, t, s, else_tok, s]);
    b.production(e, vec![zero]);
    b.production(e, vec![one]);
    b.build().expect("catalog grammar must be well-formed")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_six_scenarios_build() {
        dragon_4_48();
        dragon_4_52();
        dragon_4_54();
        stanford_shift_reduce();
        stanford_reduce_reduce();
        dangling_else();
    }
}
