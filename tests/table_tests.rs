//! Integration tests for ACTION/GOTO table construction and conflict
//! classification, over the grammar catalog's binding scenarios.

use lr_tables::catalog;
use lr_tables::{
    build_lalr1_table, build_lr0_table, build_lr1_table, build_slr1_table, ConflictKind,
    SetStrategy,
};

#[test]
fn dragon_4_48_slr1_has_exactly_one_shift_reduce_conflict_on_equals() {
    env_logger::try_init().ok();

    let grammar = catalog::dragon_4_48();
    let table = build_slr1_table(&grammar, SetStrategy::NaiveFixedPoint);

    let eq = grammar.symbols().terminal("=").unwrap();
    let shift_reduce: Vec<_> = table
        .conflicts
        .iter()
        .filter(|c| c.kind() == ConflictKind::ShiftReduce)
        .collect();
    assert_eq!(shift_reduce.len(), 1);
    assert_eq!(shift_reduce[0].terminal, eq);
}

#[test]
fn dragon_4_48_lr1_has_no_conflicts() {
    let grammar = catalog::dragon_4_48();
    let table = build_lr1_table(&grammar, SetStrategy::NaiveFixedPoint);
    assert!(!table.any_conflicts());
}

#[test]
fn dragon_4_52_is_conflict_free_under_all_four_table_kinds() {
    let grammar = catalog::dragon_4_52();
    assert!(build_lr0_table(&grammar).conflicts.is_empty());
    assert!(build_slr1_table(&grammar, SetStrategy::NaiveFixedPoint).conflicts.is_empty());
    assert!(build_lr1_table(&grammar, SetStrategy::NaiveFixedPoint).conflicts.is_empty());
    assert!(build_lalr1_table(&grammar, SetStrategy::NaiveFixedPoint).conflicts.is_empty());
}

#[test]
fn stanford_shift_reduce_lr0_conflicts_on_bracket_but_slr1_resolves_it() {
    let grammar = catalog::stanford_shift_reduce();
    let lbracket = grammar.symbols().terminal("[").unwrap();

    let lr0 = build_lr0_table(&grammar);
    assert!(lr0
        .conflicts
        .iter()
        .any(|c| c.terminal == lbracket && c.kind() == ConflictKind::ShiftReduce));

    let slr1 = build_slr1_table(&grammar, SetStrategy::NaiveFixedPoint);
    assert!(!slr1.conflicts.iter().any(|c| c.terminal == lbracket));
}

#[test]
fn stanford_reduce_reduce_conflicts_on_every_terminal_and_slr1_does_not_resolve_it() {
    env_logger::try_init().ok();

    let grammar = catalog::stanford_reduce_reduce();

    let lr0 = build_lr0_table(&grammar);
    let reduce_reduce_states: Vec<usize> = lr0
        .conflicts
        .iter()
        .filter(|c| c.kind() == ConflictKind::ReduceReduce)
        .map(|c| c.state)
        .collect();
    assert!(!reduce_reduce_states.is_empty());

    let slr1 = build_slr1_table(&grammar, SetStrategy::NaiveFixedPoint);
    assert!(slr1.conflicts.iter().any(|c| c.kind() == ConflictKind::ReduceReduce));
}

#[test]
fn dangling_else_slr1_conflicts_on_else_and_shift_wins() {
    let grammar = catalog::dangling_else();
    let else_tok = grammar.symbols().terminal("e").unwrap();
    let table = build_slr1_table(&grammar, SetStrategy::NaiveFixedPoint);

    let conflict = table
        .conflicts
        .iter()
        .find(|c| c.terminal == else_tok)
        .expect("dangling else must conflict on 'e'");
    assert_eq!(conflict.kind(), ConflictKind::ShiftReduce);

    let winning_state = conflict.state;
    let action = table.action.get(&(winning_state, else_tok)).unwrap();
    assert!(matches!(action, lr_tables::Action::Shift(_)));
}

#[test]
fn table_monotonicity_holds_across_the_catalog() {
    let grammars = [
        catalog::dragon_4_48(),
        catalog::stanford_shift_reduce(),
        catalog::stanford_reduce_reduce(),
        catalog::dangling_else(),
    ];
    for grammar in &grammars {
        let lr0 = build_lr0_table(grammar).conflicts.len();
        let slr1 = build_slr1_table(grammar, SetStrategy::NaiveFixedPoint).conflicts.len();
        let lalr1 = build_lalr1_table(grammar, SetStrategy::NaiveFixedPoint).conflicts.len();
        let lr1 = build_lr1_table(grammar, SetStrategy::NaiveFixedPoint).conflicts.len();
        assert!(lr0 >= slr1);
        assert!(slr1 >= lalr1);
        assert!(lalr1 >= lr1);
    }
}

#[test]
fn production_zero_never_appears_as_a_reduce_action() {
    let grammar = catalog::dragon_4_52();
    for table in [
        build_lr0_table(&grammar),
        build_slr1_table(&grammar, SetStrategy::NaiveFixedPoint),
        build_lr1_table(&grammar, SetStrategy::NaiveFixedPoint),
        build_lalr1_table(&grammar, SetStrategy::NaiveFixedPoint),
    ] {
        for action in table.action.values() {
            if let lr_tables::Action::Reduce(p) = action {
                assert_ne!(*p, 0);
            }
        }
    }
}
