mod common;

use common::{Tok, lex, num, results, sym};
use tokparsec::parser::{
    BinOp, BoxedParser, Position, bin_op, chainl, chainl_sc, chainl1, chainl1_sc, chainr,
    chainr_sc, chainr1, chainr1_sc, kright, lrec, lrec_sc, parse,
};

fn minus() -> BoxedParser<Tok, BinOp<i64>> {
    sym("-").map(|_| bin_op(|a: i64, b: i64| a - b))
}

#[test]
fn lrec_sc_folds_longest_run() {
    let tokens = lex("1 + 2 + 3");
    let p = lrec_sc(num(), kright(sym("+"), num()), |acc, n| acc + n);
    let out = parse(&p, &tokens);

    assert!(out.success);
    assert_eq!(results(&out, tokens.len()), vec![(6, 5)]);
}

#[test]
fn lrec_keeps_every_prefix_longest_first() {
    let tokens = lex("1 + 2 + 3");
    let p = lrec(num(), kright(sym("+"), num()), |acc, n| acc + n);
    let out = parse(&p, &tokens);

    assert_eq!(results(&out, tokens.len()), vec![(6, 5), (3, 3), (1, 1)]);
}

#[test]
fn lrec_folds_from_the_left() {
    let tokens = lex("8 - 3 - 2");
    let p = lrec_sc(num(), kright(sym("-"), num()), |acc, n| acc - n);
    assert_eq!(parse(&p, &tokens).candidates[0].value, 3);
}

#[test]
fn lrec_sc_leaves_dangling_operator() {
    let tokens = lex("1 +");
    let p = lrec_sc(num(), kright(sym("+"), num()), |acc, n| acc + n);
    let out = parse(&p, &tokens);

    assert!(out.success);
    assert_eq!(results(&out, tokens.len()), vec![(1, 1)]);
    let error = out.error.unwrap();
    assert_eq!(error.position, Position::Eof);
    assert_eq!(error.to_string(), "expected NUM, got end of input");
}

#[test]
fn chainl_is_left_associative() {
    let tokens = lex("8 - 3 - 2");

    let out = parse(&chainl1_sc(num(), minus()), &tokens);
    assert_eq!(results(&out, tokens.len()), vec![(3, 5)]);

    let out = parse(&chainl1(num(), minus()), &tokens);
    assert_eq!(results(&out, tokens.len()), vec![(3, 5), (5, 3), (8, 1)]);
}

#[test]
fn chainr_is_right_associative() {
    let tokens = lex("8 - 3 - 2");

    let out = parse(&chainr1_sc(num(), minus()), &tokens);
    assert_eq!(results(&out, tokens.len()), vec![(7, 5)]);

    let out = parse(&chainr1(num(), minus()), &tokens);
    assert_eq!(results(&out, tokens.len()), vec![(7, 5), (5, 3), (8, 1)]);
}

#[test]
fn chains_fall_back_to_default() {
    let tokens = lex("x");

    let out = parse(&chainl_sc(num(), minus(), 42), &tokens);
    assert_eq!(results(&out, tokens.len()), vec![(42, 0)]);

    let out = parse(&chainr_sc(num(), minus(), 42), &tokens);
    assert_eq!(results(&out, tokens.len()), vec![(42, 0)]);

    let out = parse(&chainl(num(), minus(), 42), &tokens);
    assert_eq!(results(&out, tokens.len()), vec![(42, 0)]);

    let out = parse(&chainr(num(), minus(), 42), &tokens);
    assert_eq!(results(&out, tokens.len()), vec![(42, 0)]);
}

#[test]
fn chain1_requires_an_operand() {
    let tokens = lex("x");
    assert!(!parse(&chainl1_sc(num(), minus()), &tokens).success);
    assert!(!parse(&chainr1_sc(num(), minus()), &tokens).success);
}

#[test]
fn chain_with_default_still_prefers_operands() {
    let tokens = lex("5");
    let out = parse(&chainl(num(), minus(), 0), &tokens);
    assert_eq!(results(&out, tokens.len()), vec![(5, 1), (0, 0)]);
}
