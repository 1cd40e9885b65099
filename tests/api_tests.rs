mod common;

use common::{Tok, lex, num, results, sym};
use tokparsec::parser::{
    BoxedParser, Outcome, Position, alt, expect_eof, expect_single_result, opt, parse,
    parse_complete, rep,
};

#[test]
fn expect_eof_keeps_complete_candidates() {
    let tokens = lex("1 2");
    let out = expect_eof(parse(&rep(num()), &tokens));

    assert!(out.success);
    assert_eq!(results(&out, tokens.len()), vec![(vec![1, 2], 2)]);
}

#[test]
fn expect_eof_reports_where_parsing_stopped() {
    let tokens = lex("1 + 2");
    let out = expect_eof(parse(&num(), &tokens));

    assert!(!out.success);
    let error = out.error.unwrap();
    assert_eq!(error.position, Position::At(1));
    assert_eq!(
        error.to_string(),
        "the parser cannot reach the end of input, stops at '+'"
    );
}

#[test]
fn expect_eof_passes_failure_through() {
    let tokens = lex("x");
    let out = expect_eof(parse(&num(), &tokens));
    assert_eq!(out.error.unwrap().to_string(), "expected NUM, got 'x'");
}

#[test]
fn expect_eof_rejects_empty_success() {
    let out: Outcome<'_, Tok, i64> = Outcome::empty_success();
    let out = expect_eof(out);

    assert!(!out.success);
    assert_eq!(out.error.unwrap().to_string(), "no result is returned");
}

#[test]
fn expect_single_result_unwraps_one_value() {
    let tokens = lex("3");
    assert_eq!(expect_single_result(parse(&num(), &tokens)).unwrap(), 3);
}

#[test]
fn expect_single_result_rejects_ambiguity() {
    let tokens = lex("3");
    let error = expect_single_result(parse(&opt(num()), &tokens)).unwrap_err();
    assert_eq!(error.to_string(), "multiple results are returned");
    assert_eq!(error.position, Position::Unknown);
}

#[test]
fn expect_single_result_rejects_no_result() {
    let out: Outcome<'_, Tok, i64> = Outcome::empty_success();
    let error = expect_single_result(out).unwrap_err();
    assert_eq!(error.to_string(), "no result is returned");
}

#[test]
fn parse_complete_chains_both_reductions() {
    let tokens = lex("1 2 3");
    assert_eq!(parse_complete(&rep(num()), &tokens).unwrap(), vec![1, 2, 3]);

    // both branches reach the end
    let twice: BoxedParser<Tok, i64> = alt(vec![num(), num()]);
    let tokens = lex("1");
    assert!(parse_complete(&twice, &tokens).is_err());

    let tokens = lex("1 ;");
    let error = parse_complete(&rep(num()), &tokens).unwrap_err();
    assert_eq!(error.position, Position::At(1));
}

#[test]
fn parse_complete_prefers_deeper_errors() {
    // `1 +` stops at `+` but the failed attempt after `+` reached the end
    let tokens = lex("1 +");
    let p = num().skip(opt(sym("+").seq(num())));
    let error = parse_complete(&p, &tokens).unwrap_err();

    assert_eq!(error.position, Position::Eof);
    assert_eq!(error.to_string(), "expected NUM, got end of input");
}
