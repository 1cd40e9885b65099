mod common;

use common::{Tok, lex, num, results, sym, word};
use tokparsec::parser::{
    BoxedParser, Either, Position, alt, alt2, alt3, alt_sc, alt_sc2, first, kright, opt, opt_sc,
    parse, seq,
};

fn text(s: &str) -> BoxedParser<Tok, String> {
    sym(s).map(|t: Tok| t.text)
}

#[test]
fn alt_unions_every_successful_branch() {
    let tokens = lex("a b");
    let short = text("a");
    let long = seq(vec![text("a"), text("b")]).map(|v: Vec<String>| v.concat());
    let p = alt(vec![short, long]);
    let out = parse(&p, &tokens);

    assert!(out.success);
    assert_eq!(
        results(&out, tokens.len()),
        vec![("a".to_string(), 1), ("ab".to_string(), 2)]
    );
}

#[test]
fn alt_fails_with_farthest_error() {
    let tokens = lex("a c");
    let ab = kright(sym("a"), text("b"));
    let x = text("x");
    let p = alt(vec![x, ab]);
    let out = parse(&p, &tokens);

    assert!(!out.success);
    let error = out.error.unwrap();
    assert_eq!(error.position, Position::At(1));
    assert_eq!(error.to_string(), "expected 'b', got 'c'");
}

#[test]
fn alt_merges_expected_at_same_position() {
    let tokens = lex("c");
    let p = alt(vec![text("a"), text("b")]);
    let out = parse(&p, &tokens);

    assert_eq!(out.error.unwrap().to_string(), "expected 'a' or 'b', got 'c'");
}

#[test]
fn alt_reports_sibling_error_on_success() {
    let tokens = lex("a c");
    let ab = kright(sym("a"), text("b"));
    let a = text("a");
    let p = alt(vec![ab, a]);
    let out = parse(&p, &tokens);

    assert!(out.success);
    assert_eq!(results(&out, tokens.len()), vec![("a".to_string(), 1)]);
    assert_eq!(out.error.unwrap().position, Position::At(1));
}

#[test]
fn alt_sc_stops_at_first_success() {
    let tokens = lex("a b");
    let short = text("a");
    let long = seq(vec![text("a"), text("b")]).map(|v: Vec<String>| v.concat());
    let p = alt_sc(vec![short, long]);
    let out = parse(&p, &tokens);

    assert_eq!(results(&out, tokens.len()), vec![("a".to_string(), 1)]);
}

#[test]
fn alt_sc_keeps_errors_of_earlier_branches() {
    let tokens = lex("a c");
    let p = alt_sc(vec![kright(sym("a"), text("b")), text("a")]);
    let out = parse(&p, &tokens);

    assert!(out.success);
    assert_eq!(out.error.unwrap().to_string(), "expected 'b', got 'c'");
}

#[test]
fn bitor_is_first_match() {
    let tokens = lex("b");
    let p = text("a") | text("b") | text("b");
    let out = parse(&p, &tokens);

    assert_eq!(out.candidates.len(), 1);
    assert_eq!(out.candidates[0].value, "b");
}

#[test]
fn typed_alternatives_tag_the_branch() {
    let tokens = lex("7");
    let p = alt2(word(), num());
    let out = parse(&p, &tokens);
    assert_eq!(out.candidates[0].value, Either::Right(7));
    assert_eq!(out.candidates[0].value.clone().left(), None);
    assert_eq!(out.candidates[0].value.clone().right(), Some(7));

    let p = alt3(num(), word(), text("+"));
    let out = parse(&p, &tokens);
    assert_eq!(out.candidates[0].value, Either::Left(7));
    assert_eq!(out.candidates[0].value.clone().left(), Some(7));

    let p = alt_sc2(num(), num());
    let out = parse(&p, &tokens);
    assert_eq!(out.candidates.len(), 1);
    assert!(out.candidates[0].value.is_left());
}

#[test]
fn opt_is_ambiguous() {
    let tokens = lex("1");
    let out = parse(&opt(num()), &tokens);

    assert_eq!(
        results(&out, tokens.len()),
        vec![(Some(1), 1), (None, 0)]
    );
}

#[test]
fn opt_sc_collapses_to_one_result() {
    let tokens = lex("1");
    let out = parse(&opt_sc(num()), &tokens);
    assert_eq!(results(&out, tokens.len()), vec![(Some(1), 1)]);

    let tokens = lex("x");
    let out = parse(&opt_sc(num()), &tokens);
    assert_eq!(results(&out, tokens.len()), vec![(None, 0)]);
    assert!(out.error.is_some());
}

#[test]
fn first_keeps_leading_candidate() {
    let tokens = lex("1");
    let out = parse(&first(opt(num())), &tokens);
    assert_eq!(results(&out, tokens.len()), vec![(Some(1), 1)]);
}
