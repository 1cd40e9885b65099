mod common;

use common::{init_logger, lex, num, results, sym};
use tokparsec::parser::{Tracer, kright, parse, rep_sc, trace};

#[test]
fn trace_does_not_change_results() {
    init_logger();
    let tracer = Tracer::enabled();
    let item = trace("item", kright(sym(","), num()), &tracer);
    let p = trace("items", rep_sc(item), &tracer);

    let tokens = lex(", 1 , 2");
    let out = parse(&p, &tokens);

    assert_eq!(results(&out, tokens.len()), vec![(vec![1, 2], 4)]);
    assert_eq!(tracer.depth(), 0);
}

#[test]
fn tracers_are_independent() {
    let quiet = Tracer::new();
    let loud = Tracer::new();

    loud.with(|| {
        assert!(loud.is_enabled());
        assert!(!quiet.is_enabled());
    });
    assert!(!loud.is_enabled());
}

#[test]
fn depth_tracks_nesting() {
    let tracer = Tracer::new();
    let observer = tracer.clone();
    let inner = trace(
        "inner",
        num().map(move |n| (n, observer.depth())),
        &tracer,
    );
    let outer = trace("outer", inner, &tracer);

    let tokens = lex("1");
    let out = parse(&outer, &tokens);
    assert_eq!(out.candidates[0].value, (1, 2));
    assert_eq!(tracer.depth(), 0);
}
