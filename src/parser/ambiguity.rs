use super::combinators::{BoxedParser, Parser, Value};
use super::outcome::{Candidate, Outcome};
use super::state::Token;

/// Ambiguity merging: groups `p`'s candidates by where they stopped and
/// returns one candidate per residual, holding every value that reached it.
///
/// Groups keep the order in which their first candidate appeared, and values
/// inside a group keep `p`'s candidate order. Equal values are not deduplicated.
pub fn amb<T: Token, R: Value>(p: BoxedParser<T, R>) -> BoxedParser<T, Vec<R>> {
    BoxedParser::new(move |input| {
        let out = p.parse(input);
        if !out.success {
            return out.into_failure();
        }

        let mut groups: Vec<Candidate<'_, T, Vec<R>>> = Vec::new();
        for c in out.candidates {
            match groups.iter_mut().find(|g| g.rest.same_residual(&c.rest)) {
                Some(group) => group.value.push(c.value),
                None => groups.push(Candidate::new(vec![c.value], c.rest)),
            }
        }
        Outcome::success_with(groups, out.error)
    })
}
