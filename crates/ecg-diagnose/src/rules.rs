//! Ordered rule cascades.
//!
//! An evaluator is a fixed list of rules over an input snapshot. Rules are
//! tried in order and the first whose predicate holds produces the outcome.

/// One `(predicate, outcome)` pair of a cascade.
pub struct Rule<I, O> {
    /// Name reported in trace logs.
    pub name: &'static str,
    pub when: fn(&I) -> bool,
    pub then: fn(&I) -> O,
}

/// Outcome of the first matching rule, or `None` if no rule matches.
pub fn first_match<I, O>(rules: &[Rule<I, O>], input: &I) -> Option<O> {
    let rule = rules.iter().find(|rule| (rule.when)(input))?;
    tracing::trace!(rule = rule.name, "Rule matched");
    Some((rule.then)(input))
}
