//! Pattern matching against evaluated values
//!
//! A match threads one [`Substitution`] through the whole pattern (or
//! pattern tuple), so a variable that occurs twice must meet structurally
//! equal values both times. Every positional pairing compares lengths first:
//! `F(x)` never matches `F(A, B)`, and `(x, y)` never matches one value.

use tracing::trace;

use crate::core::Pattern;

use super::scope::Substitution;
use super::value::Value;

/// Match a pattern tuple against a value tuple, pairwise and left to right.
pub fn match_all(
    patterns: &[Pattern],
    values: &[Value],
    mut subst: Substitution,
) -> Option<Substitution> {
    if patterns.len() != values.len() {
        return None;
    }

    for (pattern, value) in patterns.iter().zip(values) {
        subst = match_pattern(pattern, value, subst)?;
    }

    Some(subst)
}

/// Match a single pattern, extending `subst` on success.
pub fn match_pattern(pattern: &Pattern, value: &Value, subst: Substitution) -> Option<Substitution> {
    match pattern {
        Pattern::Tree(tree) => {
            if tree.functor != *value.functor() {
                return None;
            }
            match_all(&tree.children, value.children(), subst)
        }
        Pattern::Var(name) => bind(name, value, subst),
        Pattern::Wildcard => Some(subst),
        Pattern::As(as_pattern) => {
            let subst = match_pattern(&as_pattern.pattern, value, subst)?;
            bind(&as_pattern.name, value, subst)
        }
    }
}

fn bind(name: &str, value: &Value, mut subst: Substitution) -> Option<Substitution> {
    if let Some(existing) = subst.get(name) {
        let consistent = existing == value;
        if !consistent {
            trace!(name, "non-linear variable bound to different values");
        }
        return consistent.then_some(subst);
    }

    subst.insert(name.to_string(), value.clone());
    Some(subst)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Functor;

    fn pair(a: Pattern, b: Pattern) -> Pattern {
        Pattern::tree(Functor::atom("Pair"), vec![a, b])
    }

    #[test]
    fn as_pattern_name_takes_part_in_non_linearity() {
        // x@A with x already bound to B fails
        let pattern = pair(Pattern::var("x"), Pattern::as_pattern("x", Pattern::atom("A")));
        let same = Value::tree("Pair", vec![Value::atom("A"), Value::atom("A")]);
        let different = Value::tree("Pair", vec![Value::atom("B"), Value::atom("A")]);

        assert!(match_pattern(&pattern, &same, Substitution::new()).is_some());
        assert!(match_pattern(&pattern, &different, Substitution::new()).is_none());
    }

    #[test]
    fn tuple_length_mismatch_fails() {
        let patterns = [Pattern::var("x")];
        let values = [Value::atom("A"), Value::atom("B")];
        assert!(match_all(&patterns, &values, Substitution::new()).is_none());
    }
}
