use trellis::core::{Functor, Pattern};
use trellis::interpreter::{Substitution, Value, match_all, match_pattern};

fn matches(pattern: &Pattern, value: &Value) -> Option<Substitution> {
    match_pattern(pattern, value, Substitution::new())
}

fn pair(a: Pattern, b: Pattern) -> Pattern {
    Pattern::tree(Functor::atom("Pair"), vec![a, b])
}

#[test]
fn variable_binds_value() {
    let bindings = matches(&Pattern::var("x"), &Value::atom("A")).unwrap();
    assert_eq!(bindings.get("x"), Some(&Value::atom("A")));
}

#[test]
fn wildcard_binds_nothing() {
    let bindings = matches(&Pattern::Wildcard, &Value::atom("A")).unwrap();
    assert!(bindings.is_empty());
}

#[test]
fn tree_requires_same_functor() {
    let pattern = Pattern::atom("Zero");
    assert!(matches(&pattern, &Value::atom("Zero")).is_some());
    assert!(matches(&pattern, &Value::atom("One")).is_none());
}

#[test]
fn tree_requires_same_child_count() {
    let pattern = Pattern::tree(Functor::atom("F"), vec![Pattern::atom("A")]);
    let value = Value::tree("F", vec![Value::atom("A"), Value::atom("B")]);
    assert!(matches(&pattern, &value).is_none());

    let pattern = Pattern::tree(
        Functor::atom("F"),
        vec![Pattern::atom("A"), Pattern::var("rest")],
    );
    let value = Value::tree("F", vec![Value::atom("A")]);
    assert!(matches(&pattern, &value).is_none());
}

#[test]
fn equality_is_arity_safe() {
    let short = Value::tree("F", vec![Value::atom("A")]);
    let long = Value::tree("F", vec![Value::atom("A"), Value::atom("B")]);
    assert_ne!(short, long);
    assert_ne!(long, short);
}

#[test]
fn non_linear_pattern_requires_equal_values() {
    let pattern = pair(Pattern::var("x"), Pattern::var("x"));

    let same = Value::tree("Pair", vec![Value::atom("V"), Value::atom("V")]);
    let bindings = matches(&pattern, &same).unwrap();
    assert_eq!(bindings.len(), 1);
    assert_eq!(bindings.get("x"), Some(&Value::atom("V")));

    let different = Value::tree("Pair", vec![Value::atom("V"), Value::atom("W")]);
    assert!(matches(&pattern, &different).is_none());
}

#[test]
fn non_linear_pattern_compares_whole_trees() {
    let pattern = pair(Pattern::var("x"), Pattern::var("x"));
    let left = Value::tree("S", vec![Value::atom("Z")]);
    let right = Value::tree("S", vec![Value::atom("Z"), Value::atom("Z")]);
    let value = Value::tree("Pair", vec![left, right]);
    assert!(matches(&pattern, &value).is_none());
}

#[test]
fn cons_pattern_splits_list() {
    let pattern = Pattern::cons(Pattern::var("h"), Pattern::var("t"));
    let value = Value::list(vec![Value::atom("A"), Value::atom("B"), Value::atom("C")]);

    let bindings = matches(&pattern, &value).unwrap();
    assert_eq!(bindings.get("h"), Some(&Value::atom("A")));
    assert_eq!(
        bindings.get("t"),
        Some(&Value::list(vec![Value::atom("B"), Value::atom("C")]))
    );
}

#[test]
fn cons_pattern_rejects_empty_list() {
    let pattern = Pattern::cons(Pattern::var("h"), Pattern::var("t"));
    assert!(matches(&pattern, &Value::empty_list()).is_none());
}

#[test]
fn list_pattern_requires_exact_length() {
    let pattern = Pattern::list(vec![Pattern::var("a"), Pattern::var("b")]);
    let two = Value::list(vec![Value::atom("A"), Value::atom("B")]);
    let three = Value::list(vec![Value::atom("A"), Value::atom("B"), Value::atom("C")]);
    assert!(matches(&pattern, &two).is_some());
    assert!(matches(&pattern, &three).is_none());
}

#[test]
fn as_pattern_binds_whole_value_and_parts() {
    let pattern = Pattern::as_pattern(
        "all",
        Pattern::cons(Pattern::var("h"), Pattern::Wildcard),
    );
    let value = Value::string("ok");

    let bindings = matches(&pattern, &value).unwrap();
    assert_eq!(bindings.get("all"), Some(&value));
    assert_eq!(bindings.get("h"), Some(&Value::atom("o")));
}

#[test]
fn as_pattern_fails_when_inner_fails() {
    let pattern = Pattern::as_pattern("x", Pattern::atom("A"));
    assert!(matches(&pattern, &Value::atom("B")).is_none());
}

#[test]
fn match_all_requires_equal_lengths() {
    let patterns = vec![Pattern::var("x")];
    let values = vec![Value::atom("A"), Value::atom("B")];
    assert!(match_all(&patterns, &values, Substitution::new()).is_none());
    assert!(match_all(&[], &[], Substitution::new()).is_some());
}

#[test]
fn match_all_threads_one_substitution() {
    let patterns = vec![Pattern::var("x"), Pattern::var("x")];
    let same = vec![Value::atom("A"), Value::atom("A")];
    let different = vec![Value::atom("A"), Value::atom("B")];
    assert!(match_all(&patterns, &same, Substitution::new()).is_some());
    assert!(match_all(&patterns, &different, Substitution::new()).is_none());
}

#[test]
fn reserved_tags_do_not_match_atoms_of_the_same_name() {
    let pattern = Pattern::empty_list();
    assert!(matches(&pattern, &Value::atom("ListEmpty")).is_none());
    assert!(matches(&Pattern::atom("ListEmpty"), &Value::empty_list()).is_none());
}
