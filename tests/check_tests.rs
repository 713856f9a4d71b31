use trellis::check::{CheckError, check_program};
use trellis::desugar::desugar_program;
use trellis::parser::parse_source;

/// Helper to parse, lower and check a program
fn check(input: &str) -> Result<(), CheckError> {
    let program = parse_source(input).expect("parsing failed");
    check_program(&desugar_program(program))
}

#[test]
fn valid_program_passes() {
    let input = r#"
        fn add(Zero, n) = n;
        fn add(Suc(m), n) = Suc(add(m, n));
        let two = add(Suc(Zero), Suc(Zero));
        print(two);
    "#;
    assert_eq!(check(input), Ok(()));
}

#[test]
fn unbound_variable() {
    let result = check("display(x);");
    assert_eq!(result, Err(CheckError::unbound_variable("x")));
}

#[test]
fn unbound_operation() {
    let result = check("g(A);");
    assert_eq!(result, Err(CheckError::unbound_operation("g")));
}

#[test]
fn arity_mismatch_between_clauses() {
    let result = check("fn f(x) = x; fn f(x, y) = y;");
    assert_eq!(result, Err(CheckError::arity_mismatch("f", 1, 2)));
}

#[test]
fn arity_mismatch_in_match() {
    let result = check("match A, B { x => x };");
    assert_eq!(result, Err(CheckError::arity_mismatch("match", 2, 1)));
}

#[test]
fn arity_mismatch_message() {
    let err = check("fn f(x) = x; fn f() = A;").unwrap_err();
    assert_eq!(
        err.to_string(),
        "arity mismatch in 'f': expected 1 patterns, found 0"
    );
}

#[test]
fn functions_may_be_referenced_before_definition() {
    let input = r#"
        display(later(A));
        fn later(x) = x;
    "#;
    assert_eq!(check(input), Ok(()));
}

#[test]
fn bindings_are_sequential() {
    let input = r#"
        display(y);
        let y = A;
    "#;
    assert_eq!(check(input), Err(CheckError::unbound_variable("y")));
}

#[test]
fn binding_cannot_see_its_own_variables() {
    let result = check("let x = x;");
    assert_eq!(result, Err(CheckError::unbound_variable("x")));
}

#[test]
fn clause_variables_stay_local() {
    let input = r#"
        fn f(x) = x;
        display(x);
    "#;
    assert_eq!(check(input), Err(CheckError::unbound_variable("x")));
}

#[test]
fn as_pattern_binds_both_names() {
    let input = "fn f(all@(h : t)) = Pair(all, h, t);";
    assert_eq!(check(input), Ok(()));
}

#[test]
fn wildcard_binds_nothing() {
    let input = "fn f(_) = _x;";
    assert_eq!(check(input), Err(CheckError::unbound_variable("_x")));
}

#[test]
fn match_clause_variables_are_visible_in_body() {
    let input = "match [A, B] { h : t => Pair(h, t), [] => Empty };";
    assert_eq!(check(input), Ok(()));
}

#[test]
fn nullary_function_name_is_bound() {
    let input = r#"
        fn answer = Yes;
        display(answer);
        display(answer());
    "#;
    assert_eq!(check(input), Ok(()));
}

#[test]
fn first_violation_wins() {
    let input = r#"
        display(a);
        display(b);
    "#;
    assert_eq!(check(input), Err(CheckError::unbound_variable("a")));
}

#[test]
fn function_body_sees_only_bindings_before_it() {
    assert_eq!(
        check("fn f() = x; let x = A;"),
        Err(CheckError::unbound_variable("x"))
    );
    assert_eq!(check("let x = A; fn f() = x;"), Ok(()));
}

#[test]
fn bare_name_of_function_with_parameters_passes_the_check() {
    assert_eq!(check("fn f(x) = x; display(f);"), Ok(()));
}
