//! End-to-end tests: source text in, rendered output out

use trellis::check::check_program;
use trellis::desugar::desugar_program;
use trellis::interpreter::Interpreter;
use trellis::parser::parse_source;

/// Parse, lower, check and run a program, returning what it wrote
fn run_program(input: &str) -> String {
    let program = parse_source(input).unwrap_or_else(|err| panic!("parsing failed: {err}"));
    let program = desugar_program(program);
    check_program(&program).unwrap_or_else(|err| panic!("check failed: {err}"));

    let mut interpreter = Interpreter::new(Vec::new());
    interpreter
        .run(program)
        .unwrap_or_else(|err| panic!("evaluation failed: {err}"));
    String::from_utf8(interpreter.into_output()).expect("output is utf-8")
}

/// Parse and lower a program, returning the pretty-printed canonical form
fn emit_core(input: &str) -> String {
    let program = parse_source(input).unwrap_or_else(|err| panic!("parsing failed: {err}"));
    desugar_program(program).to_string()
}

#[test]
fn e2e_hello_world() {
    let output = run_program(r#"display("Hello, world!");"#);
    insta::assert_snapshot!(output, @"Hello, world!");
}

#[test]
fn e2e_peano_arithmetic() {
    let output = run_program(
        r#"
        // Peano naturals
        fn add(Zero, n) = n;
        fn add(Suc(m), n) = Suc(add(m, n));

        fn mul(Zero, _) = Zero;
        fn mul(Suc(m), n) = add(n, mul(m, n));

        let two = Suc(Suc(Zero));
        let three = Suc(two);
        print(add(two, three));
        print(mul(two, three));
        "#,
    );
    insta::assert_snapshot!(output, @r"
    Suc(Suc(Suc(Suc(Suc(Zero)))))
    Suc(Suc(Suc(Suc(Suc(Suc(Zero))))))
    ");
}

#[test]
fn e2e_list_processing() {
    let output = run_program(
        r#"
        fn map_pair([]) = [];
        fn map_pair(h : t) = Pair(h, h) : map_pair(t);

        fn length([]) = Zero;
        fn length(_ : t) = Suc(length(t));

        print(map_pair([A, B]));
        print(length("abc"));
        "#,
    );
    insta::assert_snapshot!(output, @r"
    [Pair(A, A), Pair(B, B)]
    Suc(Suc(Suc(Zero)))
    ");
}

#[test]
fn e2e_match_with_multiple_scrutinees() {
    let output = run_program(
        r#"
        fn both(a, b) = match a, b {
            True, True => True,
            _, _ => False,
        };

        print(both(True, True), both(True, False));
        "#,
    );
    insta::assert_snapshot!(output, @r"
    True
    False
    ");
}

#[test]
fn e2e_display_mixed_arguments() {
    let output = run_program(
        r#"
        let name = "trellis";
        display("name:", name, Version(1, 0), ['x', "y"]);
        "#,
    );
    insta::assert_snapshot!(output, @r#"name: trellis Version(1, 0) ['x', "y"]"#);
}

#[test]
fn e2e_as_pattern_keeps_whole_value() {
    let output = run_program(
        r#"
        fn dup(all@(h : _)) = Pair(h, all);
        print(dup([A, B]));
        "#,
    );
    insta::assert_snapshot!(output, @"Pair(A, [A, B])");
}

#[test]
fn emit_core_merges_clauses_and_folds_lists() {
    let output = emit_core(
        r#"
        fn f(Zero) = A;
        let h : t = [1, 2, 3];
        fn f(Suc(n)) = "ok";
        f(h);
        "#,
    );
    insta::assert_snapshot!(output, @r"
    fn f
      (Zero) = A;
      (Suc(n)) = ['o', 'k'];
    let h : t = [1, 2, 3];
    f(h);
    ");
}

#[test]
fn emit_core_match_and_as_patterns() {
    let output = emit_core(
        r#"
        fn first(xs@(x : _)) = match x { 'a b' => Quoted, _ => xs };
        "#,
    );
    insta::assert_snapshot!(output, @r"
    fn first
      (xs@(x : _)) = match x {
        'a b' => Quoted,
        _ => xs
      };
    ");
}
