//! Lists and strings end to end: sugar, matching and rendering

use trellis::check::check_program;
use trellis::desugar::desugar_program;
use trellis::fmt::{display, print};
use trellis::interpreter::{Interpreter, Value};
use trellis::parser::parse_source;

fn run(source: &str) -> String {
    let program = desugar_program(parse_source(source).expect("parsing failed"));
    check_program(&program).expect("check failed");
    let mut interpreter = Interpreter::new(Vec::new());
    interpreter.run(program).expect("evaluation failed");
    String::from_utf8(interpreter.into_output()).expect("output is utf-8")
}

#[test]
fn display_reproduces_string_literal() {
    assert_eq!(run(r#"display("hello, world");"#), "hello, world\n");
}

#[test]
fn display_of_empty_list_is_empty_line() {
    assert_eq!(run("display([]);"), "\n");
    assert_eq!(run(r#"display("");"#), "\n");
}

#[test]
fn print_of_empty_list() {
    assert_eq!(run("print([]);"), "[]\n");
}

#[test]
fn list_of_words_displays_quoted() {
    assert_eq!(run(r#"display(["ab", "cd"]);"#), "[\"ab\", \"cd\"]\n");
}

#[test]
fn improper_cons_renders_with_colon() {
    assert_eq!(run("print(A : B);"), "A : B\n");
    assert_eq!(run("print(A : B : C);"), "A : B : C\n");
}

#[test]
fn append_strings() {
    let output = run(r#"
        fn append([], ys) = ys;
        fn append(h : t, ys) = h : append(t, ys);
        display(append("ab", "cd"));
    "#);
    assert_eq!(output, "abcd\n");
}

#[test]
fn reverse_with_accumulator() {
    let output = run(r#"
        fn reverse([], acc) = acc;
        fn reverse(h : t, acc) = reverse(t, h : acc);
        print(reverse([1, 2, 3], []));
        display(reverse("stressed", []));
    "#);
    assert_eq!(output, "[3, 2, 1]\ndesserts\n");
}

#[test]
fn string_patterns_match_string_values() {
    let output = run(r#"
        fn greet("hi") = Hello;
        fn greet(_) = Unknown;
        print(greet("hi"), greet("ho"));
    "#);
    assert_eq!(output, "Hello\nUnknown\n");
}

#[test]
fn atoms_render_bare_or_quoted() {
    let value = Value::list(vec![
        Value::atom("Upper"),
        Value::atom("7"),
        Value::atom("lower"),
        Value::atom("two words"),
    ]);
    assert_eq!(print(&value), "[Upper, 7, 'lower', 'two words']");
}

#[test]
fn control_characters_are_escaped_everywhere() {
    let value = Value::atom("a\tb\tc\n");
    assert_eq!(print(&value), "'a\\tb\\tc\\n'");
}

#[test]
fn single_character_list_with_control_character() {
    let value = Value::string("a\nb");
    assert_eq!(display(&value), "a\nb");
    assert_eq!(print(&value), "['a', '\\n', 'b']");
}

#[test]
fn mixed_list_is_not_a_string() {
    let value = Value::list(vec![Value::atom("a"), Value::atom("Bc")]);
    assert_eq!(display(&value), "['a', Bc]");
}

#[test]
fn quotes_inside_rendered_literals_are_escaped() {
    let output = run(r#"display('it\'s', Wrap("a\"b"), "a\"b");"#);
    assert_eq!(output, "'it\\'s' Wrap(\"a\\\"b\") a\"b\n");
    assert_eq!(run(r#"print('it\'s');"#), "'it\\'s'\n");
}
