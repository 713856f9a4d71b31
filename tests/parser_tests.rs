use trellis::ast::Program;
use trellis::ast::item::Item;
use trellis::ast::pattern::Pattern;
use trellis::ast::term::Term;
use trellis::lexer::lex;
use trellis::parser::{ParseError, ParseState, parse};

fn parse_program(input: &str) -> Program {
    let tokens = lex(input).expect("lexing failed");
    let mut state = ParseState::new(tokens);
    let (program, errors) = parse(&mut state);
    if !errors.is_empty() {
        panic!("parsing failed: {}", errors[0]);
    }
    program.expect("parsing failed: no program")
}

fn parse_errors(input: &str) -> Vec<ParseError> {
    let tokens = lex(input).expect("lexing failed");
    let mut state = ParseState::new(tokens);
    let (program, errors) = parse(&mut state);
    assert!(program.is_none(), "expected parsing to fail");
    errors
}

fn single_expression(input: &str) -> Term {
    let program = parse_program(input);
    assert_eq!(program.items.len(), 1);
    match program.items.into_iter().next() {
        Some(Item::Expression(term)) => term,
        other => panic!("expected expression item, got {other:?}"),
    }
}

#[test]
fn parse_empty_program() {
    let program = parse_program("");
    assert!(program.items.is_empty());
}

#[test]
fn parse_function_clause() {
    let program = parse_program("fn f(Suc(n), _) = n;");
    assert_eq!(program.items.len(), 1);

    let Item::Function(clause) = &program.items[0] else {
        panic!("expected function clause");
    };
    assert_eq!(clause.name.value, "f");
    assert_eq!(clause.patterns.len(), 2);

    let Pattern::Tree(tree) = &clause.patterns[0] else {
        panic!("expected tree pattern");
    };
    assert_eq!(tree.functor.value, "Suc");
    assert!(matches!(&tree.children[0], Pattern::Var(v) if v.value == "n"));
    assert!(matches!(clause.patterns[1], Pattern::Wildcard(_)));
    assert!(matches!(&clause.body, Term::Var(v) if v.value == "n"));
}

#[test]
fn parse_nullary_function_clauses() {
    let program = parse_program("fn main = A; fn other() = B;");
    assert_eq!(program.items.len(), 2);
    for item in &program.items {
        let Item::Function(clause) = item else {
            panic!("expected function clause");
        };
        assert!(clause.patterns.is_empty());
    }
}

#[test]
fn parse_binding() {
    let program = parse_program("let h : t = [A, B];");
    let Item::Binding(binding) = &program.items[0] else {
        panic!("expected binding");
    };
    assert!(matches!(binding.pattern, Pattern::Cons(_)));
    assert!(matches!(&binding.value, Term::List(l) if l.elements.len() == 2));
}

#[test]
fn parse_application_and_variable() {
    let term = single_expression("f(x, Zero);");
    let Term::App(app) = term else {
        panic!("expected application");
    };
    assert_eq!(app.operation.value, "f");
    assert!(matches!(&app.args[0], Term::Var(v) if v.value == "x"));
    assert!(matches!(&app.args[1], Term::Tree(t) if t.functor.value == "Zero"));
}

#[test]
fn empty_call_is_application() {
    let term = single_expression("f();");
    assert!(matches!(term, Term::App(app) if app.args.is_empty()));
}

#[test]
fn bare_identifier_is_variable() {
    let term = single_expression("f;");
    assert!(matches!(term, Term::Var(v) if v.value == "f"));
}

#[test]
fn cons_is_right_associative() {
    let term = single_expression("A : B : C;");
    let Term::Cons(outer) = term else {
        panic!("expected cons");
    };
    assert!(matches!(*outer.head, Term::Tree(ref t) if t.functor.value == "A"));
    assert!(matches!(*outer.tail, Term::Cons(_)));
}

#[test]
fn parenthesised_cons_head() {
    let term = single_expression("(A : B) : C;");
    let Term::Cons(outer) = term else {
        panic!("expected cons");
    };
    assert!(matches!(*outer.head, Term::Cons(_)));
    assert!(matches!(*outer.tail, Term::Tree(_)));
}

#[test]
fn parse_quoted_atom_and_string() {
    let term = single_expression(r#"Pair('it\'s here', "say \"hi\"");"#);
    let Term::Tree(tree) = term else {
        panic!("expected tree");
    };
    assert!(matches!(&tree.children[0], Term::Tree(t) if t.functor.value == "it's here"));
    assert!(matches!(&tree.children[1], Term::String(s) if s.value == "say \"hi\""));
}

#[test]
fn parse_match_term() {
    let term = single_expression("match x, y { A, _ => T, v@B(_), [] => F, };");
    let Term::Match(m) = term else {
        panic!("expected match");
    };
    assert_eq!(m.scrutinees.len(), 2);
    assert_eq!(m.clauses.len(), 2);
    assert!(matches!(m.clauses[1].patterns[0], Pattern::As(_)));
    assert!(matches!(&m.clauses[1].patterns[1], Pattern::List(l) if l.elements.is_empty()));
}

#[test]
fn parse_match_without_clauses() {
    let term = single_expression("match X {};");
    assert!(matches!(term, Term::Match(m) if m.clauses.is_empty()));
}

#[test]
fn as_pattern_covers_cons() {
    let program = parse_program("fn f(all@h : t) = all;");
    let Item::Function(clause) = &program.items[0] else {
        panic!("expected function clause");
    };
    let Pattern::As(as_pattern) = &clause.patterns[0] else {
        panic!("expected as-pattern");
    };
    assert_eq!(as_pattern.name.value, "all");
    assert!(matches!(*as_pattern.pattern, Pattern::Cons(_)));
}

#[test]
fn trailing_commas_are_accepted() {
    let term = single_expression("F(A, [B, C,],);");
    assert!(matches!(term, Term::Tree(t) if t.children.len() == 2));
}

#[test]
fn missing_semicolon_is_an_error() {
    let errors = parse_errors("A");
    assert_eq!(errors.len(), 1);
    assert!(errors[0].expected.contains(&"';'".to_string()));
}

#[test]
fn keyword_is_not_a_function_name() {
    let errors = parse_errors("fn let(x) = x;");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].expected, vec!["function name".to_string()]);
    assert_eq!(errors[0].found.as_deref(), Some("'let'"));
}

#[test]
fn recovers_at_next_item() {
    let errors = parse_errors("fn f(x = x; A; fn g( = B; C;");
    assert_eq!(errors.len(), 2);
}

#[test]
fn error_reports_position() {
    let errors = parse_errors("F(A B);");
    let err = &errors[0];
    assert!(err.position.is_some());
    assert_eq!(err.found.as_deref(), Some("atom 'B'"));
    assert!(err.expected.contains(&"')'".to_string()));
}
