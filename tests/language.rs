use std::fs;

use arsharp::{
    get_output,
    interpreter::{
        context::{Context, Namespace},
        evaluator::evaluate,
        value::Value,
    },
    Interpreter,
};
use walkdir::WalkDir;

fn output_of(source: &str) -> String {
    get_output(source).unwrap_or_else(|e| panic!("Script failed to produce output: {e}"))
}

fn run(source: &str) -> Interpreter {
    let mut interpreter = Interpreter::new(source);
    let mut sink = Vec::new();
    interpreter.execute_to(&mut sink)
               .unwrap_or_else(|e| panic!("Script failed: {e}"));
    interpreter
}

#[test]
fn numeric_literals() {
    let context = Context::new();
    assert_eq!(evaluate("42", &context), Value::Number(42.0));
    assert_eq!(evaluate("-3.5", &context), Value::Number(-3.5));
    assert_eq!(evaluate(" 7 ", &context), Value::Number(7.0));
    assert_eq!(evaluate("0", &context), Value::Number(0.0));
}

#[test]
fn variable_declaration_and_overwrite() {
    let interpreter = run("var{x}=5");
    assert_eq!(evaluate("var{x}", interpreter.context()), Value::Number(5.0));

    let interpreter = run("var{x}=5\nvar{x}=7");
    assert_eq!(evaluate("var{x}", interpreter.context()), Value::Number(7.0));
}

#[test]
fn constants_are_not_actually_immutable() {
    // The `const` keyword does not enforce anything; re-declaration
    // overwrites, exactly like a variable. Intended behavior, not a bug.
    let interpreter = run("const{pi}=3");
    assert_eq!(evaluate("const{pi}", interpreter.context()), Value::Number(3.0));

    let interpreter = run("const{pi}=3\nconst{pi}=4");
    assert_eq!(evaluate("const{pi}", interpreter.context()), Value::Number(4.0));
}

#[test]
fn grand_value_declaration() {
    let interpreter = run("g[score]=10");
    assert_eq!(evaluate("g[score]", interpreter.context()), Value::Number(10.0));
}

#[test]
fn namespaces_have_independent_keyspaces() {
    let interpreter = run("var{x}=1\nconst{x}=3\ng[x]=2");
    let context = interpreter.context();
    assert_eq!(evaluate("var{x}", context), Value::Number(1.0));
    assert_eq!(evaluate("const{x}", context), Value::Number(3.0));
    assert_eq!(evaluate("g[x]", context), Value::Number(2.0));
}

#[test]
fn binary_operators() {
    let context = Context::new();
    assert_eq!(evaluate("2+3", &context), Value::Number(5.0));
    assert_eq!(evaluate("10-4", &context), Value::Number(6.0));
    assert_eq!(evaluate("6*7", &context), Value::Number(42.0));
    assert_eq!(evaluate("8/2", &context), Value::Number(4.0));
    assert_eq!(evaluate("9%4", &context), Value::Number(1.0));
}

#[test]
fn operator_chains_split_on_the_first_occurrence() {
    // `2+3+4` splits into `2` and `3+4`; the remainder recurses, so chains
    // associate to the right rather than the left.
    let context = Context::new();
    assert_eq!(evaluate("2+3+4", &context), Value::Number(9.0));
    assert_eq!(evaluate("10-4-2", &context), Value::Number(8.0));
}

#[test]
fn double_star_is_intercepted_by_multiplication() {
    // The single-star rule runs first and matches the first star of the
    // `**` pair: `2**3` splits into `2` and `*3`, `*3` splits into the empty
    // string and `3`, and empty text coerces to zero. The result is
    // 2 * (0 * 3) = 0, never exponentiation. Preserved on purpose.
    let context = Context::new();
    assert_eq!(evaluate("2**3", &context), Value::Number(0.0));
}

#[test]
fn division_by_zero_stays_in_band() {
    let context = Context::new();
    match evaluate("8/0", &context) {
        Value::Number(n) => assert!(n.is_infinite() && n.is_sign_positive()),
        other => panic!("expected a number, got {other:?}"),
    }
}

#[test]
fn remainder_by_zero_stays_in_band() {
    let context = Context::new();
    match evaluate("9%0", &context) {
        Value::Number(n) => assert!(n.is_nan()),
        other => panic!("expected a number, got {other:?}"),
    }
}

#[test]
fn undeclared_name_returns_literal_text() {
    let context = Context::new();
    assert_eq!(evaluate("var{unknown}", &context), Value::from("var{unknown}"));
}

#[test]
fn declaration_without_initializer_is_absent() {
    let interpreter = run("var{answer}");
    // The entry exists but holds no value, so a lookup falls through to the
    // literal-text fallback exactly like an undeclared name.
    assert_eq!(evaluate("var{answer}", interpreter.context()),
               Value::from("var{answer}"));
}

#[test]
fn failed_lookup_creates_no_entry() {
    let interpreter = run("cout::1+1 ::endl");
    let context = interpreter.context();
    assert_eq!(evaluate("var{ghost}", context), Value::from("var{ghost}"));
    assert!(context.lookup(Namespace::Variable, "ghost").is_none());
}

#[test]
fn print_statement_extracts_by_fixed_offsets() {
    // `cout::` drops 6 characters from the front and 7 from the back, one
    // more than `::endl` is long, so the payload loses its last character:
    // the closing quote here.
    assert_eq!(output_of("cout::\"hello\"::endl"), "\"hello\n");
    assert_eq!(output_of("cout::6*7 ::endl"), "42\n");
}

#[test]
fn integral_numbers_print_without_a_fraction() {
    assert_eq!(output_of("cout::8/2 ::endl"), "4\n");
    assert_eq!(output_of("cout::10/4 ::endl"), "2.5\n");
}

#[test]
fn comments_are_stripped_before_any_check() {
    let interpreter = run("var{x}=5 // five");
    assert_eq!(evaluate("var{x}", interpreter.context()), Value::Number(5.0));

    assert_eq!(output_of("cout::1+2 ::endl// noise"), "3\n");
}

#[test]
fn s_semicolon_anywhere_skips_the_whole_line() {
    // The check is literal substring containment, so it also fires on lines
    // that would otherwise be valid statements.
    assert_eq!(output_of("cout::\"it's;fine\" ::endl"), "");
    assert_eq!(output_of("cout::\"it's;fine\" ::endl\ncout::2+2 ::endl"), "4\n");
}

#[test]
fn declaration_markers_outrank_the_print_statement() {
    // `var{` anywhere in the line wins, so this "print" is handled as a
    // variable declaration and prints nothing.
    assert_eq!(output_of("cout::var{x} ::endl"), "");

    let interpreter = run("cout::var{x} ::endl");
    assert_eq!(evaluate("var{x}", interpreter.context()), Value::from("var{x}"));
}

#[test]
fn unrecognized_lines_are_silently_ignored() {
    assert_eq!(output_of("this is not a statement\n\ncout::5-3 ::endl"), "2\n");
}

#[test]
fn demo_scripts_run() {
    let mut count = 0;

    for entry in
        WalkDir::new("demos").into_iter()
                             .filter_map(Result::ok)
                             .filter(|e| e.path().extension().is_some_and(|ext| ext == "ars"))
    {
        count += 1;
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        if let Err(e) = get_output(&source) {
            panic!("Demo script {path:?} failed: {e}");
        }
    }

    assert!(count > 0, "No demo scripts found in demos/");
}

#[test]
fn demo_script_outputs() {
    let hello = fs::read_to_string("demos/hello.ars").expect("missing file");
    assert_eq!(output_of(&hello), "\"hello, world\"\n");

    let arithmetic = fs::read_to_string("demos/arithmetic.ars").expect("missing file");
    assert_eq!(output_of(&arithmetic), "78\n97.5\n1\n9\n");

    let quirks = fs::read_to_string("demos/quirks.ars").expect("missing file");
    assert_eq!(output_of(&quirks), "0\ninf\n");

    let storage = fs::read_to_string("demos/storage.ars").expect("missing file");
    assert_eq!(output_of(&storage), "2\n");
}
