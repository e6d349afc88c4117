use std::{
    fs::{self},
    io::{Cursor, Write},
};

use nscharp::{
    error::{Error, RuntimeError},
    execute,
    interpreter::{evaluator::core::Context, value::Value},
    run,
};
use walkdir::WalkDir;

#[test]
fn script_fixtures_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "ns"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let input = fs::read_to_string(path.with_extension("in")).unwrap_or_default();

        let mut output = Vec::new();
        let result = run(&source, &mut Cursor::new(input), &mut output);
        let output = String::from_utf8(output).expect("output is UTF-8");

        count += 1;
        let expected_out = fs::read_to_string(path.with_extension("out")).unwrap_or_default();
        assert_eq!(output, expected_out, "stdout of {path:?}");

        match (result, fs::read_to_string(path.with_extension("err"))) {
            (Ok(()), Err(_)) => {},
            (Err(e), Ok(expected)) => assert_eq!(e.to_string(), expected.trim_end(), "{path:?}"),
            (Ok(()), Ok(expected)) => panic!("{path:?} succeeded but was expected to fail with {expected}"),
            (Err(e), Err(_)) => panic!("Script {path:?} failed: {e}"),
        }
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}

fn output_of(src: &str) -> String {
    output_with_input(src, "")
}

fn output_with_input(src: &str, input: &str) -> String {
    let mut output = Vec::new();
    if let Err(e) = run(src, &mut Cursor::new(input), &mut output) {
        panic!("Script failed: {e}");
    }
    String::from_utf8(output).expect("output is UTF-8")
}

fn failure_of(src: &str) -> Error {
    match run(src, &mut Cursor::new(""), &mut Vec::new()) {
        Ok(()) => panic!("Script succeeded but was expected to fail"),
        Err(e) => e,
    }
}

fn runtime_failure_of(src: &str) -> RuntimeError {
    match failure_of(src) {
        Error::Runtime(e) => e,
        other => panic!("Expected a runtime error, got {other:?}"),
    }
}

#[test]
fn binding_and_basic_arithmetic() {
    assert_eq!(output_of("let x = 1 + 2\nprint(x)"), "3\n");
    assert_eq!(output_of("let x = 7 * 9\nprint(x)"), "63\n");
    assert_eq!(output_of("let x = 8 - 5\nprint(x)"), "3\n");
    assert_eq!(output_of("let x = 10 / 4\nprint(x)"), "2.5\n");
    assert_eq!(output_of("print(10 / 2)"), "5.0\n");
}

#[test]
fn operator_precedence() {
    assert_eq!(output_of("print(1 + 2 * 3)"), "7\n");
    assert_eq!(output_of("print((1 + 2) * 3)"), "9\n");
    assert_eq!(output_of("print(10 - 4 - 3)"), "3\n");
    assert_eq!(output_of("print(-2 ** 2)"), "-4\n");
    assert_eq!(output_of("print(2 ** 3 ** 2)"), "512\n");
    assert_eq!(output_of("print(2 ** -1)"), "0.5\n");
    assert_eq!(output_of("print(-3 * 2)"), "-6\n");
    assert_eq!(output_of("print(1 + 2 == 3)"), "True\n");
}

#[test]
fn floor_division_and_modulo_follow_the_divisor() {
    assert_eq!(output_of("print(7 // 2)"), "3\n");
    assert_eq!(output_of("print(-7 // 2)"), "-4\n");
    assert_eq!(output_of("print(7 % 3)"), "1\n");
    assert_eq!(output_of("print(-7 % 3)"), "2\n");
    assert_eq!(output_of("print(7 % -3)"), "-2\n");
}

#[test]
fn strings_round_trip_through_variables() {
    assert_eq!(output_of("let s = \"a\"\nprint(s)"), "a\n");
    assert_eq!(output_of("let s = \"x + y\"\nprint(s)"), "x + y\n");
    assert_eq!(output_of("let a = \"ab\"\nlet b = a\nprint(b)"), "ab\n");
}

#[test]
fn string_concatenation_and_repetition() {
    assert_eq!(output_of("print(\"foo\" + \"bar\")"), "foobar\n");
    assert_eq!(output_of("print(\"ab\" * 3)"), "ababab\n");
    assert_eq!(output_of("print(2 * \"-\")"), "--\n");
    assert_eq!(output_of("print(\"ab\" * -1)"), "\n");
}

#[test]
fn rebinding_overwrites() {
    assert_eq!(output_of("let x = 1\nlet x = x + 1\nprint(x)"), "2\n");
    assert_eq!(output_of("let x = 1\nlet x = \"one\"\nprint(x)"), "one\n");
}

#[test]
fn undefined_variable_reports_its_line() {
    let err = runtime_failure_of("let a = 1\n\nprint(b)");
    assert_eq!(err,
               RuntimeError::UndefinedVariable { name: "b".to_string(),
                                                 line: 3, });
}

#[test]
fn if_else_picks_a_branch() {
    assert_eq!(output_of("if 1 == 1 {print(1)} else {print(2)}"), "1\n");
    assert_eq!(output_of("if 1 == 2 {print(1)} else {print(2)}"), "2\n");
    assert_eq!(output_of("if 0 {print(1)}\nprint(3)"), "3\n");
    assert_eq!(output_of("if \"\" {print(1)} else {print(\"empty\")}"), "empty\n");
}

#[test]
fn while_terminates_when_the_counter_is_rebound() {
    let src = "let i = 0\nwhile i < 3 {\n  print(i)\n  let i = i + 1\n}";
    assert_eq!(output_of(src), "0\n1\n2\n");
}

#[test]
fn while_without_rebinding_trips_the_loop_limit() {
    let mut input = Cursor::new("");
    let mut output = Vec::new();
    let mut context = Context::new(&mut input, &mut output).with_loop_limit(5);

    let err = execute("let i = 0\nwhile i < 3 {\n  print(i)\n}", &mut context).unwrap_err();

    assert!(matches!(err,
                     Error::Runtime(RuntimeError::LoopLimitExceeded { limit: 5, line: 2 })));
    drop(context);
    assert_eq!(output, b"0\n0\n0\n0\n0\n");
}

#[test]
fn loop_limit_allows_exactly_limit_iterations() {
    let mut input = Cursor::new("");
    let mut output = Vec::new();
    let mut context = Context::new(&mut input, &mut output).with_loop_limit(3);

    let src = "let i = 0\nwhile i < 3 {\n  let i = i + 1\n}\nprint(i)";
    execute(src, &mut context).unwrap();

    drop(context);
    assert_eq!(output, b"3\n");
}

#[test]
fn functions_are_recorded_but_never_called() {
    let mut input = Cursor::new("");
    let mut output = Vec::new();
    let mut context = Context::new(&mut input, &mut output);

    execute("fun greet() {\n  print(\"hi\")\n}", &mut context).unwrap();

    assert_eq!(context.function("greet").map(<[_]>::len), Some(1));
    assert!(context.get_variable("greet").is_none());

    let err = execute("greet", &mut context).unwrap_err();
    assert!(matches!(err,
                     Error::Runtime(RuntimeError::UndefinedVariable { line: 1, .. })));

    drop(context);
    assert!(output.is_empty());
}

#[test]
fn calling_a_function_is_a_parse_error() {
    assert!(matches!(failure_of("fun f() {}\nf()"), Error::Parse(_)));
}

#[test]
fn input_reads_from_the_injected_reader() {
    assert_eq!(output_with_input("let name = input\nprint(\"hi \" + name)", "Ada\n"),
               "hi Ada\n");
    assert_eq!(output_with_input("print(input)\nprint(input)", "one\r\ntwo"),
               "one\ntwo\n");
}

#[test]
fn input_at_end_of_stream_fails() {
    let err = runtime_failure_of("let a = input");
    assert_eq!(err, RuntimeError::EndOfInput { line: 1 });
}

#[test]
fn input_as_a_variable_in_a_larger_expression() {
    let err = runtime_failure_of("print(input + 1)");
    assert!(matches!(err, RuntimeError::UndefinedVariable { ref name, line: 1 } if name == "input"));
}

#[test]
fn output_before_a_runtime_error_is_kept() {
    let mut output = Vec::new();
    let result = run("print(1)\nprint(1 / 0)", &mut Cursor::new(""), &mut output);

    assert!(matches!(result, Err(Error::Runtime(RuntimeError::DivisionByZero { line: 2 }))));
    assert_eq!(output, b"1\n");
}

#[test]
fn division_by_zero() {
    assert_eq!(runtime_failure_of("print(1 // 0)"),
               RuntimeError::DivisionByZero { line: 1 });
    assert_eq!(runtime_failure_of("print(1 % 0)"),
               RuntimeError::DivisionByZero { line: 1 });
    assert_eq!(runtime_failure_of("let x = 0\nprint(1 / x)").line(), 2);
}

#[test]
fn overflow_is_detected() {
    assert_eq!(runtime_failure_of("print(9223372036854775807 + 1)"),
               RuntimeError::Overflow { line: 1 });
    assert_eq!(runtime_failure_of("print(2 ** 64)"),
               RuntimeError::Overflow { line: 1 });
}

#[test]
fn type_errors() {
    assert!(matches!(runtime_failure_of("print(\"a\" - 1)"),
                     RuntimeError::TypeError { line: 1, .. }));
    assert!(matches!(runtime_failure_of("print(\"a\" < 1)"),
                     RuntimeError::TypeError { line: 1, .. }));
    assert!(matches!(runtime_failure_of("print(-\"a\")"),
                     RuntimeError::TypeError { line: 1, .. }));
}

#[test]
fn comparisons() {
    assert_eq!(output_of("print(1 == 2 / 2)"), "True\n");
    assert_eq!(output_of("print(\"1\" == 1)"), "False\n");
    assert_eq!(output_of("print(\"1\" != 1)"), "True\n");
    assert_eq!(output_of("print(\"abc\" < \"abd\")"), "True\n");
    assert_eq!(output_of("print(3 >= 4)"), "False\n");
}

#[test]
fn comparisons_chain_pairwise() {
    assert_eq!(output_of("print(1 < 2 < 3)"), "True\n");
    assert_eq!(output_of("print(1 < 3 < 2)"), "False\n");
    assert_eq!(output_of("print(3 > 2 > 1 >= 1)"), "True\n");
    assert_eq!(output_of("if 1 == 1 == 1 {print(1)} else {print(2)}"), "1\n");
    // Grouping compares the first result instead: True == 1.
    assert_eq!(output_of("print((1 == 1) == 1)"), "True\n");
    assert_eq!(output_of("print(2 == 2 == 3)"), "False\n");
}

#[test]
fn comparison_chain_reads_each_operand_once_and_stops_early() {
    assert_eq!(output_with_input("let a = input\nprint(\"a\" < a < \"c\")", "b\n"),
               "True\n");

    // The failing first pair means the undefined name is never looked up.
    assert_eq!(output_of("print(2 < 1 < missing)"), "False\n");
    assert!(matches!(runtime_failure_of("print(1 < 2 < missing)"),
                     RuntimeError::UndefinedVariable { line: 1, .. }));
}

#[test]
fn booleans_print_capitalized() {
    assert_eq!(output_of("print(1 < 2)"), "True\n");
    assert_eq!(output_of("print(1 > 2)"), "False\n");
    assert_eq!(output_of("print((1 < 2) + 1)"), "2\n");
}

#[test]
fn reals_print_like_the_shortest_round_trip() {
    assert_eq!(output_of("print(1 / 4)"), "0.25\n");
    assert_eq!(output_of("print(10 ** 15 / 1)"), "1000000000000000.0\n");
    assert_eq!(output_of("print(10 ** 16 / 1)"), "1e+16\n");
    assert_eq!(output_of("print(3 * 10 ** 18 / 2 * 100)"), "1.5e+20\n");
    assert_eq!(output_of("print(1 / 10000)"), "0.0001\n");
    assert_eq!(output_of("print(1 / 100000)"), "1e-05\n");
    assert_eq!(output_of("print(-1 / 400000000)"), "-2.5e-09\n");
}

#[test]
fn large_integers_promote_to_reals() {
    assert_eq!(output_of("print(9007199254740993 / 1)"), "9007199254740992.0\n");
    assert_eq!(output_of("print(2 ** 62 * (1 / 2))"), "2.305843009213694e+18\n");
    assert_eq!(output_of("print(2 ** 60 == 2 ** 60 / 1)"), "True\n");
}

#[test]
fn huge_string_repetition_is_an_error() {
    assert_eq!(runtime_failure_of("print(\"ab\" * 4611686018427387904)"),
               RuntimeError::Overflow { line: 1 });
    assert_eq!(runtime_failure_of("let s = \"abc\"\nprint(s * 9223372036854775807)"),
               RuntimeError::Overflow { line: 2 });
    assert_eq!(output_of("print(\"\" * 9223372036854775807)"), "\n");
}

/// Accepts writes but fails every flush.
struct UnflushableWriter(Vec<u8>);

impl Write for UnflushableWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Err(std::io::Error::other("device full"))
    }
}

#[test]
fn failing_final_flush_is_reported() {
    let mut output = UnflushableWriter(Vec::new());
    let err = run("print(1)\nprint(2)", &mut Cursor::new(""), &mut output).unwrap_err();

    assert!(matches!(err, Error::Runtime(RuntimeError::Io { line: 2, .. })));
    assert_eq!(output.0, b"1\n2\n");
}

#[test]
fn runtime_error_wins_over_a_failing_flush() {
    let mut output = UnflushableWriter(Vec::new());
    let err = run("print(1 // 0)", &mut Cursor::new(""), &mut output).unwrap_err();

    assert!(matches!(err, Error::Runtime(RuntimeError::DivisionByZero { line: 1 })));
}

#[test]
fn context_keeps_state_between_runs() {
    let mut input = Cursor::new("");
    let mut output = Vec::new();
    let mut context = Context::new(&mut input, &mut output);

    execute("let x = 20", &mut context).unwrap();
    execute("let x = x + 22", &mut context).unwrap();

    assert_eq!(context.get_variable("x"), Some(&Value::Integer(42)));
}
