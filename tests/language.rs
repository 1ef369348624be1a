use matlang::{Error, Expected, Session, SyntaxError, ValueError, get_results};
use pretty_assertions::assert_eq;

/// Runs `src` and returns the printed value of its last statement.
fn last_value(src: &str) -> String {
    match get_results(src) {
        Ok(results) => results.last()
                              .map(ToString::to_string)
                              .unwrap_or_else(|| panic!("Script produced no value: {src}")),
        Err(e) => panic!("Script failed: {e}\n{src}"),
    }
}

fn assert_prints(src: &str, expected: &str) {
    assert_eq!(last_value(src), expected, "script: {src}");
}

fn assert_syntax_error(src: &str, position: usize, expected: Expected) {
    assert_eq!(get_results(src),
               Err(Error::Syntax(SyntaxError { position, expected })),
               "script: {src}");
}

fn assert_value_error(src: &str, error: &ValueError) {
    assert_eq!(get_results(src), Err(Error::Value(error.clone())), "script: {src}");
}

#[test]
fn scalar_arithmetic() {
    assert_prints("x = 3; y = 4.5; z = x + y; z;", "7.5");
    assert_prints("x = 3; y = 4.5; z = x - y; z;", "-1.5");
    assert_prints("x = 3; y = 4.5; z = x * y; z;", "13.5");
    assert_prints("x = 0.25; y = 8; z = x * y - y; z;", "-6");
}

#[test]
fn elementwise_addition_and_subtraction() {
    assert_prints("a = [1, 2, 3]; b = [10, 20, 30]; c = a + b;", "[11, 22, 33]");
    assert_prints("a = [1, 2, 3]; b = [10, 20, 30]; c = b - a;", "[9, 18, 27]");
    assert_prints("a = [[1, 2], 3]; c = a + [[10, 10], 1];", "[[11, 12], 4]");
}

#[test]
fn elementwise_shape_mismatch_is_error() {
    assert_value_error("a = [1, 2] + [1, 2, 3];", &ValueError::SizeMismatch);
    assert_value_error("a = [1, 2] - [1];", &ValueError::SizeMismatch);
    assert_value_error("a = [1, 2] + 1;", &ValueError::SizeMismatch);
    assert_value_error("a = [[1, 2], 3] + [[1], 3];", &ValueError::SizeMismatch);
}

#[test]
fn scalar_multiplication_broadcasts() {
    assert_prints("a = [1, 2, 3] * 2;", "[2, 4, 6]");
    assert_prints("a = 2 * [1, 2, 3];", "[2, 4, 6]");
    assert_prints("a = [[1, 2], 3] * -1;", "[[-1, -2], -3]");
}

#[test]
fn container_multiplication_is_error() {
    assert_value_error("a = [1, 2] * [3, 4];", &ValueError::TypeMismatch);
    assert_value_error("a = [[1], [2]] * [[3], [4]];", &ValueError::TypeMismatch);
}

#[test]
fn array_round_trip() {
    assert_prints("a = [1, 2, 3]; a;", "[1, 2, 3]");
    assert_prints("a = [[1, 2], [3, [4, 5]]]; a;", "[[1, 2], [3, [4, 5]]]");
    assert_prints("a = [1 + 1, 2 * 3, -(4)]; a;", "[2, 6, -4]");
}

#[test]
fn slicing_reads() {
    let setup = "a = [10, 20, 30];";

    assert_prints(&format!("{setup} a[1];"), "20");
    assert_prints(&format!("{setup} a[0, 2];"), "[10, 30]");
    assert_prints(&format!("{setup} a[2, 2, 0];"), "[30, 30, 10]");
    assert_value_error(&format!("{setup} a[3];"),
                       &ValueError::IndexOutOfBounds { index: 3, size: 3 });
}

#[test]
fn nested_indexing() {
    let setup = "m = [[1, 2, 3], [4, 5, 6]];";

    assert_prints(&format!("{setup} m[1][2];"), "6");
    assert_prints(&format!("{setup} m[0][0, 2];"), "[1, 3]");
    assert_prints(&format!("{setup} m[1];"), "[4, 5, 6]");
    assert_value_error(&format!("{setup} m[0, 1][0];"), &ValueError::SliceNotFinal);
    assert_value_error("a = [1, [2, 3]]; a[0][0];", &ValueError::InvalidDimension);
    assert_value_error("a = 5; a[0];", &ValueError::TypeMismatch);
}

#[test]
fn sliced_assignment_broadcasts() {
    assert_prints("a = [1, 2, 3]; a[0, 2] = 9; a;", "[9, 2, 9]");
    assert_prints("a = [1, 2, 3]; a[1] = 7; a;", "[1, 7, 3]");
    assert_prints("a = [1, 2, 3]; a[2, 0] = [5, 6]; a;", "[6, 2, 5]");
    assert_prints("m = [[1, 2], [3, 4]]; m[1][0] = 0; m;", "[[1, 2], [0, 4]]");
    assert_prints("m = [[1, 2], [3, 4]]; m[0] = 8; m;", "[[8, 8], [3, 4]]");
}

#[test]
fn assigning_a_container_into_a_single_scalar_slot_replaces_it() {
    assert_prints("a = [1, 2, 3]; a[1] = [7, 8]; a;", "[1, [7, 8], 3]");
}

#[test]
fn broadcast_assignment_size_mismatch_is_error() {
    assert_value_error("a = [1, 2, 3]; a[0, 1] = [4, 5, 6];", &ValueError::SizeMismatch);
}

#[test]
fn scalar_broadcast_skips_container_slots() {
    assert_prints("a = [[1, 2], 3, 4]; a[0, 1] = 0; a;", "[[1, 2], 0, 4]");
}

#[test]
fn assignment_returns_the_right_hand_side() {
    assert_prints("a = [1, 2, 3]; a[0, 2] = 9;", "9");
    assert_prints("a = [1, 2, 3]; a = a * 2;", "[2, 4, 6]");
}

#[test]
fn precedence_and_associativity() {
    assert_prints("x = 2 + 3 * 4;", "14");
    assert_prints("x = (2 + 3) * 4;", "20");
    assert_prints("x = -2 + 3;", "1");
    assert_prints("x = 10 - 4 - 3;", "3");
    assert_prints("x = 2 * -3;", "-6");
    assert_prints("x = -(1 + 2) * +2;", "-6");
    assert_prints("x = ((((1))));", "1");
}

#[test]
fn unary_operators_do_not_mutate_variables() {
    assert_prints("a = [1, 2]; b = -a; a;", "[1, 2]");
    assert_prints("a = [1, 2]; b = -a; b;", "[-1, -2]");
}

#[test]
fn repeated_unary_is_syntax_error() {
    assert_syntax_error("x = --2;", 5, Expected::Operand);
    assert_syntax_error("x = 1 + - -2;", 10, Expected::Operand);
}

#[test]
fn syntax_errors_are_positioned() {
    assert_syntax_error("a = 1 +;", 7, Expected::Operand);
    assert_syntax_error("a = 1 2;", 6, Expected::Operator);
    assert_syntax_error("a = * 2;", 4, Expected::Operand);
    assert_syntax_error("a = 1", 5, Expected::Semicolon);
    assert_syntax_error("2 + 2;", 0, Expected::Identifier);
    assert_syntax_error("a = [1, 2;", 9, Expected::ClosingBracket);
    assert_syntax_error("a[x] = 1;", 2, Expected::Index);
    assert_syntax_error("a[1.5] = 1;", 2, Expected::Index);
    assert_syntax_error("a[1234567890] = 1;", 2, Expected::Index);
    assert_syntax_error("a = 1 $ 2;", 6, Expected::Operator);
}

#[test]
fn unbalanced_parentheses_are_syntax_errors() {
    assert_syntax_error("x = (1 + 2;", 10, Expected::ClosingParen);
    assert_syntax_error("x = 1 + 2);", 9, Expected::Expression);
    assert_syntax_error("x = ();", 5, Expected::Operand);
}

#[test]
fn read_statements_are_idempotent() {
    let mut session = Session::new();
    let line = "a = [[1, 2], 3]; a; a; a[0];";

    let results = session.evaluate_all(line).unwrap();
    let printed: Vec<String> = results.iter().map(ToString::to_string).collect();

    assert_eq!(printed, ["[[1, 2], 3]", "[[1, 2], 3]", "[[1, 2], 3]", "[1, 2]"]);
    assert_eq!(session.variables.len(), 1);
    assert_eq!(session.variable("a").map(ToString::to_string).as_deref(),
               Some("[[1, 2], 3]"));
}

#[test]
fn undefined_variable_is_value_error() {
    let error = get_results("y = x + 1;").unwrap_err();

    assert_eq!(error, Error::Value(ValueError::UndefinedVariable { name: "x".to_string() }));
    assert_eq!(error.position(), None);
    assert_eq!(error.to_string(), "x is not defined");
}

#[test]
fn failed_statements_keep_earlier_effects() {
    let mut session = Session::new();

    assert!(session.evaluate_all("a = 1; b = a + [1];").is_err());
    assert_eq!(session.variable("a").map(ToString::to_string).as_deref(), Some("1"));
    assert!(session.variable("b").is_none());
    assert_eq!(session.transient_len(), 0);
}

#[test]
fn evaluate_reports_next_position() {
    let mut session = Session::new();
    let line = "a = 1;  b = a * 2 ;";

    let (next, _) = session.evaluate(0, line).unwrap();
    session.reset_transient_state();
    assert_eq!(next, 6);

    let (next, value) = session.evaluate(next, line).unwrap();
    session.reset_transient_state();
    assert_eq!(next, line.len());
    assert_eq!(value.to_string(), "2");
}

#[test]
fn whitespace_and_newlines_are_ignored() {
    assert_prints("a =\n  [ 1 ,\t2 ]\n  * 3 ;\na ;", "[3, 6]");
}

#[test]
fn number_formats() {
    assert_prints("x = 7.;", "7");
    assert_prints("x = 0.5 + 0;", "0.5");
    assert_prints("x = 4 * 0.25;", "1");
}
