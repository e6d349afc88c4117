use nscharp::{
    ast::{BinaryOperator, Expr, LiteralValue, Statement, UnaryOperator},
    error::ParseError,
    parse, tokenize,
};

fn parse_source(source: &str) -> Result<Vec<Statement>, ParseError> {
    parse(&tokenize(source).expect("source lexes"))
}

fn int(value: i64, line: usize) -> Expr {
    Expr::Literal { value: LiteralValue::Integer(value),
                    line }
}

fn binary(left: Expr, op: BinaryOperator, right: Expr, line: usize) -> Expr {
    Expr::BinaryOp { left: Box::new(left),
                     op,
                     right: Box::new(right),
                     line }
}

fn only_expression(source: &str) -> Expr {
    match parse_source(source).unwrap().as_slice() {
        [Statement::Expression { expr, .. }] => expr.clone(),
        other => panic!("Expected one expression statement, got {other:?}"),
    }
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(only_expression("1 + 2 * 3"),
               binary(int(1, 1),
                      BinaryOperator::Add,
                      binary(int(2, 1), BinaryOperator::Mul, int(3, 1), 1),
                      1));
}

#[test]
fn subtraction_is_left_associative() {
    assert_eq!(only_expression("1 - 2 - 3"),
               binary(binary(int(1, 1), BinaryOperator::Sub, int(2, 1), 1),
                      BinaryOperator::Sub,
                      int(3, 1),
                      1));
}

#[test]
fn power_is_right_associative_and_beats_negation() {
    assert_eq!(only_expression("2 ** 3 ** 2"),
               binary(int(2, 1),
                      BinaryOperator::Pow,
                      binary(int(3, 1), BinaryOperator::Pow, int(2, 1), 1),
                      1));

    assert_eq!(only_expression("-2 ** 2"),
               Expr::UnaryOp { op:   UnaryOperator::Negate,
                               expr: Box::new(binary(int(2, 1),
                                                     BinaryOperator::Pow,
                                                     int(2, 1),
                                                     1)),
                               line: 1, });
}

#[test]
fn parentheses_group() {
    assert_eq!(only_expression("(1 + 2) * 3"),
               binary(binary(int(1, 1), BinaryOperator::Add, int(2, 1), 1),
                      BinaryOperator::Mul,
                      int(3, 1),
                      1));
}

#[test]
fn statements_without_separators() {
    let statements = parse_source("let a = 1 let b = a print(b)").unwrap();
    assert_eq!(statements.len(), 3);
}

#[test]
fn if_with_else_and_nested_blocks() {
    let statements = parse_source("if 1 == 1 {\n  while 0 { print(1) }\n} else {\n  print(2)\n}").unwrap();

    match statements.as_slice() {
        [Statement::IfElse { then_body,
                             else_body,
                             line: 1,
                             .. }] => {
            assert!(matches!(then_body.as_slice(), [Statement::While { line: 2, .. }]));
            assert!(matches!(else_body.as_slice(), [Statement::Print { line: 4, .. }]));
        },
        other => panic!("Unexpected statements {other:?}"),
    }
}

#[test]
fn input_alone_is_a_read() {
    let statements = parse_source("let a = input").unwrap();
    assert_eq!(statements,
               vec![Statement::Let { name:  "a".to_string(),
                                     value: Expr::Input { line: 1 },
                                     line:  1, }]);
}

#[test]
fn input_with_an_operator_is_a_variable() {
    assert_eq!(only_expression("input + 1"),
               binary(Expr::Variable { name: "input".to_string(),
                                       line: 1, },
                      BinaryOperator::Add,
                      int(1, 1),
                      1));
}

#[test]
fn function_declaration_keeps_its_body() {
    let statements = parse_source("fun f() {\n  print(1)\n  print(2)\n}").unwrap();
    assert!(matches!(statements.as_slice(),
                     [Statement::Fun { body, line: 1, .. }] if body.len() == 2));
}

#[test]
fn stray_closing_brace_fails() {
    assert!(matches!(parse_source("print(1)\n}"),
                     Err(ParseError::ExpectedExpression { line: 2, .. })));
}

#[test]
fn unclosed_block_fails() {
    assert!(matches!(parse_source("while 1 {\n  print(1)\n"),
                     Err(ParseError::UnexpectedToken { line: 3, .. })));
}

#[test]
fn comparisons_chain_into_one_node() {
    assert_eq!(only_expression("1 < 2 + 1 <= 3"),
               Expr::Comparison { first: Box::new(int(1, 1)),
                                  rest:  vec![(BinaryOperator::Less,
                                               binary(int(2, 1), BinaryOperator::Add, int(1, 1), 1)),
                                              (BinaryOperator::LessEqual, int(3, 1))],
                                  line:  1, });
}

#[test]
fn single_and_grouped_comparisons_stay_binary() {
    assert_eq!(only_expression("1 == 2"),
               binary(int(1, 1), BinaryOperator::Equal, int(2, 1), 1));

    assert_eq!(only_expression("(1 == 2) == 3"),
               binary(binary(int(1, 1), BinaryOperator::Equal, int(2, 1), 1),
                      BinaryOperator::Equal,
                      int(3, 1),
                      1));
}

#[test]
fn dangling_else_fails() {
    assert_eq!(parse_source("print(1)\nelse { print(2) }"),
               Err(ParseError::DanglingElse { line: 2 }));
}

#[test]
fn print_needs_parentheses() {
    assert!(matches!(parse_source("print 1"),
                     Err(ParseError::UnexpectedToken { line: 1, .. })));
}

#[test]
fn let_needs_an_identifier() {
    assert!(matches!(parse_source("let 1 = 2"),
                     Err(ParseError::UnexpectedToken { line: 1, .. })));
}

#[test]
fn missing_operand_fails() {
    assert!(matches!(parse_source("let a = 1 +"),
                     Err(ParseError::ExpectedExpression { line: 1, .. })));
}
