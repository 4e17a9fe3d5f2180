use super::*;
use pretty_assertions::assert_eq;

#[test]
fn prefix_symbols_resolve() {
    assert_eq!(PrefixOp::from_symbol("!"), Some(PrefixOp::Not));
    assert_eq!(PrefixOp::from_symbol("-"), Some(PrefixOp::Neg));
    assert_eq!(PrefixOp::from_symbol("~"), None);
}

#[test]
fn infix_symbols_round_trip() {
    for op in [
        InfixOp::Add,
        InfixOp::Sub,
        InfixOp::Mul,
        InfixOp::Div,
        InfixOp::Lt,
        InfixOp::Gt,
        InfixOp::Eq,
        InfixOp::NotEq,
    ] {
        assert_eq!(InfixOp::from_symbol(op.as_symbol()), Some(op));
    }
    assert_eq!(InfixOp::from_symbol("%"), None);
    assert_eq!(InfixOp::from_symbol("<="), None);
}

#[test]
fn unknown_operator_token_is_kept_verbatim() {
    let expr = Expression::prefix("~", Expression::int(1));
    let Expression::Prefix(prefix) = &expr else {
        panic!("expected prefix expression");
    };
    assert_eq!(prefix.operator, "~");
    assert_eq!(PrefixOp::from_symbol(&prefix.operator), None);
}

#[test]
fn display_expressions() {
    let expr = Expression::infix(
        Expression::prefix("-", Expression::int(5)),
        "*",
        Expression::infix(Expression::int(2), "+", Expression::int(3)),
    );
    assert_eq!(expr.to_string(), "((-5) * (2 + 3))");
    assert_eq!(Expression::bool(false).to_string(), "false");
}

#[test]
fn display_if_and_statements() {
    let expr = Expression::if_else(
        Expression::infix(Expression::int(1), "<", Expression::int(2)),
        BlockStatement::new(vec![Statement::ret(Expression::int(10))]),
        Some(BlockStatement::new(vec![Statement::expr(Expression::int(20))])),
    );
    assert_eq!(expr.to_string(), "if (1 < 2) { return 10; } else { 20 }");

    let program = Program::new(vec![
        Statement::expr(Expression::int(1)),
        Statement::ret(Expression::bool(true)),
    ]);
    assert_eq!(program.to_string(), "1 return true;");
    assert_eq!(Node::from(&program).to_string(), "1 return true;");
}

#[test]
fn display_if_parenthesizes_literal_condition() {
    let expr = Expression::if_else(
        Expression::bool(true),
        BlockStatement::new(vec![Statement::expr(Expression::int(10))]),
        None,
    );
    assert_eq!(expr.to_string(), "if (true) { 10 }");

    let negated = Expression::if_else(
        Expression::prefix("!", Expression::bool(false)),
        BlockStatement::default(),
        None,
    );
    assert_eq!(negated.to_string(), "if (!false) { }");
}

#[test]
fn empty_block_display() {
    assert_eq!(BlockStatement::default().to_string(), "{ }");
}
