//! Translator unit tests
//!
//! Covers the shunting-yard scan, precedence and associativity resolution,
//! and the strict error handling.
#![allow(unused_imports)]


use crate::translator::stack::StackError;
use crate::translator::tokens::{Assoc, Op, Token};
use crate::translator::{translate, Postfix, TranslateError, Translator};

/// Apply a binary operator to two f64 operands
fn apply(op: Op, lhs: f64, rhs: f64) -> f64 {
    match op {
        Op::Add => lhs + rhs,
        Op::Sub => lhs - rhs,
        Op::Mul => lhs * rhs,
        Op::Div => lhs / rhs,
        Op::Pow => lhs.powf(rhs),
    }
}

/// Evaluate a postfix sequence with a value stack
fn eval_postfix(postfix: &Postfix) -> f64 {
    let mut values = Vec::new();
    for token in postfix.tokens() {
        match token {
            Token::Digit(d) => values.push(f64::from(*d)),
            Token::Op(op) => {
                let rhs = values.pop().expect("missing right operand");
                let lhs = values.pop().expect("missing left operand");
                values.push(apply(*op, lhs, rhs));
            }
            other => panic!("non-output token in postfix sequence: {:?}", other),
        }
    }
    assert_eq!(values.len(), 1, "evaluation must reduce to a single value");
    values[0]
}

/// Evaluate an infix expression by precedence climbing
///
/// Independent of the shunting-yard scan on purpose, so the round-trip
/// property compares two different interpretations of the same grammar.
fn eval_infix(expr: &str) -> f64 {
    let mut chars = expr
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .peekable();
    let value = parse_expr(&mut chars, 0);
    assert!(chars.peek().is_none(), "trailing input after expression");
    value
}

fn parse_expr(
    chars: &mut std::iter::Peekable<impl Iterator<Item = char>>,
    min_prec: u8,
) -> f64 {
    let mut lhs = parse_atom(chars);
    while let Some(&c) = chars.peek() {
        let Some(op) = Op::from_char(c) else { break };
        if op.precedence() < min_prec {
            break;
        }
        chars.next();
        let next_min = match op.assoc() {
            Assoc::Left => op.precedence() + 1,
            Assoc::Right => op.precedence(),
        };
        let rhs = parse_expr(chars, next_min);
        lhs = apply(op, lhs, rhs);
    }
    lhs
}

fn parse_atom(chars: &mut std::iter::Peekable<impl Iterator<Item = char>>) -> f64 {
    match chars.next() {
        Some('(') => {
            let value = parse_expr(chars, 0);
            assert_eq!(chars.next(), Some(')'), "expected closing parenthesis");
            value
        }
        Some(c) if c.is_ascii_digit() => f64::from(c as u8 - b'0'),
        other => panic!("unexpected input: {:?}", other),
    }
}

#[cfg(test)]
mod translate_basic_tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        let postfix = translate("").unwrap();
        assert!(postfix.is_empty());
        assert_eq!(postfix.to_string(), "");
    }

    #[test]
    fn test_whitespace_only_input() {
        let postfix = translate("   \t  ").unwrap();
        assert!(postfix.is_empty());
    }

    #[test]
    fn test_single_digit() {
        assert_eq!(translate("7").unwrap().to_string(), "7");
    }

    #[test]
    fn test_digits_copy_through_in_order() {
        assert_eq!(translate("12").unwrap().to_string(), "12");
    }

    #[test]
    fn test_whitespace_is_dropped_from_output() {
        assert_eq!(translate("3 + 4").unwrap().to_string(), "34+");
    }

    #[test]
    fn test_simple_sum() {
        assert_eq!(translate("3+4").unwrap().to_string(), "34+");
    }

    #[test]
    fn test_parenthesized_sum_times_digit() {
        assert_eq!(translate("(3+4)*5").unwrap().to_string(), "34+5*");
    }

    #[test]
    fn test_redundant_parens_vanish() {
        assert_eq!(translate("((7))").unwrap().to_string(), "7");
    }

    #[test]
    fn test_nested_parens() {
        assert_eq!(translate("((1+2)*3)-4").unwrap().to_string(), "12+3*4-");
    }
}

#[cfg(test)]
mod precedence_tests {
    use super::*;

    #[test]
    fn test_product_before_sum_on_the_left() {
        assert_eq!(translate("3*4+5").unwrap().to_string(), "34*5+");
    }

    #[test]
    fn test_product_before_sum_on_the_right() {
        // `+` waits on the stack while `*` stacks above it and pops first
        assert_eq!(translate("3+4*5").unwrap().to_string(), "345*+");
    }

    #[test]
    fn test_division_binds_like_multiplication() {
        assert_eq!(translate("8/4*2").unwrap().to_string(), "84/2*");
    }

    #[test]
    fn test_power_binds_tighter_than_product() {
        assert_eq!(translate("2*3^2").unwrap().to_string(), "232^*");
    }

    #[test]
    fn test_power_pops_before_lower_precedence() {
        assert_eq!(translate("2^3*4").unwrap().to_string(), "23^4*");
    }

    #[test]
    fn test_parens_override_precedence() {
        assert_eq!(translate("3*(4+5)").unwrap().to_string(), "345+*");
    }
}

#[cfg(test)]
mod associativity_tests {
    use super::*;

    #[test]
    fn test_sum_chains_left_to_right() {
        // The second `+` pops the first before stacking itself
        assert_eq!(translate("3+4+5").unwrap().to_string(), "345++");
    }

    #[test]
    fn test_subtraction_chains_left_to_right() {
        assert_eq!(translate("8-2-1").unwrap().to_string(), "82-1-");
    }

    #[test]
    fn test_power_chains_right_to_left() {
        // No premature pop of the equal precedence `^`
        assert_eq!(translate("2^3^2").unwrap().to_string(), "232^^");
    }

    #[test]
    fn test_mixed_sum_and_difference() {
        assert_eq!(translate("1+2-3").unwrap().to_string(), "12+3-");
    }
}

#[cfg(test)]
mod error_tests {
    use super::*;

    #[test]
    fn test_invalid_character_reports_column() {
        let err = translate("3+a").unwrap_err();
        assert_eq!(
            err,
            TranslateError::InvalidCharacter { ch: 'a', column: 3 }
        );
    }

    #[test]
    fn test_invalid_character_fails_fast() {
        // Strict mode: no best-effort output for malformed input
        assert!(translate("x+1").is_err());
    }

    #[test]
    fn test_stray_close_paren_underflows() {
        let err = translate(")").unwrap_err();
        assert_eq!(err, TranslateError::UnmatchedCloseParen { column: 1 });
    }

    #[test]
    fn test_close_paren_without_matching_open() {
        let err = translate("3+4)").unwrap_err();
        assert_eq!(err, TranslateError::UnmatchedCloseParen { column: 4 });
    }

    #[test]
    fn test_unmatched_open_paren() {
        let err = translate("(3+4").unwrap_err();
        assert_eq!(err, TranslateError::UnmatchedOpenParen);
    }

    #[test]
    fn test_stack_overflow_with_tiny_capacity() {
        let translator = Translator::with_capacity(1);
        let err = translator.translate("(3+4)").unwrap_err();
        assert_eq!(
            err,
            TranslateError::Stack(StackError::Overflow { capacity: 1 })
        );
    }

    #[test]
    fn test_default_capacity_handles_deep_nesting() {
        let expr = "(".repeat(40) + "1" + &")".repeat(40);
        assert_eq!(translate(&expr).unwrap().to_string(), "1");
    }

    #[test]
    fn test_nesting_beyond_default_capacity_overflows() {
        let expr = "(".repeat(60) + "1" + &")".repeat(60);
        assert!(matches!(
            translate(&expr),
            Err(TranslateError::Stack(StackError::Overflow { .. }))
        ));
    }
}

#[cfg(test)]
mod output_tests {
    use super::*;

    #[test]
    fn test_display_has_no_separators() {
        let postfix = translate("3 + 4 * 5").unwrap();
        assert_eq!(postfix.to_string(), "345*+");
    }

    #[test]
    fn test_tokens_exposes_sequence() {
        let postfix = translate("3+4").unwrap();
        assert_eq!(
            postfix.tokens(),
            &[Token::Digit(3), Token::Digit(4), Token::Op(Op::Add)]
        );
    }

    #[test]
    fn test_output_contains_no_parens() {
        let postfix = translate("((1+2)*(3+4))").unwrap();
        assert!(postfix
            .tokens()
            .iter()
            .all(|t| !matches!(t, Token::OpenParen | Token::CloseParen)));
    }

    #[test]
    fn test_evaluation_round_trip() {
        for expr in ["(3+4)*5", "2^3^2", "3+4*5", "8/4*2", "9-2-3"] {
            let postfix = translate(expr).unwrap();
            assert_eq!(
                eval_infix(expr),
                eval_postfix(&postfix),
                "evaluation mismatch for {}",
                expr
            );
        }
    }
}
