//! Translator module
//!
//! Converts infix arithmetic expressions to postfix (Reverse Polish)
//! notation with a single left-to-right shunting-yard scan. Operands are
//! single decimal digits; the operators are `+ - * /` (left associative)
//! and `^` (right associative), grouped with parentheses.

pub mod stack;
pub mod tokens;

use std::fmt;

use stack::{Stack, StackError};
use tokens::{Assoc, Op, Token, PREC_LOWEST};

/// Default operator stack capacity
///
/// Generous for hand-written expressions; `Translator::with_capacity`
/// overrides it.
pub const DEFAULT_STACK_CAPACITY: usize = 50;

/// Translation error
///
/// Translation is strict: the first malformed piece of input fails the
/// whole call and no partial output is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TranslateError {
    #[error("invalid character '{ch}' at column {column}")]
    InvalidCharacter { ch: char, column: usize },
    #[error("unmatched '(' in expression")]
    UnmatchedOpenParen,
    #[error("unmatched ')' at column {column}")]
    UnmatchedCloseParen { column: usize },
    #[error(transparent)]
    Stack(#[from] StackError),
}

/// Entry held on the operator stack during a scan
///
/// Only operators and not-yet-matched open parentheses are ever stacked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StackEntry {
    Op(Op),
    OpenParen,
}

impl StackEntry {
    /// Precedence as seen by the left-associativity pop loop
    ///
    /// `(` ranks below every operator so it is never popped by an operator.
    fn precedence(self) -> u8 {
        match self {
            StackEntry::Op(op) => op.precedence(),
            StackEntry::OpenParen => PREC_LOWEST,
        }
    }
}

/// Postfix token sequence
///
/// Holds digits and operators only; parentheses never reach the output.
/// `Display` renders the tokens back-to-back with no separators, matching
/// the single-character-operand grammar. Callers wanting spaced output can
/// iterate [`Postfix::tokens`] themselves.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Postfix(Vec<Token>);

impl Postfix {
    /// The output tokens in order
    pub fn tokens(&self) -> &[Token] {
        &self.0
    }

    /// Number of output tokens
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the translation produced no tokens
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Postfix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.0 {
            write!(f, "{}", token)?;
        }
        Ok(())
    }
}

/// Infix to postfix translator
///
/// Stateless between calls; each translation builds its own operator stack
/// and output sequence.
#[derive(Debug, Clone)]
pub struct Translator {
    stack_capacity: usize,
}

impl Default for Translator {
    fn default() -> Self {
        Self::new()
    }
}

impl Translator {
    /// Create a translator with the default stack capacity
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_STACK_CAPACITY)
    }

    /// Create a translator with a custom operator stack capacity
    pub fn with_capacity(stack_capacity: usize) -> Self {
        Self { stack_capacity }
    }

    /// Translate one infix expression to postfix
    pub fn translate(&self, expression: &str) -> Result<Postfix, TranslateError> {
        let mut stack: Stack<StackEntry> = Stack::with_capacity(self.stack_capacity);
        let mut output = Vec::new();

        for (i, c) in expression.chars().enumerate() {
            let column = i + 1;
            let token = Token::classify(c)
                .ok_or(TranslateError::InvalidCharacter { ch: c, column })?;

            match token {
                // Operands go straight to the output
                Token::Digit(_) => output.push(token),
                // The output carries no spacing
                Token::Whitespace => {}
                Token::Op(op) => match op.assoc() {
                    Assoc::Left => {
                        // Equal precedence resolves left-to-right: anything
                        // on the stack that binds at least as tightly is
                        // finished and moves to the output first.
                        while !stack.is_empty() && stack.peek()?.precedence() >= op.precedence() {
                            // `(` ranks below every operator, so only
                            // operators are popped here
                            if let StackEntry::Op(popped) = stack.pop()? {
                                output.push(Token::Op(popped));
                            }
                        }
                        stack.push(StackEntry::Op(op))?;
                    }
                    // Right associativity: stack directly, so a later equal
                    // precedence operator stacks on top and pops first
                    Assoc::Right => stack.push(StackEntry::Op(op))?,
                },
                Token::OpenParen => stack.push(StackEntry::OpenParen)?,
                Token::CloseParen => loop {
                    let entry = stack
                        .pop()
                        .map_err(|_| TranslateError::UnmatchedCloseParen { column })?;
                    match entry {
                        // The matching `(` is discarded, not emitted
                        StackEntry::OpenParen => break,
                        StackEntry::Op(popped) => output.push(Token::Op(popped)),
                    }
                },
            }
        }

        // Drain the operators still pending after the scan
        while !stack.is_empty() {
            match stack.pop()? {
                StackEntry::Op(popped) => output.push(Token::Op(popped)),
                StackEntry::OpenParen => return Err(TranslateError::UnmatchedOpenParen),
            }
        }

        Ok(Postfix(output))
    }
}

/// Translate one infix expression with the default configuration
pub fn translate(expression: &str) -> Result<Postfix, TranslateError> {
    Translator::new().translate(expression)
}

#[cfg(test)]
mod tests;
