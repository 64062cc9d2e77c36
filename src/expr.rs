//! Safe arithmetic evaluation for the calculator intent.
//!
//! Input is first reduced to the characters `0-9 + - * / ( ) .`; everything
//! else is dropped. The remainder is parsed by a small recursive-descent
//! parser over a closed grammar:
//!
//! ```text
//! expr   := term (('+' | '-') term)*
//! term   := unary (('*' | '/') unary)*
//! unary  := ('+' | '-') unary | atom
//! atom   := number | '(' expr ')'
//! number := digits ['.' digits] | '.' digits | digits '.'
//! ```
//!
//! There are no variables, functions, or exponentiation.

/// Nesting limit for parentheses and unary signs.
const MAX_DEPTH: usize = 64;

/// Arithmetic evaluation failure.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EvaluationError {
    /// Nothing left to evaluate after filtering.
    #[error("empty expression")]
    Empty,

    /// A `(` without a matching `)` or vice versa.
    #[error("unbalanced parentheses")]
    UnbalancedParentheses,

    /// A token appeared where the grammar does not allow it.
    #[error("unexpected {found} at position {position}")]
    UnexpectedToken {
        /// Byte offset in the filtered expression.
        position: usize,
        /// Description of what was found.
        found: String,
    },

    /// A numeric literal that does not parse (e.g. `1.2.3`).
    #[error("invalid number {0:?}")]
    InvalidNumber(String),

    /// Division by zero or overflow.
    #[error("result is not a finite number")]
    NonFinite,

    /// Parentheses or unary signs nested deeper than the parser allows.
    #[error("expression nested too deeply")]
    NestingTooDeep,
}

/// Keep only the characters the grammar understands.
pub fn sanitize(expression: &str) -> String {
    expression
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '*' | '/' | '(' | ')' | '.'))
        .collect()
}

/// Sanitize and evaluate an arithmetic expression.
///
/// # Errors
///
/// Returns an [`EvaluationError`] when the filtered input is empty,
/// malformed, or yields a non-finite value.
pub fn evaluate(expression: &str) -> Result<f64, EvaluationError> {
    let sanitized = sanitize(expression);
    if sanitized.is_empty() {
        return Err(EvaluationError::Empty);
    }
    check_balance(&sanitized)?;

    let mut parser = Parser {
        src: sanitized.as_bytes(),
        pos: 0,
        depth: 0,
    };
    let value = parser.expr()?;
    if let Some(&b) = parser.src.get(parser.pos) {
        return Err(EvaluationError::UnexpectedToken {
            position: parser.pos,
            found: format!("'{}'", b as char),
        });
    }
    if !value.is_finite() {
        return Err(EvaluationError::NonFinite);
    }
    Ok(value)
}

/// Render a result for speech: integral values without a fractional part.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        let s = format!("{value:.10}");
        match s.trim_end_matches('0').trim_end_matches('.') {
            "-0" => "0".to_owned(),
            trimmed => trimmed.to_owned(),
        }
    }
}

fn check_balance(s: &str) -> Result<(), EvaluationError> {
    let mut open: usize = 0;
    for c in s.chars() {
        match c {
            '(' => open += 1,
            ')' => {
                open = open
                    .checked_sub(1)
                    .ok_or(EvaluationError::UnbalancedParentheses)?;
            }
            _ => {}
        }
    }
    if open == 0 {
        Ok(())
    } else {
        Err(EvaluationError::UnbalancedParentheses)
    }
}

struct Parser<'a> {
    src: &'a [u8],
    pos: usize,
    depth: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<u8> {
        self.src.get(self.pos).copied()
    }

    fn unexpected(&self) -> EvaluationError {
        let found = match self.peek() {
            Some(b) => format!("'{}'", b as char),
            None => "end of input".to_owned(),
        };
        EvaluationError::UnexpectedToken {
            position: self.pos,
            found,
        }
    }

    fn descend(&mut self) -> Result<(), EvaluationError> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(EvaluationError::NestingTooDeep);
        }
        Ok(())
    }

    fn expr(&mut self) -> Result<f64, EvaluationError> {
        let mut value = self.term()?;
        while let Some(op @ (b'+' | b'-')) = self.peek() {
            self.pos += 1;
            let rhs = self.term()?;
            value = if op == b'+' { value + rhs } else { value - rhs };
        }
        Ok(value)
    }

    fn term(&mut self) -> Result<f64, EvaluationError> {
        let mut value = self.unary()?;
        while let Some(op @ (b'*' | b'/')) = self.peek() {
            self.pos += 1;
            let rhs = self.unary()?;
            value = if op == b'*' { value * rhs } else { value / rhs };
        }
        Ok(value)
    }

    fn unary(&mut self) -> Result<f64, EvaluationError> {
        match self.peek() {
            Some(sign @ (b'+' | b'-')) => {
                self.pos += 1;
                self.descend()?;
                let value = self.unary()?;
                self.depth -= 1;
                Ok(if sign == b'-' { -value } else { value })
            }
            _ => self.atom(),
        }
    }

    fn atom(&mut self) -> Result<f64, EvaluationError> {
        match self.peek() {
            Some(b'(') => {
                self.pos += 1;
                self.descend()?;
                let value = self.expr()?;
                if self.peek() != Some(b')') {
                    return Err(self.unexpected());
                }
                self.pos += 1;
                self.depth -= 1;
                Ok(value)
            }
            Some(b) if b.is_ascii_digit() || b == b'.' => self.number(),
            _ => Err(self.unexpected()),
        }
    }

    fn number(&mut self) -> Result<f64, EvaluationError> {
        let start = self.pos;
        while let Some(b) = self.peek() {
            if b.is_ascii_digit() || b == b'.' {
                self.pos += 1;
            } else {
                break;
            }
        }
        let literal = String::from_utf8_lossy(&self.src[start..self.pos]).into_owned();
        if literal == "." || literal.matches('.').count() > 1 {
            return Err(EvaluationError::InvalidNumber(literal));
        }
        literal
            .parse::<f64>()
            .map_err(|_| EvaluationError::InvalidNumber(literal))
    }
}
