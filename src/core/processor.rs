use crate::core::{arithmetic, numeral, words};
use crate::domain::model::{Expression, LineOutcome, Operator, ProcessReport};

/// Split a line into `<numeral> <operator> <numeral>`.
///
/// Exactly three whitespace-separated fields are required and the middle
/// one must be a single character. Blank lines do not parse.
pub fn parse_line(line: &str) -> Option<Expression<'_>> {
    let mut fields = line.split_whitespace();
    let left = fields.next()?;
    let operator = fields.next()?;
    let right = fields.next()?;
    if fields.next().is_some() {
        return None;
    }

    let mut symbols = operator.chars();
    let symbol = symbols.next()?;
    if symbols.next().is_some() {
        return None;
    }

    Some(Expression {
        left,
        operator: Operator::from(symbol),
        right,
    })
}

/// Run one line through parse, validate, decode, evaluate and spell.
pub fn process_line(line: &str) -> LineOutcome {
    let Some(expr) = parse_line(line) else {
        return LineOutcome::InvalidFormat;
    };

    if !numeral::validate(expr.left) || !numeral::validate(expr.right) {
        return LineOutcome::InvalidNumeral;
    }

    let value = arithmetic::apply(
        numeral::decode(expr.left),
        numeral::decode(expr.right),
        expr.operator,
    );

    LineOutcome::Result {
        value,
        words: words::to_words(value),
    }
}

/// Process every line of `input` in order. Empty input gives an empty report.
pub fn process_input(input: &str) -> ProcessReport {
    let outcomes = input
        .lines()
        .enumerate()
        .map(|(index, line)| {
            let outcome = process_line(line);
            match &outcome {
                LineOutcome::Result { value, words } => {
                    tracing::debug!("line {}: {:?} = {} ({})", index + 1, line, value, words)
                }
                diagnostic => {
                    tracing::debug!("line {}: {:?} -> {}", index + 1, line, diagnostic.text())
                }
            }
            outcome
        })
        .collect();

    ProcessReport { outcomes }
}
