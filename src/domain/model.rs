use std::fmt;

pub const INVALID_NUMERAL_MESSAGE: &str = "Invalid Roman numeral detected.";
pub const INVALID_FORMAT_MESSAGE: &str = "Invalid input format detected.";

/// Binary operator from the middle field of an expression line.
///
/// Anything other than the four arithmetic symbols is kept as `Unsupported`
/// and evaluates to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Unsupported(char),
}

impl From<char> for Operator {
    fn from(symbol: char) -> Self {
        match symbol {
            '+' => Operator::Add,
            '-' => Operator::Subtract,
            '*' => Operator::Multiply,
            '/' => Operator::Divide,
            other => Operator::Unsupported(other),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
            Operator::Unsupported(c) => *c,
        };
        write!(f, "{}", symbol)
    }
}

/// One parsed input line: `<numeral> <operator> <numeral>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression<'a> {
    pub left: &'a str,
    pub operator: Operator,
    pub right: &'a str,
}

/// What a single input line turned into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    Result { value: i64, words: String },
    InvalidNumeral,
    InvalidFormat,
}

impl LineOutcome {
    pub fn text(&self) -> &str {
        match self {
            LineOutcome::Result { words, .. } => words.as_str(),
            LineOutcome::InvalidNumeral => INVALID_NUMERAL_MESSAGE,
            LineOutcome::InvalidFormat => INVALID_FORMAT_MESSAGE,
        }
    }
}

/// Counters for a processed batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportSummary {
    pub lines: usize,
    pub results: usize,
    pub invalid_numerals: usize,
    pub invalid_formats: usize,
}

/// Ordered outcomes for every input line, one per line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessReport {
    pub outcomes: Vec<LineOutcome>,
}

impl ProcessReport {
    pub fn summary(&self) -> ReportSummary {
        let mut summary = ReportSummary {
            lines: self.outcomes.len(),
            ..Default::default()
        };
        for outcome in &self.outcomes {
            match outcome {
                LineOutcome::Result { .. } => summary.results += 1,
                LineOutcome::InvalidNumeral => summary.invalid_numerals += 1,
                LineOutcome::InvalidFormat => summary.invalid_formats += 1,
            }
        }
        summary
    }

    /// Output text: each outcome on its own newline-terminated line.
    pub fn render(&self) -> String {
        self.outcomes
            .iter()
            .map(|outcome| format!("{}\n", outcome.text()))
            .collect()
    }
}
