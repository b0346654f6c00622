use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use thiserror::Error;

use crate::CellState;

/// Wolfram's rule 30, chaotic from a single seed.
pub const RULE_30: Rule = Rule::new(30);

/// Wolfram's rule 90. From a single seed this draws the Sierpinski triangle.
pub const RULE_90: Rule = Rule::new(90);

/// Wolfram's rule 110, known to be Turing complete.
pub const RULE_110: Rule = Rule::new(110);

/// Lookup table from a neighborhood to the next state of its middle cell.
///
/// Index `k` is the neighborhood `(left << 2) | (middle << 1) | right`.
pub type RuleTable = [CellState; 8];

/// # Representation
/// An elementary rule is its Wolfram number. Bit `k` of the number is the next state of a cell
/// whose neighborhood reads `k` in binary:
/// ```notrust
/// neighborhood: 111 110 101 100 011 010 001 000
/// rule 110:       0   1   1   0   1   1   1   0
/// ```
///
/// See: https://mathworld.wolfram.com/ElementaryCellularAutomaton.html
#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rule {
    rule: u8,
}

impl Default for Rule {
    fn default() -> Self {
        RULE_110
    }
}

impl Rule {
    pub const fn new(rule: u8) -> Self {
        Self { rule }
    }

    /// The Wolfram number of this rule.
    pub const fn number(&self) -> u8 {
        self.rule
    }

    /// Compute the transition table for this rule.
    ///
    /// Entry `k` is bit `k` of the rule number, least significant bit first, so indexing the
    /// table with a neighborhood yields the next state of that neighborhood's middle cell.
    pub const fn table(&self) -> RuleTable {
        let mut table = [0; 8];

        let mut k = 0;
        while k < 8 {
            table[k] = (self.rule >> k) & 1;
            k += 1;
        }

        table
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rule)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RuleError {
    #[error("rule must be a number: {0}")]
    NotANumber(#[from] ParseIntError),

    #[error("rule must be between 0 and 255, got {got}")]
    OutOfRange { got: u64 },
}

impl TryFrom<u64> for Rule {
    type Error = RuleError;

    fn try_from(n: u64) -> Result<Self, Self::Error> {
        let rule = u8::try_from(n).map_err(|_| RuleError::OutOfRange { got: n })?;

        Ok(Rule::new(rule))
    }
}

impl FromStr for Rule {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let n: u64 = s.trim().parse()?;

        Rule::try_from(n)
    }
}
