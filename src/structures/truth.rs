//! Ternary truth values.

/// The value of a variable under a (possibly partial) assignment.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Truth {
    /// The variable is assigned true.
    True,

    /// The variable is assigned false.
    False,

    /// The variable is unassigned.
    Unknown,
}

impl Truth {
    /// The value as seen through a literal of the given polarity.
    ///
    /// A negated occurrence swaps [True](Truth::True) and [False](Truth::False), while [Unknown](Truth::Unknown) absorbs either polarity.
    // Explicit cases rather than a bitwise trick, as no bit pattern is reserved for Unknown.
    pub fn polarised(self, negated: bool) -> Self {
        if !negated {
            return self;
        }
        match self {
            Self::True => Self::False,
            Self::False => Self::True,
            Self::Unknown => Self::Unknown,
        }
    }

    /// Whether the value is [True](Truth::True).
    pub fn is_true(self) -> bool {
        matches!(self, Self::True)
    }

    /// Whether the value is [False](Truth::False).
    pub fn is_false(self) -> bool {
        matches!(self, Self::False)
    }

    /// Whether the value is [Unknown](Truth::Unknown).
    pub fn is_unknown(self) -> bool {
        matches!(self, Self::Unknown)
    }
}

impl From<Option<bool>> for Truth {
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(true) => Self::True,
            Some(false) => Self::False,
            None => Self::Unknown,
        }
    }
}

impl From<Truth> for Option<bool> {
    fn from(value: Truth) -> Self {
        match value {
            Truth::True => Some(true),
            Truth::False => Some(false),
            Truth::Unknown => None,
        }
    }
}

impl std::fmt::Display for Truth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::True => write!(f, "true"),
            Self::False => write!(f, "false"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polarised_swaps_under_negation() {
        assert_eq!(Truth::True.polarised(true), Truth::False);
        assert_eq!(Truth::False.polarised(true), Truth::True);
        assert_eq!(Truth::True.polarised(false), Truth::True);
        assert_eq!(Truth::False.polarised(false), Truth::False);
    }

    #[test]
    fn unknown_absorbs_polarity() {
        assert_eq!(Truth::Unknown.polarised(true), Truth::Unknown);
        assert_eq!(Truth::Unknown.polarised(false), Truth::Unknown);
    }
}
