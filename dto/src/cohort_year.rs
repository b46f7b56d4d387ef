use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Academic year of a club member. Each year is stored in its own collection.
///
/// Any number outside `1..=4` is read as [CohortYear::First],
/// so that a malformed value never prevents a member from being filed somewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "i64", into = "u8")]
pub enum CohortYear {
    First,
    Second,
    Third,
    Fourth,
}

impl CohortYear {
    /// All years, seniors first. This is the order in which members are listed.
    pub const ALL: [CohortYear; 4] = [
        CohortYear::Fourth,
        CohortYear::Third,
        CohortYear::Second,
        CohortYear::First,
    ];

    pub fn number(&self) -> u8 {
        match self {
            CohortYear::First => 1,
            CohortYear::Second => 2,
            CohortYear::Third => 3,
            CohortYear::Fourth => 4,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CohortYear::Fourth => "4th Year (Final Year)",
            CohortYear::Third => "3rd Year (Pre-Final)",
            CohortYear::Second => "2nd Year (Intermediate)",
            CohortYear::First => "1st Year (Freshers)",
        }
    }
}

impl From<i64> for CohortYear {
    fn from(value: i64) -> Self {
        match value {
            4 => CohortYear::Fourth,
            3 => CohortYear::Third,
            2 => CohortYear::Second,
            _ => CohortYear::First,
        }
    }
}

impl From<u8> for CohortYear {
    fn from(value: u8) -> Self {
        CohortYear::from(i64::from(value))
    }
}

impl From<CohortYear> for u8 {
    fn from(year: CohortYear) -> Self {
        year.number()
    }
}

impl Display for CohortYear {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "year {}", self.number())
    }
}
