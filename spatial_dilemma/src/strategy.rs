use serde::{Deserialize, Serialize};

/// The behavior of a single cell towards all of its neighbors.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Strategy {
    #[serde(rename = "C")]
    Cooperate,
    #[serde(rename = "D")]
    Defect,
}

impl Strategy {
    /// The character used for this strategy in the board text format.
    pub fn to_char(self) -> char {
        match self {
            Strategy::Cooperate => 'C',
            Strategy::Defect => 'D',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'C' => Some(Strategy::Cooperate),
            'D' => Some(Strategy::Defect),
            _ => None,
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
