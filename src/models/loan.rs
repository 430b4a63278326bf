//! Loan action requested at the desk

use crate::error::AppError;

/// What the user wants to do with the selected book
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoanAction {
    Borrow,
    Return,
}

impl LoanAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoanAction::Borrow => "borrow",
            LoanAction::Return => "return",
        }
    }
}

impl std::fmt::Display for LoanAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for LoanAction {
    type Err = AppError;

    /// Accepts `B`/`R` as well as the full `Borrow`/`Return` labels, in any case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "b" | "borrow" => Ok(LoanAction::Borrow),
            "r" | "return" => Ok(LoanAction::Return),
            _ => Err(AppError::InvalidAction(s.to_string())),
        }
    }
}
