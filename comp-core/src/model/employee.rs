use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Relative performance band, `Q1` best through `Q5` worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Quintile {
    Q1,
    Q2,
    Q3,
    Q4,
    Q5,
}

impl Quintile {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Q1 => "Q1",
            Self::Q2 => "Q2",
            Self::Q3 => "Q3",
            Self::Q4 => "Q4",
            Self::Q5 => "Q5",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Q1" => Some(Self::Q1),
            "Q2" => Some(Self::Q2),
            "Q3" => Some(Self::Q3),
            "Q4" => Some(Self::Q4),
            "Q5" => Some(Self::Q5),
            _ => None,
        }
    }
}

impl Default for Quintile {
    /// `Q3` is the neutral middle band, used when an upload omits the column.
    fn default() -> Self {
        Self::Q3
    }
}

/// One roster row.
///
/// `id` is unique within the current roster. Monetary fields are
/// non-negative; `aum` is expressed in millions of dollars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub department: String,
    pub role: String,
    pub base_salary: Decimal,
    pub performance_rating: i32,
    pub quintile: Quintile,
    pub aum: Decimal,
    pub is_mrt: bool,
    /// Head count sharing this employee's revenue attribution, at least 1.
    pub team_size: u32,
    /// Revenue attributed to the employee or team last year; zero means the
    /// calculation service estimates revenue from AUM instead.
    pub last_year_revenue: Decimal,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn quintile_parse_round_trips_all_bands() {
        for code in ["Q1", "Q2", "Q3", "Q4", "Q5"] {
            let quintile = Quintile::parse(code).expect("known code");
            assert_eq!(quintile.as_str(), code);
        }
    }

    #[test]
    fn quintile_parse_rejects_unknown_codes() {
        assert_eq!(Quintile::parse("Q6"), None);
        assert_eq!(Quintile::parse("q1"), None);
        assert_eq!(Quintile::parse(""), None);
    }

    #[test]
    fn quintile_default_is_middle_band() {
        assert_eq!(Quintile::default(), Quintile::Q3);
    }
}
