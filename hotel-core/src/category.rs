use std::fmt;
use std::str::FromStr;

use crate::error::HotelError;

/// Room category, which decides both search filtering and the fixed price
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Standard,
    Deluxe,
    Suite,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Standard, Category::Deluxe, Category::Suite];

    /// Fixed nightly price for the category
    pub fn price(self) -> f64 {
        match self {
            Category::Standard => 100.0,
            Category::Deluxe => 200.0,
            Category::Suite => 350.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Standard => "Standard",
            Category::Deluxe => "Deluxe",
            Category::Suite => "Suite",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = HotelError;

    /// Case-insensitive, surrounding whitespace ignored
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| HotelError::UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ignores_case_and_whitespace() {
        assert_eq!("standard".parse::<Category>().unwrap(), Category::Standard);
        assert_eq!("  DELUXE ".parse::<Category>().unwrap(), Category::Deluxe);
        assert_eq!("SuItE".parse::<Category>().unwrap(), Category::Suite);
    }

    #[test]
    fn test_unknown_category_is_an_error() {
        let err = "penthouse".parse::<Category>().unwrap_err();
        assert!(matches!(err, HotelError::UnknownCategory(ref s) if s == "penthouse"));
    }

    #[test]
    fn test_price_table() {
        assert_eq!(Category::Standard.price(), 100.0);
        assert_eq!(Category::Deluxe.price(), 200.0);
        assert_eq!(Category::Suite.price(), 350.0);
    }
}
