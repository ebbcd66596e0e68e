use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FullName {
    pub first_name: String,
    pub last_name: String,
}

impl FullName {
    pub fn new(first_name: String, last_name: String) -> Self {
        FullName {
            first_name,
            last_name,
        }
    }

    pub fn parse(name: &str) -> Self {
        match name.trim().split_once(' ') {
            Some((first, last)) => FullName::new(first.to_string(), last.trim().to_string()),
            None => FullName::new(String::new(), name.trim().to_string()),
        }
    }
}

impl Display for FullName {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        if self.first_name.is_empty() {
            write!(f, "{}", self.last_name)
        } else {
            write!(f, "{} {}", self.first_name, self.last_name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_splits_on_first_space() {
        let name = FullName::parse("Jan van Bergen");
        assert_eq!(name.first_name, "Jan");
        assert_eq!(name.last_name, "van Bergen");
        assert_eq!(name.to_string(), "Jan van Bergen");
    }

    #[test]
    fn parse_single_word_is_last_name() {
        let name = FullName::parse("Pelo");
        assert_eq!(name.to_string(), "Pelo");
    }
}
