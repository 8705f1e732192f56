//! Screen identifiers for the navigation state machine

use std::fmt;
use std::str::FromStr;

use crate::error::ScreenParseError;

/// Navigation target
///
/// A closed set: dispatch over screens is exhaustive, so an unknown screen
/// can only arise at the string boundary (`FromStr`), never past it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Landing page with the average price readout
    #[default]
    Start,
    /// The dish list with add, remove and filter entry points
    Menu,
    /// The draft form
    AddDish,
    /// Course filter over a snapshot result list
    FilterDishes,
    /// Navigation target of dish selection; no render branch exists for it,
    /// frontends show the fallback display
    DishDetails,
}

impl Screen {
    /// Canonical identifier, the spelling `FromStr` accepts
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Start => "Start",
            Self::Menu => "Menu",
            Self::AddDish => "AddDish",
            Self::FilterDishes => "FilterDishes",
            Self::DishDetails => "DishDetails",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Screen {
    type Err = ScreenParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Start" => Ok(Self::Start),
            "Menu" => Ok(Self::Menu),
            "AddDish" => Ok(Self::AddDish),
            "FilterDishes" => Ok(Self::FilterDishes),
            "DishDetails" => Ok(Self::DishDetails),
            other => Err(ScreenParseError {
                name: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_identifiers() {
        assert_eq!("Start".parse::<Screen>().unwrap(), Screen::Start);
        assert_eq!("AddDish".parse::<Screen>().unwrap(), Screen::AddDish);
        assert_eq!(
            "FilterDishes".parse::<Screen>().unwrap(),
            Screen::FilterDishes
        );
        assert_eq!(
            "DishDetails".parse::<Screen>().unwrap(),
            Screen::DishDetails
        );
    }

    #[test]
    fn rejects_unknown_identifier() {
        let err = "Bogus".parse::<Screen>().unwrap_err();
        assert_eq!(err.name, "Bogus");
        assert_eq!(err.to_string(), "unknown screen identifier: Bogus");
    }

    #[test]
    fn default_screen_is_start() {
        assert_eq!(Screen::default(), Screen::Start);
    }
}
