use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

/// When the rule-of-thirds guidelines are drawn inside the crop window.
#[derive(Debug, Clone, PartialEq, Eq, Copy, EnumIter, Serialize, Deserialize)]
pub enum Guidelines {
    /// Always drawn.
    On,
    /// Drawn only while the user is interacting with the crop window.
    OnTouch,
    /// Never drawn.
    Off,
}

impl Display for Guidelines {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Guidelines::On => write!(f, "On"),
            Guidelines::OnTouch => write!(f, "On Touch"),
            Guidelines::Off => write!(f, "Off"),
        }
    }
}

impl FromStr for Guidelines {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "On" => Ok(Guidelines::On),
            "On Touch" => Ok(Guidelines::OnTouch),
            "Off" => Ok(Guidelines::Off),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn display_round_trips_through_from_str() {
        for mode in Guidelines::iter() {
            assert_eq!(mode.to_string().parse::<Guidelines>(), Ok(mode));
        }
    }
}
