use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

/// The shape of the cropping window overlay.
#[derive(Debug, Clone, PartialEq, Eq, Copy, EnumIter, Serialize, Deserialize)]
pub enum CropShape {
    Rectangle,
    Oval,
}

impl Display for CropShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CropShape::Rectangle => write!(f, "Rectangle"),
            CropShape::Oval => write!(f, "Oval"),
        }
    }
}

impl FromStr for CropShape {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Rectangle" => Ok(CropShape::Rectangle),
            "Oval" => Ok(CropShape::Oval),
            _ => Err(()),
        }
    }
}
