use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

/// How the image is initially scaled inside the widget.
#[derive(Debug, Clone, PartialEq, Eq, Copy, EnumIter, Serialize, Deserialize)]
pub enum ScaleType {
    /// Scale the image uniformly so it fits entirely, centered.
    FitCenter,
    /// Center the image without scaling.
    Center,
    /// Scale the image uniformly so it fills the widget, centered, cropping overflow.
    CenterCrop,
    /// Like `FitCenter` but never scales up past the image's own size.
    CenterInside,
}

impl Display for ScaleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScaleType::FitCenter => write!(f, "Fit Center"),
            ScaleType::Center => write!(f, "Center"),
            ScaleType::CenterCrop => write!(f, "Center Crop"),
            ScaleType::CenterInside => write!(f, "Center Inside"),
        }
    }
}

impl FromStr for ScaleType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Fit Center" => Ok(ScaleType::FitCenter),
            "Center" => Ok(ScaleType::Center),
            "Center Crop" => Ok(ScaleType::CenterCrop),
            "Center Inside" => Ok(ScaleType::CenterInside),
            _ => Err(()),
        }
    }
}
