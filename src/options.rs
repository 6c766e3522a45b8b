use ecolor::Color32;
use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::model::{CropShape, Guidelines, ScaleType};
use crate::utils::dip;

/// Returned by [`CropOptions::validate`] when a field is out of range.
///
/// Carries the offending field and the violated bound. Validation stops at
/// the first violation it finds rather than aggregating all of them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid crop options: {field} {reason}")]
pub struct InvalidOptions {
    pub field: &'static str,
    pub reason: &'static str,
}

/// All the options that customize the cropping widget, initialized with
/// default values.
///
/// Fields are public and freely settable by the owning widget; nothing is
/// checked at mutation time, so transient invalid states are fine. Call
/// [`validate`](Self::validate) before handing the options to rendering or
/// interaction logic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropOptions {
    /// The shape of the cropping window.
    pub crop_shape: CropShape,

    /// A crop window edge snaps to the corresponding bounding box edge when
    /// it comes within this distance, in pixels.
    pub snap_radius: f32,

    /// The radius of the touchable area around a drag handle, in pixels.
    pub touch_radius: f32,

    /// When to draw the guidelines inside the crop window.
    pub guidelines: Guidelines,

    /// The initial scale type of the image in the widget.
    pub scale_type: ScaleType,

    /// Whether to draw the crop overlay (crop window plus dimmed background).
    /// May be disabled for animations or frame transitions.
    pub show_crop_overlay: bool,

    /// Whether to show the built-in progress indicator while loading or
    /// cropping is in progress. Disable to provide a custom one.
    pub show_progress_bar: bool,

    /// Whether auto-zoom is enabled.
    pub auto_zoom_enabled: bool,

    /// The maximum zoom allowed during cropping.
    pub max_zoom: i32,

    /// The initial crop window padding from the image borders, as a fraction
    /// of the image dimensions. Must lie in `[0.0, 0.5)`.
    pub initial_crop_window_padding_ratio: f32,

    /// Whether the width-to-height aspect ratio is fixed or free to change.
    pub fix_aspect_ratio: bool,

    /// The X value of the fixed aspect ratio.
    pub aspect_ratio_x: i32,

    /// The Y value of the fixed aspect ratio.
    pub aspect_ratio_y: i32,

    /// The thickness of the crop window border line, in pixels.
    pub border_line_thickness: f32,

    pub border_line_color: Color32,

    /// The thickness of the corner lines, in pixels.
    pub border_corner_thickness: f32,

    /// The offset of the corner lines from the crop window border, in pixels.
    pub border_corner_offset: f32,

    /// The length of a corner line away from the corner, in pixels.
    pub border_corner_length: f32,

    pub border_corner_color: Color32,

    /// The thickness of the guideline lines, in pixels.
    pub guidelines_thickness: f32,

    pub guidelines_color: Color32,

    /// The color of the overlay covering the image parts outside the crop
    /// window.
    pub background_color: Color32,

    /// The minimum width the crop window is allowed to be, in pixels.
    pub min_crop_window_width: f32,

    /// The minimum height the crop window is allowed to be, in pixels.
    pub min_crop_window_height: f32,

    /// The minimum width of the resulting cropped image. Affects the crop
    /// window limits.
    pub min_crop_result_width: f32,

    /// The minimum height of the resulting cropped image. Affects the crop
    /// window limits.
    pub min_crop_result_height: f32,

    /// The maximum width of the resulting cropped image. Affects the crop
    /// window limits.
    pub max_crop_result_width: f32,

    /// The maximum height of the resulting cropped image. Affects the crop
    /// window limits.
    pub max_crop_result_height: f32,
}

impl CropOptions {
    /// Builds the default options for a display with the given density scale
    /// factor. Dimension defaults are defined in device-independent pixels
    /// and converted to physical pixels here; construction never fails.
    pub fn new(scale_factor: f32) -> Self {
        trace!("building default crop options at scale factor {scale_factor}");

        Self {
            crop_shape: CropShape::Rectangle,
            snap_radius: dip(3.0, scale_factor),
            touch_radius: dip(24.0, scale_factor),
            guidelines: Guidelines::OnTouch,
            scale_type: ScaleType::FitCenter,
            show_crop_overlay: true,
            show_progress_bar: true,
            auto_zoom_enabled: true,
            max_zoom: 4,
            initial_crop_window_padding_ratio: 0.1,
            fix_aspect_ratio: false,
            aspect_ratio_x: 1,
            aspect_ratio_y: 1,
            border_line_thickness: dip(3.0, scale_factor),
            border_line_color: Color32::from_rgba_unmultiplied(255, 255, 255, 170),
            border_corner_thickness: dip(2.0, scale_factor),
            border_corner_offset: dip(5.0, scale_factor),
            border_corner_length: dip(14.0, scale_factor),
            border_corner_color: Color32::WHITE,
            guidelines_thickness: dip(1.0, scale_factor),
            guidelines_color: Color32::from_rgba_unmultiplied(255, 255, 255, 170),
            background_color: Color32::from_black_alpha(119),
            min_crop_window_width: dip(42.0, scale_factor),
            min_crop_window_height: dip(42.0, scale_factor),
            min_crop_result_width: 40.0,
            min_crop_result_height: 40.0,
            max_crop_result_width: 99999.0,
            max_crop_result_height: 99999.0,
        }
    }

    /// Checks that every option is within its valid range.
    ///
    /// Stops at the first violation and returns it; if this returns `Ok`,
    /// all invariants hold simultaneously. Callers must run this before
    /// using the options to drive rendering.
    pub fn validate(&self) -> Result<(), InvalidOptions> {
        let result = self.check();
        if let Err(err) = &result {
            debug!("crop options rejected: {err}");
        }
        result
    }

    fn check(&self) -> Result<(), InvalidOptions> {
        if self.max_zoom < 0 {
            return Err(InvalidOptions {
                field: "max_zoom",
                reason: "cannot be negative",
            });
        }
        if self.touch_radius < 0.0 {
            return Err(InvalidOptions {
                field: "touch_radius",
                reason: "cannot be negative",
            });
        }
        if self.initial_crop_window_padding_ratio < 0.0
            || self.initial_crop_window_padding_ratio >= 0.5
        {
            return Err(InvalidOptions {
                field: "initial_crop_window_padding_ratio",
                reason: "must be in the range [0.0, 0.5)",
            });
        }
        if self.aspect_ratio_x <= 0 {
            return Err(InvalidOptions {
                field: "aspect_ratio_x",
                reason: "must be greater than 0",
            });
        }
        if self.aspect_ratio_y <= 0 {
            return Err(InvalidOptions {
                field: "aspect_ratio_y",
                reason: "must be greater than 0",
            });
        }
        if self.border_line_thickness < 0.0 {
            return Err(InvalidOptions {
                field: "border_line_thickness",
                reason: "cannot be negative",
            });
        }
        if self.border_corner_thickness < 0.0 {
            return Err(InvalidOptions {
                field: "border_corner_thickness",
                reason: "cannot be negative",
            });
        }
        if self.guidelines_thickness < 0.0 {
            return Err(InvalidOptions {
                field: "guidelines_thickness",
                reason: "cannot be negative",
            });
        }
        if self.min_crop_window_width < 0.0 {
            return Err(InvalidOptions {
                field: "min_crop_window_width",
                reason: "cannot be negative",
            });
        }
        if self.min_crop_window_height < 0.0 {
            return Err(InvalidOptions {
                field: "min_crop_window_height",
                reason: "cannot be negative",
            });
        }
        if self.min_crop_result_width < 0.0 {
            return Err(InvalidOptions {
                field: "min_crop_result_width",
                reason: "cannot be negative",
            });
        }
        if self.min_crop_result_height < 0.0 {
            return Err(InvalidOptions {
                field: "min_crop_result_height",
                reason: "cannot be negative",
            });
        }
        if self.max_crop_result_width < self.min_crop_result_width {
            return Err(InvalidOptions {
                field: "max_crop_result_width",
                reason: "cannot be smaller than min_crop_result_width",
            });
        }
        if self.max_crop_result_height < self.min_crop_result_height {
            return Err(InvalidOptions {
                field: "max_crop_result_height",
                reason: "cannot be smaller than min_crop_result_height",
            });
        }
        Ok(())
    }
}

impl Default for CropOptions {
    fn default() -> Self {
        Self::new(1.0)
    }
}
