/// Converts a device-independent-pixel dimension to physical pixels.
///
/// `scale_factor` is the host display's density scale (1.0 on an unscaled
/// display). This is the only environment-dependent conversion in the crate.
pub fn dip(value: f32, scale_factor: f32) -> f32 {
    value * scale_factor
}
