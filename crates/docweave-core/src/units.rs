//! Measurement units used across OOXML parts
//!
//! WordprocessingML lengths are in twips (1/20 pt), font sizes in half-points,
//! border widths in eighths of a point, and DrawingML extents in EMUs.

/// Twips per inch
pub const TWIPS_PER_INCH: u32 = 1440;
/// Twips per point
pub const TWIPS_PER_POINT: u32 = 20;
/// EMUs per inch
pub const EMU_PER_INCH: u64 = 914_400;
/// EMUs per pixel at 96 DPI
pub const EMU_PER_PIXEL: u64 = 9_525;
/// EMUs per point
pub const EMU_PER_POINT: u64 = 12_700;
/// EMUs per centimetre
pub const EMU_PER_CM: u64 = 360_000;

/// A4 width in twips (210 mm)
pub const A4_WIDTH_TWIPS: u32 = 11_906;
/// A4 height in twips (297 mm)
pub const A4_HEIGHT_TWIPS: u32 = 16_838;
/// One inch margin
pub const INCH_MARGIN_TWIPS: u32 = TWIPS_PER_INCH;

/// Convert points to twips
pub fn points_to_twips(points: f64) -> u32 {
    (points * TWIPS_PER_POINT as f64).round().max(0.0) as u32
}

/// Convert inches to twips
pub fn inches_to_twips(inches: f64) -> u32 {
    (inches * TWIPS_PER_INCH as f64).round().max(0.0) as u32
}

/// Convert centimetres to twips
pub fn cm_to_twips(cm: f64) -> u32 {
    inches_to_twips(cm / 2.54)
}

/// Convert a point size to the half-point value used by `w:sz`
pub fn points_to_half_points(points: f64) -> u32 {
    (points * 2.0).round().max(0.0) as u32
}

/// Convert pixels (96 DPI) to EMUs
pub fn pixels_to_emu(pixels: u32) -> u64 {
    pixels as u64 * EMU_PER_PIXEL
}

/// Convert inches to EMUs
pub fn inches_to_emu(inches: f64) -> u64 {
    (inches * EMU_PER_INCH as f64).round().max(0.0) as u64
}

/// Convert centimetres to EMUs
pub fn cm_to_emu(cm: f64) -> u64 {
    (cm * EMU_PER_CM as f64).round().max(0.0) as u64
}

/// Convert points to EMUs
pub fn points_to_emu(points: f64) -> u64 {
    (points * EMU_PER_POINT as f64).round().max(0.0) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_twips() {
        assert_eq!(points_to_twips(12.0), 240);
        assert_eq!(inches_to_twips(1.0), 1440);
        assert_eq!(cm_to_twips(2.54), 1440);
        assert_eq!(points_to_twips(-3.0), 0);
    }

    #[test]
    fn test_half_points() {
        assert_eq!(points_to_half_points(11.0), 22);
        assert_eq!(points_to_half_points(10.5), 21);
    }

    #[test]
    fn test_emu() {
        assert_eq!(pixels_to_emu(96), EMU_PER_INCH);
        assert_eq!(inches_to_emu(0.5), 457_200);
        assert_eq!(points_to_emu(72.0), EMU_PER_INCH);
        assert_eq!(cm_to_emu(2.54), EMU_PER_INCH);
    }
}
