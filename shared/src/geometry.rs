//! Sector layout shared by the canvas renderer and the spin math.
//!
//! Angles follow the canvas convention: 0° points right and positive angles
//! turn clockwise. The pointer sits at the top (-90°). Sector 0 is centered
//! under the pointer when the wheel has not been rotated.

use std::f64::consts::PI;

pub use crate::prize_selector::segment_degrees;

pub const POINTER_DEGREES: f64 = -90.0;

pub fn start_offset_degrees(sectors: usize) -> f64 {
    POINTER_DEGREES - segment_degrees(sectors) / 2.0
}

pub fn to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

/// `(start, end)` of sector `index` in radians, for a wheel turned by
/// `rotation_degrees`.
pub fn sector_span_radians(index: usize, sectors: usize, rotation_degrees: f64) -> (f64, f64) {
    let segment = segment_degrees(sectors);
    let start = start_offset_degrees(sectors) + index as f64 * segment + rotation_degrees;
    (to_radians(start), to_radians(start + segment))
}

/// Direction of the sector's bisector, where its label is drawn.
pub fn label_angle_radians(index: usize, sectors: usize, rotation_degrees: f64) -> f64 {
    let segment = segment_degrees(sectors);
    to_radians(POINTER_DEGREES + index as f64 * segment + rotation_degrees)
}

/// Index of the sector currently under the top pointer.
pub fn sector_under_pointer(rotation_degrees: f64, sectors: usize) -> usize {
    if sectors == 0 {
        return 0;
    }
    let segment = segment_degrees(sectors);
    let offset = (-rotation_degrees).rem_euclid(360.0);
    ((offset / segment).round() as usize) % sectors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sector_zero_centered_at_pointer() {
        let (start, end) = sector_span_radians(0, 8, 0.0);
        let center = (start + end) / 2.0;
        assert!((center - to_radians(POINTER_DEGREES)).abs() < 1e-12);
        assert_eq!(sector_under_pointer(0.0, 8), 0);
    }

    #[test]
    fn test_sectors_tile_the_circle() {
        let sectors = 8;
        for i in 0..sectors {
            let (_, end) = sector_span_radians(i, sectors, 30.0);
            let (next_start, _) = sector_span_radians(i + 1, sectors, 30.0);
            assert!((end - next_start).abs() < 1e-12);
        }
        let (first_start, _) = sector_span_radians(0, sectors, 30.0);
        let (_, last_end) = sector_span_radians(sectors - 1, sectors, 30.0);
        assert!((last_end - first_start - 2.0 * PI).abs() < 1e-12);
    }

    #[test]
    fn test_clockwise_rotation_brings_later_sector_up() {
        // Turning by (n - i) segments brings sector i under the pointer.
        for i in 0..8 {
            let rotation = ((8 - i) % 8) as f64 * 45.0 + 720.0;
            assert_eq!(sector_under_pointer(rotation, 8), i);
        }
        assert_eq!(sector_under_pointer(-45.0, 8), 1);
    }

    #[test]
    fn test_label_angle_is_sector_center() {
        let (start, end) = sector_span_radians(3, 6, 12.5);
        assert!((label_angle_radians(3, 6, 12.5) - (start + end) / 2.0).abs() < 1e-12);
    }
}
