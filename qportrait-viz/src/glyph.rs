//! Amplitude glyphs
//!
//! One complex amplitude is drawn as a filled disk plus a dial: the disk
//! radius is the magnitude (times the ambient scale), the fill color comes
//! from the phase via the cyclic color scale, and the dial is a line from
//! the disk center to the point at the phase angle on the disk rim. An
//! amplitude below tolerance draws nothing at all; treating near-zero
//! entries as absent avoids degenerate zero-radius shapes.

use crate::canvas::{Canvas, Point};
use crate::color::{Color, CyclicMap};
use num_complex::Complex64;

/// Magnitudes below this draw nothing
pub const AMPLITUDE_TOL: f64 = 1e-6;

/// Style for amplitude glyphs
#[derive(Debug, Clone)]
pub struct GlyphStyle {
    /// Multiplies the disk radius; nested layouts shrink this
    pub scale: f64,
    /// Skip threshold for near-zero magnitudes
    pub tol: f64,
    /// Fill opacity of the disk
    pub alpha: f64,
    /// Phase color scale
    pub colors: CyclicMap,
}

impl Default for GlyphStyle {
    fn default() -> Self {
        Self {
            scale: 1.0,
            tol: AMPLITUDE_TOL,
            alpha: 0.8,
            colors: CyclicMap::twilight(),
        }
    }
}

impl GlyphStyle {
    /// This style with a different scale
    pub fn scaled(&self, scale: f64) -> Self {
        Self {
            scale,
            ..self.clone()
        }
    }
}

/// Draw one amplitude at a location
///
/// Returns whether anything was drawn; magnitudes below `style.tol` are
/// skipped by contract, not silently lost. The caller guarantees a sensible
/// location; there is nothing to validate here.
pub fn draw_amplitude(
    canvas: &mut Canvas,
    amplitude: Complex64,
    location: Point,
    style: &GlyphStyle,
) -> bool {
    let r = amplitude.norm() * style.scale;
    if r < style.tol {
        return false;
    }
    let phase = amplitude.arg();

    canvas.disk(location, r, style.colors.for_phase(phase), style.alpha);

    let dial_end = location.offset(r * phase.cos(), r * phase.sin());
    canvas.segment(location, dial_end, Color::BLACK, (r * 0.08).max(0.01));
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Primitive;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_near_zero_amplitude_draws_nothing() {
        let mut canvas = Canvas::new();
        let drawn = draw_amplitude(
            &mut canvas,
            Complex64::new(1e-9, 0.0),
            Point::new(0.0, 0.0),
            &GlyphStyle::default(),
        );
        assert!(!drawn);
        assert!(canvas.is_empty());
    }

    #[test]
    fn test_glyph_emits_one_disk_one_dial() {
        let mut canvas = Canvas::new();
        let drawn = draw_amplitude(
            &mut canvas,
            Complex64::new(0.6, 0.0),
            Point::new(0.0, 0.0),
            &GlyphStyle::default(),
        );
        assert!(drawn);
        assert_eq!(canvas.len(), 2);
        assert!(matches!(canvas.primitives()[0], Primitive::Disk { .. }));
        assert!(matches!(canvas.primitives()[1], Primitive::Segment { .. }));
    }

    #[test]
    fn test_disk_radius_scales_with_magnitude() {
        let mut canvas = Canvas::new();
        let style = GlyphStyle::default().scaled(0.5);
        draw_amplitude(&mut canvas, Complex64::new(0.0, 0.8), Point::new(1.0, 1.0), &style);

        match &canvas.primitives()[0] {
            Primitive::Disk { radius, .. } => assert_relative_eq!(*radius, 0.4, epsilon = 1e-12),
            other => panic!("expected disk, got {:?}", other),
        }
    }

    #[test]
    fn test_dial_points_along_phase() {
        let mut canvas = Canvas::new();
        // Purely imaginary amplitude: phase π/2, dial straight up
        draw_amplitude(
            &mut canvas,
            Complex64::from_polar(0.5, FRAC_PI_2),
            Point::new(2.0, 3.0),
            &GlyphStyle::default(),
        );

        match &canvas.primitives()[1] {
            Primitive::Segment { from, to, .. } => {
                assert_relative_eq!(from.x, 2.0, epsilon = 1e-12);
                assert_relative_eq!(to.x, 2.0, epsilon = 1e-9);
                assert_relative_eq!(to.y, 3.5, epsilon = 1e-9);
            },
            other => panic!("expected segment, got {:?}", other),
        }
    }

    #[test]
    fn test_phase_zero_and_pi_share_hue_family() {
        let style = GlyphStyle::default();
        let at_zero = style.colors.for_phase(0.0);
        let near_pi = style.colors.for_phase(std::f64::consts::PI - 1e-9);
        let near_neg_pi = style.colors.for_phase(-std::f64::consts::PI + 1e-9);
        // Phase +π and −π approach the same color from both sides
        assert!((near_pi.r - near_neg_pi.r).abs() < 1e-6);
        // And it differs from the phase-0 color
        assert!((at_zero.r - near_pi.r).abs() > 0.05);
    }
}
