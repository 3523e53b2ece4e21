//! Recursive state layout
//!
//! Maps a 2^n-dimensional state vector to a nested geometric figure by
//! binary subdivision: the base cell draws two amplitude glyphs stacked in
//! a rectangle with a divider, and every larger vector splits into two
//! halves laid out side by side (even levels) or stacked (odd levels),
//! wrapped in a diamond with an "x" crossbar marking the split. The second
//! branch of every split shrinks by a fixed attenuation so deep recursion
//! stays legible, and each level's frame takes the next border palette
//! color, cycling past six.
//!
//! Levels count from 1 at the base cell, so a 2^k vector is a level-k
//! figure. Sibling frames never overlap: the second half is placed from
//! the measured extent of both halves plus a gap.

use crate::canvas::{Bounds, Canvas, Point};
use crate::color::{Color, BORDER_PALETTE};
use crate::glyph::{draw_amplitude, GlyphStyle};
use crate::{Result, VizError};
use num_complex::Complex64;

/// Options for the recursive layout
#[derive(Debug, Clone)]
pub struct LayoutOptions {
    /// Scale of the outermost level; glyph radii and cell sizes multiply by
    /// this
    pub scale: f64,
    /// Spacing between sibling frames, and the diamond's clearance margin
    pub gap: f64,
    /// Scale multiplier applied to the second half at every split
    pub attenuation: f64,
    /// Amplitude glyph style (its scale field is driven by the recursion)
    pub glyph: GlyphStyle,
    /// Border colors by recursion level, cycled when exhausted
    pub palette: Vec<Color>,
    /// Font size for step labels
    pub label_size: f64,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            scale: 1.0,
            gap: 0.1,
            attenuation: 0.9,
            glyph: GlyphStyle::default(),
            palette: BORDER_PALETTE.to_vec(),
            label_size: 7.0,
        }
    }
}

impl LayoutOptions {
    fn level_color(&self, level: u32) -> Color {
        self.palette[(level as usize - 1) % self.palette.len()]
    }
}

/// Summary of one drawn state figure
#[derive(Debug, Clone, Copy)]
pub struct StateFigure {
    /// Frame bounding box, including any label marker
    pub bounds: Bounds,
    /// Number of amplitude glyph draws (one per basis state)
    pub glyphs: usize,
    /// How many glyphs actually produced ink (magnitude ≥ tolerance)
    pub drawn: usize,
    /// Number of binary-split decorations (dividers and crossbars)
    pub splits: usize,
}

/// Draw a full state vector as a nested figure
///
/// `anchor` is the location of the first amplitude of the first half; the
/// figure grows rightward and downward from there. An optional `label` is
/// placed under the figure, with an invisible marker past the text so the
/// canvas allocates room for it (text extents don't count toward bounds).
///
/// # Errors
/// Returns [`VizError::InvalidStateVectorLength`] unless the length is a
/// power of two of at least 2.
pub fn draw_statevector(
    canvas: &mut Canvas,
    state: &[Complex64],
    anchor: Point,
    label: Option<&str>,
    opts: &LayoutOptions,
) -> Result<StateFigure> {
    validate_length(state.len())?;

    let node = draw_node(canvas, state, anchor, opts.scale, opts);
    let mut bounds = node.bounds;

    if let Some(text) = label {
        let center_x = bounds.center().x;
        let text_anchor = Point::new(center_x, bounds.min_y - opts.scale);
        let marker = Point::new(center_x, bounds.min_y - 2.0 * opts.scale);
        canvas.text(text_anchor, text, opts.label_size);
        canvas.marker(marker);
        bounds.include(text_anchor);
        bounds.include(marker);
    }

    Ok(StateFigure {
        bounds,
        glyphs: node.glyphs,
        drawn: node.drawn,
        splits: node.splits,
    })
}

fn validate_length(len: usize) -> Result<()> {
    if len < 2 || !len.is_power_of_two() {
        return Err(VizError::InvalidStateVectorLength { len });
    }
    Ok(())
}

struct Node {
    bounds: Bounds,
    glyphs: usize,
    drawn: usize,
    splits: usize,
}

fn draw_node(
    canvas: &mut Canvas,
    amps: &[Complex64],
    anchor: Point,
    scale: f64,
    opts: &LayoutOptions,
) -> Node {
    if amps.len() == 2 {
        return draw_base_cell(canvas, amps, anchor, scale, opts);
    }

    let half = amps.len() / 2;
    let level = amps.len().trailing_zeros();
    let inner_scale = scale * opts.attenuation;

    let first = draw_node(canvas, &amps[..half], anchor, scale, opts);
    let second_rel = extent(half, inner_scale, opts);
    let second_anchor = sibling_anchor(level, anchor, first.bounds, second_rel, scale, opts);
    let second = draw_node(canvas, &amps[half..], second_anchor, inner_scale, opts);

    let union = Bounds::union(first.bounds, second.bounds);
    let bounds = draw_split_frame(canvas, union, scale, opts.level_color(level), opts);

    Node {
        bounds,
        glyphs: first.glyphs + second.glyphs,
        drawn: first.drawn + second.drawn,
        splits: first.splits + second.splits + 1,
    }
}

/// Base cell: two glyphs stacked in a rectangle with a divider
fn draw_base_cell(
    canvas: &mut Canvas,
    amps: &[Complex64],
    anchor: Point,
    scale: f64,
    opts: &LayoutOptions,
) -> Node {
    let s = scale;
    let color = opts.level_color(1);
    let style = opts.glyph.scaled(s);

    let mut drawn = 0;
    if draw_amplitude(canvas, amps[0], anchor, &style) {
        drawn += 1;
    }
    if draw_amplitude(canvas, amps[1], anchor.offset(0.0, -2.0 * s), &style) {
        drawn += 1;
    }

    // Divider between the two basis states
    canvas.segment(
        anchor.offset(-0.8 * s, -s),
        anchor.offset(0.8 * s, -s),
        color,
        0.015 * s,
    );

    // Rectangle frame; glyphs of magnitude 1 touch its sides
    let corners = [
        anchor.offset(-s, s),
        anchor.offset(s, s),
        anchor.offset(s, -3.0 * s),
        anchor.offset(-s, -3.0 * s),
    ];
    for i in 0..4 {
        canvas.segment(corners[i], corners[(i + 1) % 4], color, 0.02 * s);
    }

    Node {
        bounds: base_bounds(anchor, s),
        glyphs: 2,
        drawn,
        splits: 1,
    }
}

/// Enclosing diamond with its "x" crossbar; returns the frame's bounds
fn draw_split_frame(
    canvas: &mut Canvas,
    content: Bounds,
    scale: f64,
    color: Color,
    opts: &LayoutOptions,
) -> Bounds {
    let c = content.center();
    let d = (content.width() + content.height()) / 2.0 + opts.gap * scale;

    let right = Point::new(c.x + d, c.y);
    let top = Point::new(c.x, c.y + d);
    let left = Point::new(c.x - d, c.y);
    let bottom = Point::new(c.x, c.y - d);

    for (a, b) in [(right, top), (top, left), (left, bottom), (bottom, right)] {
        canvas.segment(a, b, color, 0.05 * scale);
    }

    // The "x": midpoints of opposite edges
    let h = d / 2.0;
    canvas.segment(
        Point::new(c.x + h, c.y + h),
        Point::new(c.x - h, c.y - h),
        color,
        0.02 * scale,
    );
    canvas.segment(
        Point::new(c.x - h, c.y + h),
        Point::new(c.x + h, c.y - h),
        color,
        0.02 * scale,
    );

    Bounds {
        min_x: c.x - d,
        max_x: c.x + d,
        min_y: c.y - d,
        max_y: c.y + d,
    }
}

/// Anchor for the second half of a split
///
/// Even levels pack sideways, odd levels stack downward; the placement is
/// computed from the first half's actual bounds and the second half's
/// measured extent so siblings clear each other by `gap`.
fn sibling_anchor(
    level: u32,
    anchor: Point,
    first: Bounds,
    second_rel: Bounds,
    scale: f64,
    opts: &LayoutOptions,
) -> Point {
    let gap = opts.gap * scale;
    if level % 2 == 0 {
        Point::new(first.max_x + gap - second_rel.min_x, anchor.y)
    } else {
        Point::new(anchor.x, first.min_y - gap - second_rel.max_y)
    }
}

fn base_bounds(anchor: Point, s: f64) -> Bounds {
    Bounds {
        min_x: anchor.x - s,
        max_x: anchor.x + s,
        min_y: anchor.y - 3.0 * s,
        max_y: anchor.y + s,
    }
}

/// Extent a figure of `len` amplitudes would cover, relative to an anchor
/// at the origin
///
/// Mirrors the draw recursion exactly, without drawing.
fn extent(len: usize, scale: f64, opts: &LayoutOptions) -> Bounds {
    if len == 2 {
        return base_bounds(Point::new(0.0, 0.0), scale);
    }

    let half = len / 2;
    let level = len.trailing_zeros();
    let inner_scale = scale * opts.attenuation;

    let first = extent(half, scale, opts);
    let second_rel = extent(half, inner_scale, opts);
    let origin = Point::new(0.0, 0.0);
    let a2 = sibling_anchor(level, origin, first, second_rel, scale, opts);
    let second = second_rel.translated(a2.x, a2.y);

    let union = Bounds::union(first, second);
    let c = union.center();
    let d = (union.width() + union.height()) / 2.0 + opts.gap * scale;
    Bounds {
        min_x: c.x - d,
        max_x: c.x + d,
        min_y: c.y - d,
        max_y: c.y + d,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Primitive;
    use approx::assert_relative_eq;

    fn uniform_state(len: usize) -> Vec<Complex64> {
        let amp = 1.0 / (len as f64).sqrt();
        vec![Complex64::new(amp, 0.0); len]
    }

    fn disk_centers(canvas: &Canvas) -> Vec<Point> {
        canvas
            .primitives()
            .iter()
            .filter_map(|p| match p {
                Primitive::Disk { center, .. } => Some(*center),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_glyph_and_split_counts() {
        for n in 1..=5usize {
            let len = 1 << n;
            let mut canvas = Canvas::new();
            let figure = draw_statevector(
                &mut canvas,
                &uniform_state(len),
                Point::new(0.0, 0.0),
                None,
                &LayoutOptions::default(),
            )
            .unwrap();
            assert_eq!(figure.glyphs, len, "glyphs for len {}", len);
            assert_eq!(figure.splits, len - 1, "splits for len {}", len);
            assert_eq!(figure.drawn, len);
            assert_eq!(disk_centers(&canvas).len(), len);
        }
    }

    #[test]
    fn test_invalid_lengths_fail_fast() {
        for len in [0usize, 1, 3, 6, 12] {
            let state = vec![Complex64::new(1.0, 0.0); len];
            let mut canvas = Canvas::new();
            let result = draw_statevector(
                &mut canvas,
                &state,
                Point::new(0.0, 0.0),
                None,
                &LayoutOptions::default(),
            );
            assert!(
                matches!(result, Err(VizError::InvalidStateVectorLength { .. })),
                "len {} must be rejected",
                len
            );
            // Nothing was drawn before the failure
            assert!(canvas.is_empty());
        }
    }

    #[test]
    fn test_zero_amplitudes_skip_ink() {
        let mut state = vec![Complex64::new(0.0, 0.0); 4];
        state[0] = Complex64::new(1.0, 0.0);

        let mut canvas = Canvas::new();
        let figure = draw_statevector(
            &mut canvas,
            &state,
            Point::new(0.0, 0.0),
            None,
            &LayoutOptions::default(),
        )
        .unwrap();

        assert_eq!(figure.glyphs, 4);
        assert_eq!(figure.drawn, 1);
        assert_eq!(disk_centers(&canvas).len(), 1);
    }

    #[test]
    fn test_disk_centers_are_distinct() {
        let mut canvas = Canvas::new();
        draw_statevector(
            &mut canvas,
            &uniform_state(16),
            Point::new(0.0, 0.0),
            None,
            &LayoutOptions::default(),
        )
        .unwrap();

        let centers = disk_centers(&canvas);
        for i in 0..centers.len() {
            for j in (i + 1)..centers.len() {
                let dx = centers[i].x - centers[j].x;
                let dy = centers[i].y - centers[j].y;
                assert!(
                    (dx * dx + dy * dy).sqrt() > 0.5,
                    "glyphs {} and {} overlap",
                    i,
                    j
                );
            }
        }
    }

    #[test]
    fn test_second_half_attenuates() {
        let mut canvas = Canvas::new();
        draw_statevector(
            &mut canvas,
            &uniform_state(4),
            Point::new(0.0, 0.0),
            None,
            &LayoutOptions::default(),
        )
        .unwrap();

        let radii: Vec<f64> = canvas
            .primitives()
            .iter()
            .filter_map(|p| match p {
                Primitive::Disk { radius, .. } => Some(*radius),
                _ => None,
            })
            .collect();
        assert_eq!(radii.len(), 4);
        assert_relative_eq!(radii[0], radii[1], epsilon = 1e-12);
        assert_relative_eq!(radii[2], radii[0] * 0.9, epsilon = 1e-12);
        assert_relative_eq!(radii[3], radii[2], epsilon = 1e-12);
    }

    #[test]
    fn test_levels_take_distinct_border_colors() {
        let opts = LayoutOptions::default();
        let mut canvas = Canvas::new();
        draw_statevector(&mut canvas, &uniform_state(4), Point::new(0.0, 0.0), None, &opts)
            .unwrap();

        let has_color = |c: Color| {
            canvas.primitives().iter().any(|p| match p {
                Primitive::Segment { color, .. } => *color == c,
                _ => false,
            })
        };
        // Base cells use level 1, the enclosing diamond level 2
        assert!(has_color(opts.palette[0]));
        assert!(has_color(opts.palette[1]));
    }

    #[test]
    fn test_palette_cycles_beyond_six_levels() {
        // 7 qubits = level 7 at the top: color index wraps to palette[0]
        let opts = LayoutOptions::default();
        assert_eq!(opts.level_color(7), opts.palette[0]);
        assert_eq!(opts.level_color(8), opts.palette[1]);
    }

    #[test]
    fn test_label_reserves_space_below() {
        let state = uniform_state(2);
        let opts = LayoutOptions::default();

        let mut plain = Canvas::new();
        let unlabeled =
            draw_statevector(&mut plain, &state, Point::new(0.0, 0.0), None, &opts).unwrap();

        let mut labeled = Canvas::new();
        let figure =
            draw_statevector(&mut labeled, &state, Point::new(0.0, 0.0), Some("|0>"), &opts)
                .unwrap();

        assert!(figure.bounds.min_y < unlabeled.bounds.min_y);
        assert!(labeled.bounds().unwrap().min_y < plain.bounds().unwrap().min_y);
        assert!(labeled
            .primitives()
            .iter()
            .any(|p| matches!(p, Primitive::Marker { .. })));
    }

    #[test]
    fn test_even_levels_pack_sideways_odd_stack_down() {
        let opts = LayoutOptions::default();

        // Level 2 (len 4): second pair sits to the right
        let mut canvas = Canvas::new();
        draw_statevector(&mut canvas, &uniform_state(4), Point::new(0.0, 0.0), None, &opts)
            .unwrap();
        let centers = disk_centers(&canvas);
        assert!(centers[2].x > centers[0].x);
        assert_relative_eq!(centers[2].y, centers[0].y, epsilon = 1e-9);

        // Level 3 (len 8): second quad sits below
        let mut canvas = Canvas::new();
        draw_statevector(&mut canvas, &uniform_state(8), Point::new(0.0, 0.0), None, &opts)
            .unwrap();
        let centers = disk_centers(&canvas);
        assert!(centers[4].y < centers[0].y);
        assert_relative_eq!(centers[4].x, centers[0].x, epsilon = 1e-9);
    }

    #[test]
    fn test_figure_bounds_contain_every_disk() {
        let mut canvas = Canvas::new();
        let figure = draw_statevector(
            &mut canvas,
            &uniform_state(32),
            Point::new(0.0, 0.0),
            None,
            &LayoutOptions::default(),
        )
        .unwrap();

        for center in disk_centers(&canvas) {
            assert!(center.x >= figure.bounds.min_x && center.x <= figure.bounds.max_x);
            assert!(center.y >= figure.bounds.min_y && center.y <= figure.bounds.max_y);
        }
    }
}
