//! Sequence composition
//!
//! Places one state figure per simulation step along a shared horizontal
//! axis and sizes the final canvas so the illustration lines up with the
//! text diagram drawn above it. The alignment contract: at the default
//! diagram spacing (5 wire characters between columns) one moment occupies
//! 6 characters of text, and one character corresponds to one plot unit,
//! so steps sit 6.0 plot units apart; the physical figure width is the
//! diagram's character width times a fixed conversion constant, and the
//! height follows the drawn content's aspect ratio.

use crate::canvas::{Bounds, Canvas, FigureSize, Point};
use crate::layout::{draw_statevector, LayoutOptions, StateFigure};
use crate::{Result, VizError};
use num_complex::Complex64;

/// Options for composing a sequence of state figures
#[derive(Debug, Clone)]
pub struct IllustrateOptions {
    /// Horizontal distance between consecutive step anchors, in plot units
    pub moment_spacing: f64,
    /// Nudge the first and last step inward for readability
    pub offset_ends: bool,
    /// Size of the end nudge, in plot units
    pub end_nudge: f64,
    /// Physical figure width per diagram character
    pub char_width: f64,
    /// Layout options applied to every step
    pub layout: LayoutOptions,
}

impl Default for IllustrateOptions {
    fn default() -> Self {
        Self {
            moment_spacing: 6.0,
            offset_ends: false,
            end_nudge: 1.0,
            char_width: 0.1,
            layout: LayoutOptions::default(),
        }
    }
}

impl IllustrateOptions {
    /// Enable the offset-ends mode
    pub fn with_offset_ends(mut self, offset_ends: bool) -> Self {
        self.offset_ends = offset_ends;
        self
    }

    /// Override the moment spacing
    pub fn with_moment_spacing(mut self, spacing: f64) -> Self {
        self.moment_spacing = spacing;
        self
    }
}

/// Summary of a composed scene
#[derive(Debug, Clone)]
pub struct SceneSummary {
    /// Per-step figure summaries, in drawing order
    pub steps: Vec<StateFigure>,
    /// Bounding box of the whole illustration
    pub bounds: Bounds,
    /// The physical size requested from the canvas
    pub figure_size: FigureSize,
}

/// Draw a full state sequence and size the canvas
///
/// `states` is the simulation trajectory, index 0 being the initial basis
/// state; `labels`, when given, must have one entry per state. `diagram`
/// is the already-rendered text diagram of the circuit and is used only to
/// measure how wide one of its lines is.
///
/// # Errors
/// Fails on an empty sequence, mismatched label count, or any state whose
/// length is not a supported power of two.
pub fn illustrate<S: AsRef<[Complex64]>>(
    canvas: &mut Canvas,
    states: &[S],
    labels: Option<&[String]>,
    diagram: &str,
    opts: &IllustrateOptions,
) -> Result<SceneSummary> {
    if states.is_empty() {
        return Err(VizError::EmptySequence);
    }
    if let Some(labels) = labels {
        if labels.len() != states.len() {
            return Err(VizError::LabelCountMismatch {
                labels: labels.len(),
                steps: states.len(),
            });
        }
    }

    let last = states.len() - 1;
    let mut steps = Vec::with_capacity(states.len());
    let mut bounds: Option<Bounds> = None;

    for (i, state) in states.iter().enumerate() {
        let mut x = i as f64 * opts.moment_spacing;
        if opts.offset_ends {
            if i == 0 {
                x += opts.end_nudge;
            }
            if i == last {
                x -= opts.end_nudge;
            }
        }

        let label = labels.map(|l| l[i].as_str());
        let figure =
            draw_statevector(canvas, state.as_ref(), Point::new(x, 0.0), label, &opts.layout)?;

        bounds = Some(match bounds {
            Some(b) => Bounds::union(b, figure.bounds),
            None => figure.bounds,
        });
        steps.push(figure);
    }

    let bounds = bounds.expect("at least one step was drawn");
    let figure_size = figure_size_for(bounds, diagram, opts);
    canvas.request_figure_size(figure_size);

    Ok(SceneSummary {
        steps,
        bounds,
        figure_size,
    })
}

/// Measure the character width of one line of a text diagram
pub fn measure_diagram_width(diagram: &str) -> usize {
    diagram.lines().map(|l| l.chars().count()).max().unwrap_or(0)
}

fn figure_size_for(bounds: Bounds, diagram: &str, opts: &IllustrateOptions) -> FigureSize {
    let chars = measure_diagram_width(diagram);
    // Without a diagram to align against, fall back to one character per
    // plot unit of content
    let width = if chars > 0 {
        chars as f64 * opts.char_width
    } else {
        bounds.width() * opts.char_width
    };
    let aspect = if bounds.width() > 0.0 {
        bounds.height() / bounds.width()
    } else {
        1.0
    };
    FigureSize {
        width,
        height: width * aspect,
    }
}
