//! Wavefunction portraits for quantum circuits
//!
//! Renders the step-by-step state evolution of a quantum circuit as a row
//! of nested geometric figures: every basis-state amplitude becomes a disk
//! whose radius encodes magnitude and whose fill color encodes phase on a
//! cyclic color scale, and the 2^n amplitudes of an n-qubit state are
//! arranged by recursive binary subdivision into nested frames. A companion
//! scheduler partitions two-qubit gate adjacency into vertex-disjoint
//! moment layers by greedy edge coloring.
//!
//! The crate consumes its inputs through narrow interfaces: amplitude
//! slices for states, a plain string for the text diagram it aligns with,
//! and a validated adjacency matrix for scheduling. Drawing goes through an
//! explicit [`Canvas`] handle; there is no ambient global figure.
//!
//! # Example
//! ```
//! use num_complex::Complex64;
//! use qportrait_viz::{draw_statevector, Canvas, LayoutOptions, Point};
//!
//! let s = std::f64::consts::FRAC_1_SQRT_2;
//! let state = [Complex64::new(s, 0.0), Complex64::new(s, 0.0)];
//!
//! let mut canvas = Canvas::new();
//! let figure = draw_statevector(
//!     &mut canvas,
//!     &state,
//!     Point::new(0.0, 0.0),
//!     None,
//!     &LayoutOptions::default(),
//! ).unwrap();
//! assert_eq!(figure.glyphs, 2);
//! ```

pub mod canvas;
pub mod color;
pub mod error;
pub mod glyph;
pub mod highlight;
pub mod hlf;
pub mod layout;
pub mod scene;
pub mod schedule;

pub use canvas::{Bounds, Canvas, FigureSize, Point, Primitive};
pub use color::{border_color, phase_to_unit, Color, CyclicMap, BORDER_PALETTE};
pub use error::VizError;
pub use glyph::{draw_amplitude, GlyphStyle};
pub use highlight::{highlight, indent, HighlightConfig};
pub use hlf::{
    circuit_for_problem, find_interesting_problem, random_problem, solve_problem,
    BruteforceSolution, HiddenLinearFunctionProblem,
};
pub use layout::{draw_statevector, LayoutOptions, StateFigure};
pub use scene::{illustrate, IllustrateOptions, SceneSummary};
pub use schedule::{edge_coloring, AdjacencyMatrix};

/// Type alias for results in qportrait-viz
pub type Result<T> = std::result::Result<T, VizError>;
