//! Plain-text circuit diagrams
//!
//! Renders a circuit one line per qubit, one column per moment:
//!
//! ```text
//! q0: ─────H─────●─────
//!                │
//! q1: ───────────⊕─────
//! ```
//!
//! The default horizontal spacing is wide (5 wire characters between
//! columns) so that a row of the text diagram and a row of wavefunction
//! portraits drawn underneath share the same horizontal rhythm.

use crate::{Circuit, GateOp, QubitId};
use std::fmt;

/// Rendering style for wires and gate markers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiagramStyle {
    /// Unicode box-drawing characters (default)
    #[default]
    Unicode,
    /// ASCII-only characters for maximum compatibility
    Ascii,
}

/// Configuration for text diagram rendering
#[derive(Debug, Clone)]
pub struct DiagramConfig {
    /// Number of wire characters between moment columns
    pub horizontal_spacing: usize,
    /// Show qubit labels (`q0: `, or the circuit's qubit names)
    pub show_labels: bool,
    /// Rendering style
    pub style: DiagramStyle,
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            horizontal_spacing: 5,
            show_labels: true,
            style: DiagramStyle::Unicode,
        }
    }
}

impl DiagramConfig {
    /// Compact configuration with single-character spacing
    pub fn compact() -> Self {
        Self {
            horizontal_spacing: 1,
            ..Default::default()
        }
    }

    /// ASCII-only configuration
    pub fn ascii_only() -> Self {
        Self {
            style: DiagramStyle::Ascii,
            ..Default::default()
        }
    }

    fn wire_char(&self) -> char {
        match self.style {
            DiagramStyle::Unicode => '─',
            DiagramStyle::Ascii => '-',
        }
    }

    fn vertical_char(&self) -> char {
        match self.style {
            DiagramStyle::Unicode => '│',
            DiagramStyle::Ascii => '|',
        }
    }

    fn control_char(&self) -> char {
        match self.style {
            DiagramStyle::Unicode => '●',
            DiagramStyle::Ascii => '@',
        }
    }

    fn target_str(&self) -> &'static str {
        match self.style {
            DiagramStyle::Unicode => "⊕",
            DiagramStyle::Ascii => "X",
        }
    }
}

/// Rendered diagram with metadata
#[derive(Debug, Clone)]
pub struct RenderedDiagram {
    /// The text representation
    pub text: String,
    /// Maximum line width in characters
    pub width: usize,
    /// Number of moment columns
    pub columns: usize,
    /// Number of qubit lines
    pub qubits: usize,
}

impl fmt::Display for RenderedDiagram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Render a circuit to a text diagram with default configuration
pub fn render_diagram(circuit: &Circuit) -> String {
    render_diagram_with_config(circuit, &DiagramConfig::default())
}

/// Render a circuit with custom configuration
pub fn render_diagram_with_config(circuit: &Circuit, config: &DiagramConfig) -> String {
    DiagramRenderer::new(circuit, config).render().text
}

/// Render with full metadata
pub fn render_diagram_detailed(circuit: &Circuit, config: &DiagramConfig) -> RenderedDiagram {
    DiagramRenderer::new(circuit, config).render()
}

struct DiagramRenderer<'a> {
    circuit: &'a Circuit,
    config: &'a DiagramConfig,
    label_width: usize,
}

/// What to draw at one qubit/moment cell
enum Cell {
    Empty,
    Symbol(String),
    Crossing,
}

impl<'a> DiagramRenderer<'a> {
    fn new(circuit: &'a Circuit, config: &'a DiagramConfig) -> Self {
        let label_width = if config.show_labels {
            (0..circuit.num_qubits())
                .map(|q| circuit.qubit_name(QubitId::new(q)).chars().count() + 2)
                .max()
                .unwrap_or(0)
        } else {
            0
        };
        Self {
            circuit,
            config,
            label_width,
        }
    }

    fn render(&self) -> RenderedDiagram {
        let num_qubits = self.circuit.num_qubits();
        let mut lines: Vec<String> = vec![String::new(); num_qubits];
        // Spacer rows between qubit wires carry the vertical connectors of
        // multi-qubit gates
        let mut spacers: Vec<String> = vec![String::new(); num_qubits.saturating_sub(1)];

        if self.config.show_labels {
            for (q, line) in lines.iter_mut().enumerate() {
                let name = self.circuit.qubit_name(QubitId::new(q));
                line.push_str(&format!("{:>width$}", format!("{}: ", name), width = self.label_width));
            }
            for spacer in spacers.iter_mut() {
                spacer.push_str(&" ".repeat(self.label_width));
            }
        }

        let mut columns = 0;
        for moment in self.circuit.moments() {
            let cells = self.moment_cells(moment);
            let links = self.moment_links(moment);
            let col_width = cells
                .iter()
                .map(|c| match c {
                    Cell::Symbol(s) => s.chars().count(),
                    _ => 1,
                })
                .max()
                .unwrap_or(1);

            let wire = self.config.wire_char();
            for (q, line) in lines.iter_mut().enumerate() {
                for _ in 0..self.config.horizontal_spacing {
                    line.push(wire);
                }
                let content = match &cells[q] {
                    Cell::Empty => wire.to_string().repeat(col_width),
                    Cell::Symbol(s) => center_on_wire(s, col_width, wire),
                    Cell::Crossing => {
                        center_on_wire(&self.config.vertical_char().to_string(), col_width, wire)
                    },
                };
                line.push_str(&content);
            }
            for (q, spacer) in spacers.iter_mut().enumerate() {
                for _ in 0..self.config.horizontal_spacing {
                    spacer.push(' ');
                }
                let content = if links[q] {
                    center_on_wire(&self.config.vertical_char().to_string(), col_width, ' ')
                } else {
                    " ".repeat(col_width)
                };
                spacer.push_str(&content);
            }
            columns += 1;
        }

        // Trailing wire
        let wire = self.config.wire_char();
        for line in &mut lines {
            for _ in 0..self.config.horizontal_spacing {
                line.push(wire);
            }
        }

        let mut out_lines: Vec<String> = Vec::with_capacity(2 * num_qubits - 1);
        for q in 0..num_qubits {
            out_lines.push(lines[q].clone());
            if q + 1 < num_qubits {
                out_lines.push(spacers[q].trim_end().to_string());
            }
        }
        let width = out_lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);

        RenderedDiagram {
            text: out_lines.join("\n"),
            width,
            columns,
            qubits: num_qubits,
        }
    }

    /// Per-qubit cell contents for one moment
    fn moment_cells(&self, moment: &crate::Moment) -> Vec<Cell> {
        let num_qubits = self.circuit.num_qubits();
        let mut cells: Vec<Cell> = (0..num_qubits).map(|_| Cell::Empty).collect();

        for op in moment.operations() {
            match op.qubits() {
                [q] => cells[q.index()] = Cell::Symbol(op.gate().label()),
                [a, b] => {
                    let (sym_a, sym_b) = self.two_qubit_symbols(op);
                    cells[a.index()] = Cell::Symbol(sym_a);
                    cells[b.index()] = Cell::Symbol(sym_b);
                    let (lo, hi) = (a.index().min(b.index()), a.index().max(b.index()));
                    for q in (lo + 1)..hi {
                        if matches!(cells[q], Cell::Empty) {
                            cells[q] = Cell::Crossing;
                        }
                    }
                },
                _ => {
                    for q in op.qubits() {
                        cells[q.index()] = Cell::Symbol(op.gate().label());
                    }
                },
            }
        }
        cells
    }

    /// Which spacer rows (between qubit q and q+1) carry a vertical link
    fn moment_links(&self, moment: &crate::Moment) -> Vec<bool> {
        let num_qubits = self.circuit.num_qubits();
        let mut links = vec![false; num_qubits.saturating_sub(1)];
        for op in moment.operations() {
            if op.qubits().len() >= 2 {
                let indices: Vec<usize> = op.qubits().iter().map(|q| q.index()).collect();
                let lo = *indices.iter().min().expect("non-empty");
                let hi = *indices.iter().max().expect("non-empty");
                for link in links.iter_mut().take(hi).skip(lo) {
                    *link = true;
                }
            }
        }
        links
    }

    fn two_qubit_symbols(&self, op: &GateOp) -> (String, String) {
        let control = self.config.control_char().to_string();
        match op.gate().name() {
            "CNOT" => (control, self.config.target_str().to_string()),
            "CZ" => (control.clone(), control),
            _ => (op.gate().label(), op.gate().label()),
        }
    }
}

fn center_on_wire(s: &str, width: usize, wire: char) -> String {
    let s_width = s.chars().count();
    if s_width >= width {
        return s.to_string();
    }
    let total = width - s_width;
    let left = total / 2;
    let right = total - left;
    let mut result = String::with_capacity(width);
    for _ in 0..left {
        result.push(wire);
    }
    result.push_str(s);
    for _ in 0..right {
        result.push(wire);
    }
    result
}
