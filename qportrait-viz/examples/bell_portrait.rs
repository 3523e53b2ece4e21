//! Bell Pair Portrait Example
//!
//! Builds the two-qubit Bell circuit, prints its highlighted text diagram,
//! and renders the step-by-step wavefunction portraits to an SVG file.
//!
//! Run with: cargo run --example bell_portrait

use qportrait_core::{gates, render_diagram, Circuit, QubitId};
use qportrait_sim::Simulator;
use qportrait_viz::{highlight, illustrate, indent, Canvas, IllustrateOptions};
use std::sync::Arc;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut circuit = Circuit::new(2);
    circuit.append(Arc::new(gates::Hadamard), &[QubitId::new(0)])?;
    circuit.append(Arc::new(gates::CNot), &[QubitId::new(0), QubitId::new(1)])?;

    let diagram = render_diagram(&circuit);
    println!("Bell pair circuit:\n");
    println!("{}\n", indent(&highlight(&diagram), 4));

    let states = Simulator::new().state_sequence(&circuit)?;
    let labels: Vec<String> = ["|00⟩", "after H", "after CNOT"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    let mut canvas = Canvas::new();
    let scene = illustrate(
        &mut canvas,
        &states,
        Some(&labels),
        &diagram,
        &IllustrateOptions::default(),
    )?;

    for (i, step) in scene.steps.iter().enumerate() {
        println!(
            "step {}: {} of {} amplitudes inked",
            i, step.drawn, step.glyphs
        );
    }
    println!(
        "figure size: {:.2} x {:.2}",
        scene.figure_size.width, scene.figure_size.height
    );

    std::fs::write("bell_portrait.svg", canvas.to_svg())?;
    println!("wrote bell_portrait.svg");
    Ok(())
}
