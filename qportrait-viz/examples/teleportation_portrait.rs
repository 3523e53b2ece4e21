//! Quantum Teleportation Portrait Example
//!
//! The textbook teleportation protocol with the measurement deferred:
//! Alice and Bob share a Bell pair, a message qubit is prepared with a
//! fractional X rotation, and the classically-controlled corrections
//! become CNOT and CZ gates. The portraits show the message amplitude
//! migrating onto Bob's qubit moment by moment.
//!
//! Run with: cargo run --example teleportation_portrait

use qportrait_core::{gates, render_diagram, Circuit, QubitId};
use qportrait_sim::Simulator;
use qportrait_viz::{highlight, illustrate, indent, Canvas, IllustrateOptions};
use std::sync::Arc;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let alice = QubitId::new(0);
    let bob = QubitId::new(1);
    let msg = QubitId::new(2);

    let mut circuit = Circuit::new(3);
    circuit.name_qubit(alice, "0 (Ali)")?;
    circuit.name_qubit(bob, "1 (Bob)")?;
    circuit.name_qubit(msg, "2 (Msg)")?;

    // Entangle Alice and Bob first, then prepare the message
    circuit.append(Arc::new(gates::Hadamard), &[alice])?;
    circuit.append(Arc::new(gates::CNot), &[alice, bob])?;
    circuit.append(Arc::new(gates::XPow::new(0.3)), &[msg])?;

    // Bell measurement basis change on Message and Alice
    circuit.append(Arc::new(gates::CNot), &[msg, alice])?;
    circuit.append(Arc::new(gates::Hadamard), &[msg])?;

    // Deferred corrections recover the message on Bob's qubit
    circuit.append(Arc::new(gates::CNot), &[alice, bob])?;
    circuit.append(Arc::new(gates::CZGate), &[msg, bob])?;

    let diagram = render_diagram(&circuit);
    println!("Teleportation circuit:\n");
    println!("{}\n", indent(&highlight(&diagram), 4));

    let states = Simulator::new().state_sequence(&circuit)?;
    let mut canvas = Canvas::new();
    let scene = illustrate(
        &mut canvas,
        &states,
        None,
        &diagram,
        &IllustrateOptions::default().with_offset_ends(true),
    )?;

    println!("{} portrait steps drawn", scene.steps.len());
    std::fs::write("teleportation_portrait.svg", canvas.to_svg())?;
    println!("wrote teleportation_portrait.svg");
    Ok(())
}
