//! Hidden Linear Function Portrait Example
//!
//! Searches for an interesting problem instance, schedules its CZ gates
//! by edge coloring, solves it on the simulator, and illustrates the
//! state evolution of the solving circuit.
//!
//! Run with: cargo run --example hlf_portrait

use qportrait_core::render_diagram;
use qportrait_sim::Simulator;
use qportrait_viz::{
    circuit_for_problem, edge_coloring, find_interesting_problem, highlight, illustrate, indent,
    solve_problem, Canvas, IllustrateOptions,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = StdRng::seed_from_u64(2024);
    let problem = find_interesting_problem(4, 4, &mut rng)?
        .ok_or("no interesting 4-variable instance found")?;

    println!(
        "problem on {} variables, {} edges",
        problem.num_variables(),
        problem.matrix().num_edges()
    );
    for (i, layer) in edge_coloring(problem.matrix()).iter().enumerate() {
        println!("  layer {}: {:?}", i, layer);
    }

    let solved = problem.bruteforce_solve();
    println!(
        "subspace size {}, {} valid solutions",
        solved.subspace.len(),
        solved.solutions.len()
    );

    let circuit = circuit_for_problem(&problem)?;
    let diagram = render_diagram(&circuit);
    println!("\nSolving circuit:\n");
    println!("{}\n", indent(&highlight(&diagram), 4));

    let z = solve_problem(&problem, &mut rng)?;
    println!(
        "sampled z = {:?}, valid: {}",
        z,
        problem.is_solution(&z, &solved.subspace)
    );

    let states = Simulator::new().state_sequence(&circuit)?;
    let mut canvas = Canvas::new();
    let scene = illustrate(
        &mut canvas,
        &states,
        None,
        &diagram,
        &IllustrateOptions::default(),
    )?;

    println!("{} portrait steps drawn", scene.steps.len());
    std::fs::write("hlf_portrait.svg", canvas.to_svg())?;
    println!("wrote hlf_portrait.svg");
    Ok(())
}
