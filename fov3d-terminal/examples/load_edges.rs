/// Example: Load an edge-list file and print one frame of it
///
/// Usage: cargo run --example load_edges -- path/to/graph.edges

use fov3d_core::orbit::{render_frame, Orbit};
use fov3d_core::{edges, Graph, OrbitSettings};
use fov3d_terminal::Canvas;
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let graph = match args.get(1) {
        Some(path) => {
            println!("Loading edge list: {}", path);
            edges::load_graph(path)?
        }
        None => {
            eprintln!("Usage: {} <edges-file>", args[0]);
            eprintln!("\nNo edge list provided, using default cube...");
            Graph::cube()
        }
    };

    println!(
        "Loaded {} edges, {} nodes, centered on {}",
        graph.edges().len(),
        graph.nodes().len(),
        graph.center()
    );

    let settings = OrbitSettings::default();
    let orbit = Orbit::around(&graph, settings)?;
    let observer = orbit.observers().next().ok_or("orbit has no observers")?;
    let frame = render_frame(&graph, &observer, 0, settings.dot_radius);

    let mut canvas = Canvas::new(60, 30);
    canvas.render_frame(&frame);
    print!("{}", canvas.to_text());
    Ok(())
}
