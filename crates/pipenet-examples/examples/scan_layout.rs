//! Layout scan example: load a workshop layout and discover every network.
//!
//! Loads `layouts/layout.ron`, then scans one network per network type,
//! seeded at the lowest pipe of that type, and prints what each scan found.
//! Set `RUST_LOG=pipenet_graph=trace` to watch individual requests.
//!
//! Run with: `cargo run -p pipenet-examples --example scan_layout`

use std::path::Path;

use pipenet_data::load_layout;
use pipenet_graph::NetworkGraph;
use tracing::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("pipenet_graph=debug".parse()?),
        )
        .init();

    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("layouts");
    let layout = load_layout(&dir)?;
    info!(
        pipes = layout.world.pipe_count(),
        machines = layout.world.machine_count(),
        "layout loaded"
    );

    for (network_type, name) in layout.network_types.iter() {
        let Some(origin) = layout
            .world
            .pipes()
            .find(|p| p.network_type() == network_type)
            .map(|p| p.pos())
        else {
            println!("{name}: no pipes");
            continue;
        };

        let mut graph = NetworkGraph::new(network_type);
        let result = graph.scan(&layout.world, origin);

        println!("{name} network seeded at {origin:?}");
        println!("  pipes:    {}", graph.pipes().len());
        println!("  requests: {}", result.requests().len());
        for dest in graph.destinations() {
            println!(
                "  {:?} at {:?} via {:?} from pipe {:?}",
                dest.kind, dest.pos, dest.direction, dest.source
            );
        }
    }

    Ok(())
}
