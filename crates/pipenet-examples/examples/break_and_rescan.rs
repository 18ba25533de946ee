//! Break-and-rescan example: how a network reacts to a broken pipe.
//!
//! Builds a straight item line with a chest at each end, breaks a pipe in
//! the middle, and rescans from both halves. The first rescan reports the
//! far half as removed; the caller then starts a second network for it.
//!
//! Run with: `cargo run -p pipenet-examples --example break_and_rescan`

use pipenet_core::id::NetworkTypeId;
use pipenet_core::pipe::{Pipe, PipeKind};
use pipenet_core::pos::BlockPos;
use pipenet_graph::NetworkGraph;
use pipenet_spatial::{GridWorld, Machine};

const ITEM: NetworkTypeId = NetworkTypeId(0);

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut world = GridWorld::new();
    for x in 0..8 {
        world.place_pipe(Pipe::new(BlockPos::new(x, 0, 0), ITEM, PipeKind::Item))?;
    }
    world.place_machine(BlockPos::new(-1, 0, 0), Machine::chest())?;
    world.place_machine(BlockPos::new(8, 0, 0), Machine::chest())?;

    let mut west = NetworkGraph::new(ITEM);
    west.scan(&world, BlockPos::new(0, 0, 0));
    println!(
        "intact: {} pipes, {} destinations",
        west.pipes().len(),
        west.destinations().len()
    );

    // --- Break the pipe at x = 4 ---

    world.remove_pipe(BlockPos::new(4, 0, 0))?;
    let diff = west.scan(&world, BlockPos::new(0, 0, 0));
    println!(
        "after break: west keeps {} pipes, lost {:?}",
        west.pipes().len(),
        diff.removed()
    );

    // The removed pipes that still exist form their own network.
    let Some(&seed) = diff.removed().iter().find(|&&p| world.pipe(p).is_some()) else {
        return Ok(());
    };
    let mut east = NetworkGraph::new(ITEM);
    let split = east.scan(&world, seed);
    println!(
        "east network: {} pipes ({} new), {} destinations",
        east.pipes().len(),
        split.new_pipes().len(),
        east.destinations().len()
    );

    Ok(())
}
