//! Integration test: network discovery scenarios.
//!
//! Builds worlds with `GridWorld`, scans them with `NetworkGraphScanner` and
//! `NetworkGraph`, and checks the diff, destinations, and request trace for
//! the situations a pipe network has to cope with: rescans, cycles, foreign
//! pipes, attachments, empty seeds, and broken links.

use std::collections::{BTreeMap, BTreeSet};

use pipenet_core::destination::{Destination, DestinationKind};
use pipenet_core::pipe::Pipe;
use pipenet_core::pos::{BlockPos, Direction};
use pipenet_core::test_utils::*;
use pipenet_data::load_layout_file;
use pipenet_graph::{NetworkGraph, NetworkGraphScanner, ScanResult};
use pipenet_spatial::{GridWorld, Machine};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn world_of(pipes: impl IntoIterator<Item = Pipe>) -> GridWorld {
    let mut world = GridWorld::new();
    for pipe in pipes {
        world.place_pipe(pipe).unwrap();
    }
    world
}

fn scan_items(world: &GridWorld, known: &BTreeSet<BlockPos>, start: BlockPos) -> ScanResult {
    NetworkGraphScanner::new(known.clone(), item()).scan(world, start)
}

fn assert_diff_complete(result: &ScanResult, known: &BTreeSet<BlockPos>) {
    let kept: BTreeSet<BlockPos> = known.difference(result.removed()).copied().collect();
    let rebuilt: BTreeSet<BlockPos> = kept.union(result.new_pipes()).copied().collect();
    assert_eq!(&rebuilt, result.found());
    assert!(result.new_pipes().is_disjoint(known));
}

// ===========================================================================
// Idempotence
// ===========================================================================

#[test]
fn rescanning_unchanged_network_is_idempotent() {
    init_tracing();
    let mut world = world_of(line_x(pos(0, 0, 0), 6).into_iter().map(item_pipe));
    world.place_machine(pos(6, 0, 0), Machine::chest()).unwrap();

    let first = scan_items(&world, &BTreeSet::new(), pos(0, 0, 0));
    let second = scan_items(&world, first.found(), pos(3, 0, 0));

    assert!(second.new_pipes().is_empty());
    assert!(second.removed().is_empty());
    assert_eq!(first.found(), second.found());
    assert_eq!(first.destinations(), second.destinations());
    assert_diff_complete(&second, first.found());
}

// ===========================================================================
// Cycles
// ===========================================================================

#[test]
fn ring_terminates_and_expands_each_pipe_once() {
    init_tracing();
    let ring = ring(5);
    assert_eq!(ring.len(), 16);
    let world = world_of(ring.iter().copied().map(item_pipe));

    let result = scan_items(&world, &BTreeSet::new(), ring[0]);

    let expected: BTreeSet<BlockPos> = ring.iter().copied().collect();
    assert_eq!(result.found(), &expected);

    let mut successes: BTreeMap<BlockPos, usize> = BTreeMap::new();
    for request in result.successful_requests() {
        *successes.entry(request.pos()).or_default() += 1;
    }
    assert_eq!(successes.len(), ring.len());
    assert!(successes.values().all(|&n| n == 1));
    // Every successful request issues six children, plus the seed.
    assert_eq!(result.requests().len(), 1 + 6 * ring.len());
}

#[test]
fn solid_cube_expands_each_pipe_once() {
    let mut pipes = Vec::new();
    for x in 0..3 {
        for y in 0..3 {
            for z in 0..3 {
                pipes.push(item_pipe(pos(x, y, z)));
            }
        }
    }
    let world = world_of(pipes);
    let result = scan_items(&world, &BTreeSet::new(), pos(1, 1, 1));

    assert_eq!(result.found().len(), 27);
    assert_eq!(result.successful_requests().count(), 27);
}

// ===========================================================================
// Type isolation
// ===========================================================================

#[test]
fn foreign_energy_pipe_recorded_once_as_self_destination() {
    // A 2x2 item loop with an energy column rising from one corner.
    let world = world_of([
        item_pipe(pos(0, 0, 0)),
        item_pipe(pos(1, 0, 0)),
        item_pipe(pos(1, 0, 1)),
        item_pipe(pos(0, 0, 1)),
        energy_pipe(pos(0, 1, 0)),
        energy_pipe(pos(0, 2, 0)),
    ]);
    let result = scan_items(&world, &BTreeSet::new(), pos(0, 0, 0));

    assert!(!result.found().contains(&pos(0, 1, 0)));
    assert!(!result.found().contains(&pos(0, 2, 0)));

    let self_destinations: Vec<&Destination> = result
        .destinations()
        .iter()
        .filter(|d| d.is_self_referential())
        .collect();
    assert_eq!(self_destinations.len(), 1);
    assert_eq!(self_destinations[0].pos, pos(0, 1, 0));
    assert_eq!(self_destinations[0].kind, DestinationKind::EnergyStorage);
    assert_eq!(self_destinations[0].direction, Some(Direction::Up));
}

#[test]
fn foreign_fluid_pipe_yields_nothing() {
    let world = world_of([item_pipe(pos(0, 0, 0)), fluid_pipe(pos(0, 0, 1))]);
    let result = scan_items(&world, &BTreeSet::new(), pos(0, 0, 0));

    assert_eq!(result.found().len(), 1);
    assert!(result.destinations().is_empty());
}

#[test]
fn item_and_fluid_networks_share_a_machine() {
    let mut world = world_of([item_pipe(pos(0, 0, 0)), fluid_pipe(pos(2, 0, 0))]);
    world
        .place_machine(
            pos(1, 0, 0),
            Machine::new([DestinationKind::ItemHandler, DestinationKind::FluidHandler]),
        )
        .unwrap();

    let items = scan_items(&world, &BTreeSet::new(), pos(0, 0, 0));
    let fluids = NetworkGraphScanner::new(BTreeSet::new(), fluid()).scan(&world, pos(2, 0, 0));

    // Each network sees every capability the machine offers on its face.
    assert_eq!(items.destinations().len(), 2);
    assert_eq!(fluids.destinations().len(), 2);
    assert!(items.destinations().iter().all(|d| d.source == pos(0, 0, 0)));
    assert!(
        fluids
            .destinations()
            .iter()
            .all(|d| d.direction == Some(Direction::West))
    );
}

// ===========================================================================
// Attachments
// ===========================================================================

#[test]
fn attachment_blocks_only_its_face() {
    let mut world = world_of([item_pipe(pos(0, 0, 0))]);
    for dir in Direction::all() {
        world
            .place_machine(pos(0, 0, 0).offset(dir), Machine::chest())
            .unwrap();
    }
    world
        .pipe_mut(pos(0, 0, 0))
        .unwrap()
        .attachments_mut()
        .attach(Direction::Down, extractor());

    let result = scan_items(&world, &BTreeSet::new(), pos(0, 0, 0));

    assert_eq!(result.destinations().len(), 5);
    assert!(
        result
            .destinations()
            .iter()
            .all(|d| d.direction != Some(Direction::Down))
    );
}

#[test]
fn attachment_on_one_pipe_does_not_block_another() {
    // Two pipes flank a chest and are joined by a detour that stays clear
    // of the chest's other faces.
    let mut world = world_of(
        [
            pos(0, 0, 0),
            pos(0, 0, 1),
            pos(0, 0, 2),
            pos(1, 0, 2),
            pos(2, 0, 2),
            pos(2, 0, 1),
            pos(2, 0, 0),
        ]
        .into_iter()
        .map(item_pipe),
    );
    world.place_machine(pos(1, 0, 0), Machine::chest()).unwrap();
    world
        .pipe_mut(pos(0, 0, 0))
        .unwrap()
        .attachments_mut()
        .attach(Direction::East, extractor());

    let result = scan_items(&world, &BTreeSet::new(), pos(0, 0, 0));

    let chest: Vec<&Destination> = result
        .destinations()
        .iter()
        .filter(|d| d.pos == pos(1, 0, 0))
        .collect();
    assert_eq!(chest.len(), 1);
    assert_eq!(chest[0].source, pos(2, 0, 0));
    assert_eq!(chest[0].direction, Some(Direction::West));
}

// ===========================================================================
// Seed safety
// ===========================================================================

#[test]
fn seed_on_machine_reports_everything_removed() {
    let mut world = world_of([item_pipe(pos(1, 0, 0))]);
    world.place_machine(pos(0, 0, 0), Machine::chest()).unwrap();
    let known = BTreeSet::from([pos(1, 0, 0), pos(2, 0, 0)]);

    let result = scan_items(&world, &known, pos(0, 0, 0));

    assert!(result.found().is_empty());
    assert!(result.new_pipes().is_empty());
    assert_eq!(result.removed(), &known);
    assert!(result.destinations().is_empty());
    assert_eq!(result.requests().len(), 1);
    assert!(!result.requests()[0].is_successful());
    assert!(result.requests()[0].is_seed());
}

// ===========================================================================
// Removal
// ===========================================================================

#[test]
fn broken_link_removes_unreachable_pipe() {
    let a = pos(0, 0, 0);
    let b = pos(1, 0, 0);
    let mut world = world_of([item_pipe(a), item_pipe(b)]);
    let known = BTreeSet::from([a, b]);
    assert!(scan_items(&world, &known, a).is_unchanged());

    // Replace B with a gap, then put it back one cell further away.
    world.remove_pipe(b).unwrap();
    world.place_pipe(item_pipe(pos(2, 0, 0))).unwrap();
    let result = scan_items(&world, &known, a);

    assert_eq!(result.removed(), &BTreeSet::from([b]));
    assert_eq!(result.found(), &BTreeSet::from([a]));
    assert!(result.new_pipes().is_empty());
    assert_diff_complete(&result, &known);
}

#[test]
fn network_graph_split_and_merge() {
    init_tracing();
    let mut world = world_of(line_x(pos(0, 0, 0), 5).into_iter().map(item_pipe));
    let mut west = NetworkGraph::new(item());
    west.scan(&world, pos(0, 0, 0));

    world.remove_pipe(pos(2, 0, 0)).unwrap();
    let split = west.scan(&world, pos(0, 0, 0));
    assert_eq!(split.removed().len(), 3);

    let mut east = NetworkGraph::new(item());
    let east_scan = east.scan(&world, pos(3, 0, 0));
    assert_eq!(east.pipes(), &BTreeSet::from([pos(3, 0, 0), pos(4, 0, 0)]));
    assert_eq!(east_scan.new_pipes().len(), 2);

    // Re-placing the missing pipe joins both halves into the west network.
    world.place_pipe(item_pipe(pos(2, 0, 0))).unwrap();
    let merged = west.scan(&world, pos(0, 0, 0));
    assert_eq!(
        merged.new_pipes(),
        &BTreeSet::from([pos(2, 0, 0), pos(3, 0, 0), pos(4, 0, 0)])
    );
    assert!(merged.new_pipes().iter().any(|p| east.contains(*p)));
}

// ===========================================================================
// Data-driven layout
// ===========================================================================

#[test]
fn scan_layout_loaded_from_file() {
    let dir = std::env::temp_dir().join(format!("pipenet_it_layout_{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("layout.json");
    std::fs::write(
        &path,
        r#"{
            "network_types": ["item", "energy"],
            "pipes": [
                {"pos": [0, 0, 0], "network": "item", "kind": "item",
                 "attachments": [{"side": "west"}]},
                {"pos": [1, 0, 0], "network": "item", "kind": "item"},
                {"pos": [1, 1, 0], "network": "energy", "kind": "energy",
                 "energy_capacity": 100}
            ],
            "machines": [
                {"pos": [-1, 0, 0], "capabilities": ["item_handler"]},
                {"pos": [2, 0, 0], "capabilities": ["item_handler"]}
            ]
        }"#,
    )
    .unwrap();

    let layout = load_layout_file(&path).unwrap();
    let item = layout.network_types.id("item").unwrap();
    let result = NetworkGraphScanner::new(BTreeSet::new(), item).scan(&layout.world, pos(0, 0, 0));

    assert_eq!(result.found().len(), 2);
    assert_eq!(result.destinations_of(DestinationKind::ItemHandler).count(), 1);
    assert_eq!(result.destinations_of(DestinationKind::EnergyStorage).count(), 1);

    let _ = std::fs::remove_dir_all(&dir);
}
