//! Pipenet Core -- shared vocabulary for pipe networks in a block world.
//!
//! This crate defines the value types every other pipenet crate builds on:
//! block positions and the six cardinal directions, network-type tags,
//! pipes with their attachments and optional energy conduit, discovered
//! destinations, and the read-only world accessor traits that the graph
//! scanner consumes.
//!
//! # Key Types
//!
//! - [`pos::BlockPos`] / [`pos::Direction`] -- 3D grid addressing.
//! - [`id::NetworkTypeId`] -- opaque tag partitioning pipes into
//!   incompatible topologies (item pipes never join fluid pipes).
//! - [`pipe::Pipe`] -- a placed pipe: network type, attachment manager, and
//!   kind ([`pipe::PipeKind`]).
//! - [`destination::Destination`] -- a non-pipe endpoint adjacent to a pipe.
//! - [`world::PipeWorld`] / [`world::BlockEntity`] -- what a scan may ask of
//!   the world.

pub mod destination;
pub mod id;
pub mod pipe;
pub mod pos;
pub mod world;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
