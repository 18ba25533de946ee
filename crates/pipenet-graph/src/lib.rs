//! Network graph discovery for pipe networks.
//!
//! Given a start position and the pipes a network is currently believed to
//! contain, [`NetworkGraphScanner`] flood-fills the world breadth-first and
//! returns a [`ScanResult`]: the pipes it reached, which of those are new,
//! which known pipes were lost, the non-pipe destinations bordering the
//! network, and the full request trace.
//!
//! # Scan rules
//!
//! - Only pipes whose network type matches the scanner's are traversed, and
//!   each is expanded at most once.
//! - A non-pipe neighbour of a traversed pipe is probed for item, fluid, and
//!   energy capabilities on the face pointing back at the pipe, unless the
//!   pipe has an attachment on that face.
//! - A neighbouring energy pipe of a different network type is recorded as an
//!   energy destination of itself.
//! - The seed position is never probed for block entities.
//!
//! [`NetworkGraph`] wraps the scanner for callers that keep one network's
//! topology between rescans.

pub mod network;
pub mod request;
pub mod result;
pub mod scanner;

pub use network::NetworkGraph;
pub use request::{RequestId, ScanRequest};
pub use result::ScanResult;
pub use scanner::NetworkGraphScanner;
