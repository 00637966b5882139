#![forbid(unsafe_code)]
//! sixrooms-core library.
//!
//! A procedural dungeon-graph engine. Dungeons are built from six-room
//! units, grown by attaching units to rooms or exploding rooms into units,
//! and annotated with bridge and depth hints for layout.
//!
//! # Modules
//!
//! - [`model`]: rooms, connections, the flat [`Graph`] arena, validation.
//! - [`generate`]: layout catalog, connection roller, stocking, generator.
//! - [`mutate`]: pure edits and splices returning a new graph.
//! - [`topology`]: bridge detection and multi-source depth.
//! - [`outline`]: ordered read-only traversal for exporters.
//!
//! # Conventions
//!
//! - **Errors**: internal consistency violations are [`GenerateError`];
//!   invalid references are silent no-ops.
//! - **Randomness**: injected as `&mut R where R: Rng + ?Sized`.
//! - **Logging**: Use `tracing` macros (`debug!`, `trace!`).

pub mod error;
pub mod generate;
pub mod model;
pub mod mutate;
pub mod outline;
pub mod topology;

pub use error::GenerateError;
pub use generate::generate;
pub use model::{Connection, ConnectionKind, Graph, GraphIssue, Room, RoomContent};
pub use mutate::{
    ConnectionFields, Explosion, RoomFields, add_connection, attach_subdungeon, explode_room,
    update_connection, update_room,
};
pub use outline::{OutlineRoom, outline};
pub use topology::LayoutHints;
