//! `sr edit-room` and `sr edit-connection`: change author-editable fields.
//!
//! Flags left off keep the current value. An unknown room or pair leaves
//! the graph unchanged.

use clap::{ArgAction, Args};
use sixrooms_core::{ConnectionFields, ConnectionKind, RoomFields, update_connection, update_room};
use tracing::warn;

use super::{GraphSource, warn_if_missing};
use crate::output::emit_json;

/// Arguments for `sr edit-room`.
#[derive(Args, Debug)]
pub struct EditRoomArgs {
    /// Room to edit.
    pub room: String,

    /// New label.
    #[arg(long)]
    pub label: Option<String>,

    /// New content notes.
    #[arg(long)]
    pub content: Option<String>,

    /// Mark or unmark the room as an entrance.
    #[arg(long, action = ArgAction::Set, value_name = "BOOL")]
    pub entrance: Option<bool>,

    #[command(flatten)]
    pub source: GraphSource,
}

/// Arguments for `sr edit-connection`.
#[derive(Args, Debug)]
pub struct EditConnectionArgs {
    /// One end of the connection.
    pub a: String,

    /// The other end of the connection.
    pub b: String,

    /// New connection kind.
    #[arg(long)]
    pub kind: Option<ConnectionKind>,

    /// New description.
    #[arg(long, conflicts_with = "clear_description")]
    pub description: Option<String>,

    /// Remove the description.
    #[arg(long)]
    pub clear_description: bool,

    /// Room holding the clue to a secret passage.
    #[arg(long, conflicts_with = "clear_clue")]
    pub clue: Option<String>,

    /// Remove the clue room.
    #[arg(long)]
    pub clear_clue: bool,

    #[command(flatten)]
    pub source: GraphSource,
}

/// Execute `sr edit-room`.
pub fn run_edit_room(args: &EditRoomArgs) -> anyhow::Result<()> {
    let graph = args.source.load_for_edit()?;
    let Some(room) = graph.room(&args.room) else {
        warn_if_missing(&graph, &args.room);
        return emit_json(&graph);
    };

    let mut fields = RoomFields::from(room);
    if let Some(label) = &args.label {
        fields.label.clone_from(label);
    }
    if let Some(content) = &args.content {
        fields.content.clone_from(content);
    }
    if let Some(entrance) = args.entrance {
        fields.entrance = entrance;
    }

    emit_json(&update_room(&graph, &args.room, fields))
}

/// Execute `sr edit-connection`.
pub fn run_edit_connection(args: &EditConnectionArgs) -> anyhow::Result<()> {
    let graph = args.source.load_for_edit()?;
    let Some(connection) = graph.connection_between(&args.a, &args.b) else {
        warn!(a = %args.a, b = %args.b, "no such connection; graph unchanged");
        return emit_json(&graph);
    };

    let mut fields = ConnectionFields::from(connection);
    if let Some(kind) = args.kind {
        fields.kind = kind;
    }
    if args.clear_description {
        fields.description = None;
    } else if let Some(description) = &args.description {
        fields.description = Some(description.clone());
    }
    if args.clear_clue {
        fields.clue_room = None;
    } else if let Some(clue) = &args.clue {
        if !graph.contains_room(clue) {
            warn!(%clue, "clue room does not exist");
        }
        fields.clue_room = Some(clue.clone());
    }

    emit_json(&update_connection(&graph, &args.a, &args.b, fields))
}
