//! `sr outline`: ordered room-by-room listing for export.

use std::io::{self, Write};

use clap::Args;
use sixrooms_core::outline::{OutlineRoom, Passage};
use sixrooms_core::{ConnectionKind, outline};

use super::GraphSource;
use crate::output::{OutputMode, pretty_kv, pretty_section, render_mode};

/// Arguments for `sr outline`.
#[derive(Args, Debug)]
pub struct OutlineArgs {
    #[command(flatten)]
    pub source: GraphSource,
}

fn passage_summary(passage: &Passage) -> String {
    let mut line = format!("{} ({})", passage.to_label, passage.kind);
    if let Some(description) = &passage.description {
        line.push_str(" - ");
        line.push_str(description);
    }
    if passage.kind == ConnectionKind::Secret {
        if let Some(clue) = &passage.clue {
            line.push_str("; clue in ");
            line.push_str(&clue.label);
        }
    }
    line
}

fn render_text(rooms: &[OutlineRoom], w: &mut dyn Write) -> io::Result<()> {
    for room in rooms {
        writeln!(
            w,
            "room\t{}\t{}\t{}\t{}",
            room.id,
            room.label,
            room.kind,
            if room.entrance { "entrance" } else { "-" }
        )?;
        for passage in &room.passages {
            writeln!(
                w,
                "passage\t{}\t{}\t{}\t{}",
                room.id,
                passage.to,
                passage.kind,
                passage.clue.as_ref().map_or("-", |c| c.room.as_str())
            )?;
        }
    }
    Ok(())
}

fn render_pretty(rooms: &[OutlineRoom], w: &mut dyn Write) -> io::Result<()> {
    for room in rooms {
        let heading = if room.entrance {
            format!("{} [entrance]", room.label)
        } else {
            room.label.clone()
        };
        pretty_section(w, &heading)?;
        pretty_kv(w, "Kind", room.kind.as_str())?;
        if !room.content.is_empty() {
            pretty_kv(w, "Content", &room.content)?;
        }
        for passage in &room.passages {
            pretty_kv(w, "Passage", passage_summary(passage))?;
        }
        writeln!(w)?;
    }
    Ok(())
}

/// Execute `sr outline`.
pub fn run_outline(args: &OutlineArgs, output: OutputMode) -> anyhow::Result<()> {
    let graph = args.source.load()?;
    let rooms = outline(&graph);
    render_mode(output, rooms.as_slice(), render_text, render_pretty)
}
