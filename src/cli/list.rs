//! List command implementation.
//!
//! Prints one line per card, or a per-group tally with `--by-group`.

use std::path::PathBuf;

use clap::Args;

use crate::error::Result;
use crate::identity::{color_identity, group_counts, group_identity};
use crate::output::{display_path, plural, Printer};
use crate::parser::load_document;
use crate::types::CardRecord;

/// List cards with their derived group and colors
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Design document (default: `input` from bible.yaml)
    pub input: Option<PathBuf>,

    /// Show card counts per group instead of individual cards
    #[arg(long)]
    pub by_group: bool,
}

pub fn run(args: ListArgs, printer: &Printer) -> Result<()> {
    let (_, input) = super::resolve_input(args.input.as_deref())?;
    let doc = load_document(&input)?;

    printer.status(
        "Loaded",
        &format!("{} from {}", plural(doc.len(), "card", "cards"), display_path(&input)),
    );

    if args.by_group {
        for (label, count) in group_counts(&doc) {
            printer.info(&label, &plural(count, "card", "cards"));
        }
    } else {
        for card in &doc.cards {
            println!("{}", card_row(card));
        }
    }

    Ok(())
}

/// `M01    Test Card  {1}{W}  [Unaligned W]`
fn card_row(card: &CardRecord) -> String {
    let id = if card.id.is_empty() { "-" } else { card.id.as_str() };
    let mut row = format!("{:<6} {}", id, card.name);
    if !card.cost.is_empty() {
        row.push_str("  ");
        row.push_str(&card.cost);
    }
    row.push_str(&format!(
        "  [{} {}]",
        group_identity(card),
        color_identity(card)
    ));
    row
}
