//! Clipboard integration.

use crate::error::Result;
use crate::table::TableView;
use arboard::Clipboard;

/// Copy the full table, tab-separated, to the system clipboard.
pub fn copy_table(view: &TableView) -> Result<()> {
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(view.to_tsv())?;
    Ok(())
}
