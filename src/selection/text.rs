//! Text reconstruction from a selection over the live document.

use std::iter;

use crate::document::{Document, SelectionNode};

use super::{Coordinate, IdentifierMissing, Range, resolve_coordinate};

/// Serializes the text between two selection endpoints.
///
/// Resolves both endpoints, normalizes them into a range, and
/// reconstructs one newline-terminated line per row. Fails without
/// producing any text when either endpoint lacks a cell identifier.
pub fn serialize_selection<D: Document>(
    document: &D,
    anchor: SelectionNode<'_>,
    focus: SelectionNode<'_>,
) -> Result<String, IdentifierMissing> {
    let anchor = resolve_coordinate(anchor)?;
    let focus = resolve_coordinate(focus)?;
    Ok(serialize_range(document, Range::normalized(anchor, focus)))
}

/// Serializes every row of `range` against the live document, in row
/// order.
pub fn serialize_range<D: Document>(document: &D, range: Range) -> String {
    let mut out = String::new();
    for row in range.start.row..=range.end.row {
        extract_row(document, row, range, &mut out);
    }
    out
}

/// Reconstructs one row's text between the range's column bounds.
///
/// Each character occupies its own cell, so rendered rows end in runs of
/// blank padding. Blank cells are only buffered: the buffer is flushed as
/// literal spaces when further content follows, and a blank run at the
/// end of the row (or of the range) is dropped.
fn extract_row<D: Document>(document: &D, row: usize, range: Range, out: &mut String) {
    let mut col = if row == range.start.row {
        range.start.col
    } else {
        1
    };
    let mut buffered_spaces = 0;

    // A missing cell is the end of the rendered row, even when the
    // requested end column was never reached.
    while let Some(text) = document.cell_text(Coordinate { row, col }) {
        let content = text.trim();
        if content.is_empty() {
            buffered_spaces += 1;
        } else {
            out.extend(iter::repeat_n(' ', buffered_spaces));
            out.push_str(content);
            buffered_spaces = 0;
        }
        // The end column is included in the scan.
        if row == range.end.row && col == range.end.col {
            break;
        }
        col += 1;
    }

    // Every row ends with a newline, the last included.
    out.push('\n');
}
