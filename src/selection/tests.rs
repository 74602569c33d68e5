//! Tests for coordinates, identifier parsing, normalization, and text
//! serialization.

use std::cmp::Ordering;

use crate::document::SelectionNode;
use crate::grid::Grid;

use super::*;

fn coord(row: usize, col: usize) -> Coordinate {
    Coordinate { row, col }
}

fn range(start: (usize, usize), end: (usize, usize)) -> Range {
    Range {
        start: coord(start.0, start.1),
        end: coord(end.0, end.1),
    }
}

#[test]
fn coordinate_ordering_is_row_major() {
    assert!(coord(1, 9) < coord(2, 1));
    assert!(coord(2, 3) < coord(2, 7));
    assert!(coord(3, 1) > coord(2, 80));
    let a = coord(5, 5);
    let b = coord(5, 5);
    assert_eq!(a.cmp(&b), Ordering::Equal);
}

#[test]
fn normalized_is_symmetric() {
    let pairs = [
        (coord(1, 1), coord(3, 4)),
        (coord(3, 4), coord(1, 1)),
        (coord(2, 7), coord(2, 3)),
        (coord(5, 5), coord(5, 5)),
    ];
    for (a, b) in pairs {
        assert_eq!(Range::normalized(a, b), Range::normalized(b, a));
        let normalized = Range::normalized(a, b);
        assert!(normalized.start <= normalized.end);
    }
}

#[test]
fn normalized_orders_same_row_by_column() {
    let normalized = Range::normalized(coord(2, 7), coord(2, 3));
    assert_eq!(normalized.start, coord(2, 3));
    assert_eq!(normalized.end, coord(2, 7));
}

#[test]
fn cell_id_round_trips() {
    let id = coord(3, 12).cell_id();
    assert_eq!(id, "exterm-cell-3-12");
    assert_eq!(Coordinate::from_cell_id(&id), Some(coord(3, 12)));
}

#[test]
fn cell_id_requires_enough_segments() {
    assert_eq!(Coordinate::from_cell_id(""), None);
    assert_eq!(Coordinate::from_cell_id("3-7"), None);
    assert_eq!(Coordinate::from_cell_id("exterm-cell-7"), None);
}

#[test]
fn cell_id_rejects_non_decimal_and_zero() {
    assert_eq!(Coordinate::from_cell_id("exterm-cell-a-7"), None);
    assert_eq!(Coordinate::from_cell_id("exterm-cell-3-b"), None);
    assert_eq!(Coordinate::from_cell_id("exterm-cell-0-7"), None);
    assert_eq!(Coordinate::from_cell_id("exterm-cell-3-0"), None);
}

#[test]
fn cell_id_parses_last_two_segments() {
    // Extra interior segments are tolerated; only the tail is positional.
    assert_eq!(
        Coordinate::from_cell_id("exterm-cell-alt-3-7"),
        Some(coord(3, 7))
    );
}

#[test]
fn resolve_uses_the_owning_element_for_character_data() {
    let node = SelectionNode::Text {
        owner_id: Some("exterm-cell-2-4"),
    };
    assert_eq!(resolve_coordinate(node), Ok(coord(2, 4)));

    let node = SelectionNode::Element {
        id: Some("exterm-cell-9-1"),
    };
    assert_eq!(resolve_coordinate(node), Ok(coord(9, 1)));
}

#[test]
fn resolve_fails_without_an_identifier() {
    assert_eq!(
        resolve_coordinate(SelectionNode::Text { owner_id: None }),
        Err(IdentifierMissing)
    );
    assert_eq!(
        resolve_coordinate(SelectionNode::Element { id: None }),
        Err(IdentifierMissing)
    );
    assert_eq!(
        resolve_coordinate(SelectionNode::Element {
            id: Some("sidebar")
        }),
        Err(IdentifierMissing)
    );
}

#[test]
fn extraction_respects_column_bounds() {
    let grid = Grid::from_lines(&["..........", "abcdefghij"]);
    let text = serialize_range(&grid, range((2, 3), (2, 7)));
    assert_eq!(text, "cdefg\n");
}

#[test]
fn interior_blank_runs_collapse_to_spaces() {
    let grid = Grid::from_lines(&["AB  C"]);
    let text = serialize_range(&grid, range((1, 1), (1, 5)));
    assert_eq!(text, "AB  C\n");
}

#[test]
fn trailing_blank_run_is_dropped() {
    let grid = Grid::from_lines(&["ABC       "]);
    let text = serialize_range(&grid, range((1, 1), (1, 10)));
    assert_eq!(text, "ABC\n");
}

#[test]
fn leading_blanks_flush_once_content_follows() {
    let grid = Grid::from_lines(&["  AB"]);
    let text = serialize_range(&grid, range((1, 1), (1, 4)));
    assert_eq!(text, "  AB\n");
}

#[test]
fn blank_end_cell_never_flushes_its_buffer() {
    let grid = Grid::from_lines(&["A   "]);
    let text = serialize_range(&grid, range((1, 1), (1, 4)));
    assert_eq!(text, "A\n");
}

#[test]
fn short_row_stops_at_the_first_missing_cell() {
    let grid = Grid::from_lines(&["ab"]);
    let text = serialize_range(&grid, range((1, 1), (1, 10)));
    assert_eq!(text, "ab\n");
}

#[test]
fn blank_row_serializes_to_a_bare_newline() {
    let grid = Grid::from_lines(&["a", "", "b"]);
    let text = serialize_range(&grid, range((1, 1), (3, 1)));
    assert_eq!(text, "a\n\nb\n");
}

#[test]
fn middle_rows_scan_from_column_one() {
    let grid = Grid::from_lines(&["XXXX", "abcd", "YYYY"]);
    let text = serialize_range(&grid, range((1, 3), (3, 2)));
    assert_eq!(text, "XX\nabcd\nYY\n");
}

#[test]
fn two_row_selection_yields_two_terminated_lines() {
    let grid = Grid::from_lines(&["Hello", "World"]);
    let text = serialize_range(&grid, range((1, 1), (2, 5)));
    assert_eq!(text, "Hello\nWorld\n");
    assert_eq!(text.matches('\n').count(), 2);
}

#[test]
fn buffered_spaces_re_expand_between_content() {
    let grid = Grid::from_lines(&["", "", "", "", "foo   !"]);
    let text = serialize_range(&grid, range((5, 1), (5, 7)));
    assert_eq!(text, "foo   !\n");
}

#[test]
fn cell_padding_is_trimmed_before_use() {
    let mut grid = Grid::new();
    grid.put(coord(1, 1), " x ");
    grid.put(coord(1, 2), "\n\t");
    grid.put(coord(1, 3), "y");
    let text = serialize_range(&grid, range((1, 1), (1, 3)));
    assert_eq!(text, "x y\n");
}

#[test]
fn serialization_is_idempotent() {
    let grid = Grid::from_lines(&["some output", "more  output"]);
    let selection = range((1, 2), (2, 9));
    assert_eq!(
        serialize_range(&grid, selection),
        serialize_range(&grid, selection)
    );
}

#[test]
fn serialize_selection_resolves_both_endpoints() {
    let grid = Grid::from_lines(&["Hello", "World"]);
    let anchor = SelectionNode::Element {
        id: Some("exterm-cell-2-5"),
    };
    let focus = SelectionNode::Text {
        owner_id: Some("exterm-cell-1-1"),
    };
    // Backward drag: normalization makes the direction irrelevant.
    let text = serialize_selection(&grid, anchor, focus).unwrap();
    assert_eq!(text, "Hello\nWorld\n");
}

#[test]
fn serialize_selection_produces_nothing_on_a_bad_endpoint() {
    let grid = Grid::from_lines(&["Hello"]);
    let anchor = SelectionNode::Element {
        id: Some("exterm-cell-1-1"),
    };
    let focus = SelectionNode::Element { id: None };
    assert_eq!(
        serialize_selection(&grid, anchor, focus),
        Err(IdentifierMissing)
    );
}
