//! Three-column line assembly.
//!
//! A source line carries independent left, centre, and right texts. Each is
//! word-wrapped to the same character budget, then the wrapped fragments are
//! merged row by row into full-width strings: the centre fragment is placed at
//! the budget's midpoint, the left fragment fills from column zero, and the
//! right fragment is pushed against the budget's right edge.
//!
//! Padding arithmetic can go negative when the combined fragments exceed the
//! budget. Negative pad widths are floored to zero spaces and the assembled
//! row is never truncated, so an over-long row overlaps or overflows visually
//! instead of failing. This silent-overflow behaviour is intentional.

use crate::wrap::wrap_text;

/// Assemble the full-width rows for one source line.
///
/// Produces `max(|left|, |centre|, |right|)` rows, one per wrapped fragment
/// index; a column that has run out of fragments contributes an empty string
/// to the remaining rows.
pub fn compose_rows(left: &str, centre: &str, right: &str, max_chars: usize) -> Vec<String> {
    let left_lines = wrap_text(left, max_chars);
    let centre_lines = wrap_text(centre, max_chars);
    let right_lines = wrap_text(right, max_chars);

    let row_count = left_lines.len().max(centre_lines.len()).max(right_lines.len());
    let budget = max_chars as i64;
    let mut rows = Vec::with_capacity(row_count);

    for i in 0..row_count {
        let left_part = fragment(&left_lines, i);
        let centre_part = fragment(&centre_lines, i);
        let right_part = fragment(&right_lines, i);

        let left_len = left_part.chars().count() as i64;
        let centre_len = centre_part.chars().count() as i64;
        let right_len = right_part.chars().count() as i64;

        let (left_pad, right_pad) = if centre_len > 0 {
            // Floor division: the dividend is negative when the centre
            // fragment alone exceeds the budget
            let centre_start = (budget - centre_len).div_euclid(2);
            (
                centre_start - left_len,
                budget - (centre_start + centre_len + right_len),
            )
        } else {
            (0, budget - left_len - right_len)
        };

        let mut row =
            String::with_capacity(left_part.len() + centre_part.len() + right_part.len() + max_chars);
        row.push_str(left_part);
        row.push_str(&spaces(left_pad));
        row.push_str(centre_part);
        row.push_str(&spaces(right_pad));
        row.push_str(right_part);
        rows.push(row);
    }

    rows
}

/// Fragment at `index`, or empty once the column's wrapped lines run out.
fn fragment(lines: &[String], index: usize) -> &str {
    lines.get(index).map_or("", String::as_str)
}

/// A run of spaces, empty for zero or negative widths.
fn spaces(count: i64) -> String {
    " ".repeat(count.max(0) as usize)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Column index of the first character of `needle` within `row`, counted
    /// in chars.
    fn start_column(row: &str, needle: &str) -> usize {
        let byte_idx = row.find(needle).expect("fragment not found in row");
        row[..byte_idx].chars().count()
    }

    // -------------------------------------------------------------------------
    // Row Count Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_all_columns_empty_yields_one_row() {
        // Wrapping an empty column yields one empty fragment, never zero
        let rows = compose_rows("", "", "", 20);
        assert_eq!(rows.len(), 1, "empty columns should produce exactly one row");
    }

    #[test]
    fn test_row_count_is_max_of_wrapped_columns() {
        // Left wraps to three fragments, centre to one, right to none beyond
        // the first; three rows come out
        let rows = compose_rows("alpha beta gamma", "MID", "", 5);
        assert_eq!(rows.len(), 3);
    }

    #[test]
    fn test_exhausted_columns_pad_with_empty_fragments() {
        let rows = compose_rows("alpha beta gamma", "", "", 5);
        // Rows after the first are left-column only, right-padded to budget
        assert_eq!(rows, vec!["alpha", "beta ", "gamma"]);
    }

    // -------------------------------------------------------------------------
    // Centre Alignment Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_centre_starts_at_midpoint_column() {
        let rows = compose_rows("", "HELLO", "", 20);
        assert_eq!(rows.len(), 1);
        assert_eq!(start_column(&rows[0], "HELLO"), (20 - 5) / 2);
        assert_eq!(rows[0].chars().count(), 20);
    }

    #[test]
    fn test_centre_start_uses_floor_division() {
        // (10 - 5) / 2 floors to 2
        let rows = compose_rows("", "ABCDE", "", 10);
        assert_eq!(rows[0], "  ABCDE   ");
    }

    #[test]
    fn test_centre_start_column_holds_for_every_row() {
        let rows = compose_rows("", "lorem ipsum dolor", "", 7);
        for row in &rows {
            let fragment = row.trim();
            assert_eq!(
                start_column(row, fragment),
                (7 - fragment.chars().count()).div_euclid(2),
                "row {row:?} centre fragment out of position"
            );
        }
    }

    #[test]
    fn test_three_columns_share_one_row() {
        let rows = compose_rows("L", "CC", "R", 10);
        // centre_start = (10 - 2) / 2 = 4
        assert_eq!(rows, vec!["L   CC   R"]);
        assert_eq!(rows[0].chars().count(), 10);
    }

    // -------------------------------------------------------------------------
    // Empty Centre Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_left_only_pads_to_budget() {
        let rows = compose_rows("LEFT", "", "", 10);
        assert_eq!(rows, vec!["LEFT      "]);
    }

    #[test]
    fn test_right_justified_without_centre() {
        let rows = compose_rows("L", "", "RR", 10);
        assert_eq!(rows, vec!["L       RR"]);
    }

    // -------------------------------------------------------------------------
    // Overflow Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_oversized_centre_emitted_untruncated() {
        // Centre alone exceeds the budget: both pads go negative, floor to
        // zero, and the row keeps its full width
        let rows = compose_rows("", "AAAAAAAAAAAA", "", 10);
        assert_eq!(rows, vec!["AAAAAAAAAAAA"]);
        assert!(rows[0].chars().count() > 10);
    }

    #[test]
    fn test_left_overlapping_centre_floors_pad_to_zero() {
        // Left fragment reaches past the centre start column; the negative
        // left pad collapses and the fragments visually abut
        let rows = compose_rows("LLLL", "CC", "", 8);
        // centre_start = (8 - 2) / 2 = 3, left_pad = 3 - 4 -> 0,
        // right_pad = 8 - (3 + 2) = 3
        assert_eq!(rows, vec!["LLLLCC   "]);
    }

    #[test]
    fn test_combined_overflow_is_silent() {
        let rows = compose_rows("AAAAAA", "BBBBBB", "CCCCCC", 10);
        // No panic, no truncation; every fragment survives in order
        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert!(row.contains("AAAAAA") && row.contains("BBBBBB") && row.contains("CCCCCC"));
    }
}
