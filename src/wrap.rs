//! Greedy word wrap for a fixed character budget.
//!
//! Splits text on single spaces and packs words left to right, starting a new
//! line whenever the next word would push the current line past the budget.
//! Words are never split: a word longer than the whole budget is emitted
//! verbatim as its own over-long line.
//!
//! Two properties of the packing are observable and relied on by callers:
//!
//! - Text that already fits is returned as-is, a single element, even when
//!   empty. Wrapping never yields an empty list.
//! - Runs of spaces in the input collapse where a line break lands on them,
//!   because splitting is on single spaces and each emitted line is trimmed
//!   of surrounding whitespace.
//!
//! Lengths are counted in `char`s, not bytes, so multi-byte text wraps by
//! visible character cell.

/// Wrap `text` into lines of at most `max_chars` characters.
///
/// A `max_chars` of zero degrades to one word per line rather than panicking;
/// the budget is a derived display property and never legitimately zero.
pub fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    if text.chars().count() <= max_chars {
        return vec![text.to_string()];
    }

    let mut wrapped = Vec::new();
    let mut line = String::new();

    for word in text.split(' ') {
        let word_len = word.chars().count();
        let separator = usize::from(!line.is_empty());

        // The running line keeps a trailing space after each packed word, so
        // this length check counts that space as part of the line.
        if line.chars().count() + word_len + separator > max_chars {
            if !line.is_empty() {
                wrapped.push(line.trim().to_string());
                line.clear();
            }
        }

        if word_len > max_chars {
            // Oversized word: its own line, never merged or split
            wrapped.push(word.to_string());
        } else {
            line.push_str(word);
            line.push(' ');
        }
    }

    if !line.is_empty() {
        wrapped.push(line.trim().to_string());
    }

    wrapped
}

// =============================================================================
// Unit Tests
// =============================================================================
