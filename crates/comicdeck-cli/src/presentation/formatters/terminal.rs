use terminal_size::{Width, terminal_size};

const FALLBACK_WIDTH: usize = 100;

/// Current terminal width in columns, or a fixed fallback when stdout is
/// not attached to a terminal.
pub fn terminal_width() -> usize {
    match terminal_size() {
        Some((Width(w), _)) if w > 0 => w as usize,
        _ => FALLBACK_WIDTH,
    }
}
