//! Unicode glyphs used as badges and separators.
//!
//! Names follow the common terminal-symbol vocabulary (tick, cross,
//! pointer, ...) so callers can look one up by name when building a
//! custom type table.

pub const TICK: &str = "✔";
pub const CROSS: &str = "✖";
pub const STAR: &str = "★";
pub const SQUARE_SMALL_FILLED: &str = "◼";
pub const PLAY: &str = "▶";
pub const BULLET: &str = "●";
pub const CIRCLE_FILLED: &str = "⬤";
pub const ELLIPSIS: &str = "…";
pub const POINTER: &str = "❯";
pub const POINTER_SMALL: &str = "›";
pub const INFO: &str = "ℹ";
pub const WARNING: &str = "⚠";
pub const HEART: &str = "♥";
pub const CHECKBOX_ON: &str = "☒";
pub const CHECKBOX_OFF: &str = "☐";

/// Look up a glyph by its semantic name.
pub fn glyph(name: &str) -> Option<&'static str> {
    let found = match name {
        "tick" => TICK,
        "cross" => CROSS,
        "star" => STAR,
        "squareSmallFilled" => SQUARE_SMALL_FILLED,
        "play" => PLAY,
        "bullet" => BULLET,
        "circleFilled" => CIRCLE_FILLED,
        "ellipsis" => ELLIPSIS,
        "pointer" => POINTER,
        "pointerSmall" => POINTER_SMALL,
        "info" => INFO,
        "warning" => WARNING,
        "heart" => HEART,
        "checkboxOn" => CHECKBOX_ON,
        "checkboxOff" => CHECKBOX_OFF,
        _ => return None,
    };

    Some(found)
}
