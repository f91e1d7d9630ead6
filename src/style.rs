use colored::{Color, Colorize};

// The seam to the styling provider. Everything that decorates text goes
// through these so the rest of the crate never touches `colored` directly.

/// Paint `text` with a named color. Unknown or empty names resolve to
/// white, which keeps user-supplied type tables forgiving.
pub(crate) fn paint(color: &str, text: &str) -> String {
    text.color(Color::from(color)).to_string()
}

pub(crate) fn muted(text: &str) -> String {
    text.dimmed().to_string()
}

pub(crate) fn underlined(text: &str) -> String {
    text.underline().to_string()
}

/// Right-pad with spaces up to `target` characters. Strings already at or
/// over the target length are returned untouched.
pub(crate) fn pad_end(text: &str, target: usize) -> String {
    let len = text.chars().count();
    if len >= target {
        return text.to_string();
    }

    let mut padded = String::with_capacity(text.len() + target - len);
    padded.push_str(text);
    for _ in len..target {
        padded.push(' ');
    }
    padded
}
