use crate::glyphs;
use crate::streams::SinkHandle;
use std::collections::BTreeMap;

/// One named log type: the badge glyph, color name, label text, optional
/// severity and optional sink override that shape every line logged
/// through it.
#[derive(Clone, Default)]
pub struct TypeSpec {
    pub badge: String,
    pub color: String,
    pub label: String,
    pub log_level: Option<String>,
    pub stream: Option<Vec<SinkHandle>>,
}

impl TypeSpec {
    fn new(badge: &str, color: &str, label: &str, log_level: &str) -> Self {
        Self {
            badge: badge.to_string(),
            color: color.to_string(),
            label: label.to_string(),
            log_level: Some(log_level.to_string()),
            stream: None,
        }
    }
}

/// A user-supplied partial type definition. Set fields override the
/// corresponding default fields; unset fields keep them.
#[derive(Clone, Default)]
pub struct PartialTypeSpec {
    pub badge: Option<String>,
    pub color: Option<String>,
    pub label: Option<String>,
    pub log_level: Option<String>,
    pub stream: Option<Vec<SinkHandle>>,
}

impl PartialTypeSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn badge(mut self, badge: impl Into<String>) -> Self {
        self.badge = Some(badge.into());
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = Some(level.into());
        self
    }

    pub fn stream(mut self, sinks: Vec<SinkHandle>) -> Self {
        self.stream = Some(sinks);
        self
    }

    fn apply_to(&self, mut spec: TypeSpec) -> TypeSpec {
        if let Some(badge) = &self.badge {
            spec.badge = badge.clone();
        }
        if let Some(color) = &self.color {
            spec.color = color.clone();
        }
        if let Some(label) = &self.label {
            spec.label = label.clone();
        }
        if let Some(level) = &self.log_level {
            spec.log_level = Some(level.clone());
        }
        if let Some(stream) = &self.stream {
            spec.stream = Some(stream.clone());
        }
        spec
    }
}

pub(crate) fn default_types() -> BTreeMap<String, TypeSpec> {
    let mut types = BTreeMap::new();
    let mut add = |name: &str, spec: TypeSpec| {
        types.insert(name.to_string(), spec);
    };

    add("alert", TypeSpec::new("!", "red", "alert", "warn"));
    add("await", TypeSpec::new(glyphs::ELLIPSIS, "blue", "awaiting", "info"));
    add("complete", TypeSpec::new(glyphs::CHECKBOX_ON, "cyan", "complete", "info"));
    add("debug", TypeSpec::new(glyphs::CIRCLE_FILLED, "red", "debug", "debug"));
    add("error", TypeSpec::new(glyphs::CROSS, "red", "error", "error"));
    add("fatal", TypeSpec::new(glyphs::CROSS, "red", "fatal", "error"));
    add("fav", TypeSpec::new(glyphs::HEART, "magenta", "favorite", "info"));
    add("info", TypeSpec::new(glyphs::INFO, "blue", "info", "info"));
    add("log", TypeSpec::new("", "", "", "info"));
    add("note", TypeSpec::new(glyphs::BULLET, "blue", "note", "info"));
    add("pause", TypeSpec::new(glyphs::SQUARE_SMALL_FILLED, "yellow", "pause", "info"));
    add("pending", TypeSpec::new(glyphs::CHECKBOX_OFF, "magenta", "pending", "info"));
    add("star", TypeSpec::new(glyphs::STAR, "yellow", "star", "info"));
    add("start", TypeSpec::new(glyphs::PLAY, "green", "start", "info"));
    add("success", TypeSpec::new(glyphs::TICK, "green", "success", "info"));
    add("wait", TypeSpec::new(glyphs::ELLIPSIS, "blue", "waiting", "info"));
    add("warn", TypeSpec::new(glyphs::WARNING, "yellow", "warning", "warn"));
    add("watch", TypeSpec::new(glyphs::ELLIPSIS, "yellow", "watching", "info"));

    types
}

/// Overlay user overrides on the default table. Keys present in both are
/// merged field by field with the override winning; new keys are added
/// as-is; no key is ever removed.
pub(crate) fn merge_types(
    defaults: BTreeMap<String, TypeSpec>,
    custom: &BTreeMap<String, PartialTypeSpec>,
) -> BTreeMap<String, TypeSpec> {
    let mut types = defaults;

    for (name, partial) in custom {
        let base = types.remove(name).unwrap_or_default();
        types.insert(name.clone(), partial.apply_to(base));
    }

    types
}

/// The widest label in the table, cached by the logger for padding.
pub(crate) fn longest_label(types: &BTreeMap<String, TypeSpec>) -> String {
    types
        .values()
        .map(|spec| spec.label.as_str())
        .fold("", |longest, label| {
            if longest.chars().count() >= label.chars().count() {
                longest
            } else {
                label
            }
        })
        .to_string()
}
