use std::sync::Arc;

/// Renders a scope path into its display form. Pluggable per instance.
pub type ScopeFormatter = Arc<dyn Fn(&[String]) -> String + Send + Sync>;

/// `[a::b::c]`
pub fn default_scope_formatter(path: &[String]) -> String {
    format!("[{}]", path.join("::"))
}

/// `[a] [b] [c]`
pub fn bars_scope_formatter(path: &[String]) -> String {
    path.iter()
        .map(|segment| format!("[{}]", segment))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Derive the display path from the raw scope value: empty segments are
/// dropped.
pub(crate) fn scope_path(raw: &[String]) -> Vec<String> {
    raw.iter().filter(|s| !s.is_empty()).cloned().collect()
}
