use crate::interactive::InteractiveContext;
use crate::scope::ScopeFormatter;
use crate::streams::SinkHandle;
use crate::types::PartialTypeSpec;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Display toggles. Everything defaults to off, so an unconfigured
/// logger prints bare message bodies.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub display_badge: bool,
    pub display_date: bool,
    pub display_filename: bool,
    pub display_label: bool,
    pub display_scope: bool,
    pub display_timestamp: bool,
    pub underline_label: bool,
    pub underline_message: bool,
    pub underline_prefix: bool,
    pub underline_suffix: bool,
    pub uppercase_label: bool,
}

/// Construction options for [`Logger`](crate::Logger). All fields are
/// optional; unset fields fall back to built-in defaults (or, in
/// [`Logger::clone_with`](crate::Logger::clone_with), to the parent
/// instance's current values).
#[derive(Clone, Default)]
pub struct Options {
    pub(crate) config: Option<Config>,
    pub(crate) disabled: Option<bool>,
    pub(crate) interactive: Option<bool>,
    pub(crate) log_level: Option<String>,
    pub(crate) log_levels: Option<BTreeMap<String, i32>>,
    pub(crate) scope: Option<Vec<String>>,
    pub(crate) scope_formatter: Option<ScopeFormatter>,
    pub(crate) secrets: Option<Vec<String>>,
    pub(crate) stream: Option<Vec<SinkHandle>>,
    pub(crate) types: Option<BTreeMap<String, PartialTypeSpec>>,
    pub(crate) interactive_context: Option<InteractiveContext>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = Some(disabled);
        self
    }

    pub fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = Some(interactive);
        self
    }

    pub fn log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = Some(level.into());
        self
    }

    /// Add or re-rank severity levels.
    pub fn log_levels(mut self, levels: BTreeMap<String, i32>) -> Self {
        self.log_levels = Some(levels);
        self
    }

    pub fn scope(self, name: impl Into<String>) -> Self {
        self.scopes([name.into()])
    }

    pub fn scopes<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scope = Some(names.into_iter().map(Into::into).collect());
        self
    }

    pub fn scope_formatter<F>(self, formatter: F) -> Self
    where
        F: Fn(&[String]) -> String + Send + Sync + 'static,
    {
        self.scope_formatter_handle(Arc::new(formatter))
    }

    pub(crate) fn scope_formatter_handle(mut self, formatter: ScopeFormatter) -> Self {
        self.scope_formatter = Some(formatter);
        self
    }

    pub fn secrets<I, S>(mut self, secrets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        self.secrets = Some(secrets.into_iter().map(|s| s.to_string()).collect());
        self
    }

    pub fn stream(self, sink: SinkHandle) -> Self {
        self.streams([sink])
    }

    pub fn streams<I>(mut self, sinks: I) -> Self
    where
        I: IntoIterator<Item = SinkHandle>,
    {
        self.stream = Some(sinks.into_iter().collect());
        self
    }

    /// Per-type overrides and additions, merged over the default type
    /// table key by key.
    pub fn types(mut self, types: BTreeMap<String, PartialTypeSpec>) -> Self {
        self.types = Some(types);
        self
    }

    pub fn interactive_context(mut self, context: InteractiveContext) -> Self {
        self.interactive_context = Some(context);
        self
    }

    /// Field-by-field merge, `overrides` winning. This is the clone
    /// semantics: parent's effective options overlaid with the new ones.
    pub(crate) fn merged_with(self, overrides: Options) -> Options {
        Options {
            config: overrides.config.or(self.config),
            disabled: overrides.disabled.or(self.disabled),
            interactive: overrides.interactive.or(self.interactive),
            log_level: overrides.log_level.or(self.log_level),
            log_levels: overrides.log_levels.or(self.log_levels),
            scope: overrides.scope.or(self.scope),
            scope_formatter: overrides.scope_formatter.or(self.scope_formatter),
            secrets: overrides.secrets.or(self.secrets),
            stream: overrides.stream.or(self.stream),
            types: overrides.types.or(self.types),
            interactive_context: overrides.interactive_context.or(self.interactive_context),
        }
    }
}
