use crate::config::{Config, Options};
use crate::error::Error;
use crate::glyphs;
use crate::interactive::InteractiveContext;
use crate::level::LevelTable;
use crate::message::{format_parts, LogMessage, Structured};
use crate::scope::{self, default_scope_formatter, ScopeFormatter};
use crate::secrets;
use crate::streams::{SinkHandle, StderrSink};
use crate::style;
use crate::timers::{self, TimerTracker};
use crate::types::{self, PartialTypeSpec, TypeSpec};
use chrono::Local;
use std::collections::BTreeMap;
use std::panic::Location;
use std::sync::Arc;
use std::time::Duration;

/// Returned by [`Logger::time_end`].
#[derive(Debug, Clone, PartialEq)]
pub struct TimeEndResult {
    pub label: String,
    pub span: Duration,
}

/// A logging instance: one type table, one severity threshold, one scope
/// path, writing to one or more sinks.
///
/// Instances are cheap to derive: [`scope`](Logger::scope),
/// [`child`](Logger::child) and [`clone_with`](Logger::clone_with) build
/// new instances that copy the parent's effective configuration and timer
/// state by value, so siblings never observe each other's later changes.
pub struct Logger {
    interactive: bool,
    config: Config,
    custom_types: BTreeMap<String, PartialTypeSpec>,
    custom_levels: BTreeMap<String, i32>,
    levels: LevelTable,
    disabled: bool,
    scope_names: Vec<String>,
    scope_formatter: ScopeFormatter,
    timers: TimerTracker,
    types: BTreeMap<String, TypeSpec>,
    streams: Vec<SinkHandle>,
    longest_label: String,
    secrets: Vec<String>,
    log_level: String,
    context: InteractiveContext,
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("interactive", &self.interactive)
            .field("custom_levels", &self.custom_levels)
            .field("disabled", &self.disabled)
            .field("scope_names", &self.scope_names)
            .field("longest_label", &self.longest_label)
            .field("secrets", &self.secrets)
            .field("log_level", &self.log_level)
            .finish_non_exhaustive()
    }
}

macro_rules! type_methods {
    ($($method:ident => $key:literal),* $(,)?) => {
        $(
            #[doc = concat!("Log a line through the `", $key, "` type.")]
            #[track_caller]
            pub fn $method(&self, message: impl Into<LogMessage>) {
                self.emit_for($key, message.into(), Location::caller());
            }
        )*
    };
}

impl Logger {
    pub fn new(options: Options) -> Self {
        let custom_types = options.types.unwrap_or_default();
        let custom_levels = options.log_levels.unwrap_or_default();
        let levels = LevelTable::new(&custom_levels);
        let types = types::merge_types(types::default_types(), &custom_types);
        let longest_label = types::longest_label(&types);
        let log_level = levels.validate(options.log_level.as_deref()).to_string();

        Self {
            interactive: options.interactive.unwrap_or(false),
            config: options.config.unwrap_or_default(),
            custom_types,
            custom_levels,
            levels,
            disabled: options.disabled.unwrap_or(false),
            scope_names: options.scope.unwrap_or_default(),
            scope_formatter: options
                .scope_formatter
                .unwrap_or_else(|| Arc::new(default_scope_formatter)),
            timers: TimerTracker::default(),
            types,
            streams: options.stream.unwrap_or_else(|| vec![StderrSink::handle()]),
            longest_label,
            secrets: options.secrets.unwrap_or_default(),
            log_level,
            context: options
                .interactive_context
                .unwrap_or_else(InteractiveContext::global),
        }
    }

    type_methods! {
        alert => "alert",
        awaiting => "await",
        complete => "complete",
        debug => "debug",
        error => "error",
        fatal => "fatal",
        fav => "fav",
        info => "info",
        log => "log",
        note => "note",
        pause => "pause",
        pending => "pending",
        star => "star",
        start => "start",
        success => "success",
        wait => "wait",
        warn => "warn",
        watch => "watch",
    }

    /// Log through any registered type by name. Unknown names write
    /// nothing.
    #[track_caller]
    pub fn emit(&self, type_name: &str, message: impl Into<LogMessage>) {
        self.emit_for(type_name, message.into(), Location::caller());
    }

    /// Replace the display configuration.
    pub fn config(&mut self, config: Config) {
        self.config = config;
    }

    pub fn disable(&mut self) {
        self.disabled = true;
    }

    pub fn enable(&mut self) {
        self.disabled = false;
    }

    pub fn is_enabled(&self) -> bool {
        !self.disabled
    }

    /// Register literal values to be replaced with `[secure]` in every
    /// formatted line.
    pub fn add_secrets<I, S>(&mut self, secrets: I)
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        self.secrets
            .extend(secrets.into_iter().map(|s| s.to_string()));
    }

    pub fn clear_secrets(&mut self) {
        self.secrets.clear();
    }

    /// The scope path as displayed: raw segments minus empty ones.
    pub fn scope_path(&self) -> Vec<String> {
        scope::scope_path(&self.scope_names)
    }

    /// Derive an instance whose scope path is exactly `names`,
    /// replacing the current path. Errors when no names are given.
    pub fn scope<I, S>(&self, names: I) -> Result<Logger, Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            return Err(Error::NoScopeName);
        }

        Ok(self.scoped(names))
    }

    /// Derive an instance with `name` appended to the current scope path.
    pub fn child(&self, name: impl Into<String>) -> Logger {
        let mut path = self.scope_path();
        path.push(name.into());
        self.scoped(path)
    }

    /// Clear the scope path on this instance.
    pub fn unscope(&mut self) {
        self.scope_names.clear();
    }

    /// Derive an instance from this one's current effective options
    /// overlaid with `options` (new fields win). Timer state is copied by
    /// value. Note that the scope path is not part of the effective
    /// options: pass one explicitly (or use [`scope`](Logger::scope) /
    /// [`child`](Logger::child)) to keep it.
    pub fn clone_with(&self, options: Options) -> Logger {
        let mut instance = Logger::new(self.current_options().merged_with(options));
        instance.timers = self.timers.clone();
        instance
    }

    /// Start a timer and log an "Initialized timer..." line at `timer`
    /// severity. Without a label, `timer_<n>` is synthesized and kept on
    /// a stack so a label-less [`time_end`](Logger::time_end) finds it.
    #[track_caller]
    pub fn time(&mut self, label: Option<&str>) -> String {
        let caller = Location::caller();
        let label = self.timers.start(label.map(str::to_string));

        let mut parts = self.meta(caller);
        let badge = self.badge_of("start");
        parts.push(style::paint("green", &style::pad_end(badge, 2)));
        parts.push(self.timer_label(&label, "green"));
        parts.push("Initialized timer...".to_string());
        self.write_gated(&parts.join(" "), &self.streams, "timer");

        label
    }

    /// Stop a timer and log its elapsed time. A label-less call stops
    /// the most recently started label-less timer; an untracked label is
    /// a silent no-op.
    #[track_caller]
    pub fn time_end(&mut self, label: Option<&str>) -> Option<TimeEndResult> {
        let caller = Location::caller();
        let (label, span) = self.timers.stop(label.map(str::to_string))?;

        let mut parts = self.meta(caller);
        let badge = self.badge_of("pause");
        parts.push(style::paint("red", &style::pad_end(badge, 2)));
        parts.push(self.timer_label(&label, "red"));
        parts.push("Timer run for:".to_string());
        parts.push(style::paint("yellow", &timers::format_span(span)));
        self.write_gated(&parts.join(" "), &self.streams, "timer");

        Some(TimeEndResult { label, span })
    }

    fn scoped(&self, names: Vec<String>) -> Logger {
        self.clone_with(Options::new().scopes(names))
    }

    fn current_options(&self) -> Options {
        Options::new()
            .config(self.config.clone())
            .disabled(self.disabled)
            .interactive(self.interactive)
            .log_level(self.log_level.clone())
            .log_levels(self.custom_levels.clone())
            .scope_formatter_handle(self.scope_formatter.clone())
            .secrets(self.secrets.clone())
            .streams(self.streams.clone())
            .types(self.custom_types.clone())
            .interactive_context(self.context.clone())
    }

    fn badge_of(&self, type_name: &str) -> &str {
        self.types
            .get(type_name)
            .map(|spec| spec.badge.as_str())
            .unwrap_or("")
    }

    fn emit_for(&self, type_name: &str, message: LogMessage, caller: &'static Location<'static>) {
        let spec = match self.types.get(type_name) {
            Some(spec) => spec,
            None => return,
        };

        let line = self.compose(spec, message, caller);
        let line = secrets::redact(&line, &self.secrets);
        let level = self.levels.validate(spec.log_level.as_deref());
        let streams = spec.stream.as_deref().unwrap_or(&self.streams);
        self.write_gated(&line, streams, level);
    }

    /// Assemble the final line: meta, prefix, badge, label, body, suffix.
    fn compose(
        &self,
        spec: &TypeSpec,
        message: LogMessage,
        caller: &'static Location<'static>,
    ) -> String {
        let mut parts = self.meta(caller);

        let mut failure = None;
        let mut extra = Structured::default();
        let body = match message {
            LogMessage::Failure(details) => {
                failure = Some(details);
                String::new()
            }
            LogMessage::Structured(structured) => {
                extra.prefix = structured.prefix.clone();
                extra.suffix = structured.suffix.clone();
                match &structured.message {
                    Some(message) => message.clone(),
                    None if extra.prefix.is_some() || extra.suffix.is_some() => String::new(),
                    None => format!("{:?}", structured),
                }
            }
            LogMessage::Raw(raw) => format_parts(&raw),
        };

        if let Some(prefix) = &extra.prefix {
            if self.config.underline_prefix {
                parts.push(style::underlined(prefix));
            } else {
                parts.push(prefix.clone());
            }
        }

        let color = spec.color.as_str();

        if self.config.display_badge && !spec.badge.is_empty() {
            let target = spec.badge.chars().count() + 1;
            parts.push(style::paint(color, &style::pad_end(&spec.badge, target)));
        }

        if self.config.display_label && !spec.label.is_empty() {
            let label = if self.config.uppercase_label {
                spec.label.to_uppercase()
            } else {
                spec.label.clone()
            };
            let padded = if self.config.underline_label {
                let target = style::underlined(&self.longest_label).chars().count() + 1;
                style::pad_end(&style::underlined(&label), target)
            } else {
                style::pad_end(&label, self.longest_label.chars().count() + 1)
            };
            parts.push(style::paint(color, &padded));
        }

        if let Some(details) = failure {
            if self.config.underline_message {
                parts.push(style::underlined(&details.summary));
            } else {
                parts.push(details.summary);
            }

            let trace: String = details
                .trace
                .iter()
                .map(|line| format!("\n{}", line))
                .collect();
            parts.push(style::muted(&trace));
            return parts.join(" ");
        }

        if self.config.underline_message {
            parts.push(style::underlined(&body));
        } else {
            parts.push(body);
        }

        if let Some(suffix) = &extra.suffix {
            if self.config.underline_suffix {
                parts.push(style::underlined(suffix));
            } else {
                parts.push(suffix.clone());
            }
        }

        parts.join(" ")
    }

    /// Muted meta pieces: date, time, caller filename, scope, each behind
    /// its display flag, with a pointer glyph closing a non-empty list.
    fn meta(&self, caller: &'static Location<'static>) -> Vec<String> {
        let mut meta = vec![];

        if self.config.display_date {
            meta.push(format!("[{}]", Local::now().format("%Y-%m-%d")));
        }

        if self.config.display_timestamp {
            meta.push(format!("[{}]", Local::now().format("%H:%M:%S")));
        }

        if self.config.display_filename {
            meta.push(format!("[{}]", caller_filename(caller)));
        }

        let path = self.scope_path();
        if !path.is_empty() && self.config.display_scope {
            meta.push((self.scope_formatter)(&path));
        }

        if !meta.is_empty() {
            meta.push(glyphs::POINTER_SMALL.to_string());
            return meta.iter().map(|piece| style::muted(piece)).collect();
        }

        meta
    }

    fn timer_label(&self, label: &str, color: &str) -> String {
        if self.config.underline_label {
            let target = style::underlined(&self.longest_label).chars().count() + 1;
            style::paint(color, &style::pad_end(&style::underlined(label), target))
        } else {
            let target = self.longest_label.chars().count() + 1;
            style::paint(color, &style::pad_end(label, target))
        }
    }

    fn write_gated(&self, line: &str, streams: &[SinkHandle], level: &str) {
        if self.is_enabled() && self.levels.should_emit(level, &self.log_level) {
            for sink in streams {
                if self.interactive && sink.is_terminal() && self.context.previous_was_interactive()
                {
                    sink.erase_last_line();
                }
                sink.write_line(line);
                self.context.set_previous_interactive(self.interactive);
            }
        }
    }
}

fn caller_filename(caller: &Location) -> String {
    std::path::Path::new(caller.file())
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| caller.file().to_string())
}
