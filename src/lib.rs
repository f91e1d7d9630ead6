/*!
# insignia - badge and label console logging

**insignia** formats short, typed log lines for CLI tools: every message
goes through a named type (`info`, `warn`, `success`, custom ones) that
carries a badge glyph, a color and a label, and comes out as a single
colorized line on one or more output sinks.

Loggers are derived, not mutated into shape: [`Logger::scope`] and
[`Logger::child`] produce namespaced children, [`Logger::clone_with`]
overlays new options on the current ones. Lines respect a severity
threshold, secrets can be redacted, timers can be started and stopped,
and interactive loggers redraw their previous line in place on terminal
sinks.

Example

```
use insignia::{Config, Logger, Options};

let logger = Logger::new(Options::new().config(Config {
    display_badge: true,
    display_label: true,
    ..Config::default()
}));

logger.success("project deployed");
logger.warn("quota almost used up");

let api = logger.scope(["api", "auth"]).unwrap();
api.info("token refreshed");
```

 */
#![allow(clippy::new_without_default)]

pub mod config;
pub mod error;
pub mod glyphs;
pub mod interactive;
pub mod level;
pub mod logger;
pub mod message;
pub mod scope;
pub mod streams;
pub mod types;

mod secrets;
mod style;
mod timers;

pub use config::{Config, Options};
pub use error::Error;
pub use interactive::InteractiveContext;
pub use logger::{Logger, TimeEndResult};
pub use message::{ErrorDetails, LogMessage, Structured};
pub use scope::{bars_scope_formatter, default_scope_formatter, ScopeFormatter};
pub use streams::{Sink, SinkHandle, StderrSink, StdoutSink, StringSink};
pub use types::{PartialTypeSpec, TypeSpec};
