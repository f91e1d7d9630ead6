/// What a log call was given, decided up front instead of probing values
/// mid-format.
#[derive(Debug, Clone)]
pub enum LogMessage {
    /// Plain message parts, joined with single spaces into the body.
    Raw(Vec<String>),
    /// A message plus decorated prefix/suffix fragments. Quirk: when all
    /// three fields are unset the whole value is format-printed as the
    /// body.
    Structured(Structured),
    /// An error with its cause chain, rendered as a first line plus a
    /// muted trace.
    Failure(ErrorDetails),
}

impl LogMessage {
    pub fn raw<I, S>(parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Raw(parts.into_iter().map(Into::into).collect())
    }

    pub fn from_error(error: &dyn std::error::Error) -> Self {
        Self::Failure(ErrorDetails::from_error(error))
    }
}

impl From<&str> for LogMessage {
    fn from(message: &str) -> Self {
        Self::Raw(vec![message.to_string()])
    }
}

impl From<String> for LogMessage {
    fn from(message: String) -> Self {
        Self::Raw(vec![message])
    }
}

impl From<std::fmt::Arguments<'_>> for LogMessage {
    fn from(args: std::fmt::Arguments<'_>) -> Self {
        Self::Raw(vec![args.to_string()])
    }
}

impl From<Structured> for LogMessage {
    fn from(structured: Structured) -> Self {
        Self::Structured(structured)
    }
}

impl From<ErrorDetails> for LogMessage {
    fn from(details: ErrorDetails) -> Self {
        Self::Failure(details)
    }
}

/// Message body with optional prefix/suffix fragments placed around the
/// badge/label block.
#[derive(Debug, Clone, Default)]
pub struct Structured {
    pub message: Option<String>,
    pub prefix: Option<String>,
    pub suffix: Option<String>,
}

impl Structured {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }
}

/// An error flattened for display: the error's own message, then one
/// line per cause in the `source()` chain.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorDetails {
    pub summary: String,
    pub trace: Vec<String>,
}

impl ErrorDetails {
    pub fn from_error(error: &dyn std::error::Error) -> Self {
        let mut trace = vec![];
        let mut source = error.source();
        while let Some(cause) = source {
            trace.push(format!("    caused by: {}", cause));
            source = cause.source();
        }

        Self {
            summary: error.to_string(),
            trace,
        }
    }
}

/// Join message parts the way a printf-style formatter would join plain
/// arguments.
pub(crate) fn format_parts(parts: &[String]) -> String {
    parts.join(" ")
}
