use crossterm::tty::IsTty;
use crossterm::{cursor, execute, terminal};
use std::io::Write;
use std::sync::{Arc, Mutex};

/// An output destination for finished log lines. Writes are
/// fire-and-forget; sink lifecycle belongs to the caller.
pub trait Sink: Send + Sync {
    /// Write one line. The trailing newline is the sink's job so that
    /// in-memory sinks can keep line boundaries intact.
    fn write_line(&self, line: &str);

    /// Whether this sink is an interactive terminal. Only terminal sinks
    /// take part in the single-line-redraw protocol.
    fn is_terminal(&self) -> bool {
        false
    }

    /// Erase the previously written line: cursor up one line, clear it,
    /// back to column zero.
    fn erase_last_line(&self) {}
}

pub type SinkHandle = Arc<dyn Sink>;

/// The default sink. Logging goes to STDERR so that a CLI's actual
/// output stays clean on STDOUT.
pub struct StderrSink;

impl StderrSink {
    pub fn new() -> Self {
        Self
    }

    pub fn handle() -> SinkHandle {
        Arc::new(Self::new())
    }
}

impl Sink for StderrSink {
    fn write_line(&self, line: &str) {
        let mut stderr = std::io::stderr();
        writeln!(stderr, "{}", line).ok();
    }

    fn is_terminal(&self) -> bool {
        std::io::stderr().is_tty()
    }

    fn erase_last_line(&self) {
        let mut stderr = std::io::stderr();
        execute!(
            stderr,
            cursor::MoveUp(1),
            terminal::Clear(terminal::ClearType::CurrentLine),
            cursor::MoveToColumn(0)
        )
        .ok();
    }
}

pub struct StdoutSink;

impl StdoutSink {
    pub fn new() -> Self {
        Self
    }

    pub fn handle() -> SinkHandle {
        Arc::new(Self::new())
    }
}

impl Sink for StdoutSink {
    fn write_line(&self, line: &str) {
        let mut stdout = std::io::stdout();
        writeln!(stdout, "{}", line).ok();
    }

    fn is_terminal(&self) -> bool {
        std::io::stdout().is_tty()
    }

    fn erase_last_line(&self) {
        let mut stdout = std::io::stdout();
        execute!(
            stdout,
            cursor::MoveUp(1),
            terminal::Clear(terminal::ClearType::CurrentLine),
            cursor::MoveToColumn(0)
        )
        .ok();
    }
}

/// Captures lines into a string that can later be inspected or dumped.
/// ANSI escapes are stripped by default so tests compare plain text.
/// `pretend_terminal` opts the sink into the redraw protocol, with erase
/// modeled by dropping the last captured line.
#[derive(Clone)]
pub struct StringSink {
    pub output: Arc<Mutex<String>>,
    strip_ansi: bool,
    pretend_terminal: bool,
}

impl StringSink {
    pub fn new() -> Self {
        Self {
            output: Arc::new(Mutex::new(String::new())),
            strip_ansi: true,
            pretend_terminal: false,
        }
    }

    pub fn terminal() -> Self {
        Self {
            pretend_terminal: true,
            ..Self::new()
        }
    }

    pub fn handle(&self) -> SinkHandle {
        Arc::new(self.clone())
    }
}

pub fn strip_ansi(s: &str) -> String {
    String::from_utf8(
        strip_ansi_escapes::strip(s).expect("Cant strip ANSI escape characters from a string"),
    )
    .expect("not a utf8 string")
}

impl Sink for StringSink {
    fn write_line(&self, line: &str) {
        let mut rendered = line.to_string();
        if self.strip_ansi {
            rendered = strip_ansi(&rendered);
        }
        let mut output = self.output.lock().expect("poisoned lock");
        output.push_str(&rendered);
        output.push('\n');
    }

    fn is_terminal(&self) -> bool {
        self.pretend_terminal
    }

    fn erase_last_line(&self) {
        let mut output = self.output.lock().expect("poisoned lock");
        if let Some(without_newline) = output.strip_suffix('\n') {
            match without_newline.rfind('\n') {
                Some(i) => output.truncate(i + 1),
                None => output.clear(),
            }
        }
    }
}

impl std::fmt::Display for StringSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let output = self.output.lock().expect("poisoned lock");
        write!(f, "{}", &output)
    }
}
