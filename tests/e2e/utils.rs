use insignia::{Config, InteractiveContext, Logger, Options, StringSink};

/// Build a logger writing into a capture sink, with an isolated
/// interactive context so tests never couple through the process-wide
/// one.
pub fn setup(options: Options) -> (Logger, StringSink) {
    let sink = StringSink::new();
    let logger = Logger::new(
        options
            .stream(sink.handle())
            .interactive_context(InteractiveContext::new()),
    );
    (logger, sink)
}

pub fn badge_label_config() -> Config {
    Config {
        display_badge: true,
        display_label: true,
        ..Config::default()
    }
}
