use crate::utils::{badge_label_config, setup};
use anyhow::Result;
use insignia::{
    bars_scope_formatter, Config, InteractiveContext, LogMessage, Logger, Options,
    PartialTypeSpec, StringSink, Structured,
};
use std::collections::BTreeMap;

#[test]
fn default_config_prints_the_bare_body() -> Result<()> {
    let (logger, sink) = setup(Options::new());
    logger.info("hello");
    k9::assert_equal!(sink.to_string(), "hello\n");
    Ok(())
}

#[test]
fn badge_and_label_precede_the_message() -> Result<()> {
    let (logger, sink) = setup(Options::new().config(badge_label_config()).log_level("info"));
    logger.warn("unable to reach the registry");

    // badge padded to badge+1, label padded to longest-label+1
    k9::assert_equal!(sink.to_string(), "⚠  warning   unable to reach the registry\n");
    Ok(())
}

#[test]
fn multi_part_messages_join_with_spaces() -> Result<()> {
    let (logger, sink) = setup(Options::new());
    logger.info(LogMessage::raw(["sent", "3", "requests"]));
    k9::assert_equal!(sink.to_string(), "sent 3 requests\n");
    Ok(())
}

#[test]
fn scope_renders_in_front_of_the_line() -> Result<()> {
    let (logger, sink) = setup(Options::new().scopes(["api", "auth"]).config(Config {
        display_scope: true,
        ..Config::default()
    }));
    logger.info("ready");
    k9::assert_equal!(sink.to_string(), "[api::auth] › ready\n");
    Ok(())
}

#[test]
fn bars_scope_formatter_brackets_each_segment() -> Result<()> {
    let (logger, sink) = setup(
        Options::new()
            .scopes(["api", "auth"])
            .scope_formatter(bars_scope_formatter)
            .config(Config {
                display_scope: true,
                ..Config::default()
            }),
    );
    logger.info("ready");
    k9::assert_equal!(sink.to_string(), "[api] [auth] › ready\n");
    Ok(())
}

#[test]
fn filename_meta_names_the_calling_file() -> Result<()> {
    let (logger, sink) = setup(Options::new().config(Config {
        display_filename: true,
        ..Config::default()
    }));
    logger.info("here");
    k9::assert_equal!(sink.to_string(), "[basic_test.rs] › here\n");
    Ok(())
}

#[test]
fn custom_level_ranks_participate_in_filtering() -> Result<()> {
    let mut levels = BTreeMap::new();
    levels.insert("trace".to_string(), -1);
    let mut types = BTreeMap::new();
    types.insert(
        "trace".to_string(),
        PartialTypeSpec::new().label("trace").log_level("trace"),
    );

    // active level defaults to debug (rank 0), so rank -1 stays quiet
    let (logger, sink) = setup(Options::new().log_levels(levels).types(types));
    logger.emit("trace", "very quiet");
    logger.info("normal");
    k9::assert_equal!(sink.to_string(), "normal\n");
    Ok(())
}

#[test]
fn config_replaces_the_display_toggles() -> Result<()> {
    let (mut logger, sink) = setup(Options::new().config(badge_label_config()));
    logger.config(Config::default());
    logger.info("plain again");
    k9::assert_equal!(sink.to_string(), "plain again\n");
    Ok(())
}

#[test]
fn active_level_filters_lower_ranked_types() -> Result<()> {
    let (logger, sink) = setup(Options::new().log_level("warn"));
    logger.debug("noise");
    logger.info("still noise");
    logger.error("boom");
    k9::assert_equal!(sink.to_string(), "boom\n");
    Ok(())
}

#[test]
fn disabled_instance_writes_nothing() -> Result<()> {
    let (mut logger, sink) = setup(Options::new());
    logger.disable();
    assert!(!logger.is_enabled());
    logger.info("hidden");

    logger.enable();
    logger.info("shown");
    k9::assert_equal!(sink.to_string(), "shown\n");
    Ok(())
}

#[test]
fn custom_types_log_through_emit() -> Result<()> {
    let mut types = BTreeMap::new();
    types.insert(
        "santa".to_string(),
        PartialTypeSpec::new().badge("🎅").color("red").label("santa"),
    );

    let (logger, sink) = setup(Options::new().types(types).config(badge_label_config()));
    logger.emit("santa", "ho ho ho");
    k9::assert_equal!(sink.to_string(), "🎅  santa     ho ho ho\n");
    Ok(())
}

#[test]
fn unknown_type_name_is_a_silent_noop() -> Result<()> {
    let (logger, sink) = setup(Options::new());
    logger.emit("no_such_type", "nothing");
    k9::assert_equal!(sink.to_string(), "");
    Ok(())
}

#[test]
fn structured_messages_carry_prefix_and_suffix() -> Result<()> {
    let (logger, sink) = setup(Options::new());
    logger.info(
        Structured::new()
            .message("pushed commit")
            .prefix("[ci]")
            .suffix("(main)"),
    );
    k9::assert_equal!(sink.to_string(), "[ci] pushed commit (main)\n");
    Ok(())
}

#[test]
fn prefix_without_message_leaves_the_body_empty() -> Result<()> {
    let (logger, sink) = setup(Options::new());
    logger.info(Structured::new().prefix("[ci]"));
    k9::assert_equal!(sink.to_string(), "[ci] \n");
    Ok(())
}

#[test]
fn empty_structured_value_is_format_printed() -> Result<()> {
    let (logger, sink) = setup(Options::new());
    logger.info(Structured::new());
    k9::assert_equal!(
        sink.to_string(),
        "Structured { message: None, prefix: None, suffix: None }\n"
    );
    Ok(())
}

#[derive(Debug)]
struct DeployFailed {
    cause: std::io::Error,
}

impl std::fmt::Display for DeployFailed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "deploy failed")
    }
}

impl std::error::Error for DeployFailed {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.cause)
    }
}

#[test]
fn errors_render_summary_then_muted_cause_chain() -> Result<()> {
    let (logger, sink) = setup(Options::new());

    let error = DeployFailed {
        cause: std::io::Error::new(std::io::ErrorKind::ConnectionReset, "connection reset"),
    };
    logger.error(LogMessage::from_error(&error));

    k9::assert_equal!(
        sink.to_string(),
        "deploy failed \n    caused by: connection reset\n"
    );
    Ok(())
}

#[test]
fn per_type_sink_overrides_route_around_the_default() -> Result<()> {
    let default_sink = StringSink::new();
    let error_sink = StringSink::new();

    let mut types = BTreeMap::new();
    types.insert(
        "error".to_string(),
        PartialTypeSpec::new().stream(vec![error_sink.handle()]),
    );

    let logger = Logger::new(
        Options::new()
            .stream(default_sink.handle())
            .types(types)
            .interactive_context(InteractiveContext::new()),
    );

    logger.info("to default");
    logger.error("to error sink");

    k9::assert_equal!(default_sink.to_string(), "to default\n");
    k9::assert_equal!(error_sink.to_string(), "to error sink\n");
    Ok(())
}

#[test]
fn every_configured_sink_receives_the_line() -> Result<()> {
    let first = StringSink::new();
    let second = StringSink::new();
    let logger = Logger::new(
        Options::new()
            .streams([first.handle(), second.handle()])
            .interactive_context(InteractiveContext::new()),
    );

    logger.info("fan out");

    k9::assert_equal!(first.to_string(), "fan out\n");
    k9::assert_equal!(second.to_string(), "fan out\n");
    Ok(())
}

#[test]
fn uppercase_label_toggle() -> Result<()> {
    let (logger, sink) = setup(Options::new().config(Config {
        display_label: true,
        uppercase_label: true,
        ..Config::default()
    }));
    logger.success("done");
    k9::assert_equal!(sink.to_string(), "SUCCESS   done\n");
    Ok(())
}
