use crate::utils::setup;
use anyhow::Result;
use insignia::Options;

#[test]
fn timer_round_trip_logs_start_and_elapsed_lines() -> Result<()> {
    let (mut logger, sink) = setup(Options::new());

    let label = logger.time(None);
    k9::assert_equal!(label, "timer_0");

    let result = logger.time_end(None).unwrap();
    k9::assert_equal!(result.label, "timer_0");

    let output = sink.to_string();
    let lines: Vec<&str> = output.lines().collect();
    k9::assert_equal!(lines.len(), 2);
    k9::assert_equal!(lines[0], "▶  timer_0   Initialized timer...");
    assert!(
        lines[1].starts_with("◼  timer_0   Timer run for:"),
        "unexpected line: {}",
        lines[1]
    );
    Ok(())
}

#[test]
fn label_less_timers_stop_in_lifo_order() -> Result<()> {
    let (mut logger, _sink) = setup(Options::new());

    k9::assert_equal!(logger.time(None), "timer_0");
    k9::assert_equal!(logger.time(None), "timer_1");

    k9::assert_equal!(logger.time_end(None).unwrap().label, "timer_1");
    k9::assert_equal!(logger.time_end(None).unwrap().label, "timer_0");
    k9::assert_equal!(logger.time_end(None), None);
    Ok(())
}

#[test]
fn stopping_a_timer_twice_returns_nothing_the_second_time() -> Result<()> {
    let (mut logger, _sink) = setup(Options::new());
    logger.time(Some("build"));

    assert!(logger.time_end(Some("build")).is_some());
    k9::assert_equal!(logger.time_end(Some("build")), None);
    Ok(())
}

#[test]
fn named_timers_skip_the_label_less_stack() -> Result<()> {
    let (mut logger, _sink) = setup(Options::new());
    logger.time(Some("build"));

    // nothing label-less is running
    k9::assert_equal!(logger.time_end(None), None);
    assert!(logger.time_end(Some("build")).is_some());
    Ok(())
}

#[test]
fn timer_lines_respect_the_level_gate() -> Result<()> {
    let (mut logger, sink) = setup(Options::new().log_level("error"));

    // bookkeeping still works even though nothing is written
    let label = logger.time(None);
    let result = logger.time_end(None);
    k9::assert_equal!(label, "timer_0");
    assert!(result.is_some());
    k9::assert_equal!(sink.to_string(), "");
    Ok(())
}
