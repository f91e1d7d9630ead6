use crate::utils::setup;
use anyhow::Result;
use insignia::{Logger, Options};

#[test]
fn scoped_clone_replaces_the_path() -> Result<()> {
    let (parent, _sink) = setup(Options::new().scopes(["root"]));
    let worker = parent.scope(["worker"])?;
    k9::assert_equal!(worker.scope_path(), vec!["worker".to_string()]);
    Ok(())
}

#[test]
fn scoped_clone_is_independent_of_the_parent() -> Result<()> {
    let (parent, _sink) = setup(Options::new().scopes(["root"]));
    let mut parent = parent;
    let worker = parent.scope(["worker"])?;

    parent.unscope();
    k9::assert_equal!(worker.scope_path(), vec!["worker".to_string()]);

    let parent = parent.scope(["elsewhere"])?;
    k9::assert_equal!(worker.scope_path(), vec!["worker".to_string()]);
    k9::assert_equal!(parent.scope_path(), vec!["elsewhere".to_string()]);
    Ok(())
}

#[test]
fn child_appends_to_the_current_path() -> Result<()> {
    let (api, _sink) = setup(Options::new().scopes(["api"]));
    let auth = api.child("auth");
    k9::assert_equal!(
        auth.scope_path(),
        vec!["api".to_string(), "auth".to_string()]
    );
    Ok(())
}

#[test]
fn empty_scope_segments_are_dropped_from_the_path() -> Result<()> {
    let (logger, _sink) = setup(Options::new().scopes(["api", "", "auth"]));
    k9::assert_equal!(
        logger.scope_path(),
        vec!["api".to_string(), "auth".to_string()]
    );
    Ok(())
}

// the effective options a clone starts from do not include the scope
// path, so a plain clone comes out unscoped
#[test]
fn plain_clone_drops_the_scope() -> Result<()> {
    let (api, _sink) = setup(Options::new().scopes(["api"]));
    let cloned = api.clone_with(Options::new());
    assert!(cloned.scope_path().is_empty());
    Ok(())
}

#[test]
fn clone_overrides_win_field_by_field() -> Result<()> {
    let (logger, sink) = setup(Options::new().log_level("debug"));
    let quiet = logger.clone_with(Options::new().log_level("error"));

    logger.debug("from parent");
    quiet.debug("from clone");

    // the clone inherited the parent's sink but not its threshold
    k9::assert_equal!(sink.to_string(), "from parent\n");
    Ok(())
}

#[test]
fn clones_copy_timer_state_by_value() -> Result<()> {
    let (logger, _sink) = setup(Options::new());
    let mut logger = logger;
    logger.time(Some("build"));

    let mut cloned = logger.clone_with(Options::new());

    // both instances own a copy of the running timer
    assert!(cloned.time_end(Some("build")).is_some());
    assert!(logger.time_end(Some("build")).is_some());

    // and later activity stays private to each instance
    logger.time(Some("link"));
    k9::assert_equal!(cloned.time_end(Some("link")), None);
    Ok(())
}

#[test]
fn empty_scope_error_message() -> Result<()> {
    let logger = Logger::new(Options::new());
    let names: Vec<String> = vec![];
    let error = logger.scope(names).unwrap_err();
    k9::assert_equal!(error.to_string(), "no scope name was defined");
    Ok(())
}
