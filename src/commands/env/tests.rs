//! Tests for the `env` command pipeline.

use super::*;
use crate::exit_codes;
use crate::properties::PropertySet;
use crate::test_support::{ScriptedSource, SharedBuffer};

fn args(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|s| s.to_string()).collect()
}

fn capturing_runner() -> (ProcessRunner, SharedBuffer) {
    let out = SharedBuffer::default();
    let runner = ProcessRunner::with_sinks(Box::new(out.clone()), Box::new(SharedBuffer::default()));
    (runner, out)
}

fn spring_props() -> PropertySet {
    [("spring.application.name", "Senv")].into_iter().collect()
}

#[test]
fn test_empty_command_fails_before_fetch() {
    let mut source = ScriptedSource::with_props(spring_props());
    let (mut runner, out) = capturing_runner();

    let err = run_env(&mut source, &mut runner, EnvOptions::default(), &[]).unwrap_err();

    assert!(matches!(err, SenvError::InvalidInvocation(_)));
    assert!(source.calls.is_empty());
    assert!(out.contents().is_empty());
}

#[test]
fn test_fetch_error_aborts_before_launch() {
    let mut source = ScriptedSource {
        fetch_error: Some("connection refused".to_string()),
        ..Default::default()
    };
    let (mut runner, out) = capturing_runner();

    let err = run_env(&mut source, &mut runner, EnvOptions::default(), &args(&["echo", "hi"]))
        .unwrap_err();

    assert!(matches!(err, SenvError::ConfigFetch(_)));
    assert_eq!(err.exit_code(), exit_codes::FETCH_FAILURE);
    assert_eq!(source.calls, vec!["fetch"]);
    assert!(out.contents().is_empty());
}

#[test]
fn test_process_error_aborts_before_launch() {
    let mut source = ScriptedSource {
        process_error: Some("bad document".to_string()),
        ..Default::default()
    };
    let (mut runner, out) = capturing_runner();

    let err = run_env(&mut source, &mut runner, EnvOptions::default(), &args(&["echo", "hi"]))
        .unwrap_err();

    assert!(matches!(err, SenvError::ConfigFetch(_)));
    assert_eq!(source.calls, vec!["fetch", "process"]);
    assert!(out.contents().is_empty());
}

#[cfg(unix)]
#[test]
fn test_properties_reach_the_child() {
    let mut source = ScriptedSource::with_props(spring_props());
    let (mut runner, _out) = capturing_runner();

    let result = run_env(
        &mut source,
        &mut runner,
        EnvOptions::default(),
        &args(&["/bin/sh", "-c", "printf %s \"$SPRING_APPLICATION_NAME\""]),
    )
    .unwrap();

    assert_eq!(result.exit_code, 0);
    assert_eq!(result.stdout, b"Senv");
    assert_eq!(source.calls, vec!["fetch", "process"]);
}

#[cfg(unix)]
#[test]
fn test_nosysenv_passes_only_properties() {
    let mut source = ScriptedSource::with_props(spring_props());
    let (mut runner, _out) = capturing_runner();
    let options = EnvOptions {
        include_system: false,
        ..Default::default()
    };

    let result = run_env(&mut source, &mut runner, options, &args(&["/usr/bin/env"])).unwrap();

    assert_eq!(
        String::from_utf8_lossy(&result.stdout),
        "SPRING_APPLICATION_NAME=Senv\n"
    );
}

#[cfg(unix)]
#[test]
fn test_unsanitized_keys_are_passed_as_is() {
    let mut source = ScriptedSource::with_props(spring_props());
    let (mut runner, _out) = capturing_runner();
    let options = EnvOptions {
        include_system: false,
        sanitize: false,
        ..Default::default()
    };

    let result = run_env(&mut source, &mut runner, options, &args(&["/usr/bin/env"])).unwrap();

    assert_eq!(
        String::from_utf8_lossy(&result.stdout),
        "spring.application.name=Senv\n"
    );
}

#[cfg(unix)]
#[test]
fn test_child_exit_code_is_returned() {
    let mut source = ScriptedSource::default();
    let (mut runner, _out) = capturing_runner();

    let result = run_env(
        &mut source,
        &mut runner,
        EnvOptions::default(),
        &args(&["/bin/sh", "-c", "exit 7"]),
    )
    .unwrap();

    assert_eq!(result.exit_code, 7);
}

#[test]
fn test_missing_executable_is_launch_failure() {
    let mut source = ScriptedSource::default();
    let (mut runner, _out) = capturing_runner();

    let err = run_env(
        &mut source,
        &mut runner,
        EnvOptions::default(),
        &args(&["nonexistent_command_xyz_123"]),
    )
    .unwrap_err();

    assert!(matches!(err, SenvError::LaunchFailure { .. }));
    assert_eq!(err.exit_code(), exit_codes::LAUNCH_FAILURE);
}

#[test]
fn test_options_from_args() {
    let args = EnvArgs {
        nosysenv: true,
        json: true,
        verbose: false,
        sanitize: false,
        command: Vec::new(),
    };

    let options = EnvOptions::from(&args);

    assert!(!options.include_system);
    assert!(!options.sanitize);
    assert!(options.json);
    assert!(!options.verbose);
}

#[test]
fn test_default_name_warns() {
    let warning = default_name_warning(&ClientConfig::default()).unwrap();
    assert_eq!(
        warning,
        "warning: no application name given, using default 'application'"
    );
}

#[test]
fn test_explicit_name_does_not_warn() {
    let config = ClientConfig::new("localhost", 8080, "billing", &[], None, None).unwrap();
    assert!(default_name_warning(&config).is_none());
}
