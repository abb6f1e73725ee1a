mod common;

use common::*;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;
use unilogger::*;

const FORMAT: &str = "f %s";

/// Calls every wrapper method once, in a fixed order.
fn call_everything(wrapper: &LoggerWrapper) {
    let a = args!["a"];
    wrapper.print(&a);
    wrapper.printf(FORMAT, &a);
    wrapper.println(&a);
    wrapper.fatal(&a);
    wrapper.fatalf(FORMAT, &a);
    wrapper.fatalln(&a);
    wrapper.panic(&a);
    wrapper.panicf(FORMAT, &a);
    wrapper.panicln(&a);
    wrapper.debug3(&a);
    wrapper.debug3f(FORMAT, &a);
    wrapper.debug3ln(&a);
    wrapper.debug2(&a);
    wrapper.debug2f(FORMAT, &a);
    wrapper.debug2ln(&a);
    wrapper.debug(&a);
    wrapper.debugf(FORMAT, &a);
    wrapper.debugln(&a);
    wrapper.info(&a);
    wrapper.infof(FORMAT, &a);
    wrapper.infoln(&a);
    wrapper.warning(&a);
    wrapper.warningf(FORMAT, &a);
    wrapper.warningln(&a);
    wrapper.error(&a);
    wrapper.errorf(FORMAT, &a);
    wrapper.errorln(&a);
}

/// Checks the received calls against `(method, label)` pairs. A label means the
/// call must carry it in front of the arguments, or of the format.
fn assert_calls(calls: Vec<Call>, expected: &[(&str, Option<&str>)]) {
    let methods: Vec<&str> = calls.iter().map(|call| call.method).collect();
    let expected_methods: Vec<&str> = expected.iter().map(|(method, _)| *method).collect();
    assert_eq!(methods, expected_methods);

    for (call, (_, label)) in calls.iter().zip(expected) {
        match (&call.format, label) {
            (Some(format), None) => {
                assert_eq!(format, FORMAT);
                assert_eq!(call.args, args!["a"]);
            }
            (Some(format), Some(label)) => {
                assert_eq!(format, &format!("{}: {}", label, FORMAT));
                assert_eq!(call.args, args!["a"]);
            }
            (None, None) => assert_eq!(call.args, args!["a"], "{}", call.method),
            (None, Some(label)) => {
                assert_eq!(call.args, args![format!("{}: ", label), "a"], "{}", call.method)
            }
        }
    }
}

#[test]
fn std_tier_prints_with_level_labels() {
    let logger = Arc::new(StdOnly::default());
    let wrapper = LoggerWrapper::new(logger.clone()).unwrap();
    assert_eq!(wrapper.tier(), Tier::Std);

    call_everything(&wrapper);
    assert_calls(
        logger.0.take(),
        &[
            ("print", None),
            ("printf", None),
            ("println", None),
            ("fatal", Some("CRITICAL")),
            ("fatalf", Some("CRITICAL")),
            ("fatalln", Some("CRITICAL")),
            ("panic", Some("CRITICAL")),
            ("panicf", Some("CRITICAL")),
            ("panicln", Some("CRITICAL")),
            ("print", Some("DEBUG3")),
            ("printf", Some("DEBUG3")),
            ("println", Some("DEBUG3")),
            ("print", Some("DEBUG2")),
            ("printf", Some("DEBUG2")),
            ("println", Some("DEBUG2")),
            ("print", Some("DEBUG")),
            ("printf", Some("DEBUG")),
            ("println", Some("DEBUG")),
            ("print", Some("INFO")),
            ("printf", Some("INFO")),
            ("println", Some("INFO")),
            ("print", Some("WARNING")),
            ("printf", Some("WARNING")),
            ("println", Some("WARNING")),
            ("print", Some("ERROR")),
            ("printf", Some("ERROR")),
            ("println", Some("ERROR")),
        ],
    );
}

#[test]
fn leveled_tier_collapses_line_variants() {
    let logger = Arc::new(LeveledOnly::default());
    let wrapper = LoggerWrapper::new(logger.clone()).unwrap();
    assert_eq!(wrapper.tier(), Tier::Leveled);

    call_everything(&wrapper);
    assert_calls(
        logger.0.take(),
        &[
            ("info", None),
            ("infof", None),
            ("info", None),
            ("fatal", None),
            ("fatalf", None),
            ("fatal", None),
            ("panic", None),
            ("panicf", None),
            ("panic", None),
            ("debug", None),
            ("debugf", None),
            ("debug", None),
            ("debug", None),
            ("debugf", None),
            ("debug", None),
            ("debug", None),
            ("debugf", None),
            ("debug", None),
            ("info", None),
            ("infof", None),
            ("info", None),
            ("warning", None),
            ("warningf", None),
            ("warning", None),
            ("error", None),
            ("errorf", None),
            ("error", None),
        ],
    );
}

#[test]
fn short_leveled_tier_uses_warn() {
    let logger = Arc::new(ShortOnly::default());
    let wrapper = LoggerWrapper::new(logger.clone()).unwrap();
    assert_eq!(wrapper.tier(), Tier::ShortLeveled);

    call_everything(&wrapper);
    assert_calls(
        logger.0.take(),
        &[
            ("info", None),
            ("infof", None),
            ("info", None),
            ("fatal", None),
            ("fatalf", None),
            ("fatal", None),
            ("panic", None),
            ("panicf", None),
            ("panic", None),
            ("debug", None),
            ("debugf", None),
            ("debug", None),
            ("debug", None),
            ("debugf", None),
            ("debug", None),
            ("debug", None),
            ("debugf", None),
            ("debug", None),
            ("info", None),
            ("infof", None),
            ("info", None),
            ("warn", None),
            ("warnf", None),
            ("warn", None),
            ("error", None),
            ("errorf", None),
            ("error", None),
        ],
    );
}

#[test]
fn extended_tier_forwards_one_to_one() {
    let logger = Arc::new(ExtendedOnly::default());
    let wrapper = LoggerWrapper::new(logger.clone()).unwrap();
    assert_eq!(wrapper.tier(), Tier::Extended);

    call_everything(&wrapper);
    let names = [
        "print", "printf", "println", "fatal", "fatalf", "fatalln", "panic", "panicf", "panicln",
        "debug3", "debug3f", "debug3ln", "debug2", "debug2f", "debug2ln", "debug", "debugf",
        "debugln", "info", "infof", "infoln", "warning", "warningf", "warningln", "error",
        "errorf", "errorln",
    ];
    let expected: Vec<(&str, Option<&str>)> = names.iter().map(|name| (*name, None)).collect();
    assert_calls(logger.0.take(), &expected);
}

#[test]
fn leveled_is_preferred_over_std() {
    let logger = Arc::new(LeveledAndStd::default());
    let wrapper = LoggerWrapper::new(logger.clone()).unwrap();
    assert_eq!(wrapper.tier(), Tier::Leveled);

    wrapper.print(&args!["hello"]);
    assert_eq!(
        logger.0.take(),
        [Call {
            method: "info",
            format: None,
            args: args!["hello"].to_vec(),
        }]
    );
}

#[test]
fn warning_on_std_logger() {
    let logger = Arc::new(StdOnly::default());
    let wrapper = LoggerWrapper::must(logger.clone());

    wrapper.warning(&args!["disk full"]);
    let calls = logger.0.take();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].method, "print");
    assert_eq!(calls[0].args, args!["WARNING: ", "disk full"]);
    assert_eq!(format::render(None, &calls[0].args), "WARNING: disk full");
}

#[test]
fn formatted_warning_on_std_logger() {
    let logger = Arc::new(StdOnly::default());
    let wrapper = LoggerWrapper::must(logger.clone());

    wrapper.warningf("%d%% used", &args![97]);
    let calls = logger.0.take();
    assert_eq!(calls[0].format.as_deref(), Some("WARNING: %d%% used"));
    assert_eq!(format::render(calls[0].format.as_deref(), &calls[0].args), "WARNING: 97% used");
}

#[test]
fn debugln_on_leveled_logger() {
    let logger = Arc::new(LeveledOnly::default());
    LoggerWrapper::must(logger.clone()).debugln(&args!["x"]);
    assert_eq!(
        logger.0.take(),
        [Call {
            method: "debug",
            format: None,
            args: args!["x"].to_vec(),
        }]
    );
}

#[test]
fn clones_share_the_wrapped_logger() {
    let logger = Arc::new(ShortOnly::default());
    let wrapper = LoggerWrapper::must(logger.clone());
    let clone = wrapper.clone();
    wrapper.info(&args![1]);
    clone.info(&args![2]);
    assert_eq!(logger.0.take().len(), 2);
}

#[test]
fn unknown_logger_is_rejected() {
    let err = LoggerWrapper::new(Arc::new(NonLogger)).unwrap_err();
    assert!(matches!(err, Error::Unrecognized));
    assert_eq!(err.to_string(), "provided logger doesn't implement any known logging interface");

    let result = catch_unwind(AssertUnwindSafe(|| LoggerWrapper::must(Arc::new(NonLogger))));
    assert!(result.is_err());
}

#[test]
fn wrap_takes_ownership() {
    let wrapper = LoggerWrapper::wrap(StdOnly::default()).unwrap();
    assert_eq!(wrapper.tier(), Tier::Std);
    assert!(LoggerWrapper::wrap(NonLogger).is_err());
}

#[test]
fn basic_logger_through_the_wrapper() {
    let buffer = MemoryBuffer::new();
    let logger = BasicLogger::new(Sink::writer(buffer.clone())).with_counter(SequenceCounter::new());
    logger.set_level(Level::Debug2);
    let wrapper = LoggerWrapper::new(Arc::new(logger)).unwrap();
    assert_eq!(wrapper.tier(), Tier::Extended);

    wrapper.debug3(&args!["hidden"]);
    wrapper.debug2ln(&args!["verbose"]);
    wrapper.warningf("%s is %d%% full", &args!["disk", 91]);
    wrapper.println(&args!["plain"]);

    assert_eq!(
        buffer.contents(),
        "DEBUG2|0001: verbose\nWARNING|0002: disk is 91% full\nINFO|0003: plain\n"
    );
}

#[test]
fn panics_raised_by_the_wrapped_logger_propagate() {
    let buffer = MemoryBuffer::new();
    let logger = BasicLogger::new(Sink::writer(buffer.clone())).with_counter(SequenceCounter::new());
    let wrapper = LoggerWrapper::new(Arc::new(logger)).unwrap();

    let result = catch_unwind(AssertUnwindSafe(|| wrapper.panicln(&args!["gone"])));
    assert!(result.is_err());
    assert_eq!(buffer.contents(), "CRITICAL|0001: gone\n");
}
