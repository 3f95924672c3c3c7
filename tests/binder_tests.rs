// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for binding values and absorbing tokens.
//!
//! These tests drive binders the way a command-line engine would and check
//! what ends up in the destinations handed back to the caller.

mod common;

use common::engine::MiniEngine;
use common::PathFixture;
use flagbind::prelude::*;
use std::collections::BTreeMap;
use std::io::Read;
use std::net::IpAddr;

#[test]
fn test_parse_strings() {
    let mut binder = Binder::new();
    let v = binder.strings().unwrap();
    binder.absorb("a").unwrap();
    binder.absorb("b").unwrap();
    assert_eq!(v.get(), vec!["a".to_string(), "b".to_string()]);
}

#[test]
fn test_parse_string_map() {
    let mut binder = Binder::new();
    let v = binder.string_map().unwrap();
    binder.absorb("a=b").unwrap();
    binder.absorb("b=c").unwrap();

    let mut expected = BTreeMap::new();
    expected.insert("a".to_string(), "b".to_string());
    expected.insert("b".to_string(), "c".to_string());
    assert_eq!(v.get(), expected);

    binder.absorb("a=z").unwrap();
    assert_eq!(v.borrow().len(), 2);
    assert_eq!(v.borrow()["a"], "z");
}

#[test]
fn test_parse_string_map_malformed() {
    let mut binder = Binder::new();
    let v = binder.string_map().unwrap();
    binder.absorb("a=b").unwrap();

    let err = binder.absorb("malformed").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedKeyValue);
    assert_eq!(v.borrow().len(), 1);
}

#[test]
fn test_parse_ip() {
    let mut binder = Binder::new();
    let v = binder.ip().unwrap();
    binder.absorb("10.1.1.2").unwrap();
    let ip: IpAddr = "10.1.1.2".parse().unwrap();
    assert_eq!(v.get(), Some(ip));

    let err = binder.absorb("not-an-ip").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidAddress);
    assert_eq!(v.get(), Some(ip));
}

#[cfg(feature = "url")]
#[test]
fn test_parse_url() {
    let mut binder = Binder::new();
    let v = binder.url().unwrap();
    binder.absorb("http://example.org").unwrap();

    let u = url::Url::parse("http://example.org").unwrap();
    assert_eq!(v.get(), Some(u));

    let rendered = url::Url::parse(&binder.render().unwrap()).unwrap();
    assert_eq!(rendered.scheme(), "http");
    assert_eq!(rendered.host_str(), Some("example.org"));
}

#[cfg(feature = "duration")]
#[test]
fn test_parse_duration() {
    let mut binder = Binder::new();
    let v = binder.duration().unwrap();
    binder.absorb("1h30m").unwrap();
    assert_eq!(v.get(), std::time::Duration::from_secs(90 * 60));

    let err = binder.absorb("90 parsecs").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidDuration);
    assert_eq!(v.get(), std::time::Duration::from_secs(90 * 60));
}

#[test]
fn test_parse_existing_file() {
    let fixture = PathFixture::new("127.0.0.1 localhost\n");

    let mut binder = Binder::new();
    let v = binder.existing_file().unwrap();
    binder.absorb(&fixture.file()).unwrap();
    assert_eq!(v.get(), fixture.file());

    let err = binder.absorb(&fixture.missing()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::PathNotFound);

    let err = binder.absorb(&fixture.subdir()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::WrongPathKind);

    assert_eq!(v.get(), fixture.file());
}

#[test]
fn test_parse_existing_dir() {
    let fixture = PathFixture::new("");

    let mut binder = Binder::new();
    let v = binder.existing_dir().unwrap();
    binder.absorb(&fixture.subdir()).unwrap();
    assert_eq!(v.get(), fixture.subdir());

    let err = binder.absorb(&fixture.file()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::WrongPathKind);
    assert_eq!(v.get(), fixture.subdir());
}

#[test]
fn test_open_file_transfers_ownership() {
    let fixture = PathFixture::new("hello");

    let mut binder = Binder::new();
    let v = binder.file().unwrap();
    binder.absorb(&fixture.file()).unwrap();
    assert_eq!(binder.render().unwrap(), fixture.file());

    let mut file = v.take().expect("file should be open");
    let mut contents = String::new();
    file.read_to_string(&mut contents).unwrap();
    assert_eq!(contents, "hello");

    let err = binder.absorb(&fixture.missing()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::OpenFailed);
}

#[test]
fn test_integer_render_is_canonical() {
    let mut binder = Binder::new();
    let v = binder.int64().unwrap();
    binder.absorb("+0042").unwrap();
    assert_eq!(v.get(), 42);
    assert_eq!(binder.render().unwrap(), "42");
}

#[test]
fn test_error_message_names_token() {
    let mut binder = Binder::new();
    binder.float().unwrap();
    let err = binder.absorb("1.2.3").unwrap_err();
    let message = err.to_string();
    assert!(message.contains("'1.2.3'"));
    assert!(message.contains("floating point"));
}

#[test]
fn test_double_binding_is_rejected() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let mut binder = Binder::new();
    let first = binder.string().unwrap();
    assert!(matches!(
        binder.strings(),
        Err(BindError::AlreadyBound { .. })
    ));

    binder.absorb("still-string").unwrap();
    assert_eq!(first.get(), "still-string");
}

#[test]
fn test_engine_round_trip() {
    let fixture = PathFixture::new("");
    let mut engine = MiniEngine::new();
    let name = engine.flag("name").string().unwrap();
    let verbose = engine.flag("verbose").bool().unwrap();
    let color = engine.flag("color").bool().unwrap();
    let count = engine.flag("count").int().unwrap();
    let include = engine.flag("include").strings().unwrap();
    let config = engine.flag("config").existing_file().unwrap();

    let config_path = fixture.file();
    let args = vec![
        "--name",
        "demo",
        "--verbose",
        "--color",
        "--no-color",
        "--count=3",
        "--include",
        "a",
        "--include=b",
        "--config",
        config_path.as_str(),
    ];
    let errors = engine.parse(&args);

    assert!(errors.is_empty(), "unexpected errors: {:?}", errors);
    assert_eq!(name.get(), "demo");
    assert!(verbose.get());
    assert!(!color.get());
    assert_eq!(count.get(), 3);
    assert_eq!(include.get(), vec!["a".to_string(), "b".to_string()]);
    assert_eq!(config.get(), config_path);
}

#[test]
fn test_engine_collects_errors() {
    let mut engine = MiniEngine::new();
    let port = engine.flag("port").uint64().unwrap();
    let ratio = engine.flag("ratio").float().unwrap();

    let errors = engine.parse(&["--port=8080", "--port=-1", "--ratio", "half"]);
    let kinds: Vec<ErrorKind> = errors.iter().map(|e| e.kind()).collect();
    assert_eq!(kinds, vec![ErrorKind::InvalidNumber, ErrorKind::InvalidNumber]);
    assert_eq!(port.get(), 8080);
    assert_eq!(ratio.get(), 0.0);
}

#[test]
fn test_engine_reports_missing_required() {
    let mut engine = MiniEngine::new();
    engine.flag("output").required().string().unwrap();
    engine.flag("input").required().string().unwrap();
    engine.flag("quiet").bool().unwrap();

    engine.parse(&["--input", "in.txt"]);
    assert_eq!(engine.missing_required(), vec!["output".to_string()]);
}

#[test]
fn test_destination_serializes_current_value() {
    fn assert_serialize<T: serde::Serialize>(_: &T) {}

    let mut binder = Binder::new();
    let v = binder.string_map().unwrap();
    binder.absorb("k=v").unwrap();
    assert_serialize(&v);
}
