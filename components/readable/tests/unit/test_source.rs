//! Unit tests for frames and stack-trace rendering

use readable::{Array, CallType, Config, Frame, Readable, Throwable, Value};

fn readable() -> Readable {
    Readable::new(Config::default().with_root_path("/srv/app/"))
}

fn fixture_trace() -> Vec<Frame> {
    vec![
        Frame::new()
            .with_file("/srv/app/test/fixtures.php", 38)
            .with_method("TraceTest", CallType::Instance, "{closure}")
            .with_args(Array::new()),
        Frame::new()
            .with_file("/srv/app/test/fixtures.php", 29)
            .with_method("TraceTest", CallType::Instance, "inner")
            .with_args(vec![Value::from("hello")]),
        Frame::new()
            .with_file("/srv/app/test/test.php", 77)
            .with_method("TraceTest", CallType::Instance, "outer")
            .with_args(vec![Value::from("hello")]),
    ]
}

#[cfg(test)]
mod render_trace_tests {
    use super::*;

    #[test]
    fn test_trace_from_error() {
        let error = Throwable::new("Exception", "got hello").with_trace(fixture_trace());
        let expected = "\
1. /srv/app/test/fixtures.php:38 TraceTest->{closure}()
2. /srv/app/test/fixtures.php:29 TraceTest->inner(\"hello\")
3. /srv/app/test/test.php:77 TraceTest->outer(\"hello\")";
        assert_eq!(readable().render_trace(&error, true, false), expected);
    }

    #[test]
    fn test_relative_paths() {
        let frames = fixture_trace();
        let rendered = readable().render_trace(&frames, true, true);
        assert!(rendered.starts_with("1. test/fixtures.php:38 TraceTest->{closure}()"));
        assert!(rendered.ends_with("3. test/test.php:77 TraceTest->outer(\"hello\")"));
    }

    #[test]
    fn test_ten_frames_align() {
        let frames = vec![Frame::new().with_file("/srv/app/a.php", 1).with_function("f"); 10];
        let rendered = readable().render_trace(&frames, true, false);

        let expected: Vec<String> = (1..=10)
            .map(|depth| format!("{:>2}. /srv/app/a.php:1 f()", depth))
            .collect();
        assert_eq!(rendered, expected.join("\n"));
        assert!(!rendered.ends_with('\n'));
    }

    #[test]
    fn test_hundred_frames_use_wider_labels() {
        let frames = vec![Frame::new().with_function("f"); 100];
        let rendered = readable().render_trace(&frames, false, false);
        let lines: Vec<&str> = rendered.split('\n').collect();
        assert_eq!(lines[0], "  1. [internal function] f()");
        assert_eq!(lines[99], "100. [internal function] f()");
    }

    #[test]
    fn test_static_call_and_keyed_args() {
        let frames = vec![Frame::new()
            .with_file("/srv/app/b.php", 12)
            .with_method("Config", CallType::Static, "load")
            .with_args(vec![Value::Array(Array::map(vec![("debug", Value::Boolean(true))]))])];
        assert_eq!(
            readable().render_trace(&frames, true, false),
            "1. /srv/app/b.php:12 Config::load([\"debug\" => true])"
        );
    }

    #[test]
    fn test_named_args_keep_their_keys() {
        let record = Value::Array(Array::map(vec![
            ("file", Value::from("/srv/a.php")),
            ("line", Value::Integer(3)),
            ("function", Value::from("f")),
            ("args", Value::Array(Array::map(vec![("name", Value::from("x"))]))),
        ]));
        let trace = Value::Array(Array::list(vec![record]));

        assert_eq!(
            readable().render_trace(&trace, true, false),
            "1. /srv/a.php:3 f(\"name\" => \"x\")"
        );
    }

    #[test]
    fn test_sparse_positional_args_show_their_keys() {
        let frames = vec![Frame::new()
            .with_file("/srv/app/c.php", 7)
            .with_function("g")
            .with_args(Array::map(vec![(0i64, Value::Integer(1)), (2i64, Value::Null)]))];
        assert_eq!(
            readable().render_trace(&frames, true, false),
            "1. /srv/app/c.php:7 g(0 => 1, 2 => null)"
        );
        assert_eq!(
            readable().render_trace(&frames, false, false),
            "1. /srv/app/c.php:7 g()"
        );
    }

    #[test]
    fn test_missing_everything() {
        let frames = vec![Frame::default()];
        assert_eq!(
            readable().render_trace(&frames, true, true),
            "1. [internal function]"
        );
    }

    #[test]
    fn test_non_trace_sources() {
        assert_eq!(
            readable().render_trace(&Value::from("trace"), true, false),
            "{stack-trace unavailable}"
        );
        assert_eq!(
            readable().render_trace(&Value::Null, true, false),
            "{stack-trace unavailable}"
        );
    }

    #[test]
    fn test_frames_are_not_modified() {
        let frames = fixture_trace();
        let before = frames.clone();
        let _ = readable().render_trace(&frames, true, true);
        assert_eq!(frames, before);
    }
}

#[cfg(test)]
mod frame_tests {
    use super::*;

    #[test]
    fn test_include_without_args() {
        let frames = vec![Frame::new().with_file("/srv/app/a.php", 2).with_function("include")];
        assert_eq!(
            readable().render_trace(&frames, true, false),
            "1. /srv/app/a.php:2 include()"
        );
    }

    #[test]
    fn test_include_with_empty_args() {
        let frames = vec![Frame::new()
            .with_file("/srv/app/a.php", 2)
            .with_function("include")
            .with_args(Array::new())];
        assert_eq!(
            readable().render_trace(&frames, true, false),
            "1. /srv/app/a.php:2 include()"
        );
    }

    #[test]
    fn test_line_without_file() {
        let frame = Frame {
            line: Some(8),
            function: Some("main".to_string()),
            ..Frame::default()
        };
        assert_eq!(
            readable().render_trace(&vec![frame], true, false),
            "1. [internal function]:8 main()"
        );
    }
}
