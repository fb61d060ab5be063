use assertables::{assert_contains, assert_not_contains};
use roughpath::{parse_path, Command, Operation, RoughPath};

use super::utils::{compare, process};

#[test]
fn test_parse_square() {
    let path = RoughPath::new("M0,0 L10,0 L10,10 Z");
    let points: Vec<_> = path.segments().iter().map(|s| s.point).collect();
    assert_eq!(
        points,
        vec![Some((0., 0.)), Some((10., 0.)), Some((10., 10.)), Some((0., 0.))]
    );
    assert!(path.closed());
    assert_eq!(path.linear_points(), &[vec![(0., 0.), (10., 0.), (10., 10.)]]);
}

#[test]
fn test_parse_no_leading_move() {
    let path = RoughPath::new("L5,5");
    assert_eq!(path.segments().len(), 2);
    assert_eq!(path.segments()[0].command, Command::MoveTo);
    let points: Vec<_> = path.segments().iter().filter_map(|s| s.point).collect();
    assert_eq!(points, vec![(0., 0.), (5., 5.)]);

    // equivalent to an explicit origin move
    assert_eq!(
        RoughPath::new("L5,5").segments(),
        RoughPath::new("M0,0L5,5").segments()
    );
}

#[test]
fn test_parse_arity() {
    let inputs = [
        "M 10 10 20 20 30 30",
        "m1-2.5.5 .5h3v4H1V2z",
        "M0 0 C 1 2 3 4 5 6 7 8 9 10 11 12 s 1 2 3 4 Q 1 1 2 2 t 5 5 6 6",
        "M0 0 A 5 5 0 0 1 10 10 a 5 5 30 1 0 5 5 Z M 3 3",
        "M1e2,1E-2l+3-4",
    ];
    for d in inputs {
        let segments = parse_path(d).expect("valid path");
        assert!(!segments.is_empty());
        assert!(segments[0].command().is_move());
        for s in &segments {
            assert_eq!(s.data().len(), s.command().arity(), "{d}: {s}");
        }
    }
    assert_eq!(parse_path(inputs[0]).unwrap().len(), 3);
    assert_eq!(parse_path(inputs[2]).unwrap().len(), 7);
}

#[test]
fn test_parse_closed_flag() {
    for (d, closed) in [
        ("M0 0 L1 1", false),
        ("M0 0 L1 1 z", true),
        ("M0 0 L1 1 Z M5 5 L6 6", true),
        ("", false),
    ] {
        let path = RoughPath::new(d);
        assert_eq!(path.closed(), closed, "{d}");
        assert_eq!(
            path.closed(),
            path.segments().iter().any(|s| s.command.is_close())
        );
    }
}

#[test]
fn test_parse_output() {
    compare(
        "M0,0 L10,0 L10,10 Z",
        Operation::Parse,
        "M 0 0 -> 0,0\nL 10 0 -> 10,0\nL 10 10 -> 10,10\nZ -> 0,0",
    );
    compare(
        "m 1 1 c 1 1 2 2 3 3 a 1 1 0 0 1 2 0",
        Operation::Parse,
        "m 1 1 -> 1,1\nc 1 1 2 2 3 3 -> 4,4\na 1 1 0 0 1 2 0 -> 6,4",
    );
}

#[test]
fn test_points_output() {
    compare(
        "M0 0 L1 1 Z M5 5 l1 1 M9 9",
        Operation::Points,
        "0,0 1,1\n5,5 6,6\n9,9",
    );
}

#[test]
fn test_json_output() {
    let config = roughpath::ProcessConfig {
        format: roughpath::OutputFormat::Json,
        ..Default::default()
    };
    let output = roughpath::process_str("M1 2 z", &config).unwrap();
    assert_contains!(output, r#""command": "M""#);
    assert_contains!(output, r#""command": "z""#);
    assert_contains!(output, r#""point": ["#);
    assert_not_contains!(output, "MoveTo");

    let output = process("M1 2 L 3 4", Operation::Parse);
    assert_not_contains!(output, "{");
}
