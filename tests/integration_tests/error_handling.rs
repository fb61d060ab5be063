// Malformed path data is reported via `ParseFailure` from the strict entry
// points, while `RoughPath::new()` and the default processing keep whatever
// could be parsed.

use roughpath::{
    arcs_to_cubics, parse_path, process_str, Command, Error, Operation, ParseError,
    ProcessConfig, RoughPath, Segment,
};

#[test]
fn test_error_ended_short() {
    let failure = parse_path("M0,0 L5").unwrap_err();
    assert_eq!(failure.partial.len(), 1);
    assert!(matches!(failure.error, ParseError::EndedShort { .. }));

    let path = RoughPath::new("M0,0 L5");
    assert_eq!(path.segments().len(), 1);
}

#[test]
fn test_error_unrecognized() {
    let failure = parse_path("M0,0 L5,5 Q1 2 3 4 ; L 3 3").unwrap_err();
    assert!(failure.partial.is_empty());
    assert!(matches!(failure.error, ParseError::Tokenize { .. }));

    let path = RoughPath::new("M0,0 L5,5 B 3 3");
    assert!(path.segments().is_empty());
    assert!(path.linear_points().is_empty());
}

#[test]
fn test_error_not_a_number() {
    let failure = parse_path("M0,0 L5,5 L 1 Z 4").unwrap_err();
    assert_eq!(failure.partial.len(), 2);
    assert!(matches!(failure.error, ParseError::NotANumber { .. }));
    assert!(failure.to_string().contains("param not a number: L,Z"));
}

#[test]
fn test_error_after_close() {
    let failure = parse_path("M0,0 L5,5 Z 1 1").unwrap_err();
    assert_eq!(failure.partial.len(), 3);
    assert!(matches!(failure.error, ParseError::BadSegment { .. }));
}

#[test]
fn test_error_strict_processing() {
    let strict = ProcessConfig {
        strict: true,
        operation: Operation::Points,
        ..Default::default()
    };
    assert!(matches!(
        process_str("M0,0 L5,5 L3", &strict),
        Err(Error::Parse(_))
    ));
    assert!(process_str("M0,0 L5,5 L3 3", &strict).is_ok());

    let lenient = ProcessConfig {
        operation: Operation::Points,
        ..Default::default()
    };
    assert_eq!(
        process_str("M0,0 L5,5 L3", &lenient).unwrap().trim_end(),
        "0,0 5,5"
    );
}

#[test]
fn test_error_segment_arity() {
    assert!(matches!(
        Segment::new(Command::MoveTo, vec![1.]),
        Err(ParseError::WrongArity {
            expected: 2,
            found: 1,
            ..
        })
    ));
    assert!(Segment::new(Command::ArcTo, vec![1., 1., 0., 0., 1., 5.]).is_err());

    // hand-built segments go through the same path as parsed ones
    let segments = vec![
        Segment::new(Command::MoveTo, vec![10., 0.]).unwrap(),
        Segment::new(Command::ArcTo, vec![10., 10., 0., 0., 1., 0., 10.]).unwrap(),
        Segment::new(Command::Close, vec![]).unwrap(),
    ];
    let path = RoughPath::from_segments(&segments);
    assert!(path.closed());
    assert_eq!(path.linear_points(), &[vec![(10., 0.), (0., 10.)]]);
    assert_eq!(arcs_to_cubics(&path).len(), 3);
}
