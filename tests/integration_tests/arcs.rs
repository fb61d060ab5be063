use roughpath::{arcs_to_cubics, ArcConverter, Command, Operation, RoughPath};

use super::utils::{assert_near, process};

#[test]
fn test_arc_coincident() {
    let mut arc = ArcConverter::new((3., 4.), (3., 4.), (1., 1.), 45., true, true);
    assert!(arc.next_segment().is_none());
}

#[test]
fn test_arc_quarter_circle() {
    let segments: Vec<_> =
        ArcConverter::new((10., 0.), (0., 10.), (10., 10.), 0., false, true).collect();
    assert_eq!(segments.len(), 1);
    assert_near(segments[0].to, (0., 10.));
}

#[test]
fn test_arc_segment_count() {
    // at most 90 degrees per segment, so a near-full ellipse takes four
    let segments: Vec<_> =
        ArcConverter::new((10., 0.), (10., -0.01), (10., 10.), 0., true, true).collect();
    assert_eq!(segments.len(), 4);
    assert_near(segments[3].to, (10., -0.01));

    // consecutive segments join smoothly: the control points either side
    // of each join are collinear with it
    for pair in segments.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let incoming = (a.to.0 - a.cp2.0, a.to.1 - a.cp2.1);
        let outgoing = (b.cp1.0 - a.to.0, b.cp1.1 - a.to.1);
        let cross = incoming.0 * outgoing.1 - incoming.1 * outgoing.0;
        assert!(cross.abs() < 1e-6, "{cross}");
    }
}

#[test]
fn test_arcs_in_path() {
    let path = RoughPath::new("M 0 0 a 5 5 0 0 0 10 0 a 5 5 0 0 0 -10 0 z");
    let segments = arcs_to_cubics(&path);
    let keys: String = segments.iter().map(|s| s.key()).collect();
    assert_eq!(keys, "MCCCCz");
    assert!(segments
        .iter()
        .all(|s| s.command() != Command::ArcTo && s.command() != Command::ArcToRel));

    let end = &segments[2].data()[4..];
    assert_near((end[0], end[1]), (10., 0.));
    let end = &segments[4].data()[4..];
    assert_near((end[0], end[1]), (0., 0.));
}

#[test]
fn test_arcs_output() {
    let output = process("M0 0 L 10 0 Z", Operation::Arcs);
    assert_eq!(output.trim_end(), "M 0 0 L 10 0 Z");

    let output = process("M10 0 A 10 10 0 0 1 0 10", Operation::Arcs);
    assert!(output.starts_with("M 10 0 C 10 "));
    assert_eq!(output.matches('C').count(), 1);
}
