use roughpath::{Operation, PathFitter, Point, RoughPath};

use super::utils::{compare, process};

fn wave(n: usize) -> Vec<Point> {
    (0..n)
        .map(|i| (i as f64, ((i as f64) * 0.7).sin() * 10.))
        .collect()
}

fn point_count(d: &str) -> usize {
    d.matches(['M', 'L']).count()
}

#[test]
fn test_fit_collinear() {
    let set: Vec<Point> = (0..6).map(|i| (i as f64 * 2., 0.)).collect();
    let d = PathFitter::new(vec![set], false).fit(0.9);
    assert_eq!(point_count(&d), 5);
    assert!(d.starts_with("M0,0L"));
    assert!(d.ends_with("L10,0"));
}

#[test]
fn test_fit_never_increases() {
    let set = wave(30);
    for ratio in [0., 0.1, 0.25, 0.5, 0.9, 1.0, 2.0] {
        let d = PathFitter::new(vec![set.clone()], false).fit(ratio);
        let count = point_count(&d);
        assert!(count <= set.len(), "{ratio}: {count}");
        assert!(count >= 5, "{ratio}: {count}");
        assert!(d.starts_with("M0,0L"));
    }
    let d = PathFitter::new(vec![set.clone()], false).fit(0.5);
    assert_eq!(point_count(&d), 15);
}

#[test]
fn test_fit_endpoints_retained() {
    let set = wave(12);
    let last = set[11];
    let d = PathFitter::new(vec![set], false).fit(0.4);
    assert!(d.ends_with(&format!("L{},{}", last.0, last.1)));
}

#[test]
fn test_fit_multiple_subpaths() {
    let d = PathFitter::new(vec![wave(10), wave(4), wave(20)], true).fit(0.5);
    // the four point subpath is dropped
    assert_eq!(d.matches('M').count(), 2);
    assert_eq!(d.matches("z ").count(), 2);
    assert_eq!(point_count(&d), 5 + 10);
}

#[test]
fn test_fit_from_path() {
    let path = RoughPath::new("M0 0 L1 5 L2 0 L3 5 L4 0 L5 5 L6 0 L7 5 L8 0 L9 5 z");
    let d = PathFitter::from_path(&path).fit(0.5);
    assert!(d.ends_with("L9,5z "));
    assert_eq!(point_count(&d), 5);
}

#[test]
fn test_fit_output() {
    compare(
        "M0,0 L1,0 L2,0 L3,0 L4,0 L5,0",
        Operation::Fit { ratio: 1.0 },
        "M0,0L1,0L2,0L3,0L4,0L5,0",
    );
    compare("M0,0 L1,1 L2,2 z", Operation::Fit { ratio: 0.5 }, "");

    let output = process(
        "M0 0 L1 5 L2 0 L3 5 L4 0 L5 5 L6 0 Z",
        Operation::Fit { ratio: 0.5 },
    );
    assert!(output.trim_end().ends_with("L6,0z"));
}
