use frm_core::{Frame, FrameError, Tolerance};

fn toy_rows() -> Vec<Vec<f64>> {
    vec![
        vec![0.07, -0.04, 1.26],
        vec![-1.41, -0.94, -1.39],
        vec![-0.76, -1.05, 0.55],
        vec![-1.72, -0.67, -0.80],
        vec![0.71, 1.68, -0.74],
        vec![0.39, -0.01, -1.72],
    ]
}

#[test]
fn valid_frame_reports_shape() {
    let frame = Frame::from_rows(&toy_rows(), &Tolerance::default()).expect("frame");
    assert_eq!(frame.num_vectors(), 6);
    assert_eq!(frame.dim(), 3);
    assert!((frame.redundancy_ratio() - 2.0).abs() < 1e-12);
    let first = frame.vector(0).expect("vector");
    assert_eq!(first.as_slice(), &[0.07, -0.04, 1.26]);
}

#[test]
fn planar_vectors_are_rejected() {
    let rows = vec![
        vec![1.0, 0.0, 0.0],
        vec![0.0, 1.0, 0.0],
        vec![1.0, 1.0, 0.0],
        vec![2.0, -1.0, 0.0],
    ];
    let err = Frame::from_rows(&rows, &Tolerance::default()).unwrap_err();
    match err {
        FrameError::RankDeficient(info) => assert_eq!(info.code, "rank-deficient"),
        other => panic!("expected rank deficiency, got {other:?}"),
    }
}

#[test]
fn too_few_vectors_are_rejected() {
    let rows = vec![vec![1.0, 0.0, 0.0], vec![0.0, 1.0, 0.0]];
    let err = Frame::from_rows(&rows, &Tolerance::default()).unwrap_err();
    match err {
        FrameError::RankDeficient(info) => assert_eq!(info.code, "too-few-vectors"),
        other => panic!("expected rank deficiency, got {other:?}"),
    }
}

#[test]
fn ragged_rows_are_rejected() {
    let rows = vec![vec![1.0, 0.0], vec![0.0, 1.0, 5.0]];
    let err = Frame::from_rows(&rows, &Tolerance::default()).unwrap_err();
    assert!(matches!(err, FrameError::DimensionMismatch(_)));
}

#[test]
fn empty_input_is_rejected() {
    let err = Frame::from_rows(&[], &Tolerance::default()).unwrap_err();
    assert!(matches!(err, FrameError::DimensionMismatch(_)));
}

#[test]
fn subframe_restricts_and_validates() {
    let tolerance = Tolerance::default();
    let frame = Frame::from_rows(&toy_rows(), &tolerance).expect("frame");

    let sub = frame.subframe(&[0, 1, 2], &tolerance).expect("subframe");
    assert_eq!(sub.num_vectors(), 3);
    assert_eq!(sub.dim(), 3);
    assert_eq!(sub.vector(1).unwrap(), frame.vector(1).unwrap());

    let err = frame.subframe(&[0, 0, 1], &tolerance).unwrap_err();
    assert!(matches!(err, FrameError::DimensionMismatch(_)));

    let err = frame.subframe(&[0, 1, 99], &tolerance).unwrap_err();
    assert!(matches!(err, FrameError::DimensionMismatch(_)));
}

#[test]
fn dependent_subframe_is_rejected() {
    let tolerance = Tolerance::default();
    let rows = vec![
        vec![1.0, 0.0, 0.0],
        vec![2.0, 0.0, 0.0],
        vec![0.0, 1.0, 0.0],
        vec![0.0, 0.0, 1.0],
    ];
    let frame = Frame::from_rows(&rows, &tolerance).expect("frame");
    let err = frame.subframe(&[0, 1, 2], &tolerance).unwrap_err();
    assert!(matches!(err, FrameError::RankDeficient(_)));
}
