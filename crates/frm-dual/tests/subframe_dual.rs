use frm_core::{Frame, FrameError, Tolerance};
use frm_dual::{canonical_dual, subframe_dual};
use frm_op::derive_operators;

fn toy_frame(tolerance: &Tolerance) -> Frame {
    let rows = vec![
        vec![0.07, -0.04, 1.26],
        vec![-1.41, -0.94, -1.39],
        vec![-0.76, -1.05, 0.55],
        vec![-1.72, -0.67, -0.80],
        vec![0.71, 1.68, -0.74],
        vec![0.39, -0.01, -1.72],
    ];
    Frame::from_rows(&rows, tolerance).expect("frame")
}

#[test]
fn subframe_dual_is_supported_on_its_indices() {
    let tolerance = Tolerance::default();
    let operators = derive_operators(&toy_frame(&tolerance), &tolerance).expect("operators");
    let dual = subframe_dual(&operators, &[0, 1, 2], &tolerance).expect("subframe dual");

    let residual = dual.duality_residual(operators.analysis()).expect("residual");
    assert!(residual < 1e-9, "duality residual: {residual:e}");

    for index in 3..6 {
        let column = dual.vector(index).expect("column");
        assert!(column.amax() == 0.0, "column {index} should be zero");
    }
}

#[test]
fn dependent_rows_are_a_singular_subframe() {
    let tolerance = Tolerance::default();
    let rows = vec![
        vec![1.0, 0.0, 0.0],
        vec![2.0, 0.0, 0.0],
        vec![0.0, 1.0, 0.0],
        vec![0.0, 0.0, 1.0],
    ];
    let frame = Frame::from_rows(&rows, &tolerance).expect("frame");
    let operators = derive_operators(&frame, &tolerance).expect("operators");
    let err = subframe_dual(&operators, &[0, 1, 2], &tolerance).unwrap_err();
    assert!(matches!(err, FrameError::SingularSubframe(_)));
}

#[test]
fn index_sets_are_validated() {
    let tolerance = Tolerance::default();
    let operators = derive_operators(&toy_frame(&tolerance), &tolerance).expect("operators");

    let err = subframe_dual(&operators, &[0, 1], &tolerance).unwrap_err();
    assert!(matches!(err, FrameError::DimensionMismatch(_)));

    let err = subframe_dual(&operators, &[0, 0, 1], &tolerance).unwrap_err();
    assert!(matches!(err, FrameError::DimensionMismatch(_)));

    let err = subframe_dual(&operators, &[0, 1, 42], &tolerance).unwrap_err();
    assert!(matches!(err, FrameError::DimensionMismatch(_)));
}

#[test]
fn square_frames_have_a_unique_dual() {
    let tolerance = Tolerance::default();
    let rows = vec![
        vec![2.0, 0.1, 0.0],
        vec![-0.3, 1.5, 0.2],
        vec![0.4, 0.0, 1.1],
    ];
    let frame = Frame::from_rows(&rows, &tolerance).expect("frame");
    let operators = derive_operators(&frame, &tolerance).expect("operators");

    let canonical = canonical_dual(&operators, &tolerance).expect("canonical");
    let sub = subframe_dual(&operators, &[0, 1, 2], &tolerance).expect("subframe");
    let deviation = Tolerance::max_abs_diff(canonical.synthesis(), sub.synthesis());
    assert!(deviation < 1e-9, "duals differ by {deviation:e}");
}
