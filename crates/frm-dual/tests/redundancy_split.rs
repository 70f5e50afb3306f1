use frm_core::sampler::gaussian_frame;
use frm_core::{Frame, RngHandle, Tolerance};
use frm_dual::{classify, RedundancyLabel};
use frm_op::derive_operators;

const V1: [f64; 3] = [1.0, 0.2, -0.3];
const V2: [f64; 3] = [0.1, 1.1, 0.4];
const V3: [f64; 3] = [-0.2, 0.5, 0.9];
// 0.6 * V1 - 0.4 * V2, dependent on the first two.
const V4: [f64; 3] = [0.56, -0.32, -0.34];

fn classify_rows(rows: &[[f64; 3]]) -> frm_dual::RedundancyReport {
    let tolerance = Tolerance::default();
    let rows: Vec<Vec<f64>> = rows.iter().map(|row| row.to_vec()).collect();
    let frame = Frame::from_rows(&rows, &tolerance).expect("frame");
    let operators = derive_operators(&frame, &tolerance).expect("operators");
    classify(&operators, &tolerance).expect("classification")
}

#[test]
fn the_vector_outside_the_span_of_the_others_is_essential() {
    let report = classify_rows(&[V1, V2, V3, V4]);
    assert_eq!(report.labels.len(), 4);
    // V4 lies in span(V1, V2), so only V3 covers its direction.
    assert_eq!(report.essential_indices(), vec![2]);
    assert_eq!(report.removable_indices(), vec![0, 1, 3]);
    assert!((report.diagonals[2] - 1.0).abs() < 1e-9);
    assert!((report.diagonals[3] - 1.0).abs() > 1e-3);
}

#[test]
fn the_essential_split_is_stable_under_reordering() {
    let report = classify_rows(&[V1, V2, V4, V3]);
    assert_eq!(report.essential_indices(), vec![3]);
    assert_eq!(report.removable_indices(), vec![0, 1, 2]);
    assert_eq!(report.labels[3], RedundancyLabel::Essential);
}

#[test]
fn generic_redundant_frames_are_fully_removable() {
    let tolerance = Tolerance::default();
    let mut rng = RngHandle::from_seed(77);
    let frame = gaussian_frame(6, 3, &mut rng, &tolerance).expect("frame");
    let operators = derive_operators(&frame, &tolerance).expect("operators");
    let report = classify(&operators, &tolerance).expect("classification");

    assert!(report.essential_indices().is_empty());
    // The diagonal of the coefficient-space projector traces to n.
    let trace: f64 = report.diagonals.iter().sum();
    assert!((trace - 3.0).abs() < 1e-9);
}
