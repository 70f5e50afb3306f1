use frm_analysis::serde_io::{analysis_from_json, analysis_to_json};
use frm_analysis::{analyze_frame, AnalysisOpts, ProvenanceInfo};
use frm_core::sampler::gaussian_frame;
use frm_core::{RngHandle, Tolerance};

fn sample_opts(seed: u64) -> AnalysisOpts {
    AnalysisOpts {
        tolerance: Tolerance::default(),
        provenance: Some(ProvenanceInfo {
            seed: Some(seed),
            run_id: Some("t0".to_string()),
            commit: None,
        }),
    }
}

#[test]
fn repeated_analysis_is_deterministic() {
    let tolerance = Tolerance::default();
    let mut rng = RngHandle::from_seed(13);
    let frame = gaussian_frame(6, 3, &mut rng, &tolerance).expect("frame");
    let opts = sample_opts(13);

    let report_a = analyze_frame(&frame, &opts).expect("analysis");
    let report_b = analyze_frame(&frame, &opts).expect("analysis");
    assert_eq!(report_a.hashes.analysis_hash, report_b.hashes.analysis_hash);

    let json_a = analysis_to_json(&report_a).expect("json");
    let json_b = analysis_to_json(&report_b).expect("json");
    assert_eq!(json_a, json_b);

    let restored = analysis_from_json(&json_a).expect("parse");
    assert_eq!(report_a, restored);
}

#[test]
fn report_metrics_reflect_the_frame() {
    let tolerance = Tolerance::default();
    let mut rng = RngHandle::from_seed(13);
    let frame = gaussian_frame(6, 3, &mut rng, &tolerance).expect("frame");
    let report = analyze_frame(&frame, &AnalysisOpts::default()).expect("analysis");

    assert_eq!(report.num_vectors, 6);
    assert_eq!(report.dim, 3);
    assert_eq!(report.eigenvalues.len(), 3);
    assert!(report.bounds.lower > 0.0);
    assert!(report.bounds.upper >= report.bounds.lower);
    assert!((report.inverse_bounds.upper - 1.0 / report.bounds.lower).abs() < 1e-6);
    assert!(report.duality_residual < 1e-9);
    assert!(report.tight_residual < 1e-9);
    assert!(report.canonical_dual_norm > 0.0);
    assert_eq!(report.redundancy.labels.len(), 6);
}

#[test]
fn provenance_changes_the_analysis_hash_only() {
    let tolerance = Tolerance::default();
    let mut rng = RngHandle::from_seed(13);
    let frame = gaussian_frame(6, 3, &mut rng, &tolerance).expect("frame");

    let report_a = analyze_frame(&frame, &sample_opts(13)).expect("analysis");
    let report_b = analyze_frame(&frame, &sample_opts(14)).expect("analysis");
    assert_eq!(report_a.hashes.frame_hash, report_b.hashes.frame_hash);
    assert_ne!(report_a.hashes.analysis_hash, report_b.hashes.analysis_hash);
}
