use crate::pipeline::stage5_sweep::{ImageInspection, PairOutcome, PairStatus};
use crate::report::{SweepReport, format_p, format_pct};

pub fn render_sweep_text(report: &SweepReport) -> String {
    let mut out = String::new();

    out.push_str("Segmentation Method Comparison\n");
    out.push_str("==============================\n\n");
    out.push_str(&format!("Ground truth: {}\n", report.ground_truth));
    out.push_str(&format!(
        "Metric: {} over {} images\n",
        report.metric, report.image_count
    ));
    out.push_str(&format!(
        "Test: Wilcoxon signed-rank, one-sided (greater), alpha={}\n\n",
        report.alpha
    ));

    out.push_str("Method means\n");
    for m in &report.methods {
        out.push_str(&format!("  {}: {}\n", m.method, format_pct(m.mean)));
    }
    if !report.skipped.is_empty() {
        out.push_str("\nSkipped methods\n");
        for s in &report.skipped {
            out.push_str(&format!("  {}: {}\n", s.method, s.reason));
        }
    }

    out.push_str("\nPairwise tests\n");
    for pair in &report.pairs {
        out.push_str(&pair_line(pair));
        out.push('\n');
    }
    out
}

pub fn pair_line(pair: &PairOutcome) -> String {
    let head = format!(
        "Method {} (mean {}) is statistically superior to method {} (mean {})?",
        pair.first,
        format_pct(pair.first_mean),
        pair.second,
        format_pct(pair.second_mean)
    );
    match (pair.status, &pair.result) {
        (PairStatus::Tested, Some(r)) => format!(
            "{head} {} (pvalue={}).",
            r.first_is_superior,
            format_p(r.p_value)
        ),
        (PairStatus::NoDifference, Some(r)) => format!(
            "{head} {} (pvalue={}, no paired difference).",
            r.first_is_superior,
            format_p(r.p_value)
        ),
        _ => format!(
            "{head} not tested ({}).",
            pair.error.as_deref().unwrap_or("unknown error")
        ),
    }
}

pub fn render_inspection_text(inspection: &ImageInspection) -> String {
    let cm = &inspection.confusion;
    let m = &inspection.metrics;
    let mut out = String::new();
    out.push_str(&format!(
        "Image {:02}: {} vs {}\n",
        inspection.index, inspection.method, inspection.ground_truth
    ));
    out.push_str(&format!(
        "Errors: TP={}, TN={}, FP={}, FN={}.\n",
        cm.true_positives, cm.true_negatives, cm.false_positives, cm.false_negatives
    ));
    out.push_str(&format!(
        "Metrics: Sensitivity={}, Specificity={}, Precision={}, F1 score={}.\n",
        format_pct(m.sensitivity),
        format_pct(m.specificity),
        format_pct(m.precision),
        format_pct(m.f1_score)
    ));
    out
}
