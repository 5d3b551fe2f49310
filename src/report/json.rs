use crate::pipeline::stage5_sweep::ImageInspection;
use crate::report::SweepReport;

// serde_json writes non-finite floats as null.
pub fn render_sweep_json(report: &SweepReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

pub fn render_inspection_json(inspection: &ImageInspection) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(inspection)
}
