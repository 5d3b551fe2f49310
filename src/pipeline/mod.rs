pub mod stage1_confusion;
pub mod stage2_metrics;
pub mod stage3_scores;
pub mod stage5_sweep;
