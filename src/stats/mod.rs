pub mod signed_rank;

use statrs::statistics::{Data, OrderStatistics, RankTieBreaker};

pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// 1-based ranks with ties sharing their average rank, plus the size of
/// every tie group (singletons included), smallest values first.
pub fn average_ranks(values: &[f64]) -> (Vec<f64>, Vec<usize>) {
    if values.is_empty() {
        return (Vec::new(), Vec::new());
    }
    let ranks = Data::new(values.to_vec()).ranks(RankTieBreaker::Average);

    // distinct values never share an average rank
    let mut sorted = ranks.clone();
    sorted.sort_by(f64::total_cmp);
    let groups = sorted
        .chunk_by(|a, b| a == b)
        .map(|run| run.len())
        .collect::<Vec<usize>>();
    (ranks, groups)
}
