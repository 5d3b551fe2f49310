pub mod confusion;
pub mod mask;
pub mod metrics;
pub mod profile;
pub mod series;
pub mod verdict;
