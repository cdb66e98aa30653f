use crate::domain::model::Energy;
use crate::domain::ports::Scorer;
use crate::utils::error::Result;
use async_trait::async_trait;
use rand::Rng;

pub const MIN_SCORE: f64 = -100.0;
pub const MAX_SCORE: f64 = 100.0;

/// Placeholder scorer.
///
/// Returns a value drawn uniformly from `[-100, 100)` and ignores the
/// sequence entirely. This is NOT a docking or energy model; it only stands in
/// for one so the plugin protocol can be exercised end to end.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomScorer;

impl RandomScorer {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Scorer for RandomScorer {
    async fn score(&self, _sequence: Option<&str>) -> Result<Energy> {
        let value = rand::thread_rng().gen_range(MIN_SCORE..MAX_SCORE);
        Ok(Energy { value })
    }

    fn name(&self) -> &str {
        "random"
    }
}
