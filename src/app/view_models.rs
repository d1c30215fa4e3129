use super::*;
use crate::storage::score_key;

/// Tarjeta del panel inicial con los datos de un test disponible.
pub struct TestCardInfo {
    pub idx: usize,
    pub title: String,
    pub description: String,
    pub part_count: usize,
    pub total_minutes: u32,
    /// Última nota registrada ("correct/total"), si el test ya se intentó.
    pub last_score: Option<String>,
}

impl ExamApp {
    pub fn test_cards(&self) -> Vec<TestCardInfo> {
        self.tests
            .iter()
            .enumerate()
            .map(|(idx, test)| {
                let total_seconds: u32 = test.parts.iter().map(|p| p.timer_seconds).sum();
                TestCardInfo {
                    idx,
                    title: test.title.clone(),
                    description: test.description.clone(),
                    part_count: test.parts.len(),
                    total_minutes: total_seconds.div_ceil(60),
                    last_score: self.scores.get(&score_key(&test.id)),
                }
            })
            .collect()
    }
}
