//! Points ledger for logged challenge cards.
//!
//! The ledger is plain owned state. Whoever renders the points card holds a
//! shared reference; whoever logs a challenge holds the only `&mut`.

use serde::{Deserialize, Serialize};

use crate::constants::CHALLENGE_REWARD_POINTS;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsLedger {
    total: u32,
    challenges_logged: u32,
}

impl PointsLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing total (e.g. restored by the host app).
    pub fn with_total(total: u32) -> Self {
        Self {
            total,
            challenges_logged: 0,
        }
    }

    /// Add points and return the new total. Saturates at `u32::MAX`.
    pub fn add_points(&mut self, amount: u32) -> u32 {
        self.total = self.total.saturating_add(amount);
        self.total
    }

    /// Record one challenge card as done and award its points.
    pub fn log_challenge(&mut self) -> u32 {
        self.challenges_logged = self.challenges_logged.saturating_add(1);
        let total = self.add_points(CHALLENGE_REWARD_POINTS);
        log::debug!(
            "challenge logged (#{}), points now {}",
            self.challenges_logged,
            total
        );
        total
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn challenges_logged(&self) -> u32 {
        self.challenges_logged
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let ledger = PointsLedger::new();
        assert_eq!(ledger.total(), 0);
        assert_eq!(ledger.challenges_logged(), 0);
    }

    #[test]
    fn each_challenge_is_fifty() {
        let mut ledger = PointsLedger::new();
        assert_eq!(ledger.log_challenge(), 50);
        assert_eq!(ledger.log_challenge(), 100);
        assert_eq!(ledger.log_challenge(), 150);
        assert_eq!(ledger.challenges_logged(), 3);
    }

    #[test]
    fn add_points_does_not_count_challenges() {
        let mut ledger = PointsLedger::with_total(10);
        assert_eq!(ledger.add_points(25), 35);
        assert_eq!(ledger.challenges_logged(), 0);
    }

    #[test]
    fn saturates_instead_of_overflowing() {
        let mut ledger = PointsLedger::with_total(u32::MAX - 10);
        assert_eq!(ledger.log_challenge(), u32::MAX);
        assert_eq!(ledger.add_points(1), u32::MAX);
    }

    #[test]
    fn ledger_passed_by_reference() {
        fn acknowledge(ledger: &mut PointsLedger, cards: u32) {
            for _ in 0..cards {
                ledger.log_challenge();
            }
        }
        let mut ledger = PointsLedger::new();
        acknowledge(&mut ledger, 4);
        assert_eq!(ledger.total(), 200);
    }
}
