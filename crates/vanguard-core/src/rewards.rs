//! Rewards emitted by the drop resolver and offline calculator.

use serde::{Deserialize, Serialize};

use crate::enums::RewardKind;

/// One concrete reward. `item_id` is set only for `RewardKind::Item`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reward {
    pub kind: RewardKind,
    pub amount: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_id: Option<String>,
}

impl Reward {
    pub fn gold(amount: i64) -> Self {
        Self {
            kind: RewardKind::Gold,
            amount,
            item_id: None,
        }
    }

    pub fn exp(amount: i64) -> Self {
        Self {
            kind: RewardKind::Exp,
            amount,
            item_id: None,
        }
    }

    pub fn item(item_id: impl Into<String>, amount: i64) -> Self {
        Self {
            kind: RewardKind::Item,
            amount,
            item_id: Some(item_id.into()),
        }
    }
}

/// Append-only ordered list of rewards for one resolution event.
///
/// Invariant: every reward in the bundle has `amount > 0`. Pushes of
/// zero or negative amounts are dropped at insertion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RewardBundle {
    rewards: Vec<Reward>,
}

impl RewardBundle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a reward; silently discards amounts <= 0.
    pub fn push(&mut self, reward: Reward) {
        if reward.amount > 0 {
            self.rewards.push(reward);
        }
    }

    pub fn rewards(&self) -> &[Reward] {
        &self.rewards
    }

    pub fn is_empty(&self) -> bool {
        self.rewards.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rewards.len()
    }

    /// Sum of all gold rewards in the bundle.
    pub fn total_gold(&self) -> i64 {
        self.total_of(RewardKind::Gold)
    }

    /// Sum of all exp rewards in the bundle.
    pub fn total_exp(&self) -> i64 {
        self.total_of(RewardKind::Exp)
    }

    /// Total count of a specific item across the bundle.
    pub fn item_count(&self, item_id: &str) -> i64 {
        self.rewards
            .iter()
            .filter(|r| r.item_id.as_deref() == Some(item_id))
            .map(|r| r.amount)
            .sum()
    }

    fn total_of(&self, kind: RewardKind) -> i64 {
        self.rewards
            .iter()
            .filter(|r| r.kind == kind)
            .map(|r| r.amount)
            .sum()
    }
}

impl IntoIterator for RewardBundle {
    type Item = Reward;
    type IntoIter = std::vec::IntoIter<Reward>;

    fn into_iter(self) -> Self::IntoIter {
        self.rewards.into_iter()
    }
}
