//! Per-item delay scheduling for lists of elements that animate one after another.

use crate::animation::config::AnimationConfig;
use serde::{Deserialize, Serialize};

/// Delay of item `index`: `base + index * increment`, saturating at `u64::MAX`.
pub fn delay_for(index: usize, base_delay: u64, per_item_increment: u64) -> u64 {
    let index = u64::try_from(index).unwrap_or(u64::MAX);
    base_delay.saturating_add(index.saturating_mul(per_item_increment))
}

/// Linear stagger schedule.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaggerPlan {
    /// Delay of the first item, in frames.
    #[serde(default)]
    pub base_delay: u64,
    /// Extra delay added per subsequent item, in frames.
    #[serde(default)]
    pub per_item_increment: u64,
}

impl StaggerPlan {
    /// Build a plan.
    pub fn new(base_delay: u64, per_item_increment: u64) -> Self {
        Self {
            base_delay,
            per_item_increment,
        }
    }

    /// Delay of item `index`.
    pub fn delay_for(&self, index: usize) -> u64 {
        delay_for(index, self.base_delay, self.per_item_increment)
    }

    /// `base` with its delay replaced by this item's staggered delay.
    ///
    /// The template's own delay is ignored; the plan owns timing.
    pub fn config_for(&self, index: usize, base: &AnimationConfig) -> AnimationConfig {
        let delay = i64::try_from(self.delay_for(index)).unwrap_or(i64::MAX);
        base.with_delay(delay)
    }

    /// Configs for items `0..count`.
    pub fn configs(&self, base: &AnimationConfig, count: usize) -> Vec<AnimationConfig> {
        (0..count).map(|i| self.config_for(i, base)).collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/stagger.rs"]
mod tests;
