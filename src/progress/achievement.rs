use std::collections::{BTreeMap, HashMap, HashSet};

use crate::catalog::FISH_LOVER;
use crate::models::{Achievement, Condition};

/// Snapshot of everything an achievement condition can look at.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Counters {
    pub badge_counts: BTreeMap<String, u32>,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub total_days: u32,
}

impl Counters {
    pub fn badge_count(&self, badge_id: &str) -> u32 {
        self.badge_counts.get(badge_id).copied().unwrap_or(0)
    }

    #[cfg(test)]
    pub fn with_badge(mut self, badge_id: &str, count: u32) -> Self {
        self.badge_counts.insert(badge_id.to_string(), count);
        self
    }
}

/// A custom predicate's own numerator and target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CustomProgress {
    pub current: u32,
    pub target: u32,
}

type Predicate = Box<dyn Fn(&Counters) -> CustomProgress + Send + Sync>;

/// Custom achievement conditions, keyed by predicate name.
#[derive(Default)]
pub struct PredicateRegistry {
    predicates: HashMap<&'static str, Predicate>,
}

impl PredicateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The predicates the catalog relies on.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(FISH_LOVER, |c| CustomProgress {
            current: ["salmon", "mackerel", "tuna"]
                .iter()
                .map(|id| c.badge_count(id))
                .sum(),
            target: 30,
        });
        registry
    }

    pub fn register<F>(&mut self, key: &'static str, predicate: F)
    where
        F: Fn(&Counters) -> CustomProgress + Send + Sync + 'static,
    {
        self.predicates.insert(key, Box::new(predicate));
    }

    pub fn evaluate(&self, key: &str, counters: &Counters) -> Option<CustomProgress> {
        self.predicates.get(key).map(|p| p(counters))
    }
}

impl std::fmt::Debug for PredicateRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut keys: Vec<_> = self.predicates.keys().collect();
        keys.sort();
        f.debug_struct("PredicateRegistry").field("keys", &keys).finish()
    }
}

fn ratio(current: u32, target: u32) -> f64 {
    if target == 0 {
        return 1.0;
    }
    (current as f64 / target as f64).min(1.0)
}

#[derive(Debug)]
pub struct AchievementEngine {
    registry: PredicateRegistry,
}

impl Default for AchievementEngine {
    fn default() -> Self {
        Self::new(PredicateRegistry::builtin())
    }
}

impl AchievementEngine {
    pub fn new(registry: PredicateRegistry) -> Self {
        Self { registry }
    }

    /// Completion in `[0, 1]`. Unregistered custom predicates report zero.
    pub fn progress(&self, achievement: &Achievement, counters: &Counters) -> f64 {
        match self.numerator(achievement, counters) {
            Some((current, target)) => ratio(current, target),
            None => 0.0,
        }
    }

    /// `(current, target)` behind `progress`, with `current` capped at the
    /// target. `None` when the condition has no registered predicate.
    pub fn numerator(&self, achievement: &Achievement, counters: &Counters) -> Option<(u32, u32)> {
        let (current, target) = match &achievement.condition {
            Condition::BadgeCount { badge_id, count } => (counters.badge_count(badge_id), *count),
            Condition::Streak { days } => (counters.current_streak, *days),
            Condition::TotalDays { days } => (counters.total_days, *days),
            Condition::Custom { key } => {
                let p = self.registry.evaluate(key, counters)?;
                (p.current, p.target)
            }
        };
        Some((current.min(target), target))
    }

    pub fn is_complete(&self, achievement: &Achievement, counters: &Counters) -> bool {
        self.progress(achievement, counters) >= 1.0
    }

    pub fn check_newly_unlocked<'a>(
        &self,
        achievements: &'a [Achievement],
        counters: &Counters,
        unlocked: &HashSet<String>,
    ) -> Vec<&'a Achievement> {
        achievements
            .iter()
            .filter(|a| !unlocked.contains(a.id))
            .filter(|a| self.is_complete(a, counters))
            .collect()
    }

    /// Locked achievements closest to completion first. The sort is stable, so
    /// equal progress keeps catalog order.
    pub fn recommend<'a>(
        &self,
        achievements: &'a [Achievement],
        counters: &Counters,
        unlocked: &HashSet<String>,
        limit: usize,
    ) -> Vec<(&'a Achievement, f64)> {
        let mut candidates: Vec<(&Achievement, f64)> = achievements
            .iter()
            .filter(|a| !unlocked.contains(a.id))
            .map(|a| (a, self.progress(a, counters)))
            .collect();
        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        candidates.truncate(limit);
        candidates
    }
}
