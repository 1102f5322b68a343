//! The tracker owns every persisted store. Load it once, mutate it through
//! its methods, save it back.

pub mod achievements;
pub mod badges;
pub mod coupons;
pub mod streak;

use anyhow::{Context, Result};
use chrono::{DateTime, TimeZone, Utc};
use rusqlite::Connection;

use crate::catalog::ACHIEVEMENTS;
use crate::db::repository::{FallbackReason, PersistedStore, StoreRepo};
use crate::models::{Achievement, Badge, Coupon, MiscCounters, Profile, Reward};
use crate::progress::{day_key_of, match_badges, AchievementEngine, Counters, DayKey, Thresholds};

pub use achievements::AchievementLog;
pub use badges::BadgeCollection;
pub use coupons::{CouponError, CouponWallet};
pub use streak::StreakStore;

impl PersistedStore for StreakStore {
    const KEY: &'static str = "girogi-streak";
    const VERSION: u32 = 1;
}

impl PersistedStore for BadgeCollection {
    const KEY: &'static str = "girogi-badges";
    const VERSION: u32 = 1;
}

impl PersistedStore for AchievementLog {
    const KEY: &'static str = "girogi-achievements";
    const VERSION: u32 = 1;
}

impl PersistedStore for CouponWallet {
    const KEY: &'static str = "girogi-coupons";
    const VERSION: u32 = 1;
}

impl PersistedStore for MiscCounters {
    const KEY: &'static str = "girogi-counters";
    const VERSION: u32 = 1;
}

/// What happened when a meal was recorded.
#[derive(Debug, Default)]
pub struct MealOutcome {
    pub day: Option<DayKey>,
    /// False when today had already been recorded
    pub new_day: bool,
    pub badges: Vec<(&'static Badge, u32)>,
    pub unlocked: Vec<&'static Achievement>,
    pub coupons: Vec<Coupon>,
}

#[derive(Debug, Default)]
pub struct Tracker {
    pub streak: StreakStore,
    pub badges: BadgeCollection,
    pub achievements: AchievementLog,
    pub coupons: CouponWallet,
    pub counters: MiscCounters,
    pub thresholds: Thresholds,
    engine: AchievementEngine,
    /// Stores that fell back to defaults on load, with why
    pub fallbacks: Vec<(&'static str, FallbackReason)>,
}

impl Tracker {
    pub fn new(thresholds: Thresholds) -> Self {
        Self {
            thresholds,
            ..Default::default()
        }
    }

    /// Load every store, refreshed against `today`. Never fails; a store
    /// that cannot be read starts empty.
    pub fn load(conn: &Connection, thresholds: Thresholds, today: DayKey) -> Self {
        let mut tracker = Self::new(thresholds);
        tracker.streak = tracker.load_store(conn);
        tracker.badges = tracker.load_store(conn);
        tracker.achievements = tracker.load_store(conn);
        tracker.coupons = tracker.load_store(conn);
        tracker.counters = tracker.load_store(conn);
        tracker.streak.refresh(today);
        tracker
    }

    fn load_store<T: PersistedStore>(&mut self, conn: &Connection) -> T {
        let loaded = StoreRepo::load::<T>(conn);
        if let Some(reason) = loaded.fallback_reason() {
            if *reason != FallbackReason::Missing {
                self.fallbacks.push((T::KEY, reason.clone()));
            }
        }
        loaded.into_inner()
    }

    /// Write every store in one transaction; a failure leaves the previous
    /// snapshots untouched.
    pub fn save(&self, conn: &Connection) -> Result<()> {
        let tx = conn.unchecked_transaction().context("Starting save")?;
        StoreRepo::save(&tx, &self.streak).context("Saving streak")?;
        StoreRepo::save(&tx, &self.badges).context("Saving badges")?;
        StoreRepo::save(&tx, &self.achievements).context("Saving achievements")?;
        StoreRepo::save(&tx, &self.coupons).context("Saving coupons")?;
        StoreRepo::save(&tx, &self.counters).context("Saving counters")?;
        tx.commit().context("Committing save")?;
        Ok(())
    }

    pub fn counters(&self) -> Counters {
        Counters {
            badge_counts: self.badges.counts(),
            current_streak: self.streak.state.current_streak,
            longest_streak: self.streak.state.longest_streak,
            total_days: self.streak.state.total_days,
        }
    }

    pub fn engine(&self) -> &AchievementEngine {
        &self.engine
    }

    /// Record a meal eaten at `now`: mark the day, award badges, issue
    /// coupons for streak thresholds reached, and unlock achievements.
    pub fn record_meal<Tz: TimeZone, S: AsRef<str>>(
        &mut self,
        foods: &[S],
        now: &DateTime<Tz>,
    ) -> MealOutcome {
        let today = day_key_of(now);
        let stamp = now.with_timezone(&Utc);
        let mut outcome = MealOutcome {
            day: Some(today),
            ..Default::default()
        };

        self.counters.meals_logged += 1;
        outcome.new_day = self.streak.record(today);

        if outcome.new_day {
            for ty in self.thresholds.crossed_at(self.streak.state.current_streak) {
                outcome.coupons.push(self.coupons.issue(ty, stamp).clone());
            }
        }

        for badge in match_badges(foods) {
            let count = self.badges.award(badge.id, stamp);
            outcome.badges.push((badge, count));
        }

        outcome.unlocked = self.unlock_new(stamp);
        for achievement in &outcome.unlocked {
            if let Reward::Coupon(ty) = achievement.reward {
                outcome.coupons.push(self.coupons.issue(ty, stamp).clone());
            }
        }
        outcome
    }

    /// Unlock everything whose condition is now met. Already unlocked
    /// achievements are left alone.
    pub fn unlock_new(&mut self, now: DateTime<Utc>) -> Vec<&'static Achievement> {
        let counters = self.counters();
        let unlocked_ids = self.achievements.unlocked_ids();
        let fresh = self
            .engine
            .check_newly_unlocked(ACHIEVEMENTS, &counters, &unlocked_ids);
        fresh
            .into_iter()
            .filter(|a| self.achievements.unlock(a.id, now))
            .collect()
    }

    pub fn recommendations(&self, limit: usize) -> Vec<(&'static Achievement, f64)> {
        self.engine.recommend(
            ACHIEVEMENTS,
            &self.counters(),
            &self.achievements.unlocked_ids(),
            limit,
        )
    }

    pub fn use_coupon(
        &mut self,
        id: u32,
        what_ate: Option<String>,
        now: DateTime<Utc>,
    ) -> Result<Coupon, CouponError> {
        self.coupons.use_coupon(id, what_ate, now).cloned()
    }

    pub fn resist_temptation(&mut self) -> u32 {
        self.counters.temptations_resisted += 1;
        self.counters.temptations_resisted
    }

    pub fn profile(&self, name: &str) -> Profile {
        let s = &self.streak.state;
        Profile {
            name: name.to_string(),
            current_streak: s.current_streak,
            longest_streak: s.longest_streak,
            total_days: s.total_days,
            badge_count: self.badges.distinct(),
            achievement_count: self.achievements.count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::migrations::run_migrations;
    use crate::models::CouponType;
    use chrono::FixedOffset;

    fn tz() -> FixedOffset {
        FixedOffset::east_opt(9 * 3600).unwrap()
    }

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<FixedOffset> {
        tz().with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    fn ids(list: &[&Achievement]) -> Vec<&'static str> {
        list.iter().map(|a| a.id).collect()
    }

    #[test]
    fn test_first_meal() {
        let mut t = Tracker::default();
        let out = t.record_meal(&["chicken salad"], &at(2024, 5, 6, 12));
        assert!(out.new_day);
        assert_eq!(out.badges.len(), 2);
        assert_eq!(ids(&out.unlocked), vec!["first_record"]);
        assert!(out.coupons.is_empty());
        assert_eq!(t.streak.state.current_streak, 1);
        assert_eq!(t.counters.meals_logged, 1);
    }

    #[test]
    fn test_second_meal_same_day_keeps_streak() {
        let mut t = Tracker::default();
        t.record_meal(&["oatmeal"], &at(2024, 5, 6, 8));
        let before = t.streak.clone();
        let out = t.record_meal(&["oatmeal"], &at(2024, 5, 6, 19));
        assert!(!out.new_day);
        assert_eq!(t.streak, before);
        assert_eq!(t.badges.count("oatmeal"), 2);
        assert!(out.unlocked.is_empty());
    }

    #[test]
    fn test_seven_days_unlocks_and_issues() {
        let mut t = Tracker::default();
        let mut coupons = Vec::new();
        let mut unlocked = Vec::new();
        for day in 6..=12 {
            let out = t.record_meal(&["broccoli"], &at(2024, 5, day, 12));
            coupons.extend(out.coupons.into_iter().map(|c| c.coupon_type));
            unlocked.extend(ids(&out.unlocked));
        }
        let s = &t.streak.state;
        assert_eq!((s.current_streak, s.longest_streak, s.total_days), (7, 7, 7));
        assert_eq!(s.weekly_status, [true; 7]);
        assert!(unlocked.contains(&"streak_7"));
        assert_eq!(coupons, vec![CouponType::SnackBox, CouponType::SnackBox, CouponType::CheatDay]);

        let progress = t
            .engine()
            .progress(crate::catalog::find_achievement("streak_7").unwrap(), &t.counters());
        assert_eq!(progress, 1.0);
    }

    #[test]
    fn test_achievement_coupon_reward() {
        let mut t = Tracker::default();
        for day in 1..=13 {
            t.record_meal(&["egg"], &at(2024, 7, day, 9));
        }
        let out = t.record_meal(&["egg"], &at(2024, 7, 14, 9));
        assert_eq!(ids(&out.unlocked), vec!["streak_14"]);
        let types: Vec<_> = out.coupons.iter().map(|c| c.coupon_type).collect();
        // streak 14 lands on the cheat day threshold and the achievement pays a snack box
        assert_eq!(types, vec![CouponType::CheatDay, CouponType::SnackBox]);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let conn = Connection::open(file.path()).unwrap();
        run_migrations(&conn).unwrap();

        let mut t = Tracker::default();
        t.record_meal(&["salmon", "brown rice"], &at(2024, 5, 6, 12));
        t.record_meal(&["tuna"], &at(2024, 5, 7, 12));
        t.resist_temptation();
        t.save(&conn).unwrap();
        drop(conn);

        let conn = Connection::open(file.path()).unwrap();
        let today: DayKey = "2024-05-07".parse().unwrap();
        let loaded = Tracker::load(&conn, Thresholds::default(), today);
        assert!(loaded.fallbacks.is_empty());
        assert_eq!(loaded.streak, t.streak);
        assert_eq!(loaded.badges, t.badges);
        assert_eq!(loaded.achievements, t.achievements);
        assert_eq!(loaded.counters.temptations_resisted, 1);
        assert_eq!(loaded.profile("me"), t.profile("me"));
    }

    #[test]
    fn test_failed_save_writes_nothing() {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        conn.execute_batch(
            "CREATE TRIGGER reject_coupons BEFORE INSERT ON kv_store
             WHEN NEW.key = 'girogi-coupons'
             BEGIN SELECT RAISE(ABORT, 'disk full'); END;",
        )
        .unwrap();

        let mut t = Tracker::default();
        for day in 6..=8 {
            t.record_meal(&["tofu"], &at(2024, 5, day, 12));
        }
        assert!(t.save(&conn).is_err());

        assert_eq!(StoreRepo::get_raw(&conn, StreakStore::KEY).unwrap(), None);
        assert_eq!(StoreRepo::get_raw(&conn, BadgeCollection::KEY).unwrap(), None);
        assert_eq!(StoreRepo::get_raw(&conn, AchievementLog::KEY).unwrap(), None);
    }

    #[test]
    fn test_load_refreshes_against_today() {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        let mut t = Tracker::default();
        t.record_meal(&["tofu"], &at(2024, 5, 6, 12));
        t.record_meal(&["tofu"], &at(2024, 5, 7, 12));
        t.save(&conn).unwrap();

        let later: DayKey = "2024-05-20".parse().unwrap();
        let loaded = Tracker::load(&conn, Thresholds::default(), later);
        assert_eq!(loaded.streak.state.current_streak, 0);
        assert_eq!(loaded.streak.state.longest_streak, 2);
    }

    #[test]
    fn test_corrupt_store_falls_back() {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        StoreRepo::put_raw(&conn, CouponWallet::KEY, "garbage").unwrap();

        let loaded = Tracker::load(&conn, Thresholds::default(), DayKey::today());
        assert_eq!(loaded.coupons, CouponWallet::default());
        assert_eq!(loaded.fallbacks.len(), 1);
        assert_eq!(loaded.fallbacks[0].0, CouponWallet::KEY);
    }

    #[test]
    fn test_use_coupon_twice() {
        let mut t = Tracker::default();
        let id = t.coupons.issue(CouponType::SnackBox, Utc::now()).id;
        let first = t.use_coupon(id, Some("chips".into()), Utc::now()).unwrap();
        let again = t.use_coupon(id, Some("cookies".into()), Utc::now());
        assert!(matches!(again, Err(CouponError::AlreadyUsed { .. })));
        let stored = t.coupons.coupons.iter().find(|c| c.id == id).unwrap();
        assert_eq!(stored.used_at, first.used_at);
        assert_eq!(stored.what_ate.as_deref(), Some("chips"));
    }

    #[test]
    fn test_profile_counts() {
        let mut t = Tracker::default();
        t.record_meal(&["salmon", "salad"], &at(2024, 5, 6, 12));
        t.record_meal(&["salmon"], &at(2024, 5, 7, 12));
        let p = t.profile("Mina");
        assert_eq!(p.name, "Mina");
        assert_eq!(p.current_streak, 2);
        assert_eq!(p.badge_count, 2);
        assert_eq!(p.achievement_count, 1);
    }
}
