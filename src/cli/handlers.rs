use anyhow::{Context, Result};
use chrono::{Datelike, Local, Utc};
use rusqlite::Connection;
use std::path::Path;

use crate::catalog::{find_achievement, BADGES};
use crate::cli::args::CouponCommands;
use crate::config::AppConfig;
use crate::db::repository::{PersistedStore, StoreRepo};
use crate::models::{BadgeCategory, ComparisonResult, CouponType, MiscCounters, Profile, Winner};
use crate::progress::{
    compare, compare_overall, days_until_eligible, overall_score, week_start, DayKey,
};
use crate::state::{AchievementLog, BadgeCollection, CouponWallet, StreakStore, Tracker};
use crate::utils::format::{format_days, format_percent, pad_to_width, progress_bar};

// ─── ANSI helpers ────────────────────────────────────────────────────────────

macro_rules! println_colored {
    ($color:expr, $($arg:tt)*) => {{
        print!("{}", $color);
        print!($($arg)*);
        println!("\x1b[0m");
    }};
}

const GREEN: &str = "\x1b[32m";
const AMBER: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";
const LEAF: &str = "\x1b[38;2;120;176;96m";

/// Load the tracker and mention any store that had to be reset.
pub fn load_tracker(conn: &Connection, config: &AppConfig) -> Tracker {
    let tracker = Tracker::load(conn, config.rewards.thresholds(), DayKey::today());
    for (key, reason) in &tracker.fallbacks {
        eprintln!("{}  ! {} could not be loaded ({}); starting fresh\x1b[0m", AMBER, key, reason);
    }
    tracker
}

// ─── Record ──────────────────────────────────────────────────────────────────

pub fn handle_record(conn: &Connection, config: &AppConfig, foods: &[String]) -> Result<()> {
    let mut tracker = load_tracker(conn, config);
    let outcome = tracker.record_meal(foods, &Local::now());
    tracker.save(conn)?;

    println!();
    if outcome.new_day {
        println_colored!(
            GREEN,
            "  ✓ Meal recorded — streak: {}",
            format_days(tracker.streak.state.current_streak)
        );
    } else {
        println_colored!(
            DIM,
            "  ✓ Meal recorded — today already counted ({} streak)",
            format_days(tracker.streak.state.current_streak)
        );
    }

    for (badge, count) in &outcome.badges {
        if *count == 1 {
            println_colored!(LEAF, "  {} New badge: {}", badge.emoji, badge.name);
        } else {
            println!("  {} {} x{}", badge.emoji, badge.name, count);
        }
    }

    for achievement in &outcome.unlocked {
        println_colored!(
            AMBER,
            "  ★ Achievement unlocked: {} (reward: {})",
            achievement.name,
            achievement.reward.describe()
        );
    }

    for coupon in &outcome.coupons {
        println_colored!(
            GREEN,
            "  🎟  {} coupon #{} issued",
            coupon.coupon_type.display_name(),
            coupon.id
        );
    }
    println!();
    Ok(())
}

// ─── Stats ───────────────────────────────────────────────────────────────────

pub fn handle_stats(conn: &Connection, config: &AppConfig, week: bool) -> Result<()> {
    let tracker = load_tracker(conn, config);
    let s = &tracker.streak.state;

    println!();
    println_colored!(LEAF, "  Statistics");
    println!();
    println_colored!(
        BOLD,
        "  Streak:      {} current  |  {} best",
        format_days(s.current_streak),
        format_days(s.longest_streak)
    );
    println!("  Total days:  {}", s.total_days);
    match s.last_record_date {
        Some(last) => println!("  Last meal:   {}", last),
        None => println_colored!(DIM, "  Last meal:   never"),
    }
    println!("  Meals:       {}", tracker.counters.meals_logged);
    println!("  Resisted:    {} temptations", tracker.counters.temptations_resisted);

    if week {
        let today = DayKey::today();
        let monday = week_start(today);
        println!();
        println_colored!(DIM, "  This week  (● = recorded, ○ = missed, · = upcoming)");
        println!();
        print!("  ");
        for (i, done) in s.weekly_status.iter().enumerate() {
            let day = monday.add_days(i as i64);
            let icon = if *done {
                format!("{}●\x1b[0m ", GREEN)
            } else if day > today {
                format!("{}·\x1b[0m ", DIM)
            } else {
                format!("{}○\x1b[0m ", AMBER)
            };
            print!("{}", icon);
        }
        println!();
        print!("  ");
        for i in 0..7 {
            let weekday = monday.add_days(i).date().weekday();
            print!("{}{}\x1b[0m ", DIM, &weekday.to_string()[..1]);
        }
        println!();
        println!();
        println!("  {}/7 days this week", s.days_this_week());
    }

    println!();
    Ok(())
}

// ─── Badges ──────────────────────────────────────────────────────────────────

pub fn handle_badges(conn: &Connection, config: &AppConfig) -> Result<()> {
    let tracker = load_tracker(conn, config);

    println!();
    println_colored!(
        LEAF,
        "  Badges  ({}/{} collected)",
        tracker.badges.distinct(),
        BADGES.len()
    );

    for category in BadgeCategory::all() {
        println!();
        println_colored!(BOLD, "  {}", category.display_name());
        for badge in BADGES.iter().filter(|b| b.category == category) {
            let count = tracker.badges.count(badge.id);
            let name = pad_to_width(&format!("{} {}", badge.emoji, badge.name), 24);
            if count == 0 {
                println_colored!(DIM, "    {}  —  {}", name, badge.rarity.as_str());
            } else {
                println!("    {}  x{:<4} {}{}\x1b[0m", name, count, DIM, badge.rarity.as_str());
            }
        }
    }
    println!();
    Ok(())
}

// ─── Achievements ────────────────────────────────────────────────────────────

pub fn handle_achievements(conn: &Connection, config: &AppConfig, ack: bool) -> Result<()> {
    let mut tracker = load_tracker(conn, config);
    let counters = tracker.counters();

    println!();
    println_colored!(LEAF, "  Achievements  ({} unlocked)", tracker.achievements.count());
    println!();

    if tracker.achievements.unlocked.is_empty() {
        println_colored!(DIM, "  Nothing unlocked yet — record a meal to get started");
    }
    for unlocked in &tracker.achievements.unlocked {
        let Some(a) = find_achievement(&unlocked.achievement_id) else {
            continue;
        };
        let marker = if unlocked.is_new { " NEW" } else { "" };
        println_colored!(
            GREEN,
            "  ★ {}{}  {}{}",
            pad_to_width(a.name, 22),
            marker,
            DIM,
            unlocked.unlocked_at.with_timezone(&Local).format("%Y-%m-%d")
        );
    }

    let next = tracker.recommendations(config.display.recommend_limit);
    if !next.is_empty() {
        println!();
        println_colored!(BOLD, "  Next up");
        for (a, ratio) in &next {
            let detail = match tracker.engine().numerator(a, &counters) {
                Some((current, target)) => format!("{}/{}", current, target),
                None => "?".to_string(),
            };
            println!(
                "  {}  {}{}\x1b[0m  {:>4}  {}",
                pad_to_width(a.name, 22),
                GREEN,
                progress_bar(*ratio, 12),
                format_percent(*ratio),
                detail
            );
            println_colored!(DIM, "      {}", a.description);
        }
    }

    if ack {
        let cleared = tracker.achievements.acknowledge_all();
        tracker.save(conn)?;
        println!();
        println_colored!(DIM, "  Marked {} as seen", cleared);
    }
    println!();
    Ok(())
}

// ─── Coupons ─────────────────────────────────────────────────────────────────

pub fn handle_coupons(conn: &Connection, config: &AppConfig, action: &CouponCommands) -> Result<()> {
    let mut tracker = load_tracker(conn, config);

    match action {
        CouponCommands::List => {
            println!();
            println_colored!(LEAF, "  Coupons");
            println!();
            if tracker.coupons.coupons.is_empty() {
                println_colored!(DIM, "  No coupons yet");
            }
            for c in &tracker.coupons.coupons {
                let issued = c.issued_at.with_timezone(&Local).format("%Y-%m-%d");
                if c.is_used {
                    let ate = c.what_ate.as_deref().unwrap_or("-");
                    println_colored!(
                        DIM,
                        "  #{:<3} {:<10} issued {}  used: {}",
                        c.id,
                        c.coupon_type.display_name(),
                        issued,
                        ate
                    );
                } else {
                    println_colored!(
                        GREEN,
                        "  #{:<3} {:<10} issued {}  ready",
                        c.id,
                        c.coupon_type.display_name(),
                        issued
                    );
                }
            }

            let streak = tracker.streak.state.current_streak;
            println!();
            for ty in CouponType::all() {
                let threshold = tracker.thresholds.for_type(ty);
                let left = days_until_eligible(streak, threshold);
                if left == 0 {
                    println_colored!(GREEN, "  {}: earned at today's streak", ty.display_name());
                } else {
                    println_colored!(
                        DIM,
                        "  {}: {} to go (every {})",
                        ty.display_name(),
                        format_days(left),
                        format_days(threshold)
                    );
                }
            }
            println!();
        }
        CouponCommands::Use { id, ate } => {
            let used = tracker.use_coupon(*id, ate.clone(), Utc::now())?;
            tracker.save(conn)?;
            println_colored!(
                GREEN,
                "  ✓ Used {} coupon #{} — enjoy!",
                used.coupon_type.display_name(),
                used.id
            );
        }
    }
    Ok(())
}

// ─── Resist ──────────────────────────────────────────────────────────────────

pub fn handle_resist(conn: &Connection, config: &AppConfig) -> Result<()> {
    let mut tracker = load_tracker(conn, config);
    let total = tracker.resist_temptation();
    tracker.save(conn)?;
    println_colored!(GREEN, "  ✓ Temptation resisted — {} so far", total);
    Ok(())
}

// ─── Profile & compare ───────────────────────────────────────────────────────

pub fn handle_profile(conn: &Connection, config: &AppConfig) -> Result<()> {
    let tracker = load_tracker(conn, config);
    let profile = tracker.profile(&config.profile.name);
    println!("{}", serde_json::to_string_pretty(&profile)?);
    Ok(())
}

pub fn read_profile(path: &Path) -> Result<Profile> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("Reading {:?}", path))?;
    serde_json::from_str(&content).with_context(|| format!("Parsing profile {:?}", path))
}

pub fn handle_compare(
    conn: &Connection,
    config: &AppConfig,
    friend_path: &Path,
    overall: bool,
) -> Result<()> {
    let tracker = load_tracker(conn, config);
    let me = tracker.profile(&config.profile.name);
    let friend = read_profile(friend_path)?;

    let result = if overall {
        compare_overall(&me, &friend)
    } else {
        compare(&me, &friend)
    };
    print_comparison(&result, overall);
    Ok(())
}

fn print_comparison(result: &ComparisonResult, overall: bool) {
    let me = &result.my_profile;
    let friend = &result.friend_profile;

    println!();
    println_colored!(LEAF, "  {} vs {}", me.name, friend.name);
    println!();
    let rows: [(&str, u64, u64); 6] = [
        ("Current streak", me.current_streak.into(), friend.current_streak.into()),
        ("Longest streak", me.longest_streak.into(), friend.longest_streak.into()),
        ("Total days", me.total_days.into(), friend.total_days.into()),
        ("Badges", me.badge_count.into(), friend.badge_count.into()),
        ("Achievements", me.achievement_count.into(), friend.achievement_count.into()),
        ("Overall score", overall_score(me), overall_score(friend)),
    ];
    for (label, mine, theirs) in rows {
        println!("  {:<16} {:>6}  {:>6}", label, mine, theirs);
    }

    println!();
    let basis = if overall { "points" } else { "days" };
    match result.winner {
        Winner::Me => println_colored!(GREEN, "  You lead by {} {}", result.difference, basis),
        Winner::Friend => println_colored!(
            RED,
            "  {} leads by {} {}",
            friend.name,
            result.difference,
            basis
        ),
        Winner::Tie => println_colored!(AMBER, "  It's a tie"),
    }
    println!();
}

// ─── Name & reset ────────────────────────────────────────────────────────────

pub fn handle_name(config: &mut AppConfig, name: &str) -> Result<()> {
    let name = name.trim();
    if name.is_empty() {
        anyhow::bail!("Name cannot be empty");
    }
    config.profile.name = name.to_string();
    config.save()?;
    println_colored!(GREEN, "  ✓ Name set to {}", config.profile.name);
    Ok(())
}

pub fn handle_reset(conn: &Connection, yes: bool) -> Result<()> {
    if !yes {
        println_colored!(AMBER, "  This erases every streak, badge, achievement and coupon.");
        println_colored!(DIM, "  Run `girogi reset --yes` to confirm.");
        return Ok(());
    }
    for key in [
        StreakStore::KEY,
        BadgeCollection::KEY,
        AchievementLog::KEY,
        CouponWallet::KEY,
        MiscCounters::KEY,
    ] {
        StoreRepo::remove(conn, key)?;
    }
    log::info!("all stores erased");
    println_colored!(GREEN, "  ✓ Progress erased");
    Ok(())
}
