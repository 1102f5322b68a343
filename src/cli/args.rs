use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "girogi", version, author, about = "A terminal companion for building healthy eating streaks")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Record a meal for today
    Record {
        /// What you ate, e.g. --food "grilled salmon" --food "brown rice"
        #[arg(long = "food", short = 'f', required = true)]
        foods: Vec<String>,
    },
    /// Show streak statistics
    Stats {
        /// Show this week's Mon-Sun record
        #[arg(long)]
        week: bool,
    },
    /// List collected badges
    Badges,
    /// Show unlocked achievements and what to aim for next
    Achievements {
        /// Mark new unlocks as seen
        #[arg(long)]
        ack: bool,
    },
    /// Reward coupons
    Coupons {
        #[command(subcommand)]
        action: CouponCommands,
    },
    /// Count a temptation you resisted
    Resist,
    /// Print your profile as JSON, for friends to compare against
    Profile,
    /// Compare with a friend's profile JSON
    Compare {
        /// Path to the friend's profile (output of `girogi profile`)
        friend: PathBuf,
        /// Use the weighted overall score instead of the current streak
        #[arg(long)]
        overall: bool,
    },
    /// Set the name shown in comparisons
    Name {
        name: String,
    },
    /// Erase all recorded progress
    Reset {
        /// Required to actually erase
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum CouponCommands {
    /// Show coupons and days until the next ones
    List,
    /// Spend a coupon
    Use {
        /// Coupon id
        id: u32,
        /// What you treated yourself to
        #[arg(long)]
        ate: Option<String>,
    },
}
