pub mod achievements;
pub mod badges;
pub mod coupons;
pub mod header;
pub mod statusbar;
pub mod streak;
