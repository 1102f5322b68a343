use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Coupon, CouponType};

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum CouponError {
    #[error("no coupon with id {0}")]
    NotFound(u32),
    #[error("coupon {id} was already used on {used_at}")]
    AlreadyUsed { id: u32, used_at: String },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CouponWallet {
    #[serde(default)]
    pub coupons: Vec<Coupon>,
    #[serde(default)]
    pub next_id: u32,
}

impl CouponWallet {
    /// Ids stay unique even when `next_id` was lost from a stored snapshot.
    pub fn issue(&mut self, coupon_type: CouponType, now: DateTime<Utc>) -> &Coupon {
        let highest = self.coupons.iter().map(|c| c.id).max().unwrap_or(0);
        let id = highest.max(self.next_id) + 1;
        self.next_id = id;
        log::info!("issued {} coupon #{}", coupon_type.as_str(), id);
        self.coupons.push(Coupon {
            id,
            coupon_type,
            issued_at: now,
            used_at: None,
            is_used: false,
            what_ate: None,
        });
        &self.coupons[self.coupons.len() - 1]
    }

    /// Spend a coupon. A used coupon is never touched again.
    pub fn use_coupon(
        &mut self,
        id: u32,
        what_ate: Option<String>,
        now: DateTime<Utc>,
    ) -> Result<&Coupon, CouponError> {
        let coupon = self
            .coupons
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(CouponError::NotFound(id))?;

        if coupon.is_used {
            return Err(CouponError::AlreadyUsed {
                id,
                used_at: coupon
                    .used_at
                    .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                    .unwrap_or_default(),
            });
        }

        coupon.is_used = true;
        coupon.used_at = Some(now);
        coupon.what_ate = what_ate;
        log::info!("used coupon #{}", id);
        Ok(coupon)
    }

    pub fn unused(&self) -> impl Iterator<Item = &Coupon> {
        self.coupons.iter().filter(|c| !c.is_used)
    }
}
