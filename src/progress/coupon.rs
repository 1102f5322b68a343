use crate::models::CouponType;

/// Streak thresholds per coupon type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    pub snack_box: u32,
    pub cheat_day: u32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            snack_box: CouponType::SnackBox.default_threshold(),
            cheat_day: CouponType::CheatDay.default_threshold(),
        }
    }
}

impl Thresholds {
    pub fn for_type(&self, coupon_type: CouponType) -> u32 {
        match coupon_type {
            CouponType::SnackBox => self.snack_box,
            CouponType::CheatDay => self.cheat_day,
        }
    }

    pub fn can_issue(&self, coupon_type: CouponType, current_streak: u32) -> bool {
        current_streak >= self.for_type(coupon_type)
    }

    /// Coupon types whose threshold `streak` lands on exactly.
    pub fn crossed_at(&self, streak: u32) -> Vec<CouponType> {
        if streak == 0 {
            return Vec::new();
        }
        CouponType::all()
            .into_iter()
            .filter(|ty| days_until_eligible(streak, self.for_type(*ty)) == 0)
            .collect()
    }
}

/// Days left until the streak reaches the next multiple of `threshold`.
/// An exact non-zero multiple means eligible now.
pub fn days_until_eligible(streak: u32, threshold: u32) -> u32 {
    if threshold == 0 {
        return 0;
    }
    let rem = streak % threshold;
    if rem == 0 && streak > 0 {
        0
    } else {
        threshold - rem
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_can_issue_thresholds() {
        let t = Thresholds::default();
        assert!(!t.can_issue(CouponType::SnackBox, 2));
        assert!(t.can_issue(CouponType::SnackBox, 3));
        assert!(!t.can_issue(CouponType::CheatDay, 6));
        assert!(t.can_issue(CouponType::CheatDay, 7));
        assert!(t.can_issue(CouponType::CheatDay, 30));
    }

    #[test]
    fn test_days_until_eligible() {
        assert_eq!(days_until_eligible(0, 7), 7);
        assert_eq!(days_until_eligible(1, 7), 6);
        assert_eq!(days_until_eligible(6, 7), 1);
        assert_eq!(days_until_eligible(7, 7), 0);
        assert_eq!(days_until_eligible(8, 7), 6);
        assert_eq!(days_until_eligible(14, 7), 0);
        assert_eq!(days_until_eligible(5, 0), 0);
    }

    #[test]
    fn test_crossed_at_multiples() {
        let t = Thresholds::default();
        assert!(t.crossed_at(0).is_empty());
        assert!(t.crossed_at(2).is_empty());
        assert_eq!(t.crossed_at(3), vec![CouponType::SnackBox]);
        assert_eq!(t.crossed_at(7), vec![CouponType::CheatDay]);
        assert_eq!(
            t.crossed_at(21),
            vec![CouponType::SnackBox, CouponType::CheatDay]
        );
    }

    #[test]
    fn test_custom_thresholds() {
        let t = Thresholds {
            snack_box: 2,
            cheat_day: 5,
        };
        assert!(t.can_issue(CouponType::SnackBox, 2));
        assert_eq!(t.crossed_at(10), vec![CouponType::SnackBox, CouponType::CheatDay]);
    }
}
