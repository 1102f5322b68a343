use crate::catalog::BADGES;
use crate::models::Badge;

/// Badges whose keywords appear in any of the food tags. Each badge is
/// returned at most once, in catalog order.
pub fn match_badges<S: AsRef<str>>(foods: &[S]) -> Vec<&'static Badge> {
    let foods: Vec<String> = foods
        .iter()
        .map(|f| f.as_ref().trim().to_lowercase())
        .filter(|f| !f.is_empty())
        .collect();

    BADGES
        .iter()
        .filter(|badge| {
            badge
                .keywords
                .iter()
                .any(|kw| foods.iter().any(|food| food.contains(kw)))
        })
        .collect()
}
