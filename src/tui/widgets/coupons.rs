use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::models::CouponType;
use crate::progress::{days_until_eligible, Thresholds};
use crate::state::CouponWallet;
use crate::tui::theme;
use crate::utils::format::format_days;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    wallet: &CouponWallet,
    thresholds: &Thresholds,
    current_streak: u32,
) {
    let block = Block::default()
        .title(Span::styled(" Coupons ", theme::leaf()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border())
        .style(theme::surface());

    let mut lines = vec![Line::from("")];

    let unused: Vec<_> = wallet.unused().collect();
    if unused.is_empty() {
        lines.push(Line::from(Span::styled("  No coupons to spend", theme::dim())));
    }
    for c in unused {
        lines.push(Line::from(vec![
            Span::styled("  🎟 ", theme::amber()),
            Span::styled(
                format!("#{} {}", c.id, c.coupon_type.display_name()),
                theme::amber().add_modifier(Modifier::BOLD),
            ),
        ]));
    }

    lines.push(Line::from(""));
    for ty in CouponType::all() {
        let left = days_until_eligible(current_streak, thresholds.for_type(ty));
        let text = if !thresholds.can_issue(ty, current_streak) {
            format!("  {}: {} to go", ty.display_name(), format_days(left))
        } else if left == 0 {
            format!("  {}: earned", ty.display_name())
        } else {
            format!("  {}: next in {}", ty.display_name(), format_days(left))
        };
        lines.push(Line::from(Span::styled(text, theme::dim())));
    }

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}
