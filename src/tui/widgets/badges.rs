use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::catalog::{find_badge, BADGES};
use crate::models::BadgeCategory;
use crate::state::BadgeCollection;
use crate::tui::theme;

pub fn render(frame: &mut Frame, area: Rect, collection: &BadgeCollection) {
    let block = Block::default()
        .title(Span::styled(
            format!(" Badges {}/{} ", collection.distinct(), BADGES.len()),
            theme::leaf(),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border())
        .style(theme::surface());

    let mut lines = vec![Line::from("")];
    for category in BadgeCategory::all() {
        let in_category: Vec<_> = BADGES.iter().filter(|b| b.category == category).collect();
        let owned = in_category
            .iter()
            .filter(|b| collection.count(b.id) > 0)
            .count();
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<11}", category.display_name()), theme::dim()),
            Span::styled(
                format!("{}/{}", owned, in_category.len()),
                if owned == in_category.len() {
                    theme::green()
                } else {
                    theme::bold()
                },
            ),
        ]));
    }

    let latest = collection
        .badges
        .iter()
        .max_by_key(|b| b.last_acquired)
        .and_then(|b| find_badge(&b.badge_id).map(|badge| (badge, b.count)));
    if let Some((badge, count)) = latest {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("  Latest: ", theme::dim()),
            Span::styled(format!("{} {} x{}", badge.emoji, badge.name, count), theme::leaf()),
        ]));
    }

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}
