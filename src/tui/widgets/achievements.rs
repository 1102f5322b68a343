use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::models::Achievement;
use crate::tui::theme;
use crate::utils::format::{format_percent, pad_to_width, progress_bar};

pub fn render(
    frame: &mut Frame,
    area: Rect,
    recommended: &[(&Achievement, f64)],
    new_unlocks: &[&Achievement],
    unlocked_total: u32,
) {
    let block = Block::default()
        .title(Span::styled(
            format!(" Achievements ({}) ", unlocked_total),
            theme::leaf(),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border())
        .style(theme::surface());

    let mut lines = vec![Line::from("")];

    for a in new_unlocks {
        lines.push(Line::from(vec![
            Span::styled("  ★ ", theme::amber().add_modifier(Modifier::BOLD)),
            Span::styled(a.name, theme::bold()),
            Span::styled("  new!", theme::amber()),
        ]));
    }
    if !new_unlocks.is_empty() {
        lines.push(Line::from(Span::styled("  [a] mark as seen", theme::dim())));
        lines.push(Line::from(""));
    }

    if recommended.is_empty() {
        lines.push(Line::from(Span::styled(
            "  Everything unlocked ✓",
            theme::green(),
        )));
    }
    for (a, ratio) in recommended {
        lines.push(Line::from(vec![
            Span::styled("  ", theme::dim()),
            Span::styled(pad_to_width(a.name, 20), theme::bold()),
            Span::styled(progress_bar(*ratio, 10), theme::green()),
            Span::styled(format!(" {:>4}", format_percent(*ratio)), theme::dim()),
        ]));
        lines.push(Line::from(Span::styled(
            format!("    {}", a.description),
            theme::dim(),
        )));
    }

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}
