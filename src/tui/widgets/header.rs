use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::models::StreakState;
use crate::progress::DayKey;
use crate::tui::theme;

/// Status chip for the day: whether a meal is in, and what is at stake if not.
fn day_status(streak: &StreakState, today: DayKey) -> (String, ratatui::style::Style) {
    if streak.last_record_date == Some(today) {
        return ("✓ today recorded".to_string(), theme::green());
    }
    if streak.current_streak > 0 {
        (
            format!("○ record today to keep {} alive", streak.current_streak),
            theme::amber(),
        )
    } else {
        ("○ nothing recorded yet".to_string(), theme::dim())
    }
}

pub fn render(frame: &mut Frame, area: Rect, name: &str, streak: &StreakState, today: DayKey) {
    let date_str = today.date().format("%A, %b %d").to_string();
    let (status, status_style) = day_status(streak, today);

    let title_line = Line::from(vec![
        Span::styled("기로기 ", theme::leaf().add_modifier(Modifier::BOLD)),
        Span::styled(format!("· {}", name), theme::amber()),
    ]);

    let status_line = Line::from(vec![
        Span::styled(date_str, theme::dim()),
        Span::styled("   ", theme::dim()),
        Span::styled(status, status_style),
        Span::styled(
            format!("   🔥 {}", streak.current_streak),
            theme::flame(),
        ),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border())
        .style(theme::base());

    let paragraph = Paragraph::new(vec![title_line, Line::from(""), status_line])
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> DayKey {
        s.parse().unwrap()
    }

    #[test]
    fn test_status_reflects_today() {
        let today = key("2024-05-08");
        let mut s = StreakState {
            current_streak: 3,
            last_record_date: Some(today),
            ..Default::default()
        };
        assert!(day_status(&s, today).0.contains("today recorded"));

        s.last_record_date = Some(key("2024-05-07"));
        assert!(day_status(&s, today).0.contains("keep 3 alive"));

        let fresh = StreakState::default();
        assert!(day_status(&fresh, today).0.contains("nothing recorded"));
    }
}
