use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::models::StreakState;
use crate::progress::{days_until_eligible, DayKey};
use crate::tui::theme;
use crate::utils::format::{format_days, progress_bar};

const WEEKDAYS: [&str; 7] = ["M", "T", "W", "T", "F", "S", "S"];

pub fn render(frame: &mut Frame, area: Rect, streak: &StreakState, today: DayKey, milestone: u32) {
    let block = Block::default()
        .title(Span::styled(" Streak ", theme::leaf()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border())
        .style(theme::surface());

    let recorded_today = streak.last_record_date == Some(today);
    let flame_style = if recorded_today {
        theme::flame()
    } else {
        theme::dim().add_modifier(Modifier::BOLD)
    };

    let streak_line = Line::from(vec![
        Span::styled("  🔥 ", flame_style),
        Span::styled(format!("{}", streak.current_streak), flame_style),
        Span::styled(
            if streak.current_streak == 1 { " day" } else { " days" },
            theme::dim(),
        ),
        Span::styled(
            if recorded_today { "" } else { "   record today to keep it" },
            theme::amber(),
        ),
    ]);

    // Bar fills toward the next milestone
    let left = days_until_eligible(streak.current_streak, milestone);
    let into_cycle = milestone.saturating_sub(left);
    let ratio = if milestone == 0 {
        1.0
    } else {
        into_cycle as f64 / milestone as f64
    };
    let bar_line = Line::from(vec![
        Span::styled("  ", theme::dim()),
        Span::styled(progress_bar(ratio, 14), theme::green()),
        Span::styled(
            if left == 0 {
                "  milestone reached".to_string()
            } else {
                format!("  {} to next reward", format_days(left))
            },
            theme::dim(),
        ),
    ]);

    let mut dot_spans = vec![Span::styled("  ", theme::dim())];
    let mut label_spans = vec![Span::styled("  ", theme::dim())];
    let monday = crate::progress::week_start(today);
    for (i, done) in streak.weekly_status.iter().enumerate() {
        let day = monday.add_days(i as i64);
        let (dot, style) = if *done {
            ("●", theme::green().add_modifier(Modifier::BOLD))
        } else if day > today {
            ("·", theme::dim())
        } else {
            ("○", theme::amber())
        };
        dot_spans.push(Span::styled(dot, style));
        dot_spans.push(Span::styled("  ", theme::dim()));
        label_spans.push(Span::styled(WEEKDAYS[i], theme::dim()));
        label_spans.push(Span::styled("  ", theme::dim()));
    }

    let meta_line = Line::from(vec![Span::styled(
        format!(
            "  Best: {}  ·  Total: {}  ·  Week: {}/7",
            streak.longest_streak,
            streak.total_days,
            streak.days_this_week()
        ),
        theme::dim(),
    )]);

    let text = vec![
        Line::from(""),
        streak_line,
        bar_line,
        Line::from(""),
        Line::from(dot_spans),
        Line::from(label_spans),
        Line::from(""),
        meta_line,
    ];
    let paragraph = Paragraph::new(text).block(block);
    frame.render_widget(paragraph, area);
}
