use anyhow::Result;
use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};
use rusqlite::Connection;
use std::time::Duration;

use crate::catalog::find_achievement;
use crate::config::AppConfig;
use crate::models::Achievement;
use crate::progress::DayKey;
use crate::state::{MealOutcome, Tracker};
use crate::tui::events::{Event, EventHandler};
use crate::tui::theme;
use crate::tui::widgets::{achievements, badges, coupons, header, statusbar, streak};
use crate::utils::format::{format_days, format_percent, pad_to_width, progress_bar};

#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Dashboard,
    Stats,
    Help,
}

#[derive(Debug, Clone, PartialEq)]
pub enum InputMode {
    Normal,
    FoodInput,
}

pub struct App {
    pub view: View,
    pub config: AppConfig,
    pub tracker: Tracker,
    pub today: DayKey,
    pub should_quit: bool,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub input_error: Option<String>,
    /// One-line message replacing the key hints until the next key press
    pub flash: Option<String>,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let thresholds = config.rewards.thresholds();
        App {
            view: View::Dashboard,
            config,
            tracker: Tracker::new(thresholds),
            today: DayKey::today(),
            should_quit: false,
            input_mode: InputMode::Normal,
            input_buffer: String::new(),
            input_error: None,
            flash: None,
        }
    }

    pub fn load(&mut self, conn: &Connection) {
        self.today = DayKey::today();
        self.tracker = Tracker::load(conn, self.config.rewards.thresholds(), self.today);
        if let Some((key, reason)) = self.tracker.fallbacks.first() {
            self.flash = Some(format!("{} reset: {}", key, reason));
        }
    }

    /// Reload when the date rolls over so the streak and week reflect the new day.
    pub fn tick(&mut self, conn: &Connection) {
        if DayKey::today() != self.today {
            log::debug!("date changed, reloading");
            self.load(conn);
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent, conn: &Connection) {
        // Some terminals also report release and repeat events
        if key.kind != KeyEventKind::Press {
            return;
        }
        match self.input_mode {
            InputMode::FoodInput => self.handle_food_input(key, conn),
            InputMode::Normal => {
                self.flash = None;
                match self.view {
                    View::Dashboard => self.handle_dashboard_key(key, conn),
                    View::Stats => self.handle_stats_key(key),
                    View::Help => self.handle_help_key(key),
                }
            }
        }
    }

    fn handle_dashboard_key(&mut self, key: KeyEvent, conn: &Connection) {
        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('?') => {
                self.view = View::Help;
            }
            KeyCode::Char('s') => {
                self.view = View::Stats;
            }
            KeyCode::Char('r') => {
                self.input_mode = InputMode::FoodInput;
                self.input_buffer.clear();
                self.input_error = None;
            }
            KeyCode::Char('a') => {
                let cleared = self.tracker.achievements.acknowledge_all();
                if cleared > 0 {
                    self.persist(conn);
                }
            }
            KeyCode::Char('t') => {
                let total = self.tracker.resist_temptation();
                self.persist(conn);
                self.flash = Some(format!("Temptation resisted. {} so far, well done", total));
            }
            _ => {}
        }
    }

    fn handle_stats_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('s')) {
            self.view = View::Dashboard;
        }
    }

    fn handle_help_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('?')) {
            self.view = View::Dashboard;
        }
    }

    fn handle_food_input(&mut self, key: KeyEvent, conn: &Connection) {
        match key.code {
            KeyCode::Esc => {
                self.input_mode = InputMode::Normal;
                self.input_buffer.clear();
                self.input_error = None;
            }
            KeyCode::Enter => {
                let foods: Vec<String> = self
                    .input_buffer
                    .split(',')
                    .map(|f| f.trim().to_string())
                    .filter(|f| !f.is_empty())
                    .collect();
                if foods.is_empty() {
                    self.input_error = Some("Type at least one food (e.g. salmon, rice)".to_string());
                    return;
                }
                let outcome = self.tracker.record_meal(&foods, &Local::now());
                self.persist(conn);
                self.flash = Some(summarize(&outcome));
                self.input_mode = InputMode::Normal;
                self.input_buffer.clear();
                self.input_error = None;
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
                self.input_error = None;
            }
            KeyCode::Char(c) => {
                self.input_buffer.push(c);
                self.input_error = None;
            }
            _ => {}
        }
    }

    fn persist(&mut self, conn: &Connection) {
        if let Err(e) = self.tracker.save(conn) {
            log::error!("saving progress failed: {:#}", e);
            self.flash = Some(format!("Could not save: {}", e));
        }
    }

    fn new_unlocks(&self) -> Vec<&'static Achievement> {
        self.tracker
            .achievements
            .new_ones()
            .filter_map(|u| find_achievement(&u.achievement_id))
            .collect()
    }

    pub fn draw(&self, frame: &mut Frame) {
        match self.view {
            View::Dashboard => self.draw_dashboard(frame),
            View::Stats => self.draw_stats(frame),
            View::Help => {
                self.draw_dashboard(frame);
                self.draw_help_overlay(frame);
            }
        }

        if self.input_mode == InputMode::FoodInput {
            self.draw_food_input(frame);
        }
    }

    fn draw_dashboard(&self, frame: &mut Frame) {
        let area = frame.area();

        // Clear background
        frame.render_widget(Block::default().style(theme::base()), area);

        let outer_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // header
                Constraint::Min(0),    // body
                Constraint::Length(1), // status bar
            ])
            .split(area);

        header::render(
            frame,
            outer_chunks[0],
            &self.config.profile.name,
            &self.tracker.streak.state,
            self.today,
        );
        statusbar::render(frame, outer_chunks[2], self.flash.as_deref());

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(outer_chunks[1]);

        // Left column: streak + badges
        let left_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(10), Constraint::Min(0)])
            .split(columns[0]);

        streak::render(
            frame,
            left_chunks[0],
            &self.tracker.streak.state,
            self.today,
            self.tracker.thresholds.cheat_day,
        );
        badges::render(frame, left_chunks[1], &self.tracker.badges);

        // Right column: achievements + coupons
        let right_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(10), Constraint::Length(8)])
            .split(columns[1]);

        let recommended = self
            .tracker
            .recommendations(self.config.display.recommend_limit);
        achievements::render(
            frame,
            right_chunks[0],
            &recommended,
            &self.new_unlocks(),
            self.tracker.achievements.count(),
        );
        coupons::render(
            frame,
            right_chunks[1],
            &self.tracker.coupons,
            &self.tracker.thresholds,
            self.tracker.streak.state.current_streak,
        );
    }

    fn draw_stats(&self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(Block::default().style(theme::base()), area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);

        let title = Paragraph::new(Line::from(vec![
            Span::styled("  Stats  ", theme::leaf().add_modifier(Modifier::BOLD)),
            Span::styled("  [Esc] back", theme::dim()),
        ]));
        frame.render_widget(title, chunks[0]);

        let s = &self.tracker.streak.state;
        let c = &self.tracker.counters;
        let mut lines = vec![
            Line::from(""),
            stat_line("Streak (current):  ", format_days(s.current_streak), theme::green().add_modifier(Modifier::BOLD)),
            stat_line("Streak (best):     ", format_days(s.longest_streak), theme::green()),
            stat_line("Days recorded:     ", s.total_days.to_string(), theme::green()),
            Line::from(""),
            stat_line("Meals logged:      ", c.meals_logged.to_string(), theme::amber()),
            stat_line("Resisted:          ", c.temptations_resisted.to_string(), theme::amber()),
            stat_line("Badges:            ", self.tracker.badges.distinct().to_string(), theme::amber()),
            stat_line("Achievements:      ", self.tracker.achievements.count().to_string(), theme::amber()),
            Line::from(""),
            Line::from(Span::styled("  All achievements", theme::leaf())),
            Line::from(""),
        ];

        let counters = self.tracker.counters();
        let unlocked = self.tracker.achievements.unlocked_ids();
        for a in crate::catalog::ACHIEVEMENTS {
            let ratio = self.tracker.engine().progress(a, &counters);
            let style = if unlocked.contains(a.id) {
                theme::green()
            } else {
                theme::dim()
            };
            lines.push(Line::from(vec![
                Span::styled(format!("  {}", pad_to_width(a.name, 22)), style),
                Span::styled(progress_bar(ratio, 12), style),
                Span::styled(format!(" {:>4}", format_percent(ratio)), theme::dim()),
            ]));
        }

        frame.render_widget(Paragraph::new(lines), chunks[1]);
    }

    fn draw_help_overlay(&self, frame: &mut Frame) {
        let area = frame.area();

        let popup_area = Rect {
            x: area.width / 4,
            y: area.height / 4,
            width: area.width / 2,
            height: area.height / 2,
        };

        frame.render_widget(Clear, popup_area);

        let bindings = [
            ("  [r]    ", "Record a meal"),
            ("  [t]    ", "Resisted a temptation"),
            ("  [a]    ", "Mark new achievements as seen"),
            ("  [s]    ", "Stats view"),
            ("  [?]    ", "Toggle help"),
            ("  [Esc]  ", "Quit"),
        ];
        let mut help_text = vec![
            Line::from(Span::styled(
                "  Keybindings",
                theme::leaf().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];
        for (key, label) in bindings {
            help_text.push(Line::from(vec![
                Span::styled(key, theme::leaf()),
                Span::styled(label, theme::dim()),
            ]));
        }

        let block = Block::default()
            .title(Span::styled(" Help ", theme::leaf()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::leaf())
            .style(theme::surface());

        frame.render_widget(Paragraph::new(help_text).block(block), popup_area);
    }

    fn draw_food_input(&self, frame: &mut Frame) {
        let area = frame.area();
        let height = if self.input_error.is_some() { 7 } else { 5 };

        let popup_area = Rect {
            x: area.width / 6,
            y: (area.height / 2).saturating_sub(3),
            width: area.width * 2 / 3,
            height,
        };

        frame.render_widget(Clear, popup_area);

        let mut text = vec![
            Line::from(""),
            Line::from(vec![
                Span::styled("  Ate: ", theme::dim()),
                Span::styled(self.input_buffer.as_str(), theme::leaf().add_modifier(Modifier::BOLD)),
                Span::styled("█", theme::amber()), // block cursor
            ]),
            Line::from(""),
            Line::from(Span::styled(
                "  Comma-separate foods, then [Enter]  ·  [Esc] cancel",
                theme::dim(),
            )),
        ];

        if let Some(err) = &self.input_error {
            text.push(Line::from(""));
            text.push(Line::from(Span::styled(format!("  ✗ {}", err), theme::red())));
        }

        let border_style = if self.input_error.is_some() {
            theme::red()
        } else {
            theme::amber()
        };

        let block = Block::default()
            .title(Span::styled(" Record Meal ", theme::leaf()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .style(theme::surface());

        frame.render_widget(Paragraph::new(text).block(block), popup_area);
    }
}

fn stat_line(label: &'static str, value: String, style: ratatui::style::Style) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {}", label), theme::dim()),
        Span::styled(value, style),
    ])
}

/// One-line summary of a recorded meal for the status bar.
fn summarize(outcome: &MealOutcome) -> String {
    let mut parts = Vec::new();
    if outcome.new_day {
        parts.push("Day recorded".to_string());
    } else {
        parts.push("Meal added".to_string());
    }
    let new_badges: Vec<_> = outcome
        .badges
        .iter()
        .filter(|(_, count)| *count == 1)
        .map(|(b, _)| format!("{} {}", b.emoji, b.name))
        .collect();
    if !new_badges.is_empty() {
        parts.push(format!("new badge: {}", new_badges.join(", ")));
    }
    for a in &outcome.unlocked {
        parts.push(format!("★ {}", a.name));
    }
    for c in &outcome.coupons {
        parts.push(format!("🎟 {}", c.coupon_type.display_name()));
    }
    parts.join("  ·  ")
}

/// Run the TUI event loop.
pub fn run(conn: Connection, config: AppConfig) -> Result<()> {
    let mut app = App::new(config);
    app.load(&conn);

    let mut terminal = ratatui::init();
    let events = EventHandler::new(Duration::from_secs(1));

    let result = loop {
        if let Err(e) = terminal.draw(|frame| app.draw(frame)) {
            break Err(e.into());
        }

        match events.next() {
            Ok(Event::Key(key)) => {
                app.handle_key(key, &conn);
                if app.should_quit {
                    break Ok(());
                }
            }
            Ok(Event::Resize) => {}
            Ok(Event::Tick) => app.tick(&conn),
            Err(e) => break Err(e.into()),
        }
    };

    ratatui::restore();
    result
}
