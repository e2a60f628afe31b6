use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Widget},
};

use crate::app::{App, Tab};
use crate::clock::ClockOption;
use crate::ui::theme::Theme;

const SIDEBAR_WIDTH: u16 = 30;

/// A UI Screen boundary: responsible for rendering one tab's body
pub trait Screen {
    fn render(&self, app: &App, theme: &Theme, area: Rect, buf: &mut Buffer);
}

/// Clock tab - settings sidebar plus the clock face
pub struct ClockScreen;

impl Screen for ClockScreen {
    fn render(&self, app: &App, theme: &Theme, area: Rect, buf: &mut Buffer) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
            .split(area);

        let options = app.clock.options();
        let mut lines = vec![Line::from(Span::styled("Settings", theme.headline())), Line::from("")];
        lines.extend(
            ClockOption::ALL
                .iter()
                .map(|&opt| option_line(opt, options.get(opt), theme)),
        );

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::RIGHT)
                    .border_style(theme.border())
                    .padding(Padding::uniform(1)),
            )
            .style(theme.sidebar())
            .render(columns[0], buf);

        let status = app.clock_status();
        let face = vec![
            Line::from(Span::styled(app.clock_text.time.clone(), theme.accent())),
            Line::from(""),
            Line::from(Span::styled(app.clock_text.date.clone(), theme.muted())),
            Line::from(""),
            Line::from(Span::styled(
                status,
                theme.muted().add_modifier(Modifier::ITALIC),
            )),
        ];
        render_centered(face, theme, columns[1], buf);
    }
}

/// Stopwatch tab - elapsed reading and the start/pause hint
pub struct StopwatchScreen;

impl Screen for StopwatchScreen {
    fn render(&self, app: &App, theme: &Theme, area: Rect, buf: &mut Buffer) {
        let action = if app.stopwatch.is_running() {
            "Pause"
        } else {
            "Start"
        };
        let lines = vec![
            Line::from(Span::styled(app.stopwatch_text.clone(), theme.accent())),
            Line::from(""),
            Line::from(Span::styled(
                format!("(space) {action}   (r) Reset"),
                theme.muted(),
            )),
        ];
        render_centered(lines, theme, area, buf);
    }
}

/// Timer tab - countdown, minutes entry and feedback line
pub struct TimerScreen;

impl Screen for TimerScreen {
    fn render(&self, app: &App, theme: &Theme, area: Rect, buf: &mut Buffer) {
        let action = if app.countdown.is_running() {
            "Pause"
        } else {
            "Start"
        };
        let lines = vec![
            Line::from(Span::styled(app.countdown.display(), theme.accent())),
            Line::from(""),
            Line::from(vec![
                Span::styled("Minutes: ", theme.muted()),
                Span::styled(
                    format!("{}_", app.minutes_input),
                    theme.headline().add_modifier(Modifier::UNDERLINED),
                ),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                format!("(enter) Set   (space) {action}   (r) Reset"),
                theme.muted(),
            )),
            Line::from(""),
            Line::from(Span::styled(app.timer_info.clone(), theme.headline())),
        ];
        render_centered(lines, theme, area, buf);
    }
}

/// Pure presenter for one settings row, e.g. `[x] 24-hour (h)`
pub fn option_line(option: ClockOption, enabled: bool, theme: &Theme) -> Line<'static> {
    let mark = if enabled { "[x]" } else { "[ ]" };
    let mark_style = if enabled { theme.accent() } else { theme.muted() };
    Line::from(vec![
        Span::styled(mark, mark_style),
        Span::raw(format!(" {option} ")),
        Span::styled(format!("({})", option_key(option)), theme.muted()),
    ])
}

pub fn option_key(option: ClockOption) -> char {
    match option {
        ClockOption::Use24Hour => 'h',
        ClockOption::ShowSeconds => 's',
        ClockOption::UseUtc => 'u',
        ClockOption::AlwaysOnTop => 'o',
        ClockOption::DarkMode => 'd',
    }
}

/// Vertically center a block of lines inside `area`
fn render_centered(lines: Vec<Line<'_>>, theme: &Theme, area: Rect, buf: &mut Buffer) {
    let height = lines.len() as u16;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Block::default().style(theme.panel()).render(area, buf);
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(theme.panel())
        .render(chunks[1], buf);
}

/// Helper to construct the appropriate screen for the current tab
pub fn current_screen(tab: Tab) -> Box<dyn Screen> {
    match tab {
        Tab::Clock => Box::new(ClockScreen),
        Tab::Stopwatch => Box::new(StopwatchScreen),
        Tab::Timer => Box::new(TimerScreen),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_option_line() {
        let theme = Theme::DARK;
        assert_eq!(
            line_text(&option_line(ClockOption::Use24Hour, true, &theme)),
            "[x] 24-hour (h)"
        );
        assert_eq!(
            line_text(&option_line(ClockOption::UseUtc, false, &theme)),
            "[ ] UTC (u)"
        );
    }

    #[test]
    fn test_option_keys_are_unique() {
        let mut keys: Vec<char> = ClockOption::ALL.iter().map(|&o| option_key(o)).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), ClockOption::ALL.len());
    }
}
