pub mod screen;
pub mod theme;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs, Widget},
};

use crate::app::{App, Tab};
use crate::ui::{screen::current_screen, theme::Theme};

pub const APP_TITLE: &str = " Tock Clock Suite ";

const HORIZONTAL_MARGIN: u16 = 1;

/// Key hints for the footer of each tab
pub fn legend(tab: Tab) -> &'static str {
    match tab {
        Tab::Clock => "(space) pause/resume  (h/s/u/d/o) settings  (c)opy  (tab) switch  (q)uit",
        Tab::Stopwatch => "(space) start/pause  (r)eset  (tab) switch  (q)uit",
        Tab::Timer => "(0-9) minutes  (enter) set  (space) start/pause  (r)eset  (tab) switch  (esc) quit",
    }
}

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = Theme::new(self.clock.options().dark_mode);

        Block::default().style(theme.base()).render(area, buf);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(HORIZONTAL_MARGIN)
            .constraints([
                Constraint::Length(3), // tabs
                Constraint::Min(0),    // body
                Constraint::Length(1), // legend
            ])
            .split(area);

        let titles: Vec<Line> = Tab::ALL
            .iter()
            .map(|tab| Line::from(format!(" {tab} ")))
            .collect();

        let mut title = vec![Span::styled(APP_TITLE, theme.headline())];
        if self.clock.options().always_on_top {
            title.push(Span::styled("[pinned] ", theme.muted()));
        }

        Tabs::new(titles)
            .select(self.tab.index())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme.border())
                    .title(Line::from(title)),
            )
            .style(theme.muted())
            .highlight_style(theme.selected_tab())
            .render(chunks[0], buf);

        current_screen(self.tab).render(self, &theme, chunks[1], buf);

        // the clock face shows its own status line
        let footer = match self.transient_status() {
            Some(status) if self.tab != Tab::Clock => Span::styled(status, theme.accent()),
            _ => Span::styled(
                legend(self.tab),
                theme.muted().add_modifier(Modifier::ITALIC),
            ),
        };
        Paragraph::new(footer)
            .alignment(Alignment::Center)
            .render(chunks[2], buf);
    }
}
