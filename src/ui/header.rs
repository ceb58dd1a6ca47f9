use crate::app::AppState;
use crate::domain::Tab;
use crate::ui::styles::{button_style, hint_style, tab_highlight_style, title_style};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Tabs},
    Frame,
};

pub const APP_TITLE: &str = "My Focus Planner";

/// Label of the theme button: names the mode it switches to
pub fn theme_button_label(dark: bool) -> &'static str {
    if dark {
        " [t] Light Mode "
    } else {
        " [t] Dark Mode "
    }
}

/// Render the title row with the theme toggle on the right
pub fn render_header(f: &mut Frame, app: &AppState, area: Rect) {
    let button = theme_button_label(app.dark_mode);
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(button.chars().count() as u16)])
        .split(area);

    let title = Paragraph::new(Line::from(Span::styled(APP_TITLE, title_style(app.dark_mode))))
        .alignment(Alignment::Center);
    f.render_widget(title, chunks[0]);
    f.render_widget(Paragraph::new(Span::styled(button, button_style())), chunks[1]);
}

/// Render the Planner / Calendar tab selector
pub fn render_tabs(f: &mut Frame, app: &AppState, area: Rect) {
    let titles: Vec<Line> = Tab::all()
        .iter()
        .enumerate()
        .map(|(i, tab)| Line::from(format!(" [{}] {} ", i + 1, tab.label())))
        .collect();
    let selected = Tab::all()
        .iter()
        .position(|t| *t == app.active_tab)
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(hint_style())
        .highlight_style(tab_highlight_style())
        .divider(" ");
    f.render_widget(tabs, area);
}
