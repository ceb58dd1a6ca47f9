use ratatui::style::{Color, Modifier, Style};

/// The boxes of the planner, each with its own accent colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Tasks,
    Focus,
    BrainDump,
    Buddy,
    AddToCalendar,
    Calendar,
}

/// Root background/text colours
pub fn root_style(dark: bool) -> Style {
    if dark {
        Style::default().bg(Color::Black).fg(Color::Gray)
    } else {
        Style::default().bg(Color::White).fg(Color::Black)
    }
}

/// App title style
pub fn title_style(dark: bool) -> Style {
    let fg = if dark { Color::White } else { Color::Black };
    Style::default().fg(fg).add_modifier(Modifier::BOLD)
}

/// Accent colour of a panel
pub fn panel_color(panel: Panel, dark: bool) -> Color {
    match (panel, dark) {
        (Panel::Tasks, false) => Color::Blue,
        (Panel::Tasks, true) => Color::LightBlue,
        (Panel::Focus, false) => Color::Rgb(180, 140, 0),
        (Panel::Focus, true) => Color::LightYellow,
        (Panel::BrainDump, false) => Color::Magenta,
        (Panel::BrainDump, true) => Color::LightMagenta,
        (Panel::Buddy, _) => Color::Cyan,
        (Panel::AddToCalendar, false) => Color::Green,
        (Panel::AddToCalendar, true) => Color::LightGreen,
        (Panel::Calendar, false) => Color::Red,
        (Panel::Calendar, true) => Color::LightRed,
    }
}

/// Border style for a panel; bold when it owns the cursor
pub fn border_style(panel: Panel, dark: bool, active: bool) -> Style {
    let style = Style::default().fg(panel_color(panel, dark));
    if active {
        style.add_modifier(Modifier::BOLD)
    } else {
        style
    }
}

/// Pane title style
pub fn pane_title_style(panel: Panel, dark: bool) -> Style {
    Style::default()
        .fg(panel_color(panel, dark))
        .add_modifier(Modifier::BOLD)
}

/// Selected cell highlight style
pub fn selected_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::LightCyan)
        .add_modifier(Modifier::BOLD)
}

/// Cell being edited
pub fn editing_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::LightYellow)
}

/// Placeholder text in empty inputs
pub fn placeholder_style() -> Style {
    Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC)
}

/// Keybinding hint style
pub fn hint_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Active tab button
pub fn tab_highlight_style() -> Style {
    Style::default()
        .fg(Color::White)
        .bg(Color::Blue)
        .add_modifier(Modifier::BOLD)
}

/// Theme toggle button
pub fn button_style() -> Style {
    Style::default().fg(Color::Black).bg(Color::Gray)
}

pub fn priority_style(priority: crate::domain::Priority) -> Style {
    use crate::domain::Priority;
    match priority {
        Priority::Low => Style::default().fg(Color::Green),
        Priority::Medium => Style::default().fg(Color::Yellow),
        Priority::High => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    }
}

pub fn status_style(status: crate::domain::Status) -> Style {
    use crate::domain::Status;
    match status {
        Status::ToDo => Style::default(),
        Status::InProgress => Style::default().fg(Color::Magenta),
        Status::Done => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::CROSSED_OUT),
    }
}

/// Date picker day that has calendar entries
pub fn marked_day_style(dark: bool) -> Style {
    Style::default()
        .fg(panel_color(Panel::Calendar, dark))
        .add_modifier(Modifier::BOLD)
}

/// Date picker: the selected day
pub fn selected_day_style() -> Style {
    Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD)
}

/// Date picker: today
pub fn today_style() -> Style {
    Style::default().add_modifier(Modifier::UNDERLINED)
}
