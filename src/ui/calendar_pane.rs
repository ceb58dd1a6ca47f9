use crate::app::AppState;
use crate::domain::calendar::{days_in_month, first_of_month, month_name};
use crate::domain::UiMode;
use crate::ui::styles::{
    border_style, marked_day_style, pane_title_style, placeholder_style, selected_day_style, today_style,
    Panel,
};
use crate::ui::text_box::text_box_lines;
use chrono::{Datelike, NaiveDate};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Marker drawn after a day number that has entries
pub const DAY_MARKER: &str = "•";

const INPUT_PLACEHOLDER: &str = "e.g. Meeting with Sam";

/// Day-of-week header for the picker
fn weekday_header(week_starts_monday: bool) -> &'static str {
    if week_starts_monday {
        "Mo  Tu  We  Th  Fr  Sa  Su"
    } else {
        "Su  Mo  Tu  We  Th  Fr  Sa"
    }
}

/// Month grid around the selected date. Each day cell is 4 columns wide:
/// two for the number, one for the marker, one gap.
pub fn month_grid(app: &AppState) -> Vec<Line<'static>> {
    let selected = app.selected_date;
    let first = first_of_month(selected);
    let total_days = days_in_month(selected);
    let offset = if app.week_starts_monday {
        first.weekday().num_days_from_monday()
    } else {
        first.weekday().num_days_from_sunday()
    } as usize;

    let mut lines = vec![
        Line::from(Span::styled(
            format!("{} {}", month_name(first.month()), first.year()),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(weekday_header(app.week_starts_monday)),
    ];

    let mut spans: Vec<Span<'static>> = vec![Span::raw("    "); offset];
    let mut column = offset;
    for day in 1..=total_days {
        let Some(date) = NaiveDate::from_ymd_opt(first.year(), first.month(), day) else {
            continue;
        };
        spans.push(day_span(app, date));
        spans.push(Span::raw(" "));

        column += 1;
        if column == 7 {
            lines.push(Line::from(std::mem::take(&mut spans)));
            column = 0;
        }
    }
    if !spans.is_empty() {
        lines.push(Line::from(spans));
    }
    lines
}

/// Styled day number plus marker for one cell (3 columns)
fn day_span(app: &AppState, date: NaiveDate) -> Span<'static> {
    let marked = app.calendar.has_entries_on(date);
    let text = format!(
        "{:>2}{}",
        date.day(),
        if marked { DAY_MARKER } else { " " }
    );

    let mut style = if marked {
        marked_day_style(app.dark_mode)
    } else {
        Style::default()
    };
    if date == app.today {
        style = style.patch(today_style());
    }
    if date == app.selected_date {
        style = style.patch(selected_day_style());
    }
    Span::styled(text, style)
}

/// Render the date picker
pub fn render_date_picker(f: &mut Frame, app: &AppState, area: Rect) {
    let dark = app.dark_mode;
    let paragraph = Paragraph::new(month_grid(app))
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style(Panel::Calendar, dark, !app.ui_mode.is_editing()))
                .title(Span::styled(
                    " 📅 Date-Based Calendar ",
                    pane_title_style(Panel::Calendar, dark),
                )),
        );
    f.render_widget(paragraph, area);
}

/// Title of the day list, e.g. "Sat Jun 01 2024"
pub fn day_title(date: NaiveDate) -> String {
    date.format("%a %b %d %Y").to_string()
}

/// Render the entries scheduled on the selected date
pub fn render_day_list(f: &mut Frame, app: &AppState, area: Rect) {
    let dark = app.dark_mode;

    let mut lines: Vec<Line> = app
        .entries_on_selected()
        .map(|entry| Line::raw(format!("• {}", entry.label)))
        .collect();
    if lines.is_empty() {
        lines.push(Line::from(Span::styled("No tasks scheduled.", placeholder_style())));
    }

    let title = format!(" 📝 Tasks on {} ", day_title(app.selected_date));
    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style(Panel::Calendar, dark, false))
                .title(Span::styled(title, pane_title_style(Panel::Calendar, dark))),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

/// Render the add-to-calendar input box
pub fn render_calendar_input(f: &mut Frame, app: &AppState, area: Rect) {
    let dark = app.dark_mode;
    let is_editing = app.ui_mode == UiMode::EditingCalendarInput;

    let mut line = Line::from(Span::raw("> "));
    if let Some(first) = text_box_lines(&app.calendar_input, is_editing, INPUT_PLACEHOLDER, Style::default())
        .into_iter()
        .next()
    {
        line.spans.extend(first.spans);
    }
    line.spans.push(Span::styled(
        "   [Enter] Add",
        pane_title_style(Panel::AddToCalendar, dark),
    ));

    let mut title = format!(" 🗓️ Add to Calendar ({} scheduled) ", app.calendar.len());
    if is_editing {
        title.push_str("- [Editing] ");
    }

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style(Panel::AddToCalendar, dark, is_editing))
            .title(Span::styled(title, pane_title_style(Panel::AddToCalendar, dark))),
    );
    f.render_widget(paragraph, area);
}
