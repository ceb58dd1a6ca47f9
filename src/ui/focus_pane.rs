use crate::app::AppState;
use crate::domain::{PlannerPane, UiMode};
use crate::ui::styles::{border_style, pane_title_style, Panel};
use crate::ui::text_box::text_box_lines;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const FOCUS_PLACEHOLDER: &str = "What's your main goal today?";
const BRAIN_DUMP_PLACEHOLDER: &str = "Get it all out of your head...";

/// Checkbox glyph for the focus task
fn checkbox(checked: bool) -> &'static str {
    if checked {
        "[x]"
    } else {
        "[ ]"
    }
}

/// Render the focus task box: checkbox on the left, goal text on the right
pub fn render_focus_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let dark = app.dark_mode;
    let active = app.planner_pane == PlannerPane::Focus;
    let is_editing = app.ui_mode == UiMode::EditingFocus;

    let mut title = String::from(" 🎯 Focus Task ");
    if let Some(at) = app.focus_reset_deadline() {
        title.push_str(&format!("(clears {}) ", at.format("%a %H:%M")));
    }
    if is_editing {
        title.push_str("- [Editing] ");
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(Panel::Focus, dark, active))
        .title(Span::styled(title, pane_title_style(Panel::Focus, dark)));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(4), Constraint::Min(0)])
        .split(inner);

    let check_style = if app.focus.checked {
        pane_title_style(Panel::Focus, dark)
    } else {
        Style::default()
    };
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(checkbox(app.focus.checked), check_style))),
        columns[0],
    );

    // Checked goals read as done
    let text_style = if app.focus.checked && !is_editing {
        Style::default().add_modifier(Modifier::CROSSED_OUT)
    } else {
        Style::default()
    };
    let lines = text_box_lines(&app.focus.text, is_editing, FOCUS_PLACEHOLDER, text_style);
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), columns[1]);
}

/// Render the brain dump box
pub fn render_brain_dump_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let dark = app.dark_mode;
    let active = app.planner_pane == PlannerPane::BrainDump;
    let is_editing = app.ui_mode == UiMode::EditingBrainDump;

    let title = if is_editing {
        " 🧠 Brain Dump - [Editing] "
    } else {
        " 🧠 Brain Dump "
    };

    let lines = text_box_lines(&app.brain_dump, is_editing, BRAIN_DUMP_PLACEHOLDER, Style::default());
    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style(Panel::BrainDump, dark, active))
                .title(Span::styled(title, pane_title_style(Panel::BrainDump, dark))),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkbox() {
        assert_eq!(checkbox(true), "[x]");
        assert_eq!(checkbox(false), "[ ]");
    }
}
