use crate::app::AppState;
use crate::domain::{PlannerPane, Tab, UiMode};
use crate::ui::styles::hint_style;
use ratatui::{layout::Rect, text::Line, widgets::Paragraph, Frame};

/// Hint text for the current tab and mode
pub fn hints(app: &AppState) -> &'static str {
    match app.ui_mode {
        UiMode::EditingTaskField => " type to edit   ←/→ move   Enter/Esc done",
        UiMode::EditingFocus | UiMode::EditingBrainDump => {
            " type to edit   Enter new line   Alt+b/f word   Esc done"
        }
        UiMode::EditingCalendarInput => " type a label   Enter add   Esc done",
        UiMode::Normal => match (app.active_tab, app.planner_pane) {
            (Tab::Planner, PlannerPane::Tasks) => {
                " ←↑↓→ select   Enter edit/cycle   Space cycle   Tab next box   1/2 tabs   t theme   q quit"
            }
            (Tab::Planner, PlannerPane::Focus) => {
                " Space check   Enter edit   Tab next box   1/2 tabs   t theme   q quit"
            }
            (Tab::Planner, PlannerPane::BrainDump) => {
                " Enter edit   Tab next box   1/2 tabs   t theme   q quit"
            }
            (Tab::Calendar, _) => {
                " ←→ day   ↑↓ week   [ ] month   g today   a add   1/2 tabs   t theme   q quit"
            }
        },
    }
}

/// Render the keybindings hint bar
pub fn render_keybindings(f: &mut Frame, app: &AppState, area: Rect) {
    let paragraph = Paragraph::new(Line::raw(hints(app))).style(hint_style());
    f.render_widget(paragraph, area);
}
