pub mod buddy_pane;
pub mod calendar_pane;
pub mod focus_pane;
pub mod header;
pub mod keybindings;
pub mod layout;
pub mod styles;
pub mod task_table;
pub mod text_box;

use crate::app::AppState;
use crate::domain::Tab;
use buddy_pane::render_buddy_pane;
use calendar_pane::{render_calendar_input, render_date_picker, render_day_list};
use focus_pane::{render_brain_dump_pane, render_focus_pane};
use header::{render_header, render_tabs};
use keybindings::render_keybindings;
use layout::{create_calendar_layout, create_layout, create_planner_layout};
use ratatui::{widgets::Block, Frame};
use styles::root_style;
use task_table::render_task_table;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();

    // Theme background
    f.render_widget(Block::default().style(root_style(app.dark_mode)), size);

    let layout = create_layout(size);
    render_header(f, app, layout.header_area);
    render_tabs(f, app, layout.tabs_area);
    render_keybindings(f, app, layout.keybindings_area);

    match app.active_tab {
        Tab::Planner => {
            let planner = create_planner_layout(layout.content_area);
            render_task_table(f, app, planner.tasks_area);
            render_focus_pane(f, app, planner.focus_area);
            render_brain_dump_pane(f, app, planner.brain_dump_area);
            render_buddy_pane(f, app, planner.buddy_area);
        }
        Tab::Calendar => {
            let calendar = create_calendar_layout(layout.content_area);
            render_calendar_input(f, app, calendar.input_area);
            render_date_picker(f, app, calendar.picker_area);
            render_day_list(f, app, calendar.day_list_area);
        }
    }
}
