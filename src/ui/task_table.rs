use crate::app::AppState;
use crate::domain::{PlannerPane, Task, TaskField, Tab, UiMode};
use crate::ui::styles::{
    border_style, editing_style, pane_title_style, placeholder_style, priority_style, selected_style,
    status_style, Panel,
};
use crate::ui::text_box::CURSOR;
use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

/// Column widths: task and notes take the slack
const WIDTHS: [Constraint; 5] = [
    Constraint::Percentage(30),
    Constraint::Length(7),
    Constraint::Length(8),
    Constraint::Percentage(40),
    Constraint::Length(12),
];

/// Text shown for an empty cell
fn placeholder(field: TaskField) -> &'static str {
    match field {
        TaskField::Task => "Task",
        TaskField::Time => "--:--",
        TaskField::Notes => "Notes",
        _ => "",
    }
}

/// Build the display cell for one field of one task
fn field_cell(app: &AppState, row: usize, task: &Task, field: TaskField) -> Cell<'static> {
    let is_cursor = app.active_tab == Tab::Planner
        && app.planner_pane == PlannerPane::Tasks
        && app.selected_row == row
        && app.selected_field == field;
    let is_editing = is_cursor && app.ui_mode == UiMode::EditingTaskField;

    if is_editing {
        let (before, after) = app.cell_editor.split_at_cursor();
        return Cell::from(format!("{}{}{}", before, CURSOR, after)).style(editing_style());
    }

    let value = field.value_of(task);
    let cell = if value.is_empty() {
        Cell::from(Span::styled(placeholder(field), placeholder_style()))
    } else {
        let style = match field {
            TaskField::Priority => priority_style(task.priority),
            TaskField::Status => status_style(task.status),
            _ => Style::default(),
        };
        let text = if field.is_text() {
            value.to_string()
        } else {
            // Selectors render like a dropdown
            format!("{} ▾", value)
        };
        Cell::from(Span::styled(text, style))
    };

    if is_cursor {
        cell.style(selected_style())
    } else {
        cell
    }
}

/// Render the "Task List" table
pub fn render_task_table(f: &mut Frame, app: &AppState, area: Rect) {
    let dark = app.dark_mode;
    let active = app.planner_pane == PlannerPane::Tasks;

    let header = Row::new(
        TaskField::all()
            .iter()
            .map(|field| Cell::from(field.header()))
            .collect::<Vec<_>>(),
    )
    .style(Style::default().add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = app
        .tasks
        .iter()
        .enumerate()
        .map(|(i, task)| {
            Row::new(
                TaskField::all()
                    .iter()
                    .map(|field| field_cell(app, i, task, *field))
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    let table = Table::new(rows, WIDTHS)
        .header(header)
        .column_spacing(1)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style(Panel::Tasks, dark, active))
                .title(Span::styled(" 🗒️ Task List ", pane_title_style(Panel::Tasks, dark))),
        );

    f.render_widget(table, area);
}
