use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Height of the task table: header, five rows, borders
const TASK_TABLE_HEIGHT: u16 = 9;

/// Outer frame shared by both tabs
pub struct MainLayout {
    pub header_area: Rect,
    pub tabs_area: Rect,
    pub content_area: Rect,
    pub keybindings_area: Rect,
}

/// Planner tab areas
pub struct PlannerLayout {
    pub tasks_area: Rect,
    pub focus_area: Rect,
    pub brain_dump_area: Rect,
    pub buddy_area: Rect,
}

/// Calendar tab areas
pub struct CalendarLayout {
    pub input_area: Rect,
    pub picker_area: Rect,
    pub day_list_area: Rect,
}

/// Create the main layout
/// - Header: title and theme button (1 row)
/// - Tabs (1 row)
/// - Content
/// - Bottom bar: keybindings (1 row)
pub fn create_layout(area: Rect) -> MainLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(1), // Tabs
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Keybindings bar
        ])
        .split(area);

    MainLayout {
        header_area: chunks[0],
        tabs_area: chunks[1],
        content_area: chunks[2],
        keybindings_area: chunks[3],
    }
}

/// Planner: task table on top, then Focus (40%) | Brain Dump (40%) | Buddy (20%)
pub fn create_planner_layout(area: Rect) -> PlannerLayout {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(TASK_TABLE_HEIGHT), Constraint::Min(0)])
        .split(area);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(40),
            Constraint::Percentage(20),
        ])
        .split(vertical[1]);

    PlannerLayout {
        tasks_area: vertical[0],
        focus_area: bottom[0],
        brain_dump_area: bottom[1],
        buddy_area: bottom[2],
    }
}

/// Calendar: input box on top, then date picker | day list
pub fn create_calendar_layout(area: Rect) -> CalendarLayout {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(vertical[1]);

    CalendarLayout {
        input_area: vertical[0],
        picker_area: bottom[0],
        day_list_area: bottom[1],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout() {
        let area = Rect::new(0, 0, 100, 40);
        let layout = create_layout(area);

        assert_eq!(layout.header_area.height, 1);
        assert_eq!(layout.tabs_area.height, 1);
        assert_eq!(layout.keybindings_area.height, 1);
        assert_eq!(layout.content_area.height, 37);
    }

    #[test]
    fn test_create_planner_layout() {
        let area = Rect::new(0, 0, 100, 30);
        let layout = create_planner_layout(area);

        assert_eq!(layout.tasks_area.height, TASK_TABLE_HEIGHT);
        assert_eq!(layout.focus_area.height, 21);
        assert_eq!(layout.focus_area.width, 40);
        assert_eq!(layout.buddy_area.width, 20);
        assert_eq!(layout.focus_area.y, layout.brain_dump_area.y);
    }

    #[test]
    fn test_create_calendar_layout() {
        let area = Rect::new(0, 0, 100, 30);
        let layout = create_calendar_layout(area);

        assert_eq!(layout.input_area.height, 3);
        assert_eq!(layout.picker_area.width, 50);
        assert_eq!(layout.day_list_area.x, 50);
    }
}
