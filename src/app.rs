use crate::config::{default_intro_duration, Config};
use crate::domain::{
    CalendarBook, CalendarEntry, FocusTask, PlannerPane, Tab, Task, TaskEdit, TaskField, TaskList, UiMode,
};
use crate::domain::calendar::shift_months;
use crate::input::TextBuffer;
use crate::timers::{next_midnight, OneShot};
use chrono::{DateTime, Duration, Local, NaiveDate};
use tracing::{debug, info, warn};

/// Max characters accepted by a time-of-day cell (`HH:MM`)
pub const TIME_FIELD_LEN: usize = 5;

/// Main application state
pub struct AppState {
    pub tasks: TaskList,
    pub calendar: CalendarBook,
    pub focus: FocusTask,
    pub brain_dump: TextBuffer,
    pub calendar_input: TextBuffer,

    pub selected_date: NaiveDate,
    pub today: NaiveDate,
    pub active_tab: Tab,
    pub dark_mode: bool,
    pub show_intro: bool,
    pub week_starts_monday: bool,

    pub ui_mode: UiMode,
    pub planner_pane: PlannerPane,
    pub selected_row: usize,
    pub selected_field: TaskField,
    /// Buffer for the task cell being edited; written through on every change
    pub cell_editor: TextBuffer,

    intro_timer: OneShot<Local>,
    midnight_timer: OneShot<Local>,

    // Animation frame counter for Buddy (increments every tick)
    pub animation_frame: u32,
}

impl AppState {
    pub fn new(config: &Config, now: DateTime<Local>) -> Self {
        let today = now.date_naive();
        let intro_end = now
            .checked_add_signed(config.intro_duration())
            .or_else(|| {
                warn!(intro_secs = config.intro_secs, "intro delay overflows the clock; using default");
                now.checked_add_signed(default_intro_duration())
            })
            .unwrap_or(now);
        Self {
            tasks: TaskList::default(),
            calendar: CalendarBook::default(),
            focus: FocusTask::default(),
            brain_dump: TextBuffer::default(),
            calendar_input: TextBuffer::default(),

            selected_date: today,
            today,
            active_tab: Tab::Planner,
            dark_mode: config.dark_mode,
            show_intro: true,
            week_starts_monday: config.week_starts_monday,

            ui_mode: UiMode::Normal,
            planner_pane: PlannerPane::Tasks,
            selected_row: 0,
            selected_field: TaskField::Task,
            cell_editor: TextBuffer::default(),

            intro_timer: OneShot::armed_at(intro_end),
            midnight_timer: OneShot::default(),

            animation_frame: 0,
        }
    }

    // ---- tabs and theme ----

    pub fn switch_tab(&mut self, tab: Tab) {
        if self.active_tab != tab {
            debug!(tab = tab.label(), "switching tab");
        }
        self.active_tab = tab;
        self.ui_mode = UiMode::Normal;
    }

    pub fn toggle_theme(&mut self) {
        self.dark_mode = !self.dark_mode;
        debug!(dark_mode = self.dark_mode, "theme toggled");
    }

    // ---- task table ----

    /// Replace one field of one task
    pub fn set_task_field(&mut self, index: usize, edit: TaskEdit) -> bool {
        self.tasks.apply(index, edit)
    }

    pub fn move_row_up(&mut self) {
        self.selected_row = self.selected_row.saturating_sub(1);
    }

    pub fn move_row_down(&mut self) {
        if self.selected_row + 1 < self.tasks.len() {
            self.selected_row += 1;
        }
    }

    pub fn move_field_left(&mut self) {
        self.selected_field = self.selected_field.left();
    }

    pub fn move_field_right(&mut self) {
        self.selected_field = self.selected_field.right();
    }

    pub fn selected_task(&self) -> Option<&Task> {
        self.tasks.get(self.selected_row)
    }

    /// Advance (or rewind) the selector under the cursor
    pub fn cycle_selected_option(&mut self, forward: bool) {
        let Some(task) = self.selected_task() else {
            return;
        };
        let edit = match self.selected_field {
            TaskField::Priority => {
                let p = task.priority;
                TaskEdit::Priority(if forward { p.next() } else { p.prev() })
            }
            TaskField::Status => {
                let s = task.status;
                TaskEdit::Status(if forward { s.next() } else { s.prev() })
            }
            _ => return,
        };
        self.set_task_field(self.selected_row, edit);
    }

    /// Begin editing the text cell under the cursor
    pub fn start_edit_cell(&mut self) {
        if !self.selected_field.is_text() {
            return;
        }
        let Some(task) = self.selected_task() else {
            return;
        };
        let current = self.selected_field.value_of(task).to_string();
        self.cell_editor.set(&current);
        self.ui_mode = UiMode::EditingTaskField;
    }

    /// Type into the cell being edited. Time cells only take `HH:MM` characters.
    pub fn cell_insert(&mut self, c: char) {
        if self.selected_field == TaskField::Time
            && (!(c.is_ascii_digit() || c == ':') || self.cell_editor.char_len() >= TIME_FIELD_LEN)
        {
            return;
        }
        self.cell_editor.insert(c);
        self.commit_cell();
    }

    pub fn cell_backspace(&mut self) {
        if self.cell_editor.backspace() {
            self.commit_cell();
        }
    }

    pub fn cell_delete(&mut self) {
        if self.cell_editor.delete() {
            self.commit_cell();
        }
    }

    fn commit_cell(&mut self) {
        if let Some(edit) = TaskEdit::from_text(self.selected_field, self.cell_editor.as_str()) {
            self.set_task_field(self.selected_row, edit);
        }
    }

    pub fn finish_editing(&mut self) {
        self.ui_mode = UiMode::Normal;
    }

    // ---- focus task ----

    /// Flip the focus checkbox and reschedule the midnight reset
    pub fn toggle_focus_checked(&mut self, now: DateTime<Local>) {
        let checked = self.focus.toggle();
        if checked {
            let at = next_midnight(&now);
            debug!(reset_at = %at, "focus task checked; reset scheduled");
            self.midnight_timer.arm(at);
        } else {
            debug!("focus task unchecked; reset cancelled");
            self.midnight_timer.cancel();
        }
    }

    pub fn focus_reset_deadline(&self) -> Option<&DateTime<Local>> {
        self.midnight_timer.deadline()
    }

    // ---- calendar ----

    /// Add the calendar input as an entry on the selected date and as a new
    /// front task. Blank input does nothing. Returns true if an entry was added.
    pub fn add_calendar_entry(&mut self) -> bool {
        let label = self.calendar_input.as_str().to_string();
        if label.trim().is_empty() {
            return false;
        }

        self.calendar.add(label.clone(), self.selected_date);
        self.tasks.push_front(Task::titled(label.clone()));
        self.calendar_input.clear();
        info!(date = %self.selected_date, label = %label, "calendar entry added");
        true
    }

    pub fn entries_on_selected(&self) -> impl Iterator<Item = &CalendarEntry> {
        self.calendar.on(self.selected_date)
    }

    pub fn select_date(&mut self, date: NaiveDate) {
        self.selected_date = date;
    }

    pub fn move_selected_days(&mut self, days: i64) {
        if let Some(date) = self.selected_date.checked_add_signed(Duration::days(days)) {
            self.selected_date = date;
        }
    }

    pub fn move_selected_months(&mut self, months: i32) {
        self.selected_date = shift_months(self.selected_date, months);
    }

    pub fn select_today(&mut self) {
        self.selected_date = self.today;
    }

    // ---- timers ----

    /// Advance timers and animation. Called once per event loop iteration.
    pub fn tick(&mut self, now: DateTime<Local>) {
        self.animation_frame = self.animation_frame.wrapping_add(1);
        self.today = now.date_naive();

        if self.intro_timer.fire_if_due(&now) {
            debug!("intro finished");
            self.show_intro = false;
        }

        if self.midnight_timer.fire_if_due(&now) && self.focus.checked {
            info!("midnight passed; clearing completed focus task");
            self.focus.clear();
        }
    }

    /// Cancel pending timers before the app goes away
    pub fn teardown(&mut self) {
        self.intro_timer.cancel();
        self.midnight_timer.cancel();
        debug!("timers cancelled");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Priority, Status};
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(y, m, d, h, min, s).single().unwrap()
    }

    fn create_test_app() -> AppState {
        AppState::new(&Config::default(), at(2024, 6, 1, 9, 0, 0))
    }

    fn type_calendar(app: &mut AppState, text: &str) {
        for c in text.chars() {
            app.calendar_input.insert(c);
        }
    }

    #[test]
    fn test_app_state_new() {
        let app = create_test_app();
        assert_eq!(app.tasks.len(), 5);
        assert_eq!(app.calendar.len(), 0);
        assert_eq!(app.selected_date, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        assert_eq!(app.active_tab, Tab::Planner);
        assert!(!app.dark_mode);
        assert!(app.show_intro);
        assert!(!app.focus.checked);
    }

    #[test]
    fn test_add_calendar_entry() {
        let mut app = create_test_app();
        type_calendar(&mut app, "Meeting with Sam");

        assert!(app.add_calendar_entry());

        let entries: Vec<&CalendarEntry> = app.calendar.iter().collect();
        assert_eq!(
            entries,
            vec![&CalendarEntry {
                label: "Meeting with Sam".to_string(),
                date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            }]
        );
        assert_eq!(
            app.tasks.get(0),
            Some(&Task {
                task: "Meeting with Sam".to_string(),
                time: String::new(),
                priority: Priority::Low,
                notes: String::new(),
                status: Status::ToDo,
            })
        );
        assert_eq!(app.tasks.len(), 5);
        assert!(app.calendar_input.is_empty());
    }

    #[test]
    fn test_add_calendar_entry_drops_last_task() {
        let mut app = create_test_app();
        app.set_task_field(4, TaskEdit::Task("last".to_string()));
        app.set_task_field(0, TaskEdit::Task("first".to_string()));

        type_calendar(&mut app, "Dentist");
        app.add_calendar_entry();

        assert_eq!(app.tasks.len(), 5);
        assert_eq!(app.tasks.get(0).unwrap().task, "Dentist");
        assert_eq!(app.tasks.get(1).unwrap().task, "first");
        assert!(app.tasks.iter().all(|t| t.task != "last"));
    }

    #[test]
    fn test_add_calendar_entry_uses_selected_date() {
        let mut app = create_test_app();
        app.move_selected_days(3);
        type_calendar(&mut app, "Trip");
        app.add_calendar_entry();

        let day = NaiveDate::from_ymd_opt(2024, 6, 4).unwrap();
        assert_eq!(app.calendar.iter().next().unwrap().date, day);
        assert_eq!(app.entries_on_selected().count(), 1);
        app.select_today();
        assert_eq!(app.entries_on_selected().count(), 0);
    }

    #[test]
    fn test_add_blank_calendar_entry_is_noop() {
        let mut app = create_test_app();
        let tasks_before = app.tasks.clone();
        type_calendar(&mut app, "   \t ");

        assert!(!app.add_calendar_entry());
        assert_eq!(app.calendar.len(), 0);
        assert_eq!(app.tasks, tasks_before);
        assert_eq!(app.calendar_input.as_str(), "   \t ");
    }

    #[test]
    fn test_add_keeps_label_as_typed() {
        let mut app = create_test_app();
        type_calendar(&mut app, " Yoga ");
        app.add_calendar_entry();
        assert_eq!(app.calendar.iter().next().unwrap().label, " Yoga ");
    }

    #[test]
    fn test_cell_editing_writes_through() {
        let mut app = create_test_app();
        app.move_row_down();
        app.start_edit_cell();
        assert_eq!(app.ui_mode, UiMode::EditingTaskField);

        app.cell_insert('G');
        assert_eq!(app.tasks.get(1).unwrap().task, "G");
        app.cell_insert('o');
        assert_eq!(app.tasks.get(1).unwrap().task, "Go");
        app.cell_backspace();
        assert_eq!(app.tasks.get(1).unwrap().task, "G");
        assert_eq!(app.tasks.get(0).unwrap().task, "");

        app.finish_editing();
        assert_eq!(app.ui_mode, UiMode::Normal);
    }

    #[test]
    fn test_time_cell_filters_input() {
        let mut app = create_test_app();
        app.move_field_right();
        assert_eq!(app.selected_field, TaskField::Time);
        app.start_edit_cell();

        for c in "09a:30:15".chars() {
            app.cell_insert(c);
        }
        assert_eq!(app.tasks.get(0).unwrap().time, "09:30");
    }

    #[test]
    fn test_selector_cells_cycle() {
        let mut app = create_test_app();
        app.selected_field = TaskField::Priority;
        app.start_edit_cell();
        assert_eq!(app.ui_mode, UiMode::Normal);

        app.cycle_selected_option(true);
        assert_eq!(app.tasks.get(0).unwrap().priority, Priority::Medium);
        app.cycle_selected_option(false);
        app.cycle_selected_option(false);
        assert_eq!(app.tasks.get(0).unwrap().priority, Priority::High);

        app.selected_field = TaskField::Status;
        app.cycle_selected_option(true);
        assert_eq!(app.tasks.get(0).unwrap().status, Status::InProgress);
        assert_eq!(app.tasks.get(0).unwrap().priority, Priority::High);
    }

    #[test]
    fn test_row_navigation_bounds() {
        let mut app = create_test_app();
        app.move_row_up();
        assert_eq!(app.selected_row, 0);
        for _ in 0..10 {
            app.move_row_down();
        }
        assert_eq!(app.selected_row, 4);
    }

    #[test]
    fn test_intro_flag_flips_after_delay() {
        let mut app = create_test_app();
        app.tick(at(2024, 6, 1, 9, 0, 2));
        assert!(app.show_intro);
        app.tick(at(2024, 6, 1, 9, 0, 3));
        assert!(!app.show_intro);
        app.tick(at(2024, 6, 1, 9, 0, 10));
        assert!(!app.show_intro);
    }

    #[test]
    fn test_intro_delay_beyond_clock_range_uses_default() {
        for secs in [10_000_000_000_000, 9_000_000_000_000_000_000] {
            let cfg = Config {
                intro_secs: secs,
                ..Config::default()
            };
            let mut app = AppState::new(&cfg, at(2024, 6, 1, 9, 0, 0));
            app.tick(at(2024, 6, 1, 9, 0, 2));
            assert!(app.show_intro);
            app.tick(at(2024, 6, 1, 9, 0, 3));
            assert!(!app.show_intro, "intro_secs = {secs}");
        }
    }

    #[test]
    fn test_teardown_cancels_intro() {
        let mut app = create_test_app();
        app.teardown();
        app.tick(at(2024, 6, 1, 9, 0, 5));
        assert!(app.show_intro);
    }

    #[test]
    fn test_focus_cleared_at_midnight() {
        let mut app = create_test_app();
        app.focus.text.set("Finish the draft");
        app.toggle_focus_checked(at(2024, 6, 1, 22, 0, 0));
        assert_eq!(app.focus_reset_deadline(), Some(&at(2024, 6, 2, 0, 0, 0)));

        app.tick(at(2024, 6, 1, 23, 59, 59));
        assert!(app.focus.checked);
        assert_eq!(app.focus.text.as_str(), "Finish the draft");

        app.tick(at(2024, 6, 2, 0, 0, 0));
        assert!(!app.focus.checked);
        assert!(app.focus.text.is_empty());
        assert!(app.focus_reset_deadline().is_none());
    }

    #[test]
    fn test_unchecking_before_midnight_prevents_clear() {
        let mut app = create_test_app();
        app.focus.text.set("Inbox zero");
        app.toggle_focus_checked(at(2024, 6, 1, 20, 0, 0));
        app.toggle_focus_checked(at(2024, 6, 1, 21, 0, 0));

        app.tick(at(2024, 6, 2, 0, 0, 1));
        assert!(!app.focus.checked);
        assert_eq!(app.focus.text.as_str(), "Inbox zero");
    }

    #[test]
    fn test_recheck_reschedules_from_now() {
        let mut app = create_test_app();
        app.toggle_focus_checked(at(2024, 6, 1, 20, 0, 0));
        app.toggle_focus_checked(at(2024, 6, 1, 21, 0, 0));
        app.tick(at(2024, 6, 2, 0, 0, 0));
        app.toggle_focus_checked(at(2024, 6, 2, 8, 0, 0));

        assert_eq!(app.focus_reset_deadline(), Some(&at(2024, 6, 3, 0, 0, 0)));
        app.tick(at(2024, 6, 2, 23, 0, 0));
        assert!(app.focus.checked);
        app.tick(at(2024, 6, 3, 0, 0, 0));
        assert!(!app.focus.checked);
    }

    #[test]
    fn test_theme_and_tabs() {
        let mut app = create_test_app();
        app.toggle_theme();
        assert!(app.dark_mode);
        app.switch_tab(Tab::Calendar);
        assert_eq!(app.active_tab, Tab::Calendar);
        app.toggle_theme();
        assert!(!app.dark_mode);
        assert_eq!(app.tasks.len(), 5);
    }

    #[test]
    fn test_month_navigation() {
        let mut app = create_test_app();
        app.select_date(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap());
        app.move_selected_months(1);
        assert_eq!(app.selected_date, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        app.move_selected_days(-7);
        assert_eq!(app.selected_date, NaiveDate::from_ymd_opt(2024, 2, 22).unwrap());
        app.select_today();
        assert_eq!(app.selected_date, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
    }
}
