pub mod calendar;
pub mod enums;
pub mod focus;
pub mod task;

pub use calendar::{CalendarBook, CalendarEntry};
pub use enums::{PlannerPane, Priority, Status, Tab, UiMode};
pub use focus::FocusTask;
pub use task::{Task, TaskEdit, TaskField, TaskList};
