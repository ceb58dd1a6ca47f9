use super::enums::{Priority, Status};

/// Number of rows in the planner task table
pub const TASK_SLOTS: usize = 5;

/// One row of the planner task table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Task {
    pub task: String,
    /// Time of day as typed, `HH:MM` (may be partial or empty)
    pub time: String,
    pub priority: Priority,
    pub notes: String,
    pub status: Status,
}

impl Task {
    /// New task with the given description and default metadata
    pub fn titled(task: impl Into<String>) -> Self {
        Self {
            task: task.into(),
            ..Self::default()
        }
    }
}

/// Column of the task table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskField {
    Task,
    Time,
    Priority,
    Notes,
    Status,
}

impl TaskField {
    pub fn all() -> &'static [TaskField] {
        &[
            TaskField::Task,
            TaskField::Time,
            TaskField::Priority,
            TaskField::Notes,
            TaskField::Status,
        ]
    }

    pub fn header(&self) -> &'static str {
        match self {
            TaskField::Task => "Task",
            TaskField::Time => "Time",
            TaskField::Priority => "Priority",
            TaskField::Notes => "Notes",
            TaskField::Status => "Status",
        }
    }

    /// Free-text columns are edited with a cursor; the others are selectors
    pub fn is_text(&self) -> bool {
        matches!(self, TaskField::Task | TaskField::Time | TaskField::Notes)
    }

    pub fn left(&self) -> Self {
        let fields = Self::all();
        let idx = self.index();
        fields[idx.saturating_sub(1)]
    }

    pub fn right(&self) -> Self {
        let fields = Self::all();
        let idx = self.index();
        fields[(idx + 1).min(fields.len() - 1)]
    }

    fn index(&self) -> usize {
        Self::all().iter().position(|f| f == self).unwrap_or(0)
    }

    /// Read the current value of this column as display text
    pub fn value_of<'a>(&self, task: &'a Task) -> &'a str {
        match self {
            TaskField::Task => &task.task,
            TaskField::Time => &task.time,
            TaskField::Priority => task.priority.label(),
            TaskField::Notes => &task.notes,
            TaskField::Status => task.status.label(),
        }
    }
}

/// A single-field replacement on one task
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskEdit {
    Task(String),
    Time(String),
    Priority(Priority),
    Notes(String),
    Status(Status),
}

impl TaskEdit {
    /// Edit for a free-text column; selector columns have no text form
    pub fn from_text(field: TaskField, value: &str) -> Option<Self> {
        match field {
            TaskField::Task => Some(TaskEdit::Task(value.to_string())),
            TaskField::Time => Some(TaskEdit::Time(value.to_string())),
            TaskField::Notes => Some(TaskEdit::Notes(value.to_string())),
            TaskField::Priority | TaskField::Status => None,
        }
    }

    fn apply_to(self, task: &mut Task) {
        match self {
            TaskEdit::Task(v) => task.task = v,
            TaskEdit::Time(v) => task.time = v,
            TaskEdit::Priority(v) => task.priority = v,
            TaskEdit::Notes(v) => task.notes = v,
            TaskEdit::Status(v) => task.status = v,
        }
    }
}

/// Fixed-length task list. The number of slots never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskList {
    slots: Vec<Task>,
}

impl Default for TaskList {
    fn default() -> Self {
        Self::with_slots(TASK_SLOTS)
    }
}

impl TaskList {
    pub fn with_slots(count: usize) -> Self {
        Self {
            slots: vec![Task::default(); count],
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn get(&self, index: usize) -> Option<&Task> {
        self.slots.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.slots.iter()
    }

    /// Replace one field of the task at `index`.
    /// Returns false (and changes nothing) when the index is out of range.
    pub fn apply(&mut self, index: usize, edit: TaskEdit) -> bool {
        match self.slots.get_mut(index) {
            Some(task) => {
                edit.apply_to(task);
                true
            }
            None => false,
        }
    }

    /// Insert at the front and drop the last slot so the length is unchanged
    pub fn push_front(&mut self, task: Task) {
        self.slots.insert(0, task);
        self.slots.pop();
    }
}
