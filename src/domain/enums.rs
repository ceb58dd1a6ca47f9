/// Task priority, as offered by the priority selector
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Priority {
    #[default]
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    /// Next option in selector order, wrapping around
    pub fn next(&self) -> Self {
        match self {
            Self::Low => Self::Medium,
            Self::Medium => Self::High,
            Self::High => Self::Low,
        }
    }

    /// Previous option in selector order, wrapping around
    pub fn prev(&self) -> Self {
        match self {
            Self::Low => Self::High,
            Self::Medium => Self::Low,
            Self::High => Self::Medium,
        }
    }
}

/// Task progress status, as offered by the status selector
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Status {
    #[default]
    ToDo,
    InProgress,
    Done,
}

impl Status {
    pub fn label(&self) -> &'static str {
        match self {
            Self::ToDo => "To Do",
            Self::InProgress => "In Progress",
            Self::Done => "Done",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Self::ToDo => Self::InProgress,
            Self::InProgress => Self::Done,
            Self::Done => Self::ToDo,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::ToDo => Self::Done,
            Self::InProgress => Self::ToDo,
            Self::Done => Self::InProgress,
        }
    }
}

/// Top-level view selector
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Planner,
    Calendar,
}

impl Tab {
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Planner => "Planner",
            Tab::Calendar => "Calendar",
        }
    }

    pub fn all() -> &'static [Tab] {
        &[Tab::Planner, Tab::Calendar]
    }
}

/// Which box of the planner view owns the cursor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PlannerPane {
    #[default]
    Tasks,
    Focus,
    BrainDump,
}

impl PlannerPane {
    /// Cycle to the next pane (Tab key)
    pub fn next(&self) -> Self {
        match self {
            PlannerPane::Tasks => PlannerPane::Focus,
            PlannerPane::Focus => PlannerPane::BrainDump,
            PlannerPane::BrainDump => PlannerPane::Tasks,
        }
    }
}

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    EditingTaskField,
    EditingFocus,
    EditingBrainDump,
    EditingCalendarInput,
}

impl UiMode {
    /// Whether keystrokes are currently going into a text box
    pub fn is_editing(&self) -> bool {
        !matches!(self, UiMode::Normal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_labels() {
        assert_eq!(Priority::Low.label(), "Low");
        assert_eq!(Priority::Medium.label(), "Medium");
        assert_eq!(Priority::High.label(), "High");
    }

    #[test]
    fn test_priority_cycle() {
        assert_eq!(Priority::Low.next(), Priority::Medium);
        assert_eq!(Priority::High.next(), Priority::Low);
        assert_eq!(Priority::Low.prev(), Priority::High);
        assert_eq!(Priority::default(), Priority::Low);
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(Status::ToDo.label(), "To Do");
        assert_eq!(Status::InProgress.label(), "In Progress");
        assert_eq!(Status::Done.label(), "Done");
        assert_eq!(Status::default(), Status::ToDo);
    }

    #[test]
    fn test_status_cycle() {
        assert_eq!(Status::ToDo.next(), Status::InProgress);
        assert_eq!(Status::Done.next(), Status::ToDo);
        assert_eq!(Status::ToDo.prev(), Status::Done);
    }

    #[test]
    fn test_planner_pane_cycle() {
        assert_eq!(PlannerPane::Tasks.next(), PlannerPane::Focus);
        assert_eq!(PlannerPane::Focus.next(), PlannerPane::BrainDump);
        assert_eq!(PlannerPane::BrainDump.next(), PlannerPane::Tasks);
    }
}
