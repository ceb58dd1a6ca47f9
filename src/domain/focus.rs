use crate::input::TextBuffer;

/// The single daily goal shown in the focus box
#[derive(Debug, Clone, Default)]
pub struct FocusTask {
    pub text: TextBuffer,
    pub checked: bool,
}

impl FocusTask {
    /// Flip the checkbox, leaving the text alone. Returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.checked = !self.checked;
        self.checked
    }

    /// Reset both text and checkbox
    pub fn clear(&mut self) {
        self.text.clear();
        self.checked = false;
    }
}
