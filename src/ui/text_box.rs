use crate::input::TextBuffer;
use crate::ui::styles::placeholder_style;
use ratatui::{
    style::Style,
    text::{Line, Span},
};

/// Block cursor drawn inside text being edited
pub const CURSOR: char = '█';

/// Lines for a text box: the content (with a cursor when editing) or the
/// placeholder when empty and idle.
pub fn text_box_lines(buf: &TextBuffer, editing: bool, placeholder: &str, style: Style) -> Vec<Line<'static>> {
    if buf.is_empty() && !editing {
        return vec![Line::from(Span::styled(placeholder.to_string(), placeholder_style()))];
    }

    let text = if editing {
        let (before, after) = buf.split_at_cursor();
        format!("{}{}{}", before, CURSOR, after)
    } else {
        buf.as_str().to_string()
    };

    text.split('\n')
        .map(|line| Line::from(Span::styled(line.to_string(), style)))
        .collect()
}
