use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::AppState;
use crate::ui::styles::{border_style, pane_title_style, Panel};

const FRAMES_PER_WAG: u32 = 2; // tail flips every 2 ticks (~0.5s at 250ms)

const HEAD: [&str; 3] = ["  / \\__    ", " (    @\\___", " /         O"];

/// Tail positions, alternated while wagging
const TAIL_UP: [&str; 2] = ["/   (_____/ ", "\\__/       "];
const TAIL_DOWN: [&str; 2] = ["|   (_____/ ", "/__/       "];

/// Buddy's still pose after the intro
const STILL: [&str; 2] = ["    (_____/ ", "   /_/     "];

pub fn render_buddy_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let (caption, lines) = buddy_lines(app.show_intro, app.animation_frame);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(Panel::Buddy, app.dark_mode, false))
        .title(Span::styled(" Buddy ", pane_title_style(Panel::Buddy, app.dark_mode)));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut all = lines;
    all.push(Line::from(""));
    all.push(Line::from(Span::styled(
        caption,
        Style::default().add_modifier(Modifier::ITALIC),
    )));

    let art = Paragraph::new(all).alignment(Alignment::Center);
    f.render_widget(art, inner);
}

/// Caption and art for the current frame
fn buddy_lines(wagging: bool, frame: u32) -> (&'static str, Vec<Line<'static>>) {
    let body: [&str; 2] = if wagging {
        if (frame / FRAMES_PER_WAG) % 2 == 0 {
            TAIL_UP
        } else {
            TAIL_DOWN
        }
    } else {
        STILL
    };

    let lines = HEAD
        .iter()
        .chain(body.iter())
        .map(|s| Line::from(*s))
        .collect();

    let caption = if wagging { "Buddy wagging tail" } else { "Buddy" };
    (caption, lines)
}
