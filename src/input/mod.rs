pub mod handler;
pub mod text;

pub use handler::handle_key;
pub use text::TextBuffer;
