pub mod footer;
pub mod text_input;

pub use footer::{FooterAction, render_footer};
pub use text_input::TextInput;
