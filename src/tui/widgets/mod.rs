//! Reusable TUI widgets

pub mod input;
pub mod select;

pub use input::TextInput;
pub use select::SelectField;
