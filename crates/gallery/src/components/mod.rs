//! Demo UI components exercised by the gallery's stories.

mod badge;
mod button;
mod text_input;

pub use badge::{Badge, BadgeTone};
pub use button::{Button, ButtonVariant};
pub use text_input::TextInput;
