mod keyboard;

pub use keyboard::{handle_key, keyboard_messages};
