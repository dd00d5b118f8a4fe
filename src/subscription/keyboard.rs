use crate::message::Message;
use crate::model::Section;
use eframe::egui::{self, Key, Modifiers};

/// Messages for the shortcuts pressed this frame.
pub fn keyboard_messages(ctx: &egui::Context) -> Vec<Message> {
    ctx.input(|i| {
        i.events
            .iter()
            .filter_map(|event| match event {
                egui::Event::Key {
                    key,
                    pressed: true,
                    modifiers,
                    ..
                } => handle_key(*key, *modifiers),
                _ => None,
            })
            .collect()
    })
}

pub fn handle_key(key: Key, modifiers: Modifiers) -> Option<Message> {
    if !modifiers.alt {
        return None;
    }

    match key {
        // Alt+Arrow for history
        Key::ArrowLeft => Some(Message::Back),
        Key::ArrowRight => Some(Message::Forward),
        Key::ArrowUp => Some(Message::SectionBack),
        // Alt+1..7 for tabs
        Key::Num1 => tab(0),
        Key::Num2 => tab(1),
        Key::Num3 => tab(2),
        Key::Num4 => tab(3),
        Key::Num5 => tab(4),
        Key::Num6 => tab(5),
        Key::Num7 => tab(6),
        _ => None,
    }
}

fn tab(index: usize) -> Option<Message> {
    Section::TABS.get(index).cloned().map(Message::OpenSection)
}
