use crate::model::Section;

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // Tab bar
    OpenSection(Section),

    // Navigation
    NavigateTo(String),
    SectionBack,
    Back,
    Forward,

    // Session
    SignIn(String),
    SignOut,

    // Router lifecycle
    RouterReady(bool),

    // Input
    PathInputChanged(String),
}
