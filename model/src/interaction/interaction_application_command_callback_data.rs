use serde::Serialize;

#[derive(Serialize, Debug)]
pub struct InteractionApplicationCommandCallbackData {
    pub content: Box<str>,
}

impl InteractionApplicationCommandCallbackData {
    pub fn from_content(content: impl Into<Box<str>>) -> Self {
        Self {
            content: content.into(),
        }
    }
}
