pub mod constants;
pub mod pages;
pub mod render;
pub mod terminal;

/// Visual role of one output line; the terminal maps it to a style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    Brand,
    Heading,
    Text,
    Hint,
    Status,
    Error,
    Title,
    Link,
    Tabs,
    Paragraph,
    Code,
    Placeholder,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub class: LineClass,
    pub text: String,
}

impl Line {
    pub fn new(class: LineClass, text: impl Into<String>) -> Self {
        Self {
            class,
            text: text.into(),
        }
    }

    pub fn blank() -> Self {
        Self::new(LineClass::Text, String::new())
    }
}
