//! Test doubles shared by the command tests.

use std::cell::RefCell;

use crate::shared::editor::{EditorError, TextEditor};

/// Editor that "saves" a fixed text and records what it was shown.
pub struct FakeEditor {
    output: Option<String>,
    shown: RefCell<Vec<String>>,
}

impl FakeEditor {
    pub fn returning(text: &str) -> Self {
        Self {
            output: Some(text.to_string()),
            shown: RefCell::new(Vec::new()),
        }
    }

    /// Editor whose process fails.
    pub fn failing() -> Self {
        Self {
            output: None,
            shown: RefCell::new(Vec::new()),
        }
    }

    /// Texts the editor was opened with, in call order.
    pub fn shown(&self) -> Vec<String> {
        self.shown.borrow().clone()
    }
}

impl TextEditor for FakeEditor {
    fn edit(&self, initial: &str) -> Result<String, EditorError> {
        self.shown.borrow_mut().push(initial.to_string());
        self.output
            .clone()
            .ok_or_else(|| EditorError::Io(std::io::Error::other("editor crashed")))
    }
}
