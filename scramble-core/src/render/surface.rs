/// A mutable text-bearing display surface.
///
/// The engine holds its surface as an explicit dependency, never a global
/// lookup, so embedders can point it at a terminal line, a widget, or a
/// plain buffer, and tests can supply a fake.
pub trait TextSurface {
    /// Current full content.
    fn text(&self) -> String;

    /// Replace the full rendered content.
    fn set_text(&mut self, text: &str);
}

impl<S: TextSurface + ?Sized> TextSurface for &mut S {
    fn text(&self) -> String {
        (**self).text()
    }

    fn set_text(&mut self, text: &str) {
        (**self).set_text(text);
    }
}

/// In-memory surface used by tests, examples, and the frame dumper.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BufferSurface {
    text: String,
}

impl BufferSurface {
    /// A surface pre-filled with `initial`.
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            text: initial.into(),
        }
    }

    /// Borrow the current content.
    pub fn contents(&self) -> &str {
        &self.text
    }
}

impl TextSurface for BufferSurface {
    fn text(&self) -> String {
        self.text.clone()
    }

    fn set_text(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
