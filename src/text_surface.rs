use alloc::{format, string::String, vec::Vec};

use crate::scene::{Button, Surface};

/// [`Surface`] that records one frame as plain text lines. Empty labels are
/// skipped.
#[derive(Debug, Default, Clone)]
pub struct TextSurface {
    lines: Vec<String>,
}

impl TextSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Whether any line of the current frame equals `text`.
    pub fn contains(&self, text: &str) -> bool {
        self.lines.iter().any(|l| l == text)
    }
}

impl Surface for TextSurface {
    fn fill_background(&mut self) {
        self.lines.clear();
    }

    fn draw_label(&mut self, text: &str) {
        if !text.is_empty() {
            self.lines.push(String::from(text));
        }
    }

    fn draw_text_input(&mut self, text: &str) {
        self.lines.push(format!("> {}", text));
    }

    fn draw_button(&mut self, button: Button) {
        self.lines.push(format!("[{}]", button.label()));
    }
}

impl core::fmt::Display for TextSurface {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
