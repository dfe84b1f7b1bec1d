use alloc::string::String;

/// Digit-only text buffer backing the answer box of the bot-host scene.
#[derive(Debug, Clone, Default)]
pub struct AnswerInput {
    text: String,
    max_digits: usize,
}

impl AnswerInput {
    pub fn new(max_digits: usize) -> Self {
        Self {
            text: String::new(),
            max_digits,
        }
    }

    /// Append a digit. Returns `false` if it is not a decimal digit or the
    /// buffer is full.
    pub fn push_digit(&mut self, digit: char) -> bool {
        if !digit.is_ascii_digit() || self.text.len() >= self.max_digits {
            return false;
        }
        self.text.push(digit);
        true
    }

    /// Remove the last digit, if any.
    pub fn pop(&mut self) {
        self.text.pop();
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Numeric value of the buffer, `None` when empty.
    pub fn value(&self) -> Option<i32> {
        self.text.parse().ok()
    }
}
