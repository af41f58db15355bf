//! Coaching text assembly
//!
//! Clauses are appended in priority order. The first clause stands alone,
//! later ones are joined with " and ", and trailing remarks (symmetry,
//! knee-over-toes) with ". Also, ".

#[derive(Debug, Default)]
pub(crate) struct Feedback {
    text: String,
}

impl Feedback {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_with(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn and(&mut self, clause: impl AsRef<str>) {
        self.join(" and ", clause.as_ref());
    }

    pub fn also(&mut self, clause: impl AsRef<str>) {
        self.join(". Also, ", clause.as_ref());
    }

    fn join(&mut self, separator: &str, clause: &str) {
        if !self.text.is_empty() {
            self.text.push_str(separator);
        }
        self.text.push_str(clause);
    }

    /// Final text, or `fallback` when no clause fired
    pub fn or(self, fallback: impl Into<String>) -> String {
        if self.text.is_empty() {
            fallback.into()
        } else {
            self.text
        }
    }
}
