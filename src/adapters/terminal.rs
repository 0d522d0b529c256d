use crate::domain::ports::JokeView;
use std::io::{self, Write};

/// Renders the joke and its explanation as plain text on a writer,
/// stdout by default.
///
/// Explanation text is only written while the panel is shown; whatever
/// accumulated while hidden is written when the panel appears.
pub struct TerminalView<W> {
    out: W,
    joke: String,
    explanation: String,
    printed: usize,
    panel_visible: bool,
    header_written: bool,
}

impl TerminalView<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> TerminalView<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            joke: String::new(),
            explanation: String::new(),
            printed: 0,
            panel_visible: false,
            header_written: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Writes a line that is not part of the joke display (help, notices).
    pub fn notice(&mut self, text: &str) {
        self.write(&format!("{}\n", text));
    }

    /// Ends the explanation line once streaming has stopped.
    pub fn finish_explanation(&mut self) {
        if self.header_written {
            self.write("\n\n");
            self.header_written = false;
        }
    }

    fn flush_explanation(&mut self) {
        if !self.panel_visible || self.printed >= self.explanation.len() {
            return;
        }
        if !self.header_written {
            self.write("Explanation: ");
            self.header_written = true;
        }
        let pending = self.explanation[self.printed..].to_string();
        self.write(&pending);
        self.printed = self.explanation.len();
    }

    fn write(&mut self, text: &str) {
        let result = self
            .out
            .write_all(text.as_bytes())
            .and_then(|()| self.out.flush());
        if let Err(e) = result {
            tracing::warn!("Failed to write to terminal: {}", e);
        }
    }
}

impl<W: Write + Send> JokeView for TerminalView<W> {
    fn set_joke(&mut self, joke: &str) {
        self.joke = joke.to_string();
        self.write(&format!("\n{}\n\n", joke));
    }

    fn current_joke(&self) -> String {
        self.joke.clone()
    }

    fn clear_explanation(&mut self) {
        self.explanation.clear();
        self.printed = 0;
        self.header_written = false;
    }

    fn append_explanation(&mut self, text: &str) {
        self.explanation.push_str(text);
        self.flush_explanation();
    }

    fn show_explanation_panel(&mut self) {
        self.panel_visible = true;
        self.flush_explanation();
    }

    fn hide_explanation_panel(&mut self) {
        self.panel_visible = false;
    }

    fn alert(&mut self, message: &str) {
        self.write(&format!("\n[!] {}\n", message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(view: TerminalView<Vec<u8>>) -> String {
        String::from_utf8(view.into_inner()).unwrap()
    }

    #[test]
    fn test_joke_is_printed() {
        let mut view = TerminalView::new(Vec::new());
        view.set_joke("Why did...");
        assert_eq!(view.current_joke(), "Why did...");
        assert_eq!(output(view), "\nWhy did...\n\n");
    }

    #[test]
    fn test_explanation_written_incrementally_once_shown() {
        let mut view = TerminalView::new(Vec::new());
        view.hide_explanation_panel();
        view.clear_explanation();
        view.append_explanation("It's ");
        view.show_explanation_panel();
        view.append_explanation("funny.");
        view.show_explanation_panel();
        view.finish_explanation();

        assert_eq!(output(view), "Explanation: It's funny.\n\n");
    }

    #[test]
    fn test_hidden_explanation_is_not_written() {
        let mut view = TerminalView::new(Vec::new());
        view.append_explanation("secret");
        view.finish_explanation();
        assert_eq!(output(view), "");
    }

    #[test]
    fn test_second_explanation_gets_its_own_header() {
        let mut view = TerminalView::new(Vec::new());
        for text in ["first", "second"] {
            view.clear_explanation();
            view.append_explanation(text);
            view.show_explanation_panel();
            view.finish_explanation();
        }
        assert_eq!(
            output(view),
            "Explanation: first\n\nExplanation: second\n\n"
        );
    }

    #[test]
    fn test_alert_is_written() {
        let mut view = TerminalView::new(Vec::new());
        view.alert("An error occurred while explaining the joke.");
        assert_eq!(
            output(view),
            "\n[!] An error occurred while explaining the joke.\n"
        );
    }
}
