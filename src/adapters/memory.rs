use crate::domain::ports::JokeView;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    SetJoke(String),
    ClearExplanation,
    AppendExplanation(String),
    ShowPanel,
    HidePanel,
    Alert(String),
}

/// Headless view that keeps the display state in memory and records every
/// call made on it.
#[derive(Debug, Default, Clone)]
pub struct MemoryView {
    joke: String,
    explanation: String,
    panel_visible: bool,
    events: Vec<ViewEvent>,
}

impl MemoryView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_joke(joke: impl Into<String>) -> Self {
        Self {
            joke: joke.into(),
            ..Self::default()
        }
    }

    pub fn joke(&self) -> &str {
        &self.joke
    }

    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    pub fn is_panel_visible(&self) -> bool {
        self.panel_visible
    }

    pub fn events(&self) -> &[ViewEvent] {
        &self.events
    }

    pub fn alerts(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|event| match event {
                ViewEvent::Alert(message) => Some(message.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Explanation text as it stood each time the panel was shown.
    pub fn shown_explanations(&self) -> Vec<String> {
        let mut text = String::new();
        let mut shown = Vec::new();
        for event in &self.events {
            match event {
                ViewEvent::ClearExplanation => text.clear(),
                ViewEvent::AppendExplanation(chunk) => text.push_str(chunk),
                ViewEvent::ShowPanel => shown.push(text.clone()),
                _ => {}
            }
        }
        shown
    }
}

impl JokeView for MemoryView {
    fn set_joke(&mut self, joke: &str) {
        self.joke = joke.to_string();
        self.events.push(ViewEvent::SetJoke(joke.to_string()));
    }

    fn current_joke(&self) -> String {
        self.joke.clone()
    }

    fn clear_explanation(&mut self) {
        self.explanation.clear();
        self.events.push(ViewEvent::ClearExplanation);
    }

    fn append_explanation(&mut self, text: &str) {
        self.explanation.push_str(text);
        self.events.push(ViewEvent::AppendExplanation(text.to_string()));
    }

    fn show_explanation_panel(&mut self) {
        self.panel_visible = true;
        self.events.push(ViewEvent::ShowPanel);
    }

    fn hide_explanation_panel(&mut self) {
        self.panel_visible = false;
        self.events.push(ViewEvent::HidePanel);
    }

    fn alert(&mut self, message: &str) {
        self.events.push(ViewEvent::Alert(message.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shown_explanations_replays_appends() {
        let mut view = MemoryView::new();
        view.append_explanation("It's ");
        view.show_explanation_panel();
        view.append_explanation("funny.");
        view.show_explanation_panel();
        view.clear_explanation();
        view.hide_explanation_panel();

        assert_eq!(view.shown_explanations(), vec!["It's ", "It's funny."]);
        assert_eq!(view.explanation(), "");
        assert!(!view.is_panel_visible());
    }

    #[test]
    fn test_alerts_are_collected() {
        let mut view = MemoryView::with_joke("Why did...");
        view.alert("boom");
        assert_eq!(view.current_joke(), "Why did...");
        assert_eq!(view.alerts(), vec!["boom"]);
    }
}
