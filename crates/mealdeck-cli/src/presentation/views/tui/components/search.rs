use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Result of feeding a key to a focused search box
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Key consumed; nothing to report
    Editing,
    /// Enter pressed; carries the raw input
    Submitted(String),
    /// Esc pressed; focus left without submitting
    Cancelled,
}

#[derive(Debug, Default)]
pub struct SearchComponent {
    input: String,
    focused: bool,
}

impl SearchComponent {
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn handle_input(&mut self, key: KeyEvent) -> SearchOutcome {
        match key.code {
            KeyCode::Enter => {
                self.focused = false;
                SearchOutcome::Submitted(self.input.clone())
            }
            KeyCode::Esc => {
                self.focused = false;
                SearchOutcome::Cancelled
            }
            KeyCode::Backspace => {
                self.input.pop();
                SearchOutcome::Editing
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.input.clear();
                SearchOutcome::Editing
            }
            KeyCode::Char(c) => {
                self.input.push(c);
                SearchOutcome::Editing
            }
            _ => SearchOutcome::Editing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(search: &mut SearchComponent, code: KeyCode) -> SearchOutcome {
        search.handle_input(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_typing_then_enter_submits_raw_input() {
        let mut search = SearchComponent::default();
        search.focus();
        for c in " pie<".chars() {
            press(&mut search, KeyCode::Char(c));
        }
        press(&mut search, KeyCode::Backspace);

        assert_eq!(
            press(&mut search, KeyCode::Enter),
            SearchOutcome::Submitted(" pie".to_string())
        );
        assert!(!search.is_focused());
        // Input stays visible after submit
        assert_eq!(search.input(), " pie");
    }

    #[test]
    fn test_escape_cancels() {
        let mut search = SearchComponent::default();
        search.focus();
        press(&mut search, KeyCode::Char('x'));

        assert_eq!(press(&mut search, KeyCode::Esc), SearchOutcome::Cancelled);
        assert!(!search.is_focused());
    }
}
