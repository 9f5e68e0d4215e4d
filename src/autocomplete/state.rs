use crate::suggestion::Suggestion;

/// Coarse view of the controller, derived from `ControllerState`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Pending,
    Populated,
    Failed,
}

/// Everything the presentation layer renders for one input widget.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ControllerState {
    pub query: String,
    /// Server rank order, never re-sorted.
    pub suggestions: Vec<Suggestion>,
    pub loading: bool,
    pub error: Option<String>,
    /// Index into `suggestions`; `None` means no selection.
    pub selected_index: Option<usize>,
}

impl ControllerState {
    pub fn phase(&self) -> Phase {
        if self.loading {
            Phase::Pending
        } else if self.error.is_some() {
            Phase::Failed
        } else if !self.suggestions.is_empty() {
            Phase::Populated
        } else {
            Phase::Idle
        }
    }

    /// Selection in the `[-1, len - 1]` convention used by DOM-style widgets.
    pub fn selected_position(&self) -> isize {
        self.selected_index.map_or(-1, |i| i as isize)
    }

    pub fn selected(&self) -> Option<&Suggestion> {
        self.selected_index.and_then(|i| self.suggestions.get(i))
    }

    pub fn is_visible(&self) -> bool {
        !self.suggestions.is_empty()
    }

    /// Swaps in a new result list; the selection never survives a swap.
    pub(crate) fn replace_suggestions(&mut self, suggestions: Vec<Suggestion>) {
        self.suggestions = suggestions;
        self.selected_index = None;
    }

    pub(crate) fn clear_suggestions(&mut self) {
        self.replace_suggestions(Vec::new());
    }

    pub(crate) fn select_next(&mut self) {
        let Some(last) = self.suggestions.len().checked_sub(1) else {
            return;
        };
        self.selected_index = Some(match self.selected_index {
            None => 0,
            Some(i) => (i + 1).min(last),
        });
    }

    pub(crate) fn select_prev(&mut self) {
        self.selected_index = match self.selected_index {
            None | Some(0) => None,
            Some(i) => Some(i - 1),
        };
    }
}
