use crate::suggestion::Suggestion;

/// Keys the dropdown reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    ArrowDown,
    ArrowUp,
    Enter,
    Escape,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// No dropdown is listening; the key belongs to someone else.
    Ignored,
    Handled,
    Accepted(Suggestion),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscriptionChange {
    Attached,
    Detached,
}

/// Keyboard listener registration for one dropdown.
///
/// Attached only while results are on screen so an idle widget never swallows
/// navigation keys meant for other inputs.
#[derive(Debug, Default)]
pub struct KeySubscription {
    active: bool,
    attach_count: u64,
}

impl KeySubscription {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Number of times a listener has been attached over the widget lifetime.
    pub fn attach_count(&self) -> u64 {
        self.attach_count
    }

    pub fn subscribe(&mut self) -> Option<SubscriptionChange> {
        if self.active {
            return None;
        }
        self.active = true;
        self.attach_count += 1;
        Some(SubscriptionChange::Attached)
    }

    pub fn unsubscribe(&mut self) -> Option<SubscriptionChange> {
        if !self.active {
            return None;
        }
        self.active = false;
        Some(SubscriptionChange::Detached)
    }

    /// Attaches or detaches so that the listener is live exactly while `visible`.
    pub fn sync(&mut self, visible: bool) -> Option<SubscriptionChange> {
        if visible {
            self.subscribe()
        } else {
            self.unsubscribe()
        }
    }
}
