use crate::database::Database;
use crate::models::{Command, SelectionSet};

/// Something observable changed on the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChangeEvent {
    PendingInputChanged,
    VarietiesChanged,
    SelectionChanged,
}

impl ChangeEvent {
    /// Commands whose `can_execute` may differ after this change.
    pub fn affected_commands(self) -> &'static [Command] {
        match self {
            ChangeEvent::PendingInputChanged => &[Command::AddVariety],
            ChangeEvent::VarietiesChanged => &[Command::AddVariety, Command::RemoveAll],
            ChangeEvent::SelectionChanged => &[Command::Remove],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubscriptionId(usize);

type Subscriber = Box<dyn FnMut(&ChangeEvent)>;

/// Owns the variety list, the selection and the pending input.
///
/// Every mutation goes through here so subscribers see one notification per
/// changed collection, delivered after the state is consistent again.
pub struct ListController {
    varieties: Vec<String>,
    selected: SelectionSet,
    pending_input: String,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: usize,
}

impl ListController {
    pub fn new(database: &Database) -> Self {
        Self::with_varieties(database.potato_varieties().to_vec())
    }

    pub fn with_varieties(varieties: Vec<String>) -> Self {
        Self {
            varieties,
            selected: SelectionSet::default(),
            pending_input: String::new(),
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn varieties(&self) -> &[String] {
        &self.varieties
    }

    pub fn selected(&self) -> &SelectionSet {
        &self.selected
    }

    pub fn pending_input(&self) -> &str {
        &self.pending_input
    }

    pub fn subscribe<F>(&mut self, f: F) -> SubscriptionId
    where
        F: FnMut(&ChangeEvent) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(f)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.subscribers.retain(|(sid, _)| *sid != id);
    }

    fn notify(&mut self, event: ChangeEvent) {
        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(&event);
        }
    }

    pub fn set_pending_input(&mut self, value: impl Into<String>) {
        let value = value.into();
        if value != self.pending_input {
            self.pending_input = value;
            self.notify(ChangeEvent::PendingInputChanged);
        }
    }

    pub fn can_execute(&self, command: Command) -> bool {
        match command {
            Command::AddVariety => self.can_add(),
            Command::Remove => self.can_remove(),
            Command::RemoveAll => self.can_remove_all(),
        }
    }

    pub fn execute(&mut self, command: Command) {
        match command {
            Command::AddVariety => self.add(),
            Command::Remove => self.remove(),
            Command::RemoveAll => self.remove_all(),
        }
    }

    pub fn can_add(&self) -> bool {
        let trimmed = self.pending_input.trim();
        !trimmed.is_empty() && !self.varieties.iter().any(|v| v == trimmed)
    }

    /// Appends the trimmed pending input and clears it.
    pub fn add(&mut self) {
        if !self.can_add() {
            return;
        }
        let trimmed = self.pending_input.trim().to_string();
        tracing::debug!(variety = %trimmed, "adding variety");
        self.varieties.push(trimmed);
        self.notify(ChangeEvent::VarietiesChanged);
        self.set_pending_input(String::new());
    }

    pub fn can_remove(&self) -> bool {
        !self.selected.is_empty()
    }

    /// Removes every selected name from the list, then clears the selection.
    pub fn remove(&mut self) {
        if !self.can_remove() {
            return;
        }
        let before = self.varieties.len();
        let selected = std::mem::take(&mut self.selected);
        self.varieties.retain(|v| !selected.contains(v));
        tracing::debug!(removed = before - self.varieties.len(), "removed selected varieties");
        if self.varieties.len() != before {
            self.notify(ChangeEvent::VarietiesChanged);
        }
        self.notify(ChangeEvent::SelectionChanged);
    }

    pub fn can_remove_all(&self) -> bool {
        !self.varieties.is_empty()
    }

    pub fn remove_all(&mut self) {
        if !self.can_remove_all() {
            return;
        }
        tracing::debug!(count = self.varieties.len(), "removing all varieties");
        self.varieties.clear();
        self.notify(ChangeEvent::VarietiesChanged);
        if !self.selected.is_empty() {
            self.selected.set.clear();
            self.notify(ChangeEvent::SelectionChanged);
        }
    }

    /// Adds `name` to the selection. Names not in the list are ignored.
    pub fn select(&mut self, name: &str) {
        if !self.varieties.iter().any(|v| v == name) {
            return;
        }
        if self.selected.set.insert(name.to_string()) {
            self.notify(ChangeEvent::SelectionChanged);
        }
    }

    pub fn deselect(&mut self, name: &str) {
        if self.selected.set.remove(name) {
            self.notify(ChangeEvent::SelectionChanged);
        }
    }

    pub fn toggle_selection(&mut self, name: &str) {
        if self.selected.contains(name) {
            self.deselect(name);
        } else {
            self.select(name);
        }
    }

    pub fn clear_selection(&mut self) {
        if !self.selected.is_empty() {
            self.selected.set.clear();
            self.notify(ChangeEvent::SelectionChanged);
        }
    }
}
