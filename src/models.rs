use std::collections::HashSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FocusArea {
    Input,
    List,
}

impl FocusArea {
    pub fn next(self) -> Self {
        match self {
            FocusArea::Input => FocusArea::List,
            FocusArea::List => FocusArea::Input,
        }
    }
}

/// Names currently selected in the list. Membership only.
#[derive(Debug, Default, Clone)]
pub struct SelectionSet {
    pub set: HashSet<String>,
}

impl SelectionSet {
    pub fn contains(&self, name: &str) -> bool {
        self.set.contains(name)
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }
}

/// Commands the presentation layer can bind to a button or key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    AddVariety,
    Remove,
    RemoveAll,
}
