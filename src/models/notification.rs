use std::collections::HashSet;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggeredAlert {
    // alert id (hex)
    pub id: String,
    pub message: String,
}

impl TriggeredAlert {
    /// Prefixes the message with the city it was raised for, so entries
    /// from different refreshes stay distinguishable on one list.
    pub fn for_city(self, city: &str) -> Self {
        Self {
            id: self.id,
            message: format!("{city}: {}", self.message),
        }
    }
}

/// Notifications currently on screen for one user, oldest first.
///
/// Both operations take the list by value and hand back the next one;
/// nothing is mutated behind the caller's back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotificationList {
    items: Vec<TriggeredAlert>,
}

impl NotificationList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[TriggeredAlert] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|n| n.id == id)
    }

    /// Appends every entry of `fresh` whose id is not already listed.
    /// Existing entries keep their position and their original message.
    pub fn merge(self, fresh: impl IntoIterator<Item = TriggeredAlert>) -> Self {
        let mut seen: HashSet<String> = self.items.iter().map(|n| n.id.clone()).collect();
        let mut items = self.items;

        for n in fresh {
            if seen.insert(n.id.clone()) {
                items.push(n);
            }
        }

        Self { items }
    }

    pub fn dismiss(self, id: &str) -> Self {
        let items = self.items.into_iter().filter(|n| n.id != id).collect();
        Self { items }
    }
}

impl From<Vec<TriggeredAlert>> for NotificationList {
    fn from(v: Vec<TriggeredAlert>) -> Self {
        Self::new().merge(v)
    }
}
