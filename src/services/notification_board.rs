use std::{collections::HashMap, sync::Arc};

use tokio::sync::RwLock;

use crate::models::{NotificationList, TriggeredAlert};

/// Per-user notification lists held by the HTTP layer.
///
/// The lists themselves are plain values; this only decides where they
/// live between requests.
#[derive(Clone, Default)]
pub struct NotificationBoard {
    inner: Arc<RwLock<HashMap<String, NotificationList>>>,
}

impl NotificationBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, user_id: &str) -> NotificationList {
        self.inner
            .read()
            .await
            .get(user_id)
            .cloned()
            .unwrap_or_default()
    }

    pub async fn merge(&self, user_id: &str, fresh: Vec<TriggeredAlert>) -> NotificationList {
        let mut map = self.inner.write().await;
        let current = map.remove(user_id).unwrap_or_default();
        let next = current.merge(fresh);
        map.insert(user_id.to_string(), next.clone());
        next
    }

    /// Returns the remaining list and whether `id` was present.
    pub async fn dismiss(&self, user_id: &str, id: &str) -> (NotificationList, bool) {
        let mut map = self.inner.write().await;
        let current = map.remove(user_id).unwrap_or_default();
        let found = current.contains(id);
        let next = current.dismiss(id);

        if !next.is_empty() {
            map.insert(user_id.to_string(), next.clone());
        }

        (next, found)
    }
}
