use std::future::Future;

use chrono::Utc;
use futures_util::StreamExt;
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::options::FindOptions;
use mongodb::{Collection, Database};

use crate::{
    error::StoreError,
    models::{AlertDefinition, NewAlert},
};

/// Read path the evaluator depends on.
pub trait AlertStore: Send + Sync {
    /// Active definitions owned by `user_id`, in store order. Fails as a
    /// whole; never returns a partial list.
    fn list_active_alerts(
        &self,
        user_id: &str,
    ) -> impl Future<Output = Result<Vec<AlertDefinition>, StoreError>> + Send;
}

#[derive(Clone)]
pub struct MongoAlertStore {
    alerts: Collection<AlertDefinition>,
}

impl MongoAlertStore {
    pub fn new(db: &Database) -> Self {
        Self {
            alerts: db.collection::<AlertDefinition>("alerts"),
        }
    }

    async fn find_sorted(&self, filter: Document) -> Result<Vec<AlertDefinition>, StoreError> {
        let find_opts = FindOptions::builder()
            .sort(doc! { "created_at": -1 })
            .build();

        let mut cursor = self.alerts.find(filter, find_opts).await?;

        let mut items: Vec<AlertDefinition> = Vec::new();
        while let Some(res) = cursor.next().await {
            items.push(res?);
        }

        Ok(items)
    }

    /// Every alert of the user, inactive ones included. Newest first.
    pub async fn list_user_alerts(&self, user_id: &str) -> Result<Vec<AlertDefinition>, StoreError> {
        self.find_sorted(doc! { "user_id": user_id }).await
    }

    pub async fn create_alert(
        &self,
        user_id: &str,
        new_alert: NewAlert,
    ) -> Result<AlertDefinition, StoreError> {
        let kind = new_alert.validate()?;

        let alert = AlertDefinition {
            id: ObjectId::new(),
            user_id: user_id.to_string(),
            city: new_alert.city,
            condition_type: kind.as_str().to_string(),
            // rain carries no threshold
            threshold: if kind.needs_threshold() { new_alert.threshold } else { None },
            active: true,
            created_at: Utc::now().timestamp(),
        };

        self.alerts.insert_one(&alert, None).await?;

        tracing::info!(user_id, alert_id = %alert.id, kind = kind.as_str(), city = %alert.city, "alert created");

        Ok(alert)
    }

    pub async fn set_active(
        &self,
        user_id: &str,
        alert_id: ObjectId,
        active: bool,
    ) -> Result<(), StoreError> {
        let res = self
            .alerts
            .update_one(
                doc! { "_id": alert_id, "user_id": user_id },
                doc! { "$set": { "active": active } },
                None,
            )
            .await?;

        if res.matched_count == 0 {
            return Err(StoreError::NotFound);
        }

        Ok(())
    }

    pub async fn delete_alert(&self, user_id: &str, alert_id: ObjectId) -> Result<(), StoreError> {
        let res = self
            .alerts
            .delete_one(doc! { "_id": alert_id, "user_id": user_id }, None)
            .await?;

        if res.deleted_count == 0 {
            return Err(StoreError::NotFound);
        }

        Ok(())
    }
}

impl AlertStore for MongoAlertStore {
    async fn list_active_alerts(&self, user_id: &str) -> Result<Vec<AlertDefinition>, StoreError> {
        self.find_sorted(doc! { "user_id": user_id, "active": true }).await
    }
}
