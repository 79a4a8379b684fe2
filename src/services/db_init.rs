use mongodb::{bson::doc, Database, IndexModel};

pub async fn ensure_indexes(db: &Database) -> Result<(), String> {
    // alerts: per-user active scan, newest first
    let col = db.collection::<mongodb::bson::Document>("alerts");
    let model = IndexModel::builder()
        .keys(doc! { "user_id": 1, "active": 1, "created_at": -1 })
        .build();

    col.create_index(model, None)
        .await
        .map_err(|e| e.to_string())?;

    Ok(())
}
