//! Create/update/delete flow against the record store.

#[cfg(test)]
mod tests;

use serde::Serialize;

use crate::{error::Error, model::Collection, store::CollectionStore};

/// Applies record mutations and keeps the snapshot in step.
///
/// Each mutation is a single client call; only after the store accepts it
/// is the whole snapshot reloaded, so the next render always reflects the
/// caller's own write. A rejected mutation changes nothing locally and
/// hands back the store's message for the notification banner.
pub struct RecordService<'a> {
    store: &'a CollectionStore,
}

impl<'a> RecordService<'a> {
    /// Creates a new instance of [`RecordService`] over `store`.
    pub fn new(store: &'a CollectionStore) -> Self {
        Self { store }
    }

    /// Creates a record in `collection`, then reloads every collection.
    pub async fn create<B>(&self, collection: Collection, fields: &B) -> Result<(), Error>
    where
        B: Serialize + ?Sized,
    {
        self.store
            .client()
            .create::<serde_json::Value, B>(collection, fields)
            .await?;
        tracing::info!(%collection, "record created");
        self.store.reload_all().await
    }

    /// Updates one record, then reloads every collection.
    pub async fn update<B>(
        &self,
        collection: Collection,
        id: &str,
        fields: &B,
    ) -> Result<(), Error>
    where
        B: Serialize + ?Sized,
    {
        self.store
            .client()
            .update::<serde_json::Value, B>(collection, id, fields)
            .await?;
        tracing::info!(%collection, id, "record updated");
        self.store.reload_all().await
    }

    /// Deletes one record, then reloads every collection.
    pub async fn delete(&self, collection: Collection, id: &str) -> Result<(), Error> {
        self.store.client().delete(collection, id).await?;
        tracing::info!(%collection, id, "record deleted");
        self.store.reload_all().await
    }
}
