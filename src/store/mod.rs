//! In-memory snapshot of the store's collections.

#[cfg(test)]
mod tests;

use std::sync::{Arc, RwLock};

use futures::try_join;
use serde::de::DeserializeOwned;

use crate::{
    client::Client,
    error::Error,
    model::{
        Building, Career, Collection, Evaluation, Floor, InventoryItem, Residence, Room,
        RoomInspection, Sanction, Student,
    },
};

/// One consistent copy of every collection, taken by a single reload.
///
/// Record order within each list is whatever the store returned; it is not
/// guaranteed stable across reloads.
#[derive(Clone, Debug, Default)]
pub struct Snapshot {
    pub carreras: Vec<Career>,
    pub estudiantes: Vec<Student>,
    pub cuartos: Vec<Room>,
    pub plantas: Vec<Floor>,
    pub edificios: Vec<Building>,
    pub cuartelerias: Vec<RoomInspection>,
    pub evaluaciones: Vec<Evaluation>,
    pub medios: Vec<InventoryItem>,
    pub sanciones: Vec<Sanction>,
    pub residencias: Vec<Residence>,
}

/// Holds the latest [`Snapshot`] and the client used to refresh it.
///
/// The snapshot is replaced behind an `Arc` swap: readers keep whatever
/// copy they were handed, so a reload in progress can never expose a mix
/// of old and new collections.
pub struct CollectionStore {
    client: Client,
    snapshot: RwLock<Arc<Snapshot>>,
}

impl CollectionStore {
    /// Creates a new instance of [`CollectionStore`] with an empty
    /// snapshot.
    pub fn new(client: Client) -> Self {
        Self {
            client,
            snapshot: RwLock::new(Arc::new(Snapshot::default())),
        }
    }

    /// The client this store refreshes through.
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Current snapshot; empty until the first successful
    /// [`CollectionStore::reload_all`].
    pub fn snapshot(&self) -> Arc<Snapshot> {
        self.snapshot.read().unwrap().clone()
    }

    /// Refetches every collection and replaces the snapshot atomically.
    ///
    /// The per-collection fetches run concurrently and are joined
    /// together. If any one of them fails the previous snapshot stays in
    /// place and the error names the collection that broke the reload;
    /// there is no partial replacement.
    pub async fn reload_all(&self) -> Result<(), Error> {
        let (
            carreras,
            estudiantes,
            cuartos,
            plantas,
            edificios,
            cuartelerias,
            evaluaciones,
            medios,
            sanciones,
            residencias,
        ) = try_join!(
            self.load::<Career>(Collection::Carreras),
            self.load::<Student>(Collection::Estudiantes),
            self.load::<Room>(Collection::Cuartos),
            self.load::<Floor>(Collection::Plantas),
            self.load::<Building>(Collection::Edificios),
            self.load::<RoomInspection>(Collection::Cuartelerias),
            self.load::<Evaluation>(Collection::Evaluaciones),
            self.load::<InventoryItem>(Collection::MediosBasicos),
            self.load::<Sanction>(Collection::SancionDisciplinarias),
            self.load::<Residence>(Collection::Residencias),
        )?;

        let next = Snapshot {
            carreras,
            estudiantes,
            cuartos,
            plantas,
            edificios,
            cuartelerias,
            evaluaciones,
            medios,
            sanciones,
            residencias,
        };

        *self.snapshot.write().unwrap() = Arc::new(next);
        tracing::debug!("snapshot replaced");
        Ok(())
    }

    async fn load<T: DeserializeOwned>(&self, collection: Collection) -> Result<Vec<T>, Error> {
        self.client.list(collection).await.map_err(|source| {
            tracing::error!(%collection, error = %source, "collection fetch failed during reload");
            Error::CollectionLoad {
                collection: collection.name(),
                source: Box::new(source),
            }
        })
    }
}
