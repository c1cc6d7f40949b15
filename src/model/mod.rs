//! Wire-level record types for the store's collections.
//!
//! Field names mirror the backing store's schema exactly, Spanish names
//! included. Several collections carry records saved under older field
//! spellings; those types expose accessors that try the current name first
//! and fall back to the historical one, so no call site repeats the chain.

mod building;
mod career;
mod collection;
mod evaluation;
pub(crate) mod fields;
mod floor;
mod inspection;
mod inventory;
mod residence;
mod room;
mod sanction;
mod student;

pub use building::{Building, BuildingInput};
pub use career::{Career, CareerInput};
pub use collection::Collection;
pub use evaluation::{Evaluation, EvaluationInput};
pub use fields::as_flag;
pub use floor::{Floor, FloorInput};
pub use inspection::{InspectionInput, RoomInspection};
pub use inventory::{InventoryItem, InventoryItemInput, ItemState};
pub use residence::Residence;
pub use room::{Room, RoomInput};
pub use sanction::{Sanction, SanctionInput};
pub use student::{Student, StudentInput};
