use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Condition of a basic inventory item.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub enum ItemState {
    Bueno,
    Regular,
    Malo,
    /// Anything outside the known set; the store does not validate this
    /// field.
    Desconocido,
}

impl ItemState {
    fn from_wire(value: &str) -> Self {
        match value {
            "Bueno" => ItemState::Bueno,
            "Regular" => ItemState::Regular,
            "Malo" => ItemState::Malo,
            _ => ItemState::Desconocido,
        }
    }
}

impl Default for ItemState {
    fn default() -> Self {
        ItemState::Desconocido
    }
}

impl fmt::Display for ItemState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ItemState::Bueno => "Bueno",
            ItemState::Regular => "Regular",
            ItemState::Malo => "Malo",
            ItemState::Desconocido => "Desconocido",
        };
        f.write_str(label)
    }
}

/// Accepts whatever the store holds; anything that is not one of the known
/// state strings reads as [`ItemState::Desconocido`].
fn state<'de, D>(deserializer: D) -> Result<ItemState, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value
        .as_str()
        .map(ItemState::from_wire)
        .unwrap_or_default())
}

/// A basic inventory item ("medio básico") assigned to a room.
#[derive(Clone, Debug, Deserialize)]
pub struct InventoryItem {
    pub id: String,
    #[serde(default)]
    pub numero_inventario: String,
    #[serde(default)]
    pub tipo: String,
    #[serde(default, deserialize_with = "state")]
    pub estado: ItemState,
    #[serde(default)]
    pub id_cuarto: Option<String>,
}

/// Payload for creating or updating an inventory item.
#[derive(Clone, Debug, Serialize)]
pub struct InventoryItemInput {
    pub numero_inventario: String,
    pub tipo: String,
    pub estado: ItemState,
    pub id_cuarto: String,
}
