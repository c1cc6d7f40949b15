use serde::Deserialize;

/// A residence complex; managed elsewhere, read-only in this backend.
#[derive(Clone, Debug, Deserialize)]
pub struct Residence {
    pub id: String,
    #[serde(default)]
    pub direccion: String,
}
