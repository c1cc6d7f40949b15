//! JSON record factories with default test values.
//!
//! Factories return raw `serde_json::Value` records rather than typed
//! models so tests can exercise the exact shapes the store serves,
//! including legacy field spellings and string-encoded flags.

use serde_json::{json, Value};

/// Create a mock career record.
pub fn career(id: &str, nombre: &str, facultad: &str) -> Value {
    json!({
        "id": id,
        "nombre": nombre,
        "facultad": facultad,
    })
}

/// Create a mock student record with default test values.
///
/// # Arguments
/// - `apellidos` - Optional surname; `None` simulates records saved
///   without one
/// - `id_carrera` / `id_cuarto` - Optional references to a career and a
///   room
pub fn student(
    id: &str,
    nombre: &str,
    apellidos: Option<&str>,
    id_carrera: Option<&str>,
    id_cuarto: Option<&str>,
) -> Value {
    json!({
        "id": id,
        "nombre": nombre,
        "apellidos": apellidos,
        "ci": "99010112345",
        "sexo": "F",
        "id_carrera": id_carrera,
        "id_cuarto": id_cuarto,
        "telefono": "53512345",
        "direccion": "Calle 23 #456",
    })
}

/// Create a mock room record.
pub fn room(
    id: &str,
    numero: i64,
    id_planta: Option<&str>,
    capacidad: i64,
    cantidad_estudiantes: i64,
) -> Value {
    json!({
        "id": id,
        "numero": numero,
        "id_planta": id_planta,
        "capacidad": capacidad,
        "cantidad_estudiantes": cantidad_estudiantes,
    })
}

/// Create a mock floor record.
pub fn floor(id: &str, numero_planta: i64) -> Value {
    json!({
        "id": id,
        "numero_planta": numero_planta,
    })
}

/// Create a mock building record using the current reference spelling.
pub fn building(id: &str, numero_bloque: &str, id_residencia: Option<&str>) -> Value {
    json!({
        "id": id,
        "numero_bloque": numero_bloque,
        "id_residencia": id_residencia,
    })
}

/// Create a mock building record carrying the legacy `residencia` field.
pub fn building_legacy(id: &str, numero_bloque: &str, residencia: &str) -> Value {
    json!({
        "id": id,
        "numero_bloque": numero_bloque,
        "residencia": residencia,
    })
}

/// Create a mock residence record.
pub fn residence(id: &str, direccion: &str) -> Value {
    json!({
        "id": id,
        "direccion": direccion,
    })
}

/// Create a mock inspection record.
///
/// # Arguments
/// - `realizada` / `especial` - Passed as raw JSON so tests can feed the
///   boolean or the string encoding of each flag
pub fn inspection(
    id: &str,
    id_estudiante: Option<&str>,
    fecha: &str,
    realizada: Value,
    especial: Value,
) -> Value {
    json!({
        "id": id,
        "id_estudiante": id_estudiante,
        "fecha": fecha,
        "realizada": realizada,
        "especial": especial,
        "justificacion": "",
    })
}

/// Create a mock evaluation record using the current reference spelling.
pub fn evaluation(
    id: &str,
    id_estudiante: Option<&str>,
    fecha: &str,
    calificacion: Value,
    semestre: &str,
) -> Value {
    json!({
        "id": id,
        "id_estudiante": id_estudiante,
        "fecha": fecha,
        "calificacion": calificacion,
        "semestre": semestre,
        "observacion": "",
    })
}

/// Create a mock evaluation record saved under the renamed
/// `id_estudiantes` field.
pub fn evaluation_renamed(
    id: &str,
    id_estudiantes: &str,
    fecha: &str,
    calificacion: Value,
    semestre: &str,
) -> Value {
    json!({
        "id": id,
        "id_estudiantes": id_estudiantes,
        "fecha": fecha,
        "calificacion": calificacion,
        "semestre": semestre,
        "observacion": "",
    })
}

/// Create a mock inventory item record.
pub fn inventory_item(
    id: &str,
    numero_inventario: &str,
    tipo: &str,
    estado: &str,
    id_cuarto: Option<&str>,
) -> Value {
    json!({
        "id": id,
        "numero_inventario": numero_inventario,
        "tipo": tipo,
        "estado": estado,
        "id_cuarto": id_cuarto,
    })
}

/// Create a mock sanction record using the current lowercase fields.
pub fn sanction(id: &str, id_estudiante: Option<&str>, fecha: &str, motivo: &str) -> Value {
    json!({
        "id": id,
        "id_estudiante": id_estudiante,
        "fecha": fecha,
        "motivo": motivo,
        "descripcion": "",
    })
}

/// Create a mock sanction record the way the oldest schema wrote them:
/// renamed student reference and capitalized field names.
pub fn sanction_legacy(id: &str, id_estudiantes: &str, fecha: &str, motivo: &str) -> Value {
    json!({
        "id": id,
        "id_estudiantes": id_estudiantes,
        "Fecha": fecha,
        "Motivo": motivo,
        "Descripcion": "Registrado con el esquema anterior",
    })
}

/// Create a mock user profile record.
pub fn user(id: &str, email: Option<&str>, username: Option<&str>) -> Value {
    json!({
        "id": id,
        "email": email,
        "username": username,
    })
}

/// Wrap records in the list envelope the store returns.
pub fn list_body(items: &[Value]) -> Value {
    json!({
        "page": 1,
        "perPage": 30,
        "totalItems": items.len(),
        "items": items,
    })
}

/// Body returned by the password authentication endpoint.
pub fn auth_body(token: &str, record: &Value) -> Value {
    json!({
        "token": token,
        "record": record,
    })
}
