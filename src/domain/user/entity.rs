use serde::{Deserialize, Serialize};

/// An account that can log in and own copies.
///
/// Users are created at seed time; there is no self-registration flow.
/// The password is stored as plain text for parity with the seeded
/// credentials; the comparison itself lives behind the auth service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Row identity; `None` until the user is persisted
    pub id: Option<i64>,

    /// Login name, unique across the catalog
    pub nombre_usuario: String,

    /// Plain-text credential (known defect, see AuthService)
    pub contrasena: String,

    /// Administrators may register new peliculas
    pub es_admin: bool,
}

impl User {
    pub fn new(nombre_usuario: String, contrasena: String, es_admin: bool) -> Self {
        Self {
            id: None,
            nombre_usuario,
            contrasena,
            es_admin,
        }
    }
}
