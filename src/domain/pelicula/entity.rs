use serde::{Deserialize, Serialize};

/// A movie title registered in the catalog.
///
/// Peliculas are created by administrators, listed in the copy form's
/// picker and never edited or deleted through the application surface.
/// Copies reference a pelicula by id; there is no back-reference here
/// (reverse lookups go through `CopiaRepository::find_by_movie`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pelicula {
    /// Row identity; `None` until the pelicula is persisted
    pub id: Option<i64>,

    pub titulo: String,

    pub genero: String,

    /// Release year; range-checked at validation time only, the
    /// persistence layer accepts any integer
    pub anio: i32,

    pub descripcion: Option<String>,

    pub director: Option<String>,
}

impl Pelicula {
    pub fn new(titulo: String, genero: String, anio: i32) -> Self {
        Self {
            id: None,
            titulo,
            genero,
            anio,
            descripcion: None,
            director: None,
        }
    }
}

impl std::fmt::Display for Pelicula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.titulo, self.anio)
    }
}
