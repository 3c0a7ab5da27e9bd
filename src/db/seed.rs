// src/db/seed.rs
//
// Initial catalog data
//
// Inserts the default administrator and a handful of example rows the
// first time the application starts on an empty database. Runs as one
// transaction; failures are logged and swallowed so a broken seed never
// prevents startup.

use rusqlite::params;

use crate::db::connection::ConnectionPool;
use crate::domain::{EstadoCopia, Soporte};
use crate::error::AppResult;

/// Seed the catalog if no users exist yet
pub fn seed_if_empty(pool: &ConnectionPool) {
    if let Err(e) = try_seed(pool) {
        log::error!("database seeding failed: {}", e);
    }
}

fn try_seed(pool: &ConnectionPool) -> AppResult<()> {
    let mut conn = pool.get()?;

    let usuario_count: i64 = conn.query_row("SELECT COUNT(*) FROM usuarios", [], |row| row.get(0))?;
    if usuario_count > 0 {
        log::debug!("seed skipped: {} usuarios already present", usuario_count);
        return Ok(());
    }

    let tx = conn.transaction()?;

    tx.execute(
        "INSERT INTO usuarios (nombre_usuario, contrasena, es_admin) VALUES (?1, ?2, ?3)",
        params!["admin", "admin", true],
    )?;
    let admin_id = tx.last_insert_rowid();

    let peliculas = [
        (
            "El Señor de los Anillos: La Comunidad del Anillo",
            "Fantasía",
            2001,
            "Peter Jackson",
            "Un grupo de héroes intenta destruir el Anillo Único.",
        ),
        (
            "Matrix",
            "Ciencia ficción",
            1999,
            "Lana y Lilly Wachowski",
            "Un hacker descubre la verdadera naturaleza de su realidad.",
        ),
        (
            "El Padrino",
            "Drama",
            1972,
            "Francis Ford Coppola",
            "La historia de la familia Corleone en el mundo de la mafia.",
        ),
    ];

    let mut pelicula_ids = Vec::with_capacity(peliculas.len());
    for (titulo, genero, anio, director, descripcion) in peliculas {
        tx.execute(
            "INSERT INTO peliculas (titulo, genero, anio, descripcion, director)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![titulo, genero, anio, descripcion, director],
        )?;
        pelicula_ids.push(tx.last_insert_rowid());
    }

    let copias = [
        (pelicula_ids[0], EstadoCopia::Nueva, Soporte::BluRay),
        (pelicula_ids[1], EstadoCopia::Buena, Soporte::Dvd),
        (pelicula_ids[2], EstadoCopia::Usada, Soporte::Vhs),
    ];

    for (pelicula_id, estado, soporte) in copias {
        tx.execute(
            "INSERT INTO copias (pelicula_id, usuario_id, estado, soporte)
             VALUES (?1, ?2, ?3, ?4)",
            params![pelicula_id, admin_id, estado.to_string(), soporte.to_string()],
        )?;
    }

    tx.commit()?;
    log::info!("seeded catalog with the admin user and example data");
    Ok(())
}
