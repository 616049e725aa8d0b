pub mod catalog;
pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod media;
pub mod models;
pub mod routes;
pub mod templates;

use crate::catalog::Catalog;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Catalog,
}
