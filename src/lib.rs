//! Backend core for an anime streaming and discovery web app.
//!
//! Two independent feature modules:
//! - `modules::auth` — login/signup flow against an external identity
//!   platform, plus initial profile seeding into an external document store.
//! - `modules::search` — free-text search aggregated over two external
//!   content catalogs, with typed fetch state and view-model building.
//!
//! All external collaborators sit behind repository traits in each module's
//! domain layer; reqwest-backed clients live in the infrastructure layers.

pub mod modules;
pub mod shared;
