//! CineMatch: a lookup service over a precomputed movie similarity matrix.
//!
//! The catalog and similarity artifacts are produced upstream and loaded as
//! opaque binary files at startup; this crate only ranks, enriches results
//! through TMDB, and serves the interactive session surface.

pub mod api;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod services;
pub mod session;
pub mod store;
