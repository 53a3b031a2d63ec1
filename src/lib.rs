//! Morning Dashboard - a static HTML start page generator
//!
//! This crate fetches headlines from a fixed set of RSS/Atom feeds and
//! renders them, together with a random quote, a weather link and quick
//! links, into a single HTML file.

pub mod config;
pub mod dashboard;
pub mod error;
pub mod fetcher;
pub mod render;
