//! Recipe catalog core shared by the frontend: data model, bundled data,
//! and the URL query codec that drives filtering.

extern crate serde;


pub mod catalog;
pub mod duration_range;
pub mod error;
pub mod ingredients;
pub mod recipe;
pub mod romaji;
pub mod search_query;
