//! DTO modules that bridge the store with the leads API.

pub mod api;
