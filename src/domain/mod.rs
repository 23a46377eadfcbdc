//! Domain types shared by the lead store, the forms and the HTTP transport.

pub mod lead;
pub mod query;
pub mod stats;
pub mod types;
