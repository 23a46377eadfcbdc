//! Client-side state management for a CRM sales dashboard's leads.
//!
//! The `data` feature exposes the domain types and forms only. The default
//! `client` feature adds the collection store, the operation tracker, the
//! `reqwest` transport and the services that tie them together.

#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod forms;
#[cfg(feature = "data")]
pub mod pagination;

#[cfg(feature = "client")]
pub mod api;
#[cfg(feature = "client")]
pub mod dto;
#[cfg(feature = "client")]
pub mod models;
#[cfg(feature = "client")]
pub mod services;
#[cfg(feature = "client")]
pub mod store;
