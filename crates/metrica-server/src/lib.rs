//! metrica server library entry.
//!
//! This crate wires the in-memory store, its repositories, the update
//! service and the HTTP boundary into a single server stack. It is intended
//! to be consumed by the binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod handlers;
pub mod router;
pub mod server;
pub mod service;
pub mod storage;
