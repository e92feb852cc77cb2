//! Top-level facade crate for metrica.
//!
//! Re-exports the core types and the server library so users can depend on a single crate.

pub mod core {
    pub use metrica_core::*;
}

pub mod server {
    pub use metrica_server::*;
}
