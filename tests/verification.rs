//! Verification integration tests.
//!
//! - Determinism tests: fixed seeds reproduce fixed outputs
//! - Metamorphic tests: relationships between differently-driven generators

mod verification {
    pub mod determinism;
    pub mod metamorphic;
}
