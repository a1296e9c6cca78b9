//! Registry layer for catalog entities.
//!
//! # Responsibility
//! - Define the storage contract services query against.
//! - Keep registry bookkeeping out of the derived-query logic.
//!
//! # Invariants
//! - Registries preserve insertion order and are never pruned.
//! - Every stored article references a registered author and magazine.

pub mod catalog_repo;
