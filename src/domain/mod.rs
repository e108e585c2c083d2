//! Domain Layer
//!
//! The task-graph model, free of I/O.
//!
//! ## Structure
//!
//! - `entities/` - Documents, generation units, aggregate and compile nodes
//! - `value_objects/` - Derived identity, generator options, source roots
//! - `services/` - Task registry and graph construction
//! - `ports/` - Interfaces for discovery and the external generator

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
