//! Schedule domain model.
//!
//! # Responsibility
//! - Define the normalized schedule record shared by calendar projections.
//! - Represent loosely-typed upstream payloads as an explicit sum type.
//!
//! # Invariants
//! - A `ScheduleEntry` always carries a non-empty `date` and `activity`.
//! - Payload shape is decided once at the boundary, never re-inspected later.

pub mod category;
pub mod payload;
pub mod schedule;
