//! Mobile-facing bindings for FieldCal core.

pub mod api;
