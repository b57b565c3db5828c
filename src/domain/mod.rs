// Domain layer - Pure types and derivations, no I/O
pub mod dashboard;
pub mod service;
pub mod target_group;
