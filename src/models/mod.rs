//! Database models and DTOs for all domain entities.

pub mod appointment;
pub mod doctor;
pub mod hospital;
pub mod patient;
pub mod user;
