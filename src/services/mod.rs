//! Business logic services, one module per domain area.

pub mod appointment;
pub mod auth;
pub mod dashboard;
pub mod doctor;
pub mod hospital;
pub mod patient;
