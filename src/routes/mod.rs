//! Route definitions for the CareDesk API.

pub mod appointments;
pub mod auth;
pub mod dashboard;
pub mod doctors;
pub mod health;
pub mod hospitals;
pub mod patients;

use axum::routing::get;
use axum::Router;

use crate::AppState;

/// Build the full `/api` route tree.
pub fn api_router() -> Router<AppState> {
    let auth_routes = Router::new()
        .route("/auth/register", axum::routing::post(auth::register))
        .route("/auth/login", axum::routing::post(auth::login))
        .route("/auth/me", get(auth::me));

    let patient_routes = Router::new()
        .route("/patients", get(patients::list).post(patients::create))
        .route("/patients/my-profile", get(patients::my_profile))
        .route(
            "/patients/{id}",
            get(patients::get_by_id)
                .put(patients::update)
                .delete(patients::delete),
        );

    let doctor_routes = Router::new()
        .route("/doctors", get(doctors::list).post(doctors::create))
        .route(
            "/doctors/{id}",
            get(doctors::get_by_id)
                .put(doctors::update)
                .delete(doctors::delete),
        );

    let hospital_routes = Router::new()
        .route("/hospitals", get(hospitals::list).post(hospitals::create))
        .route(
            "/hospitals/{id}",
            get(hospitals::get_by_id)
                .put(hospitals::update)
                .delete(hospitals::delete),
        );

    let appointment_routes = Router::new()
        .route(
            "/appointments",
            get(appointments::list).post(appointments::create),
        )
        .route(
            "/appointments/my-appointments",
            get(appointments::my_appointments),
        )
        .route(
            "/appointments/{id}",
            get(appointments::get_by_id)
                .put(appointments::update)
                .delete(appointments::delete),
        );

    Router::new().nest(
        "/api",
        Router::new()
            .merge(auth_routes)
            .merge(patient_routes)
            .merge(doctor_routes)
            .merge(hospital_routes)
            .merge(appointment_routes)
            .route("/dashboard/stats", get(dashboard::stats))
            .route("/health", get(health::live))
            .route("/health/ready", get(health::ready)),
    )
}
