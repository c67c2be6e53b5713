use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;

use crate::shared::sort::SortKey;
use crate::AppState;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    projects: &'static str,
    experiences: &'static str,
    skills: &'static str,
}

fn catalog_status<T, E>(result: Result<T, E>) -> &'static str {
    match result {
        Ok(_) => "ok",
        Err(_) => "unhealthy",
    }
}

/// LIVENESS PROBE
/// - No catalog access
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// READINESS PROBE
/// - Every catalog answers a read
#[get("/ready")]
pub async fn readiness(data: web::Data<AppState>) -> impl Responder {
    let projects = catalog_status(
        data.project
            .get_list
            .execute(Default::default(), SortKey::parse(""))
            .await,
    );
    let experiences = catalog_status(data.experience.get_list.execute(SortKey::parse("")).await);
    let skills = catalog_status(data.skill.get_list.execute(None).await);

    let all_ok = [projects, experiences, skills].iter().all(|s| *s == "ok");

    let body = ReadinessResponse {
        status: if all_ok { "ok" } else { "unhealthy" },
        projects,
        experiences,
        skills,
    };

    if all_ok {
        HttpResponse::Ok().json(body)
    } else {
        HttpResponse::ServiceUnavailable().json(body)
    }
}
