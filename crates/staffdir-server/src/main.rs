use axum::{routing::get, Json, Router};
use serde::Serialize;
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod adapters;
mod application;
mod models;
mod routes;

use adapters::{PgDepartmentRepository, PgEmployeeRepository};
use application::{DepartmentService, EmployeeService};

/// Type aliases for application services with concrete repository implementations
pub type AppDepartmentService =
    DepartmentService<PgDepartmentRepository, PgEmployeeRepository>;
pub type AppEmployeeService = EmployeeService<PgEmployeeRepository, PgDepartmentRepository>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub department_service: Arc<AppDepartmentService>,
    pub employee_service: Arc<AppEmployeeService>,
}

#[derive(Serialize)]
struct Welcome {
    success: bool,
    message: String,
    endpoints: Endpoints,
}

#[derive(Serialize)]
struct Endpoints {
    departments: String,
    employees: String,
    health: String,
}

async fn root() -> Json<Welcome> {
    Json(Welcome {
        success: true,
        message: "Welcome to the Staffdir employee directory API".to_string(),
        endpoints: Endpoints {
            departments: "/api/departments".to_string(),
            employees: "/api/employees".to_string(),
            health: "/api/health".to_string(),
        },
    })
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    timestamp: chrono::DateTime<chrono::Utc>,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "OK".to_string(),
        message: "Staffdir API is running".to_string(),
        timestamp: chrono::Utc::now(),
    })
}

#[shuttle_runtime::main]
async fn main(#[shuttle_shared_db::Postgres] pool: PgPool) -> shuttle_axum::ShuttleAxum {
    tracing::info!("Staffdir API initializing...");

    // Run migrations
    sqlx::migrate!()
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    tracing::info!("Database migrations completed");

    // Initialize application services
    let department_repo = Arc::new(PgDepartmentRepository::new(pool.clone()));
    let employee_repo = Arc::new(PgEmployeeRepository::new(pool.clone()));
    let department_service = Arc::new(DepartmentService::new(
        department_repo.clone(),
        employee_repo.clone(),
    ));
    let employee_service = Arc::new(EmployeeService::new(employee_repo, department_repo));

    // Create application state
    let state = AppState {
        department_service,
        employee_service,
    };

    // OpenAPI documentation
    let openapi = routes::swagger::ApiDoc::openapi();

    // Build router with shared state
    let router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/", get(root))
        .route("/api/health", get(health_check))
        .merge(routes::departments::router())
        .merge(routes::employees::router())
        .layer(CorsLayer::permissive())
        .with_state(state);

    tracing::info!("Swagger UI: /swagger-ui");
    tracing::info!("Staffdir API ready");

    Ok(router.into())
}
