//! Server construction and middleware wiring.

mod config;
mod state_builders;

pub use config::{ServerConfig, ServerSettings};
pub use state_builders::Stores;

use state_builders::build_http_state;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use homework::Trace;
#[cfg(debug_assertions)]
use homework::doc::ApiDoc;
use homework::domain::ports::{ArchiveRepository, EntityRepository};
use homework::inbound::http::archive::get_archive;
use homework::inbound::http::assignments::{list_assignments, submit_assignment};
use homework::inbound::http::health::{HealthState, live, ready};
use homework::inbound::http::state::HttpState;
use homework::inbound::http::users::find_user;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(find_user)
        .service(list_assignments)
        .service(submit_assignment)
        .service(get_archive)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server over the given stores.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server<E, A>(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
    stores: Stores<E, A>,
) -> std::io::Result<Server>
where
    E: EntityRepository + 'static,
    A: ArchiveRepository + 'static,
{
    let server_health_state = health_state.clone();
    let http_state = build_http_state(&config, stores);

    let server = HttpServer::new(move || build_app(server_health_state.clone(), http_state.clone()))
        .bind(config.bind_addr())?
        .run();

    health_state.mark_ready();
    Ok(server)
}
