use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer, Result as ActixResult};
use buildcraft_core::Error;
use buildcraft_storage::{CatalogManager, CatalogSource};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, warn};

pub const DEFAULT_TOP_K: usize = 10;
pub const DEFAULT_PHASE: &str = "mid";

#[derive(Deserialize)]
struct RankQuery {
    phase: Option<String>,
    top_k: Option<usize>,
}

impl RankQuery {
    fn phase(&self) -> &str {
        self.phase.as_deref().unwrap_or(DEFAULT_PHASE)
    }

    fn top_k(&self) -> usize {
        self.top_k.unwrap_or(DEFAULT_TOP_K)
    }
}

#[derive(Deserialize)]
struct CompareQuery {
    a: String,
    b: String,
    phase: Option<String>,
    top_k: Option<usize>,
}

fn error_response(e: &Error) -> HttpResponse {
    let body = serde_json::json!({ "error": e.to_string() });
    match e {
        Error::NotFound(_) => HttpResponse::NotFound().json(body),
        Error::InvalidPhase(_) => HttpResponse::BadRequest().json(body),
        Error::Fetch(_) => HttpResponse::BadGateway().json(body),
        _ => HttpResponse::InternalServerError().json(body),
    }
}

fn respond<T: serde::Serialize>(result: buildcraft_core::Result<T>) -> ActixResult<HttpResponse> {
    match result {
        Ok(value) => Ok(HttpResponse::Ok().json(serde_json::json!({ "result": value }))),
        Err(e) => {
            debug!("Request failed: {}", e);
            Ok(error_response(&e))
        }
    }
}

/// Register every route. `S` is the source used by `POST /catalog/reload`.
pub fn routes<S>(cfg: &mut web::ServiceConfig)
where
    S: CatalogSource + Send + Sync + 'static,
{
    cfg.route("/health", web::get().to(health))
        .route("/catalog/reload", web::post().to(reload::<S>))
        .route("/champions", web::get().to(list_champions))
        .route("/champions/{name}", web::get().to(analyze))
        .route("/champions/{name}/recommendations", web::get().to(recommend))
        .route("/champions/{name}/summary", web::get().to(summary))
        .route("/items/{name}", web::get().to(get_item))
        .route("/compare", web::get().to(compare));
}

pub struct RestApi;

impl RestApi {
    pub async fn start<S>(manager: Arc<CatalogManager>, source: Arc<S>, port: u16) -> std::io::Result<()>
    where
        S: CatalogSource + Send + Sync + 'static,
    {
        HttpServer::new(move || {
            let cors = Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600);

            App::new()
                .wrap(cors)
                .app_data(web::Data::new(manager.clone()))
                .app_data(web::Data::new(source.clone()))
                .configure(routes::<S>)
        })
        .bind(("0.0.0.0", port))?
        .run()
        .await
    }
}

async fn health(manager: web::Data<Arc<CatalogManager>>) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(manager.stats()))
}

async fn reload<S>(
    manager: web::Data<Arc<CatalogManager>>,
    source: web::Data<Arc<S>>,
) -> ActixResult<HttpResponse>
where
    S: CatalogSource + Send + Sync + 'static,
{
    let result = manager.load(&***source).await;
    if let Err(e) = &result {
        warn!("Catalog reload failed: {}", e);
    }
    respond(result)
}

async fn list_champions(manager: web::Data<Arc<CatalogManager>>) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "result": manager.champions()
    })))
}

async fn analyze(
    manager: web::Data<Arc<CatalogManager>>,
    path: web::Path<String>,
) -> ActixResult<HttpResponse> {
    respond(manager.analyze(&path.into_inner()))
}

async fn recommend(
    manager: web::Data<Arc<CatalogManager>>,
    path: web::Path<String>,
    query: web::Query<RankQuery>,
) -> ActixResult<HttpResponse> {
    respond(manager.recommend(&path.into_inner(), query.phase(), query.top_k()))
}

async fn summary(
    manager: web::Data<Arc<CatalogManager>>,
    path: web::Path<String>,
    query: web::Query<RankQuery>,
) -> ActixResult<HttpResponse> {
    respond(manager.summarize(&path.into_inner(), query.phase(), query.top_k()))
}

async fn get_item(
    manager: web::Data<Arc<CatalogManager>>,
    path: web::Path<String>,
) -> ActixResult<HttpResponse> {
    respond(manager.item(&path.into_inner()))
}

async fn compare(
    manager: web::Data<Arc<CatalogManager>>,
    query: web::Query<CompareQuery>,
) -> ActixResult<HttpResponse> {
    respond(manager.compare(
        &query.a,
        &query.b,
        query.phase.as_deref().unwrap_or(DEFAULT_PHASE),
        query.top_k.unwrap_or(DEFAULT_TOP_K),
    ))
}
