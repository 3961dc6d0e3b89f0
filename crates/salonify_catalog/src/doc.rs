// File: crates/salonify_catalog/src/doc.rs

#![allow(dead_code)]
#![cfg(feature = "openapi")]
use utoipa::OpenApi;

use salonify_common::models::Service;

#[utoipa::path(
    get,
    path = "/catalog/services",
    responses(
        (status = 200, description = "The service catalog", body = [Service]),
        (status = 502, description = "POS catalog unavailable", body = String)
    )
)]
fn doc_list_services_handler() {}

#[utoipa::path(
    get,
    path = "/catalog/services/{service_id}",
    params(("service_id" = String, Path, description = "Catalog service id")),
    responses(
        (status = 200, description = "The service", body = Service),
        (status = 404, description = "No such service", body = String),
        (status = 502, description = "POS catalog unavailable", body = String)
    )
)]
fn doc_get_service_handler() {}

#[derive(OpenApi)]
#[openapi(
    paths(doc_list_services_handler, doc_get_service_handler),
    components(schemas(Service)),
    tags(
        (name = "catalog", description = "POS service catalog API")
    ),
    servers(
        (url = "/api", description = "Catalog API server")
    )
)]
pub struct CatalogApiDoc;
