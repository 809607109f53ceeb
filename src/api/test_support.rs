use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{web, App, Error};
use serde_json::Value;
use std::sync::Arc;

use crate::database::memory::MemoryStore;
use crate::database::Store;

/// App with every route wired to the given in-memory store.
pub fn test_app(
    store: Arc<MemoryStore>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = Error,
        InitError = (),
    >,
> {
    let handle: Arc<dyn Store> = store;
    App::new()
        .app_data(web::Data::from(handle))
        .configure(crate::api::configure)
}

pub fn hex_id(value: &Value) -> String {
    value.as_str().expect("identifier rendered as hex string").to_string()
}
