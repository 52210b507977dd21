//! Shared test infrastructure: a contact store in a throwaway directory and
//! the full route table wired the way `main` wires it.

#![allow(dead_code)]

use actix_web::{App, web};
use tempfile::TempDir;

use landing_api::models::contact::ContactStore;
use landing_api::models::content::{Catalog, DEFAULT_CONTENT};
use landing_api::validate::NewContact;

/// A store backed by a fresh temp dir. Keep the `TempDir` alive for the
/// duration of the test.
pub fn setup_store() -> (TempDir, ContactStore) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = ContactStore::new(dir.path());
    (dir, store)
}

pub fn builtin_catalog() -> Catalog {
    Catalog::from_json(DEFAULT_CONTENT).expect("built-in content parses")
}

pub fn new_contact(name: &str, email: &str, message: &str) -> NewContact {
    NewContact {
        name: name.to_string(),
        email: email.to_string(),
        message: message.to_string(),
    }
}

/// App with the real route table over the given store.
pub fn test_app(
    store: web::Data<ContactStore>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(builtin_catalog()))
        .app_data(store)
        .configure(landing_api::handlers::configure)
}
