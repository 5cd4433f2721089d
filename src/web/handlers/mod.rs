//! HTML page and form handlers.

pub mod auth;
pub mod error;
pub mod home;
pub mod redirect;
pub mod settings;
pub mod websites;

pub use auth::{
    login_handler, login_page_handler, logout_handler, register_handler, register_page_handler,
};
pub use error::{WebError, not_found_handler};
pub use home::{contact_handler, index_handler};
pub use redirect::resolve_handler;
pub use settings::settings_handler;
pub use websites::{create_website_handler, delete_website_handler};
