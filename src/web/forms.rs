//! Form payloads accepted by the web handlers.
//!
//! Missing fields deserialize as empty strings so that validation, not the
//! extractor, reports them.

use serde::Deserialize;
use validator::{Validate, ValidationErrors};

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterForm {
    #[serde(default)]
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct LoginForm {
    #[serde(default)]
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// New short-name entry.
///
/// Field names follow the landing page form (`Website`, `Address`); the
/// snake-case names are accepted too.
#[derive(Debug, Deserialize, Validate)]
pub struct WebsiteForm {
    #[serde(rename = "Website", alias = "website_name", default)]
    #[validate(length(min = 1, message = "Website name is required"))]
    pub name: String,
    #[serde(rename = "Address", alias = "website_address", default)]
    #[validate(length(min = 1, message = "Website address is required"))]
    pub address: String,
}

/// Flattens field errors into display messages, ordered by field name.
pub fn validation_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .flat_map(|(field, field_errors)| {
            field_errors.iter().map(move |e| match &e.message {
                Some(message) => message.to_string(),
                None => format!("{field} is invalid"),
            })
        })
        .collect()
}
