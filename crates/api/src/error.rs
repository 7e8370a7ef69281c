use actix_web::{
    http::{header, StatusCode},
    HttpResponse,
};
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

pub const NON_FIELD_ERRORS: &str = "non_field_errors";

/// Field name to error messages mapping, rendered as the body of a
/// 400 response. Failures that do not belong to a single field are
/// keyed under `non_field_errors`.
#[derive(Debug, Default, Clone, Serialize)]
pub struct ValidationErrors(BTreeMap<&'static str, Vec<String>>);

impl ValidationErrors {
    pub fn field(field: &'static str, message: impl Into<String>) -> Self {
        let mut errors = Self::default();
        errors.add(field, message);
        errors
    }

    pub fn non_field(message: impl Into<String>) -> Self {
        Self::field(NON_FIELD_ERRORS, message)
    }

    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_default().push(message.into());
    }
}

#[derive(Error, Debug)]
pub enum ReminduError {
    #[error("Internal server error")]
    InternalError,
    #[error("Invalid data provided")]
    Validation(ValidationErrors),
}

impl actix_web::error::ResponseError for ReminduError {
    fn status_code(&self) -> StatusCode {
        match *self {
            Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            Self::Validation(errors) => HttpResponse::build(self.status_code()).json(errors),
            _ => HttpResponse::build(self.status_code())
                .insert_header((header::CONTENT_TYPE, "text/html; charset=utf-8"))
                .body(self.to_string()),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn validation_errors_serialize_to_a_field_map() {
        let errors = ValidationErrors::field("date", "Date is required.");
        let json = serde_json::to_string(&errors).unwrap();
        assert_eq!(json, r#"{"date":["Date is required."]}"#);
    }

    #[test]
    fn non_field_errors_have_their_own_key() {
        let errors = ValidationErrors::non_field("Invalid date and time combination.");
        let json = serde_json::to_string(&errors).unwrap();
        assert_eq!(
            json,
            r#"{"non_field_errors":["Invalid date and time combination."]}"#
        );
    }
}
