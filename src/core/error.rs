use crate::dtos::PatchError;
use axum::{Json, extract::rejection::JsonRejection, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::error;

/// Errori di validazione per campo: nome del campo -> messaggi
pub type FieldErrors = BTreeMap<String, Vec<String>>;

#[derive(Serialize)]
struct ErrorResponse {
    error: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<FieldErrors>,
}

#[derive(Debug)]
pub struct AppError {
    status: StatusCode,
    message: &'static str,
    details: Option<String>,
    errors: Option<FieldErrors>,
}

impl AppError {
    pub fn new(status: StatusCode, message: &'static str) -> Self {
        Self {
            status,
            message,
            details: None,
            errors: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_errors(mut self, errors: FieldErrors) -> Self {
        self.errors = Some(errors);
        self
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn field_errors(&self) -> Option<&FieldErrors> {
        self.errors.as_ref()
    }

    // Common error constructors
    pub fn not_found(message: &'static str) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn bad_request(message: &'static str) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn unprocessable_entity(message: &'static str) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, message)
    }

    pub fn internal_server_error(message: &'static str) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn service_unavailable(message: &'static str) -> Self {
        Self::new(StatusCode::SERVICE_UNAVAILABLE, message)
    }

    /// Validation problem del PATCH: errori delle operazioni e del DTO risultante insieme
    pub fn patch_validation(
        patch_errors: Vec<PatchError>,
        validation: Option<validator::ValidationErrors>,
    ) -> Self {
        let mut errors = validation.as_ref().map(field_errors).unwrap_or_default();
        for PatchError { field, message } in patch_errors {
            errors.entry(field.name().to_string()).or_default().push(message);
        }
        Self::unprocessable_entity("One or more validation errors occurred.").with_errors(errors)
    }
}

/// Converte gli errori di `validator` in una mappa campo -> messaggi
pub fn field_errors(errors: &validator::ValidationErrors) -> FieldErrors {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, violations)| {
            let messages = violations
                .iter()
                .map(|violation| match violation.message {
                    Some(ref message) => message.to_string(),
                    None => violation.code.to_string(),
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect()
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            // la riga è sparita tra la lettura e la scrittura
            sqlx::Error::RowNotFound => Self::not_found("Resource not found"),

            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
                error!("Database pool unavailable: {:?}", err);
                Self::service_unavailable("Database unavailable")
            }

            other => {
                error!("Persistence error: {:?}", other);
                Self::internal_server_error("Persistence error").with_details(other.to_string())
            }
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::bad_request("One or more validation errors occurred.").with_errors(field_errors(&err))
    }
}

/// Body JSON non leggibile o con campi del tipo sbagliato
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request("Invalid request body").with_details(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let body = Json(ErrorResponse {
            error: self.message,
            details: self.details,
            errors: self.errors,
        });
        (self.status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dtos::{FilmeField, UpdateFilmeDto};
    use validator::Validate;

    #[test]
    fn row_not_found_maps_to_404() {
        let err = AppError::from(sqlx::Error::RowNotFound);
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn pool_timeout_maps_to_503() {
        let err = AppError::from(sqlx::Error::PoolTimedOut);
        assert_eq!(err.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn other_persistence_errors_map_to_500() {
        let err = AppError::from(sqlx::Error::Protocol("connection reset".to_string()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn validation_errors_are_listed_per_field() {
        let dto = UpdateFilmeDto {
            titulo: None,
            genero: Some("Drama".to_string()),
            duracao: Some(120),
        };
        let err = AppError::from(dto.validate().unwrap_err());
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);

        let errors = err.field_errors().expect("field errors");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors["titulo"], vec!["O título do filme é obrigatório".to_string()]);
    }

    #[test]
    fn patch_validation_merges_both_sources() {
        let dto = UpdateFilmeDto {
            titulo: Some("Ok".to_string()),
            genero: Some("Drama".to_string()),
            duracao: None,
        };
        let patch_errors = vec![PatchError {
            field: FilmeField::Genero,
            message: "bad value".to_string(),
        }];
        let err = AppError::patch_validation(patch_errors, dto.validate().err());
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let errors = err.field_errors().expect("field errors");
        assert!(errors.contains_key("duracao"));
        assert_eq!(errors["genero"], vec!["bad value".to_string()]);
    }
}
