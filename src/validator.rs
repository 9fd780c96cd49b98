use anyhow::anyhow;
use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use edusphere_core::AppError;

fn format_errors(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                error
                    .message
                    .as_ref()
                    .map(|msg| msg.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect();
    messages.sort();
    messages.join(", ")
}

/// Pulls the backticked name out of a serde message such as
/// "missing field `email` at line 1 column 2".
fn backticked(message: &str, marker: &str) -> Option<String> {
    message
        .split(marker)
        .nth(1)
        .and_then(|rest| rest.split('`').next())
        .map(str::to_string)
}

fn rejection_to_error(rejection: JsonRejection) -> AppError {
    let error_msg = rejection.body_text();

    if let Some(field) = backticked(&error_msg, "missing field `") {
        return AppError::bad_request(anyhow!("{} is required", field));
    }

    if let Some(variant) = backticked(&error_msg, "unknown variant `") {
        return AppError::bad_request(anyhow!("Invalid role: {}", variant));
    }

    if error_msg.contains("invalid type") {
        return AppError::bad_request(anyhow!("Invalid field type in request"));
    }

    if matches!(rejection, JsonRejection::MissingJsonContentType(_)) {
        return AppError::bad_request(anyhow!(
            "Missing 'Content-Type: application/json' header"
        ));
    }

    AppError::bad_request(anyhow!("Invalid request body"))
}

/// JSON body extractor that also runs `validator` rules.
///
/// Malformed bodies are rejected with 400 and rule violations with 422.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(rejection_to_error)?;

        value.validate().map_err(|errors| {
            AppError::new(
                StatusCode::UNPROCESSABLE_ENTITY,
                anyhow!("{}", format_errors(&errors)),
            )
        })?;

        Ok(ValidatedJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_missing_field_name() {
        let msg = "Failed to deserialize the JSON body into the target type: missing field `email` at line 1 column 20";
        assert_eq!(backticked(msg, "missing field `").as_deref(), Some("email"));
    }

    #[test]
    fn extracts_unknown_variant() {
        let msg = "unknown variant `janitor`, expected one of `admin`, `teacher`";
        assert_eq!(
            backticked(msg, "unknown variant `").as_deref(),
            Some("janitor")
        );
    }

    #[test]
    fn no_marker_yields_none() {
        assert!(backticked("expected value at line 1", "missing field `").is_none());
    }
}
