//! Validated JSON extractor - deserialization followed by a pluggable schema.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::errors::AppError;

/// Outcome of running a schema: the sanitized value, or one message per
/// failed check.
pub type ValidationResult<T> = Result<T, Vec<String>>;

/// A request body schema.
///
/// `check` consumes the deserialized body and returns the value handlers
/// should see (trimmed, defaulted, ...) or the list of problems found.
pub trait Schema: Sized {
    fn check(self) -> ValidationResult<Self>;
}

/// Extractor that rejects with 400 before the handler runs when the body
/// fails its [`Schema`].
///
/// # Example
///
/// ```rust,ignore
/// async fn update(ValidatedJson(payload): ValidatedJson<UpdateProfileRequest>) {
///     // payload already passed UpdateProfileRequest::check
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Schema,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::validation(e.body_text()))?;

        let value = value.check().map_err(|errors| {
            tracing::debug!(count = errors.len(), "Request body failed validation");
            AppError::Validation(errors)
        })?;

        Ok(ValidatedJson(value))
    }
}

/// Run `validator` rules and flatten the failures into messages, ordered by
/// field name.
pub fn validation_messages<T: Validate>(value: &T) -> Result<(), Vec<String>> {
    value.validate().map_err(|e| flatten_errors(&e))
}

fn flatten_errors(errors: &ValidationErrors) -> Vec<String> {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 3, message = "alpha too short"))]
        alpha: String,
        #[validate(email)]
        beta: String,
    }

    #[test]
    fn test_messages_ordered_by_field() {
        let sample = Sample {
            alpha: "a".to_string(),
            beta: "not-an-email".to_string(),
        };

        let messages = validation_messages(&sample).unwrap_err();
        assert_eq!(messages, vec!["alpha too short", "beta is invalid"]);
    }

    #[test]
    fn test_valid_value_passes() {
        let sample = Sample {
            alpha: "abc".to_string(),
            beta: "a@example.com".to_string(),
        };

        assert!(validation_messages(&sample).is_ok());
    }
}
