//! Validated JSON body extractor.

use actix_web::{FromRequest, HttpRequest, dev::Payload, web};
use serde::de::DeserializeOwned;
use std::future::Future;
use std::pin::Pin;
use validator::{Validate, ValidationErrors};

use super::error::AppError;

/// JSON body that has passed its `validator` rules.
///
/// ```ignore
/// async fn login(body: ValidatedJson<LoginRequest>) -> AppResult<HttpResponse> {
///     let req = body.into_inner();
///     ...
/// }
/// ```
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T> ValidatedJson<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> FromRequest for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + 'static,
{
    type Error = actix_web::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let json = web::Json::<T>::from_request(req, payload);

        Box::pin(async move {
            let body = json.await?.into_inner();
            body.validate()
                .map_err(|errors| AppError::BadRequest(first_violation(&errors)))?;
            Ok(ValidatedJson(body))
        })
    }
}

/// Message of the first violation: fields ordered by name, then rules in
/// declaration order.
pub fn first_violation(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors
        .field_errors()
        .into_iter()
        .map(|(field, violations)| (field.to_string(), violations))
        .collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .find_map(|(field, violations)| {
            violations.first().map(|v| match &v.message {
                Some(message) => message.to_string(),
                None => format!("Invalid {field}"),
            })
        })
        .unwrap_or_else(|| super::error::UNKNOWN_ERROR.to_string())
}
