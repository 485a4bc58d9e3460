use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use shared::errors::{AppErrorHttp, ServiceError, format_validation_errors};
use validator::Validate;

fn check<T: Validate>(value: &T) -> Result<(), AppErrorHttp> {
    value
        .validate()
        .map_err(|e| AppErrorHttp(ServiceError::Validation(format_validation_errors(&e))))
}

/// JSON body that deserializes and passes `validator` rules, or a 400.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for SimpleValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppErrorHttp;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppErrorHttp(ServiceError::validation(rejection.body_text())))?;

        check(&value)?;

        Ok(SimpleValidatedJson(value))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleValidatedQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for SimpleValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppErrorHttp;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppErrorHttp(ServiceError::validation(rejection.body_text())))?;

        check(&value)?;

        Ok(SimpleValidatedQuery(value))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedPath<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidatedPath<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = AppErrorHttp;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppErrorHttp(ServiceError::validation(rejection.body_text())))?;

        check(&value)?;

        Ok(ValidatedPath(value))
    }
}
