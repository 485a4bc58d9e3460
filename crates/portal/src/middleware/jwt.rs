use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use shared::{
    abstract_trait::jwt::DynJwtService,
    domain::principal::Principal,
    errors::{AppErrorHttp, ServiceError},
    service::auth::resolve_principal,
};
use tracing::warn;

/// A request made with a valid student token. Holds the student id.
#[derive(Debug, Clone)]
pub struct StudentAuth(pub String);

/// A request made with a valid admin token. Holds the admin id.
#[derive(Debug, Clone, Copy)]
pub struct AdminAuth(pub i32);

/// Whoever is calling; a bad token counts as anonymous.
#[derive(Debug, Clone)]
pub struct OptionalAuth(pub Principal);

fn principal_from_parts(parts: &Parts) -> Result<Principal, AppErrorHttp> {
    let jwt = parts
        .extensions
        .get::<DynJwtService>()
        .ok_or_else(|| ServiceError::Internal("JWT service is not configured".to_string()))?;

    let header = parts
        .headers
        .get(AUTHORIZATION)
        .map(|value| value.to_str())
        .transpose()
        .map_err(|_| ServiceError::Unauthorized("Invalid authorization header".to_string()))?;

    Ok(resolve_principal(jwt.as_ref(), header)?)
}

impl<S> FromRequestParts<S> for StudentAuth
where
    S: Send + Sync,
{
    type Rejection = AppErrorHttp;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match principal_from_parts(parts)? {
            Principal::Student(student_id) => Ok(StudentAuth(student_id)),
            Principal::Anonymous => Err(AppErrorHttp(ServiceError::Unauthorized(
                "Authentication required".to_string(),
            ))),
            Principal::Admin(_) => Err(AppErrorHttp(ServiceError::Forbidden(
                "Student access only".to_string(),
            ))),
        }
    }
}

impl<S> FromRequestParts<S> for AdminAuth
where
    S: Send + Sync,
{
    type Rejection = AppErrorHttp;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match principal_from_parts(parts)? {
            Principal::Admin(admin_id) => Ok(AdminAuth(admin_id)),
            Principal::Anonymous => Err(AppErrorHttp(ServiceError::Unauthorized(
                "Authentication required".to_string(),
            ))),
            Principal::Student(_) => Err(AppErrorHttp(ServiceError::Forbidden(
                "Admin access only".to_string(),
            ))),
        }
    }
}

impl<S> FromRequestParts<S> for OptionalAuth
where
    S: Send + Sync,
{
    type Rejection = AppErrorHttp;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match principal_from_parts(parts) {
            Ok(principal) => Ok(OptionalAuth(principal)),
            Err(AppErrorHttp(ServiceError::Internal(msg))) => {
                Err(AppErrorHttp(ServiceError::Internal(msg)))
            }
            Err(err) => {
                warn!("⚠️ Ignoring unusable token on public route: {}", err.0);
                Ok(OptionalAuth(Principal::Anonymous))
            }
        }
    }
}
