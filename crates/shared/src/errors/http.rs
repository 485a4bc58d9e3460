use crate::errors::{
    error::ErrorResponse, repository::RepositoryError, service::ServiceError,
};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, warn};

#[derive(Debug)]
pub struct AppErrorHttp(pub ServiceError);

impl From<ServiceError> for AppErrorHttp {
    fn from(err: ServiceError) -> Self {
        AppErrorHttp(err)
    }
}

impl From<RepositoryError> for AppErrorHttp {
    fn from(err: RepositoryError) -> Self {
        AppErrorHttp(ServiceError::Repo(err))
    }
}

impl AppErrorHttp {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            ServiceError::InvalidCredentials
            | ServiceError::Unauthorized(_)
            | ServiceError::Jwt(_)
            | ServiceError::TokenExpired
            | ServiceError::InvalidTokenType => StatusCode::UNAUTHORIZED,
            ServiceError::Forbidden(_) => StatusCode::FORBIDDEN,
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            ServiceError::Repo(repo_err) => match repo_err {
                RepositoryError::NotFound => StatusCode::NOT_FOUND,
                RepositoryError::AlreadyExists(_) => StatusCode::CONFLICT,
                RepositoryError::ForeignKey(_) => StatusCode::BAD_REQUEST,
                RepositoryError::Sqlx(_) | RepositoryError::Custom(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
            ServiceError::Bcrypt(_) | ServiceError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn message(&self) -> String {
        match &self.0 {
            ServiceError::InvalidCredentials => "Invalid credentials".to_string(),
            ServiceError::Unauthorized(msg) => msg.clone(),
            ServiceError::Jwt(_) | ServiceError::InvalidTokenType => {
                "Invalid token".to_string()
            }
            ServiceError::TokenExpired => "Token has expired".to_string(),
            ServiceError::Forbidden(msg) => msg.clone(),
            ServiceError::NotFound(msg) => msg.clone(),
            ServiceError::Validation(errors) => format!("Validation failed: {}", errors.join("; ")),
            ServiceError::Repo(repo_err) => match repo_err {
                RepositoryError::NotFound => "Not found".to_string(),
                RepositoryError::AlreadyExists(_) => "Record already exists".to_string(),
                RepositoryError::ForeignKey(_) => "Referenced record does not exist".to_string(),
                RepositoryError::Sqlx(_) | RepositoryError::Custom(_) => {
                    "Internal server error".to_string()
                }
            },
            ServiceError::Bcrypt(_) => "Internal authentication error".to_string(),
            ServiceError::Internal(_) => "Internal server error".to_string(),
        }
    }

    fn log(&self, status: StatusCode) {
        if status.is_server_error() {
            error!("🚨 {}", self.0);
        } else {
            warn!("⚠️ {status}: {}", self.0);
        }
    }
}

impl IntoResponse for AppErrorHttp {
    fn into_response(self) -> Response {
        let status = self.status();
        self.log(status);

        let body = Json(ErrorResponse::new(self.message()));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_errors_never_leak_their_text() {
        let err = AppErrorHttp(ServiceError::Repo(RepositoryError::Custom(
            "relation \"installments\" does not exist".into(),
        )));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message(), "Internal server error");
    }

    #[test]
    fn constraint_violations_hide_database_text() {
        let err = AppErrorHttp(ServiceError::Repo(RepositoryError::AlreadyExists(
            "duplicate key value violates unique constraint \"announcements_pkey\"".into(),
        )));
        assert_eq!(err.status(), StatusCode::CONFLICT);
        assert_eq!(err.message(), "Record already exists");

        let err = AppErrorHttp(ServiceError::Repo(RepositoryError::ForeignKey(
            "insert or update on table \"announcements\" violates foreign key constraint".into(),
        )));
        assert!(!err.message().contains("announcements"));
    }

    #[test]
    fn taxonomy_maps_to_expected_statuses() {
        let cases = [
            (ServiceError::Unauthorized("no token".into()), StatusCode::UNAUTHORIZED),
            (ServiceError::TokenExpired, StatusCode::UNAUTHORIZED),
            (ServiceError::Forbidden("nope".into()), StatusCode::FORBIDDEN),
            (ServiceError::NotFound("gone".into()), StatusCode::NOT_FOUND),
            (ServiceError::validation("bad"), StatusCode::BAD_REQUEST),
            (
                ServiceError::Repo(RepositoryError::NotFound),
                StatusCode::NOT_FOUND,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(AppErrorHttp(err).status(), expected);
        }
    }
}
