use crate::{
    abstract_trait::jwt::JwtServiceTrait,
    domain::principal::{Principal, Role},
    errors::ServiceError,
};

/// Turns an optional `Authorization` header value into the caller's identity.
///
/// No header at all is an anonymous caller. A header that is present but
/// unusable (wrong scheme, bad signature, expired, malformed subject) is an
/// authentication error, never a silent downgrade.
pub fn resolve_principal(
    jwt: &dyn JwtServiceTrait,
    authorization: Option<&str>,
) -> Result<Principal, ServiceError> {
    let Some(header) = authorization else {
        return Ok(Principal::Anonymous);
    };

    let token = header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ServiceError::Unauthorized("Invalid authorization header".to_string()))?;

    let claims = jwt.verify_token(token)?;

    match claims.role {
        Role::Student if !claims.sub.trim().is_empty() => Ok(Principal::Student(claims.sub)),
        Role::Student => Err(ServiceError::InvalidTokenType),
        Role::Admin => claims
            .sub
            .parse::<i32>()
            .map(Principal::Admin)
            .map_err(|_| ServiceError::InvalidTokenType),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::JwtConfig;

    fn jwt() -> JwtConfig {
        JwtConfig::new("test-secret", 60)
    }

    fn bearer(token: &str) -> String {
        format!("Bearer {token}")
    }

    #[test]
    fn missing_header_is_anonymous() {
        assert_eq!(resolve_principal(&jwt(), None).unwrap(), Principal::Anonymous);
    }

    #[test]
    fn student_and_admin_tokens_resolve_to_their_ids() {
        let jwt = jwt();
        let student = jwt.generate_token("20231234", Role::Student, "Kim").unwrap();
        let admin = jwt.generate_token("7", Role::Admin, "Lee").unwrap();

        assert_eq!(
            resolve_principal(&jwt, Some(&bearer(&student))).unwrap(),
            Principal::Student("20231234".to_string())
        );
        assert_eq!(
            resolve_principal(&jwt, Some(&bearer(&admin))).unwrap(),
            Principal::Admin(7)
        );
    }

    #[test]
    fn wrong_scheme_is_unauthorized() {
        let res = resolve_principal(&jwt(), Some("Basic abc"));
        assert!(matches!(res, Err(ServiceError::Unauthorized(_))));

        let res = resolve_principal(&jwt(), Some("Bearer   "));
        assert!(matches!(res, Err(ServiceError::Unauthorized(_))));
    }

    #[test]
    fn admin_token_with_non_numeric_subject_is_rejected() {
        let jwt = jwt();
        let token = jwt.generate_token("root", Role::Admin, "Lee").unwrap();

        assert!(matches!(
            resolve_principal(&jwt, Some(&bearer(&token))),
            Err(ServiceError::InvalidTokenType)
        ));
    }

    #[test]
    fn garbage_token_is_rejected() {
        assert!(matches!(
            resolve_principal(&jwt(), Some("Bearer not.a.jwt")),
            Err(ServiceError::Jwt(_))
        ));
    }
}
