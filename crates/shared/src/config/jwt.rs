use crate::{
    abstract_trait::jwt::JwtServiceTrait,
    domain::principal::{Claims, Role},
    errors::ServiceError,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode,
    errors::ErrorKind,
};

#[derive(Clone)]
pub struct JwtConfig {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig").field("ttl", &self.ttl).finish()
    }
}

impl JwtConfig {
    pub fn new(jwt_secret: &str, ttl_minutes: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(jwt_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(jwt_secret.as_bytes()),
            ttl: Duration::minutes(ttl_minutes),
        }
    }
}

impl JwtServiceTrait for JwtConfig {
    fn generate_token(&self, subject: &str, role: Role, name: &str) -> Result<String, ServiceError> {
        let now = Utc::now();
        let claims = Claims {
            sub: subject.to_string(),
            role,
            name: name.to_string(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(ServiceError::Jwt)
    }

    fn verify_token(&self, token: &str) -> Result<Claims, ServiceError> {
        decode::<Claims>(token, &self.decoding_key, &Validation::new(Algorithm::HS256))
            .map(|data| data.claims)
            .map_err(|err| match err.kind() {
                ErrorKind::ExpiredSignature => ServiceError::TokenExpired,
                _ => ServiceError::Jwt(err),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issued_token_round_trips_claims() {
        let jwt = JwtConfig::new("secret", 60);
        let token = jwt.generate_token("20231234", Role::Student, "Kim").unwrap();
        let claims = jwt.verify_token(&token).unwrap();

        assert_eq!(claims.sub, "20231234");
        assert_eq!(claims.role, Role::Student);
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn expired_token_is_reported_as_expired() {
        let jwt = JwtConfig::new("secret", -10);
        let token = jwt.generate_token("1", Role::Admin, "Lee").unwrap();

        assert!(matches!(
            jwt.verify_token(&token),
            Err(ServiceError::TokenExpired)
        ));
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let token = JwtConfig::new("one", 60)
            .generate_token("1", Role::Admin, "Lee")
            .unwrap();

        assert!(matches!(
            JwtConfig::new("two", 60).verify_token(&token),
            Err(ServiceError::Jwt(_))
        ));
    }
}
