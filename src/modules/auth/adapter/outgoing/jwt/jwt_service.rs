use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use std::fmt;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::token_provider::{
    TokenClaims, TokenError, TokenProvider, ACCESS_TOKEN_TYPE,
};

use super::jwt_config::JwtConfig;

#[derive(Clone)]
pub struct JwtTokenService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

#[cfg(not(tarpaulin_include))]
impl fmt::Debug for JwtTokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtTokenService")
            .field("issuer", &self.config.issuer)
            .finish()
    }
}

impl JwtTokenService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret_key.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret_key.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    fn generate_token(
        &self,
        user_id: &UserId,
        token_type: &str,
        expiry_seconds: i64,
    ) -> Result<String, TokenError> {
        let now = Utc::now();
        let expiration = Duration::try_seconds(expiry_seconds)
            .and_then(|lifetime| now.checked_add_signed(lifetime))
            .ok_or_else(|| {
                TokenError::EncodingError(format!(
                    "token lifetime of {} seconds is out of range",
                    expiry_seconds
                ))
            })?;

        let claims = TokenClaims {
            sub: user_id.clone(),
            iss: self.config.issuer.clone(),
            exp: expiration.timestamp(),
            iat: now.timestamp(),
            nbf: now.timestamp(),
            token_type: token_type.to_string(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingError(e.to_string()))
    }

    fn decode_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 30;
        validation.validate_nbf = true;
        validation.set_issuer(&[self.config.issuer.as_str()]);

        let decoded = decode::<TokenClaims>(token, &self.decoding_key, &validation).map_err(|e| {
            use jsonwebtoken::errors::ErrorKind;

            match e.kind() {
                ErrorKind::ExpiredSignature => {
                    tracing::debug!("Token verification failed: Token expired");
                    TokenError::TokenExpired
                }
                ErrorKind::ImmatureSignature => {
                    tracing::warn!("Token verification failed: Token not yet valid");
                    TokenError::TokenNotYetValid
                }
                ErrorKind::InvalidSignature => {
                    tracing::error!("Security alert: Invalid token signature detected");
                    TokenError::InvalidSignature
                }
                ErrorKind::InvalidIssuer => {
                    tracing::warn!("Token verification failed: Unexpected issuer");
                    TokenError::MalformedToken
                }
                ErrorKind::InvalidToken | ErrorKind::InvalidAlgorithm => {
                    tracing::error!("Security alert: Malformed or invalid algorithm token");
                    TokenError::MalformedToken
                }
                _ => {
                    tracing::warn!("Token verification failed: {}", e);
                    TokenError::MalformedToken
                }
            }
        })?;

        Ok(decoded.claims)
    }
}

impl TokenProvider for JwtTokenService {
    fn generate_access_token(&self, user_id: &UserId) -> Result<String, TokenError> {
        self.generate_token(user_id, ACCESS_TOKEN_TYPE, self.config.access_token_expiry)
    }

    fn verify_access_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let claims = self.decode_token(token)?;

        if claims.token_type != ACCESS_TOKEN_TYPE {
            tracing::warn!(
                "Token type mismatch: expected '{}', got '{}'",
                ACCESS_TOKEN_TYPE,
                claims.token_type
            );
            return Err(TokenError::InvalidTokenType(ACCESS_TOKEN_TYPE.to_string()));
        }

        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret-key-that-is-long-enough-123";

    fn create_test_jwt_service() -> JwtTokenService {
        JwtTokenService::new(JwtConfig {
            secret_key: SECRET.to_string(),
            issuer: "EcoPlan".to_string(),
            access_token_expiry: 3600,
        })
    }

    fn sign(claims: &TokenClaims, secret: &str) -> String {
        encode(
            &Header::new(Algorithm::HS256),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    fn claims_with(token_type: &str, iss: &str, exp_offset: i64) -> TokenClaims {
        let now = Utc::now().timestamp();
        TokenClaims {
            sub: UserId::from("1700000000000"),
            iss: iss.to_string(),
            exp: now + exp_offset,
            iat: now,
            nbf: now,
            token_type: token_type.to_string(),
        }
    }

    #[test]
    fn test_generate_and_verify_access_token() {
        let service = create_test_jwt_service();
        let user_id = UserId::from("1700000000000");

        let token = service.generate_access_token(&user_id).unwrap();
        let claims = service.verify_access_token(&token).unwrap();

        assert_eq!(claims.sub, user_id);
        assert_eq!(claims.iss, "EcoPlan");
        assert_eq!(claims.token_type, ACCESS_TOKEN_TYPE);
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_out_of_range_expiry_is_an_encoding_error() {
        let service = JwtTokenService::new(JwtConfig {
            secret_key: SECRET.to_string(),
            issuer: "EcoPlan".to_string(),
            access_token_expiry: 10_000_000_000_000_000,
        });

        let result = service.generate_access_token(&UserId::from("1"));

        assert!(matches!(result, Err(TokenError::EncodingError(_))));
    }

    #[test]
    fn test_garbage_token_is_malformed() {
        let service = create_test_jwt_service();
        let result = service.verify_access_token("invalid.jwt.token");
        assert_eq!(result.unwrap_err(), TokenError::MalformedToken);
    }

    #[test]
    fn test_token_signed_with_other_secret_is_rejected() {
        let service = create_test_jwt_service();
        let token = sign(
            &claims_with(ACCESS_TOKEN_TYPE, "EcoPlan", 3600),
            "another-secret-key-that-is-long-enough",
        );

        let result = service.verify_access_token(&token);
        assert_eq!(result.unwrap_err(), TokenError::InvalidSignature);
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let service = create_test_jwt_service();
        // Well past the 30 second leeway.
        let token = sign(&claims_with(ACCESS_TOKEN_TYPE, "EcoPlan", -600), SECRET);

        let result = service.verify_access_token(&token);
        assert_eq!(result.unwrap_err(), TokenError::TokenExpired);
    }

    #[test]
    fn test_foreign_issuer_is_rejected() {
        let service = create_test_jwt_service();
        let token = sign(&claims_with(ACCESS_TOKEN_TYPE, "SomeoneElse", 3600), SECRET);

        assert!(service.verify_access_token(&token).is_err());
    }

    #[test]
    fn test_wrong_token_type_is_rejected() {
        let service = create_test_jwt_service();
        let token = sign(&claims_with("refresh", "EcoPlan", 3600), SECRET);

        let result = service.verify_access_token(&token);
        assert_eq!(
            result.unwrap_err(),
            TokenError::InvalidTokenType(ACCESS_TOKEN_TYPE.to_string())
        );
    }
}
