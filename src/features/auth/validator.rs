use jsonwebtoken::{decode, decode_header, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::model::AuthenticatedUser;
use crate::core::error::AppError;

/// Claims carried by access tokens issued for this service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iss: String,
    pub aud: String,
    pub iat: u64,
    pub exp: u64,
    #[serde(default)]
    pub roles: Vec<String>,
}

pub struct JwtValidator {
    decoding_key: DecodingKey,
    issuer: String,
    audience: String,
    leeway: u64,
}

impl JwtValidator {
    pub fn new(secret: &str, issuer: String, audience: String, leeway: Duration) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            issuer,
            audience,
            leeway: leeway.as_secs(),
        }
    }

    pub fn validate_token(&self, token: &str) -> Result<AuthenticatedUser, AppError> {
        let header = decode_header(token).map_err(|e| AppError::Auth(e.to_string()))?;

        if header.alg != Algorithm::HS256 {
            return Err(AppError::Auth(format!(
                "Unsupported algorithm: {:?}. Only HS256 is allowed",
                header.alg
            )));
        }

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&self.issuer]);
        validation.set_audience(&[&self.audience]);
        validation.leeway = self.leeway;

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|e| AppError::Auth(e.to_string()))?;

        let claims = token_data.claims;

        Ok(AuthenticatedUser {
            sub: claims.sub,
            roles: claims.roles,
        })
    }
}
