pub mod claims;
pub mod extractors;
pub mod guards;
pub mod middleware;

pub use claims::{AuthUser, Claims, TokenUser};

use chrono::{Duration, Utc};
use common::Config;
use db::models::user::Role;
use jsonwebtoken::{EncodingKey, Header, encode};

/// Generates a JWT and its expiry timestamp for a given user.
pub fn generate_jwt(user_id: i64, role: Role) -> (String, String) {
    let config = Config::get();

    let issued_at = Utc::now();
    let expiry = issued_at + Duration::minutes(config.jwt_duration_minutes as i64);

    let claims = Claims {
        user: TokenUser {
            id: user_id,
            role,
        },
        iat: issued_at.timestamp() as usize,
        exp: expiry.timestamp() as usize,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
    )
    .expect("Token encoding failed");

    (token, expiry.to_rfc3339())
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

    #[test]
    fn test_generated_token_round_trips() {
        let config = Config::init_for_tests();

        let (token, expiry) = generate_jwt(7, Role::Admin);
        assert_eq!(token.split('.').count(), 3);

        let decoded = decode::<Claims>(
            &token,
            &DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            &Validation::new(Algorithm::HS256),
        )
        .expect("token should decode with the signing secret");

        assert_eq!(decoded.claims.user.id, 7);
        assert_eq!(decoded.claims.user.role, Role::Admin);
        assert!(decoded.claims.exp > decoded.claims.iat);

        let expiry_time = chrono::DateTime::parse_from_rfc3339(&expiry).unwrap();
        assert!(expiry_time > Utc::now());
    }

    #[test]
    fn test_token_rejected_with_wrong_secret() {
        Config::init_for_tests();

        let (token, _) = generate_jwt(7, Role::User);

        let decoded = decode::<Claims>(
            &token,
            &DecodingKey::from_secret(b"wrong_secret_key"),
            &Validation::new(Algorithm::HS256),
        );
        assert!(decoded.is_err());
    }
}
