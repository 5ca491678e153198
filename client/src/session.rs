use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::Deserialize;

use crate::models::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct SessionUser {
    pub id: i64,
    pub role: Role,
}

#[derive(Debug, Deserialize)]
struct DecodedClaims {
    user: SessionUser,
    exp: i64,
}

/// Client-side session state derived from a stored bearer token.
///
/// Claims are decoded without signature verification: the decode is
/// trust-on-receipt and gates UI only, while the server re-verifies the
/// token on every protected request. An expired or undecodable token
/// leaves the session logged out.
///
/// Logout is purely local. The server keeps no session store, so a token
/// that has leaked remains valid until its embedded expiry.
#[derive(Debug, Default)]
pub struct Session {
    token: Option<String>,
    user: Option<SessionUser>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restores a session from a previously stored token, discarding it if
    /// it no longer decodes or has expired.
    pub fn from_token(token: impl Into<String>) -> Self {
        let mut session = Self::new();
        session.login(token);
        session
    }

    /// Stores a token and populates the session synchronously from its
    /// decoded claims; no server round trip.
    pub fn login(&mut self, token: impl Into<String>) {
        let token = token.into();
        match decode_claims(&token) {
            Some(claims) if Utc::now().timestamp() < claims.exp => {
                self.user = Some(claims.user);
                self.token = Some(token);
            }
            _ => self.logout(),
        }
    }

    pub fn logout(&mut self) {
        self.token = None;
        self.user = None;
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn user(&self) -> Option<&SessionUser> {
        self.user.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

fn decode_claims(token: &str) -> Option<DecodedClaims> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;

    decode::<DecodedClaims>(token, &DecodingKey::from_secret(&[]), &validation)
        .ok()
        .map(|data| data.claims)
}
