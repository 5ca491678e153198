use db::models::user::Role;
use serde::{Deserialize, Serialize};

/// Identity embedded in the token, mirrored back to clients that decode it.
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct TokenUser {
    pub id: i64,
    pub role: Role,
}

/// JWT payload: `{ user: { id, role }, iat, exp }`, seconds since epoch.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub user: TokenUser,
    pub iat: usize,
    pub exp: usize,
}

#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);
