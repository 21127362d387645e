//! User entity definitions

/// A registered account. The password hash never leaves the backend; API
/// payloads are built from the remaining fields.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub location: String,
    pub created_at: String,
}

/// Column values for inserting a new user. The password arrives already
/// hashed; this layer never sees plaintext credentials.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub location: String,
}
