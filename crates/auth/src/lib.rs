use argon2::password_hash::{
    rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString,
};
use argon2::Argon2;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use marketplace_config::AuthConfig;
use marketplace_database::{NewUser, User, UserError, UserRepository};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use thiserror::Error;
use tracing::{debug, info};

/// Issues and verifies the bearer tokens that guard the marketplace API.
///
/// Tokens are stateless signed claims; nothing is stored server side and
/// there is no revocation. A token stays valid until its expiry even if the
/// account logs in again elsewhere.
#[derive(Clone)]
pub struct Authenticator {
    users: UserRepository,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    token_ttl: Duration,
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Email already registered")]
    EmailAlreadyExists,
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("Invalid token")]
    InvalidToken,
    // Expired tokens get the same client-facing message as malformed ones.
    #[error("Invalid token")]
    ExpiredToken,
    #[error("database error: {0}")]
    Database(String),
    #[error("password hashing failed: {0}")]
    PasswordHash(#[from] argon2::password_hash::Error),
    #[error("token signing failed: {0}")]
    TokenSigning(jsonwebtoken::errors::Error),
}

impl From<UserError> for AuthError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::EmailAlreadyExists => AuthError::EmailAlreadyExists,
            UserError::UserNotFound => AuthError::InvalidToken,
            UserError::DatabaseError(e) => AuthError::Database(e),
        }
    }
}

/// Claims carried inside a signed token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// User id the token was issued for.
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

/// A freshly signed token together with its expiry.
#[derive(Debug, Clone)]
pub struct SignedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

impl Authenticator {
    pub fn new(pool: SqlitePool, config: AuthConfig) -> Self {
        let token_ttl = Duration::seconds(config.token_ttl_seconds as i64);

        Self {
            users: UserRepository::new(pool),
            encoding_key: EncodingKey::from_secret(config.token_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.token_secret.as_bytes()),
            token_ttl,
        }
    }

    pub fn users(&self) -> &UserRepository {
        &self.users
    }

    /// Create an account and sign a token for it.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
        location: &str,
    ) -> Result<(User, SignedToken), AuthError> {
        if self.users.email_exists(email).await? {
            return Err(AuthError::EmailAlreadyExists);
        }

        let password_hash = self.hash_password(password)?;

        // The unique index still backstops a concurrent registration.
        let user = self
            .users
            .create(&NewUser {
                name: name.to_owned(),
                email: email.to_owned(),
                password_hash,
                location: location.to_owned(),
            })
            .await?;

        let token = self.issue_token(&user.id)?;
        info!(user = %user.id, "registered new user");
        Ok((user, token))
    }

    /// Verify credentials and sign a token.
    ///
    /// Unknown emails and wrong passwords produce the same error so the
    /// response never reveals whether an address is registered.
    pub async fn login(&self, email: &str, password: &str) -> Result<(User, SignedToken), AuthError> {
        let Some(user) = self.users.find_by_email(email).await? else {
            return Err(AuthError::InvalidCredentials);
        };

        let stored_hash = PasswordHash::new(&user.password_hash)?;
        Argon2::default()
            .verify_password(password.as_bytes(), &stored_hash)
            .map_err(|_| AuthError::InvalidCredentials)?;

        let token = self.issue_token(&user.id)?;
        Ok((user, token))
    }

    /// Resolve a bearer token to the account it was issued for.
    pub async fn authenticate_token(&self, token: &str) -> Result<User, AuthError> {
        let claims = self.decode_token(token)?;

        // A token whose account has vanished is as good as forged.
        self.users
            .find_by_id(&claims.sub)
            .await?
            .ok_or(AuthError::InvalidToken)
    }

    pub fn issue_token(&self, user_id: &str) -> Result<SignedToken, AuthError> {
        let now = Utc::now();
        let expires_at = now + self.token_ttl;
        let claims = TokenClaims {
            sub: user_id.to_owned(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(AuthError::TokenSigning)?;

        Ok(SignedToken { token, expires_at })
    }

    pub fn decode_token(&self, token: &str) -> Result<TokenClaims, AuthError> {
        let data = decode::<TokenClaims>(token, &self.decoding_key, &Validation::default())
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => {
                    debug!("rejected expired token");
                    AuthError::ExpiredToken
                }
                _ => AuthError::InvalidToken,
            })?;

        Ok(data.claims)
    }

    fn hash_password(&self, password: &str) -> Result<String, argon2::password_hash::Error> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
        Ok(hash.to_string())
    }
}
