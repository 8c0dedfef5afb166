//! Authentication service: password hashing, JWT issuance, login, and
//! registration.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::config::AppConfig;
use crate::errors::AppError;
use crate::models::user::{LoginRequest, RegisterUser, User, UserResponse};

/// JWT claims embedded in access and refresh tokens.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String,
    pub user_id: String,
    pub role: String,
    pub token_type: String,
    pub exp: i64,
    pub iat: i64,
}

/// Token pair returned on successful login or registration.
#[derive(Debug, Serialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

/// Login/registration response: tokens plus the user profile.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub user: UserResponse,
    #[serde(flatten)]
    pub tokens: TokenPair,
}

/// Hash a plaintext password with argon2id.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| AppError::Internal(format!("Password hashing failed: {e}")))
}

/// Verify a plaintext password against a stored hash.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    let parsed_hash =
        PasswordHash::new(hash).map_err(|e| AppError::Internal(format!("Invalid hash: {e}")))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

/// Generate a JWT token pair (access + refresh).
pub fn generate_tokens(
    user: &User,
    jwt_secret: &str,
    access_expiry_secs: i64,
    refresh_expiry_secs: i64,
) -> Result<TokenPair, AppError> {
    let now = Utc::now();
    let encoding_key = EncodingKey::from_secret(jwt_secret.as_bytes());

    let role = serde_json::to_string(&user.role)
        .unwrap_or_default()
        .trim_matches('"')
        .to_string();

    let access_claims = Claims {
        sub: user.username.clone(),
        user_id: user.id.to_string(),
        role: role.clone(),
        token_type: "access".to_string(),
        exp: (now + Duration::seconds(access_expiry_secs)).timestamp(),
        iat: now.timestamp(),
    };

    let refresh_claims = Claims {
        sub: user.username.clone(),
        user_id: user.id.to_string(),
        role,
        token_type: "refresh".to_string(),
        exp: (now + Duration::seconds(refresh_expiry_secs)).timestamp(),
        iat: now.timestamp(),
    };

    let access_token = jsonwebtoken::encode(&Header::default(), &access_claims, &encoding_key)
        .map_err(|e| AppError::Internal(format!("Token generation failed: {e}")))?;

    let refresh_token = jsonwebtoken::encode(&Header::default(), &refresh_claims, &encoding_key)
        .map_err(|e| AppError::Internal(format!("Token generation failed: {e}")))?;

    Ok(TokenPair {
        access_token,
        refresh_token,
        token_type: "Bearer".to_string(),
        expires_in: access_expiry_secs,
    })
}

/// Validate a JWT and return the claims.
pub fn validate_token(token: &str, jwt_secret: &str) -> Result<Claims, AppError> {
    let decoding_key = DecodingKey::from_secret(jwt_secret.as_bytes());
    let validation = Validation::default();

    jsonwebtoken::decode::<Claims>(token, &decoding_key, &validation)
        .map(|data| data.claims)
        .map_err(|_| AppError::Unauthorized)
}

/// Register a new user account with a hashed password.
pub async fn register(
    pool: &PgPool,
    config: &AppConfig,
    input: &RegisterUser,
) -> Result<AuthResponse, AppError> {
    let password_hash = hash_password(&input.password)?;

    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (username, email, password_hash, full_name, phone, role)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        "#,
    )
    .bind(&input.username)
    .bind(&input.email)
    .bind(&password_hash)
    .bind(&input.full_name)
    .bind(&input.phone)
    .bind(input.role)
    .fetch_one(pool)
    .await
    .map_err(|e| match e {
        sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
            AppError::Conflict(format!("User '{}' already exists", input.username))
        }
        _ => AppError::Database(e),
    })?;

    let tokens = generate_tokens(
        &user,
        &config.jwt_secret,
        config.jwt_access_token_expiry_secs,
        config.jwt_refresh_token_expiry_secs,
    )?;

    Ok(AuthResponse {
        user: user.into(),
        tokens,
    })
}

/// Authenticate by username and password.
pub async fn login(
    pool: &PgPool,
    config: &AppConfig,
    input: &LoginRequest,
) -> Result<AuthResponse, AppError> {
    let user = sqlx::query_as::<_, User>(
        "SELECT * FROM users WHERE username = $1 AND is_active = true",
    )
    .bind(&input.username)
    .fetch_optional(pool)
    .await?
    .ok_or(AppError::Unauthorized)?;

    if !verify_password(&input.password, &user.password_hash)? {
        return Err(AppError::Unauthorized);
    }

    let tokens = generate_tokens(
        &user,
        &config.jwt_secret,
        config.jwt_access_token_expiry_secs,
        config.jwt_refresh_token_expiry_secs,
    )?;

    Ok(AuthResponse {
        user: user.into(),
        tokens,
    })
}

/// Fetch the authenticated user's profile.
pub async fn me(pool: &PgPool, user_id: uuid::Uuid) -> Result<UserResponse, AppError> {
    let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
        .bind(user_id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
    Ok(user.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::UserRole;
    use uuid::Uuid;

    fn test_user() -> User {
        User {
            id: Uuid::new_v4(),
            username: "drsmith".to_string(),
            email: "drsmith@caredesk.local".to_string(),
            password_hash: String::new(),
            full_name: "Dr. Smith".to_string(),
            phone: None,
            role: UserRole::Doctor,
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn hash_and_verify_password() {
        let hash = hash_password("correct horse battery").unwrap();
        assert!(verify_password("correct horse battery", &hash).unwrap());
        assert!(!verify_password("wrong password", &hash).unwrap());
    }

    #[test]
    fn token_round_trip() {
        let user = test_user();
        let tokens = generate_tokens(&user, "test-secret", 900, 604800).unwrap();

        let claims = validate_token(&tokens.access_token, "test-secret").unwrap();
        assert_eq!(claims.sub, "drsmith");
        assert_eq!(claims.token_type, "access");
        assert_eq!(claims.role, "doctor");
        assert_eq!(claims.user_id, user.id.to_string());
    }

    #[test]
    fn token_rejects_wrong_secret() {
        let user = test_user();
        let tokens = generate_tokens(&user, "test-secret", 900, 604800).unwrap();
        assert!(validate_token(&tokens.access_token, "other-secret").is_err());
    }
}
