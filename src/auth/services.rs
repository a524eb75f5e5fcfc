use tracing::{info, warn};

use crate::auth::{
    dto::{LoginRequest, SignupRequest},
    error::AuthError,
    jwt::JwtKeys,
    password::{hash_password, verify_dummy, verify_password},
    repo::{StoreError, UserStore},
    repo_types::{NewUser, User},
};

pub const SESSION_COOKIE: &str = "token";

/// `Set-Cookie` value carrying a freshly issued session token.
pub fn session_cookie(token: &str) -> String {
    format!("{SESSION_COOKIE}={token}; HttpOnly; Path=/")
}

/// `Set-Cookie` value telling the client to drop the session token.
pub fn cleared_session_cookie() -> String {
    format!("{SESSION_COOKIE}=; HttpOnly; Path=/; Max-Age=0")
}

/// Registers a user. The pre-check gives the common case a clean error; the
/// store's unique index still catches two signups racing past it.
pub async fn signup(store: &dyn UserStore, req: SignupRequest) -> Result<User, AuthError> {
    if store.find_by_email(&req.email).await?.is_some() {
        warn!(email = %req.email, "email already registered");
        return Err(AuthError::DuplicateUser);
    }

    let password_hash = hash_password(&req.password).map_err(AuthError::Internal)?;

    let user = store
        .insert(NewUser {
            name: req.name,
            email: req.email,
            password_hash,
        })
        .await
        .map_err(|e| {
            if matches!(e, StoreError::Duplicate) {
                warn!("signup lost insert race on unique email");
            }
            AuthError::from(e)
        })?;

    info!(user_id = %user.id, email = %user.email, "user registered");
    Ok(user)
}

/// Checks credentials and issues a session token. Unknown email and wrong
/// password produce the same error.
pub async fn login(
    store: &dyn UserStore,
    keys: &JwtKeys,
    req: LoginRequest,
) -> Result<(User, String), AuthError> {
    let Some(user) = store.find_by_email(&req.email).await? else {
        verify_dummy(&req.password);
        warn!(email = %req.email, "login unknown email");
        return Err(AuthError::InvalidCredentials);
    };

    if !verify_password(&req.password, &user.password_hash).map_err(AuthError::Internal)? {
        warn!(user_id = %user.id, "login invalid password");
        return Err(AuthError::InvalidCredentials);
    }

    let token = keys.sign(user.id, &user.email).map_err(AuthError::Internal)?;

    info!(user_id = %user.id, email = %user.email, "user logged in");
    Ok((user, token))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::repo::memory::{DownUserStore, MemoryUserStore};
    use crate::config::JwtConfig;
    use async_trait::async_trait;
    use uuid::Uuid;

    /// Sees no existing user, then loses the insert to a concurrent signup.
    struct RacedUserStore;

    #[async_trait]
    impl UserStore for RacedUserStore {
        async fn find_by_email(&self, _email: &str) -> Result<Option<User>, StoreError> {
            Ok(None)
        }

        async fn find_by_id(&self, _id: Uuid) -> Result<Option<User>, StoreError> {
            Ok(None)
        }

        async fn insert(&self, _user: NewUser) -> Result<User, StoreError> {
            Err(StoreError::Duplicate)
        }
    }

    fn keys() -> JwtKeys {
        JwtKeys::from_config(&JwtConfig {
            secret: "test-secret".into(),
            issuer: "test".into(),
            audience: "test".into(),
            ttl_minutes: 60,
        })
    }

    fn signup_req(email: &str, password: &str) -> SignupRequest {
        SignupRequest {
            name: "A".into(),
            email: email.into(),
            password: password.into(),
        }
    }

    fn login_req(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email: email.into(),
            password: password.into(),
        }
    }

    #[tokio::test]
    async fn signup_then_login_issues_token_for_user() {
        let store = MemoryUserStore::default();
        let keys = keys();

        let created = signup(&store, signup_req("a@x.com", "p1")).await.expect("signup");
        assert_ne!(created.password_hash, "p1");

        let (user, token) = login(&store, &keys, login_req("a@x.com", "p1")).await.expect("login");
        assert_eq!(user.id, created.id);

        let claims = keys.verify(&token).expect("token verifies");
        assert_eq!(claims.id, created.id);
        assert_eq!(claims.email, "a@x.com");
    }

    #[tokio::test]
    async fn duplicate_signup_fails_regardless_of_password() {
        let store = MemoryUserStore::default();
        signup(&store, signup_req("a@x.com", "p1")).await.expect("signup");

        for password in ["p1", "something-else"] {
            let err = signup(&store, signup_req("a@x.com", password)).await.unwrap_err();
            assert!(matches!(err, AuthError::DuplicateUser));
        }
    }

    #[tokio::test]
    async fn insert_race_on_same_email_is_duplicate_user() {
        let err = signup(&RacedUserStore, signup_req("a@x.com", "p1")).await.unwrap_err();
        assert!(matches!(err, AuthError::DuplicateUser));
        assert_eq!(err.to_string(), "User already exists!");
    }

    #[tokio::test]
    async fn wrong_password_and_unknown_email_are_indistinguishable() {
        let store = MemoryUserStore::default();
        signup(&store, signup_req("a@x.com", "p1")).await.expect("signup");

        let wrong = login(&store, &keys(), login_req("a@x.com", "wrong")).await.unwrap_err();
        let unknown = login(&store, &keys(), login_req("b@x.com", "p1")).await.unwrap_err();

        assert!(matches!(wrong, AuthError::InvalidCredentials));
        assert!(matches!(unknown, AuthError::InvalidCredentials));
        assert_eq!(wrong.to_string(), unknown.to_string());
    }

    #[tokio::test]
    async fn store_outage_is_service_unavailable() {
        let err = signup(&DownUserStore, signup_req("a@x.com", "p1")).await.unwrap_err();
        assert!(matches!(err, AuthError::ServiceUnavailable(_)));

        let err = login(&DownUserStore, &keys(), login_req("a@x.com", "p1")).await.unwrap_err();
        assert!(matches!(err, AuthError::ServiceUnavailable(_)));
    }

    #[test]
    fn cookies_are_http_only_and_site_wide() {
        assert_eq!(session_cookie("abc"), "token=abc; HttpOnly; Path=/");
        assert_eq!(cleared_session_cookie(), "token=; HttpOnly; Path=/; Max-Age=0");
    }
}
