// Session authentication flow.
//
// The back office uses cookie sessions. Login is a two-step exchange:
// fetch a one-shot login token, then post the salted password digest.
// Passwords are never sent raw — the server stores the client-side
// SHA-256 and compares `sha256(stored_hash + token)`.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::client::AdminClient;
use crate::error::Error;

// ── Endpoints ────────────────────────────────────────────────────────

const USERS_ME: &str = "/users/me";
const USERS_ME_LOGIN: &str = "/users/me/login";

// ── Wire types ───────────────────────────────────────────────────────

/// The current-user record returned by `GET /users/me`.
///
/// An anonymous session has an empty `account`; the route guard treats
/// that as "not signed in".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserInfo {
    pub anonymous: bool,
    pub account: String,
    pub track_id: String,
    pub roles: Vec<String>,
    pub groups: Vec<String>,
    /// Server time, RFC 3339.
    pub date: String,
    pub ip: String,
}

impl UserInfo {
    /// Whether this session is signed in.
    pub fn signed_in(&self) -> bool {
        !self.account.is_empty()
    }
}

#[derive(Deserialize)]
struct LoginTokenResp {
    #[serde(default)]
    token: String,
}

#[derive(Serialize)]
struct AccountParams<'a> {
    account: &'a str,
    password: String,
}

// ── Digest helpers ───────────────────────────────────────────────────

fn sha256_hex(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    hex::encode(hasher.finalize())
}

/// The stored password shape: the client-side hash of the raw password.
fn password_hash(password: &SecretString) -> String {
    sha256_hex(password.expose_secret())
}

/// The per-login digest: stored hash salted with the one-shot token.
fn login_digest(hash: &str, token: &str) -> String {
    sha256_hex(&format!("{hash}{token}"))
}

// ── Client methods ───────────────────────────────────────────────────

impl AdminClient {
    /// Fetch the current-user record. Always succeeds for a reachable
    /// server; anonymous sessions come back with an empty account.
    pub async fn get_user_info(&self) -> Result<UserInfo, Error> {
        self.get_json(USERS_ME).await
    }

    /// Sign in. Fetches the login token, posts the salted digest, and
    /// returns the signed-in user record. The session cookie ends up in
    /// the shared client's jar.
    pub async fn login(&self, account: &str, password: &SecretString) -> Result<UserInfo, Error> {
        let token: LoginTokenResp = self.get_json(USERS_ME_LOGIN).await?;
        let digest = login_digest(&password_hash(password), &token.token);

        self.post_json(
            USERS_ME_LOGIN,
            &AccountParams {
                account,
                password: digest,
            },
        )
        .await
    }

    /// Register a new account. The password travels as its client-side
    /// hash, which becomes the stored credential.
    pub async fn register(
        &self,
        account: &str,
        password: &SecretString,
    ) -> Result<UserInfo, Error> {
        self.post_json(
            USERS_ME,
            &AccountParams {
                account,
                password: password_hash(password),
            },
        )
        .await
    }

    /// Sign out, invalidating the server-side session.
    pub async fn logout(&self) -> Result<(), Error> {
        self.delete(USERS_ME).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn digest_is_stable_and_salted() {
        let hash = password_hash(&SecretString::from("secret".to_string()));
        // sha256("secret")
        assert_eq!(
            hash,
            "2bb80d537b1da3e38bd30361aa855686bde0eacd7162fef6a25fe97bf527a25b"
        );
        // Salting with different tokens must produce different digests.
        assert_ne!(login_digest(&hash, "aaaa1111"), login_digest(&hash, "bbbb2222"));
    }

    #[test]
    fn anonymous_user_is_not_signed_in() {
        assert!(!UserInfo::default().signed_in());
        let user = UserInfo {
            account: "admin".into(),
            ..UserInfo::default()
        };
        assert!(user.signed_in());
    }
}
