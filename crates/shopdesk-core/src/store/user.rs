// ── User session store ──
//
// Holds the current-user record and the processing flag the route
// guard synchronizes on. Settlement is observable through the flag's
// watch channel — no polling anywhere.

use std::sync::{Arc, RwLock};

use secrecy::SecretString;

use shopdesk_api::{AdminClient, UserInfo};

use crate::error::CoreError;
use crate::store::ProcessingFlag;

pub struct UserStore {
    client: Arc<AdminClient>,
    info: RwLock<UserInfo>,
    processing: ProcessingFlag,
}

impl UserStore {
    pub fn new(client: Arc<AdminClient>) -> Self {
        Self {
            client,
            info: RwLock::new(UserInfo::default()),
            processing: ProcessingFlag::new(),
        }
    }

    /// The processing flag for the user operation group.
    pub fn processing(&self) -> &ProcessingFlag {
        &self.processing
    }

    /// Snapshot of the cached user record.
    pub fn info(&self) -> UserInfo {
        self.read_info().clone()
    }

    /// The signed-in account, or `None` for an anonymous session.
    pub fn account(&self) -> Option<String> {
        let info = self.read_info();
        if info.account.is_empty() {
            None
        } else {
            Some(info.account.clone())
        }
    }

    fn read_info(&self) -> std::sync::RwLockReadGuard<'_, UserInfo> {
        self.info.read().expect("user info lock poisoned")
    }

    fn store_info(&self, info: &UserInfo) {
        *self.info.write().expect("user info lock poisoned") = info.clone();
    }

    /// Wait until no user request is outstanding. Resolves immediately
    /// when the store is idle.
    pub async fn settled(&self) {
        self.processing.settled().await;
    }

    // ── Actions ──────────────────────────────────────────────────────

    /// Fetch the current-user record (run once at application start;
    /// the route guard waits for this to settle).
    pub async fn fetch(&self) -> Result<UserInfo, CoreError> {
        let _guard = self.processing.begin();
        let info = self.client.get_user_info().await?;
        tracing::debug!(account = %info.account, anonymous = info.anonymous, "user info fetched");
        self.store_info(&info);
        Ok(info)
    }

    /// Sign in and cache the resulting user record.
    pub async fn login(
        &self,
        account: &str,
        password: &SecretString,
    ) -> Result<UserInfo, CoreError> {
        let _guard = self.processing.begin();
        let info = self.client.login(account, password).await?;
        self.store_info(&info);
        Ok(info)
    }

    /// Register a new account and cache the resulting user record.
    pub async fn register(
        &self,
        account: &str,
        password: &SecretString,
    ) -> Result<UserInfo, CoreError> {
        let _guard = self.processing.begin();
        let info = self.client.register(account, password).await?;
        self.store_info(&info);
        Ok(info)
    }

    /// Sign out and reset the cached record to anonymous.
    pub async fn logout(&self) -> Result<(), CoreError> {
        let _guard = self.processing.begin();
        self.client.logout().await?;
        self.store_info(&UserInfo::default());
        Ok(())
    }
}
