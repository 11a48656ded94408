use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::Result;
use crate::session::{get_json, set_json, SessionStore};

/// Key holding the signed-in user
pub const USER_KEY: &str = "tvposts_user";
/// Key holding onboarding wizard progress
pub const ONBOARDING_KEY: &str = "tvposts_onboarding";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPersona {
    pub mood_profile: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub tv_twin: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchlistShow {
    pub id: String,
    pub name: String,
    pub platform: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub username: String,
    pub persona: UserPersona,
    #[serde(default)]
    pub watchlist: Vec<WatchlistShow>,
}

impl AuthUser {
    /// Stand-in account used when sign-in gives no username
    pub fn demo(username: impl Into<String>) -> Self {
        let show = |id: &str, name: &str, platform: &str| WatchlistShow {
            id: id.to_string(),
            name: name.to_string(),
            platform: platform.to_string(),
        };

        Self {
            email: "demo@example.com".to_string(),
            username: username.into(),
            persona: UserPersona {
                mood_profile: "Dark, Intense, Morally Complex".to_string(),
                tags: vec![
                    "Thriller".to_string(),
                    "Anti-heroes".to_string(),
                    "Plot Twists".to_string(),
                ],
                tv_twin: "@plot_master_77".to_string(),
            },
            watchlist: vec![
                show("1", "Stranger Things", "Netflix"),
                show("2", "The Boys", "Amazon Prime"),
                show("3", "The Witcher", "Netflix"),
                show("4", "Silicon Valley", "HBO"),
            ],
        }
    }

    /// URL slug of the username, e.g. `Binge Watcher` → `binge-watcher`
    pub fn username_slug(&self) -> String {
        self.username
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-")
    }
}

/// Signed-in user state on top of a [`SessionStore`]
pub struct AccountSession {
    store: Arc<dyn SessionStore>,
}

impl AccountSession {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Persist the user; an empty username signs in the demo account
    pub async fn login(&self, user: AuthUser) -> Result<AuthUser> {
        let user = if user.username.trim().is_empty() {
            AuthUser::demo("Demo")
        } else {
            user
        };

        set_json(self.store.as_ref(), USER_KEY, &user).await?;
        tracing::info!("👤 Signed in as {}", user.username);
        Ok(user)
    }

    /// Stored user; corrupt data is removed and treated as signed out
    pub async fn current_user(&self) -> Result<Option<AuthUser>> {
        match get_json::<AuthUser>(self.store.as_ref(), USER_KEY).await {
            Ok(user) => Ok(user),
            Err(e) => {
                tracing::warn!("Discarding unreadable session user: {}", e);
                self.store.remove(USER_KEY).await?;
                Ok(None)
            }
        }
    }

    pub async fn is_authenticated(&self) -> Result<bool> {
        Ok(self.current_user().await?.is_some())
    }

    pub async fn logout(&self) -> Result<()> {
        self.store.remove(USER_KEY).await?;
        self.store.remove(ONBOARDING_KEY).await?;
        Ok(())
    }

    /// Drop a show from the watchlist; no-op when signed out
    pub async fn remove_from_watchlist(&self, show_id: &str) -> Result<Option<AuthUser>> {
        let Some(mut user) = self.current_user().await? else {
            return Ok(None);
        };

        user.watchlist.retain(|show| show.id != show_id);
        set_json(self.store.as_ref(), USER_KEY, &user).await?;
        Ok(Some(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemorySessionStore;

    fn session() -> (Arc<MemorySessionStore>, AccountSession) {
        let store = Arc::new(MemorySessionStore::new());
        (store.clone(), AccountSession::new(store))
    }

    #[tokio::test]
    async fn test_login_and_restore() {
        let (_, account) = session();
        assert!(!account.is_authenticated().await.unwrap());

        let mut user = AuthUser::demo("Binge Watcher");
        user.email = "binge@example.com".to_string();
        account.login(user.clone()).await.unwrap();

        assert_eq!(account.current_user().await.unwrap(), Some(user));
    }

    #[tokio::test]
    async fn test_empty_username_becomes_demo() {
        let (_, account) = session();
        let mut user = AuthUser::demo("");
        user.watchlist.clear();

        let stored = account.login(user).await.unwrap();
        assert_eq!(stored.username, "Demo");
        assert_eq!(stored.watchlist.len(), 4);
    }

    #[tokio::test]
    async fn test_logout_clears_onboarding() {
        let (store, account) = session();
        account.login(AuthUser::demo("sam")).await.unwrap();
        store.set(ONBOARDING_KEY, "{\"step\":2}").await.unwrap();

        account.logout().await.unwrap();
        assert!(store.get(USER_KEY).await.unwrap().is_none());
        assert!(store.get(ONBOARDING_KEY).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_corrupt_user_is_dropped() {
        let (store, account) = session();
        store.set(USER_KEY, "{not json").await.unwrap();

        assert!(account.current_user().await.unwrap().is_none());
        assert!(store.get(USER_KEY).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_remove_from_watchlist() {
        let (_, account) = session();
        assert!(account.remove_from_watchlist("2").await.unwrap().is_none());

        account.login(AuthUser::demo("sam")).await.unwrap();
        let user = account.remove_from_watchlist("2").await.unwrap().unwrap();
        assert!(user.watchlist.iter().all(|s| s.id != "2"));
        assert_eq!(user.watchlist.len(), 3);

        let restored = account.current_user().await.unwrap().unwrap();
        assert_eq!(restored.watchlist, user.watchlist);
    }

    #[test]
    fn test_username_slug() {
        assert_eq!(AuthUser::demo("Binge  Watcher").username_slug(), "binge-watcher");
    }
}
