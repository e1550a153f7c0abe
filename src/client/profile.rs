//! Profile endpoints
//!
//! Both calls refresh the session's user record from the server's answer.

use super::PortalClient;
use crate::auth::User;
use crate::utils::error::Result;
use serde::Deserialize;
use serde::Serialize;
use tracing::info;

/// The profile endpoint answers either with the record or with `{ "user": record }`
#[derive(Deserialize)]
#[serde(untagged)]
enum ProfileBody {
    Wrapped { user: User },
    Bare(User),
}

impl ProfileBody {
    fn into_user(self) -> User {
        match self {
            ProfileBody::Wrapped { user } => user,
            ProfileBody::Bare(user) => user,
        }
    }
}

impl PortalClient {
    /// Fetch the current user's profile and refresh the session with it
    pub async fn fetch_profile(&self) -> Result<User> {
        let path = self.config.profile_path.clone();
        let user = self.get::<ProfileBody>(&path).await?.into_user();

        self.auth.update_user(user.clone()).await?;
        Ok(user)
    }

    /// Save profile changes server-side, then refresh the session with the stored record
    pub async fn update_profile<B: Serialize + ?Sized>(&self, changes: &B) -> Result<User> {
        let path = self.config.profile_path.clone();
        let user = self.put::<B, ProfileBody>(&path, changes).await?.into_user();

        self.auth.update_user(user.clone()).await?;
        info!("Profile updated");
        Ok(user)
    }
}
