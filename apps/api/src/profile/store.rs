//! Profile persistence behind a small async trait.
//!
//! Production uses Redis as a key-value store (`profile:{user_id}` → JSON);
//! `MemoryProfileStore` backs local runs without Redis and the test suite.

use std::collections::HashMap;

use anyhow::Context;
use async_trait::async_trait;
use redis::AsyncCommands;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::errors::AppError;
use crate::profile::models::StoredProfile;

#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn get(&self, user_id: Uuid) -> Result<Option<StoredProfile>, AppError>;
    async fn put(&self, profile: &StoredProfile) -> Result<(), AppError>;
}

pub fn profile_key(user_id: Uuid) -> String {
    format!("profile:{user_id}")
}

pub struct RedisProfileStore {
    client: redis::Client,
}

impl RedisProfileStore {
    pub fn new(client: redis::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProfileStore for RedisProfileStore {
    async fn get(&self, user_id: Uuid) -> Result<Option<StoredProfile>, AppError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let raw: Option<String> = conn.get(profile_key(user_id)).await?;

        let Some(raw) = raw else {
            return Ok(None);
        };
        let profile: StoredProfile = serde_json::from_str(&raw)
            .with_context(|| format!("Stored profile for user {user_id} is malformed"))?;
        Ok(Some(profile))
    }

    async fn put(&self, profile: &StoredProfile) -> Result<(), AppError> {
        let json = serde_json::to_string(profile).context("Failed to serialize profile")?;
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        conn.set::<_, _, ()>(profile_key(profile.user_id), json).await?;
        debug!("Stored profile for user {}", profile.user_id);
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryProfileStore {
    profiles: RwLock<HashMap<Uuid, StoredProfile>>,
}

#[async_trait]
impl ProfileStore for MemoryProfileStore {
    async fn get(&self, user_id: Uuid) -> Result<Option<StoredProfile>, AppError> {
        Ok(self.profiles.read().await.get(&user_id).cloned())
    }

    async fn put(&self, profile: &StoredProfile) -> Result<(), AppError> {
        self.profiles
            .write()
            .await
            .insert(profile.user_id, profile.clone());
        Ok(())
    }
}
