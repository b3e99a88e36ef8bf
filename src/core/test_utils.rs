use std::sync::{
    atomic::{AtomicBool, Ordering},
    Mutex,
};

use async_trait::async_trait;
use chrono::{Duration, Local};
use jsonwebtoken::{encode, EncodingKey, Header};
use uuid::Uuid;

use super::{error::RepositoryError, security::Claims};
use crate::{
    model::{
        celebrity::Celebrity,
        profile::{Profile, ProfileKind},
    },
    repository::{celebrity::CelebrityRepository, profile::ProfileRepository},
    settings::Config,
};

pub fn test_config() -> Config {
    Config {
        env: "test".to_string(),
        host: "127.0.0.1".to_string(),
        port: 8000,
        prefix: Some("/api".to_string()),
        database_url: std::env::var("DATABASE_URL").unwrap_or_default(),
        jwt_secret: "test-jwt-secret".to_string(),
        log_dir: None,
        log_level: None,
    }
}

/// Claims as the identity service would issue them.
pub fn user_claims(user_id: &Uuid, exp_minutes: i64) -> Claims {
    Claims {
        sub: user_id.to_string(),
        exp: (Local::now() + Duration::minutes(exp_minutes)).timestamp(),
    }
}

pub fn encode_token(claims: &Claims, jwt_secret: &str) -> anyhow::Result<String> {
    let key = EncodingKey::from_secret(jwt_secret.as_bytes());
    Ok(encode(&Header::default(), claims, &key)?)
}

pub struct TestUser {
    pub user_id: Uuid,
    pub token: String,
}

pub fn generate_test_user(config: &Config) -> anyhow::Result<TestUser> {
    let user_id = Uuid::now_v7();
    let token = encode_token(&user_claims(&user_id, 30), &config.jwt_secret)?;
    Ok(TestUser { user_id, token })
}

/// Keeps rows in insertion order and enforces one main profile per user.
#[derive(Default)]
pub struct MemoryProfileRepository {
    rows: Mutex<Vec<Profile>>,
    hide_main: AtomicBool,
    vanish_on_update: AtomicBool,
}

impl MemoryProfileRepository {
    /// Make `find_main_by_user` miss, as a concurrent request would.
    pub fn hide_main_lookup(&self, hide: bool) {
        self.hide_main.store(hide, Ordering::SeqCst);
    }

    /// Drop the row right before `update` writes, as a concurrent delete would.
    pub fn vanish_on_update(&self, vanish: bool) {
        self.vanish_on_update.store(vanish, Ordering::SeqCst);
    }
}

#[async_trait]
impl ProfileRepository for MemoryProfileRepository {
    async fn find_by_user(
        &self,
        user_id: &Uuid,
        kind: Option<ProfileKind>,
    ) -> Result<Vec<Profile>, RepositoryError> {
        let rows = self.rows.lock().unwrap();
        let mut data: Vec<Profile> = rows
            .iter()
            .filter(|x| x.user_id == *user_id && kind.map_or(true, |kind| x.kind == kind))
            .cloned()
            .collect();
        data.sort_by_key(|x| x.created_at);
        Ok(data)
    }

    async fn find_main_by_user(&self, user_id: &Uuid) -> Result<Option<Profile>, RepositoryError> {
        if self.hide_main.load(Ordering::SeqCst) {
            return Ok(None);
        }
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .find(|x| x.user_id == *user_id && x.kind == ProfileKind::Main)
            .cloned())
    }

    async fn find_by_id(
        &self,
        user_id: &Uuid,
        id: &Uuid,
    ) -> Result<Option<Profile>, RepositoryError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .find(|x| x.id == *id && x.user_id == *user_id)
            .cloned())
    }

    async fn create(&self, profile: &Profile) -> Result<(), RepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        if profile.kind == ProfileKind::Main
            && rows
                .iter()
                .any(|x| x.user_id == profile.user_id && x.kind == ProfileKind::Main)
        {
            return Err(RepositoryError::UniqueViolation(
                "profile_one_main_per_user".to_string(),
            ));
        }
        rows.push(profile.clone());
        Ok(())
    }

    async fn update(&self, profile: &Profile) -> Result<bool, RepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        if self.vanish_on_update.load(Ordering::SeqCst) {
            rows.retain(|x| x.id != profile.id);
        }
        match rows
            .iter_mut()
            .find(|x| x.id == profile.id && x.user_id == profile.user_id)
        {
            Some(row) => {
                *row = profile.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, user_id: &Uuid, id: &Uuid) -> Result<(), RepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        rows.retain(|x| !(x.id == *id && x.user_id == *user_id));
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryCelebrityRepository {
    rows: Mutex<Vec<Celebrity>>,
}

impl MemoryCelebrityRepository {
    pub fn insert(&self, celebrity: Celebrity) {
        self.rows.lock().unwrap().push(celebrity);
    }
}

#[async_trait]
impl CelebrityRepository for MemoryCelebrityRepository {
    async fn search(
        &self,
        search: Option<&str>,
        limit: u32,
    ) -> Result<Vec<Celebrity>, RepositoryError> {
        let search = search.map(|x| x.to_lowercase());
        let rows = self.rows.lock().unwrap();
        let mut data: Vec<Celebrity> = rows
            .iter()
            .filter(|x| {
                search
                    .as_ref()
                    .map_or(true, |search| x.name.to_lowercase().contains(search.as_str()))
            })
            .cloned()
            .collect();
        data.sort_by(|a, b| a.name.cmp(&b.name));
        data.truncate(limit as usize);
        Ok(data)
    }

    async fn create(&self, celebrity: &Celebrity) -> Result<(), RepositoryError> {
        self.insert(celebrity.clone());
        Ok(())
    }
}
