use std::sync::Arc;

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::{
    core::{
        error::{ProfileError, RepositoryError},
        utils::now,
    },
    model::{
        celebrity::Celebrity,
        profile::{NewProfile, Profile, ProfileChanges, ProfileKind},
    },
    repository::{celebrity::CelebrityRepository, profile::ProfileRepository},
};

use super::zodiac::{owned_traits, sign_from_date};

pub const MAIN_PROFILE_EXISTS: &str = "main profile already exists";
pub const MAIN_PROFILE_UNDELETABLE: &str = "cannot delete main profile";
pub const CELEBRITY_SEARCH_LIMIT: u32 = 20;

/// Profile business rules on top of the persistence collaborators.
#[derive(Clone)]
pub struct ProfileService {
    profiles: Arc<dyn ProfileRepository>,
    celebrities: Arc<dyn CelebrityRepository>,
}

impl ProfileService {
    pub fn new(
        profiles: Arc<dyn ProfileRepository>,
        celebrities: Arc<dyn CelebrityRepository>,
    ) -> Self {
        Self {
            profiles,
            celebrities,
        }
    }

    pub async fn list_profiles(&self, user_id: &Uuid) -> Result<Vec<Profile>, ProfileError> {
        debug!("list profiles of user {}", user_id);
        Ok(self.profiles.find_by_user(user_id, None).await?)
    }

    pub async fn get_main_profile(&self, user_id: &Uuid) -> Result<Option<Profile>, ProfileError> {
        Ok(self.profiles.find_main_by_user(user_id).await?)
    }

    pub async fn get_profile_by_id(
        &self,
        user_id: &Uuid,
        profile_id: &Uuid,
    ) -> Result<Profile, ProfileError> {
        self.profiles
            .find_by_id(user_id, profile_id)
            .await?
            .ok_or_else(|| ProfileError::NotFound(format!("profile with id = {} not found", profile_id)))
    }

    pub async fn get_profiles_by_type(
        &self,
        user_id: &Uuid,
        kind: ProfileKind,
    ) -> Result<Vec<Profile>, ProfileError> {
        debug!("list {:?} profiles of user {}", kind, user_id);
        Ok(self.profiles.find_by_user(user_id, Some(kind)).await?)
    }

    pub async fn create_profile(
        &self,
        user_id: &Uuid,
        payload: NewProfile,
    ) -> Result<Profile, ProfileError> {
        if payload.kind == ProfileKind::Main
            && self.profiles.find_main_by_user(user_id).await?.is_some()
        {
            warn!("user {} already has a main profile", user_id);
            return Err(ProfileError::Conflict(MAIN_PROFILE_EXISTS.to_string()));
        }

        let sun_sign = sign_from_date(&payload.birth_date);
        let now = now();
        let profile = Profile {
            id: Uuid::now_v7(),
            user_id: *user_id,
            kind: payload.kind,
            name: payload.name,
            avatar: payload.avatar,
            birth_date: payload.birth_date,
            birth_time: payload.birth_time,
            birth_place: payload.birth_place,
            sun_sign,
            moon_sign: None,
            ascendant: None,
            traits: owned_traits(sun_sign),
            created_at: now,
            updated_at: now,
        };
        // The partial unique index catches a concurrent create that passed the check above.
        match self.profiles.create(&profile).await {
            Ok(()) => {}
            Err(RepositoryError::UniqueViolation(detail)) => {
                warn!("main profile race for user {}: {}", user_id, detail);
                return Err(ProfileError::Conflict(MAIN_PROFILE_EXISTS.to_string()));
            }
            Err(err) => return Err(err.into()),
        }
        info!(
            "created {:?} profile {} for user {}",
            profile.kind, profile.id, user_id
        );
        Ok(profile)
    }

    pub async fn update_profile(
        &self,
        user_id: &Uuid,
        profile_id: &Uuid,
        payload: ProfileChanges,
    ) -> Result<Profile, ProfileError> {
        let mut profile = self.get_profile_by_id(user_id, profile_id).await?;
        if payload.is_empty() {
            return Ok(profile);
        }

        if let Some(name) = payload.name {
            profile.name = name;
        }
        if let Some(avatar) = payload.avatar {
            profile.avatar = Some(avatar);
        }
        if let Some(birth_time) = payload.birth_time {
            profile.birth_time = Some(birth_time);
        }
        if let Some(birth_place) = payload.birth_place {
            profile.birth_place = Some(birth_place);
        }
        if let Some(birth_date) = payload.birth_date {
            profile.birth_date = birth_date;
            profile.sun_sign = sign_from_date(&birth_date);
            profile.traits = owned_traits(profile.sun_sign);
        }
        profile.updated_at = now();

        // The row can vanish between the lookup above and this write.
        if !self.profiles.update(&profile).await? {
            return Err(ProfileError::NotFound(format!(
                "profile with id = {} not found",
                profile_id
            )));
        }
        info!("updated profile {} for user {}", profile.id, user_id);
        Ok(profile)
    }

    pub async fn delete_profile(&self, user_id: &Uuid, profile_id: &Uuid) -> Result<(), ProfileError> {
        let profile = self.get_profile_by_id(user_id, profile_id).await?;
        if profile.kind == ProfileKind::Main {
            warn!("refuse to delete main profile {} of user {}", profile.id, user_id);
            return Err(ProfileError::Conflict(MAIN_PROFILE_UNDELETABLE.to_string()));
        }
        self.profiles.delete(user_id, profile_id).await?;
        info!("deleted profile {} for user {}", profile_id, user_id);
        Ok(())
    }

    /// A blank query lists the whole catalogue.
    pub async fn search_celebrities(
        &self,
        query: Option<&str>,
    ) -> Result<Vec<Celebrity>, ProfileError> {
        let query = query.filter(|x| !x.trim().is_empty());
        Ok(self
            .celebrities
            .search(query, CELEBRITY_SEARCH_LIMIT)
            .await?)
    }
}
