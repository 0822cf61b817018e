use crate::model::{EntityMap, RoleMap, UserMap};
use crate::{CacheError, Options, Result};
use async_trait::async_trait;
use dashmap::DashMap;
use model::cache::IdentityCache;
use model::guild::Role;
use model::user::User;
use model::Snowflake;
use serde_json::Value;
use tracing::{trace, warn};

pub struct MemoryCache {
    opts: Options,
    users: UserMap,
    roles: RoleMap,
    // user_id -> dm channel_id
    dm_channels: DashMap<Snowflake, Snowflake>,
}

impl MemoryCache {
    pub fn new(opts: Options) -> Self {
        MemoryCache {
            opts,
            users: UserMap::new(),
            roles: RoleMap::new(),
            dm_channels: DashMap::new(),
        }
    }

    pub fn store_user(&self, user: User) -> Result<()> {
        if !self.opts.users {
            return Ok(());
        }

        trace!(user_id = %user.id, "Storing user");
        self.users.insert(user.id, user.into());
        Ok(())
    }

    pub fn store_users(&self, users: Vec<User>) -> Result<()> {
        for user in users {
            self.store_user(user)?;
        }

        Ok(())
    }

    pub fn delete_user(&self, id: Snowflake) -> Result<()> {
        if !self.opts.users {
            return Ok(());
        }

        self.users.remove(&id);
        Ok(())
    }

    pub fn store_role(&self, role: Role) -> Result<()> {
        if !self.opts.roles {
            return Ok(());
        }

        trace!(role_id = %role.id, "Storing role");
        self.roles.insert(role.id, role.into());
        Ok(())
    }

    pub fn store_roles(&self, roles: Vec<Role>) -> Result<()> {
        for role in roles {
            self.store_role(role)?;
        }

        Ok(())
    }

    pub fn delete_role(&self, id: Snowflake) -> Result<()> {
        if !self.opts.roles {
            return Ok(());
        }

        self.roles.remove(&id);
        Ok(())
    }

    pub fn store_dm_channel(&self, user_id: Snowflake, channel_id: Snowflake) -> Result<()> {
        if !self.opts.dm_channels {
            return Ok(());
        }

        self.dm_channels.insert(user_id, channel_id);
        Ok(())
    }
}

impl Default for MemoryCache {
    fn default() -> Self {
        MemoryCache::new(Options::default())
    }
}

#[async_trait]
impl IdentityCache for MemoryCache {
    fn place_user_data(&self, data: &Value) -> model::Result<()> {
        // Members are only valid once their user is cached, so this cannot be a silent no-op
        if !self.opts.users {
            warn!("User store disabled, rejecting user payload");
            return Err(CacheError::StoreDisabled.into());
        }

        let user: User = serde_json::from_value(data.clone()).map_err(CacheError::from)?;
        self.store_user(user)?;
        Ok(())
    }

    fn get_user(&self, id: Snowflake) -> Option<User> {
        if !self.opts.users {
            return None;
        }

        let user = self.users.get_converted(id);
        if user.is_none() {
            trace!(user_id = %id, "User cache miss");
        }

        user
    }

    fn get_role(&self, id: Snowflake) -> Option<Role> {
        if !self.opts.roles {
            return None;
        }

        self.roles.get_converted(id)
    }

    async fn get_dm_channel_id(&self, user_id: Snowflake) -> model::Result<Snowflake> {
        if !self.opts.dm_channels {
            return Err(CacheError::StoreDisabled.into());
        }

        self.dm_channels
            .get(&user_id)
            .map(|channel| *channel.value())
            .ok_or(model::Error::DmChannelNotFound(user_id))
    }
}
