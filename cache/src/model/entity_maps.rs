use crate::model::{CachedRole, CachedUser};
use dashmap::DashMap;
use model::guild::Role;
use model::user::User;
use model::Snowflake;
use std::ops::Deref;

pub trait EntityMap {
    type Entity;
    type CachedEntity: Clone + From<Self::Entity>;

    fn new() -> Self;
}

// ========================
// RoleMap
// ========================
#[derive(Debug)]
pub struct RoleMap(DashMap<Snowflake, CachedRole>);

impl RoleMap {
    pub fn get_converted(&self, id: Snowflake) -> Option<Role> {
        self.0
            .get(&id)
            .map(|role| role.value().clone().into_role(id))
    }
}

impl EntityMap for RoleMap {
    type Entity = Role;
    type CachedEntity = CachedRole;

    fn new() -> Self {
        Self(DashMap::new())
    }
}

impl Deref for RoleMap {
    type Target = DashMap<Snowflake, CachedRole>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

// ========================
// UserMap
// ========================
#[derive(Clone, Debug)]
pub struct UserMap(DashMap<Snowflake, CachedUser>);

impl UserMap {
    pub fn get_converted(&self, id: Snowflake) -> Option<User> {
        self.0
            .get(&id)
            .map(|user| user.value().clone().into_user(id))
    }
}

impl EntityMap for UserMap {
    type Entity = User;
    type CachedEntity = CachedUser;

    fn new() -> Self {
        Self(DashMap::new())
    }
}

impl Deref for UserMap {
    type Target = DashMap<Snowflake, CachedUser>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

