use serde::{Deserialize, Serialize};

use crate::{Color, Permissions, Snowflake};

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct Role {
    pub id: Snowflake,
    pub name: String,
    #[serde(default)]
    pub color: Color,
    #[serde(default)]
    pub hoist: bool,
    #[serde(default)]
    pub position: i16,
    pub permissions: Permissions,
    #[serde(default)]
    pub managed: bool,
    #[serde(default)]
    pub mentionable: bool,
}

impl Role {
    /// The @everyone role shares its ID with the guild.
    pub fn is_default(&self, guild_id: Snowflake) -> bool {
        self.id == guild_id
    }

    pub fn mention(&self) -> String {
        format!("<@&{}>", self.id)
    }
}

impl From<&Role> for Snowflake {
    fn from(role: &Role) -> Self {
        role.id
    }
}

impl From<Role> for Snowflake {
    fn from(role: Role) -> Self {
        role.id
    }
}
