use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Emoji, Role};
use crate::{ImageHash, Result, Snowflake};

/// The slice of a guild that permission resolution and emoji handling need.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Guild {
    pub id: Snowflake,
    pub name: Box<str>,
    #[serde(default)]
    pub icon: Option<ImageHash>,
    pub owner_id: Snowflake,
    #[serde(default)]
    pub roles: Vec<Role>,
    #[serde(default)]
    pub emojis: Vec<Emoji>,
}

impl Guild {
    /// Parses a guild payload, stamping the guild's ID onto each of its emojis.
    pub fn from_payload(data: Value) -> Result<Guild> {
        let mut guild: Guild = serde_json::from_value(data)?;

        let id = guild.id;
        guild
            .emojis
            .iter_mut()
            .for_each(|emoji| emoji.guild_id = Some(id));

        Ok(guild)
    }

    /// The @everyone role, if the guild's roles have been loaded.
    pub fn default_role(&self) -> Option<&Role> {
        self.roles.iter().find(|role| role.is_default(self.id))
    }

    pub fn role(&self, id: Snowflake) -> Option<&Role> {
        self.roles.iter().find(|role| role.id == id)
    }

    pub fn is_owner(&self, user_id: Snowflake) -> bool {
        self.owner_id == user_id
    }
}

impl PartialEq for Guild {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
