use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::ops::Deref;

use super::Member;
use crate::http::HttpClient;
use crate::user::User;
use crate::{Error, Result, Snowflake};
use tracing::debug;

/// An emoji as referenced in reactions and messages. Standard unicode emojis have no ID and
/// carry the glyph itself as their name.
#[derive(Serialize, Deserialize, Debug, Clone, Default, Eq, PartialEq)]
pub struct PartialEmoji {
    #[serde(default)]
    pub id: Option<Snowflake>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub animated: bool,
}

impl PartialEmoji {
    pub fn unicode<S: Into<String>>(glyph: S) -> PartialEmoji {
        PartialEmoji {
            id: None,
            name: Some(glyph.into()),
            animated: false,
        }
    }

    /// The form used in reaction routes: `name:id` for custom emojis, the bare name otherwise.
    pub fn req_format(&self) -> String {
        let name = self.name.as_deref().unwrap_or_default();
        match self.id {
            Some(id) => format!("{}:{}", name, id),
            None => name.to_owned(),
        }
    }
}

impl fmt::Display for PartialEmoji {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.name.as_deref().unwrap_or_default();
        match self.id {
            Some(id) if self.animated => write!(f, "<a:{}:{}>", name, id),
            Some(id) => write!(f, "<:{}:{}>", name, id),
            None => f.write_str(name),
        }
    }
}

/// A custom emoji belonging to a guild.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Emoji {
    #[serde(flatten)]
    pub partial: PartialEmoji,
    #[serde(default)]
    pub roles: HashSet<Snowflake>,
    #[serde(rename = "user", default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<User>,
    #[serde(default)]
    pub require_colons: bool,
    #[serde(default)]
    pub managed: bool,
    #[serde(default)]
    pub available: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guild_id: Option<Snowflake>,
}

impl Emoji {
    /// May be false when the guild loses the boosts that unlocked the slot.
    pub fn is_usable(&self) -> bool {
        self.available
    }

    /// Emojis restricted to roles are only usable by members holding one of them.
    pub fn is_usable_by(&self, member: &Member) -> bool {
        self.is_usable()
            && (self.roles.is_empty()
                || member.role_ids.iter().any(|role_id| self.roles.contains(role_id)))
    }

    pub async fn delete<H: HttpClient + ?Sized>(
        &self,
        http: &H,
        reason: Option<&str>,
    ) -> Result<()> {
        let guild_id = self.guild_id.ok_or(Error::EmojiWithoutGuild)?;
        let emoji_id = self.id.ok_or_else(|| Error::missing_field("Emoji", "id"))?;

        debug!(%guild_id, %emoji_id, "Deleting emoji");
        http.delete_guild_emoji(guild_id, emoji_id, reason).await?;
        Ok(())
    }
}

impl Deref for Emoji {
    type Target = PartialEmoji;

    fn deref(&self) -> &Self::Target {
        &self.partial
    }
}

impl fmt::Display for Emoji {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.partial, f)
    }
}

impl PartialEq for Emoji {
    fn eq(&self, other: &Self) -> bool {
        match (self.id, other.id) {
            (Some(self_id), Some(other_id)) => self_id == other_id,
            _ => false,
        }
    }
}
