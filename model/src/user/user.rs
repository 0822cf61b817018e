use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::ops::Deref;

use super::{send_direct_message, NamedEntity, PremiumType, UserFlags};
use crate::cache::IdentityCache;
use crate::http::HttpClient;
use crate::{Asset, Color, Discriminator, ImageHash, Result, Snowflake};

/// The fields every user payload carries, partial or not.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct BaseUser {
    pub id: Snowflake,
    pub username: String,
    pub discriminator: Discriminator,
    #[serde(rename = "avatar", default)]
    pub avatar_hash: Option<ImageHash>,
}

impl BaseUser {
    /// The user's avatar, or the default avatar picked by discriminator.
    pub fn avatar(&self) -> Asset {
        match self.avatar_hash {
            Some(hash) => Asset::from_path_hash(&format!("avatars/{}/{{}}", self.id), hash),
            None => Asset::default_avatar(self.discriminator.0),
        }
    }

    pub async fn send<C, H>(&self, cache: &C, http: &H, payload: Value) -> Result<Value>
    where
        C: IdentityCache + ?Sized,
        H: HttpClient + ?Sized,
    {
        send_direct_message(self.id, cache, http, payload).await
    }
}

impl NamedEntity for BaseUser {
    fn id(&self) -> Snowflake {
        self.id
    }

    fn display_name(&self, _: &dyn IdentityCache) -> Result<String> {
        Ok(self.username.clone())
    }
}

impl fmt::Display for BaseUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.username, self.discriminator)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct User {
    #[serde(flatten)]
    pub base: BaseUser,
    #[serde(default)]
    pub bot: bool,
    #[serde(default)]
    pub system: bool,
    #[serde(default)]
    pub public_flags: UserFlags,
    #[serde(default)]
    pub premium_type: PremiumType,
    #[serde(rename = "banner", default, skip_serializing_if = "Option::is_none")]
    pub banner_hash: Option<ImageHash>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<Color>,
}

impl User {
    pub fn banner(&self) -> Option<Asset> {
        self.banner_hash
            .map(|hash| Asset::from_path_hash(&format!("banners/{}/{{}}", self.id), hash))
    }
}

impl Deref for User {
    type Target = BaseUser;

    fn deref(&self) -> &Self::Target {
        &self.base
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.base, f)
    }
}

impl NamedEntity for User {
    fn id(&self) -> Snowflake {
        self.base.id
    }

    fn display_name(&self, _: &dyn IdentityCache) -> Result<String> {
        Ok(self.username.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn user() -> User {
        serde_json::from_value(json!({
            "id": "80351110224678912",
            "username": "Nelly",
            "discriminator": "1337",
            "avatar": "8342729096ea3675442027381ff50dfe",
            "banner": "a_06c16474723fe537c283b8efa61a30c8",
            "accent_color": 16711680,
            "public_flags": 64,
            "premium_type": 2
        }))
        .unwrap()
    }

    #[test]
    fn test_parse() {
        let user = user();
        assert_eq!(user.id, Snowflake(80351110224678912));
        assert!(!user.bot);
        assert!(user.public_flags.contains(UserFlags::HYPESQUAD_ONLINE_HOUSE_1));
        assert_eq!(user.premium_type, PremiumType::Nitro);
        assert_eq!(user.accent_color, Some(Color(0xff0000)));
        assert_eq!(user.to_string(), "Nelly#1337");
        assert_eq!(user.mention(), "<@80351110224678912>");
    }

    #[test]
    fn test_assets() {
        let user = user();
        assert_eq!(
            user.avatar().url(),
            "https://cdn.discordapp.com/avatars/80351110224678912/8342729096ea3675442027381ff50dfe.png"
        );
        assert_eq!(
            user.banner().unwrap().url(),
            "https://cdn.discordapp.com/banners/80351110224678912/a_06c16474723fe537c283b8efa61a30c8.gif"
        );
    }

    #[test]
    fn test_missing_required_field() {
        let res = serde_json::from_value::<User>(json!({ "id": "1", "discriminator": "0001" }));
        assert!(res.is_err());
    }

    #[test]
    fn test_defaults() {
        let user: User = serde_json::from_value(json!({
            "id": 5,
            "username": "bare",
            "discriminator": "0007",
            "avatar": null
        }))
        .unwrap();

        assert_eq!(user.premium_type, PremiumType::None);
        assert!(user.public_flags.is_empty());
        assert!(user.banner().is_none());
        assert_eq!(user.avatar().url(), "https://cdn.discordapp.com/embed/avatars/2.png");
    }
}
