use model::user::{BaseUser, PremiumType, User, UserFlags};
use model::{Color, Discriminator, ImageHash, Snowflake};

#[derive(Clone, Debug)]
pub struct CachedUser {
    pub username: Box<str>,
    pub discriminator: Discriminator,
    pub avatar: Option<ImageHash>,
    pub bot: bool,
    pub system: bool,
    pub public_flags: UserFlags,
    pub premium_type: PremiumType,
    pub banner: Option<ImageHash>,
    pub accent_color: Option<Color>,
}

impl CachedUser {
    pub fn into_user(self, id: Snowflake) -> User {
        User {
            base: BaseUser {
                id,
                username: self.username.into_string(),
                discriminator: self.discriminator,
                avatar_hash: self.avatar,
            },
            bot: self.bot,
            system: self.system,
            public_flags: self.public_flags,
            premium_type: self.premium_type,
            banner_hash: self.banner,
            accent_color: self.accent_color,
        }
    }
}

impl From<User> for CachedUser {
    fn from(other: User) -> Self {
        Self {
            username: other.base.username.into_boxed_str(),
            discriminator: other.base.discriminator,
            avatar: other.base.avatar_hash,
            bot: other.bot,
            system: other.system,
            public_flags: other.public_flags,
            premium_type: other.premium_type,
            banner: other.banner_hash,
            accent_color: other.accent_color,
        }
    }
}
