use crate::cache::IdentityCache;
use crate::{Result, Snowflake};

/// Something that can be addressed by name and mentioned in a message: a `User` or a `Member`.
pub trait NamedEntity {
    fn id(&self) -> Snowflake;

    fn mention(&self) -> String {
        format!("<@{}>", self.id())
    }

    /// The name shown in the client. Members may need the cache to fall back to their username.
    fn display_name(&self, cache: &dyn IdentityCache) -> Result<String>;
}
