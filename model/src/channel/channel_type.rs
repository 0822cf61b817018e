use serde_repr::{Deserialize_repr, Serialize_repr};
use ChannelType::*;

#[derive(Serialize_repr, Deserialize_repr, Debug, Clone, Copy, Eq, PartialEq)]
#[repr(u8)]
pub enum ChannelType {
    GuildText = 0,
    DM = 1,
    GuildVoice = 2,
    GroupDM = 3,
    GuildCategory = 4,
    GuildNews = 5,
    GuildAnnouncementThread = 10,
    GuildPublicThread = 11,
    GuildPrivateThread = 12,
    GuildStageVoice = 13,
    GuildDirectory = 14,
    GuildForum = 15,
    GuildMedia = 16,
}

impl ChannelType {
    /// Whether overwrites on this channel are computed against a guild.
    pub fn is_guild(&self) -> bool {
        !matches!(self, DM | GroupDM)
    }
}
