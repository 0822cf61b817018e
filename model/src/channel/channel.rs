use serde::{Deserialize, Serialize};

use super::{ChannelType, PermissionOverwrite};
use crate::Snowflake;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Channel {
    pub id: Snowflake,
    #[serde(rename = "type")]
    pub channel_type: ChannelType,
    #[serde(default)]
    pub guild_id: Option<Snowflake>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<u16>,
    #[serde(default)]
    pub permission_overwrites: Vec<PermissionOverwrite>,
    #[serde(default)]
    pub name: Option<Box<str>>,
}

impl Channel {
    /// Overwrites are keyed by role or member ID, which share one ID space.
    pub fn overwrite_for(&self, target_id: Snowflake) -> Option<&PermissionOverwrite> {
        self.permission_overwrites
            .iter()
            .find(|overwrite| overwrite.target_id == target_id)
    }
}
