use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

use crate::{Permissions, Snowflake};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PermissionOverwrite {
    #[serde(rename = "id")]
    pub target_id: Snowflake,

    #[serde(rename = "type")]
    pub overwrite_type: PermissionOverwriteType,

    pub allow: Permissions,

    pub deny: Permissions,
}

#[derive(Serialize_repr, Deserialize_repr, Debug, Clone, Copy, Eq, PartialEq)]
#[repr(u8)]
pub enum PermissionOverwriteType {
    Role = 0,
    Member = 1,
}
