use super::util;
use bitflags::bitflags;
use serde::de::Error;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

bitflags! {
    /// Permission bit set, as found on roles and channel overwrites.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Permissions: u64 {
        const CREATE_INSTANT_INVITE = 1 << 0;
        const KICK_MEMBERS = 1 << 1;
        const BAN_MEMBERS = 1 << 2;
        const ADMINISTRATOR = 1 << 3;
        const MANAGE_CHANNELS = 1 << 4;
        const MANAGE_GUILD = 1 << 5;
        const ADD_REACTIONS = 1 << 6;
        const VIEW_AUDIT_LOG = 1 << 7;
        const PRIORITY_SPEAKER = 1 << 8;
        const STREAM = 1 << 9;
        const VIEW_CHANNEL = 1 << 10;
        const SEND_MESSAGES = 1 << 11;
        const SEND_TTS_MESSAGES = 1 << 12;
        const MANAGE_MESSAGES = 1 << 13;
        const EMBED_LINKS = 1 << 14;
        const ATTACH_FILES = 1 << 15;
        const READ_MESSAGE_HISTORY = 1 << 16;
        const MENTION_EVERYONE = 1 << 17;
        const USE_EXTERNAL_EMOJIS = 1 << 18;
        const VIEW_GUILD_INSIGHTS = 1 << 19;
        const CONNECT = 1 << 20;
        const SPEAK = 1 << 21;
        const MUTE_MEMBERS = 1 << 22;
        const DEAFEN_MEMBERS = 1 << 23;
        const MOVE_MEMBERS = 1 << 24;
        const USE_VAD = 1 << 25;
        const CHANGE_NICKNAME = 1 << 26;
        const MANAGE_NICKNAMES = 1 << 27;
        const MANAGE_ROLES = 1 << 28;
        const MANAGE_WEBHOOKS = 1 << 29;
        const MANAGE_EMOJIS_AND_STICKERS = 1 << 30;
        const USE_APPLICATION_COMMANDS = 1 << 31;
        const REQUEST_TO_SPEAK = 1 << 32;
        const MANAGE_EVENTS = 1 << 33;
        const MANAGE_THREADS = 1 << 34;
        const CREATE_PUBLIC_THREADS = 1 << 35;
        const CREATE_PRIVATE_THREADS = 1 << 36;
        const USE_EXTERNAL_STICKERS = 1 << 37;
        const SEND_MESSAGES_IN_THREADS = 1 << 38;
        const USE_EMBEDDED_ACTIVITIES = 1 << 39;
        const MODERATE_MEMBERS = 1 << 40;
    }
}

impl Permissions {
    /// Every defined flag
    pub const ALL: Permissions = Permissions::all();
    pub const NONE: Permissions = Permissions::empty();

    /// Applies a deny/allow pair: denied bits are cleared before allowed bits are set.
    pub fn apply_overwrite(self, allow: Permissions, deny: Permissions) -> Permissions {
        self.difference(deny).union(allow)
    }
}

impl Serialize for Permissions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.bits().to_string())
    }
}

impl<'de> Deserialize<'de> for Permissions {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value: Value = Deserialize::deserialize(deserializer)?;

        let bits = match &value {
            Value::String(s) => s.parse().map_err(Error::custom)?,
            Value::Number(n) => match n.as_u64() {
                Some(bits) => bits,
                None => {
                    return Err(Error::invalid_type(
                        util::to_unexpected(value.clone()),
                        &"an unsigned bit set",
                    ))
                }
            },
            _ => {
                return Err(Error::invalid_type(
                    util::to_unexpected(value),
                    &"a string or u64",
                ))
            }
        };

        // Bits outside the known flags are dropped, so every value stays within ALL
        Ok(Permissions::from_bits_truncate(bits))
    }
}

impl fmt::Display for Permissions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bits())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const SAMPLES: [Permissions; 4] = [
        Permissions::NONE,
        Permissions::ALL,
        Permissions::SEND_MESSAGES,
        Permissions::from_bits_truncate((1 << 10) | (1 << 11) | (1 << 28)),
    ];

    #[test]
    fn test_identities() {
        for p in SAMPLES.iter().copied() {
            assert_eq!(p.union(Permissions::NONE), p);
            assert_eq!(p.intersection(Permissions::ALL), p);
            assert_eq!(p.difference(p), Permissions::NONE);
        }
    }

    #[test]
    fn test_sentinels() {
        assert_eq!(Permissions::NONE.bits(), 0);
        assert!(Permissions::ALL.contains(Permissions::ADMINISTRATOR));
        assert!(Permissions::ALL.contains(Permissions::MODERATE_MEMBERS));
        assert_eq!(Permissions::ALL.bits(), (1u64 << 41) - 1);
    }

    #[test]
    fn test_apply_overwrite() {
        let base = Permissions::VIEW_CHANNEL | Permissions::SEND_MESSAGES;
        let result = base.apply_overwrite(Permissions::ATTACH_FILES, Permissions::SEND_MESSAGES);
        assert_eq!(result, Permissions::VIEW_CHANNEL | Permissions::ATTACH_FILES);

        // allow wins over deny within the same overwrite
        let result = base.apply_overwrite(Permissions::SEND_MESSAGES, Permissions::SEND_MESSAGES);
        assert!(result.contains(Permissions::SEND_MESSAGES));
    }

    #[test]
    fn test_wire_format() {
        let p: Permissions = serde_json::from_value(json!("2048")).unwrap();
        assert_eq!(p, Permissions::SEND_MESSAGES);
        let p: Permissions = serde_json::from_value(json!(8)).unwrap();
        assert_eq!(p, Permissions::ADMINISTRATOR);
        assert_eq!(serde_json::to_value(Permissions::KICK_MEMBERS).unwrap(), json!("2"));
        assert!(serde_json::from_value::<Permissions>(json!("nope")).is_err());
    }

    #[test]
    fn test_unknown_bits_stay_within_all() {
        // VIEW_CHANNEL | 1 << 46
        let p: Permissions = serde_json::from_value(json!("70368744178688")).unwrap();
        assert_eq!(p, Permissions::VIEW_CHANNEL);
        assert_eq!(p.intersection(Permissions::ALL), p);
        assert!(Permissions::ALL.contains(p));

        let p: Permissions = serde_json::from_value(json!(u64::MAX)).unwrap();
        assert_eq!(p, Permissions::ALL);
    }
}
