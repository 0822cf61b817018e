use serde_repr::{Deserialize_repr, Serialize_repr};

#[derive(Serialize_repr, Deserialize_repr, Debug, Clone, Copy, Eq, PartialEq, Default)]
#[repr(u8)]
pub enum PremiumType {
    #[default]
    None = 0,
    NitroClassic = 1,
    Nitro = 2,
}
