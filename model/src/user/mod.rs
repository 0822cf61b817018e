mod user;
pub use user::{BaseUser, User};

mod premium_type;
pub use premium_type::PremiumType;

mod user_flags;
pub use user_flags::UserFlags;

mod named_entity;
pub use named_entity::NamedEntity;

mod direct_message;
pub(crate) use direct_message::send_direct_message;
