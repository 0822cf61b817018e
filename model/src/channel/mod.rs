mod channel;
pub use channel::Channel;

mod channel_type;
pub use channel_type::ChannelType;

mod permission_overwrite;
pub use permission_overwrite::*;
