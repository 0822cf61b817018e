mod guild;
pub use guild::Guild;

mod role;
pub use role::Role;

mod emoji;
pub use emoji::{Emoji, PartialEmoji};

mod member;
pub use member::Member;

mod permissions;
