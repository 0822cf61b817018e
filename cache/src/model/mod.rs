mod entity_maps;
pub use entity_maps::*;

mod role;
pub use role::CachedRole;

mod user;
pub use user::CachedUser;
