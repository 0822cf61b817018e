mod snowflake;
pub use snowflake::Snowflake;

mod discriminator;
pub use discriminator::Discriminator;

mod image_hash;
pub use image_hash::ImageHash;

mod asset;
pub use asset::Asset;

mod color;
pub use color::Color;

mod permissions;
pub use permissions::Permissions;

mod error;
pub use error::{Error, Result};

pub mod cache;
pub mod channel;
pub mod guild;
pub mod http;
pub mod user;

mod util;
