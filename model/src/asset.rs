use crate::ImageHash;
use std::fmt;

pub const CDN_BASE: &str = "https://cdn.discordapp.com";

/// An image hosted on the Discord CDN.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Asset {
    path: String,
    pub hash: Option<ImageHash>,
}

impl Asset {
    /// Builds an asset from a path template whose `{}` is replaced by the hash.
    pub fn from_path_hash(template: &str, hash: ImageHash) -> Asset {
        Asset {
            path: template.replacen("{}", &hash.to_string(), 1),
            hash: Some(hash),
        }
    }

    /// One of the five built-in avatars handed to users without their own.
    pub fn default_avatar(discriminator: u16) -> Asset {
        Asset {
            path: format!("embed/avatars/{}", discriminator % 5),
            hash: None,
        }
    }

    pub fn animated(&self) -> bool {
        self.hash.map(|h| h.animated).unwrap_or(false)
    }

    pub fn url(&self) -> String {
        let ext = if self.animated() { "gif" } else { "png" };
        format!("{}/{}.{}", CDN_BASE, self.path, ext)
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_and_animated() {
        let hash = ImageHash::new(false, 0xabc);
        let asset = Asset::from_path_hash("avatars/1/{}", hash);
        assert_eq!(
            asset.url(),
            "https://cdn.discordapp.com/avatars/1/00000000000000000000000000000abc.png"
        );

        let hash = ImageHash::new(true, 0xabc);
        let asset = Asset::from_path_hash("avatars/1/{}", hash);
        assert!(asset.url().ends_with("/a_00000000000000000000000000000abc.gif"));
    }

    #[test]
    fn test_default_avatar() {
        assert_eq!(
            Asset::default_avatar(1337).url(),
            "https://cdn.discordapp.com/embed/avatars/2.png"
        );
    }
}
