#[derive(Clone, Copy, Debug)]
pub struct Options {
    pub users: bool,
    pub roles: bool,
    pub dm_channels: bool,
}

impl Options {
    pub fn new(users: bool, roles: bool, dm_channels: bool) -> Options {
        Options {
            users,
            roles,
            dm_channels,
        }
    }
}

impl Default for Options {
    fn default() -> Self {
        Options {
            users: true,
            roles: true,
            dm_channels: true,
        }
    }
}
