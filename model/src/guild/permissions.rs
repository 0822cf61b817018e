use super::{Guild, Member};
use crate::channel::Channel;
use crate::Permissions;

impl Member {
    /// Guild-wide permissions: @everyone plus every role held. Owners and administrators get
    /// everything.
    pub fn guild_permissions(&self, guild: &Guild) -> Permissions {
        if guild.is_owner(self.id) {
            return Permissions::ALL;
        }

        let mut permissions = guild
            .default_role()
            .map(|role| role.permissions)
            .unwrap_or(Permissions::NONE);

        for role in self.roles(guild) {
            permissions |= role.permissions;
        }

        if permissions.contains(Permissions::ADMINISTRATOR) {
            return Permissions::ALL;
        }

        permissions
    }

    /// Permissions in one channel. Overwrites apply in a fixed order: @everyone, then the union
    /// of all role overwrites, then the member's own overwrite.
    pub fn channel_permissions(&self, guild: &Guild, channel: &Channel) -> Permissions {
        let mut permissions = self.guild_permissions(guild);
        if permissions.contains(Permissions::ADMINISTRATOR) {
            return Permissions::ALL;
        }

        if let Some(everyone) = channel.overwrite_for(guild.id) {
            permissions = permissions.apply_overwrite(everyone.allow, everyone.deny);
        }

        // Role overwrites share one priority level, so hierarchy order does not matter here
        let mut allow = Permissions::NONE;
        let mut deny = Permissions::NONE;
        for role_id in &self.role_ids {
            if let Some(overwrite) = channel.overwrite_for(*role_id) {
                allow |= overwrite.allow;
                deny |= overwrite.deny;
            }
        }
        permissions = permissions.apply_overwrite(allow, deny);

        if let Some(overwrite) = channel.overwrite_for(self.id) {
            permissions = permissions.apply_overwrite(overwrite.allow, overwrite.deny);
        }

        permissions
    }
}
