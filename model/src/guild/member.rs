use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{Guild, Role};
use crate::cache::IdentityCache;
use crate::http::HttpClient;
use crate::user::{send_direct_message, NamedEntity, User};
use crate::{Asset, Discriminator, Error, Result, Snowflake};
use chrono::{DateTime, Utc};
use serde_json::json;
use tracing::{debug, trace};

/// A user's membership of one guild. The user itself lives in the identity cache and is looked
/// up by `id` whenever a user field is needed.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Member {
    pub id: Snowflake,
    pub guild_id: Snowflake,
    #[serde(default)]
    pub bot: bool,
    #[serde(default)]
    pub nick: Option<String>,
    /// Ordered by hierarchy, highest last
    #[serde(default)]
    pub role_ids: Vec<Snowflake>,
    pub joined_at: DateTime<Utc>,
    #[serde(default)]
    pub premium_since: Option<DateTime<Utc>>,
    #[serde(default)]
    pub deaf: bool,
    #[serde(default)]
    pub mute: bool,
    /// Whether the member has **not** yet passed membership screening
    #[serde(default)]
    pub pending: Option<bool>,
}

impl Member {
    /// Builds a member from a wire payload. The payload either nests the user under `user`
    /// (guild member objects) or is a user object nesting the member under `member`
    /// (mentions). Either way the user part is placed in the cache before the member is parsed.
    pub fn from_payload<C>(data: Value, guild_id: Snowflake, cache: &C) -> Result<Member>
    where
        C: IdentityCache + ?Sized,
    {
        let data = match data {
            Value::Object(map) => map,
            _ => return Error::missing_field("Member", "id").into(),
        };

        let mut data = extract_user(data, cache)?;

        let roles = data.remove("roles").unwrap_or_else(|| Value::Array(Vec::new()));
        data.insert("role_ids".to_owned(), roles);
        data.insert("guild_id".to_owned(), json!(guild_id));

        let member: Member = serde_json::from_value(Value::Object(data))?;
        trace!(member_id = %member.id, %guild_id, "Parsed member");

        Ok(member)
    }

    /// The backing user, if the cache still holds it.
    pub fn user<C: IdentityCache + ?Sized>(&self, cache: &C) -> Option<User> {
        cache.get_user(self.id)
    }

    /// Looks `name` up on the member's own fields first, then on the cached user.
    pub fn attribute<C: IdentityCache + ?Sized>(&self, name: &str, cache: &C) -> Result<Value> {
        if let Value::Object(mut own) = serde_json::to_value(self)? {
            if let Some(value) = own.remove(name) {
                return Ok(value);
            }
        }

        let user = self
            .user(cache)
            .ok_or_else(|| Error::AttributeNotFound(name.to_owned()))?;

        match serde_json::to_value(&user)? {
            Value::Object(mut fields) => fields
                .remove(name)
                .ok_or_else(|| Error::AttributeNotFound(name.to_owned())),
            _ => Error::AttributeNotFound(name.to_owned()).into(),
        }
    }

    pub fn username<C: IdentityCache + ?Sized>(&self, cache: &C) -> Result<String> {
        self.delegate(cache, "username", |user| user.username.clone())
    }

    pub fn discriminator<C: IdentityCache + ?Sized>(&self, cache: &C) -> Result<Discriminator> {
        self.delegate(cache, "discriminator", |user| user.discriminator)
    }

    pub fn avatar<C: IdentityCache + ?Sized>(&self, cache: &C) -> Result<Asset> {
        self.delegate(cache, "avatar", |user| user.avatar())
    }

    fn delegate<C, T, F>(&self, cache: &C, name: &str, f: F) -> Result<T>
    where
        C: IdentityCache + ?Sized,
        F: FnOnce(&User) -> T,
    {
        self.user(cache)
            .map(|user| f(&user))
            .ok_or_else(|| Error::AttributeNotFound(name.to_owned()))
    }

    pub fn nickname(&self) -> Option<&str> {
        self.nick.as_deref()
    }

    /// Whether the member is boosting the guild
    pub fn premium(&self) -> bool {
        self.premium_since.is_some()
    }

    /// The guild's roles that this member holds, in the guild's order.
    pub fn roles<'a>(&self, guild: &'a Guild) -> Vec<&'a Role> {
        guild
            .roles
            .iter()
            .filter(|role| self.role_ids.contains(&role.id))
            .collect()
    }

    pub fn top_role<C: IdentityCache + ?Sized>(&self, cache: &C) -> Option<Role> {
        self.role_ids.last().and_then(|id| cache.get_role(*id))
    }

    /// True if the member holds every role given. An empty query is trivially satisfied.
    pub fn has_role<I, R>(&self, roles: I) -> bool
    where
        I: IntoIterator<Item = R>,
        R: Into<Snowflake>,
    {
        roles
            .into_iter()
            .all(|role| self.role_ids.contains(&role.into()))
    }

    pub async fn edit_nickname<H: HttpClient + ?Sized>(
        &self,
        http: &H,
        nickname: Option<&str>,
        reason: Option<&str>,
    ) -> Result<Value> {
        debug!(guild_id = %self.guild_id, user_id = %self.id, "Editing member nickname");

        let body = json!({ "nick": nickname });
        Ok(http
            .modify_guild_member(self.guild_id, self.id, body, reason)
            .await?)
    }

    pub async fn add_role<H, R>(&self, http: &H, role: R, reason: Option<&str>) -> Result<Value>
    where
        H: HttpClient + ?Sized,
        R: Into<Snowflake>,
    {
        let role_id = role.into();
        debug!(guild_id = %self.guild_id, user_id = %self.id, %role_id, "Adding role to member");

        Ok(http
            .add_guild_member_role(self.guild_id, self.id, role_id, reason)
            .await?)
    }

    pub async fn remove_role<H, R>(&self, http: &H, role: R, reason: Option<&str>) -> Result<Value>
    where
        H: HttpClient + ?Sized,
        R: Into<Snowflake>,
    {
        let role_id = role.into();
        debug!(
            guild_id = %self.guild_id,
            user_id = %self.id,
            %role_id,
            "Removing role from member"
        );

        Ok(http
            .remove_guild_member_role(self.guild_id, self.id, role_id, reason)
            .await?)
    }

    pub async fn kick<H: HttpClient + ?Sized>(
        &self,
        http: &H,
        reason: Option<&str>,
    ) -> Result<Value> {
        debug!(guild_id = %self.guild_id, user_id = %self.id, "Kicking member");

        Ok(http
            .remove_guild_member(self.guild_id, self.id, reason)
            .await?)
    }

    pub async fn ban<H: HttpClient + ?Sized>(
        &self,
        http: &H,
        delete_message_days: u8,
        reason: Option<&str>,
    ) -> Result<Value> {
        debug!(
            guild_id = %self.guild_id,
            user_id = %self.id,
            delete_message_days,
            "Banning member"
        );

        Ok(http
            .create_guild_ban(self.guild_id, self.id, delete_message_days, reason)
            .await?)
    }

    pub async fn send<C, H>(&self, cache: &C, http: &H, payload: Value) -> Result<Value>
    where
        C: IdentityCache + ?Sized,
        H: HttpClient + ?Sized,
    {
        send_direct_message(self.id, cache, http, payload).await
    }
}

impl NamedEntity for Member {
    fn id(&self) -> Snowflake {
        self.id
    }

    fn display_name(&self, cache: &dyn IdentityCache) -> Result<String> {
        match &self.nick {
            Some(nick) => Ok(nick.clone()),
            None => self.username(cache),
        }
    }
}

/// Moves the user part of a member payload into the cache and leaves the member fields, with
/// `id` and `bot` copied over from the user.
fn extract_user<C>(mut data: Map<String, Value>, cache: &C) -> Result<Map<String, Value>>
where
    C: IdentityCache + ?Sized,
{
    if let Some(user) = data.remove("user") {
        cache.place_user_data(&user)?;

        let id = user
            .get("id")
            .cloned()
            .ok_or_else(|| Error::missing_field("Member", "user.id"))?;
        let bot = user.get("bot").and_then(Value::as_bool).unwrap_or(false);

        data.insert("id".to_owned(), id);
        data.insert("bot".to_owned(), Value::Bool(bot));
        Ok(data)
    } else if let Some(member) = data.remove("member") {
        let mut member = match member {
            Value::Object(map) => map,
            _ => return Error::missing_field("Member", "member").into(),
        };

        let id = data
            .get("id")
            .cloned()
            .ok_or_else(|| Error::missing_field("Member", "id"))?;
        let bot = data.get("bot").and_then(Value::as_bool).unwrap_or(false);

        cache.place_user_data(&Value::Object(data))?;

        member.insert("id".to_owned(), id);
        member.insert("bot".to_owned(), Value::Bool(bot));
        Ok(member)
    } else {
        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::testing::RecordingHttp;
    use crate::http::Route;
    use ::http::Method;

    fn member() -> Member {
        Member {
            id: Snowflake(50),
            guild_id: Snowflake(1),
            bot: false,
            nick: Some("nick".to_owned()),
            role_ids: vec![Snowflake(2), Snowflake(3)],
            joined_at: Utc::now(),
            premium_since: None,
            deaf: false,
            mute: false,
            pending: None,
        }
    }

    #[test]
    fn test_has_role() {
        let member = member();
        assert!(member.has_role(&[Snowflake(2)]));
        assert!(member.has_role(&[Snowflake(3), Snowflake(2)]));
        assert!(!member.has_role(&[Snowflake(2), Snowflake(4)]));
        assert!(member.has_role(Vec::<Snowflake>::new()));
    }

    #[test]
    fn test_mention() {
        assert_eq!(member().mention(), "<@50>");
        assert!(!member().premium());
    }

    #[tokio::test]
    async fn test_facade_routes() {
        let http = RecordingHttp::default();
        let member = member();

        member.edit_nickname(&http, Some("new"), None).await.unwrap();
        member.add_role(&http, Snowflake(9), Some("promoted")).await.unwrap();
        member.remove_role(&http, 9u64, None).await.unwrap();
        member.kick(&http, Some("spam")).await.unwrap();
        member.ban(&http, 7, Some("raid")).await.unwrap();

        let calls = http.calls();
        assert_eq!(calls.len(), 5);

        assert_eq!(calls[0].route, Route::new(Method::PATCH, "/guilds/1/members/50"));
        assert_eq!(calls[0].body, Some(json!({ "nick": "new" })));

        assert_eq!(calls[1].route, Route::new(Method::PUT, "/guilds/1/members/50/roles/9"));
        assert_eq!(calls[1].reason.as_deref(), Some("promoted"));

        assert_eq!(calls[2].route, Route::new(Method::DELETE, "/guilds/1/members/50/roles/9"));

        assert_eq!(calls[3].route, Route::new(Method::DELETE, "/guilds/1/members/50"));
        assert_eq!(calls[3].reason.as_deref(), Some("spam"));

        assert_eq!(calls[4].route, Route::new(Method::PUT, "/guilds/1/bans/50"));
        assert_eq!(calls[4].body, Some(json!({ "delete_message_days": 7 })));
        assert_eq!(calls[4].reason.as_deref(), Some("raid"));

        // requests never touch local state
        assert_eq!(member.nick.as_deref(), Some("nick"));
        assert_eq!(member.role_ids, vec![Snowflake(2), Snowflake(3)]);
    }

    #[tokio::test]
    async fn test_transport_errors_propagate() {
        let http = RecordingHttp {
            fail_with: Some(403),
            ..Default::default()
        };

        let res = member().kick(&http, None).await;
        assert!(matches!(res, Err(Error::Http(_))));
        assert_eq!(http.calls().len(), 1);
    }
}
