use crate::cache::IdentityCache;
use crate::http::HttpClient;
use crate::{Result, Snowflake};
use serde_json::Value;
use tracing::debug;

pub(crate) async fn send_direct_message<C, H>(
    user_id: Snowflake,
    cache: &C,
    http: &H,
    payload: Value,
) -> Result<Value>
where
    C: IdentityCache + ?Sized,
    H: HttpClient + ?Sized,
{
    let channel_id = cache.get_dm_channel_id(user_id).await?;
    debug!(%user_id, %channel_id, "Sending direct message");

    Ok(http.create_message(payload, channel_id).await?)
}
