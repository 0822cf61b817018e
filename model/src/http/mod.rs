mod route;
pub use route::Route;

mod error;
pub use error::HttpError;

mod client;
pub use client::HttpClient;

#[cfg(test)]
pub(crate) mod testing {
    use super::{HttpClient, HttpError, Route};
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::sync::Mutex;

    #[derive(Debug, Clone)]
    pub struct Call {
        pub route: Route,
        pub body: Option<Value>,
        pub reason: Option<String>,
    }

    /// Records every request and answers with `{}`, or with `fail_with` when set.
    #[derive(Default)]
    pub struct RecordingHttp {
        pub calls: Mutex<Vec<Call>>,
        pub fail_with: Option<u16>,
    }

    impl RecordingHttp {
        pub fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl HttpClient for RecordingHttp {
        async fn request(
            &self,
            route: Route,
            body: Option<Value>,
            reason: Option<&str>,
        ) -> Result<Value, HttpError> {
            self.calls.lock().unwrap().push(Call {
                route,
                body,
                reason: reason.map(str::to_owned),
            });

            match self.fail_with {
                Some(status) => Err(HttpError::Api {
                    status,
                    message: "Missing Permissions".to_owned(),
                }),
                None => Ok(json!({})),
            }
        }
    }
}
