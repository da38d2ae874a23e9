use std::sync::{PoisonError, RwLock};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::domain::{AuthError, Blog, ClientError, NewBlog, User};
use crate::infrastructure::api::BlogApi;
use crate::infrastructure::config::ApiConfig;

/// Error payload returned by the service
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

#[derive(Serialize)]
struct Credentials<'a> {
    username: &'a str,
    password: &'a str,
}

/// REST client for the blog service
pub struct HttpBlogApi {
    http: Client,
    base_url: String,
    token: RwLock<Option<SecretString>>,
}

impl HttpBlogApi {
    pub fn new(config: &ApiConfig) -> Result<Self, ClientError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: RwLock::new(None),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        let token = self.token.read().unwrap_or_else(PoisonError::into_inner);
        match token.as_ref() {
            Some(token) => request.bearer_auth(token.expose_secret()),
            None => request,
        }
    }

    async fn send(request: RequestBuilder) -> Result<Response, ClientError> {
        let response = request.send().await.map_err(transport)?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .map(|e| e.error)
            .unwrap_or_else(|_| {
                status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string()
            });
        log::debug!("{status} from blog service: {message}");
        Err(ClientError::from_response(status.as_u16(), message))
    }

    async fn json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, ClientError> {
        Self::send(request).await?.json().await.map_err(transport)
    }
}

fn transport(err: reqwest::Error) -> ClientError {
    ClientError::Transport(err.to_string())
}

#[async_trait]
impl BlogApi for HttpBlogApi {
    fn set_token(&self, token: Option<SecretString>) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = token;
    }

    fn has_token(&self) -> bool {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    async fn login(&self, username: &str, password: &SecretString) -> Result<User, ClientError> {
        let request = self.http.post(self.url("/api/login")).json(&Credentials {
            username,
            password: password.expose_secret(),
        });

        match Self::json(request).await {
            Err(ClientError::Auth(AuthError::Unauthorized(_))) => {
                Err(AuthError::InvalidCredentials.into())
            }
            other => other,
        }
    }

    async fn list(&self) -> Result<Vec<Blog>, ClientError> {
        Self::json(self.http.get(self.url("/api/blogs"))).await
    }

    async fn create(&self, blog: &NewBlog) -> Result<Blog, ClientError> {
        let request = self.authorized(self.http.post(self.url("/api/blogs")).json(blog));
        Self::json(request).await
    }

    async fn update(&self, blog: &Blog) -> Result<Blog, ClientError> {
        let path = format!("/api/blogs/{}", blog.id);
        let request = self.authorized(self.http.put(self.url(&path)).json(blog));
        Self::json(request).await
    }

    async fn delete(&self, id: &str) -> Result<(), ClientError> {
        let path = format!("/api/blogs/{id}");
        let request = self.authorized(self.http.delete(self.url(&path)));
        let response = Self::send(request).await?;
        if response.status() != StatusCode::NO_CONTENT {
            log::debug!("delete returned {}", response.status());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api() -> Result<HttpBlogApi, ClientError> {
        HttpBlogApi::new(&ApiConfig {
            base_url: "http://localhost:3003/".into(),
            timeout_secs: 1,
        })
    }

    #[test]
    fn test_url_strips_trailing_slash() -> Result<(), ClientError> {
        let api = api()?;
        assert_eq!(api.url("/api/blogs"), "http://localhost:3003/api/blogs");
        Ok(())
    }

    #[test]
    fn test_token_can_be_set_and_cleared() -> Result<(), ClientError> {
        let api = api()?;
        assert!(!api.has_token());

        api.set_token(Some(SecretString::from("abc")));
        assert!(api.has_token());

        api.set_token(None);
        assert!(!api.has_token());
        Ok(())
    }

    #[test]
    fn test_error_body_parses() -> serde_json::Result<()> {
        let body: ErrorBody = serde_json::from_str(r#"{"error":"token expired"}"#)?;
        assert_eq!(body.error, "token expired");
        Ok(())
    }

    #[tokio::test]
    async fn test_unreachable_server_is_transport_error() -> Result<(), ClientError> {
        let api = HttpBlogApi::new(&ApiConfig {
            base_url: "http://127.0.0.1:9".into(),
            timeout_secs: 1,
        })?;

        let result = api.list().await;

        assert!(matches!(result, Err(ClientError::Transport(_))));
        Ok(())
    }
}
