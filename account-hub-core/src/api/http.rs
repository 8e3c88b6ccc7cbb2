//! reqwest-backed implementation of [`AccountsApi`]

use async_trait::async_trait;
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use account_hub_provider::ProviderDescriptor;

use crate::error::{CoreError, CoreResult};
use crate::traits::AccountsApi;
use crate::types::{
    AccountMap, AccountStats, AccountsEnvelope, BeginLinkBody, LinkHandoff, RenameBody,
    StatsEnvelope,
};

use super::{truncate_for_log, ApiConfig, Session};

/// HTTP transport for the remote accounts API.
///
/// Every request carries the injected session credential as a bearer header.
/// Non-success statuses map to [`CoreError::Api`]; transport failures split
/// into [`CoreError::Timeout`] and [`CoreError::Network`]. There is no
/// automatic retry: a failed call is reported and the user re-triggers.
pub struct HttpAccountsApi {
    client: reqwest::Client,
    base_url: String,
    session: Session,
}

impl HttpAccountsApi {
    /// Build the transport from a config and a session credential.
    pub fn new(config: &ApiConfig, session: Session) -> CoreResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| CoreError::Network(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    /// Send a prepared request, returning status and body text.
    async fn execute(
        &self,
        request: RequestBuilder,
        method: &str,
        path: &str,
    ) -> CoreResult<(u16, String)> {
        log::debug!("{method} {path}");

        let response = request
            .header("Authorization", self.session.authorization())
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    CoreError::Timeout(format!("{method} {path}: {e}"))
                } else {
                    CoreError::Network(format!("{method} {path}: {e}"))
                }
            })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| CoreError::Network(format!("failed to read response body: {e}")))?;

        log::debug!("{method} {path} -> {status} {}", truncate_for_log(&body));
        Ok((status, body))
    }

    /// Reject non-2xx responses.
    fn ensure_success(method: &str, path: &str, status: u16, body: String) -> CoreResult<String> {
        if (200..300).contains(&status) {
            Ok(body)
        } else {
            log::warn!("{method} {path} failed with HTTP {status}");
            Err(CoreError::Api {
                status,
                message: truncate_for_log(body.trim()),
            })
        }
    }

    fn parse<T: DeserializeOwned>(body: &str) -> CoreResult<T> {
        serde_json::from_str(body).map_err(|e| {
            log::error!("JSON parse failed: {e}");
            log::error!("Raw response: {}", truncate_for_log(body));
            CoreError::Parse(e.to_string())
        })
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> CoreResult<T> {
        let request = self.client.get(self.url(path));
        let (status, body) = self.execute(request, "GET", path).await?;
        let body = Self::ensure_success("GET", path, status, body)?;
        Self::parse(&body)
    }

    async fn post<B: serde::Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> CoreResult<T> {
        let request = self.client.post(self.url(path)).json(body);
        let (status, body) = self.execute(request, "POST", path).await?;
        let body = Self::ensure_success("POST", path, status, body)?;
        Self::parse(&body)
    }

    async fn delete(&self, path: &str) -> CoreResult<()> {
        let request = self.client.delete(self.url(path));
        let (status, body) = self.execute(request, "DELETE", path).await?;
        Self::ensure_success("DELETE", path, status, body)?;
        Ok(())
    }

    async fn put<B: serde::Serialize>(&self, path: &str, body: Option<&B>) -> CoreResult<()> {
        let mut request = self.client.put(self.url(path));
        if let Some(body) = body {
            request = request.json(body);
        }
        let (status, body) = self.execute(request, "PUT", path).await?;
        Self::ensure_success("PUT", path, status, body)?;
        Ok(())
    }
}

#[async_trait]
impl AccountsApi for HttpAccountsApi {
    async fn list_accounts(&self) -> CoreResult<AccountMap> {
        let envelope: AccountsEnvelope = self.get("/api/accounts").await?;
        Ok(envelope.accounts)
    }

    async fn fetch_stats(&self) -> CoreResult<AccountStats> {
        let envelope: StatsEnvelope = self.get("/api/accounts/stats").await?;
        Ok(envelope.stats)
    }

    async fn begin_link(
        &self,
        descriptor: &ProviderDescriptor,
        account_name: &str,
    ) -> CoreResult<LinkHandoff> {
        let path = descriptor.link_path.ok_or_else(|| {
            CoreError::ProviderNotLinkable(descriptor.display_name.to_string())
        })?;
        self.post(path, &BeginLinkBody { account_name }).await
    }

    async fn remove_account(&self, account_id: &str) -> CoreResult<()> {
        self.delete(&format!("/api/accounts/{account_id}")).await
    }

    async fn set_primary(&self, account_id: &str) -> CoreResult<()> {
        self.put::<()>(&format!("/api/accounts/{account_id}/primary"), None)
            .await
    }

    async fn rename_account(&self, account_id: &str, name: &str) -> CoreResult<()> {
        self.put(
            &format!("/api/accounts/{account_id}/name"),
            Some(&RenameBody { name }),
        )
        .await
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}
