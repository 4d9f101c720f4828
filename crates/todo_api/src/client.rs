//! reqwest-backed implementation of [`TodoApi`].

use async_trait::async_trait;
use log::{debug, error};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use todo_core::Config;

use crate::client_trait::TodoApi;
use crate::error::{ApiError, Result};
use crate::models::{CreateTodo, RemoteTodo, UpdateTodo};

/// Client for a JSONPlaceholder-style `/todos` collection.
#[derive(Debug, Clone)]
pub struct TodoApiClient {
    client: Client,
    base_url: String,
}

impl TodoApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: "https://jsonplaceholder.typicode.com".to_string(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new().with_base_url(config.api_base.clone())
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("request failed: HTTP {status}: {body}");
            return Err(ApiError::Api { status, body });
        }
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

impl Default for TodoApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TodoApi for TodoApiClient {
    async fn fetch_todos(&self, limit: usize) -> Result<Vec<RemoteTodo>> {
        let url = format!("{}/todos", self.base_url);
        debug!("GET {url}?_limit={limit}");
        let response = self
            .client
            .get(&url)
            .query(&[("_limit", limit)])
            .send()
            .await?;
        Self::read_json(response).await
    }

    async fn create_todo(&self, new_todo: &CreateTodo) -> Result<RemoteTodo> {
        let url = format!("{}/todos", self.base_url);
        debug!("POST {url} title={:?}", new_todo.title);
        let response = self.client.post(&url).json(new_todo).send().await?;
        Self::read_json(response).await
    }

    async fn update_todo(&self, id: u64, patch: &UpdateTodo) -> Result<RemoteTodo> {
        let url = format!("{}/todos/{id}", self.base_url);
        debug!("PATCH {url}");
        let response = self.client.patch(&url).json(patch).send().await?;
        Self::read_json(response).await
    }

    async fn delete_todo(&self, id: u64) -> Result<()> {
        let url = format!("{}/todos/{id}", self.base_url);
        debug!("DELETE {url}");
        let response = self.client.delete(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("DELETE failed: HTTP {status}: {body}");
            return Err(ApiError::Api { status, body });
        }
        Ok(())
    }
}
