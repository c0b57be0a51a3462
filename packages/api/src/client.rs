//! # REST client for the students resource
//!
//! [`StudentApi`] is the async seam between the roster and the service. The
//! production implementation, [`HttpStudentApi`], maps each method onto one
//! HTTP call against a base collection URL:
//!
//! | Method | Request | Success |
//! |--------|---------|---------|
//! | [`list`](StudentApi::list) | `GET {base}` | JSON array of records |
//! | [`create`](StudentApi::create) | `POST {base}` | created record |
//! | [`update`](StudentApi::update) | `PUT {base}/{id}` | updated record |
//! | [`remove`](StudentApi::remove) | `DELETE {base}/{id}` | body ignored |
//!
//! Responses are decoded explicitly into [`StudentRecord`]; a body that does not
//! match yields [`ApiError::Decode`] instead of a half-filled record. Non-2xx
//! statuses yield [`ApiError::Status`]. There is no timeout or retry.

use std::future::Future;

use reqwest::{Response, Url};
use serde::de::DeserializeOwned;
use store::{RosterConfig, StudentId, StudentPayload, StudentRecord};

use crate::error::ApiError;

/// Async access to the students collection.
pub trait StudentApi {
    fn list(&self) -> impl Future<Output = Result<Vec<StudentRecord>, ApiError>>;
    fn create(
        &self,
        payload: &StudentPayload,
    ) -> impl Future<Output = Result<StudentRecord, ApiError>>;
    fn update(
        &self,
        id: &StudentId,
        payload: &StudentPayload,
    ) -> impl Future<Output = Result<StudentRecord, ApiError>>;
    fn remove(&self, id: &StudentId) -> impl Future<Output = Result<(), ApiError>>;
}

/// [`StudentApi`] over HTTP with `reqwest`.
#[derive(Clone, Debug)]
pub struct HttpStudentApi {
    http: reqwest::Client,
    base: Url,
}

impl HttpStudentApi {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let invalid = |reason: String| ApiError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason,
        };
        let base = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(invalid("cannot hold path segments".to_string()));
        }
        Ok(Self {
            http: reqwest::Client::new(),
            base,
        })
    }

    pub fn from_config(config: &RosterConfig) -> Result<Self, ApiError> {
        Self::new(&config.api.base_url)
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// `METHOD url` of the request for the collection or one record.
    pub fn describe(&self, method: &str, id: Option<&StudentId>) -> String {
        let url = id
            .and_then(|id| self.item_url(id).ok())
            .unwrap_or_else(|| self.base.clone());
        format!("{method} {url}")
    }

    fn item_url(&self, id: &StudentId) -> Result<Url, ApiError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidBaseUrl {
                url: self.base.to_string(),
                reason: "cannot hold path segments".to_string(),
            })?
            .pop_if_empty()
            .push(&id.to_string());
        Ok(url)
    }
}

impl PartialEq for HttpStudentApi {
    fn eq(&self, other: &Self) -> bool {
        self.base == other.base
    }
}

fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ApiError::Status(status.as_u16()))
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let body = check_status(response)?.bytes().await?;
    serde_json::from_slice(&body).map_err(|e| ApiError::Decode(e.to_string()))
}

impl StudentApi for HttpStudentApi {
    async fn list(&self) -> Result<Vec<StudentRecord>, ApiError> {
        tracing::debug!(url = %self.base, "GET students");
        let response = self.http.get(self.base.clone()).send().await?;
        decode(response).await
    }

    async fn create(&self, payload: &StudentPayload) -> Result<StudentRecord, ApiError> {
        tracing::debug!(url = %self.base, "POST student");
        let response = self
            .http
            .post(self.base.clone())
            .json(payload)
            .send()
            .await?;
        decode(response).await
    }

    async fn update(
        &self,
        id: &StudentId,
        payload: &StudentPayload,
    ) -> Result<StudentRecord, ApiError> {
        let url = self.item_url(id)?;
        tracing::debug!(%url, "PUT student");
        let response = self.http.put(url).json(payload).send().await?;
        decode(response).await
    }

    async fn remove(&self, id: &StudentId) -> Result<(), ApiError> {
        let url = self.item_url(id)?;
        tracing::debug!(%url, "DELETE student");
        let response = self.http.delete(url).send().await?;
        check_status(response)?;
        Ok(())
    }
}
