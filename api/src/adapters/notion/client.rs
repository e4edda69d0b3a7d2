//! Notion API client implementation

use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use urlencoding::encode;

use crate::domain::entities::Page;
use crate::domain::ports::{BlockChildren, DatabaseQuery, DatabaseSchema, NotionClient};
use crate::error::NotionError;

/// Blocks requested per children-listing page (the API maximum).
const PAGE_SIZE: &str = "100";

/// Implementation of the Notion API client
pub struct NotionClientImpl {
    http: Client,
    base_url: String,
    token: String,
    version: String,
}

impl NotionClientImpl {
    pub fn new(base_url: String, token: String, version: String) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
            version,
        }
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/v1{}", self.base_url, path)
    }

    fn request(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .bearer_auth(&self.token)
            .header("Notion-Version", &self.version)
    }

    async fn handle_response<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, NotionError> {
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| NotionError::Deserialization(e.to_string()))
        } else {
            Err(self.status_error(response).await)
        }
    }

    async fn handle_empty_response(&self, response: reqwest::Response) -> Result<(), NotionError> {
        let status = response.status();

        if status.is_success() {
            Ok(())
        } else {
            Err(self.status_error(response).await)
        }
    }

    async fn status_error(&self, response: reqwest::Response) -> NotionError {
        let status = response.status().as_u16();
        match status {
            401 => NotionError::Unauthorized,
            429 => NotionError::RateLimited,
            404 => {
                let message = response.text().await.unwrap_or_default();
                NotionError::NotFound(message)
            }
            _ => {
                let message = response.text().await.unwrap_or_default();
                NotionError::Api { status, message }
            }
        }
    }
}

/// Request types for the Notion API
#[derive(Serialize)]
struct QueryRequest<'a> {
    filter: StatusFilter<'a>,
    sorts: [SortSpec<'a>; 1],
}

#[derive(Serialize)]
struct StatusFilter<'a> {
    property: &'a str,
    select: EqualsCondition<'a>,
}

#[derive(Serialize)]
struct EqualsCondition<'a> {
    equals: &'a str,
}

#[derive(Serialize)]
struct SortSpec<'a> {
    property: &'a str,
    direction: &'a str,
}

#[derive(Serialize)]
struct UpdateStatusRequest<'a> {
    properties: HashMap<&'a str, SelectUpdate<'a>>,
}

#[derive(Serialize)]
struct SelectUpdate<'a> {
    select: SelectName<'a>,
}

#[derive(Serialize)]
struct SelectName<'a> {
    name: &'a str,
}

/// Response types from the Notion API
#[derive(Deserialize)]
struct QueryResponse {
    #[serde(default)]
    results: Vec<Page>,
}

#[async_trait]
impl NotionClient for NotionClientImpl {
    async fn query_database(
        &self,
        database_id: &str,
        query: &DatabaseQuery,
    ) -> Result<Vec<Page>, NotionError> {
        let body = QueryRequest {
            filter: StatusFilter {
                property: &query.status_property,
                select: EqualsCondition {
                    equals: &query.status_equals,
                },
            },
            sorts: [SortSpec {
                property: &query.sort_property,
                direction: "descending",
            }],
        };

        let response = self
            .request(
                self.http
                    .post(self.api_url(&format!("/databases/{}/query", encode(database_id)))),
            )
            .json(&body)
            .send()
            .await?;

        let parsed: QueryResponse = self.handle_response(response).await?;
        Ok(parsed.results)
    }

    async fn retrieve_page(&self, page_id: &str) -> Result<Page, NotionError> {
        let response = self
            .request(
                self.http
                    .get(self.api_url(&format!("/pages/{}", encode(page_id)))),
            )
            .send()
            .await?;

        self.handle_response(response).await
    }

    async fn list_block_children(
        &self,
        block_id: &str,
        start_cursor: Option<&str>,
    ) -> Result<BlockChildren, NotionError> {
        let mut params: Vec<(&str, &str)> = vec![("page_size", PAGE_SIZE)];
        if let Some(cursor) = start_cursor {
            params.push(("start_cursor", cursor));
        }

        let response = self
            .request(
                self.http
                    .get(self.api_url(&format!("/blocks/{}/children", encode(block_id))))
                    .query(&params),
            )
            .send()
            .await?;

        self.handle_response(response).await
    }

    async fn update_page_status(
        &self,
        page_id: &str,
        property: &str,
        value: &str,
    ) -> Result<(), NotionError> {
        let body = UpdateStatusRequest {
            properties: HashMap::from([(property, SelectUpdate {
                select: SelectName { name: value },
            })]),
        };

        let response = self
            .request(
                self.http
                    .patch(self.api_url(&format!("/pages/{}", encode(page_id)))),
            )
            .json(&body)
            .send()
            .await?;

        self.handle_empty_response(response).await
    }

    async fn retrieve_database(&self, database_id: &str) -> Result<DatabaseSchema, NotionError> {
        let response = self
            .request(
                self.http
                    .get(self.api_url(&format!("/databases/{}", encode(database_id)))),
            )
            .send()
            .await?;

        self.handle_response(response).await
    }
}
