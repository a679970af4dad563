use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use crate::models::{CandidateProfile, RequestingUserProfile};
use crate::services::store::{ProfileStore, StoreError};

const REQUESTER_COLUMNS: &str = "genres,location";
const CANDIDATE_COLUMNS: &str = "id,display_name,genres,location,skills";

/// REST client for the hosted backend's `profiles` table
///
/// Speaks the PostgREST dialect:
/// - `GET /rest/v1/{table}?select=...&id=eq.{id}` for single rows
/// - `neq`, `not.in` and `eq.true` filters for the candidate pool
pub struct RestProfileStore {
    base_url: String,
    api_key: String,
    profiles_table: String,
    visibility_column: String,
    client: Client,
}

impl RestProfileStore {
    /// Create a new REST profile store
    pub fn new(
        base_url: String,
        api_key: String,
        profiles_table: String,
        visibility_column: String,
        timeout: Duration,
    ) -> Result<Self, StoreError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url,
            api_key,
            profiles_table,
            visibility_column,
            client,
        })
    }

    fn table_url(&self) -> String {
        format!(
            "{}/rest/v1/{}",
            self.base_url.trim_end_matches('/'),
            self.profiles_table
        )
    }

    /// Build the candidate pool query string
    ///
    /// The pool is capped at `limit` rows in primary-key order, so repeated
    /// calls see the same slice of a table larger than the cap.
    fn candidate_query(&self, user_id: &str, exclude_ids: &[String], limit: usize) -> String {
        let mut params = vec![
            format!("select={}", CANDIDATE_COLUMNS),
            format!("id=neq.{}", urlencoding::encode(user_id)),
            format!("{}=eq.true", self.visibility_column),
        ];

        if !exclude_ids.is_empty() {
            let quoted = exclude_ids
                .iter()
                .map(|id| quote_list_value(id))
                .collect::<Vec<_>>()
                .join(",");
            params.push(format!(
                "id={}",
                urlencoding::encode(&format!("not.in.({})", quoted))
            ));
        }

        params.push("order=id.asc".to_string());
        params.push(format!("limit={}", limit));
        params.join("&")
    }

    async fn fetch_rows(&self, url: &str, what: &str) -> Result<Vec<Value>, StoreError> {
        let response = self
            .client
            .get(url)
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_else(|_| "Unable to read body".to_string());
            tracing::error!("Failed to fetch {}: {} - {}", what, status, body);
            return Err(StoreError::ApiError(format!("Failed to fetch {}: {}", what, status)));
        }

        let json: Value = response.json().await?;

        match json {
            Value::Array(rows) => Ok(rows),
            _ => Err(StoreError::InvalidResponse(format!("Expected array of {}", what))),
        }
    }
}

/// Double-quote a value for a PostgREST `in.(...)` list
///
/// Backslashes and double quotes inside the value are backslash-escaped.
fn quote_list_value(value: &str) -> String {
    format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
}

#[async_trait]
impl ProfileStore for RestProfileStore {
    async fn get_requester(&self, user_id: &str) -> Result<Option<RequestingUserProfile>, StoreError> {
        let url = format!(
            "{}?select={}&id=eq.{}&limit=1",
            self.table_url(),
            REQUESTER_COLUMNS,
            urlencoding::encode(user_id)
        );

        tracing::debug!("Fetching requester profile for user: {}", user_id);

        let rows = self.fetch_rows(&url, "requester profile").await?;

        let Some(row) = rows.into_iter().next() else {
            return Ok(None);
        };

        serde_json::from_value(row)
            .map(Some)
            .map_err(|e| StoreError::InvalidResponse(format!("Failed to parse profile: {}", e)))
    }

    async fn list_candidates(
        &self,
        user_id: &str,
        exclude_ids: &[String],
        limit: usize,
    ) -> Result<Vec<CandidateProfile>, StoreError> {
        let url = format!(
            "{}?{}",
            self.table_url(),
            self.candidate_query(user_id, exclude_ids, limit)
        );

        let rows = self.fetch_rows(&url, "candidate profiles").await?;
        let total = rows.len();

        let profiles: Vec<CandidateProfile> = rows
            .into_iter()
            .filter_map(|row| serde_json::from_value(row).ok())
            .filter(|p: &CandidateProfile| p.id != user_id && !exclude_ids.contains(&p.id))
            .collect();

        tracing::debug!("Queried {} candidates ({} rows returned)", profiles.len(), total);

        Ok(profiles)
    }
}
