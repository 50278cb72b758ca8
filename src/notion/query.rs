use reqwest::Client;

use crate::{
    config::{NOTION_VERSION, NotionConfig},
    error::FetchError,
    types::{ApiErrorBody, QueryRequest, QueryResponse, SortSpec},
};

/// Title column the results are sorted on.
pub const TITLE_PROPERTY: &str = "単語";

/// Largest page the query endpoint returns.
const PAGE_SIZE: u32 = 100;

/// Sends the database query to the Notion API.
///
/// Issues a single `POST {api_url}/databases/{id}/query` authorized with the
/// configured bearer token, pinned to API revision `2022-06-28` and asking for
/// ascending order on the title column.
///
/// # Arguments
///
/// * `config` - Credential, database id and base URL of the API
///
/// # Returns
///
/// - `Ok(QueryResponse)` - The first page of results
/// - `Err(FetchError::Network)` - The API could not be reached
/// - `Err(FetchError::Schema)` - The database is missing an expected column
/// - `Err(FetchError::Status)` - Any other non-success response
/// - `Err(FetchError::Decode)` - The body was not a query result
///
/// # Example
///
/// ```
/// let response = query_database(&config).await?;
/// println!("{} pages", response.results.len());
/// ```
pub async fn query_database(config: &NotionConfig) -> Result<QueryResponse, FetchError> {
    let body = QueryRequest {
        sorts: vec![SortSpec {
            property: TITLE_PROPERTY.to_string(),
            direction: "ascending".to_string(),
        }],
        page_size: PAGE_SIZE,
    };

    let client = Client::new();
    let response = client
        .post(config.query_url())
        .bearer_auth(&config.api_key)
        .header("Notion-Version", NOTION_VERSION)
        .json(&body)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let text = response.text().await.unwrap_or_default();
        return Err(status_error(status.as_u16(), status.canonical_reason(), &text));
    }

    let text = response.text().await?;
    serde_json::from_str::<QueryResponse>(&text).map_err(|e| FetchError::Decode(e.to_string()))
}

/// Turns a non-success response into the matching error.
///
/// A `validation_error` that mentions a property means the database's columns
/// don't match what the deck reads (usually a renamed title column).
pub(crate) fn status_error(status: u16, reason: Option<&str>, body: &str) -> FetchError {
    let api_error = serde_json::from_str::<ApiErrorBody>(body).ok();
    let reason = reason.unwrap_or("");

    let detail = match &api_error {
        Some(err) if !err.message.is_empty() => format!("{}: {}", reason, err.message),
        _ => reason.to_string(),
    };

    if let Some(err) = &api_error {
        let mentions_property =
            err.message.contains(TITLE_PROPERTY) || err.message.contains("property");
        if status == 400 && err.code == "validation_error" && mentions_property {
            return FetchError::Schema {
                message: format!("{} {}", status, detail),
                hint: format!(
                    "The database needs a title column named '{}'. Check that the column names match exactly.",
                    TITLE_PROPERTY
                ),
            };
        }
    }

    FetchError::Status {
        status,
        message: detail,
    }
}
