//! To-do item endpoints
//!
//! `GET /` renders one day's list. The three form posts each run a single
//! store call and answer with a 302 redirect.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Form, Router,
};
use serde::Deserialize;

use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::{ItemDate, ItemId};
use crate::view::{self, LIST_TITLE};

/// `302 Found` with a Location header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Found(pub String);

impl IntoResponse for Found {
    fn into_response(self) -> Response {
        (StatusCode::FOUND, [(header::LOCATION, self.0)]).into_response()
    }
}

/// Query for the list page
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub date: Option<String>,
}

/// Add form
#[derive(Debug, Deserialize)]
pub struct AddItemForm {
    #[serde(rename = "newItem")]
    pub new_item: String,
    pub date: Option<String>,
}

/// Edit form
#[derive(Debug, Deserialize)]
pub struct EditItemForm {
    #[serde(rename = "updatedItemId")]
    pub updated_item_id: String,
    #[serde(rename = "updatedItemTitle")]
    pub updated_item_title: String,
    pub date: Option<String>,
}

/// Delete form
///
/// `date` is accepted but the redirect always goes to the current day.
#[derive(Debug, Deserialize)]
pub struct DeleteItemForm {
    #[serde(rename = "deleteItemId")]
    pub delete_item_id: String,
    pub date: Option<String>,
}

/// GET / - list items for a date (default today)
async fn list_items(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> Result<Html<String>, ApiError> {
    let date = ItemDate::or_today(params.date.as_deref())?;
    let items = state.store.list_by_date(date).await?;
    tracing::debug!(%date, count = items.len(), "listed items");

    Ok(Html(view::render_list(LIST_TITLE, date, &items)))
}

/// POST /add - insert an item, then show today's list
async fn add_item(
    State(state): State<Arc<AppState>>,
    Form(form): Form<AddItemForm>,
) -> Result<Found, ApiError> {
    let date = ItemDate::or_today(form.date.as_deref())?;
    state.store.insert(&form.new_item, date).await?;
    tracing::info!(%date, "item added");

    Ok(Found("/".to_owned()))
}

/// POST /edit - rename an item, then show the list for the given date
async fn edit_item(
    State(state): State<Arc<AppState>>,
    Form(form): Form<EditItemForm>,
) -> Result<Found, ApiError> {
    let id = ItemId::parse(&form.updated_item_id)?;
    let date = ItemDate::or_today(form.date.as_deref())?;

    let updated = state.store.update_title(id, &form.updated_item_title).await?;
    if updated == 0 {
        tracing::debug!(%id, "edit matched no item");
    } else {
        tracing::info!(%id, "item renamed");
    }

    Ok(Found(format!("/?date={}", date)))
}

/// POST /delete - remove an item, then show today's list
async fn delete_item(
    State(state): State<Arc<AppState>>,
    Form(form): Form<DeleteItemForm>,
) -> Result<Found, ApiError> {
    let id = ItemId::parse(&form.delete_item_id)?;

    let deleted = state.store.delete(id).await?;
    if deleted == 0 {
        tracing::debug!(%id, "delete matched no item");
    } else {
        tracing::info!(%id, "item deleted");
    }

    Ok(Found("/".to_owned()))
}

/// Item routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_items))
        .route("/add", post(add_item))
        .route("/edit", post(edit_item))
        .route("/delete", post(delete_item))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use tower::ServiceExt;

    use crate::db::{DbError, ItemStore, MemoryItemStore};
    use crate::models::Item;

    /// Store whose every call fails like a dropped connection
    struct BrokenStore;

    #[async_trait]
    impl ItemStore for BrokenStore {
        async fn list_by_date(&self, _: ItemDate) -> Result<Vec<Item>, DbError> {
            Err(DbError::Sqlx(sqlx::Error::PoolClosed))
        }
        async fn insert(&self, _: &str, _: ItemDate) -> Result<(), DbError> {
            Err(DbError::Sqlx(sqlx::Error::PoolClosed))
        }
        async fn update_title(&self, _: ItemId, _: &str) -> Result<u64, DbError> {
            Err(DbError::Sqlx(sqlx::Error::PoolClosed))
        }
        async fn delete(&self, _: ItemId) -> Result<u64, DbError> {
            Err(DbError::Sqlx(sqlx::Error::PoolClosed))
        }
        async fn ping(&self) -> Result<(), DbError> {
            Err(DbError::Sqlx(sqlx::Error::PoolClosed))
        }
    }

    fn app(store: Arc<dyn ItemStore>) -> Router {
        router().with_state(Arc::new(AppState { store }))
    }

    fn post_form(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/x-www-form-urlencoded")
            .body(Body::from(body.to_owned()))
            .unwrap()
    }

    fn location(response: &Response) -> &str {
        response
            .headers()
            .get(header::LOCATION)
            .unwrap()
            .to_str()
            .unwrap()
    }

    async fn body_text(response: Response) -> String {
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(body.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn add_redirects_to_root_even_for_other_dates() {
        let store = Arc::new(MemoryItemStore::new());
        let response = app(store.clone())
            .oneshot(post_form("/add", "newItem=Buy+milk&date=2024-01-01"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(location(&response), "/");

        let items = store
            .list_by_date(ItemDate::parse("2024-01-01").unwrap())
            .await
            .unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "Buy milk");
    }

    #[tokio::test]
    async fn add_without_date_uses_today() {
        let store = Arc::new(MemoryItemStore::new());
        app(store.clone())
            .oneshot(post_form("/add", "newItem=Stretch&date="))
            .await
            .unwrap();

        let items = store.list_by_date(ItemDate::today()).await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "Stretch");
    }

    #[tokio::test]
    async fn edit_redirects_to_its_date() {
        let store = Arc::new(MemoryItemStore::new());
        let day = ItemDate::parse("2024-03-05").unwrap();
        store.insert("old", day).await.unwrap();

        let response = app(store.clone())
            .oneshot(post_form(
                "/edit",
                "updatedItemId=1&updatedItemTitle=new&date=2024-03-05",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(location(&response), "/?date=2024-03-05");
        assert_eq!(store.list_by_date(day).await.unwrap()[0].title, "new");
    }

    #[tokio::test]
    async fn edit_without_date_redirects_to_today() {
        let store = Arc::new(MemoryItemStore::new());
        let response = app(store)
            .oneshot(post_form("/edit", "updatedItemId=1&updatedItemTitle=x"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(
            location(&response),
            format!("/?date={}", ItemDate::today())
        );
    }

    #[tokio::test]
    async fn delete_of_missing_item_still_redirects() {
        let store = Arc::new(MemoryItemStore::new());
        let response = app(store)
            .oneshot(post_form("/delete", "deleteItemId=404&date=2024-01-01"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(location(&response), "/");
    }

    #[tokio::test]
    async fn malformed_id_is_bad_request() {
        let store = Arc::new(MemoryItemStore::new());
        let response = app(store)
            .oneshot(post_form("/delete", "deleteItemId=abc"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_text(response).await.contains("expected an integer"));
    }

    #[tokio::test]
    async fn edit_with_malformed_date_keeps_old_title() {
        let store = Arc::new(MemoryItemStore::new());
        let day = ItemDate::parse("2024-03-05").unwrap();
        store.insert("old", day).await.unwrap();

        let response = app(store.clone())
            .oneshot(post_form(
                "/edit",
                "updatedItemId=1&updatedItemTitle=new&date=03/05/2024",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(store.list_by_date(day).await.unwrap()[0].title, "old");
    }

    #[tokio::test]
    async fn delete_ignores_malformed_date() {
        let store = Arc::new(MemoryItemStore::new());
        store
            .insert("gone", ItemDate::parse("2024-03-05").unwrap())
            .await
            .unwrap();

        let response = app(store.clone())
            .oneshot(post_form("/delete", "deleteItemId=1&date=03/05/2024"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FOUND);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn malformed_date_is_bad_request() {
        let store = Arc::new(MemoryItemStore::new());
        let response = app(store)
            .oneshot(
                Request::builder()
                    .uri("/?date=yesterday")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn store_failures_answer_with_500() {
        let requests = [
            Request::builder().uri("/").body(Body::empty()).unwrap(),
            post_form("/add", "newItem=x"),
            post_form("/edit", "updatedItemId=1&updatedItemTitle=x"),
            post_form("/delete", "deleteItemId=1"),
        ];

        for request in requests {
            let uri = request.uri().to_string();
            let response = app(Arc::new(BrokenStore)).oneshot(request).await.unwrap();
            assert_eq!(
                response.status(),
                StatusCode::INTERNAL_SERVER_ERROR,
                "{uri} should fail with 500"
            );
        }
    }
}
