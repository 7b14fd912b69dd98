use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};
use serde_json::Value;

use business::domain::item::errors::ItemError;
use business::domain::item::model::ItemPatch;
use business::domain::item::use_cases::create::{CreateItemParams, CreateItemUseCase};
use business::domain::item::use_cases::delete::{DeleteItemParams, DeleteItemUseCase};
use business::domain::item::use_cases::get_all::{GetAllItemsParams, GetAllItemsUseCase};
use business::domain::item::use_cases::get_by_id::{GetItemByIdParams, GetItemByIdUseCase};
use business::domain::item::use_cases::patch::{PatchItemParams, PatchItemUseCase};
use business::domain::item::use_cases::replace::{ReplaceItemParams, ReplaceItemUseCase};
use business::domain::shared::value_objects::ItemId;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::item::dto::{ItemRequest, ItemResponse, MessageResponse};
use crate::api::tags::ApiTags;

pub struct ItemApi {
    create_use_case: Arc<dyn CreateItemUseCase>,
    get_all_use_case: Arc<dyn GetAllItemsUseCase>,
    get_by_id_use_case: Arc<dyn GetItemByIdUseCase>,
    replace_use_case: Arc<dyn ReplaceItemUseCase>,
    patch_use_case: Arc<dyn PatchItemUseCase>,
    delete_use_case: Arc<dyn DeleteItemUseCase>,
}

impl ItemApi {
    pub fn new(
        create_use_case: Arc<dyn CreateItemUseCase>,
        get_all_use_case: Arc<dyn GetAllItemsUseCase>,
        get_by_id_use_case: Arc<dyn GetItemByIdUseCase>,
        replace_use_case: Arc<dyn ReplaceItemUseCase>,
        patch_use_case: Arc<dyn PatchItemUseCase>,
        delete_use_case: Arc<dyn DeleteItemUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            replace_use_case,
            patch_use_case,
            delete_use_case,
        }
    }
}

/// Item catalog API
///
/// Endpoints for creating, reading, updating and soft-deleting items.
#[OpenApi]
impl ItemApi {
    /// Create an item
    ///
    /// Stores a new item and returns it with its assigned identifier.
    #[oai(path = "/item", method = "post", tag = "ApiTags::Items")]
    async fn create_item(&self, body: Json<ItemRequest>) -> CreateItemResponse {
        let params = CreateItemParams {
            name: body.0.name,
            price: body.0.price,
        };

        match self.create_use_case.execute(params).await {
            Ok(item) => {
                let location = format!("/item/{}", item.id);
                CreateItemResponse::Created(Json(item.into()), location)
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    422 => CreateItemResponse::UnprocessableEntity(json),
                    _ => CreateItemResponse::InternalError(json),
                }
            }
        }
    }

    /// List items
    ///
    /// Returns a page of items in creation order. Price bounds are inclusive.
    /// Soft-deleted items are left out unless `show_deleted` is true.
    #[oai(path = "/item", method = "get", tag = "ApiTags::Items")]
    async fn get_all_items(
        &self,
        offset: Query<Option<i64>>,
        limit: Query<Option<i64>>,
        min_price: Query<Option<f64>>,
        max_price: Query<Option<f64>>,
        show_deleted: Query<Option<bool>>,
    ) -> GetAllItemsResponse {
        let defaults = GetAllItemsParams::default();
        let params = GetAllItemsParams {
            offset: offset.0.unwrap_or(defaults.offset),
            limit: limit.0.unwrap_or(defaults.limit),
            min_price: min_price.0,
            max_price: max_price.0,
            show_deleted: show_deleted.0.unwrap_or(defaults.show_deleted),
        };

        match self.get_all_use_case.execute(params).await {
            Ok(items) => {
                let responses: Vec<ItemResponse> = items.into_iter().map(|i| i.into()).collect();
                GetAllItemsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    422 => GetAllItemsResponse::UnprocessableEntity(json),
                    _ => GetAllItemsResponse::InternalError(json),
                }
            }
        }
    }

    /// Get an item by ID
    ///
    /// Soft-deleted items are reported as not found.
    #[oai(path = "/item/:id", method = "get", tag = "ApiTags::Items")]
    async fn get_item_by_id(&self, id: Path<u64>) -> GetItemByIdResponse {
        match self
            .get_by_id_use_case
            .execute(GetItemByIdParams {
                id: ItemId::new(id.0),
            })
            .await
        {
            Ok(item) => GetItemByIdResponse::Ok(Json(item.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetItemByIdResponse::NotFound(json),
                    _ => GetItemByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Replace an item
    ///
    /// Overwrites name and price. The deletion flag is left as it is.
    #[oai(path = "/item/:id", method = "put", tag = "ApiTags::Items")]
    async fn replace_item(&self, id: Path<u64>, body: Json<ItemRequest>) -> ReplaceItemResponse {
        let params = ReplaceItemParams {
            id: ItemId::new(id.0),
            name: body.0.name,
            price: body.0.price,
        };

        match self.replace_use_case.execute(params).await {
            Ok(item) => ReplaceItemResponse::Ok(Json(item.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => ReplaceItemResponse::NotFound(json),
                    422 => ReplaceItemResponse::UnprocessableEntity(json),
                    _ => ReplaceItemResponse::InternalError(json),
                }
            }
        }
    }

    /// Patch an item
    ///
    /// Accepts an object with any subset of `name` and `price`; any other key
    /// is rejected. A deleted item is answered with 304 and left untouched.
    #[oai(path = "/item/:id", method = "patch", tag = "ApiTags::Items")]
    async fn patch_item(&self, id: Path<u64>, body: Json<Value>) -> PatchItemResponse {
        let patch = match &body.0 {
            Value::Object(fields) => ItemPatch::from_fields(fields),
            _ => Err(ItemError::InvalidPatch),
        };

        let result = match patch {
            Ok(patch) => {
                self.patch_use_case
                    .execute(PatchItemParams {
                        id: ItemId::new(id.0),
                        patch,
                    })
                    .await
            }
            Err(err) => Err(err),
        };

        match result {
            Ok(item) => PatchItemResponse::Ok(Json(item.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    304 => PatchItemResponse::NotModified,
                    404 => PatchItemResponse::NotFound(json),
                    422 => PatchItemResponse::UnprocessableEntity(json),
                    _ => PatchItemResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete an item
    ///
    /// Marks the item as deleted. Deleting an already deleted item succeeds.
    #[oai(path = "/item/:id", method = "delete", tag = "ApiTags::Items")]
    async fn delete_item(&self, id: Path<u64>) -> DeleteItemResponse {
        match self
            .delete_use_case
            .execute(DeleteItemParams {
                id: ItemId::new(id.0),
            })
            .await
        {
            Ok(()) => DeleteItemResponse::Ok(Json(MessageResponse {
                message: "Item marked as deleted".to_string(),
            })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteItemResponse::NotFound(json),
                    _ => DeleteItemResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateItemResponse {
    #[oai(status = 201)]
    Created(Json<ItemResponse>, #[oai(header = "Location")] String),
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllItemsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ItemResponse>>),
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetItemByIdResponse {
    #[oai(status = 200)]
    Ok(Json<ItemResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ReplaceItemResponse {
    #[oai(status = 200)]
    Ok(Json<ItemResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum PatchItemResponse {
    #[oai(status = 200)]
    Ok(Json<ItemResponse>),
    #[oai(status = 304)]
    NotModified,
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteItemResponse {
    #[oai(status = 200)]
    Ok(Json<MessageResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[cfg(test)]
mod tests {
    use poem::http::StatusCode;
    use serde_json::json;

    use crate::setup::server::test_client;

    #[tokio::test]
    async fn should_create_item_with_location_header() {
        let cli = test_client();

        let resp = cli
            .post("/item")
            .body_json(&json!({"name": "pen", "price": 1.5}))
            .send()
            .await;

        resp.assert_status(StatusCode::CREATED);
        resp.assert_header("Location", "/item/1");
        let json = resp.json().await;
        let item = json.value().object();
        item.get("id").assert_i64(1);
        item.get("name").assert_string("pen");
        item.get("price").assert_f64(1.5);
    }

    #[tokio::test]
    async fn should_reject_negative_price_with_422() {
        let cli = test_client();

        let resp = cli
            .post("/item")
            .body_json(&json!({"name": "pen", "price": -1.0}))
            .send()
            .await;

        resp.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn should_hide_deleted_item_from_get() {
        let cli = test_client();
        cli.post("/item")
            .body_json(&json!({"name": "pen", "price": 1.5}))
            .send()
            .await
            .assert_status(StatusCode::CREATED);

        let delete = cli.delete("/item/1").send().await;
        delete.assert_status_is_ok();
        delete
            .json()
            .await
            .value()
            .object()
            .get("message")
            .assert_string("Item marked as deleted");

        cli.get("/item/1")
            .send()
            .await
            .assert_status(StatusCode::NOT_FOUND);
        cli.delete("/item/1").send().await.assert_status_is_ok();
    }

    #[tokio::test]
    async fn should_return_404_for_unknown_ids() {
        let cli = test_client();

        cli.get("/item/9")
            .send()
            .await
            .assert_status(StatusCode::NOT_FOUND);
        cli.put("/item/9")
            .body_json(&json!({"name": "pen", "price": 1.5}))
            .send()
            .await
            .assert_status(StatusCode::NOT_FOUND);
        cli.patch("/item/9")
            .body_json(&json!({"price": 2.0}))
            .send()
            .await
            .assert_status(StatusCode::NOT_FOUND);
        cli.delete("/item/9")
            .send()
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_patch_known_fields_and_reject_unknown_ones() {
        let cli = test_client();
        cli.post("/item")
            .body_json(&json!({"name": "pen", "price": 1.5}))
            .send()
            .await
            .assert_status(StatusCode::CREATED);

        cli.patch("/item/1")
            .body_json(&json!({"name": "pen", "deleted": true}))
            .send()
            .await
            .assert_status(StatusCode::UNPROCESSABLE_ENTITY);

        let resp = cli
            .patch("/item/1")
            .body_json(&json!({"price": 2.5}))
            .send()
            .await;
        resp.assert_status_is_ok();
        let json = resp.json().await;
        let item = json.value().object();
        item.get("name").assert_string("pen");
        item.get("price").assert_f64(2.5);
    }

    #[tokio::test]
    async fn should_answer_not_modified_when_patching_deleted_item() {
        let cli = test_client();
        cli.post("/item")
            .body_json(&json!({"name": "pen", "price": 1.5}))
            .send()
            .await
            .assert_status(StatusCode::CREATED);
        cli.delete("/item/1").send().await.assert_status_is_ok();

        cli.patch("/item/1")
            .body_json(&json!({"name": "pencil"}))
            .send()
            .await
            .assert_status(StatusCode::NOT_MODIFIED);
    }

    #[tokio::test]
    async fn should_list_items_with_filters() {
        let cli = test_client();
        for (name, price) in [("sample", 0.0), ("pen", 1.5), ("book", 9.0)] {
            cli.post("/item")
                .body_json(&json!({"name": name, "price": price}))
                .send()
                .await
                .assert_status(StatusCode::CREATED);
        }
        cli.delete("/item/2").send().await.assert_status_is_ok();

        let visible = cli.get("/item").send().await;
        visible.assert_status_is_ok();
        visible.json().await.value().array().assert_len(2);

        let with_deleted = cli.get("/item").query("show_deleted", &true).send().await;
        with_deleted.assert_status_is_ok();
        with_deleted.json().await.value().array().assert_len(3);

        let free = cli.get("/item").query("max_price", &0).send().await;
        free.assert_status_is_ok();
        let json = free.json().await;
        let items = json.value().array();
        items.assert_len(1);
        items.get(0).object().get("name").assert_string("sample");
    }

    #[tokio::test]
    async fn should_reject_bad_list_queries_with_422() {
        let cli = test_client();

        for (name, value) in [("limit", 0), ("limit", -1), ("offset", -1), ("min_price", -1)] {
            cli.get("/item")
                .query(name, &value)
                .send()
                .await
                .assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        }
    }

    #[tokio::test]
    async fn should_answer_422_for_unparsable_query_values() {
        let cli = test_client();

        for (name, value) in [("limit", "abc"), ("offset", "x"), ("min_price", "cheap")] {
            let resp = cli.get("/item").query(name, &value).send().await;

            resp.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
            resp.json()
                .await
                .value()
                .object()
                .get("name")
                .assert_string("ValidationError");
        }
    }

    #[tokio::test]
    async fn should_answer_422_for_malformed_item_body() {
        let cli = test_client();

        for body in [json!({"name": "pen"}), json!({"name": "pen", "price": "x"})] {
            cli.post("/item")
                .body_json(&body)
                .send()
                .await
                .assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        }
        cli.post("/item")
            .body_json(&json!({"name": "pen", "price": 1.5}))
            .send()
            .await
            .assert_status(StatusCode::CREATED);
        cli.put("/item/1")
            .body_json(&json!({"price": 2.0}))
            .send()
            .await
            .assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn should_reject_unknown_patch_field_on_deleted_item_with_422() {
        let cli = test_client();
        cli.post("/item")
            .body_json(&json!({"name": "pen", "price": 1.5}))
            .send()
            .await
            .assert_status(StatusCode::CREATED);
        cli.delete("/item/1").send().await.assert_status_is_ok();

        cli.patch("/item/1")
            .body_json(&json!({"color": "red"}))
            .send()
            .await
            .assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn should_return_empty_list_for_empty_store() {
        let cli = test_client();

        let resp = cli
            .get("/item")
            .query("offset", &0)
            .query("limit", &10)
            .send()
            .await;

        resp.assert_status_is_ok();
        resp.json().await.value().array().assert_len(0);
    }
}
