use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};

use business::domain::cart::use_cases::add_item::{AddItemToCartParams, AddItemToCartUseCase};
use business::domain::cart::use_cases::create::CreateCartUseCase;
use business::domain::cart::use_cases::get_all::{GetAllCartsParams, GetAllCartsUseCase};
use business::domain::cart::use_cases::get_by_id::{GetCartByIdParams, GetCartByIdUseCase};
use business::domain::shared::value_objects::{CartId, ItemId};

use crate::api::cart::dto::{CartResponse, CreatedCartResponse};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CartApi {
    create_use_case: Arc<dyn CreateCartUseCase>,
    get_all_use_case: Arc<dyn GetAllCartsUseCase>,
    get_by_id_use_case: Arc<dyn GetCartByIdUseCase>,
    add_item_use_case: Arc<dyn AddItemToCartUseCase>,
}

impl CartApi {
    pub fn new(
        create_use_case: Arc<dyn CreateCartUseCase>,
        get_all_use_case: Arc<dyn GetAllCartsUseCase>,
        get_by_id_use_case: Arc<dyn GetCartByIdUseCase>,
        add_item_use_case: Arc<dyn AddItemToCartUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            add_item_use_case,
        }
    }
}

/// Cart API
#[OpenApi]
impl CartApi {
    /// Create an empty cart
    #[oai(path = "/cart", method = "post", tag = "ApiTags::Carts")]
    async fn create_cart(&self) -> CreateCartResponse {
        match self.create_use_case.execute().await {
            Ok(cart) => {
                let id = cart.id.value();
                CreateCartResponse::Created(
                    Json(CreatedCartResponse { id }),
                    format!("/cart/{}", id),
                )
            }
            Err(err) => {
                let (_, json) = err.into_error_response();
                CreateCartResponse::InternalError(json)
            }
        }
    }

    /// List carts
    ///
    /// The `offset`/`limit` window is taken first, then the price and
    /// quantity bounds are applied to that page.
    #[oai(path = "/cart", method = "get", tag = "ApiTags::Carts")]
    async fn get_all_carts(
        &self,
        offset: Query<Option<i64>>,
        limit: Query<Option<i64>>,
        min_price: Query<Option<f64>>,
        max_price: Query<Option<f64>>,
        min_quantity: Query<Option<i64>>,
        max_quantity: Query<Option<i64>>,
    ) -> GetAllCartsResponse {
        let defaults = GetAllCartsParams::default();
        let params = GetAllCartsParams {
            offset: offset.0.unwrap_or(defaults.offset),
            limit: limit.0.unwrap_or(defaults.limit),
            min_price: min_price.0,
            max_price: max_price.0,
            min_quantity: min_quantity.0,
            max_quantity: max_quantity.0,
        };

        match self.get_all_use_case.execute(params).await {
            Ok(carts) => {
                let responses: Vec<CartResponse> = carts.into_iter().map(|c| c.into()).collect();
                GetAllCartsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    422 => GetAllCartsResponse::UnprocessableEntity(json),
                    _ => GetAllCartsResponse::InternalError(json),
                }
            }
        }
    }

    /// Get a cart by ID
    #[oai(path = "/cart/:id", method = "get", tag = "ApiTags::Carts")]
    async fn get_cart_by_id(&self, id: Path<u64>) -> GetCartByIdResponse {
        match self
            .get_by_id_use_case
            .execute(GetCartByIdParams {
                id: CartId::new(id.0),
            })
            .await
        {
            Ok(cart) => GetCartByIdResponse::Ok(Json(cart.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetCartByIdResponse::NotFound(json),
                    _ => GetCartByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Add one unit of an item to a cart
    ///
    /// Adding an item already in the cart bumps its quantity and refreshes
    /// its name and price. Deleted items cannot be added.
    #[oai(
        path = "/cart/:cart_id/add/:item_id",
        method = "post",
        tag = "ApiTags::Carts"
    )]
    async fn add_item(&self, cart_id: Path<u64>, item_id: Path<u64>) -> AddItemToCartResponse {
        let params = AddItemToCartParams {
            cart_id: CartId::new(cart_id.0),
            item_id: ItemId::new(item_id.0),
        };

        match self.add_item_use_case.execute(params).await {
            Ok(cart) => AddItemToCartResponse::Ok(Json(cart.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => AddItemToCartResponse::NotFound(json),
                    _ => AddItemToCartResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateCartResponse {
    #[oai(status = 201)]
    Created(Json<CreatedCartResponse>, #[oai(header = "Location")] String),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllCartsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<CartResponse>>),
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetCartByIdResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum AddItemToCartResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
