use axum::{
    extract::{DefaultBodyLimit, Path, State},
    routing::{get, post},
    Json, Router,
};
use tracing::{error, info, instrument, warn};

use crate::{
    auth::jwt::AuthUser,
    error::{internal, ok, ApiError, ApiResult, SuccessBody},
    products::{
        dto::ProductResponse,
        repo::NewProduct,
        upload::ProductForm,
    },
    state::AppState,
    validation::parse_id,
};

pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(list_products))
        .route("/product/:id", get(get_product))
}

pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/product", post(create_product))
        .layer(DefaultBodyLimit::max(10 * 1024 * 1024)) // 10MB
}

#[instrument(skip(state))]
pub async fn list_products(
    State(state): State<AppState>,
) -> ApiResult<Json<SuccessBody<Vec<ProductResponse>>>> {
    let products = state.products.list().await.map_err(internal)?;
    Ok(ok(products.into_iter().map(ProductResponse::from).collect()))
}

#[instrument(skip(state))]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<SuccessBody<ProductResponse>>> {
    let id = parse_id(&id);
    match state.products.find_by_id(id).await.map_err(internal)? {
        Some(product) => Ok(ok(ProductResponse::from(product))),
        None => {
            error!(id, "product not found");
            Err(ApiError::Internal("product not found".into()))
        }
    }
}

/// POST /product (multipart): name, desc, price, qty, category_id, image
#[instrument(skip(state, form))]
pub async fn create_product(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    form: ProductForm,
) -> ApiResult<Json<SuccessBody<ProductResponse>>> {
    let ProductForm { request, image } = form;

    let created = state
        .products
        .create(NewProduct {
            name: request.name,
            desc: request.desc,
            price: request.price,
            image: image.filename.clone(),
            qty: request.qty,
            user_id,
            category_id: request.category_id,
        })
        .await;

    let id = match created {
        Ok(id) => id,
        Err(e) => {
            if let Err(cleanup) = state.storage.delete_object(&image.filename).await {
                warn!(error = %cleanup, filename = %image.filename, "orphaned upload");
            }
            return Err(internal(e));
        }
    };

    let product = state
        .products
        .find_by_id(id)
        .await
        .map_err(internal)?
        .ok_or_else(|| ApiError::Internal("product not found".into()))?;

    info!(product_id = id, user_id, image = %product.image, "product created");
    Ok(ok(ProductResponse::from(product)))
}
