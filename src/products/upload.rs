use std::collections::HashMap;

use axum::{
    async_trait,
    extract::{FromRequest, Multipart, Request},
};
use bytes::Bytes;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::{
    error::{internal, ApiError},
    products::dto::ProductRequest,
    state::AppState,
};

/// Multipart field carrying the product image.
const IMAGE_FIELD: &str = "image";

/// Image already written to storage; `filename` is its key under `/uploads`.
#[derive(Debug, Clone)]
pub struct UploadedImage {
    pub filename: String,
}

/// Parsed and validated `POST /product` form. The image is only stored once
/// every text field has passed validation.
pub struct ProductForm {
    pub request: ProductRequest,
    pub image: UploadedImage,
}

struct UploadItem {
    body: Bytes,
    content_type: String,
    ext: &'static str,
}

#[async_trait]
impl FromRequest<AppState> for ProductForm {
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &AppState) -> Result<Self, Self::Rejection> {
        let mut mp = Multipart::from_request(req, state)
            .await
            .map_err(|e| ApiError::BadRequest(e.body_text()))?;

        let mut fields = HashMap::new();
        let mut upload = None;
        while let Some(field) = mp
            .next_field()
            .await
            .map_err(|e| ApiError::BadRequest(e.body_text()))?
        {
            let name = field.name().unwrap_or_default().to_string();
            if name == IMAGE_FIELD {
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let Some(ext) = ext_from_mime(&content_type) else {
                    warn!(%content_type, "rejected upload content type");
                    return Err(ApiError::BadRequest(
                        "image must be a jpeg, png, webp or gif".into(),
                    ));
                };
                let body = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(e.body_text()))?;
                if body.is_empty() {
                    return Err(ApiError::BadRequest("image is empty".into()));
                }
                upload = Some(UploadItem {
                    body,
                    content_type,
                    ext,
                });
            } else {
                let value = field
                    .text()
                    .await
                    .map_err(|e| ApiError::BadRequest(e.body_text()))?;
                fields.insert(name, value);
            }
        }

        let request = ProductRequest::from_fields(&fields)?;
        let upload = upload.ok_or_else(|| ApiError::BadRequest("image is required".into()))?;
        let image = store_image(state, upload).await?;

        Ok(ProductForm { request, image })
    }
}

async fn store_image(state: &AppState, item: UploadItem) -> Result<UploadedImage, ApiError> {
    let filename = format!("{}.{}", Uuid::new_v4(), item.ext);
    state
        .storage
        .put_object(&filename, item.body, &item.content_type)
        .await
        .map_err(internal)?;
    debug!(%filename, "product image stored");
    Ok(UploadedImage { filename })
}

fn ext_from_mime(ct: &str) -> Option<&'static str> {
    let essence = ct.split(';').next().unwrap_or_default().trim().to_ascii_lowercase();
    match essence.as_str() {
        "image/jpeg" | "image/jpg" => Some("jpg"),
        "image/png" => Some("png"),
        "image/webp" => Some("webp"),
        "image/gif" => Some("gif"),
        _ => None,
    }
}
