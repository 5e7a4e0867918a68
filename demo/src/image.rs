use thiserror::Error;
use tracing::{error, info};

use optext_core::util::or_throw::OrThrow;

/// Stand-in for image data; the demo never looks inside.
#[derive(Clone, Debug)]
pub struct Image {
  pub label: &'static str,
}

#[derive(Debug, Error)]
pub enum PrepareError {
  #[error("Watermarking image failed")]
  Watermark,
  #[error("Encrypting image failed")]
  Encrypt,
}

/// Prepares an image for upload by watermarking and then encrypting it, turning an absent result
/// of either step into an error.
pub fn prepare_for_upload(image: Image) -> Result<Image, PrepareError> {
  prepare_with(image, watermark, encrypt)
}

fn prepare_with<W, C>(image: Image, watermark: W, encrypt: C) -> Result<Image, PrepareError> where
  W: FnOnce(&Image) -> Option<Image>,
  C: FnOnce(&Image) -> Option<Image>,
{
  let watermarked = watermark(&image).or_throw(|| PrepareError::Watermark)?;
  let encrypted = encrypt(&watermarked).or_throw(|| PrepareError::Encrypt)?;
  Ok(encrypted)
}

// Stub: logs and fails, exercising the error path of `prepare_for_upload`.
fn watermark(image: &Image) -> Option<Image> {
  info!(label = image.label, "watermarking image");
  None
}

fn encrypt(image: &Image) -> Option<Image> {
  info!(label = image.label, "encrypting image");
  Some(image.clone())
}

pub fn upload_scenario() {
  match prepare_for_upload(Image { label: "avatar" }) {
    Ok(image) => info!(label = image.label, "image ready for upload"),
    Err(cause) => error!(%cause, "preparing image for upload failed"),
  }
}
