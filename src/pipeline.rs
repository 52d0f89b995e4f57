//! The fetch-then-compose pipeline.

use std::path::{Path, PathBuf};

use crate::compose::compose;
use crate::error::CardError;
use crate::output::write_atomic;
use crate::params::CardParams;
use crate::ports::{FetchRequest, FetchedImage, ImageFetcher};

/// Fetch both pictures, compose them, and write the card to `out_path`.
///
/// Fetches run one after the other, greeting first. Any failure stops the
/// pipeline before the write, so `out_path` is left untouched.
///
/// # Errors
///
/// Returns the first fetch, decode, encode, or write error.
pub async fn run_pipeline(
    fetcher: &dyn ImageFetcher,
    params: &CardParams,
    out_path: &Path,
) -> Result<PathBuf, CardError> {
    let first = fetch_one(fetcher, "Cat one", &params.greeting, params).await?;
    let second = fetch_one(fetcher, "Cat two", &params.who, params).await?;

    let card = compose(&first.data, &second.data, params.display.width)?;
    write_atomic(out_path, &card)?;
    tracing::info!(path = %out_path.display(), bytes = card.len(), "The file was saved!");

    Ok(out_path.to_path_buf())
}

async fn fetch_one(
    fetcher: &dyn ImageFetcher,
    label: &str,
    caption: &str,
    params: &CardParams,
) -> Result<FetchedImage, CardError> {
    let request = FetchRequest::new(caption, &params.display);
    match fetcher.fetch(&request).await {
        Ok(image) => {
            tracing::info!(
                status = image.status,
                bytes = image.data.len(),
                "{label}: received response"
            );
            Ok(image)
        }
        Err(e) => {
            tracing::warn!(caption, error = %e, "{label}: fetch failed");
            Err(e)
        }
    }
}
