//! Live adapter for the cataas "cat says" picture service.

use reqwest::{Client, Url};

use crate::error::CardError;
use crate::ports::image_fetcher::{FetchFuture, FetchRequest, FetchedImage, ImageFetcher};

/// Live fetcher that requests captioned cat pictures over HTTP.
pub struct CataasFetcher {
    client: Client,
    base_url: Url,
}

impl CataasFetcher {
    /// Create a fetcher that appends captions to `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not an absolute http(s) URL.
    pub fn new(base_url: &str) -> Result<Self, CardError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| CardError::Config(format!("Invalid base URL '{base_url}': {e}")))?;
        if base_url.cannot_be_a_base() || !matches!(base_url.scheme(), "http" | "https") {
            return Err(CardError::Config(format!("Base URL must be http(s): {base_url}")));
        }
        Ok(Self { client: Client::new(), base_url })
    }

    /// The URL for a caption, without query parameters.
    ///
    /// The caption becomes one percent-encoded path segment.
    #[must_use]
    pub fn caption_url(&self, caption: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(caption);
        }
        url
    }

    fn build_request(&self, request: &FetchRequest) -> Result<reqwest::Request, CardError> {
        let display = &request.display;
        let query = [
            ("height", display.height.to_string()),
            ("width", display.width.to_string()),
            ("color", display.color.clone()),
            ("size", display.size.to_string()),
        ];
        Ok(self.client.get(self.caption_url(&request.caption)).query(&query).build()?)
    }
}

impl ImageFetcher for CataasFetcher {
    fn fetch(&self, request: &FetchRequest) -> FetchFuture<'_> {
        let built = self.build_request(request);
        Box::pin(async move {
            let http_request = built?;
            tracing::debug!(url = %http_request.url(), "requesting picture");

            let response = self.client.execute(http_request).await?;
            let status = response.status();

            if !status.is_success() {
                let message = truncate_body(response.text().await.unwrap_or_default());
                return Err(CardError::Api { status: status.as_u16(), message });
            }

            let data = response.bytes().await?.to_vec();
            Ok(FetchedImage { status: status.as_u16(), data })
        })
    }
}

/// Keep error bodies to the first 500 characters.
fn truncate_body(body: String) -> String {
    if body.chars().count() > 500 {
        format!("{}...", body.chars().take(500).collect::<String>())
    } else {
        body
    }
}
