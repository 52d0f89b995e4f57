//! Replaying adapter for the `ImageFetcher` port.

use std::sync::{Arc, Mutex};

use super::{next_interaction, replay_result};
use crate::cassette::replayer::CassetteReplayer;
use crate::error::CardError;
use crate::ports::image_fetcher::{FetchFuture, FetchRequest, FetchedImage, ImageFetcher};

/// Serves recorded fetch results from a cassette.
///
/// Each call must match the recorded request exactly, so a cassette also
/// pins down which captions and query parameters the pipeline sends.
pub struct ReplayingImageFetcher {
    replayer: Arc<Mutex<CassetteReplayer>>,
}

impl ReplayingImageFetcher {
    /// Create a replaying fetcher backed by the given replayer.
    #[must_use]
    pub fn new(replayer: Arc<Mutex<CassetteReplayer>>) -> Self {
        Self { replayer }
    }

    fn replay(&self, request: &FetchRequest) -> Result<FetchedImage, CardError> {
        let interaction =
            next_interaction(&self.replayer, "image_fetcher", "fetch").map_err(CardError::Replay)?;

        let actual = serde_json::to_value(request)
            .map_err(|e| CardError::Replay(format!("Failed to serialize request: {e}")))?;
        if interaction.input != actual {
            return Err(CardError::Replay(format!(
                "Request #{} does not match cassette: expected {}, got {actual}",
                interaction.seq, interaction.input
            )));
        }

        match replay_result::<FetchedImage>(interaction.output) {
            Ok(Ok(image)) => Ok(image),
            Ok(Err(message)) => Err(CardError::Recorded(message)),
            Err(e) => Err(CardError::Replay(format!("Malformed recorded output: {e}"))),
        }
    }
}

impl ImageFetcher for ReplayingImageFetcher {
    fn fetch(&self, request: &FetchRequest) -> FetchFuture<'_> {
        let result = self.replay(request);
        Box::pin(async move { result })
    }
}
