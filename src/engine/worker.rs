use std::sync::Arc;
use std::time::Instant;

use tokio::sync::mpsc::UnboundedSender;

use super::messages::{LoadRequest, LoadResult};
use super::state::PublishedDataset;
use crate::config::DEBUG_FLAGS;
use crate::data::{LoadError, Series, SourceFetcher, assemble_series, parse_rows};
use crate::domain::{DatasetKey, SupportedYear};

/// Run one load on the tokio runtime and report back on `tx`.
/// Must be called from within a runtime.
pub fn spawn_load_task(
    fetcher: Arc<dyn SourceFetcher>,
    req: LoadRequest,
    tx: UnboundedSender<LoadResult>,
) {
    tokio::spawn(async move {
        let start = Instant::now();

        let result = load_year(fetcher.as_ref(), req.year).await.map(Arc::new);

        let elapsed = start.elapsed().as_millis();
        if DEBUG_FLAGS.print_fetch_events {
            log::info!(
                "Generation {} ({}) finished in {}ms via {}",
                req.generation,
                req.year,
                elapsed,
                fetcher.signature()
            );
        }

        // A closed channel means the engine is gone: nobody to tell.
        let _ = tx.send(LoadResult {
            generation: req.generation,
            year: req.year,
            duration_ms: elapsed,
            result,
        });
    });
}

/// Fetch and assemble both metrics concurrently. Either both succeed or the
/// first error is returned.
pub async fn load_year(
    fetcher: &dyn SourceFetcher,
    year: SupportedYear,
) -> Result<PublishedDataset, LoadError> {
    let [speed_key, direction_key] = DatasetKey::pair_for(year);

    let (speed, direction) = futures::try_join!(
        load_series(fetcher, speed_key),
        load_series(fetcher, direction_key)
    )?;

    Ok(PublishedDataset {
        year,
        speed,
        direction,
    })
}

/// Fetcher -> Parser -> Normalizer -> Assembler for one resource.
pub async fn load_series(
    fetcher: &dyn SourceFetcher,
    key: DatasetKey,
) -> Result<Series, LoadError> {
    let resource = key.resource_name();

    let text = fetcher
        .fetch_text(&resource)
        .await
        .map_err(|source| LoadError::Fetch { key, source })?;

    let rows = parse_rows(&text).map_err(|source| LoadError::Parse { key, source })?;

    Ok(assemble_series(&rows, key.metric.descriptor(), key.year))
}
