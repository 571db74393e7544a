//! The Processor: unified API for Receipt Points.
//!
//! The Processor brings together the rules, identifier generation and the
//! points store. Handlers hold one shared instance; there is no global state.

use receipt_points_core::{score_breakdown, Points, Receipt, ReceiptId, ScoreBreakdown};
use receipt_points_store::PointsStore;
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::id::{IdGenerator, UuidGenerator};

/// Configuration for the Processor.
#[derive(Debug, Clone, Default)]
pub struct ProcessorConfig {
    /// Emit a debug event for every rule's contribution. Off by default.
    pub log_breakdown: bool,
}

/// The main Processor struct.
///
/// Provides:
/// - Scoring and filing a receipt ([`process`](Self::process))
/// - Looking up a filed score ([`points`](Self::points))
/// - Explaining a score without filing it ([`breakdown`](Self::breakdown))
pub struct Processor<S: PointsStore, G: IdGenerator = UuidGenerator> {
    /// The storage backend.
    store: S,
    /// Source of fresh identifiers.
    ids: G,
    /// Configuration.
    config: ProcessorConfig,
}

impl<S: PointsStore> Processor<S> {
    /// Create a processor that files scores under random UUIDs.
    pub fn new(store: S, config: ProcessorConfig) -> Self {
        Self::with_id_generator(store, UuidGenerator, config)
    }
}

impl<S: PointsStore, G: IdGenerator> Processor<S, G> {
    /// Create a processor with a custom identifier source.
    pub fn with_id_generator(store: S, ids: G, config: ProcessorConfig) -> Self {
        Self {
            store,
            ids,
            config,
        }
    }

    /// Get the store reference.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Get the configuration.
    pub fn config(&self) -> &ProcessorConfig {
        &self.config
    }

    /// Score a receipt, file the score under a fresh identifier, and return
    /// the identifier.
    ///
    /// Nothing is stored when the receipt fails validation.
    pub async fn process(&self, receipt: &Receipt) -> Result<ReceiptId> {
        let breakdown = self.breakdown(receipt)?;
        let points = breakdown.total();

        let id = self.ids.generate();
        self.store.put(&id, points).await?;

        info!(%id, points, retailer = %receipt.retailer, "receipt processed");
        Ok(id)
    }

    /// Look up the points filed under `id`.
    pub async fn points(&self, id: &ReceiptId) -> Result<Points> {
        match self.store.get(id).await {
            Ok(points) => Ok(points),
            Err(e) => {
                warn!(%id, "points lookup failed: {}", e);
                Err(e.into())
            }
        }
    }

    /// Score a receipt without filing it.
    pub fn breakdown(&self, receipt: &Receipt) -> Result<ScoreBreakdown> {
        let breakdown = score_breakdown(receipt).map_err(|e| {
            warn!(field = e.field(), "receipt rejected: {}", e);
            e
        })?;

        if self.config.log_breakdown {
            for c in &breakdown.contributions {
                debug!(rule = %c.rule, points = c.points, detail = %c.detail, "rule applied");
            }
        }

        Ok(breakdown)
    }

    /// Number of scores filed so far.
    pub async fn record_count(&self) -> Result<usize> {
        Ok(self.store.len().await?)
    }
}
