//! Shared application state for the tally gateway.
//!
//! Owns the three counters explicitly; handlers reach them only through
//! `State<AppState>`, never through globals.

use std::sync::Arc;

use tally_core::counter::{AtomicCounter, ChannelCounter, MutexCounter, VisitCounter};
use tally_core::error::Result;
use tally_core::Strategy;

use crate::config::GatewayConfig;
use crate::obs::metrics::GatewayMetrics;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    metrics: Arc<GatewayMetrics>,
}

struct AppStateInner {
    cfg: GatewayConfig,
    mutex: Arc<MutexCounter>,
    atomic: Arc<AtomicCounter>,
    channel: Arc<ChannelCounter>,
}

impl AppState {
    /// Build application state with fresh counters (all at zero).
    /// Returns Result so main can handle errors gracefully (no panic).
    pub fn new(cfg: GatewayConfig) -> Result<Self> {
        cfg.validate()?;

        Ok(Self {
            inner: Arc::new(AppStateInner {
                cfg,
                mutex: Arc::new(MutexCounter::new()),
                atomic: Arc::new(AtomicCounter::new()),
                // Seeded with its single token here, before any request is served.
                channel: Arc::new(ChannelCounter::new()),
            }),
            metrics: Arc::new(GatewayMetrics::default()),
        })
    }

    pub fn cfg(&self) -> &GatewayConfig {
        &self.inner.cfg
    }

    pub fn counter(&self, strategy: Strategy) -> Arc<dyn VisitCounter> {
        match strategy {
            Strategy::Mutex => Arc::clone(&self.inner.mutex) as Arc<dyn VisitCounter>,
            Strategy::Atomic => Arc::clone(&self.inner.atomic) as Arc<dyn VisitCounter>,
            Strategy::Channel => Arc::clone(&self.inner.channel) as Arc<dyn VisitCounter>,
        }
    }

    pub fn channel_counter(&self) -> Arc<ChannelCounter> {
        Arc::clone(&self.inner.channel)
    }

    pub fn metrics(&self) -> Arc<GatewayMetrics> {
        Arc::clone(&self.metrics)
    }

    pub fn is_draining(&self) -> bool {
        self.metrics.is_draining()
    }

    /// Stop reporting ready. In-flight and new requests are still served.
    pub fn begin_drain(&self) {
        self.metrics.set_draining();
        tracing::info!("draining");
    }

    /// Tear down after the server stopped: closes the channel counter once its
    /// token is back.
    pub async fn shutdown(&self) {
        self.inner.channel.close().await;
        tracing::info!("channel counter closed");
    }
}
