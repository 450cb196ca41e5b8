extern crate tokio;

use super::Inner;
use crate::{error::Result, graphql::GraphQl};
use std::sync::Arc;
use tokio::{
    task::JoinHandle,
    time::{interval_at, Instant, MissedTickBehavior},
};

const QUERY: &str = "
    query currentTimestamp {
      currentTimestamp
    }
";

pub(super) async fn ping(inner: &Inner) -> Result<f64> {
    inner
        .graphql(&GraphQl::new("currentTimestamp", QUERY))
        .await?
        .take("currentTimestamp")
}

async fn beat(inner: &Inner, what: &str) {
    match ping(inner).await {
        Ok(ts) => log::debug!("{} ping ok, server time {}", what, ts),
        Err(e) => log::warn!("Error in {} ping: {}", what, e),
    }
}

/// Pings once right away, then every `inner.keep_alive` until aborted.
pub(super) fn spawn(inner: Arc<Inner>) -> JoinHandle<()> {
    tokio::spawn(async move {
        beat(&inner, "initial keep-alive").await;
        let period = inner.keep_alive;
        let mut ticker = interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            beat(&inner, "keep-alive").await;
        }
    })
}
