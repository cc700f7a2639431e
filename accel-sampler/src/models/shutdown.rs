use log::{error, info};
use std::sync::Arc;
use tokio::signal;
use tokio::sync::Notify;

pub(crate) struct ShutdownSignal {
    notify: Arc<Notify>,
}

impl ShutdownSignal {
    fn new(notify: Arc<Notify>) -> Self {
        Self { notify }
    }

    /// Waits `run_for_millis`, or for Ctrl+C when no duration is given, then fires the signal.
    async fn listen_for_shutdown(&self, run_for_millis: Option<u64>) {
        if let Some(time_to_live_millis) = run_for_millis {
            tokio::time::sleep(std::time::Duration::from_millis(time_to_live_millis)).await;
        } else {
            if let Err(e) = signal::ctrl_c().await {
                error!("Error while waiting for Ctrl+C: {}", e);
                return;
            }
            info!("Ctrl+C received. Sending stop signal...");
        }
        // notify_one keeps a permit if the sampler is between two waits
        self.notify.notify_one();
    }
}

pub(crate) fn listen_for_shutdown(
    notify: Arc<Notify>,
    run_for_millis: Option<u64>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let shutdown_signal = ShutdownSignal::new(notify);
        shutdown_signal.listen_for_shutdown(run_for_millis).await;
    })
}
