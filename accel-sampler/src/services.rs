use log::{debug, error, info, warn};
use std::sync::Arc;
use tokio::sync::{Mutex, Notify};
use tokio::time::{Instant, MissedTickBehavior};

use imu_common::{IMUSample, Sample3D, SampleWindow};

use crate::adapters::mock::{AccelerometerMock, MockConfig};
use crate::config::SamplerConfig;
use crate::models::errors::SamplerError;
use crate::models::shutdown;
use crate::ports::AccelerometerPort;

/// Polls an accelerometer and keeps the most recent readings.
///
/// The polling loop is the only writer of the window. Readers take a [`SamplerService::snapshot`].
pub struct SamplerService<C>
where
    C: AccelerometerPort,
{
    client: C,
    config: SamplerConfig,
    window: Arc<Mutex<SampleWindow>>,
    abort_signal: Arc<Notify>,
}

impl<C> SamplerService<C>
where
    C: AccelerometerPort,
{
    /// Returns InvalidConfig if the sample period or the window capacity is zero.
    pub fn new(client: C, config: SamplerConfig) -> Result<Self, SamplerError> {
        config.validate()?;
        Ok(Self {
            client,
            config,
            window: Arc::new(Mutex::new(SampleWindow::new(config.window_capacity))),
            abort_signal: Arc::new(Notify::new()),
        })
    }

    /// Starts the data acquisition process. Runs for `run_for_millis`, or until Ctrl+C or
    /// [`SamplerService::stop`] when no duration is given.
    ///
    /// A failed read is logged and skipped.
    pub async fn start(&self, run_for_millis: Option<u64>) -> Result<(), SamplerError> {
        // A stop issued while no acquisition was running must not end this one.
        {
            let stale_stop = self.abort_signal.notified();
            tokio::pin!(stale_stop);
            if stale_stop.as_mut().enable() {
                debug!("Discarded a stop request issued before start");
            }
        }

        let shutdown_handle =
            shutdown::listen_for_shutdown(Arc::clone(&self.abort_signal), run_for_millis);

        let mut interval = tokio::time::interval(self.config.sample_period());
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let started = Instant::now();
        info!(
            "Sampling {} at {} Hz",
            self.client.get_tag(),
            self.config.sample_rate_hz()
        );

        loop {
            tokio::select! {
                _ = self.abort_signal.notified() => {
                    info!("Stop signal received, sampling of {} stopped", self.client.get_tag());
                    break;
                }
                _ = interval.tick() => {
                    match self.client.read().await {
                        Ok(measurement) => {
                            let timestamp = started.elapsed().as_secs_f64();
                            let mut window = self.window.lock().await;
                            window.push(Sample3D::from_measurement(timestamp, measurement));
                        }
                        Err(e) => warn!("Skipping sample from {}: {}", self.client.get_tag(), e),
                    }
                }
            }
        }
        shutdown_handle.abort();
        Ok(())
    }

    /// Stops a running acquisition. Has no effect on acquisitions started later.
    pub fn stop(&self) {
        self.abort_signal.notify_one();
    }

    /// Copy of the current window.
    pub async fn snapshot(&self) -> SampleWindow {
        self.window.lock().await.snapshot()
    }

    /// True once the window holds `window_capacity` samples.
    pub async fn is_ready(&self) -> bool {
        self.window.lock().await.is_full()
    }

    pub async fn len(&self) -> usize {
        self.window.lock().await.len()
    }

    pub fn get_tag(&self) -> &str {
        self.client.get_tag()
    }

    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }
}

/// Starts sampling `client` in a background task.
///
/// # Returns
///
/// Returns a tuple containing:
/// * A `tokio::task::JoinHandle<()>` representing the spawned asynchronous task.
/// * An `Arc<SamplerService<C>>` instance, to take snapshots of the window.
pub fn run_service<C>(
    client: C,
    config: SamplerConfig,
    run_for_millis: Option<u64>,
) -> Result<(tokio::task::JoinHandle<()>, Arc<SamplerService<C>>), SamplerError>
where
    C: AccelerometerPort + 'static,
{
    let service = Arc::new(SamplerService::new(client, config)?);
    let handle = tokio::spawn({
        let service_clone = Arc::clone(&service);
        async move {
            if let Err(e) = service_clone.start(run_for_millis).await {
                error!("Error in sampling loop: {}", e);
            }
        }
    });
    Ok((handle, service))
}

/// Starts sampling a mock accelerometer for `run_for_millis`.
///
/// An InvalidConfig error is returned if either configuration is invalid.
pub fn run_mock_service(
    tag: &str,
    mock_config: MockConfig,
    config: SamplerConfig,
    run_for_millis: u64,
) -> Result<
    (
        tokio::task::JoinHandle<()>,
        Arc<SamplerService<AccelerometerMock>>,
    ),
    SamplerError,
> {
    let mock = AccelerometerMock::new(tag, mock_config)?;
    run_service(mock, config, Some(run_for_millis))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use imu_common::XYZ;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::time::Duration;

    /// Fails every other read.
    struct FlakyAccelerometer {
        reads: AtomicU64,
    }

    #[async_trait]
    impl AccelerometerPort for FlakyAccelerometer {
        async fn read(&self) -> Result<XYZ, SamplerError> {
            let n = self.reads.fetch_add(1, Ordering::SeqCst);
            if n % 2 == 1 {
                return Err(SamplerError::FetchData("sensor busy".to_string()));
            }
            Ok(XYZ::new([n as f64, 0.0, -1.0]))
        }

        fn get_tag(&self) -> &str {
            "Flaky"
        }
    }

    #[test]
    fn test_invalid_config() {
        let mock = AccelerometerMock::new("Test", MockConfig::default()).unwrap();
        assert!(SamplerService::new(mock, SamplerConfig::new(0, 10)).is_err());
    }

    #[tokio::test]
    async fn test_window_fills_and_stays_bounded() {
        let (handle, service) =
            run_mock_service("Test", MockConfig::default(), SamplerConfig::new(5, 20), 500)
                .unwrap();
        handle.await.unwrap();

        assert!(service.is_ready().await);
        let snapshot = service.snapshot().await;
        assert_eq!(snapshot.len(), 20);
        let timestamps: Vec<f64> = snapshot.iter().map(|s| s.get_timestamp_secs()).collect();
        assert!(timestamps.windows(2).all(|w| w[0] <= w[1]));
    }

    #[tokio::test]
    async fn test_stop() {
        let mock = AccelerometerMock::new("Test", MockConfig::default()).unwrap();
        let (handle, service) = run_service(mock, SamplerConfig::new(5, 1000), None).unwrap();
        tokio::time::sleep(Duration::from_millis(100)).await;
        service.stop();
        tokio::time::timeout(Duration::from_millis(1000), handle)
            .await
            .expect("sampler did not stop")
            .unwrap();

        let collected = service.len().await;
        assert!(collected > 0);
        assert!(!service.is_ready().await);
    }

    #[tokio::test]
    async fn test_stop_before_start_is_discarded() {
        let mock = AccelerometerMock::new("Test", MockConfig::default()).unwrap();
        let service = SamplerService::new(mock, SamplerConfig::new(5, 1000)).unwrap();
        service.stop();
        service.start(Some(200)).await.unwrap();
        assert!(service.len().await > 10);
    }

    #[tokio::test]
    async fn test_restart_after_stop() {
        let mock = AccelerometerMock::new("Test", MockConfig::default()).unwrap();
        let service = Arc::new(SamplerService::new(mock, SamplerConfig::new(5, 1000)).unwrap());
        let handle = tokio::spawn({
            let service = Arc::clone(&service);
            async move { service.start(None).await }
        });
        tokio::time::sleep(Duration::from_millis(100)).await;
        service.stop();
        handle.await.unwrap().unwrap();
        let first_run = service.len().await;

        // A second stop after the run ended
        service.stop();
        service.start(Some(200)).await.unwrap();
        assert!(service.len().await > first_run + 10);
    }

    #[tokio::test]
    async fn test_failed_reads_are_skipped() {
        let client = FlakyAccelerometer {
            reads: AtomicU64::new(0),
        };
        let (handle, service) =
            run_service(client, SamplerConfig::new(5, 1000), Some(200)).unwrap();
        handle.await.unwrap();

        let snapshot = service.snapshot().await;
        assert!(!snapshot.is_empty());
        assert!(snapshot
            .iter()
            .all(|s| (s.get_measurement().x() as u64) % 2 == 0));
        assert_eq!(service.get_tag(), "Flaky");
    }

    #[tokio::test]
    async fn test_snapshot_does_not_follow_sampler() {
        let (handle, service) =
            run_mock_service("Test", MockConfig::default(), SamplerConfig::new(5, 1000), 300)
                .unwrap();
        tokio::time::sleep(Duration::from_millis(50)).await;
        let early = service.snapshot().await;
        let early_len = early.len();
        handle.await.unwrap();

        assert_eq!(early.len(), early_len);
        assert!(service.len().await > early_len);
    }
}
