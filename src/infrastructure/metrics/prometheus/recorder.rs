use super::counters::HTTP_SERVER_REQUEST_DURATION;
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusRecorder};

/// Request duration buckets, in seconds.
const DURATION_BUCKETS: &[f64] = &[
    0.005, 0.01, 0.025, 0.05, 0.075, 0.1, 0.25, 0.5, 0.75, 1.0, 2.5, 5.0, 7.5, 10.0,
];

/// Build a Prometheus recorder owned by the caller.
///
/// The recorder is not installed globally; metrics reach it through
/// `metrics::with_local_recorder`, so independent registries can coexist.
pub fn build_recorder() -> anyhow::Result<PrometheusRecorder> {
    let recorder = PrometheusBuilder::new()
        .set_buckets_for_metric(
            Matcher::Full(HTTP_SERVER_REQUEST_DURATION.to_string()),
            DURATION_BUCKETS,
        )?
        .build_recorder();

    Ok(recorder)
}
