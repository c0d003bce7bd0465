use opentelemetry::metrics::Histogram;

#[derive(Clone, Debug)]
pub struct Metrics {
    pub request_latency: Histogram<f64>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    pub fn new() -> Self {
        let meter = opentelemetry::global::meter("chroma_v1_client");

        let request_latency = meter
            .f64_histogram("chroma_v1_client_request_latency_ms")
            .with_description("Latency of v1 API requests in milliseconds")
            .build();

        Metrics { request_latency }
    }

    /// `status` is the response status code, or `"transport_error"` when no response arrived.
    pub fn record_request(&self, operation_name: &str, status: &str, latency_ms: f64) {
        self.request_latency.record(
            latency_ms,
            &[
                opentelemetry::KeyValue::new("operation", operation_name.to_string()),
                opentelemetry::KeyValue::new("status_code", status.to_string()),
            ],
        );
    }
}
