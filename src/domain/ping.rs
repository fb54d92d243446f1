// Ping time series domain models
use serde::{Deserialize, Serialize};

/// Round-trip statistics for one sampling interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleValue {
    pub min_value: f64,
    pub avg_value: f64,
    pub max_value: f64,
}

/// `timestamp` accepts any JSON number, integer or float.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSample {
    pub timestamp: f64,
    pub value: SampleValue,
}

#[cfg(test)]
impl RawSample {
    pub fn new(timestamp: f64, min_value: f64, avg_value: f64, max_value: f64) -> Self {
        Self {
            timestamp,
            value: SampleValue {
                min_value,
                avg_value,
                max_value,
            },
        }
    }
}

/// Samples in the order the backend returned them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryResponse {
    pub values: Vec<RawSample>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub x: String,
    pub y: f64,
}

impl ChartPoint {
    pub fn new(x: String, y: f64) -> Self {
        Self { x, y }
    }
}

/// Three series index-aligned to the samples they were built from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedSeries {
    pub ping_min: Vec<ChartPoint>,
    pub ping_mean: Vec<ChartPoint>,
    pub ping_max: Vec<ChartPoint>,
}

impl FormattedSeries {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            ping_min: Vec::with_capacity(capacity),
            ping_mean: Vec::with_capacity(capacity),
            ping_max: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.ping_mean.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ping_mean.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_backend_sample() {
        let json = r#"{"values":[{"timestamp":1000,"value":{"minValue":1.5,"avgValue":2,"maxValue":3}}]}"#;
        let response: QueryResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.values, vec![RawSample::new(1000.0, 1.5, 2.0, 3.0)]);
    }

    #[test]
    fn test_decode_float_timestamp() {
        let json = r#"{"values":[{"timestamp":1709294400000.0,"value":{"minValue":1,"avgValue":2,"maxValue":3}},{"timestamp":1709294401000,"value":{"minValue":4,"avgValue":5,"maxValue":6}}]}"#;
        let response: QueryResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.values[0].timestamp, 1_709_294_400_000.0);
        assert_eq!(response.values[1].timestamp, 1_709_294_401_000.0);
    }

    #[test]
    fn test_series_wire_names() {
        let series = FormattedSeries::default();
        let json = serde_json::to_value(&series).unwrap();
        assert!(json.get("pingMin").is_some());
        assert!(json.get("pingMean").is_some());
        assert!(json.get("pingMax").is_some());
    }
}
