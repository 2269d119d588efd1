use serde::{Deserialize, Deserializer, Serialize};

/// OHLCV bar in the provider's wire shape.
///
/// `time` is epoch milliseconds. A missing or null `volume` decodes to 0,
/// matching what the upstream API emits for option series with no traded
/// volume.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub time: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    #[serde(default, deserialize_with = "volume_or_zero")]
    pub volume: f64,
}

fn volume_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<f64>::deserialize(deserializer)?;
    Ok(value.unwrap_or(0.0))
}

/// Sort bars ascending by time, the order the chart host requires.
pub fn sort_ascending(bars: &mut [Bar]) {
    bars.sort_by_key(|bar| bar.time);
}

/// True when the slice is non-decreasing in time.
pub fn is_ascending(bars: &[Bar]) -> bool {
    bars.windows(2).all(|pair| pair[0].time <= pair[1].time)
}
