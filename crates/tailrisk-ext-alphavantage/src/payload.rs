//! `TIME_SERIES_*` payload parsing.

use serde_json::{Map, Value};
use tracing::debug;

use tailrisk_core::{Date, Interval, PriceObservation, PriceSeries};
use tailrisk_traits::error::TraitError;

/// API function for an interval.
pub fn function_name(interval: Interval) -> &'static str {
    match interval {
        Interval::Daily => "TIME_SERIES_DAILY",
        Interval::Weekly => "TIME_SERIES_WEEKLY",
        Interval::Monthly => "TIME_SERIES_MONTHLY",
    }
}

/// Key of the series object in the payload for an interval.
pub fn series_key(interval: Interval) -> &'static str {
    match interval {
        Interval::Daily => "Time Series (Daily)",
        Interval::Weekly => "Weekly Time Series",
        Interval::Monthly => "Monthly Time Series",
    }
}

const OPEN: &str = "1. open";
const HIGH: &str = "2. high";
const LOW: &str = "3. low";
const CLOSE: &str = "4. close";
const VOLUME: &str = "5. volume";

/// Numbers arrive as strings; anything unparseable is missing.
fn field(entry: &Map<String, Value>, name: &str) -> Option<f64> {
    let value = match entry.get(name)? {
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Number(n) => n.as_f64(),
        _ => None,
    };
    value.filter(|v| v.is_finite())
}

fn message(payload: &Map<String, Value>, key: &str) -> Option<String> {
    payload.get(key).map(|v| match v {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    })
}

/// Parse a `TIME_SERIES_*` payload into a price series.
///
/// Observations are sorted ascending by date. A payload without the series
/// key is an empty series, unless it carries an API message:
///
/// - `Error Message` becomes `TraitError::RequestRejected`
/// - `Note` or `Information` becomes `TraitError::RateLimited`
pub fn parse_time_series(payload: &Value, interval: Interval) -> Result<PriceSeries, TraitError> {
    let payload = payload
        .as_object()
        .ok_or_else(|| TraitError::ParseError("payload is not a JSON object".into()))?;

    if let Some(msg) = message(payload, "Error Message") {
        return Err(TraitError::RequestRejected(msg));
    }

    let Some(series) = payload.get(series_key(interval)) else {
        if let Some(msg) = message(payload, "Note").or_else(|| message(payload, "Information")) {
            return Err(TraitError::RateLimited(msg));
        }
        debug!(key = series_key(interval), "payload has no series");
        return Ok(PriceSeries::default());
    };

    let series = series.as_object().ok_or_else(|| {
        TraitError::ParseError(format!("\"{}\" is not an object", series_key(interval)))
    })?;

    let mut observations = Vec::with_capacity(series.len());
    for (raw_date, entry) in series {
        let date = Date::parse_leading(raw_date)
            .map_err(|e| TraitError::ParseError(e.to_string()))?;
        let Some(entry) = entry.as_object() else {
            observations.push(PriceObservation::new(date));
            continue;
        };
        observations.push(PriceObservation {
            date,
            open: field(entry, OPEN),
            high: field(entry, HIGH),
            low: field(entry, LOW),
            close: field(entry, CLOSE),
            adj_close: None,
            volume: field(entry, VOLUME),
        });
    }

    Ok(PriceSeries::new(observations)?)
}

/// Parse a `TIME_SERIES_*` payload from its JSON text.
pub fn parse_time_series_str(text: &str, interval: Interval) -> Result<PriceSeries, TraitError> {
    let payload: Value =
        serde_json::from_str(text).map_err(|e| TraitError::ParseError(e.to_string()))?;
    parse_time_series(&payload, interval)
}
