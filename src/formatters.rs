use crate::models::{AlertFeature, AlertResponse, ForecastPeriod, ForecastResponse};

const UNKNOWN: &str = "Unknown";

fn or_unknown(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or(UNKNOWN)
}

/// Formats each alert feature into its own text block.
///
/// An empty feature list yields a single "no active alerts" block rather than
/// an empty sequence, so callers always get something to show.
pub fn format_alerts(state: &str, alerts: AlertResponse) -> Vec<String> {
    if alerts.features.is_empty() {
        return vec![format!("No active alerts for {}.", state)];
    }

    alerts.features.iter().map(format_alert).collect()
}

fn format_alert(feature: &AlertFeature) -> String {
    let props = &feature.properties;
    format!(
        "Event: {}\nArea: {}\nSeverity: {}\nDescription: {}\nInstruction: {}",
        or_unknown(&props.event),
        or_unknown(&props.area_desc),
        or_unknown(&props.severity),
        or_unknown(&props.description),
        or_unknown(&props.instruction),
    )
}

/// Formats NWS forecast periods, one block per period, in upstream order
pub fn format_forecast(forecast: ForecastResponse) -> Vec<String> {
    forecast
        .properties
        .periods
        .iter()
        .map(format_period)
        .collect()
}

fn format_period(period: &ForecastPeriod) -> String {
    format!(
        "{}:\nTemperature: {} {}\nWind: {} {}\nConditions: {}\nForecast: {}",
        period.name,
        period.temperature,
        period.temperature_unit,
        or_unknown(&period.wind_speed),
        or_unknown(&period.wind_direction),
        or_unknown(&period.short_forecast),
        or_unknown(&period.detailed_forecast),
    )
}
