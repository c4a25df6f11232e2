use chrono::{DateTime, FixedOffset, Local, NaiveDate, TimeZone};
use metrics_exporter_prometheus::PrometheusHandle;
use pams::questionnaire::ReportOptions;
use serde::Deserialize;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) report_options: ReportOptions,
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn deserialize_optional_date<'de, D>(
    deserializer: D,
) -> Result<Option<NaiveDate>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    opt.map(|value| parse_date(&value).map_err(serde::de::Error::custom))
        .transpose()
}

/// Current local time, or the same wall-clock time on `date` when one is given.
pub(crate) fn timestamp_for(date: Option<NaiveDate>) -> DateTime<FixedOffset> {
    let now = Local::now().fixed_offset();
    match date {
        Some(date) => now
            .offset()
            .from_local_datetime(&date.and_time(now.time()))
            .single()
            .unwrap_or(now),
        None => now,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_date_reports_bad_input() {
        assert_eq!(
            parse_date(" 2026-03-02 ").expect("valid"),
            NaiveDate::from_ymd_opt(2026, 3, 2).expect("date")
        );
        let err = parse_date("02.03.2026").expect_err("rejected");
        assert!(err.contains("YYYY-MM-DD"));
    }

    #[test]
    fn timestamp_keeps_requested_day() {
        let date = NaiveDate::from_ymd_opt(2025, 12, 31).expect("date");
        assert_eq!(timestamp_for(Some(date)).date_naive(), date);
        assert_eq!(timestamp_for(None).date_naive(), Local::now().date_naive());
    }
}
