use chrono::{DateTime, FixedOffset, Local, NaiveDate, SecondsFormat, SubsecRound, Utc};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Current time truncated to the microsecond precision postgres keeps.
pub fn now() -> DateTime<FixedOffset> {
    Local::now().fixed_offset().trunc_subsecs(6)
}

/// RFC 3339 in UTC, so values read back from postgres render the same.
pub fn datetime_to_string(datetime: DateTime<FixedOffset>) -> String {
    datetime
        .with_timezone(&Utc)
        .to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub fn date_to_string(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn parse_date(value: &str) -> anyhow::Result<NaiveDate> {
    Ok(NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)?)
}

pub fn parse_date_opt(value: Option<String>) -> anyhow::Result<Option<NaiveDate>> {
    value.map(|x| parse_date(&x)).transpose()
}
