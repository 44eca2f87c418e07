use time::{Date, OffsetDateTime, format_description::BorrowedFormatItem, macros::format_description};

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Current calendar day in UTC.
pub fn today() -> Date {
    OffsetDateTime::now_utc().date()
}

/// Current unix timestamp in seconds.
pub fn now() -> i64 {
    OffsetDateTime::now_utc().unix_timestamp()
}

/// Parses a `YYYY-MM-DD` date as submitted by an HTML date input.
pub fn parse_date(value: &str) -> crate::Result<Date> {
    match Date::parse(value.trim(), DATE_FORMAT) {
        Ok(date) => Ok(date),
        Err(_) => crate::user!("Invalid date '{}', expected YYYY-MM-DD", value.trim()),
    }
}

/// Like [`parse_date`] but treats an empty field as absent.
pub fn parse_optional_date(value: Option<&str>) -> crate::Result<Option<Date>> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => parse_date(value).map(Some),
    }
}

pub fn format_date(date: Date) -> String {
    date.format(DATE_FORMAT).unwrap_or_default()
}

pub fn format_timestamp(timestamp: i64) -> String {
    let Ok(datetime) = OffsetDateTime::from_unix_timestamp(timestamp) else {
        return "".to_owned();
    };

    let Ok(format) = time::format_description::parse("[month repr:short] [day], [year]") else {
        return "".to_owned();
    };

    datetime.format(&format).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::{Month, macros::date};

    #[test]
    fn parses_html_date_inputs() {
        assert_eq!(parse_date("2030-01-05").unwrap(), date!(2030 - 01 - 05));
        assert_eq!(parse_date(" 2030-12-31 ").unwrap().month(), Month::December);
    }

    #[test]
    fn rejects_malformed_dates() {
        let err = parse_date("05/01/2030").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid date '05/01/2030', expected YYYY-MM-DD"
        );
        assert!(parse_date("2030-02-30").is_err());
    }

    #[test]
    fn empty_optional_date_is_absent() {
        assert_eq!(parse_optional_date(None).unwrap(), None);
        assert_eq!(parse_optional_date(Some("  ")).unwrap(), None);
        assert_eq!(
            parse_optional_date(Some("2031-07-14")).unwrap(),
            Some(date!(2031 - 07 - 14))
        );
    }

    #[test]
    fn formats_dates_and_timestamps() {
        assert_eq!(format_date(date!(2030 - 03 - 09)), "2030-03-09");
        assert_eq!(format_timestamp(0), "Jan 01, 1970");
    }
}
