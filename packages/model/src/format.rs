//! String formatting for amounts and dates as the screens display them.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

/// Groups digits with commas: `1234567` -> `"1,234,567"`.
pub fn format_amount(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if amount < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Parses free-form amount input. Commas and any other non-digit characters
/// are dropped; anything unparseable comes back as 0.
pub fn parse_amount(input: &str) -> i64 {
    let digits: String = input.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}

/// List row date: `"2020년 3월 14일"`.
pub fn format_list_date(at: NaiveDateTime) -> String {
    format!("{}년 {}월 {}일", at.year(), at.month(), at.day())
}

/// Writer form date row, 12-hour clock without a meridiem marker:
/// `"3월 14일 7:30"`.
pub fn format_form_date(at: NaiveDateTime) -> String {
    let hour12 = (at.hour() + 11) % 12 + 1;
    format!("{}월 {}일 {}:{:02}", at.month(), at.day(), hour12, at.minute())
}

/// Value string for an `input[type=datetime-local]`.
pub fn format_datetime_local(at: NaiveDateTime) -> String {
    at.format("%Y-%m-%dT%H:%M").to_string()
}

/// Parses the value of an `input[type=datetime-local]`. Seconds are accepted
/// but not required.
pub fn parse_datetime_local(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S"))
        .ok()
}

/// Earliest visit date the picker accepts.
pub fn min_visited_at() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2010, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, 0)
            .unwrap()
    }

    #[test]
    fn test_format_amount_groups_thousands() {
        assert_eq!(format_amount(0), "0");
        assert_eq!(format_amount(999), "999");
        assert_eq!(format_amount(1000), "1,000");
        assert_eq!(format_amount(1234567), "1,234,567");
        assert_eq!(format_amount(-45000), "-45,000");
    }

    #[test]
    fn test_parse_amount_ignores_separators() {
        assert_eq!(parse_amount("12,000"), 12000);
        assert_eq!(parse_amount("12000 원"), 12000);
        assert_eq!(parse_amount(""), 0);
        assert_eq!(parse_amount("abc"), 0);
    }

    #[test]
    fn test_parse_amount_roundtrips_formatted_value() {
        for amount in [0, 1, 999, 1000, 45000, 1234567] {
            assert_eq!(parse_amount(&format_amount(amount)), amount);
        }
    }

    #[test]
    fn test_list_date() {
        assert_eq!(format_list_date(at(2020, 3, 14, 0, 0)), "2020년 3월 14일");
        assert_eq!(format_list_date(at(2021, 12, 1, 23, 59)), "2021년 12월 1일");
    }

    #[test]
    fn test_form_date_uses_twelve_hour_clock() {
        assert_eq!(format_form_date(at(2020, 3, 14, 19, 30)), "3월 14일 7:30");
        assert_eq!(format_form_date(at(2020, 3, 14, 0, 5)), "3월 14일 12:05");
        assert_eq!(format_form_date(at(2020, 3, 14, 12, 0)), "3월 14일 12:00");
        assert_eq!(format_form_date(at(2020, 11, 2, 9, 7)), "11월 2일 9:07");
    }

    #[test]
    fn test_datetime_local_roundtrip() {
        let when = at(2022, 5, 6, 18, 45);
        assert_eq!(format_datetime_local(when), "2022-05-06T18:45");
        assert_eq!(parse_datetime_local("2022-05-06T18:45"), Some(when));
        assert_eq!(parse_datetime_local("2022-05-06T18:45:00"), Some(when));
        assert_eq!(parse_datetime_local("not a date"), None);
    }

    #[test]
    fn test_min_visited_at() {
        assert_eq!(min_visited_at(), at(2010, 1, 1, 0, 0));
    }
}
