use chrono::NaiveDate;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Today's local date as `YYYY-MM-DD`.
pub fn today_string() -> String {
    today().format(DATE_FORMAT).to_string()
}
