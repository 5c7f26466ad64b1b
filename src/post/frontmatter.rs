//! Front-matter rendering for new posts.

use chrono::{DateTime, TimeZone};
use std::fmt::Display;

/// Delimiter line opening and closing the front-matter block
pub const DELIMITER: &str = "---";

/// Jekyll layout every scaffolded post uses
pub const LAYOUT: &str = "post";

/// Timestamp format written to the `date:` line, e.g. `2024-03-05 14:22:11 +0100`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

/// Render a timestamp the way the `date:` line expects it
pub fn format_timestamp<Tz>(timestamp: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}

/// Render the complete post body.
///
/// Keys appear in a fixed order with values aligned after the longest key.
/// `tags:` is left blank for the author to fill in.
pub fn render<Tz>(title: &str, timestamp: &DateTime<Tz>, author: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let date = format_timestamp(timestamp);
    format!(
        "{DELIMITER}\n\
         layout: {LAYOUT}\n\
         title:  {title}\n\
         date:   {date}\n\
         author: {author}\n\
         tags:   \n\
         {DELIMITER}\n"
    )
}
