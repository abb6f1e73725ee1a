use crate::config::Format;
use crate::Config;
use std::io::Error;
use std::path::Path;
use time::macros::format_description;
use time::OffsetDateTime;

/// Source position of a logging call.
pub(crate) type Location<'a> = Option<(&'a str, u32)>;

/// Everything written in front of the `LEVEL|id: text` part of a line.
#[inline(always)]
pub(crate) fn write_header(config: &Config, location: Location<'_>) -> Result<String, Error> {
    let mut header = String::new();

    if config.format & Format::MsgPrefix == 0 {
        header.push_str(&config.prefix);
    }

    if config.format & (Format::Date | Format::Time | Format::Microseconds) != 0 {
        let now = if config.format & Format::Utc != 0 {
            OffsetDateTime::now_utc()
        } else {
            OffsetDateTime::now_utc().to_offset(config.time_offset)
        };
        if config.format & Format::Date != 0 {
            header.push_str(&write_date(now)?);
            header.push(' ');
        }
        if config.format & (Format::Time | Format::Microseconds) != 0 {
            header.push_str(&write_time(now, config.format & Format::Microseconds != 0)?);
            header.push(' ');
        }
    }

    if config.format & (Format::ShortFile | Format::LongFile) != 0 {
        header.push_str(&write_location(location, config.format & Format::ShortFile != 0));
        header.push_str(": ");
    }

    if config.format & Format::MsgPrefix != 0 {
        header.push_str(&config.prefix);
    }

    Ok(header)
}

#[inline(always)]
pub(crate) fn write_date(now: OffsetDateTime) -> Result<String, Error> {
    now.format(format_description!("[year]/[month]/[day]"))
        .map_err(format_error)
}

#[inline(always)]
pub(crate) fn write_time(now: OffsetDateTime, microseconds: bool) -> Result<String, Error> {
    let formatted = if microseconds {
        now.format(format_description!("[hour]:[minute]:[second].[subsecond digits:6]"))
    } else {
        now.format(format_description!("[hour]:[minute]:[second]"))
    };
    formatted.map_err(format_error)
}

#[inline(always)]
pub(crate) fn write_location(location: Location<'_>, short: bool) -> String {
    match location {
        Some((file, line)) if short => {
            let name = Path::new(file)
                .file_name()
                .and_then(|name| name.to_str())
                .unwrap_or(file);
            format!("{}:{}", name, line)
        }
        Some((file, line)) => format!("{}:{}", file, line),
        None => String::from("???:0"),
    }
}

fn format_error(err: time::error::Format) -> Error {
    match err {
        time::error::Format::StdIo(err) => err,
        err => Error::other(err),
    }
}
