use time::format_description::well_known::Rfc3339;
use time::format_description::FormatItem;
use time::macros::format_description;
use time::PrimitiveDateTime;

/// Wire format of incoming timestamps: microsecond precision, no zone marker.
const SOURCE_FORMAT: &[FormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second].[subsecond digits:6]");

/// Convert a `YYYY-MM-DD HH:MM:SS.ffffff` timestamp to RFC3339 UTC.
///
/// The source carries no zone marker and is taken as already UTC, so no
/// offset is applied. The result always ends in a literal `Z`; subseconds
/// are trimmed of trailing zeros and omitted entirely when zero.
pub fn to_rfc3339_utc(original: &str) -> Result<String, time::error::Parse> {
    let parsed = PrimitiveDateTime::parse(original, SOURCE_FORMAT)?;
    let mut rfc = parsed.assume_utc().format(&Rfc3339).unwrap();
    if !rfc.ends_with('Z') {
        rfc.push('Z');
    }
    Ok(rfc)
}
