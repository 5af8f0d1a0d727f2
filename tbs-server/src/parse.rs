//! Text parsing for `schedule_performance` inputs.

use chrono::NaiveDateTime;

use tbs_core::Prices;

use crate::config::PricingConfig;
use crate::error::ServerError;

/// Start times are local `yyyy-MM-ddTHH:mm`.
pub const START_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Currency marker every price string starts with.
pub const PRICE_MARKER: char = '$';

/// Strict parse: out-of-range components and trailing input are rejected.
pub fn parse_start_time(input: &str) -> Result<NaiveDateTime, ServerError> {
    NaiveDateTime::parse_from_str(input, START_TIME_FORMAT).map_err(|_| {
        ServerError::InvalidStartTime {
            input: input.to_owned(),
        }
    })
}

/// Render a start time back in [`START_TIME_FORMAT`].
pub fn format_start_time(start: &NaiveDateTime) -> String {
    start.format(START_TIME_FORMAT).to_string()
}

/// Parse the premium and regular price strings.
///
/// Without `require_marker`, a premium price lacking `$` yields
/// [`Prices::unset`] and no error; the regular string is then ignored.
pub fn parse_prices(
    premium: &str,
    regular: &str,
    policy: &PricingConfig,
) -> Result<Prices, ServerError> {
    if !premium.starts_with(PRICE_MARKER) && !policy.require_marker {
        tracing::warn!(premium, regular, "premium price has no '$' marker; prices left unset");
        return Ok(Prices::unset());
    }
    Ok(Prices::new(parse_price(premium)?, parse_price(regular)?))
}

fn parse_price(input: &str) -> Result<u32, ServerError> {
    let invalid = || ServerError::InvalidPrice {
        input: input.to_owned(),
    };
    let digits = input.strip_prefix(PRICE_MARKER).ok_or_else(invalid)?;
    let value: i64 = digits.parse().map_err(|_| invalid())?;
    u32::try_from(value).map_err(|_| invalid())
}
