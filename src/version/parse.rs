//! Strict `major.minor` literal parsing.

use crate::error::{MicroversionError, ParseCause};
use crate::version::Version;

/// Parse a literal such as `"2.1"` (surrounding whitespace allowed).
///
/// Anything other than two base-10 components fails with
/// [`MicroversionError::MalformedVersion`]; `"latest"` is not a literal and
/// must be resolved before calling this.
pub fn parse_version_string(input: &str) -> Result<Version, MicroversionError> {
    parse_components(input).map_err(|cause| MicroversionError::malformed(input, cause))
}

fn parse_components(input: &str) -> Result<Version, ParseCause> {
    let (major, minor) = input.split_once('.').ok_or(ParseCause::ComponentCount)?;
    Ok(Version::new(parse_component(major)?, parse_component(minor)?))
}

fn parse_component(component: &str) -> Result<u32, ParseCause> {
    let digits = component.trim();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseCause::NotDecimal {
            component: component.to_string(),
        });
    }
    Ok(digits.parse::<u32>()?)
}
