//! Parser for the line-oriented constellation format.
//!
//! ```text
//! #SEED: 0.6133
//! SAT0,-22.1,141.3,582.7
//! SAT1,12.9,-51.0,411.2
//! ROU,-7.3,-172.8,68.2,119.5
//! ```
//!
//! `SAT` lines register a relay keyed by their first field. The `ROU` line
//! places the `START` and `END` ground stations at altitude zero. Comment
//! lines start with `#`. Anything else is logged and skipped.
//!
//! Numeric fields are read by their leading number, so `550km` is `550.0`
//! and trailing text is ignored. A field with no leading number makes the
//! whole record malformed.

use serde::Serialize;
use tracing::{debug, warn};

use crate::constellation::Constellation;
use crate::geo::Geodetic;

const SATELLITE_PREFIX: &str = "SAT";
const ROUTE_PREFIX: &str = "ROU";
const SEED_PREFIX: &str = "#SEED:";

/// One recognised line of input.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Record {
    Satellite { id: String, position: Geodetic },
    Route { start: Geodetic, end: Geodetic },
    Seed { value: f64 },
}

/// Why a line did not produce a [`Record`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Skip {
    Blank,
    Comment,
    UnknownPrefix(String),
    Malformed { prefix: String, reason: String },
}

/// Constellation together with bookkeeping from parsing.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ParsedConstellation {
    pub constellation: Constellation,
    /// Seed advertised by the generator, when present.
    pub seed: Option<f64>,
    pub satellites: usize,
    pub routes: usize,
    /// Non-blank, non-comment lines that were ignored.
    pub skipped: usize,
}

/// Parse a single line.
pub fn parse_line(line: &str) -> Result<Record, Skip> {
    let line = line.trim();
    if line.is_empty() {
        return Err(Skip::Blank);
    }
    if let Some(rest) = line.strip_prefix(SEED_PREFIX) {
        return rest
            .trim()
            .parse::<f64>()
            .map(|value| Record::Seed { value })
            .map_err(|_| Skip::Comment);
    }
    if line.starts_with('#') {
        return Err(Skip::Comment);
    }

    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    let prefix = fields[0];

    if prefix.starts_with(SATELLITE_PREFIX) {
        let [lat, lon, alt] = parse_numbers::<3>(prefix, &fields[1..])?;
        Ok(Record::Satellite {
            id: prefix.to_string(),
            position: Geodetic::new(lat, lon, alt),
        })
    } else if prefix.starts_with(ROUTE_PREFIX) {
        let [lat1, lon1, lat2, lon2] = parse_numbers::<4>(prefix, &fields[1..])?;
        Ok(Record::Route {
            start: Geodetic::ground(lat1, lon1),
            end: Geodetic::ground(lat2, lon2),
        })
    } else {
        Err(Skip::UnknownPrefix(prefix.to_string()))
    }
}

fn parse_numbers<const N: usize>(prefix: &str, fields: &[&str]) -> Result<[f64; N], Skip> {
    let malformed = |reason: String| Skip::Malformed {
        prefix: prefix.to_string(),
        reason,
    };

    if fields.len() < N {
        return Err(malformed(format!(
            "expected {N} numeric fields, found {}",
            fields.len()
        )));
    }

    let mut values = [0.0; N];
    for (slot, field) in values.iter_mut().zip(fields) {
        *slot = leading_number(field)
            .ok_or_else(|| malformed(format!("'{field}' is not a number")))?;
    }
    Ok(values)
}

/// Longest prefix of `field` that reads as a decimal number.
fn leading_number(field: &str) -> Option<f64> {
    let text = field.trim_start();
    let bytes = text.as_bytes();
    let digits_from = |mut index: usize| {
        while bytes.get(index).is_some_and(u8::is_ascii_digit) {
            index += 1;
        }
        index
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    if text[end..].starts_with("Infinity") {
        return Some(if bytes[0] == b'-' {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let integer_end = digits_from(end);
    let mut mantissa_digits = integer_end - end;
    end = integer_end;
    if bytes.get(end) == Some(&b'.') {
        let fraction_end = digits_from(end + 1);
        mantissa_digits += fraction_end - end - 1;
        end = fraction_end;
    }
    if mantissa_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent = end + 1;
        if matches!(bytes.get(exponent), Some(b'+' | b'-')) {
            exponent += 1;
        }
        let exponent_end = digits_from(exponent);
        if exponent_end > exponent {
            end = exponent_end;
        }
    }

    text[..end].parse().ok()
}

/// Parse a whole document into a constellation.
///
/// Unknown and malformed lines are logged and skipped; parsing never fails.
/// A later `ROU` line replaces earlier endpoints.
pub fn parse_constellation(text: &str) -> ParsedConstellation {
    let mut parsed = ParsedConstellation::default();

    for (index, line) in text.lines().enumerate() {
        let line_number = index + 1;
        match parse_line(line) {
            Ok(Record::Satellite { id, position }) => {
                if parsed
                    .constellation
                    .insert(id.as_str(), position.to_cartesian())
                    .is_some()
                {
                    warn!(line = line_number, id = %id, "duplicate satellite replaces earlier entry");
                } else {
                    parsed.satellites += 1;
                }
            }
            Ok(Record::Route { start, end }) => {
                if parsed.routes > 0 {
                    warn!(line = line_number, "additional ROU record replaces endpoints");
                }
                parsed
                    .constellation
                    .set_endpoints(start.to_cartesian(), end.to_cartesian());
                parsed.routes += 1;
            }
            Ok(Record::Seed { value }) => {
                debug!(seed = value, "constellation seed");
                parsed.seed = Some(value);
            }
            Err(Skip::Blank) | Err(Skip::Comment) => {}
            Err(Skip::UnknownPrefix(prefix)) => {
                warn!(line = line_number, prefix = %prefix, "ignoring unrecognised record");
                parsed.skipped += 1;
            }
            Err(Skip::Malformed { prefix, reason }) => {
                warn!(line = line_number, prefix = %prefix, %reason, "skipping malformed record");
                parsed.skipped += 1;
            }
        }
    }

    debug!(
        satellites = parsed.satellites,
        routes = parsed.routes,
        skipped = parsed.skipped,
        "parsed constellation records"
    );
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constellation::{END, START};
    use crate::geo::EARTH_RADIUS_KM;

    #[test]
    fn satellite_line_keeps_its_key() {
        let record = parse_line("SAT7,10.5,-20.25,550.0").expect("valid");
        assert_eq!(
            record,
            Record::Satellite {
                id: "SAT7".to_string(),
                position: Geodetic::new(10.5, -20.25, 550.0),
            }
        );
    }

    #[test]
    fn route_line_places_ground_endpoints() {
        let record = parse_line("ROU,1.0,2.0,3.0,4.0\r").expect("valid");
        assert_eq!(
            record,
            Record::Route {
                start: Geodetic::ground(1.0, 2.0),
                end: Geodetic::ground(3.0, 4.0),
            }
        );
    }

    #[test]
    fn seed_comment_is_captured() {
        assert_eq!(
            parse_line("#SEED: 0.25"),
            Ok(Record::Seed { value: 0.25 })
        );
        assert_eq!(parse_line("# generated"), Err(Skip::Comment));
    }

    #[test]
    fn unknown_prefix_is_reported() {
        assert_eq!(
            parse_line("FOO,1,2"),
            Err(Skip::UnknownPrefix("FOO".to_string()))
        );
    }

    #[test]
    fn malformed_numbers_are_reported() {
        assert!(matches!(
            parse_line("SAT1,abc,2,3"),
            Err(Skip::Malformed { .. })
        ));
        assert!(matches!(
            parse_line("ROU,1,2,3"),
            Err(Skip::Malformed { .. })
        ));
    }

    #[test]
    fn fields_are_read_by_their_leading_number() {
        assert_eq!(leading_number("550km"), Some(550.0));
        assert_eq!(leading_number(" -.5deg"), Some(-0.5));
        assert_eq!(leading_number("1e3x"), Some(1000.0));
        assert_eq!(leading_number("2e"), Some(2.0));
        assert_eq!(leading_number("7."), Some(7.0));
        assert_eq!(leading_number("-Infinity"), Some(f64::NEG_INFINITY));
        assert_eq!(leading_number("km550"), None);
        assert_eq!(leading_number("."), None);
        assert_eq!(leading_number("nan"), None);
        assert_eq!(leading_number(""), None);

        assert_eq!(
            parse_line("SAT3,12.5N,-20.25,550km"),
            Ok(Record::Satellite {
                id: "SAT3".to_string(),
                position: Geodetic::new(12.5, -20.25, 550.0),
            })
        );
    }

    #[test]
    fn document_parse_collects_nodes_and_skips_noise() {
        let text = "#SEED: 0.5\nSAT0,0,0,500\nSAT1,0,10,500\nJUNK,1\n\nSAT2,x,0,0\nROU,0,0,0,20\n";
        let parsed = parse_constellation(text);

        assert_eq!(parsed.seed, Some(0.5));
        assert_eq!(parsed.satellites, 2);
        assert_eq!(parsed.routes, 1);
        assert_eq!(parsed.skipped, 2);
        assert_eq!(parsed.constellation.len(), 4);

        let start = parsed.constellation.get(START).expect("start");
        assert_eq!(start.x, EARTH_RADIUS_KM);
        assert!(parsed.constellation.get(END).is_some());
    }
}
