//! Common test utilities and fixture helpers.
//!
//! Fixtures live under `docs/fixtures` at the workspace root and use the same
//! text format the public generator emits.

use std::fs;
use std::path::PathBuf;

use satroute_lib::{lat_lon_alt_to_xyz, parse_constellation, Constellation, ParsedConstellation};

/// Path to fixtures directory used by tests.
#[allow(dead_code)]
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// Twenty low-orbit satellites with a seven-hop route between the endpoints.
#[allow(dead_code)]
pub fn fixture_path() -> PathBuf {
    fixtures_dir().join("constellation.txt")
}

/// Twenty satellites where `END` sits in a component `START` cannot reach.
#[allow(dead_code)]
pub fn unreachable_fixture_path() -> PathBuf {
    fixtures_dir().join("unreachable.txt")
}

#[allow(dead_code)]
pub fn load_fixture(path: PathBuf) -> ParsedConstellation {
    let text = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("read fixture {}: {err}", path.display()));
    parse_constellation(&text)
}

/// Ground stations 90 degrees apart on the equator with one high relay midway.
///
/// The endpoints cannot see each other; both see `N1`.
#[allow(dead_code)]
pub fn single_relay_constellation() -> Constellation {
    let mut constellation: Constellation = [("N1", lat_lon_alt_to_xyz(0.0, 45.0, 10_000.0))]
        .into_iter()
        .collect();
    constellation.set_endpoints(
        lat_lon_alt_to_xyz(0.0, 0.0, 0.0),
        lat_lon_alt_to_xyz(0.0, 90.0, 0.0),
    );
    constellation
}
