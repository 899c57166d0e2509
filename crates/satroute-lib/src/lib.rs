//! Satroute library entry points.
//!
//! This crate converts satellite and ground-station coordinates into an
//! Earth-centred frame, builds the line-of-sight graph between every pair of
//! nodes, and finds the relay chain with the fewest hops between the `START`
//! and `END` ground stations. Higher-level consumers (the CLI) should only
//! depend on the functions exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod constellation;
pub mod error;
pub mod geo;
pub mod graph;
pub mod output;
pub mod path;
pub mod records;
pub mod routing;
pub mod source;
pub mod visibility;

pub use constellation::{is_endpoint, Constellation, NodeId, END, START};
pub use error::{Error, Result};
pub use geo::{lat_lon_alt_to_xyz, Geodetic, Point3D, EARTH_RADIUS_KM};
pub use graph::{build_graph, build_graph_with_body, Edge, Graph};
pub use output::{RouteEndpoint, RouteRenderMode, RouteStep, RouteSummary};
pub use path::{
    find_shortest_hop_path, reconstruct_route, search_hops, NodeState, Route, SearchNode,
    SearchTree,
};
pub use records::{parse_constellation, parse_line, ParsedConstellation, Record};
pub use routing::{plan_route, RouteLeg, RouteOptions, RoutePlan};
pub use source::{
    fetch_constellation, fetch_text, DataSource, FetchOptions, DATA_SOURCE_ENV,
    DEFAULT_SOURCE_URL,
};
pub use visibility::{distance_between, distance_from_origin_to_segment, is_visible, Body};
