//! Route planning over the visibility graph.
//!
//! [`plan_route`] runs the whole pipeline for a parsed constellation:
//! build the line-of-sight graph, search it breadth-first from `START`,
//! reconstruct the relay chain to `END`, and annotate every leg with its
//! straight-line length and position for display.
//!
//! Routes minimise the number of hops. Leg distances are reported but never
//! used to choose between routes of equal hop count.
//!
//! # Example
//!
//! ```
//! use satroute_lib::{parse_constellation, plan_route, RouteOptions};
//!
//! let text = "SAT0,0,45,10000\nROU,0,0,0,90\n";
//! let parsed = parse_constellation(text);
//! let plan = plan_route(&parsed.constellation, &RouteOptions::default()).unwrap();
//! assert_eq!(plan.relays(), vec!["SAT0"]);
//! assert_eq!(plan.hop_count(), 2);
//! ```

use serde::Serialize;
use tracing::{info, warn};

use crate::constellation::{Constellation, NodeId, END, START};
use crate::error::{Error, Result};
use crate::geo::Point3D;
use crate::graph::build_graph_with_body;
use crate::path::{reconstruct_route, search_hops, Route};
use crate::visibility::Body;

/// Options applied during route planning.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RouteOptions {
    /// Obstruction used for the line-of-sight test.
    pub body: Body,
}

impl RouteOptions {
    pub fn with_body(body: Body) -> Self {
        Self { body }
    }
}

/// One node of a planned route in travel order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteLeg {
    pub id: NodeId,
    pub position: Point3D,
    /// Length of the link that reached this node; `None` for `START`.
    pub distance: Option<f64>,
}

/// Planned route returned by the library.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutePlan {
    /// `START`, relays, then `END`.
    pub legs: Vec<RouteLeg>,
    /// Hop distance of `END` as reported by the search.
    pub hops: usize,
}

impl RoutePlan {
    /// Number of links in the route.
    pub fn hop_count(&self) -> usize {
        self.hops
    }

    /// Relay identifiers in travel order, endpoints excluded.
    pub fn relays(&self) -> Vec<&str> {
        self.legs
            .iter()
            .map(|leg| leg.id.as_str())
            .filter(|id| *id != START && *id != END)
            .collect()
    }

    /// Sum of link lengths in kilometres.
    pub fn total_distance(&self) -> f64 {
        self.legs.iter().filter_map(|leg| leg.distance).sum()
    }

    /// Ordered vertices for drawing the route.
    pub fn polyline(&self) -> Vec<Point3D> {
        self.legs.iter().map(|leg| leg.position).collect()
    }
}

/// Compute a minimum-hop relay route from `START` to `END`.
pub fn plan_route(constellation: &Constellation, options: &RouteOptions) -> Result<RoutePlan> {
    for endpoint in [START, END] {
        if !constellation.contains(endpoint) {
            return Err(Error::missing_endpoint(endpoint));
        }
    }

    let graph = build_graph_with_body(constellation, &options.body);
    let tree = search_hops(&graph, constellation)?;
    let route = match reconstruct_route(&tree) {
        Ok(route) => route,
        Err(err) => {
            warn!(
                nodes = constellation.len(),
                reached = tree.reached_count(),
                "no valid route"
            );
            return Err(err);
        }
    };

    let plan = build_plan(constellation, &route)?;
    info!(
        hops = plan.hop_count(),
        relays = %plan.relays().join(","),
        distance_km = plan.total_distance(),
        "planned relay route"
    );
    Ok(plan)
}

fn build_plan(constellation: &Constellation, route: &Route) -> Result<RoutePlan> {
    let ids = std::iter::once(START.to_string())
        .chain(route.display_order())
        .chain(std::iter::once(END.to_string()));

    let mut legs: Vec<RouteLeg> = Vec::with_capacity(route.hop_count() + 1);
    for id in ids {
        let position = *constellation
            .get(&id)
            .ok_or_else(|| Error::missing_endpoint(&id))?;
        let distance = legs.last().map(|prev| prev.position.distance_to(&position));
        legs.push(RouteLeg {
            id,
            position,
            distance,
        });
    }

    Ok(RoutePlan {
        legs,
        hops: route.hop_count(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::lat_lon_alt_to_xyz;

    fn relay_constellation() -> Constellation {
        let mut constellation: Constellation =
            [("N1", lat_lon_alt_to_xyz(0.0, 45.0, 10_000.0))].into_iter().collect();
        constellation.set_endpoints(
            lat_lon_alt_to_xyz(0.0, 0.0, 0.0),
            lat_lon_alt_to_xyz(0.0, 90.0, 0.0),
        );
        constellation
    }

    #[test]
    fn plan_lists_endpoints_around_relays() {
        let plan = plan_route(&relay_constellation(), &RouteOptions::default()).unwrap();

        let ids: Vec<_> = plan.legs.iter().map(|leg| leg.id.as_str()).collect();
        assert_eq!(ids, vec![START, "N1", END]);
        assert_eq!(plan.relays(), vec!["N1"]);
        assert_eq!(plan.hop_count(), 2);
        assert!(plan.legs[0].distance.is_none());
        assert_eq!(plan.polyline().len(), 3);
    }

    #[test]
    fn total_distance_sums_legs() {
        let plan = plan_route(&relay_constellation(), &RouteOptions::default()).unwrap();
        let expected: f64 = plan.legs[1].distance.unwrap() + plan.legs[2].distance.unwrap();
        assert!((plan.total_distance() - expected).abs() < 1e-9);
        assert!(plan.total_distance() > 0.0);
    }

    #[test]
    fn missing_end_is_reported() {
        let constellation: Constellation = relay_constellation()
            .iter()
            .filter(|(id, _)| *id != END)
            .map(|(id, point)| (id.to_string(), *point))
            .collect();

        let err = plan_route(&constellation, &RouteOptions::default()).unwrap_err();
        assert!(matches!(err, Error::MissingEndpoint { ref name } if name == END));
    }
}
