use std::fmt::Write;

use serde::Serialize;

use crate::constellation::{is_endpoint, NodeId};
use crate::error::{Error, Result};
use crate::geo::Geodetic;
use crate::routing::RoutePlan;

/// Presentation style for turning a [`RouteSummary`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteRenderMode {
    /// Relay identifiers in travel order joined by commas.
    Basic,
    PlainText,
    RichText,
}

/// Endpoint within a planned route.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteEndpoint {
    pub id: NodeId,
    pub latitude: f64,
    pub longitude: f64,
}

/// Step taken during traversal of a planned route.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteStep {
    pub index: usize,
    pub id: NodeId,
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: f64,
    /// Length in kilometres of the link into this step.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
}

impl RouteStep {
    fn is_relay(&self) -> bool {
        !is_endpoint(&self.id)
    }
}

/// Structured representation of a planned route that higher-level consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummary {
    pub hops: usize,
    pub relays: Vec<NodeId>,
    pub total_distance_km: f64,
    pub start: RouteEndpoint,
    pub goal: RouteEndpoint,
    pub steps: Vec<RouteStep>,
}

impl RouteSummary {
    /// Convert a [`RoutePlan`] into a summary with geodetic coordinates.
    pub fn from_plan(plan: &RoutePlan) -> Result<Self> {
        let steps = plan
            .legs
            .iter()
            .enumerate()
            .map(|(index, leg)| {
                let Geodetic {
                    latitude,
                    longitude,
                    altitude,
                } = leg.position.to_geodetic();
                RouteStep {
                    index,
                    id: leg.id.clone(),
                    latitude,
                    longitude,
                    altitude,
                    distance: leg.distance,
                }
            })
            .collect::<Vec<_>>();

        let (Some(first), Some(last)) = (steps.first(), steps.last()) else {
            return Err(Error::EmptyRoutePlan);
        };
        let start = endpoint(first);
        let goal = endpoint(last);

        Ok(Self {
            hops: plan.hop_count(),
            relays: plan.relays().into_iter().map(str::to_string).collect(),
            total_distance_km: plan.total_distance(),
            start,
            goal,
            steps,
        })
    }

    /// Render the summary using the requested textual mode.
    pub fn render(&self, mode: RouteRenderMode) -> String {
        match mode {
            RouteRenderMode::Basic => self.render_basic(),
            RouteRenderMode::PlainText => self.render_plain(),
            RouteRenderMode::RichText => self.render_rich(),
        }
    }

    fn render_basic(&self) -> String {
        let mut buffer = self.relays.join(",");
        buffer.push('\n');
        buffer
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Route: {} -> {} ({} hops, {:.1} km)",
            self.start.id, self.goal.id, self.hops, self.total_distance_km
        );
        for step in &self.steps {
            let _ = write!(
                buffer,
                "{:>3}: {} ({:.2}, {:.2}",
                step.index, step.id, step.latitude, step.longitude
            );
            if step.is_relay() {
                let _ = write!(buffer, ", {:.0} km", step.altitude);
            }
            let _ = write!(buffer, ")");
            if let Some(distance) = step.distance {
                let _ = write!(buffer, " +{distance:.1} km");
            }
            buffer.push('\n');
        }
        buffer
    }

    fn render_rich(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "**Route** _{} → {}_ ({} hops, {:.1} km)",
            self.start.id, self.goal.id, self.hops, self.total_distance_km
        );
        for step in &self.steps {
            let _ = writeln!(
                buffer,
                "* {:>2}. **{}** (`{:.2}, {:.2}`)",
                step.index, step.id, step.latitude, step.longitude
            );
        }
        buffer
    }
}

fn endpoint(step: &RouteStep) -> RouteEndpoint {
    RouteEndpoint {
        id: step.id.clone(),
        latitude: step.latitude,
        longitude: step.longitude,
    }
}
