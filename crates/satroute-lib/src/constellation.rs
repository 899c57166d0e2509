use std::collections::BTreeMap;

use serde::Serialize;

use crate::geo::Point3D;

/// Identifier for a node in the constellation (`START`, `END`, or a relay key such as `SAT7`).
pub type NodeId = String;

/// Identifier of the departure ground station.
pub const START: &str = "START";

/// Identifier of the destination ground station.
pub const END: &str = "END";

/// Named positions of every node taking part in routing.
///
/// Identifiers are kept sorted so graph construction and search tie-breaking
/// are reproducible across runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Constellation {
    points: BTreeMap<NodeId, Point3D>,
}

impl Constellation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a node position, returning the previous one.
    pub fn insert(&mut self, id: impl Into<NodeId>, position: Point3D) -> Option<Point3D> {
        self.points.insert(id.into(), position)
    }

    /// Place both ground endpoints.
    pub fn set_endpoints(&mut self, start: Point3D, end: Point3D) {
        self.insert(START, start);
        self.insert(END, end);
    }

    pub fn get(&self, id: &str) -> Option<&Point3D> {
        self.points.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.points.contains_key(id)
    }

    pub fn start(&self) -> Option<&Point3D> {
        self.get(START)
    }

    pub fn end(&self) -> Option<&Point3D> {
        self.get(END)
    }

    /// Iterate over relay nodes, excluding the endpoints.
    pub fn relays(&self) -> impl Iterator<Item = (&str, &Point3D)> {
        self.iter().filter(|(id, _)| !is_endpoint(id))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Point3D)> {
        self.points.iter().map(|(id, point)| (id.as_str(), point))
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.points.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl<K: Into<NodeId>> FromIterator<(K, Point3D)> for Constellation {
    fn from_iter<I: IntoIterator<Item = (K, Point3D)>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().map(|(id, point)| (id.into(), point)).collect(),
        }
    }
}

/// Whether `id` names one of the ground endpoints.
pub fn is_endpoint(id: &str) -> bool {
    id == START || id == END
}
