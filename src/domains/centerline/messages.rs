use super::types::{Marker, Path, Point, Side};
use crate::common::DomainResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConeMessage {
    pub position: Point,
    #[serde(alias = "color")]
    pub side: i64,
}

/// One camera observation: every cone currently visible.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ConesMessage {
    pub cones: Vec<ConeMessage>,
}

impl ConesMessage {
    pub fn from_markers(markers: &[Marker]) -> Self {
        Self {
            cones: markers
                .iter()
                .map(|m| ConeMessage {
                    position: m.position,
                    side: i64::from(m.side.as_wire()),
                })
                .collect(),
        }
    }

    pub fn into_markers(self) -> DomainResult<Vec<Marker>> {
        self.cones
            .into_iter()
            .map(|cone| {
                Ok(Marker {
                    position: cone.position,
                    side: Side::from_wire(cone.side)?,
                })
            })
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LocationMessage {
    pub location: Point,
}

/// Ordered centerline published for the path follower. An empty point list
/// means no boundary was found.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CenterlineMessage {
    pub observation_id: Uuid,
    pub computed_at: DateTime<Utc>,
    pub points: Vec<Point>,
}

impl CenterlineMessage {
    pub fn new(path: Path) -> Self {
        Self {
            observation_id: Uuid::new_v4(),
            computed_at: Utc::now(),
            points: path.into_points(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum InboundMessage {
    Cones(ConesMessage),
    Location(LocationMessage),
}
