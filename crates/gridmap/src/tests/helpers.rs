//! Test entity and scenario factories.

use crate::attribute::{AttributeValue, Filterable};
use crate::collection::Collection;
use crate::entity::{Identified, Positioned};
use crate::point::Point;

/// A positioned unit with an optional footprint radius.
#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    pub id: u64,
    pub at: Point,
    pub radius: Option<f64>,
    pub faction: &'static str,
    pub hp: i64,
    pub tags: Vec<&'static str>,
    pub active: bool,
}

impl Unit {
    pub fn new(id: u64, x: i64, y: i64) -> Self {
        Self {
            id,
            at: Point::new(x, y),
            radius: None,
            faction: "neutral",
            hp: 100,
            tags: Vec::new(),
            active: true,
        }
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = Some(radius);
        self
    }

    pub fn with_faction(mut self, faction: &'static str) -> Self {
        self.faction = faction;
        self
    }

    pub fn with_hp(mut self, hp: i64) -> Self {
        self.hp = hp;
        self
    }

    pub fn with_tags(mut self, tags: &[&'static str]) -> Self {
        self.tags = tags.to_vec();
        self
    }

    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }

    /// Accessor-style attribute: not stored, derived on lookup.
    pub fn wounded(&self) -> bool {
        self.hp < 50
    }
}

impl Positioned for Unit {
    fn coordinates(&self) -> (i64, i64) {
        self.at.coordinates()
    }

    fn radius(&self) -> Option<f64> {
        self.radius
    }
}

impl Identified for Unit {
    type Key = u64;

    fn id(&self) -> u64 {
        self.id
    }
}

impl Filterable for Unit {
    fn attribute(&self, name: &str) -> Option<AttributeValue> {
        match name {
            "id" => i64::try_from(self.id).ok().map(Into::into),
            "x" => Some(self.at.x.into()),
            "y" => Some(self.at.y.into()),
            "radius" => Some(self.radius.into()),
            "faction" => Some(self.faction.into()),
            "hp" => Some(self.hp.into()),
            "tags" => Some(self.tags.clone().into()),
            "active" => Some(self.active.into()),
            "wounded" => Some(self.wounded().into()),
            _ => None,
        }
    }
}

/// Two factions facing each other across a 100 x 100 map.
///
/// - 1: red scout at (10, 10)
/// - 2: red tank at (20, 15), radius 3, wounded
/// - 3: blue scout at (80, 85)
/// - 4: blue tank at (90, 90), radius 4
/// - 5: neutral depot at (50, 50), radius 5, inactive
pub fn skirmish() -> Collection<Unit> {
    [
        Unit::new(1, 10, 10)
            .with_faction("red")
            .with_tags(&["scout", "fast"]),
        Unit::new(2, 20, 15)
            .with_faction("red")
            .with_radius(3.0)
            .with_hp(30)
            .with_tags(&["armoured"]),
        Unit::new(3, 80, 85)
            .with_faction("blue")
            .with_tags(&["scout"]),
        Unit::new(4, 90, 90)
            .with_faction("blue")
            .with_radius(4.0)
            .with_tags(&["armoured", "command"]),
        Unit::new(5, 50, 50).with_radius(5.0).inactive(),
    ]
    .into_iter()
    .collect()
}
