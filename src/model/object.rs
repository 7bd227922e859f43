use std::fmt;

use nalgebra::{Point2, Vector2};

use crate::codec;
use crate::error::{Error, Result};

/// Number of fields that follow the kind tag in a record.
pub const NUM_FIELDS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Star,
    Planet,
}

impl ObjectKind {
    /// Case-insensitive lookup of a record's leading token.
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_lowercase().as_str() {
            "star" => Some(ObjectKind::Star),
            "planet" => Some(ObjectKind::Planet),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ObjectKind::Star => "Star",
            ObjectKind::Planet => "Planet",
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A star or planet. Radius is in display units, everything else is physical.
#[derive(Debug, Clone, PartialEq)]
pub struct SpaceObject {
    pub kind: ObjectKind,
    pub radius: f64,
    /// Opaque label, interpreted only by whoever draws the object.
    pub color: String,
    pub mass: f64,
    pub position: Point2<f64>,
    pub velocity: Vector2<f64>,
}

impl SpaceObject {
    pub fn new(
        kind: ObjectKind,
        radius: f64,
        color: impl Into<String>,
        mass: f64,
        position: Point2<f64>,
        velocity: Vector2<f64>,
    ) -> Self {
        SpaceObject {
            kind,
            radius,
            color: color.into(),
            mass,
            position,
            velocity,
        }
    }

    /// Builds an object from the seven textual fields that follow the kind tag:
    /// `<radius> <color> <mass> <x> <y> <vx> <vy>`.
    ///
    /// `line` is only used for error reporting.
    pub fn from_fields(kind: ObjectKind, fields: &[&str], line: usize) -> Result<Self> {
        let (radius, color, mass, x, y, vx, vy) = match *fields {
            [radius, color, mass, x, y, vx, vy] => (radius, color, mass, x, y, vx, vy),
            _ => {
                return Err(Error::format(
                    line,
                    format!(
                        "{} record needs {} fields after the kind, found {}",
                        kind,
                        NUM_FIELDS,
                        fields.len()
                    ),
                ))
            }
        };

        let number = |name: &str, token: &str| -> Result<f64> {
            let value = codec::decode(token)
                .map_err(|e| Error::format(line, format!("bad {} {:?}: {}", name, token, e)))?;
            if value.is_finite() {
                Ok(value)
            } else {
                Err(Error::format(line, format!("{} must be finite, got {:?}", name, token)))
            }
        };

        let radius = number("radius", radius)?;
        let mass = number("mass", mass)?;
        let position = Point2::new(number("x", x)?, number("y", y)?);
        let velocity = Vector2::new(number("vx", vx)?, number("vy", vy)?);

        if !(radius > 0.0) {
            return Err(Error::format(line, format!("radius must be positive, got {}", radius)));
        }
        if !(mass > 0.0) {
            return Err(Error::format(line, format!("mass must be positive, got {}", mass)));
        }

        Ok(SpaceObject::new(kind, radius, color, mass, position, velocity))
    }

    /// Largest absolute coordinate, which is what decides how far out the view must reach.
    pub fn extent(&self) -> f64 {
        self.position.x.abs().max(self.position.y.abs())
    }
}
