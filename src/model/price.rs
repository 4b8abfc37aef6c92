//! MinPrice: lowest room price of a listing
//!
//! A listing without rooms, or with any room whose price could not be
//! determined, has no minimum price and is treated as infinitely expensive.
//! Filtering, sorting and display all go through `MinPrice::of_rooms` so the
//! three can never disagree.

use std::cmp::Ordering;
use std::fmt;

use super::listing::Room;

#[derive(Debug, Clone, Copy)]
pub enum MinPrice {
    Finite(f64),
    /// No rooms, or an undeterminable room price
    Unbounded,
}

impl MinPrice {
    pub fn of_rooms(rooms: &[Room]) -> Self {
        let mut min: Option<f64> = None;
        for room in rooms {
            match room.price {
                Some(p) if p.is_finite() && p >= 0.0 => {
                    min = Some(min.map_or(p, |m| m.min(p)));
                }
                _ => return MinPrice::Unbounded,
            }
        }
        min.map_or(MinPrice::Unbounded, MinPrice::Finite)
    }

    /// Finite value, or `f64::INFINITY`
    pub fn as_f64(&self) -> f64 {
        match self {
            MinPrice::Finite(p) => *p,
            MinPrice::Unbounded => f64::INFINITY,
        }
    }

    /// `min <= self <= max` with absent bounds open; Unbounded never passes a max
    pub fn within(&self, min: Option<f64>, max: Option<f64>) -> bool {
        let value = self.as_f64();
        min.map_or(true, |lo| value >= lo) && max.map_or(true, |hi| value <= hi)
    }
}

impl PartialEq for MinPrice {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for MinPrice {}

impl PartialOrd for MinPrice {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MinPrice {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (MinPrice::Finite(a), MinPrice::Finite(b)) => a.total_cmp(b),
            (MinPrice::Finite(_), MinPrice::Unbounded) => Ordering::Less,
            (MinPrice::Unbounded, MinPrice::Finite(_)) => Ordering::Greater,
            (MinPrice::Unbounded, MinPrice::Unbounded) => Ordering::Equal,
        }
    }
}

impl fmt::Display for MinPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MinPrice::Finite(p) => write!(f, "{:.0}", p),
            MinPrice::Unbounded => f.write_str("-"),
        }
    }
}
