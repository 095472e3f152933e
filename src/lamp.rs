//! Lamps and fixed-width lamp rows.

use std::fmt;

/// A single lamp on the clock face
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lamp {
    Off,
    Yellow,
    Red,
}

impl Lamp {
    pub fn symbol(self) -> char {
        match self {
            Lamp::Off => '0',
            Lamp::Yellow => 'Y',
            Lamp::Red => 'R',
        }
    }

    pub fn is_lit(self) -> bool {
        self != Lamp::Off
    }
}

/// An ordered, fixed-width row of lamps
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LampRow {
    lamps: Vec<Lamp>,
}

impl LampRow {
    /// `lit` copies of `on` followed by unlit lamps up to `width`.
    /// A lit count above the width lights the whole row.
    pub fn lit(lit: usize, width: usize, on: Lamp) -> Self {
        let lit = lit.min(width);
        let mut lamps = vec![on; lit];
        lamps.resize(width, Lamp::Off);
        Self { lamps }
    }

    /// Recolour every `every`-th lamp (1-based) that is lit
    pub fn mark_every(mut self, every: usize, marker: Lamp) -> Self {
        if every == 0 {
            return self;
        }
        for lamp in self.lamps.iter_mut().skip(every - 1).step_by(every) {
            if lamp.is_lit() {
                *lamp = marker;
            }
        }
        self
    }

    pub fn width(&self) -> usize {
        self.lamps.len()
    }

    pub fn lit_count(&self) -> usize {
        self.lamps.iter().filter(|lamp| lamp.is_lit()).count()
    }
}

impl fmt::Display for LampRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.lamps.iter().try_for_each(|lamp| write!(f, "{}", lamp.symbol()))
    }
}
