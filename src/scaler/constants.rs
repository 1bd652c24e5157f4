/// Quantities below this are displayed as "pinch" rather than a number.
pub const PINCH_THRESHOLD: f64 = 0.0625;

/// Absolute tolerance when snapping a fractional part to a display fraction.
pub const FRACTION_TOLERANCE: f64 = 0.05;

/// A decimal value paired with its kitchen-fraction rendering.
#[derive(Debug, Clone, Copy)]
pub struct Fraction {
    pub decimal: f64,
    pub display: &'static str,
}

/// Display fractions in match order. The first entry within tolerance wins,
/// so the table order is part of the formatting contract.
pub const FRACTIONS: [Fraction; 6] = [
    Fraction { decimal: 0.125, display: "1/8" },
    Fraction { decimal: 0.25, display: "1/4" },
    Fraction { decimal: 0.333, display: "1/3" },
    Fraction { decimal: 0.5, display: "1/2" },
    Fraction { decimal: 0.667, display: "2/3" },
    Fraction { decimal: 0.75, display: "3/4" },
];

/// One unit-conversion rule: once a quantity reaches `threshold`, it is
/// expressed in `target` by multiplying with `factor`.
#[derive(Debug, Clone, Copy)]
pub struct UnitConversion {
    pub unit: &'static str,
    pub threshold: f64,
    pub target: &'static str,
    pub factor: f64,
}

/// Threshold table for stepping up to a coarser unit. A single step only;
/// results are never re-converted. The liter entry is an intentional
/// identity: large liter quantities stay as liters.
pub const UNIT_CONVERSIONS: [UnitConversion; 8] = [
    UnitConversion { unit: "tsp", threshold: 3.0, target: "tbsp", factor: 1.0 / 3.0 },
    UnitConversion { unit: "tbsp", threshold: 16.0, target: "cup", factor: 1.0 / 16.0 },
    UnitConversion { unit: "cup", threshold: 4.0, target: "quart", factor: 1.0 / 4.0 },
    UnitConversion { unit: "quart", threshold: 4.0, target: "gallon", factor: 1.0 / 4.0 },
    UnitConversion { unit: "ml", threshold: 1000.0, target: "liter", factor: 1.0 / 1000.0 },
    UnitConversion { unit: "liter", threshold: 10.0, target: "liter", factor: 1.0 },
    UnitConversion { unit: "oz", threshold: 16.0, target: "lb", factor: 1.0 / 16.0 },
    UnitConversion { unit: "g", threshold: 1000.0, target: "kg", factor: 1.0 / 1000.0 },
];

/// Serving sizes always offered as quick-select suggestions.
pub const COMMON_SERVINGS: [u32; 7] = [1, 2, 4, 6, 8, 10, 12];

/// Bounds the interface clamps user-entered servings to. The engine itself
/// only requires servings > 0.
pub const MIN_SERVINGS: u32 = 1;
pub const MAX_SERVINGS: u32 = 100;
