//! Static rule tables: canonical component types, the keyword sets used for
//! label matching, and the compiled extraction patterns.
//!
//! All tables are read-only and initialized once; they are safely shared
//! across concurrent callers without synchronization.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Canonical component categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentType {
    Resistor,
    Capacitor,
    Diode,
    Transistor,
    IntegratedCircuit,
    Connector,
    Inductor,
}

impl ComponentType {
    /// All canonical types in classification order. The order is part of the
    /// contract: equal-confidence candidates keep it after the stable sort.
    pub const ALL: [ComponentType; 7] = [
        ComponentType::Resistor,
        ComponentType::Capacitor,
        ComponentType::Diode,
        ComponentType::Transistor,
        ComponentType::IntegratedCircuit,
        ComponentType::Connector,
        ComponentType::Inductor,
    ];

    /// Wire/report label for this type.
    pub fn label(&self) -> &'static str {
        match self {
            ComponentType::Resistor => "resistor",
            ComponentType::Capacitor => "capacitor",
            ComponentType::Diode => "diode",
            ComponentType::Transistor => "transistor",
            ComponentType::IntegratedCircuit => "integrated_circuit",
            ComponentType::Connector => "connector",
            ComponentType::Inductor => "inductor",
        }
    }

    /// Get a human-readable description of the category
    pub fn description(&self) -> &'static str {
        match self {
            ComponentType::Resistor => "Fixed or variable resistance element",
            ComponentType::Capacitor => "Charge storage / filtering element",
            ComponentType::Diode => "Unidirectional semiconductor (incl. LEDs)",
            ComponentType::Transistor => "Three-terminal switching/amplifying device",
            ComponentType::IntegratedCircuit => "Packaged integrated circuit",
            ComponentType::Connector => "Board-to-wire or board-to-board connector",
            ComponentType::Inductor => "Wound inductive element",
        }
    }
}

impl std::fmt::Display for ComponentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Keyword rules in classification order. Matching is a case-insensitive
/// substring test against the label name.
pub(crate) const TYPE_KEYWORDS: [(ComponentType, &[&str]); 7] = [
    (ComponentType::Resistor, &["resistor"]),
    (ComponentType::Capacitor, &["capacitor"]),
    (ComponentType::Diode, &["diode", "led", "light emitting"]),
    (ComponentType::Transistor, &["transistor", "mosfet"]),
    (
        ComponentType::IntegratedCircuit,
        &["integrated circuit", "microchip", "chip", "processor", "cpu"],
    ),
    (
        ComponentType::Connector,
        &["connector", "socket", "plug", "port"],
    ),
    (ComponentType::Inductor, &["inductor", "coil"]),
];

/// Keywords used to match labels for `component_type`.
pub fn keywords_for(component_type: ComponentType) -> &'static [&'static str] {
    TYPE_KEYWORDS
        .iter()
        .find(|(ty, _)| *ty == component_type)
        .map(|(_, keywords)| *keywords)
        .unwrap_or(&[])
}

/// The ten canonical resistor band colors.
pub(crate) const RESISTOR_COLORS: [&str; 10] = [
    "black", "brown", "red", "orange", "yellow", "green", "blue", "violet", "grey", "white",
];

/// Advisory attached when two or more band colors are detected.
pub(crate) const COLOR_BAND_NOTE: &str =
    "Color bands detected - decode band order to confirm the printed value";

/// Manufacturer series prefixes, matched against the first two characters of
/// a text line (uppercased). `MAX` is three characters and therefore never
/// matches; kept verbatim pending product guidance.
pub(crate) const MANUFACTURER_PREFIXES: [&str; 9] =
    ["74", "CD", "LM", "TL", "NE", "MC", "SN", "AD", "MAX"];

/// Printed resistance: `<number><optional k/K/m/M multiplier><Ω|ohm|R>`.
/// The multiplier class conflates milli and mega under `(?i)`; this matches
/// the observed upstream behavior and must not be disambiguated here.
pub(crate) static RESISTANCE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*([kKmM]?)\s*(?:Ω|ohm|R)")
        .expect("resistance pattern is valid")
});

/// Printed capacitance: `<number><µ|u|μ|p|n|m>F`.
pub(crate) static CAPACITANCE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*([µuμpnm])F").expect("capacitance pattern is valid")
});

/// Printed voltage rating: `<number>V`.
pub(crate) static VOLTAGE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*V").expect("voltage pattern is valid"));

/// Candidate IC part number: 4-12 alphanumerics spanning the whole line.
pub(crate) static PART_NUMBER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[A-Z0-9]{4,12}$").expect("part number pattern is valid"));
