//! The stock Dehradun metro map.

use super::{MetroNetwork, MetroNetworkBuilder};

const STATIONS: [&str; 19] = [
    "Adwar",
    "DILARAM CHOWK",
    "BB",
    "CENTERIO MALL",
    "KRISHAN NAGAR CHOWK",
    "RAJ BHAWAN",
    "ISBT",
    "BALLUPUR CHOWK",
    "ONGC",
    "VASANT VIHAR",
    "PANDITWADI",
    "IMA",
    "MB",
    "PREM NAGER",
    "PHULSANI",
    "NANDI KI CHOWKI",
    "PONDHA",
    "KANDOLI",
    "UPES",
];

/// Weights are tenths of a km.
const CONNECTIONS: [(&str, &str, i64); 22] = [
    ("Adwar", "BB", 10),
    ("Adwar", "DILARAM CHOWK", 19),
    ("BB", "KRISHAN NAGAR CHOWK", 13),
    ("KRISHAN NAGAR CHOWK", "BALLUPUR CHOWK", 19),
    ("BALLUPUR CHOWK", "ISBT", 75),
    ("BALLUPUR CHOWK", "VASANT VIHAR", 25),
    ("VASANT VIHAR", "PANDITWADI", 22),
    ("PANDITWADI", "IMA", 18),
    ("IMA", "MB", 10),
    ("MB", "PREM NAGER", 5),
    ("IMA", "PREM NAGER", 23),
    ("PREM NAGER", "NANDI KI CHOWKI", 24),
    ("NANDI KI CHOWKI", "PHULSANI", 50),
    ("DILARAM CHOWK", "CENTERIO MALL", 28),
    ("CENTERIO MALL", "RAJ BHAWAN", 13),
    ("RAJ BHAWAN", "ONGC", 42),
    ("ONGC", "BALLUPUR CHOWK", 25),
    ("ONGC", "PHULSANI", 40),
    ("PHULSANI", "PONDHA", 20),
    ("NANDI KI CHOWKI", "PONDHA", 36),
    ("PONDHA", "KANDOLI", 30),
    ("KANDOLI", "UPES", 30),
];

/// Create the stock Dehradun metro network.
///
/// 19 stations and 22 connections, with weights in tenths of a km
/// (a weight of 19 is 1.9 km).
pub fn dehradun_network() -> MetroNetwork {
    CONNECTIONS
        .iter()
        .fold(
            MetroNetworkBuilder::new().stations(STATIONS),
            |builder, &(a, b, w)| builder.connection(a, b, w),
        )
        .build()
        // Every connection names a station from STATIONS, with a positive weight.
        .expect("stock connections reference stock stations")
}
