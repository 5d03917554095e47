//! Country -> ISO 3166-1 alpha-3 codes used to place countries on the map.

/// Canonical country name -> 3-letter region code.
///
/// Czechoslovakia keeps its historical code; the map has no geometry for it,
/// which is fine since it never won a final.
pub const REGION_CODES: &[(&str, &str)] = &[
    ("Uruguay", "URY"),
    ("Italy", "ITA"),
    ("Germany", "DEU"),
    ("Brazil", "BRA"),
    ("England", "GBR"),
    ("Argentina", "ARG"),
    ("France", "FRA"),
    ("Spain", "ESP"),
    ("Netherlands", "NLD"),
    ("Hungary", "HUN"),
    ("Czechoslovakia", "CSK"),
    ("Sweden", "SWE"),
    ("Croatia", "HRV"),
];

/// Region code for a canonical country name, if it has one.
pub fn region_code(country: &str) -> Option<&'static str> {
    REGION_CODES
        .iter()
        .find(|(name, _)| *name == country)
        .map(|(_, code)| *code)
}
