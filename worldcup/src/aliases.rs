//! Country name unification.
//!
//! Some finalists played under a name that no longer exists. Aggregation runs
//! on the canonical (successor) name so their titles are counted together.

use crate::error::DatasetError;

/// Historical name -> canonical successor name.
pub const COUNTRY_ALIASES: &[(&str, &str)] = &[("West Germany", "Germany")];

/// Map a raw country name to its canonical form using [`COUNTRY_ALIASES`].
///
/// "West Germany" -> "Germany"; names without an alias pass through trimmed.
pub fn canonical_name(raw: &str) -> &str {
    canonical_name_with(COUNTRY_ALIASES, raw)
}

/// Same as [`canonical_name`] against an explicit alias table.
pub fn canonical_name_with<'a>(aliases: &[(&'static str, &'static str)], raw: &'a str) -> &'a str {
    let name = raw.trim();
    aliases
        .iter()
        .find(|(alias, _)| *alias == name)
        .map(|(_, canonical)| *canonical)
        .unwrap_or(name)
}

/// Reject alias tables whose targets are themselves aliases.
///
/// A chained table would make normalization order-dependent and break
/// idempotence (`canonical(canonical(x)) == canonical(x)`).
pub fn check_aliases(aliases: &[(&'static str, &'static str)]) -> Result<(), DatasetError> {
    for (alias, target) in aliases {
        if aliases.iter().any(|(other, _)| other == target) || alias == target {
            return Err(DatasetError::AliasNotCanonical {
                alias: (*alias).to_string(),
                target: (*target).to_string(),
            });
        }
    }
    Ok(())
}
