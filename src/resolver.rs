// Subdivision name -> country code lookup.
use crate::subdivisions::SUBDIVISIONS;
use crate::types::UNKNOWN_COUNTRY;
use std::collections::hash_map::Entry;
use std::collections::{BTreeSet, HashMap};
use tracing::debug;

/// Immutable table mapping subdivision names to alpha-3 country codes.
///
/// Matching is exact and case-sensitive; callers trim whitespace first.
/// A name listed under several countries resolves to the alphabetically
/// smallest of their codes, so the answer never depends on table order.
#[derive(Debug, Clone)]
pub struct SubdivisionTable {
    by_name: HashMap<&'static str, &'static str>,
    names: Vec<&'static str>,
    ambiguous: BTreeSet<&'static str>,
}

impl SubdivisionTable {
    pub fn new(pairs: &[(&'static str, &'static str)]) -> Self {
        let mut by_name = HashMap::with_capacity(pairs.len());
        let mut names = Vec::with_capacity(pairs.len());
        let mut ambiguous = BTreeSet::new();

        for &(name, code) in pairs {
            match by_name.entry(name) {
                Entry::Vacant(slot) => {
                    slot.insert(code);
                    names.push(name);
                }
                Entry::Occupied(mut slot) => {
                    if *slot.get() != code {
                        ambiguous.insert(name);
                    }
                    if code < *slot.get() {
                        slot.insert(code);
                    }
                }
            }
        }

        SubdivisionTable {
            by_name,
            names,
            ambiguous,
        }
    }

    /// Table built from the compiled-in vocabulary.
    pub fn builtin() -> Self {
        let table = Self::new(SUBDIVISIONS);
        debug!(
            names = table.len(),
            ambiguous = ?table.ambiguous,
            "built subdivision table"
        );
        table
    }

    /// Country code for `name`, or `"XXX"` when the name is unknown.
    pub fn resolve(&self, name: &str) -> &'static str {
        self.by_name.get(name).copied().unwrap_or(UNKNOWN_COUNTRY)
    }

    /// Distinct names in first-seen table order.
    pub fn names(&self) -> &[&'static str] {
        &self.names
    }

    /// Names that appear under more than one country.
    pub fn ambiguous(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.ambiguous.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_names_resolve() {
        let t = SubdivisionTable::builtin();
        assert_eq!(t.resolve("California"), "USA");
        assert_eq!(t.resolve("Nevada"), "USA");
        assert_eq!(t.resolve("Ontario"), "CAN");
        assert_eq!(t.resolve("Bayern"), "DEU");
        assert_eq!(t.resolve("Zürich"), "CHE");
    }

    #[test]
    fn unknown_names_fall_back_to_sentinel() {
        let t = SubdivisionTable::builtin();
        assert_eq!(t.resolve("Atlantis"), "XXX");
    }

    #[test]
    fn matching_is_case_sensitive_and_exact() {
        let t = SubdivisionTable::builtin();
        assert_eq!(t.resolve("california"), "XXX");
        assert_eq!(t.resolve("California "), "XXX");
        assert_eq!(t.resolve("Califor"), "XXX");
    }

    #[test]
    fn ambiguous_names_pick_smallest_code() {
        let t = SubdivisionTable::builtin();
        assert_eq!(t.resolve("Punjab"), "IND");
        assert_eq!(t.resolve("Limburg"), "BEL");
        assert_eq!(t.resolve("La Rioja"), "ARG");
        assert_eq!(t.resolve("Santa Cruz"), "ARG");
        // Also used by Uruguay, whose code sorts first.
        assert_eq!(t.resolve("Florida"), "URY");
        let ambiguous: Vec<_> = t.ambiguous().collect();
        for name in ["La Rioja", "Limburg", "Punjab", "Santa Cruz", "Florida"] {
            assert!(ambiguous.contains(&name), "{name}");
        }
        assert!(!ambiguous.contains(&"California"));
    }

    #[test]
    fn every_country_with_subdivisions_is_covered() {
        let t = SubdivisionTable::builtin();
        assert_eq!(t.resolve("Moskva"), "RUS");
        assert_eq!(t.resolve("Lagos"), "NGA");
        assert_eq!(t.resolve("İstanbul"), "TUR");
        assert_eq!(t.resolve("Seoul-teukbyeolsi"), "KOR");
        assert_eq!(t.resolve("Jawa Barat"), "IDN");
        assert_eq!(t.resolve("Nairobi City"), "KEN");
        assert_eq!(t.resolve("Canillo"), "AND");

        let countries: BTreeSet<&str> = SUBDIVISIONS.iter().map(|&(_, code)| code).collect();
        assert!(countries.len() >= 200, "{}", countries.len());
    }

    #[test]
    fn ambiguity_rule_ignores_table_order() {
        let forward = SubdivisionTable::new(&[("Punjab", "PAK"), ("Punjab", "IND")]);
        let backward = SubdivisionTable::new(&[("Punjab", "IND"), ("Punjab", "PAK")]);
        assert_eq!(forward.resolve("Punjab"), "IND");
        assert_eq!(backward.resolve("Punjab"), "IND");
        assert_eq!(forward.len(), 1);
    }

    #[test]
    fn duplicate_entries_for_same_country_are_not_ambiguous() {
        let t = SubdivisionTable::new(&[("Texas", "USA"), ("Texas", "USA")]);
        assert_eq!(t.ambiguous().count(), 0);
        assert_eq!(t.names(), &["Texas"]);
    }

    #[test]
    fn builtin_vocabulary_is_well_formed() {
        for &(name, code) in SUBDIVISIONS {
            assert!(!name.contains(','), "{name}");
            assert_eq!(name, name.trim(), "{name}");
            assert!(code.len() == 3 && code.bytes().all(|b| b.is_ascii_uppercase()), "{code}");
        }
        assert!(SubdivisionTable::builtin().len() > 4000);
    }
}
