use serde::{Deserialize, Serialize};

/// Attributes recovered from a single product page.
///
/// Every field is optional: sites expose different subsets and the
/// extraction heuristics are best-effort. `length` and `ring_gauge` come
/// from a numeric "L x RG" token such as "6 x 52" and are always set
/// together; `size` holds a named vitola (Robusto, Churchill, ...) and is
/// only set when no numeric token was found.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CigarRecord {
    pub brand: Option<String>,
    pub name: Option<String>,
    pub length: Option<String>,
    pub ring_gauge: Option<String>,
    pub size: Option<String>,
    pub strength: Option<String>,
    pub origin: Option<String>,
    pub wrapper: Option<String>,
}

impl CigarRecord {
    /// True when no attribute was detected at all.
    pub fn is_empty(&self) -> bool {
        self.fields().next().is_none()
    }

    /// Populated attributes as `(key, value)` pairs, in stable order.
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("brand", &self.brand),
            ("name", &self.name),
            ("length", &self.length),
            ("ring_gauge", &self.ring_gauge),
            ("size", &self.size),
            ("strength", &self.strength),
            ("origin", &self.origin),
            ("wrapper", &self.wrapper),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.as_deref().map(|value| (key, value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_record_is_empty() {
        assert!(CigarRecord::default().is_empty());
    }

    #[test]
    fn one_populated_field_makes_it_non_empty() {
        let record = CigarRecord {
            strength: Some("Medium".to_string()),
            ..Default::default()
        };
        assert!(!record.is_empty());
    }

    #[test]
    fn fields_skips_absent_values_and_keeps_order() {
        let record = CigarRecord {
            brand: Some("Padron".to_string()),
            ring_gauge: Some("52".to_string()),
            length: Some("6".to_string()),
            ..Default::default()
        };
        let fields: Vec<_> = record.fields().collect();
        assert_eq!(
            fields,
            vec![("brand", "Padron"), ("length", "6"), ("ring_gauge", "52")]
        );
    }
}
