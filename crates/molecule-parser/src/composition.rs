use num_bigint::BigUint;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;

/// Per-element atom counts of a parsed formula.
///
/// Keys are element symbols exactly as written (`"Mg"`, `"O"`), ordered
/// lexicographically. Counts are unbounded.
///
/// Serializes as a plain object. Counts that fit in a `u64` are numbers;
/// larger counts are decimal strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Composition {
    atoms: BTreeMap<String, BigUint>,
}

impl Composition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count for `symbol`, `None` if it never appeared.
    pub fn get(&self, symbol: &str) -> Option<&BigUint> {
        self.atoms.get(symbol)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BigUint)> {
        self.atoms.iter().map(|(symbol, count)| (symbol.as_str(), count))
    }

    /// Number of distinct elements.
    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// Sum of all counts.
    pub fn total_atoms(&self) -> BigUint {
        self.atoms.values().sum()
    }

    pub fn into_inner(self) -> BTreeMap<String, BigUint> {
        self.atoms
    }
}

impl Serialize for Composition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.atoms.len()))?;
        for (symbol, count) in &self.atoms {
            match u64::try_from(count) {
                Ok(small) => map.serialize_entry(symbol, &small)?,
                Err(_) => map.serialize_entry(symbol, &count.to_str_radix(10))?,
            }
        }
        map.end()
    }
}

impl From<BTreeMap<String, BigUint>> for Composition {
    fn from(atoms: BTreeMap<String, BigUint>) -> Self {
        Self { atoms }
    }
}

impl<S: Into<String>> FromIterator<(S, u64)> for Composition {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        Self {
            atoms: iter
                .into_iter()
                .map(|(symbol, count)| (symbol.into(), BigUint::from(count)))
                .collect(),
        }
    }
}

impl IntoIterator for Composition {
    type Item = (String, BigUint);
    type IntoIter = std::collections::btree_map::IntoIter<String, BigUint>;

    fn into_iter(self) -> Self::IntoIter {
        self.atoms.into_iter()
    }
}
