use serde::{Deserialize, Serialize};

/// Bit position to amenity name mapping for the `oftion` field.
///
/// The default mapping is provisional until the backend pins the bit
/// layout, so it can be replaced through [`OptionTable::new`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OptionTable {
    entries: Vec<(u32, String)>,
}

const DEFAULT_AMENITIES: [&str; 8] = [
    "에어컨",
    "냉장고",
    "세탁기",
    "인터넷",
    "주차장",
    "엘리베이터",
    "관리사무소",
    "CCTV",
];

impl OptionTable {
    /// Build a table from `(bit, name)` pairs; entries are decoded in ascending bit order
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (u32, S)>,
        S: Into<String>,
    {
        let mut entries: Vec<(u32, String)> = entries
            .into_iter()
            .map(|(bit, name)| (bit, name.into()))
            .collect();
        entries.sort_by_key(|(bit, _)| *bit);
        Self { entries }
    }

    /// Names of all amenities whose bit is set
    pub fn parse(&self, bits: Option<u32>) -> Vec<String> {
        let Some(bits) = bits.filter(|b| *b != 0) else {
            return Vec::new();
        };

        self.entries
            .iter()
            .filter(|(bit, _)| bits & bit != 0)
            .map(|(_, name)| name.clone())
            .collect()
    }
}

impl Default for OptionTable {
    fn default() -> Self {
        Self::new(
            DEFAULT_AMENITIES
                .iter()
                .enumerate()
                .map(|(i, name)| (1u32 << i, *name)),
        )
    }
}

/// Decode `bits` against the default amenity table
pub fn parse_options(bits: Option<u32>) -> Vec<String> {
    OptionTable::default().parse(bits)
}
