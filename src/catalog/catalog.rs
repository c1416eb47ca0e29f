use super::*;
use crate::*;

/// A named game in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    slug: &'static str,
    title: String,
    matrix: PayoffMatrix,
}

impl Entry {
    pub fn new(slug: &'static str, title: impl Into<String>, matrix: PayoffMatrix) -> Self {
        Self {
            slug,
            title: title.into(),
            matrix,
        }
    }
    /// Short lookup key, e.g. `morra2`.
    pub fn slug(&self) -> &'static str {
        self.slug
    }
    pub fn title(&self) -> &str {
        &self.title
    }
    pub fn matrix(&self) -> &PayoffMatrix {
        &self.matrix
    }
    pub fn report(&self) -> Report {
        Report::from(self)
    }
}

/// Ordered collection of named games.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog(Vec<Entry>);

impl Catalog {
    /// The demonstration lineup, in presentation order.
    pub fn demo() -> anyhow::Result<Self> {
        Ok(Self(vec![
            Entry::new("coin", "1. Coin simple (H/T) game", coin()),
            Entry::new("signs", "2. s,t in {-1,0,1}", signs()),
            Entry::new("rps", "3. Rock-Paper-Scissors", rps()),
            Entry::new("morra2", "4. Morra Two-Finger (4x4)", morra(2)?),
            Entry::new("morra3", "5. Morra Three-Finger (9x9)", morra(3)?),
            Entry::new(
                "integers",
                format!("6. Integers 1..k (k={})", INTEGERS_K),
                integers(INTEGERS_K),
            ),
            Entry::new(
                "blotto",
                format!(
                    "7. Colonel Blotto (attacker={}, defender={})",
                    BLOTTO_TROOPS, BLOTTO_TROOPS
                ),
                blotto(BLOTTO_TROOPS, BLOTTO_TROOPS)?,
            ),
            Entry::new(
                "seller",
                format!(
                    "8. Seller problem (k={},a={},b={},alpha={},beta={})",
                    SELLER_STOCK, SELLER_PRICE, SELLER_PENALTY, SELLER_DEMAND_MIN, SELLER_DEMAND_MAX
                ),
                seller(
                    SELLER_STOCK,
                    SELLER_PRICE,
                    SELLER_PENALTY,
                    SELLER_DEMAND_MIN,
                    SELLER_DEMAND_MAX,
                )?,
            ),
            Entry::new("dilemma", "custom 1. Prisoners Dilemma", prisoners_dilemma()),
            Entry::new("chicken", "custom 2. Chicken(Hawk-Dove)", chicken()),
            Entry::new(
                "twin",
                "Test Matrix with 2 saddle points",
                PayoffMatrix::from([[1, 2], [1, 2]]),
            ),
        ]))
    }

    pub fn get(&self, slug: &str) -> Option<&Entry> {
        self.0.iter().find(|entry| entry.slug == slug)
    }
    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.0.iter()
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn slugs(&self) -> Vec<&'static str> {
        self.0.iter().map(Entry::slug).collect()
    }
}

impl From<Vec<Entry>> for Catalog {
    fn from(entries: Vec<Entry>) -> Self {
        Self(entries)
    }
}

impl IntoIterator for Catalog {
    type Item = Entry;
    type IntoIter = std::vec::IntoIter<Entry>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
