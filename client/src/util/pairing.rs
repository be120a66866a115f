//! Before/after pairing reconciliation.
//!
//! DESIGN
//! ======
//! The backend stores a flat list of assets; pairs exist only as a derived
//! view. Reconciliation partitions by side, keys each side by the filename
//! ordinal, and emits one pair per ordinal seen on either side, ascending.
//! An ordinal with only one side present is surfaced as incomplete, never
//! dropped. Duplicate ordinals within a side resolve deterministically: the
//! newest `last_modified` wins, ties broken by the greater storage key.

#[cfg(test)]
#[path = "pairing_test.rs"]
mod pairing_test;

use std::collections::BTreeMap;

use crate::net::types::{Asset, AssetKind};
use crate::util::ordinal::ordinal_from_filename;

/// A reconciled before/after pair for one ordinal.
#[derive(Clone, Debug, PartialEq)]
pub struct AssetPair {
    pub ordinal: u32,
    pub before: Option<Asset>,
    pub after: Option<Asset>,
}

impl AssetPair {
    /// A pair is complete iff both sides are present.
    pub fn is_complete(&self) -> bool {
        self.before.is_some() && self.after.is_some()
    }
}

/// Reconcile a flat asset list into ordered pairs.
///
/// Input order is irrelevant; output is sorted ascending by ordinal and
/// reconciling the same input twice yields identical output.
pub fn reconcile_pairs(assets: &[Asset]) -> Vec<AssetPair> {
    let mut before: BTreeMap<u32, &Asset> = BTreeMap::new();
    let mut after: BTreeMap<u32, &Asset> = BTreeMap::new();

    for asset in assets {
        let Some(ordinal) = ordinal_from_filename(&asset.filename) else {
            continue;
        };
        let side = match asset.kind {
            AssetKind::Before => &mut before,
            AssetKind::After => &mut after,
        };
        side.entry(ordinal)
            .and_modify(|held| {
                if supersedes(asset, held) {
                    *held = asset;
                }
            })
            .or_insert(asset);
    }

    let mut ordinals: Vec<u32> = before.keys().chain(after.keys()).copied().collect();
    ordinals.sort_unstable();
    ordinals.dedup();

    ordinals
        .into_iter()
        .map(|ordinal| AssetPair {
            ordinal,
            before: before.get(&ordinal).map(|asset| (*asset).clone()),
            after: after.get(&ordinal).map(|asset| (*asset).clone()),
        })
        .collect()
}

/// The ordinal offered for a brand-new pair: one past the highest in use.
pub fn next_pair_ordinal(pairs: &[AssetPair]) -> u32 {
    pairs.last().map_or(1, |pair| pair.ordinal + 1)
}

fn supersedes(challenger: &Asset, incumbent: &Asset) -> bool {
    (challenger.last_modified.as_str(), challenger.key.as_str())
        > (incumbent.last_modified.as_str(), incumbent.key.as_str())
}
