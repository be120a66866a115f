//! Audio catalog reconciliation.
//!
//! Same ordinal rule as before/after pairing, but grouped by
//! `(speaker mode, language)` instead of sides. The display always reserves
//! at least [`MIN_DISPLAY_SLOTS`] slots and offers an upload affordance for
//! the next unused ordinal.

#[cfg(test)]
#[path = "audio_catalog_test.rs"]
mod audio_catalog_test;

use std::collections::BTreeMap;

use crate::net::types::{AudioAsset, Language, SpeakerMode};
use crate::util::ordinal::ordinal_from_filename;

/// Minimum number of slots the audio grid renders per group.
pub const MIN_DISPLAY_SLOTS: usize = 3;

/// One occupied position in an audio group, sorted by ordinal.
#[derive(Clone, Debug, PartialEq)]
pub struct AudioSlot {
    pub ordinal: u32,
    pub asset: AudioAsset,
}

/// Reconcile the flat audio listing into the ordered slots of one group.
///
/// Assets outside the group or without a filename ordinal are ignored.
/// Duplicate ordinals resolve like pairing: newest `last_modified` wins,
/// ties broken by the greater storage key.
pub fn audio_slots(assets: &[AudioAsset], mode: SpeakerMode, language: Language) -> Vec<AudioSlot> {
    let mut by_ordinal: BTreeMap<u32, &AudioAsset> = BTreeMap::new();

    for asset in assets {
        if asset.speaker_mode != mode || asset.language != language {
            continue;
        }
        let Some(ordinal) = ordinal_from_filename(&asset.filename) else {
            continue;
        };
        by_ordinal
            .entry(ordinal)
            .and_modify(|held| {
                if supersedes(asset, held) {
                    *held = asset;
                }
            })
            .or_insert(asset);
    }

    by_ordinal
        .into_iter()
        .map(|(ordinal, asset)| AudioSlot { ordinal, asset: asset.clone() })
        .collect()
}

/// The ordinal the upload affordance offers: one past the highest in use.
pub fn next_ordinal(slots: &[AudioSlot]) -> u32 {
    slots.last().map_or(1, |slot| slot.ordinal + 1)
}

/// Empty placeholder cells needed to pad the grid to its minimum size.
pub fn placeholder_count(occupied: usize) -> usize {
    MIN_DISPLAY_SLOTS.saturating_sub(occupied)
}

fn supersedes(challenger: &AudioAsset, incumbent: &AudioAsset) -> bool {
    (challenger.last_modified.as_str(), challenger.key.as_str())
        > (incumbent.last_modified.as_str(), incumbent.key.as_str())
}
