use std::collections::HashMap;

use crate::types::*;

///The main index, mapping each canonical anagram key to the vocabulary IDs
///that instantiate it. IDs are assigned in the order words were first seen
///and buckets are filled in ascending ID order, so each bucket preserves
///first-seen order.
pub type AnaIndex = HashMap<AnaKey, Vec<VocabId>>;
