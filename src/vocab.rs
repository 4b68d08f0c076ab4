use std::collections::HashMap;

use crate::types::*;

#[derive(Clone, Debug)]
pub struct VocabValue {
    pub text: String,

    /// The absolute frequency count, i.e. the number of occurrences of this
    /// word over all input seen so far
    pub frequency: u32,

    /// The first lexicon index which matches
    pub lexindex: u8,
}

///Map integers (indices correspond to VocabId) to string values (and a frequency count)
pub type VocabDecoder = Vec<VocabValue>;

///Maps strings to integers
pub type VocabEncoder = HashMap<String, VocabId>;
