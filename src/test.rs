use crate::*;

///A small corpus with several anagram clusters, used by the integration
///tests and the benchmarks
pub const TEST_WORDS: &[&str] = &[
    "plates", "palest", "pastel", "petals", "staple", "eat", "tea", "ate", "tear", "plate",
    "state", "great", "one", "two", "three", "stressed", "desserts",
];

pub fn get_test_model() -> AnagramModel {
    AnagramModel::from_words(TEST_WORDS.iter().copied())
}
