///Each word gets assigned an ID integer, carries no further meaning
pub type VocabId = u64;

///The canonical anagram key: all characters of a word, lower-cased and
///sorted in ascending code point order. Two words reduce to the same key
///if and only if they are anagrams of each other (same multiset of
///lower-cased characters).
pub type AnaKey = String;
