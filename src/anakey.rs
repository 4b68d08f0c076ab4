use crate::types::*;

///Trait for objects that can be reduced to a canonical anagram key (string-like)
pub trait AnaKeyable {
    fn anakey(&self) -> AnaKey;
}

impl AnaKeyable for str {
    ///Compute the canonical anagram key for a given string: lower-case all
    ///characters, then sort them in ascending code point order. No
    ///normalization beyond the case fold is applied; non-alphabetic
    ///characters simply sort in along with the rest.
    fn anakey(&self) -> AnaKey {
        let mut chars: Vec<char> = self.chars().flat_map(char::to_lowercase).collect();
        chars.sort_unstable();
        chars.into_iter().collect()
    }
}
