use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};

pub mod anakey;
pub mod index;
pub mod test;
pub mod types;
pub mod vocab;

pub use crate::anakey::*;
pub use crate::index::*;
pub use crate::types::*;
pub use crate::vocab::*;

pub struct AnagramModel {
    pub decoder: VocabDecoder,
    pub encoder: VocabEncoder,

    ///The main index, mapping anagram keys to instances
    pub index: AnaIndex,

    /// Stores the names of the loaded lexicons, they will be referenced by index from individual
    /// items for provenance reasons
    pub lexicons: Vec<String>,

    pub debug: bool,
}

impl AnagramModel {
    pub fn new(debug: bool) -> AnagramModel {
        AnagramModel {
            decoder: Vec::new(),
            encoder: HashMap::new(),
            index: HashMap::new(),
            lexicons: Vec::new(),
            debug,
        }
    }

    ///Build a model directly from an in-memory word sequence. The input
    ///order determines the order within each anagram bucket. Any string is
    ///acceptable, including empty strings and duplicates.
    pub fn from_words<I>(words: I) -> AnagramModel
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut model = AnagramModel::new(false);
        for word in words {
            model.add_word(word.as_ref());
        }
        model.build();
        model
    }

    ///Read a lexicon from a file, one word per line. Lines may carry
    ///further tab-separated columns (as in frequency lists), only the first
    ///column is taken. Empty lines are skipped.
    pub fn read_lexicon(&mut self, filename: &str) -> Result<(), std::io::Error> {
        if self.debug {
            eprintln!("Reading lexicon from {}...", filename);
        }
        let f = File::open(filename)?;
        let f_buffer = BufReader::new(f);
        for line in f_buffer.lines() {
            let line = line?;
            if !line.is_empty() {
                let text = line.split('\t').next().expect("split yields at least one field");
                self.add_word(text);
            }
        }
        if self.debug {
            eprintln!(" - Read lexicon, vocabulary size is now {}", self.decoder.len());
        }
        self.lexicons.push(filename.to_string());
        Ok(())
    }

    ///Add a single word to the vocabulary. Duplicates collapse into one
    ///entry with an incremented frequency count, so each distinct word
    ///keeps the ID of its first occurrence.
    pub fn add_word(&mut self, text: &str) {
        if self.debug {
            eprintln!(" -- Adding to vocabulary: {}", text);
        }
        if let Some(vocab_id) = self.encoder.get(text) {
            let item = self
                .decoder
                .get_mut(*vocab_id as usize)
                .expect("vocabulary entry for known id");
            item.frequency += 1;
        } else {
            self.encoder.insert(text.to_string(), self.decoder.len() as VocabId);
            self.decoder.push(VocabValue {
                text: text.to_string(),
                frequency: 1,
                lexindex: self.lexicons.len() as u8,
            });
        }
    }

    ///Build the anagram index over all words added so far. Must be called
    ///once, after the last word has been added; the index is never mutated
    ///afterwards and queries assume it is complete.
    pub fn build(&mut self) {
        if self.debug {
            eprintln!("Computing anagram keys for all items in the vocabulary...");
        }
        // Compute keys for all strings in the vocabulary
        // and add them to the index
        let mut tmp_keys: Vec<(AnaKey, VocabId)> = Vec::with_capacity(self.decoder.len());
        for (id, value) in self.decoder.iter().enumerate() {
            let anakey = value.text.anakey();
            if self.debug {
                eprintln!("   -- Anakey={} VocabId={} Text={}", &anakey, id, value.text);
            }
            tmp_keys.push((anakey, id as VocabId));
        }

        for (anakey, id) in tmp_keys {
            if let Some(bucket) = self.index.get_mut(&anakey) {
                bucket.push(id);
            } else {
                self.index.insert(anakey, vec![id]);
            }
        }
        if self.debug {
            eprintln!(
                " - Found {} anagram keys over {} words",
                self.index.len(),
                self.decoder.len()
            );
        }
    }

    ///Get all anagram instances for a given word, in first-seen order. The
    ///queried word need not be part of the vocabulary itself; a key with no
    ///instances yields an empty result, not an error.
    pub fn get_anagram_instances(&self, text: &str) -> Vec<&VocabValue> {
        let anakey = text.anakey();
        let mut instances: Vec<&VocabValue> = Vec::new();
        if let Some(bucket) = self.index.get(&anakey) {
            for vocab_id in bucket.iter() {
                instances.push(self.decoder.get(*vocab_id as usize).expect("vocab from decoder"));
            }
        }
        instances
    }

    ///Get all words from the vocabulary that are anagrams of the given
    ///word, in first-seen order. Case-insensitive: the returned words carry
    ///their original casing.
    pub fn get_anagrams(&self, text: &str) -> Vec<&str> {
        self.get_anagram_instances(text)
            .into_iter()
            .map(|value| value.text.as_str())
            .collect()
    }

    ///Get an exact item in the vocabulary (if it exists)
    pub fn get(&self, text: &str) -> Option<&VocabValue> {
        for instance in self.get_anagram_instances(text) {
            if instance.text == text {
                return Some(instance);
            }
        }
        None
    }

    ///Tests if the vocabulary has a specific entry, by text
    pub fn has(&self, text: &str) -> bool {
        self.get(text).is_some()
    }

    ///Resolves a vocabulary ID
    pub fn get_vocab(&self, vocab_id: VocabId) -> Option<&VocabValue> {
        self.decoder.get(vocab_id as usize)
    }

    ///Tests whether any word in the vocabulary instantiates the given anagram key
    pub fn contains_key(&self, key: &AnaKey) -> bool {
        self.index.contains_key(key)
    }
}
