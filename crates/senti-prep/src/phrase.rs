use fst::Set;

use crate::error::Result;

/// How segmented dictionary phrases are located in a line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum RewriteStrategy {
    /// One scan finds every phrase match; overlapping matches are despaced as one span.
    /// The result does not depend on lexicon order.
    #[default]
    Merged,
    /// Global replace per phrase in lexicon order. Later phrases may match text
    /// produced by earlier ones.
    Sequential,
}

/// Lexicon phrases indexed in an FST for single-pass rewriting.
pub struct PhraseSet {
    set: Set<Vec<u8>>,
}

impl PhraseSet {
    pub fn new<I, S>(phrases: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut keys: Vec<String> = phrases
            .into_iter()
            .map(|p| p.as_ref().to_string())
            .filter(|p| !p.is_empty())
            .collect();

        // Sort by bytes for FST insertion (required by fst::SetBuilder)
        keys.sort();
        keys.dedup();

        let set = Set::from_iter(keys.iter())?;
        log::debug!("Indexed {} unique phrases", set.len());
        Ok(Self { set })
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    pub fn contains(&self, phrase: &str) -> bool {
        self.set.contains(phrase)
    }

    /// Byte length of the longest phrase that is a prefix of `bytes`.
    fn longest_match(&self, bytes: &[u8]) -> Option<usize> {
        let fst = self.set.as_fst();
        let mut node = fst.root();
        let mut best = None;

        for (i, &b) in bytes.iter().enumerate() {
            let Some(idx) = node.find_input(b) else {
                break;
            };
            node = fst.node(node.transition(idx).addr);
            if node.is_final() {
                best = Some(i + 1);
            }
        }
        best
    }

    /// Byte ranges covered by phrase matches, overlapping matches merged.
    ///
    /// Every char boundary is tried as a start, so a phrase that begins inside
    /// another match is still found.
    fn match_ranges(&self, text: &str) -> Vec<(usize, usize)> {
        let bytes = text.as_bytes();
        let mut ranges: Vec<(usize, usize)> = Vec::new();

        for (start, _) in text.char_indices() {
            let Some(len) = self.longest_match(&bytes[start..]) else {
                continue;
            };
            let end = start + len;
            match ranges.last_mut() {
                Some(last) if start < last.1 => last.1 = last.1.max(end),
                _ => ranges.push((start, end)),
            }
        }
        ranges
    }

    /// Removes the spaces inside every phrase occurrence in `text`.
    pub fn rewrite(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut pos = 0;

        for (start, end) in self.match_ranges(text) {
            out.push_str(&text[pos..start]);
            // A full UTF-8 key matched from a char boundary, so `end` is one too.
            out.extend(text[start..end].chars().filter(|&c| c != ' '));
            pos = end;
        }
        out.push_str(&text[pos..]);
        out
    }
}

/// Replaces every phrase globally by its despaced form, one phrase at a time in lexicon order.
pub fn rewrite_sequential<S: AsRef<str>>(text: &str, phrases: &[S]) -> String {
    let mut line = text.to_string();
    for phrase in phrases {
        let phrase = phrase.as_ref();
        if phrase.is_empty() || !line.contains(phrase) {
            continue;
        }
        line = line.replace(phrase, &phrase.replace(' ', ""));
    }
    line
}
