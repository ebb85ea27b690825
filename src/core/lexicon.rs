//! Word lexicon
//!
//! Holds a fixed set of lowercase words twice over: as a sorted vector for
//! exact membership and ceiling queries, and as an arena trie that traversals
//! walk one tile at a time to cut off dead prefixes.

use rustc_hash::FxHashMap;

/// Handle to a node in the lexicon trie
pub type NodeId = usize;

#[derive(Debug, Default, Clone)]
struct TrieNode {
    children: FxHashMap<char, NodeId>,
    terminal: bool,
}

/// Immutable set of lowercase words
#[derive(Debug, Clone)]
pub struct Lexicon {
    words: Vec<String>,
    nodes: Vec<TrieNode>,
}

impl Lexicon {
    const ROOT: NodeId = 0;

    /// Build a lexicon from any sequence of words
    ///
    /// Each entry is trimmed and folded to lowercase; blank entries are
    /// skipped and duplicates collapse.
    ///
    /// # Examples
    /// ```
    /// use boggle_solver::core::Lexicon;
    ///
    /// let lexicon = Lexicon::from_words(["Cat", "cart", "cat"]);
    /// assert_eq!(lexicon.len(), 2);
    /// assert!(lexicon.contains("cat"));
    /// assert!(lexicon.has_word_with_prefix("car"));
    /// assert!(!lexicon.has_word_with_prefix("dog"));
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words: Vec<String> = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        words.sort_unstable();
        words.dedup();

        let mut nodes = vec![TrieNode::default()];
        for word in &words {
            Self::insert(&mut nodes, word);
        }

        tracing::info!(words = words.len(), nodes = nodes.len(), "lexicon built");
        Self { words, nodes }
    }

    fn insert(nodes: &mut Vec<TrieNode>, word: &str) {
        let mut node = Self::ROOT;
        for ch in word.chars() {
            node = if let Some(&next) = nodes[node].children.get(&ch) {
                next
            } else {
                let next = nodes.len();
                nodes.push(TrieNode::default());
                nodes[node].children.insert(ch, next);
                next
            };
        }
        nodes[node].terminal = true;
    }

    /// Exact membership on the stored lowercase form
    ///
    /// Lookups are case-sensitive; callers lowercase their input.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words
            .binary_search_by(|w| w.as_str().cmp(word))
            .is_ok()
    }

    /// Least stored word that is `>= key`
    #[must_use]
    pub fn ceiling(&self, key: &str) -> Option<&str> {
        let at = self.words.partition_point(|w| w.as_str() < key);
        self.words.get(at).map(String::as_str)
    }

    /// True iff some stored word starts with `prefix`
    ///
    /// Every word carrying `prefix` sorts at or after it, so the ceiling of
    /// `prefix` is the first candidate.
    #[must_use]
    pub fn has_word_with_prefix(&self, prefix: &str) -> bool {
        self.ceiling(prefix)
            .is_some_and(|word| word.starts_with(prefix))
    }

    /// Trie root, standing for the empty prefix
    #[inline]
    #[must_use]
    pub const fn root(&self) -> NodeId {
        Self::ROOT
    }

    /// Follow one character from a trie node
    #[inline]
    #[must_use]
    pub fn step(&self, node: NodeId, ch: char) -> Option<NodeId> {
        self.nodes[node].children.get(&ch).copied()
    }

    /// Follow every character of `s` from a trie node
    #[must_use]
    pub fn walk(&self, node: NodeId, s: &str) -> Option<NodeId> {
        s.chars().try_fold(node, |n, ch| self.step(n, ch))
    }

    /// Whether the prefix spelled by `node` is itself a word
    #[inline]
    #[must_use]
    pub fn is_word(&self, node: NodeId) -> bool {
        self.nodes[node].terminal
    }

    /// Whether any longer word continues from `node`
    #[inline]
    #[must_use]
    pub fn has_children(&self, node: NodeId) -> bool {
        !self.nodes[node].children.is_empty()
    }

    /// Number of distinct words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words in lexicographic order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Lexicon {
        Lexicon::from_words(["ab", "ad", "abc", "abd", "abdc"])
    }

    #[test]
    fn lexicon_lowercases_and_dedups() {
        let lexicon = Lexicon::from_words(["Apple", "APPLE", " pear ", "", "kiwi"]);
        assert_eq!(lexicon.len(), 3);
        assert!(lexicon.contains("apple"));
        assert!(lexicon.contains("pear"));
        assert!(!lexicon.contains("Apple"));
        let words: Vec<&str> = lexicon.iter().collect();
        assert_eq!(words, vec!["apple", "kiwi", "pear"]);
    }

    #[test]
    fn ceiling_query() {
        let lexicon = sample();
        assert_eq!(lexicon.ceiling("a"), Some("ab"));
        assert_eq!(lexicon.ceiling("abc"), Some("abc"));
        assert_eq!(lexicon.ceiling("abca"), Some("abd"));
        assert_eq!(lexicon.ceiling("ae"), None);
    }

    #[test]
    fn prefix_queries() {
        let lexicon = sample();
        assert!(lexicon.has_word_with_prefix("ab"));
        assert!(lexicon.has_word_with_prefix("abd"));
        assert!(lexicon.has_word_with_prefix("abdc"));
        assert!(!lexicon.has_word_with_prefix("z"));
        assert!(!lexicon.has_word_with_prefix("abdcx"));
        assert!(!lexicon.has_word_with_prefix("b"));
    }

    #[test]
    fn empty_lexicon() {
        let lexicon = Lexicon::from_words(Vec::<String>::new());
        assert!(lexicon.is_empty());
        assert!(!lexicon.contains(""));
        assert!(!lexicon.has_word_with_prefix(""));
        assert!(!lexicon.has_children(lexicon.root()));
    }

    #[test]
    fn trie_walk_matches_membership() {
        let lexicon = sample();
        let node = lexicon.walk(lexicon.root(), "abd").unwrap();
        assert!(lexicon.is_word(node));
        assert!(lexicon.has_children(node));

        let leaf = lexicon.walk(node, "c").unwrap();
        assert!(lexicon.is_word(leaf));
        assert!(!lexicon.has_children(leaf));

        let a = lexicon.walk(lexicon.root(), "a").unwrap();
        assert!(!lexicon.is_word(a));
        assert!(lexicon.walk(lexicon.root(), "ax").is_none());
    }

    #[test]
    fn trie_agrees_with_ceiling_prefix_query() {
        let lexicon = Lexicon::from_words(["peace", "pea", "peach", "leap", "lane", "lean"]);
        let probes = [
            "p", "pe", "pea", "peac", "peace", "peaces", "l", "la", "le", "lea", "lean", "leap",
            "lz", "x", "peb",
        ];
        for probe in probes {
            assert_eq!(
                lexicon.walk(lexicon.root(), probe).is_some(),
                lexicon.has_word_with_prefix(probe),
                "disagreement on {probe}"
            );
        }
    }

    #[test]
    fn prefix_monotonicity() {
        let lexicon = Lexicon::from_words(["peace", "pea", "peach", "leap", "lane", "lean", "ale"]);
        let mut frontier: Vec<String> = vec![String::new()];
        // Every dead prefix stays dead for all one-letter extensions, three levels deep
        for _ in 0..3 {
            let mut next = Vec::new();
            for s in &frontier {
                for c in 'a'..='z' {
                    let extended = format!("{s}{c}");
                    if !lexicon.has_word_with_prefix(s) {
                        assert!(!lexicon.has_word_with_prefix(&extended));
                    }
                    next.push(extended);
                }
            }
            frontier = next;
        }
    }

    #[test]
    fn multibyte_words() {
        let lexicon = Lexicon::from_words(["Över", "öl"]);
        assert!(lexicon.contains("över"));
        assert!(lexicon.has_word_with_prefix("ö"));
        assert!(lexicon.walk(lexicon.root(), "öve").is_some());
    }
}
