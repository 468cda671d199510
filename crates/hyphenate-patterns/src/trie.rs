// Pattern trie: every compiled pattern keyed by its letters, so all patterns
// occurring at one position of a word are found in a single walk.

use hashbrown::HashMap;

use crate::pattern::Pattern;

#[derive(Debug, Clone, Default)]
struct TrieNode {
    children: HashMap<char, usize>,
    /// Levels of the pattern ending at this node, if any.
    levels: Option<Box<[u8]>>,
}

/// Trie of compiled patterns.
#[derive(Debug, Clone)]
pub struct PatternTrie {
    nodes: Vec<TrieNode>,
    len: usize,
}

impl Default for PatternTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternTrie {
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
            len: 0,
        }
    }

    /// Number of distinct patterns stored.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Insert a pattern. A pattern whose letters are already present is
    /// merged by taking the higher level at each gap.
    pub fn insert(&mut self, pattern: &Pattern) {
        let mut node = 0;
        for &c in &pattern.chars {
            node = match self.nodes[node].children.get(&c) {
                Some(&next) => next,
                None => {
                    let next = self.nodes.len();
                    self.nodes.push(TrieNode::default());
                    self.nodes[node].children.insert(c, next);
                    next
                }
            };
        }

        let slot = &mut self.nodes[node].levels;
        if let Some(existing) = slot.as_mut() {
            for (old, &new) in existing.iter_mut().zip(&pattern.levels) {
                *old = (*old).max(new);
            }
        } else {
            *slot = Some(pattern.levels.clone().into_boxed_slice());
            self.len += 1;
        }
    }

    /// Apply every pattern that matches `word` starting at `start`, raising
    /// `levels[start + i]` to each pattern's `i`th level.
    ///
    /// `levels` must be one longer than `word`.
    pub fn apply_at(&self, word: &[char], start: usize, levels: &mut [u8]) {
        let mut node = 0;
        for &c in &word[start..] {
            let Some(&next) = self.nodes[node].children.get(&c) else {
                return;
            };
            node = next;
            if let Some(found) = &self.nodes[node].levels {
                for (slot, &lv) in levels[start..].iter_mut().zip(found.iter()) {
                    *slot = (*slot).max(lv);
                }
            }
        }
    }
}
