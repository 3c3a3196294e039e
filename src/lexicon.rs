use crate::error::Error;
use crate::tiles::{Letter, ALPHABET_LEN};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fmt;
use std::fs::read_to_string;
use std::num::NonZeroU32;

/// Handle to a node in the [`Lexicon`] trie: an index into the node arena.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct NodeId(u32);

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
struct Node {
    /// Child node index per letter. The root is node 0 and is never a
    /// child, so indices fit in `NonZeroU32`.
    children: [Option<NonZeroU32>; ALPHABET_LEN],
    /// True if the path from the root to this node spells a word.
    terminal: bool,
}

impl Node {
    fn new() -> Node {
        Node {
            children: [None; ALPHABET_LEN],
            terminal: false,
        }
    }
}

/// The dictionary, stored as a trie.
///
/// Built once from a word list or dictionary file, read-only afterwards.
/// Besides whole-word lookup it exposes prefix-node lookup and child
/// iteration, which the move generator uses to resume trie walks from a
/// known prefix instead of re-walking from the root.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Lexicon {
    nodes: Vec<Node>,
    word_count: usize,
    /// Path of the dictionary file used, empty if built from a word list.
    wordfile: String,
}

impl fmt::Display for Lexicon {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "<Lexicon: {} words, {} nodes from '{}'>",
            self.word_count,
            self.nodes.len(),
            self.wordfile
        )
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Lexicon::new()
    }
}

impl Lexicon {
    /// Create an empty lexicon.
    #[must_use]
    pub fn new() -> Lexicon {
        Lexicon {
            nodes: vec![Node::new()],
            word_count: 0,
            wordfile: String::new(),
        }
    }

    /// Build a lexicon from a list of words.
    /// ## Errors
    /// If a word contains a character that is not a letter.
    pub fn from_words<S: AsRef<str>>(words: &[S]) -> Result<Lexicon, Error> {
        let mut lexicon = Lexicon::new();
        for word in words {
            lexicon.insert(word.as_ref())?;
        }
        Ok(lexicon)
    }

    /// Read the lexicon from a dictionary file. The file must have one
    /// entry per line: a word, optionally followed by whitespace-separated
    /// metadata (such as a definition), which is ignored here.
    /// ## Errors
    /// If the file can not be read, or a word can not be encoded.
    pub fn from_file(wordfile: &str) -> Result<Lexicon, Error> {
        let contents = read_to_string(wordfile).map_err(|source| Error::ReadError {
            path: String::from(wordfile),
            source,
        })?;
        let mut lexicon = Lexicon::from_lines(&contents)?;
        lexicon.wordfile = String::from(wordfile);
        Ok(lexicon)
    }

    /// Build a lexicon from dictionary file contents: the first token of
    /// each line is the word, the rest of the line is ignored.
    /// ## Errors
    /// If a word can not be encoded.
    pub fn from_lines(contents: &str) -> Result<Lexicon, Error> {
        let mut lexicon = Lexicon::new();
        for line in contents.lines() {
            if let Some(word) = line.split_whitespace().next() {
                lexicon.insert(word)?;
            }
        }
        Ok(lexicon)
    }

    #[cfg(feature = "bincode")]
    /// Deserialize the lexicon from a bincoded file.
    /// ## Errors
    /// - If the file can not be read.
    /// - If the contents can not be deserialized.
    pub fn deserialize_from(wordfile: &str) -> Result<Lexicon, Error> {
        use std::fs::File;
        use std::io::BufReader;
        let file = File::open(wordfile).map_err(|source| Error::ReadError {
            path: String::from(wordfile),
            source,
        })?;
        let reader = BufReader::new(file);
        let mut lexicon: Lexicon = bincode::deserialize_from(reader)
            .map_err(|_| Error::LexiconDeserializeError(String::from(wordfile)))?;
        lexicon.wordfile = String::from(wordfile);
        Ok(lexicon)
    }

    /// Insert `word` into the lexicon. Idempotent; inserting the empty
    /// string is a no-op.
    /// ## Errors
    /// If `word` contains a character that is not a letter.
    pub fn insert(&mut self, word: &str) -> Result<(), Error> {
        let letters = encode(word)?;
        if letters.is_empty() {
            return Ok(());
        }
        let mut node = 0usize;
        for letter in letters {
            let next = match self.nodes[node].children[letter.index()] {
                Some(child) => child.get() as usize,
                None => {
                    self.nodes.push(Node::new());
                    let child = self.nodes.len() - 1;
                    // the arena holds the root already, so child > 0
                    self.nodes[node].children[letter.index()] =
                        Some(NonZeroU32::new(child as u32).unwrap());
                    child
                }
            };
            node = next;
        }
        if !self.nodes[node].terminal {
            self.nodes[node].terminal = true;
            self.word_count += 1;
        }
        Ok(())
    }

    /// The root node.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// The child of `node` along the edge for `letter`, if any.
    pub fn child(&self, node: NodeId, letter: Letter) -> Option<NodeId> {
        self.nodes[node.0 as usize].children[letter.index()].map(|child| NodeId(child.get()))
    }

    /// Iterate over the children of `node` as (letter, child) pairs.
    pub fn children(&self, node: NodeId) -> impl Iterator<Item = (Letter, NodeId)> + '_ {
        self.nodes[node.0 as usize]
            .children
            .iter()
            .enumerate()
            .filter_map(|(i, child)| {
                child.map(|c| (Letter::from_index(i as u8), NodeId(c.get())))
            })
    }

    /// True if the path from the root to `node` spells a word.
    pub fn is_terminal(&self, node: NodeId) -> bool {
        self.nodes[node.0 as usize].terminal
    }

    fn walk<I: IntoIterator<Item = Letter>>(&self, letters: I) -> Option<NodeId> {
        let mut node = self.root();
        for letter in letters {
            node = self.child(node, letter)?;
        }
        Some(node)
    }

    /// The node reached by following `prefix` from the root, or None if no
    /// word starts with `prefix`. Malformed input is simply absent.
    pub fn lookup_prefix(&self, prefix: &str) -> Option<NodeId> {
        let letters = encode(prefix).ok()?;
        self.walk(letters)
    }

    /// The node reached by following `letters` from the root.
    pub fn lookup_letters(&self, letters: &[Letter]) -> Option<NodeId> {
        self.walk(letters.iter().copied())
    }

    /// True iff `word` is in the lexicon. Malformed input (empty string,
    /// non-letter characters) is simply not a word.
    pub fn is_word(&self, word: &str) -> bool {
        match encode(word) {
            Ok(letters) if !letters.is_empty() => self.is_word_letters(&letters),
            _ => false,
        }
    }

    /// True iff the letter sequence is in the lexicon.
    pub fn is_word_letters(&self, letters: &[Letter]) -> bool {
        !letters.is_empty()
            && self
                .lookup_letters(letters)
                .map_or(false, |node| self.is_terminal(node))
    }

    /// The number of words in the lexicon.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// The number of nodes in the trie.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

fn encode(word: &str) -> Result<Vec<Letter>, Error> {
    word.chars().map(Letter::try_from).collect()
}
