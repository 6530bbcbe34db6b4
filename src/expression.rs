use crate::keys::Key;
use std::fmt;

/// The keys typed so far, split at the caret.
///
/// `left` holds the keys before the caret and `right` the keys after it, both
/// in reading order, so `left + right` is always the whole expression.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Expression {
    left: Vec<Key>,
    right: Vec<Key>,
}

impl Expression {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an expression with the caret at the end.
    pub fn from_keys(keys: impl IntoIterator<Item = Key>) -> Self {
        Self{left: keys.into_iter().collect(), right: Vec::new()}
    }

    pub fn left(&self) -> &[Key] {
        &self.left
    }

    pub fn right(&self) -> &[Key] {
        &self.right
    }

    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.left.iter().chain(self.right.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.left.is_empty() && self.right.is_empty()
    }

    pub fn insert(&mut self, key: Key) {
        self.left.push(key);
    }

    /// Removes the key just before the caret.
    pub fn remove_before_caret(&mut self) -> Option<Key> {
        self.left.pop()
    }

    pub fn move_left(&mut self) -> bool {
        match self.left.pop() {
            Some(key) => {
                self.right.insert(0, key);
                true
            },
            None => false,
        }
    }

    pub fn move_right(&mut self) -> bool {
        if self.right.is_empty() {
            return false;
        }
        let key = self.right.remove(0);
        self.left.push(key);
        true
    }

    pub fn clear(&mut self) {
        self.left.clear();
        self.right.clear();
    }

    pub fn left_text(&self) -> String {
        self.left.iter().map(Key::to_string).collect()
    }

    pub fn right_text(&self) -> String {
        self.right.iter().map(Key::to_string).collect()
    }

    /// Caret position counted in displayed characters.
    pub fn caret(&self) -> usize {
        self.left_text().chars().count()
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for key in self.keys() {
            write!(f, "{key}")?;
        }
        Ok(())
    }
}
