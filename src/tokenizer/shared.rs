//! Thread-safe wrapper for a trainable tokenizer.
//!
//! Tokenizing only needs `&Tokenizer`, so plain sharing is enough when
//! nobody trains. This wrapper covers the case where one thread (re)trains
//! onsets while others keep tokenizing:
//!
//! - `tokenize` acquires a shared read lock
//! - `train` acquires an exclusive write lock
//!
//! Every tokenize call sees either the old or the new onset list, never a
//! partially trained one.

use parking_lot::RwLock;
use std::sync::Arc;

use super::{TokenBag, Tokenize, Tokenizer};
use crate::error::Result;

#[derive(Clone, Default)]
pub struct SharedTokenizer {
    inner: Arc<RwLock<Tokenizer>>,
}

impl SharedTokenizer {
    #[must_use]
    pub fn new(tokenizer: Tokenizer) -> Self {
        Self {
            inner: Arc::new(RwLock::new(tokenizer)),
        }
    }

    /// Train the wrapped tokenizer.
    ///
    /// Acquires an exclusive write lock.
    pub fn train(&self, corpus: &str, threshold: f64, clean: bool) -> Result<()> {
        self.inner.write().train(corpus, threshold, clean)
    }

    /// Replace the wrapped tokenizer.
    ///
    /// Acquires an exclusive write lock.
    pub fn replace(&self, tokenizer: Tokenizer) -> Tokenizer {
        std::mem::replace(&mut *self.inner.write(), tokenizer)
    }

    /// Get a read guard for direct access.
    pub fn read(&self) -> parking_lot::RwLockReadGuard<'_, Tokenizer> {
        self.inner.read()
    }

    /// Clone of the current tokenizer state
    #[must_use]
    pub fn snapshot(&self) -> Tokenizer {
        self.inner.read().clone()
    }
}

impl Tokenize for SharedTokenizer {
    fn tokenize(&self, s: &str) -> TokenBag {
        self.inner.read().tokenize(s)
    }

    fn name(&self) -> &'static str {
        self.inner.read().name()
    }
}

impl std::fmt::Debug for SharedTokenizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedTokenizer")
            .field("inner", &*self.inner.read())
            .finish()
    }
}
