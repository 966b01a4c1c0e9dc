use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, OnceLock};

/// A single grammatical tag token extracted from a dictionary line.
///
/// Equal tokens share storage through a process-wide intern pool. That is a
/// memory optimization only: equality is structural and never depends on
/// pointer identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Lemma(Arc<str>);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("a lemma must not be empty or blank")]
pub struct BlankLemma;

static POOL: OnceLock<Mutex<HashMap<Box<str>, Lemma>>> = OnceLock::new();

impl Lemma {
    /// Returns the lemma for `value`, rejecting empty or whitespace-only
    /// tokens.
    pub fn of(value: &str) -> Result<Self, BlankLemma> {
        if value.trim().is_empty() {
            return Err(BlankLemma);
        }

        let pool = POOL.get_or_init(|| Mutex::new(HashMap::new()));
        let mut pool = pool.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

        if let Some(interned) = pool.get(value) {
            return Ok(interned.clone());
        }

        let lemma = Lemma(Arc::from(value));
        pool.insert(Box::from(value), lemma.clone());
        Ok(lemma)
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Lemma {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_and_blank_tokens() {
        assert_eq!(Lemma::of(""), Err(BlankLemma));
        assert_eq!(Lemma::of("   "), Err(BlankLemma));
        assert_eq!(Lemma::of("\t"), Err(BlankLemma));
    }

    #[test]
    fn equal_tokens_compare_equal() {
        let a = Lemma::of("noun").unwrap();
        let b = Lemma::of("noun").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.value(), "noun");
    }

    #[test]
    fn interning_shares_storage_between_equal_tokens() {
        let a = Lemma::of("v_rod").unwrap();
        let b = Lemma::of("v_rod").unwrap();
        assert!(Arc::ptr_eq(&a.0, &b.0));
    }
}
