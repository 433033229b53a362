use crate::ast::{preprocess, tokenize, ASTNode, Evaluator, Parser};
use crate::config::Config;
use crate::error::EvaluationError;
use log::debug;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::Arc;

/// Caller-owned memo of parsed expressions.
///
/// Keys are preprocessed expressions, so `"2 × 3"` and `"2*3"` share an
/// entry. Only successfully parsed trees are stored; evaluation always runs
/// against the tree, so a cached expression yields exactly what
/// [`crate::evaluate`] would.
pub struct ExpressionCache {
    entries: LruCache<String, Arc<ASTNode>>,
    evaluator: Evaluator,
}

impl ExpressionCache {
    /// Creates a cache holding at most `capacity` trees (minimum 1).
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: LruCache::new(capacity),
            evaluator: Evaluator::new(),
        }
    }

    pub fn with_config(config: &Config) -> Self {
        Self::new(config.parse_cache_capacity)
    }

    /// Returns the parsed tree for `expression`, parsing it on a miss.
    pub fn get_or_parse(&mut self, expression: &str) -> Result<Arc<ASTNode>, EvaluationError> {
        let key = preprocess(expression);
        if let Some(ast) = self.entries.get(&key) {
            debug!("Parse cache hit for {:?}", key);
            return Ok(Arc::clone(ast));
        }

        let tokens = tokenize(&key)?;
        let ast = Arc::new(Parser::new(&tokens).parse()?);
        self.entries.put(key, Arc::clone(&ast));
        Ok(ast)
    }

    pub fn evaluate(&mut self, expression: &str) -> Result<f64, EvaluationError> {
        let ast = self.get_or_parse(expression)?;
        self.evaluator.evaluate(&ast)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.entries.cap().get()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
