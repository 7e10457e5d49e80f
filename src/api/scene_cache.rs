use std::collections::HashMap;
use std::sync::Arc;

use ordered_float::OrderedFloat;
use tracing::debug;

use crate::core::{GraphConfig, PlotElement};
use crate::expr::{CompiledExpression, Sample};
use crate::render::RenderedScene;

/// Runtime metrics exposed by the in-view scene cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SceneCacheStats {
    pub hits: u64,
    pub misses: u64,
    pub size: usize,
}

/// Runtime metrics exposed by the sampled-series cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SampleCacheStats {
    pub hits: u64,
    pub misses: u64,
    pub size: usize,
    pub compiled: usize,
}

/// Input a scene was built from.
#[derive(Debug, Clone)]
pub(super) enum SceneKey {
    Elements {
        elements: Arc<[PlotElement]>,
        title: Option<String>,
    },
    Graph(Arc<GraphConfig>),
}

impl SceneKey {
    /// Identity first, structural equality as fallback.
    fn matches(&self, other: &Self) -> bool {
        match (self, other) {
            (
                Self::Elements { elements, title },
                Self::Elements {
                    elements: other_elements,
                    title: other_title,
                },
            ) => {
                title == other_title
                    && (Arc::ptr_eq(elements, other_elements) || elements == other_elements)
            }
            (Self::Graph(graph), Self::Graph(other)) => {
                Arc::ptr_eq(graph, other) || graph == other
            }
            _ => false,
        }
    }
}

#[derive(Debug)]
pub(super) struct SceneCache {
    entries: Vec<(SceneKey, Arc<RenderedScene>)>,
    capacity: usize,
    hits: u64,
    misses: u64,
}

impl SceneCache {
    pub(super) fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity,
            hits: 0,
            misses: 0,
        }
    }

    pub(super) fn get(&mut self, key: &SceneKey) -> Option<Arc<RenderedScene>> {
        let value = self
            .entries
            .iter()
            .find(|(cached, _)| cached.matches(key))
            .map(|(_, scene)| Arc::clone(scene));
        if value.is_some() {
            self.hits = self.hits.saturating_add(1);
        }
        value
    }

    pub(super) fn insert(&mut self, key: SceneKey, scene: Arc<RenderedScene>) {
        self.misses = self.misses.saturating_add(1);
        if self.capacity == 0 {
            return;
        }
        if self.entries.len() >= self.capacity {
            self.entries.clear();
        }
        self.entries.push((key, scene));
    }

    pub(super) fn clear(&mut self) {
        self.entries.clear();
    }

    pub(super) fn stats(&self) -> SceneCacheStats {
        SceneCacheStats {
            hits: self.hits,
            misses: self.misses,
            size: self.entries.len(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct SampleKey {
    expression: String,
    x_min: OrderedFloat<f64>,
    x_max: OrderedFloat<f64>,
    sample_count: usize,
}

/// Compiled expressions and their sampled series.
///
/// Expressions that fail to compile are remembered as `None` so they are
/// not re-parsed on every pass.
#[derive(Debug)]
pub(super) struct SampleCache {
    compiled: HashMap<String, Option<Arc<CompiledExpression>>>,
    series: HashMap<SampleKey, Arc<[Sample]>>,
    capacity: usize,
    hits: u64,
    misses: u64,
}

impl SampleCache {
    pub(super) fn new(capacity: usize) -> Self {
        Self {
            compiled: HashMap::new(),
            series: HashMap::new(),
            capacity,
            hits: 0,
            misses: 0,
        }
    }

    pub(super) fn sample(
        &mut self,
        expression: &str,
        x_min: f64,
        x_max: f64,
        sample_count: usize,
    ) -> Arc<[Sample]> {
        let key = SampleKey {
            expression: expression.to_owned(),
            x_min: OrderedFloat(x_min),
            x_max: OrderedFloat(x_max),
            sample_count,
        };
        if let Some(series) = self.series.get(&key) {
            self.hits = self.hits.saturating_add(1);
            return Arc::clone(series);
        }
        self.misses = self.misses.saturating_add(1);

        let series: Arc<[Sample]> = match self.compile(expression) {
            Some(compiled) => compiled.sample(x_min, x_max, sample_count).into(),
            None => Arc::from(Vec::new()),
        };
        if self.capacity > 0 {
            if self.series.len() >= self.capacity {
                self.series.clear();
            }
            self.series.insert(key, Arc::clone(&series));
        }
        series
    }

    fn compile(&mut self, expression: &str) -> Option<Arc<CompiledExpression>> {
        if let Some(cached) = self.compiled.get(expression) {
            return cached.clone();
        }
        let compiled = match CompiledExpression::compile(expression) {
            Ok(compiled) => Some(Arc::new(compiled)),
            Err(err) => {
                debug!(expression, error = %err, "expression did not compile; no curve drawn");
                None
            }
        };
        if self.compiled.len() >= self.capacity.max(1) {
            self.compiled.clear();
        }
        self.compiled.insert(expression.to_owned(), compiled.clone());
        compiled
    }

    pub(super) fn clear(&mut self) {
        self.compiled.clear();
        self.series.clear();
    }

    pub(super) fn stats(&self) -> SampleCacheStats {
        SampleCacheStats {
            hits: self.hits,
            misses: self.misses,
            size: self.series.len(),
            compiled: self.compiled.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_cache_hits_on_repeated_key() {
        let mut cache = SampleCache::new(8);
        let first = cache.sample("x^2", -1.0, 1.0, 10);
        let second = cache.sample("x^2", -1.0, 1.0, 10);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.stats().hits, 1);
        assert_eq!(cache.stats().misses, 1);
    }

    #[test]
    fn sample_cache_remembers_compile_failures() {
        let mut cache = SampleCache::new(8);
        assert!(cache.sample("x +* ", 0.0, 1.0, 10).is_empty());
        assert!(cache.sample("x +* ", 0.0, 2.0, 10).is_empty());
        assert_eq!(cache.stats().compiled, 1);
        assert_eq!(cache.stats().size, 2);
    }

    #[test]
    fn sample_cache_clears_when_full() {
        let mut cache = SampleCache::new(2);
        for count in 2..5 {
            let _ = cache.sample("x", 0.0, 1.0, count);
        }
        assert_eq!(cache.stats().size, 1);
    }
}
