use super::*;
use std::collections::BTreeMap;
use std::sync::Arc;

pub type Factory = Arc<dyn Fn() -> Box<dyn Trainer> + Send + Sync>;

/// Algorithm name to trainer factory.
#[derive(Clone)]
pub struct Registry {
    factories: BTreeMap<String, Factory>,
}

impl Default for Registry {
    /// Registry with the built-in algorithms.
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register(MeanTrainer::ALGO, || Box::new(MeanTrainer::default()));
        registry.register(LinearTrainer::ALGO, || Box::new(LinearTrainer::default()));
        registry
    }
}

impl Registry {
    pub fn empty() -> Self {
        Self {
            factories: BTreeMap::new(),
        }
    }
    pub fn register<F>(&mut self, algo: &str, factory: F)
    where
        F: Fn() -> Box<dyn Trainer> + Send + Sync + 'static,
    {
        self.factories.insert(algo.to_string(), Arc::new(factory));
    }
    pub fn contains(&self, algo: &str) -> bool {
        self.factories.contains_key(algo)
    }
    pub fn algos(&self) -> Vec<&str> {
        self.factories.keys().map(String::as_str).collect()
    }
    /// A fresh trainer for one segment.
    pub fn make(&self, algo: &str) -> Option<Box<dyn Trainer>> {
        self.factories.get(algo).map(|f| f())
    }
}
