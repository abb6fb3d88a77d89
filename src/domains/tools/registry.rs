//! Tool Registry - central catalogue of all tools.
//!
//! This module provides:
//! - Registration of tools by name (last write wins)
//! - Exact-name lookup for `tools/call` dispatch
//! - Tool metadata for listing, optionally filtered by tag
//!
//! The registry is shared by every request. Lookups and inserts go through a
//! concurrent map, so callers only ever need an `Arc<ToolRegistry>`.

use dashmap::DashMap;
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{info, warn};

use super::handlers::{ToolDescriptor, ToolHandler};

/// Tool registry - manages all available tools.
#[derive(Default)]
pub struct ToolRegistry {
    tools: DashMap<String, Arc<dyn ToolHandler>>,
}

impl ToolRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool under its own name, replacing any previous tool with
    /// that name.
    pub fn register(&self, tool: Arc<dyn ToolHandler>) {
        let name = tool.name().to_string();
        info!("Registered MCP tool: {} - {}", name, tool.description());
        if self.tools.insert(name.clone(), tool).is_some() {
            warn!("Tool '{}' was already registered, overwritten", name);
        }
    }

    /// Register each tool in iteration order.
    pub fn register_all<I>(&self, tools: I)
    where
        I: IntoIterator<Item = Arc<dyn ToolHandler>>,
    {
        for tool in tools {
            self.register(tool);
        }
    }

    /// Exact-match lookup.
    pub fn get(&self, name: &str) -> Option<Arc<dyn ToolHandler>> {
        self.tools.get(name).map(|entry| Arc::clone(entry.value()))
    }

    pub fn has_tool(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Snapshot of every registered tool, in no particular order.
    pub fn all(&self) -> Vec<Arc<dyn ToolHandler>> {
        self.tools
            .iter()
            .map(|entry| Arc::clone(entry.value()))
            .collect()
    }

    pub fn names(&self) -> BTreeSet<String> {
        self.tools.iter().map(|entry| entry.key().clone()).collect()
    }

    /// Tools carrying `tag`.
    pub fn by_tag(&self, tag: &str) -> Vec<Arc<dyn ToolHandler>> {
        self.tools
            .iter()
            .filter(|entry| entry.value().tags().contains(&tag))
            .map(|entry| Arc::clone(entry.value()))
            .collect()
    }

    pub fn count(&self) -> usize {
        self.tools.len()
    }

    /// Descriptors of every registered tool, sorted by name.
    pub fn descriptors(&self) -> Vec<ToolDescriptor> {
        let mut descriptors: Vec<_> = self.all().iter().map(|t| t.descriptor()).collect();
        descriptors.sort_by(|a, b| a.name.cmp(&b.name));
        descriptors
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::domains::tools::{Arguments, ToolResult};
    use serde_json::{Value, json};

    /// Tool with a fixed name, tags and payload.
    pub(crate) struct StaticTool {
        pub name: &'static str,
        pub tags: &'static [&'static str],
        pub payload: Value,
    }

    impl StaticTool {
        pub fn named(name: &'static str) -> Arc<dyn ToolHandler> {
            Arc::new(Self {
                name,
                tags: &[],
                payload: json!(name),
            })
        }
    }

    #[async_trait::async_trait]
    impl ToolHandler for StaticTool {
        fn name(&self) -> &str {
            self.name
        }

        fn description(&self) -> &str {
            "static test tool"
        }

        fn input_schema(&self) -> Value {
            json!({"type": "object", "properties": {}})
        }

        fn tags(&self) -> &[&str] {
            self.tags
        }

        async fn execute(&self, _arguments: &Arguments) -> ToolResult {
            ToolResult::success(self.payload.clone())
        }
    }

    #[test]
    fn test_register_and_get() {
        let registry = ToolRegistry::new();
        registry.register(StaticTool::named("ecm_get_document"));

        assert_eq!(registry.count(), 1);
        assert!(registry.has_tool("ecm_get_document"));
        assert_eq!(
            registry.get("ecm_get_document").map(|t| t.name().to_string()),
            Some("ecm_get_document".to_string())
        );
    }

    #[test]
    fn test_lookup_is_exact_match_only() {
        let registry = ToolRegistry::new();
        registry.register(StaticTool::named("ecm_get_metadata"));
        registry.register(StaticTool::named("ecm_get_versions"));

        for key in [
            "ecm_get",
            "ecm_get_metadata_version",
            "ECM_GET_METADATA",
            "ecm_get_metadata ",
            "_metadata",
            "",
        ] {
            assert!(registry.get(key).is_none(), "unexpected match for {key:?}");
        }
        assert!(registry.get("ecm_get_metadata").is_some());
        assert!(registry.get("ecm_get_versions").is_some());
    }

    #[tokio::test]
    async fn test_duplicate_registration_keeps_last() {
        let registry = ToolRegistry::new();
        registry.register(Arc::new(StaticTool {
            name: "dup",
            tags: &[],
            payload: json!("first"),
        }));
        registry.register(Arc::new(StaticTool {
            name: "dup",
            tags: &[],
            payload: json!("second"),
        }));

        assert_eq!(registry.count(), 1);
        let tool = registry.get("dup").expect("dup registered");
        let result = tool.execute(&Arguments::new()).await;
        assert_eq!(result.data(), Some(&json!("second")));
    }

    #[test]
    fn test_register_all_counts_net_new_names() {
        let registry = ToolRegistry::new();
        registry.register(StaticTool::named("a"));
        let before = registry.count();

        registry.register_all([
            StaticTool::named("b"),
            StaticTool::named("a"),
            StaticTool::named("b"),
            StaticTool::named("c"),
        ]);

        assert_eq!(registry.count(), before + 2);
        let names: Vec<_> = registry.names().into_iter().collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_by_tag() {
        let registry = ToolRegistry::new();
        registry.register(Arc::new(StaticTool {
            name: "ecm_get_document",
            tags: &["ecm", "document"],
            payload: Value::Null,
        }));
        registry.register(Arc::new(StaticTool {
            name: "ecm_search_documents",
            tags: &["ecm", "search"],
            payload: Value::Null,
        }));
        registry.register(StaticTool::named("untagged"));

        assert_eq!(registry.by_tag("ecm").len(), 2);
        let search: Vec<_> = registry
            .by_tag("search")
            .iter()
            .map(|t| t.name().to_string())
            .collect();
        assert_eq!(search, vec!["ecm_search_documents"]);
        assert!(registry.by_tag("doc").is_empty());
    }

    #[test]
    fn test_descriptors_sorted_and_complete() {
        let registry = ToolRegistry::new();
        registry.register_all([StaticTool::named("zeta"), StaticTool::named("alpha")]);

        let descriptors = registry.descriptors();
        let names: Vec<_> = descriptors.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["alpha", "zeta"]);
        assert_eq!(descriptors[0].input_schema["type"], "object");
        assert_eq!(registry.all().len(), 2);
    }

    #[test]
    fn test_concurrent_lookups() {
        let registry = Arc::new(ToolRegistry::new());
        registry.register(StaticTool::named("shared"));

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let registry = Arc::clone(&registry);
                std::thread::spawn(move || {
                    if i % 2 == 0 {
                        registry.register(StaticTool::named("shared"));
                    }
                    registry.get("shared").is_some()
                })
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap());
        }
        assert_eq!(registry.count(), 1);
    }
}
