use crate::types::{
    qualified_name, ClassRecord, FunctionRecord, RelationshipEdge, RepositoryModel,
};
use atlas_extract::ModuleResult;
use atlas_walker::FileTree;
use std::collections::BTreeMap;

/// Folds a sequence of per-file extraction results into the aggregate model
/// in a single pass.
#[derive(Debug, Default)]
pub struct ModelBuilder {
    modules: BTreeMap<String, ModuleResult>,
    classes: BTreeMap<String, ClassRecord>,
    functions: BTreeMap<String, FunctionRecord>,
    relationships: Vec<RelationshipEdge>,
}

impl ModelBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one file's result into the model. A result with a parse error
    /// still occupies its module slot so file statistics stay accurate, but
    /// contributes no records or edges.
    pub fn add_module(&mut self, file: impl Into<String>, result: ModuleResult) {
        let file = file.into();

        for class in &result.classes {
            // A later same-named declaration overwrites, like redefinition
            // shadowing in the actual namespace. Each declaration still
            // contributes its own inheritance edges.
            self.classes.insert(
                qualified_name(&file, &class.name),
                ClassRecord {
                    file: file.clone(),
                    name: class.name.clone(),
                    methods: class.methods.clone(),
                    bases: class.bases.clone(),
                    line: class.line,
                },
            );

            for base in &class.bases {
                self.relationships.push(RelationshipEdge::Inherits {
                    from: class.name.clone(),
                    to: base.clone(),
                    file: file.clone(),
                });
            }
        }

        for function in &result.functions {
            self.functions.insert(
                qualified_name(&file, &function.name),
                FunctionRecord {
                    file: file.clone(),
                    name: function.name.clone(),
                    params: function.params.clone(),
                    line: function.line,
                },
            );
        }

        for import in &result.imports {
            self.relationships.push(RelationshipEdge::Imports {
                from: file.clone(),
                to: import.module.clone(),
            });
        }

        self.modules.insert(file, result);
    }

    /// Attach the walked tree and summary and seal the model.
    pub fn finish(self, tree: FileTree, summary: String) -> RepositoryModel {
        RepositoryModel {
            tree: tree.root,
            file_count: tree.file_count,
            file_types: tree.file_types,
            summary,
            modules: self.modules,
            classes: self.classes,
            functions: self.functions,
            relationships: self.relationships,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atlas_extract::{ClassDecl, FunctionDecl, ImportDecl};
    use pretty_assertions::assert_eq;

    fn class(name: &str, bases: &[&str]) -> ClassDecl {
        ClassDecl {
            name: name.to_string(),
            methods: Vec::new(),
            bases: bases.iter().map(|b| b.to_string()).collect(),
            line: 1,
        }
    }

    fn empty_tree() -> FileTree {
        FileTree {
            root: atlas_walker::FileNode {
                name: String::new(),
                path: String::new(),
                kind: atlas_walker::FileKind::Directory,
                children: Vec::new(),
            },
            files: Vec::new(),
            file_count: 0,
            file_types: BTreeMap::new(),
        }
    }

    #[test]
    fn qualified_names_keep_same_named_symbols_apart() {
        let mut builder = ModelBuilder::new();
        builder.add_module(
            "a.py",
            ModuleResult {
                classes: vec![class("Dog", &[])],
                ..ModuleResult::default()
            },
        );
        builder.add_module(
            "b.py",
            ModuleResult {
                classes: vec![class("Dog", &[])],
                ..ModuleResult::default()
            },
        );

        let model = builder.finish(empty_tree(), String::new());
        assert!(model.classes.contains_key("a.py::Dog"));
        assert!(model.classes.contains_key("b.py::Dog"));
        assert_eq!(model.classes.len(), 2);
    }

    #[test]
    fn same_file_redeclaration_last_wins_but_edges_accumulate() {
        let mut builder = ModelBuilder::new();
        builder.add_module(
            "a.py",
            ModuleResult {
                classes: vec![class("C", &["First"]), class("C", &["Second"])],
                ..ModuleResult::default()
            },
        );

        let model = builder.finish(empty_tree(), String::new());
        assert_eq!(model.classes["a.py::C"].bases, vec!["Second"]);
        assert_eq!(model.relationships.len(), 2);
    }

    #[test]
    fn one_inherits_edge_per_base() {
        let mut builder = ModelBuilder::new();
        builder.add_module(
            "zoo.py",
            ModuleResult {
                classes: vec![class("Husky", &["Dog", "Sled"])],
                ..ModuleResult::default()
            },
        );

        let model = builder.finish(empty_tree(), String::new());
        assert_eq!(
            model.relationships,
            vec![
                RelationshipEdge::Inherits {
                    from: "Husky".to_string(),
                    to: "Dog".to_string(),
                    file: "zoo.py".to_string(),
                },
                RelationshipEdge::Inherits {
                    from: "Husky".to_string(),
                    to: "Sled".to_string(),
                    file: "zoo.py".to_string(),
                },
            ]
        );
    }

    #[test]
    fn import_edges_are_not_deduplicated_across_files() {
        let mut builder = ModelBuilder::new();
        let imports = ModuleResult {
            imports: vec![ImportDecl::plain("os", None)],
            ..ModuleResult::default()
        };
        builder.add_module("a.py", imports.clone());
        builder.add_module("b.py", imports);

        let model = builder.finish(empty_tree(), String::new());
        assert_eq!(model.relationships.len(), 2);
    }

    #[test]
    fn errored_module_occupies_a_slot_without_records() {
        let mut builder = ModelBuilder::new();
        builder.add_module("ok.py", ModuleResult {
            functions: vec![FunctionDecl {
                name: "f".to_string(),
                params: Vec::new(),
                line: 1,
            }],
            ..ModuleResult::default()
        });
        builder.add_module("bad.py", ModuleResult::failed("syntax error at line 1, column 9"));

        let model = builder.finish(empty_tree(), String::new());
        assert_eq!(model.modules.len(), 2);
        assert!(model.modules["bad.py"].has_error());
        assert_eq!(model.classes.len(), 0);
        assert_eq!(model.functions.len(), 1);

        let failed: Vec<_> = model.failed_modules().collect();
        assert_eq!(failed, vec![("bad.py", "syntax error at line 1, column 9")]);
    }
}
