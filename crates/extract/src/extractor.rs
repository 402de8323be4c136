use crate::dialect::SourceDialect;
use crate::error::Result;
use crate::types::{ClassDecl, FunctionDecl, ImportDecl, ModuleResult};
use tree_sitter::{Node, Parser};

/// Closed set of declaration-tree shapes the extractor reacts to. Anything
/// else is traversal-transparent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DeclKind {
    Class,
    Function,
    Import,
    ImportFrom,
    Other,
}

impl DeclKind {
    fn classify(kind: &str) -> Self {
        match kind {
            "class_definition" => Self::Class,
            "function_definition" => Self::Function,
            "import_statement" => Self::Import,
            "import_from_statement" => Self::ImportFrom,
            _ => Self::Other,
        }
    }
}

/// Parses one source file into its declared classes, top-level functions,
/// and imports.
///
/// The parser is stateful and reusable: one extractor per dialect serves a
/// whole run.
pub struct DeclarationExtractor {
    dialect: SourceDialect,
    parser: Parser,
}

impl DeclarationExtractor {
    pub fn new(dialect: SourceDialect) -> Result<Self> {
        let mut parser = Parser::new();
        parser.set_language(&dialect.tree_sitter_language())?;
        Ok(Self { dialect, parser })
    }

    pub fn dialect(&self) -> SourceDialect {
        self.dialect
    }

    /// Extract declarations from `source`. Malformed syntax is reported in
    /// the result's error field, never propagated to the caller.
    pub fn extract(&mut self, source: &str) -> ModuleResult {
        let Some(tree) = self.parser.parse(source, None) else {
            return ModuleResult::failed("parse error: no declaration tree produced");
        };

        let root = tree.root_node();
        if root.has_error() {
            let message = syntax_error_message(root);
            log::debug!("{} extraction failed: {message}", self.dialect.as_str());
            return ModuleResult::failed(message);
        }

        let mut result = ModuleResult::default();
        visit(root, source, 0, &mut result);
        result
    }
}

fn syntax_error_message(root: Node) -> String {
    match find_error_node(root) {
        Some(node) => {
            let pos = node.start_position();
            format!(
                "syntax error at line {}, column {}",
                pos.row + 1,
                pos.column + 1
            )
        }
        None => "syntax error".to_string(),
    }
}

fn find_error_node<'a>(node: Node<'a>) -> Option<Node<'a>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if let Some(found) = find_error_node(child) {
            return Some(found);
        }
    }
    None
}

/// Single top-down pass. `class_depth` counts enclosing class bodies, so a
/// function is classified at visit time instead of re-walking ancestry.
fn visit(node: Node, source: &str, class_depth: usize, out: &mut ModuleResult) {
    match DeclKind::classify(node.kind()) {
        DeclKind::Class => {
            if let Some(class) = read_class(node, source) {
                out.classes.push(class);
            }
            if let Some(body) = node.child_by_field_name("body") {
                visit_children(body, source, class_depth + 1, out);
            }
        }
        DeclKind::Function => {
            if class_depth == 0 {
                if let Some(function) = read_function(node, source) {
                    out.functions.push(function);
                }
            }
            if let Some(body) = node.child_by_field_name("body") {
                visit_children(body, source, class_depth, out);
            }
        }
        DeclKind::Import => read_imports(node, source, &mut out.imports),
        DeclKind::ImportFrom => read_from_imports(node, source, &mut out.imports),
        DeclKind::Other => visit_children(node, source, class_depth, out),
    }
}

fn visit_children(node: Node, source: &str, class_depth: usize, out: &mut ModuleResult) {
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        visit(child, source, class_depth, out);
    }
}

fn read_class(node: Node, source: &str) -> Option<ClassDecl> {
    let name = field_text(node, "name", source)?;
    let bases = node
        .child_by_field_name("superclasses")
        .map(|args| read_bases(args, source))
        .unwrap_or_default();
    let methods = node
        .child_by_field_name("body")
        .map(|body| read_methods(body, source))
        .unwrap_or_default();

    Some(ClassDecl {
        name,
        methods,
        bases,
        line: node.start_position().row + 1,
    })
}

/// Base identifiers are taken as-is: a plain identifier keeps its name, any
/// richer expression (attribute, subscript, call) keeps its raw source text.
/// Keyword arguments in the base list (metaclass=...) are not bases.
fn read_bases(args: Node, source: &str) -> Vec<String> {
    let mut bases = Vec::new();
    let mut cursor = args.walk();
    for child in args.named_children(&mut cursor) {
        match child.kind() {
            "keyword_argument" | "comment" => {}
            _ => bases.push(node_text(child, source)),
        }
    }
    bases
}

/// Methods are function-defining nodes that are direct children of the class
/// body — nested helpers and inherited methods never qualify.
fn read_methods(body: Node, source: &str) -> Vec<String> {
    let mut methods = Vec::new();
    let mut cursor = body.walk();
    for child in body.named_children(&mut cursor) {
        let decl = unwrap_decorated(child);
        if DeclKind::classify(decl.kind()) == DeclKind::Function {
            if let Some(name) = field_text(decl, "name", source) {
                methods.push(name);
            }
        }
    }
    methods
}

fn unwrap_decorated(node: Node) -> Node {
    if node.kind() == "decorated_definition" {
        node.child_by_field_name("definition").unwrap_or(node)
    } else {
        node
    }
}

fn read_function(node: Node, source: &str) -> Option<FunctionDecl> {
    let name = field_text(node, "name", source)?;
    let params = node
        .child_by_field_name("parameters")
        .map(|params| read_params(params, source))
        .unwrap_or_default();

    Some(FunctionDecl {
        name,
        params,
        line: node.start_position().row + 1,
    })
}

/// Positional parameter names only. Collection stops where the keyword-only
/// region begins (`*` separator or `*args`).
fn read_params(params: Node, source: &str) -> Vec<String> {
    let mut names = Vec::new();
    let mut cursor = params.walk();
    for child in params.named_children(&mut cursor) {
        match child.kind() {
            "identifier" => names.push(node_text(child, source)),
            "typed_parameter" => {
                if let Some(name) = first_identifier(child, source) {
                    names.push(name);
                }
            }
            "default_parameter" | "typed_default_parameter" => {
                if let Some(name) = field_text(child, "name", source) {
                    names.push(name);
                }
            }
            "list_splat_pattern" | "keyword_separator" => break,
            _ => {}
        }
    }
    names
}

fn first_identifier(node: Node, source: &str) -> Option<String> {
    let mut cursor = node.walk();
    let result = node
        .named_children(&mut cursor)
        .find(|child| child.kind() == "identifier")
        .map(|child| node_text(child, source));
    result
}

/// `import a.b, c as d` — one record per imported name.
fn read_imports(node: Node, source: &str, out: &mut Vec<ImportDecl>) {
    let mut cursor = node.walk();
    for name in node.children_by_field_name("name", &mut cursor) {
        match name.kind() {
            "aliased_import" => {
                if let Some(module) = field_text(name, "name", source) {
                    out.push(ImportDecl::plain(module, field_text(name, "alias", source)));
                }
            }
            _ => out.push(ImportDecl::plain(node_text(name, source), None)),
        }
    }
}

/// `from m import a, b as c` — one record per name, target `m.a`, with the
/// source module kept separately. Relative-import dots are dropped from the
/// module part; the target stays a raw lexical path either way.
fn read_from_imports(node: Node, source: &str, out: &mut Vec<ImportDecl>) {
    let module = node
        .child_by_field_name("module_name")
        .map(|n| node_text(n, source))
        .unwrap_or_default();
    let module = module.trim_start_matches('.').to_string();

    let mut pushed = false;
    let mut cursor = node.walk();
    for name in node.children_by_field_name("name", &mut cursor) {
        let (simple, alias) = match name.kind() {
            "aliased_import" => (
                field_text(name, "name", source),
                field_text(name, "alias", source),
            ),
            _ => (Some(node_text(name, source)), None),
        };
        if let Some(simple) = simple {
            out.push(ImportDecl {
                module: join_target(&module, &simple),
                alias,
                from_module: Some(module.clone()),
            });
            pushed = true;
        }
    }

    if !pushed && has_wildcard(node) {
        out.push(ImportDecl {
            module: join_target(&module, "*"),
            alias: None,
            from_module: Some(module),
        });
    }
}

fn has_wildcard(node: Node) -> bool {
    let mut cursor = node.walk();
    let result = node
        .named_children(&mut cursor)
        .any(|child| child.kind() == "wildcard_import");
    result
}

fn join_target(module: &str, name: &str) -> String {
    if module.is_empty() {
        name.to_string()
    } else {
        format!("{module}.{name}")
    }
}

fn node_text(node: Node, source: &str) -> String {
    node.utf8_text(source.as_bytes()).unwrap_or_default().to_string()
}

fn field_text(node: Node, field: &str, source: &str) -> Option<String> {
    node.child_by_field_name(field)
        .map(|child| node_text(child, source))
}
