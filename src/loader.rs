//! Source unit loader
//!
//! Reads a brick's raw text and parses it into a tree-sitter syntax
//! tree. A brick that fails to parse is still loaded - the tree is
//! simply absent and every tree-dependent scanner degrades to a fixed
//! "syntax error" finding. A brick under inspection is expected to
//! sometimes be broken; that is what inspection exists to catch.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;
use tree_sitter::{Node, Parser, Tree};

/// Fatal input-access failures. Distinct from findings: a brick we
/// cannot read cannot be inspected at all.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A loaded brick: raw text plus its parsed syntax tree (if the text
/// parsed). Immutable once loaded.
#[derive(Debug)]
pub struct SourceUnit {
    pub path: PathBuf,
    pub source: String,
    tree: Option<Tree>,
    /// Non-blank line count
    pub code_lines: usize,
}

/// A function definition found in the tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionInfo {
    pub name: String,
    /// 1-based line of the `def`
    pub line: usize,
    pub has_docstring: bool,
}

impl SourceUnit {
    /// Load a brick from disk. The only fatal failure mode of an
    /// inspection run: the file must exist and be readable UTF-8.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        if !path.is_file() {
            return Err(LoadError::NotFound(path.to_path_buf()));
        }
        let source = std::fs::read_to_string(path).map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_source(path, source))
    }

    /// Build a unit from source text directly (useful for testing)
    pub fn from_source(path: &Path, source: String) -> Self {
        let tree = parse_python(&source);
        if tree.is_none() {
            debug!(path = %path.display(), "brick did not parse cleanly");
        }
        let code_lines = source.lines().filter(|l| !l.trim().is_empty()).count();
        Self {
            path: path.to_path_buf(),
            source,
            tree,
            code_lines,
        }
    }

    /// The parsed tree, or `None` when the text is not valid Python
    pub fn tree(&self) -> Option<&Tree> {
        self.tree.as_ref()
    }

    pub fn has_valid_syntax(&self) -> bool {
        self.tree.is_some()
    }

    /// All function definitions in the tree, in document order,
    /// including methods and nested functions. Empty when the tree is
    /// absent.
    pub fn functions(&self) -> Vec<FunctionInfo> {
        let Some(tree) = &self.tree else {
            return Vec::new();
        };
        let mut out = Vec::new();
        collect_functions(&tree.root_node(), self.source.as_bytes(), &mut out);
        out
    }

    /// Number of module-level function definitions (decorated ones
    /// included)
    pub fn top_level_function_count(&self) -> usize {
        let Some(tree) = &self.tree else {
            return 0;
        };
        let root = tree.root_node();
        let mut count = 0;
        let mut cursor = root.walk();
        for child in root.named_children(&mut cursor) {
            if is_function_node(&child) {
                count += 1;
            } else if child.kind() == "decorated_definition" {
                let mut inner = child.walk();
                if child.named_children(&mut inner).any(|c| is_function_node(&c)) {
                    count += 1;
                }
            }
        }
        count
    }

    /// Whether the module opens with a docstring
    pub fn has_module_docstring(&self) -> bool {
        let Some(tree) = &self.tree else {
            return false;
        };
        first_statement_is_string(&tree.root_node())
    }

    /// Module names from every import statement in the tree (both
    /// `import x` and `from x import y` forms), in document order
    pub fn imports(&self) -> Vec<String> {
        let Some(tree) = &self.tree else {
            return Vec::new();
        };
        let mut out = Vec::new();
        collect_imports(&tree.root_node(), self.source.as_bytes(), &mut out);
        out
    }
}

/// Parse Python source. Returns `None` on a hard parse failure or when
/// tree-sitter's error-tolerant parse produced ERROR/MISSING nodes -
/// either way the brick has no usable tree.
fn parse_python(source: &str) -> Option<Tree> {
    let mut parser = Parser::new();
    let language = tree_sitter_python::LANGUAGE;
    parser
        .set_language(&language.into())
        .expect("tree-sitter python grammar should load");
    let tree = parser.parse(source, None)?;
    if tree.root_node().has_error() {
        None
    } else {
        Some(tree)
    }
}

fn is_function_node(node: &Node) -> bool {
    // Older grammars used a distinct kind for `async def`
    matches!(
        node.kind(),
        "function_definition" | "async_function_definition"
    )
}

fn collect_functions(node: &Node, source: &[u8], out: &mut Vec<FunctionInfo>) {
    if is_function_node(node) {
        if let Some(name_node) = node.child_by_field_name("name") {
            let name = name_node.utf8_text(source).unwrap_or("").to_string();
            out.push(FunctionInfo {
                name,
                line: node.start_position().row + 1,
                has_docstring: function_has_docstring(node),
            });
        }
    }
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        collect_functions(&child, source, out);
    }
}

/// Whether a function definition's body opens with a string expression
fn function_has_docstring(func: &Node) -> bool {
    func.child_by_field_name("body")
        .map(|body| first_statement_is_string(&body))
        .unwrap_or(false)
}

/// Whether the first real statement of a block (comments skipped) is a
/// bare string expression, i.e. a docstring
fn first_statement_is_string(block: &Node) -> bool {
    let mut cursor = block.walk();
    let Some(first) = block
        .named_children(&mut cursor)
        .find(|c| c.kind() != "comment")
    else {
        return false;
    };
    if first.kind() != "expression_statement" {
        return false;
    }
    first
        .named_child(0)
        .map(|c| c.kind() == "string")
        .unwrap_or(false)
}

fn collect_imports(node: &Node, source: &[u8], out: &mut Vec<String>) {
    match node.kind() {
        "import_statement" => {
            // import module1, module2 / import module as alias
            let mut cursor = node.walk();
            for child in node.named_children(&mut cursor) {
                if child.kind() == "dotted_name" {
                    if let Ok(text) = child.utf8_text(source) {
                        out.push(text.to_string());
                    }
                } else if child.kind() == "aliased_import" {
                    if let Some(name_node) = child.child_by_field_name("name") {
                        if let Ok(text) = name_node.utf8_text(source) {
                            out.push(text.to_string());
                        }
                    }
                }
            }
            return;
        }
        "import_from_statement" => {
            // from module import name1, name2
            if let Some(module_node) = node.child_by_field_name("module_name") {
                if let Ok(text) = module_node.utf8_text(source) {
                    out.push(text.to_string());
                }
            }
            return;
        }
        _ => {}
    }
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        collect_imports(&child, source, out);
    }
}
