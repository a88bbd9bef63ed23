//! Depth-first declaration walk over a parsed tree.
//!
//! Pre-order traversal from the root: function and method declaration
//! nodes are recorded (when the same-file filter admits them) and their
//! subtrees are never descended into, so parameter lists, bodies, and
//! nested lambdas stay unvisited. Every other node kind is recursed
//! through. The walk never fails; per-node oddities resolve locally.

use ast_grep_core::{AstGrep, Node};
use ast_grep_language::SupportLang;

use crate::types::{FunctionDecl, FunctionList};

/// Shared state for one walk.
struct WalkContext<'a> {
    /// Path of the file under analysis, as handed to the driver.
    file: &'a str,
    /// Accumulating result list.
    out: &'a mut FunctionList,
}

/// What the walk does with one node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// A declaration of the target file: record it, skip its subtree.
    Record,
    /// A declaration attributed elsewhere: no record, subtree still skipped.
    Skip,
    /// Any other kind: keep descending.
    Descend,
}

/// Walk the whole tree, appending qualifying declarations to `out`.
pub(crate) fn collect<D: ast_grep_core::Doc<Lang = SupportLang>>(
    root: &AstGrep<D>,
    file: &str,
    out: &mut FunctionList,
) {
    let mut ctx = WalkContext { file, out };
    visit(&root.root(), &mut ctx);
}

fn visit<D: ast_grep_core::Doc>(node: &Node<D>, ctx: &mut WalkContext<'_>) {
    let children: Vec<_> = node.children().collect();
    for child in &children {
        // A tree parsed from one buffer attributes every node to that
        // buffer's file, so the resolved file is always the target here.
        match step_for(child, Some(ctx.file), ctx.file) {
            Step::Record => record(child, ctx.out),
            Step::Skip => {}
            Step::Descend => visit(child, ctx),
        }
    }
}

/// Decide what the walk does with one node.
///
/// `node_file` is the file the node's start location resolves to,
/// `None` when it cannot be resolved. The comparison is exact string
/// equality: relative and absolute spellings of the same path do not
/// match, and an unresolvable location never matches.
fn step_for<D: ast_grep_core::Doc>(
    node: &Node<D>,
    node_file: Option<&str>,
    target_file: &str,
) -> Step {
    if !is_function_declaration(node) {
        return Step::Descend;
    }
    match node_file {
        Some(file) if file == target_file => Step::Record,
        _ => Step::Skip,
    }
}

/// Whether a node declares a function or method.
///
/// Covers `function_definition` (free functions and method definitions
/// share this kind) and prototype `declaration`s. A declaration whose
/// declarator is parenthesized is a function-pointer variable, not a
/// function.
fn is_function_declaration<D: ast_grep_core::Doc>(node: &Node<D>) -> bool {
    match node.kind().as_ref() {
        "function_definition" => true,
        "declaration" => has_prototype_declarator(node),
        _ => false,
    }
}

/// Whether a declaration's declarator is a function prototype.
///
/// The `function_declarator` of a pointer- or reference-returning
/// prototype sits under the corresponding wrapper, so those are looked
/// through, the same way `declared_name` resolves names. A declarator
/// that parenthesizes its inner declarator is a function-pointer
/// variable, not a prototype.
fn has_prototype_declarator<D: ast_grep_core::Doc>(node: &Node<D>) -> bool {
    node.children().any(|c| match c.kind().as_ref() {
        "function_declarator" => !c
            .children()
            .any(|g| g.kind().as_ref() == "parenthesized_declarator"),
        "pointer_declarator" | "reference_declarator" => has_prototype_declarator(&c),
        _ => false,
    })
}

fn record<D: ast_grep_core::Doc>(node: &Node<D>, out: &mut FunctionList) {
    out.push(FunctionDecl {
        name: declared_name(node),
        start_line: line_number(node.start_pos().line()),
        end_line: line_number(node.end_pos().line()),
    });
}

/// 1-based line number from a 0-based position, saturating past `u32::MAX`.
fn line_number(line: usize) -> u32 {
    u32::try_from(line + 1).unwrap_or(u32::MAX)
}

/// Spelled name of a declaration node, or empty when none is present.
///
/// Looks through declarator wrappers (pointer returns, references,
/// parentheses) without entering the declaration's body.
fn declared_name<D: ast_grep_core::Doc>(node: &Node<D>) -> String {
    let children: Vec<_> = node.children().collect();
    for child in &children {
        match child.kind().as_ref() {
            "identifier" | "field_identifier" | "qualified_identifier" | "operator_name"
            | "destructor_name" => return child.text().to_string(),
            "function_declarator" | "pointer_declarator" | "reference_declarator"
            | "parenthesized_declarator" => {
                let name = declared_name(child);
                if !name.is_empty() {
                    return name;
                }
            }
            _ => {}
        }
    }
    String::new()
}

#[cfg(test)]
mod tests {
    use ast_grep_language::LanguageExt;
    use pretty_assertions::assert_eq;

    use super::*;

    fn walk(lang: SupportLang, source: &str, file: &str) -> FunctionList {
        let root = lang.ast_grep(source);
        let mut out = FunctionList::with_capacity(4);
        collect(&root, file, &mut out);
        out
    }

    fn names(list: &FunctionList) -> Vec<String> {
        list.iter().map(|d| d.name.clone()).collect()
    }

    #[test]
    fn records_functions_in_preorder() {
        let source = "int bar(void) {\n}\n\nint baz(int y) {\n    int z = y;\n    return z;\n}\n";
        let list = walk(SupportLang::C, source, "a.c");
        assert_eq!(names(&list), vec!["bar", "baz"]);
        assert_eq!((list[0].start_line, list[0].end_line), (1, 2));
        assert_eq!((list[1].start_line, list[1].end_line), (4, 6));
    }

    #[test]
    fn prototype_is_recorded() {
        let list = walk(SupportLang::C, "int add(int a, int b);\n", "a.c");
        assert_eq!(names(&list), vec!["add"]);
        assert_eq!(list[0].start_line, list[0].end_line);
    }

    #[test]
    fn function_pointer_variable_is_not_a_declaration() {
        let list = walk(SupportLang::C, "void (*callback)(int);\n", "a.c");
        assert!(list.is_empty());
    }

    #[test]
    fn pointer_returning_function_keeps_its_name() {
        let list = walk(SupportLang::C, "char *dup_name(const char *s) {\n    return 0;\n}\n", "a.c");
        assert_eq!(names(&list), vec!["dup_name"]);
    }

    #[test]
    fn pointer_returning_prototype_is_recorded() {
        let list = walk(SupportLang::C, "char *dup_name(const char *s);\n", "a.c");
        assert_eq!(names(&list), vec!["dup_name"]);
        assert_eq!(list[0].start_line, list[0].end_line);
    }

    #[test]
    fn reference_returning_prototype_is_recorded() {
        let list = walk(SupportLang::Cpp, "int &front(std::vector<int> &values);\n", "a.cpp");
        assert_eq!(names(&list), vec!["front"]);
    }

    #[test]
    fn source_without_functions_yields_empty_list() {
        let source = "struct point {\n    int x;\n    int y;\n};\n\nstatic int counter;\n";
        let list = walk(SupportLang::C, source, "a.c");
        assert!(list.is_empty());
    }

    #[test]
    fn lambda_inside_body_is_never_visited() {
        let source = "int sum_twice(int v)\n{\n    auto dbl = [](int x) { return 2 * x; };\n    return dbl(v) + dbl(v);\n}\n";
        let list = walk(SupportLang::Cpp, source, "a.cpp");
        assert_eq!(names(&list), vec!["sum_twice"]);
    }

    #[test]
    fn inline_method_definition_is_recorded() {
        let source = "class Counter {\npublic:\n    int increment() {\n        return ++count_;\n    }\n\nprivate:\n    int count_ = 0;\n};\n";
        let list = walk(SupportLang::Cpp, source, "counter.cpp");
        assert_eq!(names(&list), vec!["increment"]);
        assert_eq!((list[0].start_line, list[0].end_line), (3, 5));
    }

    #[test]
    fn out_of_class_method_keeps_qualified_name() {
        let source = "int Counter::increment()\n{\n    return ++count_;\n}\n";
        let list = walk(SupportLang::Cpp, source, "counter.cpp");
        assert_eq!(names(&list), vec!["Counter::increment"]);
    }

    #[test]
    fn foreign_file_declarations_are_skipped() {
        let root = SupportLang::C.ast_grep("int foo(void) {\n}\n");
        let children: Vec<_> = root.root().children().collect();
        let func = children
            .iter()
            .find(|c| c.kind().as_ref() == "function_definition")
            .expect("function node");

        assert_eq!(step_for(func, Some("a.c"), "a.c"), Step::Record);
        assert_eq!(step_for(func, Some("include/util.h"), "a.c"), Step::Skip);
        assert_eq!(step_for(func, None, "a.c"), Step::Skip);
        // Exact string equality, no path normalization.
        assert_eq!(step_for(func, Some("./a.c"), "a.c"), Step::Skip);
    }

    #[test]
    fn fixture_c_declarations_in_order() {
        let source = include_str!("../tests/fixtures/sample.c");
        let list = walk(SupportLang::C, source, "sample.c");
        assert_eq!(
            names(&list),
            vec![
                "buffer_used",
                "buffer_clone",
                "buffer_new",
                "buffer_used",
                "buffer_full"
            ]
        );
        for decl in &list {
            assert!(decl.start_line <= decl.end_line, "bad span for {decl}");
        }
        let def = list
            .iter()
            .find(|d| d.name == "buffer_new")
            .expect("buffer_new");
        assert!(def.end_line > def.start_line);
    }

    #[test]
    fn fixture_cpp_methods_and_functions() {
        let source = include_str!("../tests/fixtures/sample.cpp");
        let list = walk(SupportLang::Cpp, source, "sample.cpp");
        assert_eq!(names(&list), vec!["increment", "sum"]);
    }
}
