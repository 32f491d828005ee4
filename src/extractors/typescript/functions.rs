//! Export-shape extraction
//!
//! One extraction routine per recognized export shape. Extraction failures
//! are local: a node that superficially matches a shape but is missing a
//! required field yields no record, and the walk moves on. Only exported
//! declarations produce records; local helpers stay invisible to the
//! generated wrapper.

use super::{helpers, parameters};
use crate::extractors::base::{TsFunction, TsParameter};
use crate::extractors::typescript::TypeScriptExtractor;
use tree_sitter::{Node, Tree};

/// Walk the whole tree and collect exported functions in source order
pub(super) fn extract_functions(extractor: &TypeScriptExtractor, tree: &Tree) -> Vec<TsFunction> {
    let mut functions = Vec::new();
    visit_node(extractor, tree.root_node(), &mut functions);
    functions
}

/// Pre-order depth-first visit; only export statements can produce records
fn visit_node(extractor: &TypeScriptExtractor, node: Node, functions: &mut Vec<TsFunction>) {
    if node.kind() == "export_statement" {
        process_export_statement(extractor, node, functions);
    }

    // Recursively visit children
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        visit_node(extractor, child, functions);
    }
}

/// Route an export statement to the matching shape extractor
fn process_export_statement(
    extractor: &TypeScriptExtractor,
    node: Node,
    functions: &mut Vec<TsFunction>,
) {
    // `export default function ...` carries the declaration in the same
    // field; some grammar versions omit it, so fall back to the first child
    // that is not an export keyword
    let mut cursor = node.walk();
    let declaration = node.child_by_field_name("declaration").or_else(|| {
        node.children(&mut cursor)
            .find(|child| child.kind() != "export" && child.kind() != "default")
    });

    let Some(declaration) = declaration else {
        return;
    };

    let documentation = extractor.base().find_doc_comment(&node);

    match declaration.kind() {
        "function_declaration" => {
            if let Some(mut function) = parse_function(extractor, declaration) {
                function.documentation = documentation;
                functions.push(function);
            }
        }
        "lexical_declaration" | "variable_declaration" => {
            process_declarators(extractor, declaration, documentation, functions);
        }
        _ => {}
    }
}

/// Extract each qualifying declarator from `export const/let/var ...`
///
/// A declaration may bind several declarators; each one holding a function
/// value yields its own record, left to right.
fn process_declarators(
    extractor: &TypeScriptExtractor,
    declaration: Node,
    documentation: Option<String>,
    functions: &mut Vec<TsFunction>,
) {
    let mut cursor = declaration.walk();
    for child in declaration.children(&mut cursor) {
        if child.kind() != "variable_declarator" {
            continue;
        }
        if let Some(mut function) = parse_declarator(extractor, child) {
            function.documentation = documentation.clone();
            functions.push(function);
        }
    }
}

/// `const f = ...` - the declarator name becomes the function name
fn parse_declarator(extractor: &TypeScriptExtractor, declarator: Node) -> Option<TsFunction> {
    let name_node = declarator.child_by_field_name("name")?;
    let value = declarator.child_by_field_name("value")?;
    let name = extractor.base().identifier_name(&name_node)?;

    match value.kind() {
        "arrow_function" => parse_arrow_function(extractor, value, name),
        // The expression form may be anonymous; the declarator supplies the name
        "function_expression" | "function" => {
            let mut function = parse_signature(extractor, value);
            function.name = name;
            Some(function)
        }
        _ => None,
    }
}

/// Arrow function assigned to an exported binding
fn parse_arrow_function(
    extractor: &TypeScriptExtractor,
    arrow: Node,
    name: String,
) -> Option<TsFunction> {
    // The async keyword may sit on the arrow itself or attach to the
    // enclosing assignment, depending on grammar version; check both
    let is_async = helpers::has_modifier(arrow, "async")
        || arrow
            .parent()
            .map(|parent| helpers::has_modifier(parent, "async"))
            .unwrap_or(false);

    let parameters = if let Some(params_node) = arrow.child_by_field_name("parameters") {
        parameters::parse_parameters(extractor, params_node)
    } else if let Some(single) = arrow.child_by_field_name("parameter") {
        // Unparenthesized single parameter: `x => x * 2`
        vec![TsParameter {
            name: extractor.base().node_text(&single),
            type_text: "any".to_string(),
            is_optional: false,
            default_value: None,
        }]
    } else {
        Vec::new()
    };

    let return_type = arrow
        .child_by_field_name("return_type")
        .and_then(|annotation| extractor.base().annotation_text(&annotation))
        .unwrap_or_else(|| "any".to_string());

    Some(TsFunction {
        name,
        parameters,
        return_type,
        is_async,
        documentation: None,
    })
}

/// Named function declaration; a declaration without a name yields no record
fn parse_function(extractor: &TypeScriptExtractor, node: Node) -> Option<TsFunction> {
    let name_node = node.child_by_field_name("name")?;
    let name = extractor.base().node_text(&name_node);
    if name.is_empty() {
        return None;
    }

    let mut function = parse_signature(extractor, node);
    function.name = name;
    Some(function)
}

/// Signature fields shared by function declarations and function expressions
fn parse_signature(extractor: &TypeScriptExtractor, node: Node) -> TsFunction {
    let is_async = helpers::has_modifier(node, "async");

    let parameters = node
        .child_by_field_name("parameters")
        .map(|params_node| parameters::parse_parameters(extractor, params_node))
        .unwrap_or_default();

    let return_type = node
        .child_by_field_name("return_type")
        .and_then(|annotation| extractor.base().annotation_text(&annotation))
        .unwrap_or_else(|| "void".to_string());

    TsFunction {
        name: String::new(),
        parameters,
        return_type,
        is_async,
        documentation: None,
    }
}

#[cfg(test)]
mod tests {
    use crate::extractors::base::TsFunction;
    use crate::extractors::typescript::TypeScriptExtractor;
    use crate::language::Dialect;
    use tree_sitter::Parser;

    fn extract(source: &str) -> Vec<TsFunction> {
        let mut parser = Parser::new();
        parser.set_language(&Dialect::TypeScript.language()).unwrap();
        let tree = parser.parse(source, None).unwrap();

        let extractor = TypeScriptExtractor::new(source.to_string());
        extractor.extract_functions(&tree)
    }

    #[test]
    fn extracts_exported_function_declaration() {
        let functions = extract("export function add(a: number, b: number): number { return a + b; }");

        assert_eq!(functions.len(), 1);
        let func = &functions[0];
        assert_eq!(func.name, "add");
        assert_eq!(func.return_type, "number");
        assert!(!func.is_async);
        assert_eq!(func.parameters.len(), 2);
        assert_eq!(func.parameters[0].name, "a");
        assert_eq!(func.parameters[0].type_text, "number");
        assert!(!func.parameters[0].is_optional);
        assert_eq!(func.parameters[1].name, "b");
        assert_eq!(func.parameters[1].type_text, "number");
    }

    #[test]
    fn extracts_async_function_with_generic_return_type() {
        let functions =
            extract("export async function fetchData(url: string): Promise<any> { return fetch(url); }");

        assert_eq!(functions.len(), 1);
        let func = &functions[0];
        assert_eq!(func.name, "fetchData");
        assert!(func.is_async);
        // Generic wrapper types pass through verbatim
        assert_eq!(func.return_type, "Promise<any>");
        assert_eq!(func.parameters[0].name, "url");
        assert_eq!(func.parameters[0].type_text, "string");
    }

    #[test]
    fn function_without_return_annotation_defaults_to_void() {
        let functions = extract("export function log() { console.log('hi'); }");

        assert_eq!(functions.len(), 1);
        assert_eq!(functions[0].return_type, "void");
        assert!(functions[0].parameters.is_empty());
    }

    #[test]
    fn arrow_without_return_annotation_defaults_to_any() {
        let functions = extract("export const pick = (v: string) => v;");

        assert_eq!(functions.len(), 1);
        assert_eq!(functions[0].name, "pick");
        assert_eq!(functions[0].return_type, "any");
    }

    #[test]
    fn marks_optional_parameters() {
        let functions =
            extract("export function process(data: string, timeout?: number): boolean { return true; }");

        assert_eq!(functions.len(), 1);
        let func = &functions[0];
        assert_eq!(func.return_type, "boolean");
        assert!(!func.parameters[0].is_optional);
        assert_eq!(func.parameters[1].name, "timeout");
        assert_eq!(func.parameters[1].type_text, "number");
        assert!(func.parameters[1].is_optional);
    }

    #[test]
    fn captures_parameter_default_values() {
        let functions =
            extract("export function retry(attempts: number = 3, label = 'job'): void {}");

        assert_eq!(functions.len(), 1);
        let params = &functions[0].parameters;
        assert_eq!(params[0].default_value.as_deref(), Some("3"));
        assert_eq!(params[1].default_value.as_deref(), Some("'job'"));
        // No annotation on the second parameter
        assert_eq!(params[1].type_text, "any");
    }

    #[test]
    fn skips_non_exported_functions() {
        let source = r#"
export function a(): void {}
function b(): void {}
const c = (x: number) => x;
async function d(): Promise<void> {}
"#;
        let functions = extract(source);

        assert_eq!(functions.len(), 1);
        assert_eq!(functions[0].name, "a");
    }

    #[test]
    fn extracts_exported_arrow_function() {
        let functions = extract("export const double = (x: number): number => x * 2;");

        assert_eq!(functions.len(), 1);
        let func = &functions[0];
        assert_eq!(func.name, "double");
        assert_eq!(func.return_type, "number");
        assert!(!func.is_async);
        assert_eq!(func.parameters.len(), 1);
        assert_eq!(func.parameters[0].name, "x");
        assert_eq!(func.parameters[0].type_text, "number");
    }

    #[test]
    fn extracts_async_arrow_function() {
        let functions =
            extract("export const load = async (id: number): Promise<string> => `ID: ${id}`;");

        assert_eq!(functions.len(), 1);
        let func = &functions[0];
        assert_eq!(func.name, "load");
        assert!(func.is_async);
        assert_eq!(func.return_type, "Promise<string>");
    }

    #[test]
    fn synthesizes_unparenthesized_arrow_parameter() {
        let functions = extract("export const twice = x => x * 2;");

        assert_eq!(functions.len(), 1);
        let func = &functions[0];
        assert_eq!(func.parameters.len(), 1);
        assert_eq!(func.parameters[0].name, "x");
        assert_eq!(func.parameters[0].type_text, "any");
        assert!(!func.parameters[0].is_optional);
        assert_eq!(func.return_type, "any");
    }

    #[test]
    fn declarator_renames_exported_function_expression() {
        let functions =
            extract("export const shout = function (name: string): string { return name; };");

        assert_eq!(functions.len(), 1);
        let func = &functions[0];
        assert_eq!(func.name, "shout");
        assert_eq!(func.return_type, "string");
        assert_eq!(func.parameters[0].name, "name");
    }

    #[test]
    fn extracts_default_exported_function() {
        let functions =
            extract("export default function main(message: string): void { console.log(message); }");

        assert_eq!(functions.len(), 1);
        let func = &functions[0];
        assert_eq!(func.name, "main");
        assert_eq!(func.return_type, "void");
        assert_eq!(func.parameters[0].name, "message");
    }

    #[test]
    fn multiple_declarators_yield_one_record_each() {
        let functions = extract(
            "export const inc = (x: number): number => x + 1, dec = (x: number): number => x - 1;",
        );

        assert_eq!(functions.len(), 2);
        assert_eq!(functions[0].name, "inc");
        assert_eq!(functions[1].name, "dec");
    }

    #[test]
    fn preserves_source_order() {
        let source = r#"
export function first(): void {}
export const second = (): number => 2;
export async function third(): Promise<void> {}
export default function fourth(): void {}
"#;
        let names: Vec<String> = extract(source).into_iter().map(|f| f.name).collect();

        assert_eq!(names, vec!["first", "second", "third", "fourth"]);
    }

    #[test]
    fn skips_destructured_parameters() {
        let functions =
            extract("export function setup({ retries, delay }: Options, verbose: boolean): void {}");

        assert_eq!(functions.len(), 1);
        // The destructured parameter is invisible to the proxy; only the
        // plain named parameter survives
        assert_eq!(functions[0].parameters.len(), 1);
        assert_eq!(functions[0].parameters[0].name, "verbose");
    }

    #[test]
    fn non_function_exports_produce_nothing() {
        let source = r#"
export const flag = true;
export const limits = { max: 10 };
export interface Shape { area(): number; }
export type Alias = string;
"#;
        assert!(extract(source).is_empty());
    }

    #[test]
    fn attaches_doc_comment_to_exported_function() {
        let source = r#"
/** Adds two numbers. */
export function add(a: number, b: number): number { return a + b; }

// plain comment, not documentation
export function sub(a: number, b: number): number { return a - b; }
"#;
        let functions = extract(source);

        assert_eq!(functions.len(), 2);
        assert_eq!(
            functions[0].documentation.as_deref(),
            Some("/** Adds two numbers. */")
        );
        assert!(functions[1].documentation.is_none());
    }

    #[test]
    fn malformed_source_degrades_to_fewer_records() {
        // A broken declaration must not panic or poison its neighbors
        let source = r#"
export function (((
export function ok(): void {}
"#;
        let functions = extract(source);

        assert!(functions.iter().any(|f| f.name == "ok"));
        assert!(functions.iter().all(|f| !f.name.is_empty()));
    }
}
