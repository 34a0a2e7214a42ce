//! Selection depth limit.
//!
//! Root fields sit at depth 0 and every nested selection set adds one.
//! Introspection fields (`__schema`, `__type`, `__typename`) are not counted,
//! so schema tooling works under any limit.

use async_graphql::parser::types::{
    DocumentOperations, ExecutableDocument, Selection, SelectionSet,
};
use async_graphql::ServerError;
use std::collections::HashSet;

/// Checks every operation in `query` against `max_depth`.
///
/// Documents that fail to parse pass through; the executor reports the parse error.
pub fn check_depth(query: &str, max_depth: usize) -> Result<(), ServerError> {
    let Ok(document) = async_graphql::parser::parse_query(query) else {
        return Ok(());
    };

    let operations: Vec<_> = match &document.operations {
        DocumentOperations::Single(op) => vec![(None, op)],
        DocumentOperations::Multiple(ops) => ops.iter().map(|(name, op)| (Some(name), op)).collect(),
    };

    for (name, operation) in operations {
        let mut visiting = HashSet::new();
        let depth = selection_depth(&document, &operation.node.selection_set.node, 0, &mut visiting);
        if depth > max_depth {
            let name = name.map(|n| n.as_str()).unwrap_or("anonymous");
            return Err(ServerError::new(
                format!("'{name}' exceeds maximum operation depth of {max_depth}"),
                Some(operation.pos),
            ));
        }
    }
    Ok(())
}

/// Deepest level reached below `selection_set`, which itself sits at `depth`.
fn selection_depth<'a>(
    document: &'a ExecutableDocument,
    selection_set: &'a SelectionSet,
    depth: usize,
    visiting: &mut HashSet<&'a str>,
) -> usize {
    let mut deepest = depth;
    for selection in &selection_set.items {
        let reached = match &selection.node {
            Selection::Field(field) => {
                let field = &field.node;
                if field.name.node.as_str().starts_with("__") || field.selection_set.node.items.is_empty() {
                    depth
                } else {
                    selection_depth(document, &field.selection_set.node, depth + 1, visiting)
                }
            }
            Selection::InlineFragment(fragment) => {
                selection_depth(document, &fragment.node.selection_set.node, depth, visiting)
            }
            Selection::FragmentSpread(spread) => {
                let name = spread.node.fragment_name.node.as_str();
                match document.fragments.get(&spread.node.fragment_name.node) {
                    // cycles are rejected later by validation
                    Some(fragment) if visiting.insert(name) => {
                        let reached =
                            selection_depth(document, &fragment.node.selection_set.node, depth, visiting);
                        visiting.remove(name);
                        reached
                    }
                    _ => depth,
                }
            }
        };
        deepest = deepest.max(reached);
    }
    deepest
}
