//! Declaration graph checks.

use crate::ast::TypeDeclaration;
use std::collections::HashMap;
use typegen_core::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Visit {
    InProgress,
    Done,
}

/// Rejects declarations whose flattened bases lead back to themselves.
///
/// Edges run from an interface to its `extends` bases and from an enum union
/// to its variant declarations. Names that are not declared in the module
/// are leaves. Member types are not edges, so ordinary recursive types such
/// as `children: Node[]` are accepted.
///
/// # Errors
///
/// Returns [`Error::FlattenCycle`] with the first cycle found, in declaration
/// order.
pub fn check_flatten_cycles<'a, I>(declarations: I) -> Result<()>
where
    I: IntoIterator<Item = &'a TypeDeclaration>,
{
    let mut order = Vec::new();
    let mut graph: HashMap<&'a str, Vec<&'a str>> = HashMap::new();
    for decl in declarations {
        order.push(decl.name.as_str());
        graph.insert(decl.name.as_str(), decl.shape_dependencies());
    }

    let mut state = HashMap::new();
    let mut path = Vec::new();
    for start in order {
        visit(start, &graph, &mut state, &mut path)?;
    }
    Ok(())
}

fn visit<'a>(
    node: &'a str,
    graph: &HashMap<&'a str, Vec<&'a str>>,
    state: &mut HashMap<&'a str, Visit>,
    path: &mut Vec<&'a str>,
) -> Result<()> {
    match state.get(node) {
        Some(Visit::Done) => return Ok(()),
        Some(Visit::InProgress) => {
            let start = path.iter().position(|name| *name == node).unwrap_or(0);
            let mut chain: Vec<String> = path[start..].iter().map(ToString::to_string).collect();
            chain.push(node.to_string());
            return Err(Error::FlattenCycle { chain });
        }
        None => {}
    }

    let Some(dependencies) = graph.get(node) else {
        return Ok(());
    };

    state.insert(node, Visit::InProgress);
    path.push(node);
    for dependency in dependencies {
        visit(dependency, graph, state, path)?;
    }
    path.pop();
    state.insert(node, Visit::Done);
    Ok(())
}
