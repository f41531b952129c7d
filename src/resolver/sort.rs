//! Topological ordering using depth-first search (DFS)
//!
//! ## Algorithm
//!
//! Uses DFS with three-state marking to detect cycles and produce ordering:
//!
//! 1. **Unvisited**: name not seen yet
//! 2. **InProgress**: name is on the current recursion path
//! 3. **Done**: name and all its dependencies are emitted
//!
//! A name is emitted after its dependencies (post-order), which places every
//! dependency before its dependents. Reaching an **InProgress** name is a
//! back-edge: the path from that name's first occurrence to the repeat is the
//! cycle chain, and resolution stops without a partial result.
//!
//! Requested names are visited in the order given; a shared dependency is
//! emitted once, at the point it is first discovered.

use std::collections::HashMap;

use tracing::debug;

use super::{DependencyGraph, Resolution, ResolvedSet, UnresolvedDependency};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    InProgress,
    Done,
}

/// Traversal state
struct ResolveContext<'a, G: ?Sized> {
    graph: &'a G,
    marks: HashMap<String, Mark>,
    /// Current recursion path, for cycle chains
    path: Vec<String>,
    order: Vec<String>,
    unresolved: Vec<UnresolvedDependency>,
}

/// Expand `requested` into a dependency-ordered, cycle-free list
///
/// # Example
///
/// ```text
/// A -> [B], B -> [C], C -> []
///
/// resolve(["A"]) = Ordered([C, B, A])
///
/// A -> [B], B -> [A]
///
/// resolve(["A"]) = Cycle([A, B, A])
/// ```
pub fn resolve<G>(requested: &[String], graph: &G) -> Resolution
where
    G: DependencyGraph + ?Sized,
{
    let mut ctx = ResolveContext {
        graph,
        marks: HashMap::new(),
        path: Vec::new(),
        order: Vec::new(),
        unresolved: Vec::new(),
    };

    for name in requested {
        if let Err(chain) = visit(&mut ctx, name, None) {
            debug!(chain = %chain.join(" -> "), "dependency cycle");
            return Resolution::Cycle(chain);
        }
    }

    debug!(order = ?ctx.order, unresolved = ctx.unresolved.len(), "resolved");
    Resolution::Ordered(ResolvedSet {
        order: ctx.order,
        unresolved: ctx.unresolved,
    })
}

fn visit<G>(
    ctx: &mut ResolveContext<'_, G>,
    name: &str,
    required_by: Option<&str>,
) -> Result<(), Vec<String>>
where
    G: DependencyGraph + ?Sized,
{
    match ctx.marks.get(name) {
        Some(Mark::Done) => return Ok(()),
        Some(Mark::InProgress) => {
            let start = ctx.path.iter().position(|n| n == name).unwrap_or(0);
            let mut chain = ctx.path[start..].to_vec();
            chain.push(name.to_string());
            return Err(chain);
        }
        None => {}
    }

    let graph = ctx.graph;
    let Some(deps) = graph.dependencies_of(name) else {
        let entry = UnresolvedDependency {
            name: name.to_string(),
            required_by: required_by.map(str::to_string),
        };
        if !ctx.unresolved.contains(&entry) {
            ctx.unresolved.push(entry);
        }
        return Ok(());
    };

    ctx.marks.insert(name.to_string(), Mark::InProgress);
    ctx.path.push(name.to_string());

    for dep in deps {
        visit(ctx, dep, Some(name))?;
    }

    ctx.path.pop();
    ctx.marks.insert(name.to_string(), Mark::Done);
    ctx.order.push(name.to_string());

    Ok(())
}
