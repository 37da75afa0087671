//! Property tests for reporting structure resolution.

use std::collections::{HashSet, VecDeque};
use std::sync::Arc;

use proptest::prelude::*;

use roster::{
    Employee, EmployeeId, InMemoryDirectory, ReportingStructureResolver, ResolveError,
};

/// Adjacency lists over employees `e0..eN`; edges may form cycles and
/// self-loops and may repeat.
fn org_chart() -> impl Strategy<Value = Vec<Vec<usize>>> {
    (1usize..16).prop_flat_map(|n| {
        proptest::collection::vec(proptest::collection::vec(0..n, 0..5), n)
    })
}

fn id(index: usize) -> String {
    format!("e{index}")
}

fn directory(graph: &[Vec<usize>], extra: Option<(usize, &str)>) -> InMemoryDirectory {
    let employees = graph.iter().enumerate().map(|(index, reports)| {
        let mut employee = Employee::new(id(index));
        for report in reports {
            employee = employee.with_report(id(*report));
        }
        if let Some((manager, missing)) = extra {
            if manager == index {
                employee = employee.with_report(missing);
            }
        }
        employee
    });
    InMemoryDirectory::with_employees(employees)
}

/// Breadth-first reachability, computed independently of the resolver.
fn reachable(graph: &[Vec<usize>], root: usize) -> HashSet<usize> {
    let mut seen = HashSet::from([root]);
    let mut queue = VecDeque::from([root]);
    while let Some(node) = queue.pop_front() {
        for &next in &graph[node] {
            if seen.insert(next) {
                queue.push_back(next);
            }
        }
    }
    seen.remove(&root);
    seen
}

fn resolve(directory: InMemoryDirectory, root: usize) -> Result<usize, ResolveError> {
    let resolver = ReportingStructureResolver::new(Arc::new(directory));
    resolver
        .resolve(&EmployeeId::new(id(root)))
        .map(|structure| structure.number_of_reports)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the count equals the number of distinct employees reachable
    /// from the root, excluding the root itself.
    #[test]
    fn property_count_matches_reachability(graph in org_chart(), root_seed in any::<usize>()) {
        let root = root_seed % graph.len();
        let expected = reachable(&graph, root).len();

        let counted = resolve(directory(&graph, None), root);
        prop_assert_eq!(counted, Ok(expected));
    }

    /// PROPERTY: the order in which direct reports are listed never changes
    /// the count.
    #[test]
    fn property_report_order_is_irrelevant(graph in org_chart(), root_seed in any::<usize>()) {
        let root = root_seed % graph.len();
        let reversed: Vec<Vec<usize>> = graph
            .iter()
            .map(|reports| reports.iter().rev().copied().collect())
            .collect();

        let forward = resolve(directory(&graph, None), root);
        let backward = resolve(directory(&reversed, None), root);
        prop_assert_eq!(forward, backward);
    }

    /// PROPERTY: resolving twice against the same directory gives the same answer.
    #[test]
    fn property_resolution_is_idempotent(graph in org_chart(), root_seed in any::<usize>()) {
        let root = root_seed % graph.len();
        let resolver = ReportingStructureResolver::new(Arc::new(directory(&graph, None)));
        let root_id = EmployeeId::new(id(root));

        let first = resolver.resolve(&root_id).map(|s| s.number_of_reports);
        let second = resolver.resolve(&root_id).map(|s| s.number_of_reports);
        prop_assert_eq!(first, second);
    }

    /// PROPERTY: a missing employee fails resolution exactly when it is
    /// reachable from the root.
    #[test]
    fn property_dangling_reference_fails_only_when_reachable(
        graph in org_chart(),
        root_seed in any::<usize>(),
        manager_seed in any::<usize>(),
    ) {
        let root = root_seed % graph.len();
        let manager = manager_seed % graph.len();
        let reaches_manager = manager == root || reachable(&graph, root).contains(&manager);

        let result = resolve(directory(&graph, Some((manager, "missing"))), root);
        if reaches_manager {
            let is_dangling = matches!(
                &result,
                Err(ResolveError::DanglingReference { id, .. }) if id.as_str() == "missing"
            );
            prop_assert!(is_dangling, "expected dangling reference, got {:?}", result);
        } else {
            prop_assert_eq!(result, Ok(reachable(&graph, root).len()));
        }
    }
}
