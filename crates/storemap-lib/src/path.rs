use crate::graph::Graph;
use crate::section::SectionId;

/// Run Dijkstra's algorithm between `start` and `goal`, returning the visited
/// sections in walking order together with the total weight.
///
/// The unvisited section with the smallest tentative distance is expanded
/// next; ties go to the section registered first, so identical inputs always
/// produce identical routes. The search stops as soon as `goal` is settled.
pub fn find_route_dijkstra(
    graph: &Graph,
    start: SectionId,
    goal: SectionId,
) -> Option<(Vec<SectionId>, f64)> {
    let count = graph.section_count();
    if start >= count || goal >= count {
        return None;
    }
    if start == goal {
        return Some((vec![start], 0.0));
    }

    let mut distances = vec![f64::INFINITY; count];
    let mut parents: Vec<Option<SectionId>> = vec![None; count];
    let mut visited = vec![false; count];
    distances[start] = 0.0;

    while let Some(current) = closest_unvisited(&distances, &visited) {
        visited[current] = true;

        if current == goal {
            let path = reconstruct_path(&parents, start, goal);
            return Some((path, distances[goal]));
        }

        for edge in graph.neighbours(current) {
            if visited[edge.target] {
                continue;
            }
            let candidate = distances[current] + edge.weight;
            if candidate < distances[edge.target] {
                distances[edge.target] = candidate;
                parents[edge.target] = Some(current);
            }
        }
    }

    None
}

/// Lowest-distance unvisited section; `None` once every reachable section is settled.
fn closest_unvisited(distances: &[f64], visited: &[bool]) -> Option<SectionId> {
    let mut best: Option<SectionId> = None;
    for (id, &distance) in distances.iter().enumerate() {
        if visited[id] || distance == f64::INFINITY {
            continue;
        }
        match best {
            Some(current) if distances[current] <= distance => {}
            _ => best = Some(id),
        }
    }
    best
}

fn reconstruct_path(
    parents: &[Option<SectionId>],
    start: SectionId,
    goal: SectionId,
) -> Vec<SectionId> {
    let mut path = Vec::new();
    let mut current = Some(goal);
    while let Some(node) = current {
        path.push(node);
        if node == start {
            break;
        }
        current = parents[node];
    }
    path.reverse();
    path
}
