#![allow(dead_code)]

/// Index of the left-most minimum of `data[i..=j]`.
pub fn brute_min<T: Ord>(data: &[T], i: usize, j: usize) -> usize {
    let mut best = i;
    for k in i + 1..=j {
        if data[k] < data[best] {
            best = k;
        }
    }
    best
}

/// Lowest common ancestor by walking parent pointers.
pub fn ancestor_walk_lca(parents: &[Option<usize>], u: usize, v: usize) -> usize {
    let mut seen = vec![false; parents.len()];
    let mut cur = Some(u);
    while let Some(node) = cur {
        seen[node] = true;
        cur = parents[node];
    }
    let mut cur = v;
    while !seen[cur] {
        cur = parents[cur].expect("v is connected to the root");
    }
    cur
}
