use super::*;

/// Depth of a right-nested list like `[[[...]]]`.
enum Nested {
    Leaf,
    Wrap(Box<Nested>),
}

fn depth(node: &Nested) -> usize {
    ensure_sufficient_stack(|| match node {
        Nested::Leaf => 0,
        Nested::Wrap(inner) => depth(inner) + 1,
    })
}

fn build(levels: usize) -> Nested {
    let mut node = Nested::Leaf;
    for _ in 0..levels {
        node = Nested::Wrap(Box::new(node));
    }
    node
}

/// Tear down iteratively so the test does not overflow in `Drop`.
fn dismantle(mut node: Nested) {
    while let Nested::Wrap(inner) = node {
        node = *inner;
    }
}

#[test]
fn shallow_walk() {
    let tree = build(8);
    assert_eq!(depth(&tree), 8);
    dismantle(tree);
}

#[test]
fn deep_walk_grows_the_stack() {
    let tree = build(200_000);
    assert_eq!(depth(&tree), 200_000);
    dismantle(tree);
}

#[test]
fn passes_results_through() {
    let result: Result<u8, &str> = ensure_sufficient_stack(|| Err("limit"));
    assert_eq!(result, Err("limit"));
}
