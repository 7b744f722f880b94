use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use treelist::doubly::DoublyList;
use treelist::tree::Tree;

/// Returns how many nodes are needed to fill a binary tree with `num_levels` levels.
fn num_nodes_in_full_tree(num_levels: usize) -> usize {
    2usize.pow(num_levels as u32) - 1
}

/// Builds a tree by inserting values in an unbalanced manner. This adds elements in an
/// ascending manner so the tree degenerates into a right chain.
fn get_unbalanced_tree(num_levels: usize) -> Tree<i32> {
    let mut tree = Tree::new();
    for x in 0..num_nodes_in_full_tree(num_levels) {
        tree.insert(x as i32);
    }

    tree
}

/// Builds a tree by inserting values in a balanced manner. This adds elements so that,
/// without any self-balancing, the resultant tree will still be balanced.
///
/// It ensures there are `num_levels` of nodes, all full.
fn get_balanced_tree(num_levels: usize) -> Tree<i32> {
    let mut tree = Tree::new();
    let xs = (0..num_nodes_in_full_tree(num_levels) as i32).collect::<Vec<_>>();
    fill_balanced_tree(&mut tree, &xs);

    tree
}

/// Recursive helper for [`get_balanced_tree`].
fn fill_balanced_tree(tree: &mut Tree<i32>, xs: &[i32]) {
    if !xs.is_empty() {
        let mid = xs.len() / 2;
        tree.insert(xs[mid]);
        fill_balanced_tree(tree, &xs[..mid]);
        fill_balanced_tree(tree, &xs[mid + 1..]);
    }
}

/// Helper to bench a read-only function on a BST.
/// It creates a group for the given name and closure and runs tests for various sizes and
/// shapes of BSTs before finishing the group.
fn bench_helper(c: &mut Criterion, name: &str, f: impl Fn(&Tree<i32>, i32)) {
    let mut group = c.benchmark_group(name);

    // For trees of size 2^3, 2^7, etc....
    for num_levels in [3, 7, 11, 15] {
        // Test unbalanced and balanced trees.
        let tree_tests = [
            ("unbalanced", get_unbalanced_tree(num_levels)),
            ("balanced", get_balanced_tree(num_levels)),
        ];
        let largest_element_in_tree = num_nodes_in_full_tree(num_levels) - 1;
        for (name, tree) in tree_tests {
            let id = BenchmarkId::new(name.to_string(), largest_element_in_tree);

            group.bench_with_input(id, &largest_element_in_tree, |b, _| {
                b.iter(|| {
                    f(&tree, black_box(largest_element_in_tree as i32));
                })
            });
        }
    }

    group.finish();
}

/// Benches an insert of a fresh largest element. The tree is cloned per iteration so each
/// insert starts from the same shape.
fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");

    for num_levels in [3, 7, 11, 15] {
        let tree_tests = [
            ("unbalanced", get_unbalanced_tree(num_levels)),
            ("balanced", get_balanced_tree(num_levels)),
        ];
        let largest_element_in_tree = num_nodes_in_full_tree(num_levels) - 1;
        for (name, tree) in tree_tests {
            let id = BenchmarkId::new(name.to_string(), largest_element_in_tree);

            group.bench_function(id, |b| {
                b.iter_custom(|iters| {
                    let mut time = std::time::Duration::ZERO;
                    for _ in 0..iters {
                        let mut tree = black_box(tree.clone());
                        let instant = std::time::Instant::now();
                        tree.insert(black_box(largest_element_in_tree as i32 + 1));
                        time += instant.elapsed();
                    }
                    time
                })
            });
        }
    }

    group.finish();
}

fn bench_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("doubly-list");

    for size in [100usize, 10_000] {
        let list: DoublyList<i32> = (0..size as i32).collect();

        group.bench_with_input(BenchmarkId::new("iter-sum", size), &size, |b, _| {
            b.iter(|| {
                let sum: i64 = black_box(&list).iter().map(|x| i64::from(*x)).sum();
                black_box(sum)
            })
        });

        group.bench_with_input(BenchmarkId::new("push-back", size), &size, |b, _| {
            b.iter(|| {
                let mut list = DoublyList::new();
                for x in 0..size as i32 {
                    list.push_back(black_box(x));
                }
                list
            })
        });
    }

    group.finish();
}

/// Test BSTs. All tree benches run against balanced and unbalanced trees of various sizes
/// and test successful and unsuccessful actions.
pub fn criterion_benchmark(c: &mut Criterion) {
    bench_helper(c, "contains", |tree, i| {
        let _found = black_box(tree.contains(&i));
    });
    bench_helper(c, "contains-miss", |tree, i| {
        let _found = black_box(tree.contains(&(i + 1)));
    });

    bench_helper(c, "inorder", |tree, _| {
        let _count = black_box(tree.inorder().count());
    });
    bench_helper(c, "level-order", |tree, _| {
        let _count = black_box(tree.level_order().count());
    });

    bench_helper(c, "height", |tree, _| {
        let _height = black_box(tree.height());
    });

    bench_insert(c);
    bench_list(c);
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
