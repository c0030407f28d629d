#[macro_use]
extern crate approx;

use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;

use uinode::prelude::*;

fn setup() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn node(x: f32, y: f32) -> NodeAttributes {
    NodeAttributes::default().with_position(x, y)
}

#[test]
fn root() {
    setup();

    let mut tree = UiTree::new();
    let e1 = tree.create_with(node(3.0, 4.0).with_scale(0.5, 2.0).with_size(10, 20));
    let resolver = Resolver::new();

    assert_eq!(resolver.absolute_position(&tree, e1), Vector2::new(3.0, 4.0));
    assert_eq!(resolver.scale(&tree, e1), Vector2::new(0.5, 2.0));
    assert_eq!(resolver.scaled_size(&tree, e1), Vector2::new(5.0, 40.0));
}

#[test]
fn hierarchy() {
    setup();

    let mut tree = UiTree::new();
    let parent = tree.create_with(node(10.0, 10.0).with_scale(2.0, 2.0));
    let child = tree.create_with(node(5.0, 5.0).with_size(4, 6));
    tree.set_parent(child, parent).unwrap();

    let resolver = Resolver::new();
    assert_eq!(resolver.absolute_position(&tree, child), Vector2::new(20.0, 20.0));
    assert_eq!(resolver.scale(&tree, child), Vector2::new(2.0, 2.0));
    assert_eq!(resolver.scaled_size(&tree, child), Vector2::new(8.0, 12.0));

    // e1 <- e2 <- e3
    let e1 = tree.create_with(node(100.0, 50.0).with_scale(2.0, 3.0));
    let e2 = tree.create_with(node(10.0, 10.0).with_scale(0.5, 0.5));
    let e3 = tree.create_with(node(4.0, 2.0));
    tree.set_parent(e2, e1).unwrap();
    tree.set_parent(e3, e2).unwrap();

    // ((4, 2) * 0.5 + (10, 10)) * (2, 3) + (100, 50)
    assert_eq!(resolver.absolute_position(&tree, e3), Vector2::new(124.0, 83.0));
    assert_eq!(resolver.scale(&tree, e3), Vector2::new(1.0, 1.5));
}

#[test]
fn idempotent() {
    setup();

    let mut tree = UiTree::new();
    let parent = tree.create_with(node(1.5, 2.5).with_scale(1.25, 0.75));
    let child = tree.create_with(node(3.0, 7.0));
    tree.set_parent(child, parent).unwrap();

    let resolver = Resolver::new();
    let first = resolver.absolute_position(&tree, child);
    let second = resolver.absolute_position(&tree, child);
    assert_eq!(first, second);
}

#[test]
fn visibility() {
    setup();

    let mut tree = UiTree::new();
    let e1 = tree.create();
    let e2 = tree.create();
    let e3 = tree.create();
    tree.set_parent(e2, e1).unwrap();
    tree.set_parent(e3, e2).unwrap();

    let resolver = Resolver::new();
    assert!(resolver.is_visible(&tree, e3));

    tree.set_visible(e1, false);
    assert!(!resolver.is_visible(&tree, e3));
    assert!(!resolver.is_visible(&tree, e1));

    tree.set_visible(e1, true);
    tree.set_visible(e2, false);
    assert!(!resolver.is_visible(&tree, e3));
    assert!(resolver.is_visible(&tree, e1));

    tree.set_visible(e2, true);
    tree.set_visible(e3, false);
    assert!(!resolver.is_visible(&tree, e3));
    assert!(resolver.is_visible(&tree, e2));
}

#[test]
fn anchors() {
    setup();

    let mut tree = UiTree::new();
    let parent = tree.create_with(node(10.0, 20.0).with_scale(2.0, 2.0));
    let child = tree.create_with(node(5.0, 5.0).with_size(30, 10));
    tree.set_parent(child, parent).unwrap();

    let resolver = Resolver::new();
    let size = resolver.scaled_size(&tree, child);
    assert_eq!(size, Vector2::new(60.0, 20.0));

    assert_eq!(resolver.anchor_offset(&tree, child, Anchor::TopLeft), Vector2::new(0.0, 0.0));
    assert_eq!(resolver.anchor_offset(&tree, child, Anchor::BottomRight), size);
    assert_eq!(resolver.anchor_offset(&tree, child, Anchor::CenterCenter), Vector2::new(30.0, 10.0));
    assert_eq!(resolver.anchor_offset(&tree, child, Anchor::TopRight), Vector2::new(60.0, 0.0));
    assert_eq!(resolver.anchor_offset(&tree, child, Anchor::BottomCenter), Vector2::new(30.0, 20.0));

    let origin = resolver.absolute_position(&tree, child);
    assert_eq!(origin, Vector2::new(20.0, 30.0));
    for &anchor in Anchor::ALL.iter() {
        assert_eq!(
            resolver.absolute_anchor_position(&tree, child, anchor),
            origin + resolver.anchor_offset(&tree, child, anchor)
        );
    }
}

#[test]
fn hit_test() {
    setup();

    let mut tree = UiTree::new();
    let parent = tree.create_with(node(10.0, 10.0).with_scale(2.0, 2.0));
    let child = tree.create_with(node(5.0, 5.0).with_size(10, 5));
    tree.set_parent(child, parent).unwrap();

    let resolver = Resolver::new();
    let rect = resolver.try_rect(&tree, child).unwrap();
    assert_eq!(rect.min, Vector2::new(20.0, 20.0));
    assert_eq!(rect.max, Vector2::new(40.0, 30.0));

    for &corner in rect.corners().iter() {
        assert!(resolver.point_in_node(&tree, child, corner));
    }

    assert!(!resolver.point_in_node(&tree, child, Vector2::new(19.0, 25.0)));
    assert!(!resolver.point_in_node(&tree, child, Vector2::new(41.0, 25.0)));
    assert!(!resolver.point_in_node(&tree, child, Vector2::new(30.0, 19.0)));
    assert!(!resolver.point_in_node(&tree, child, Vector2::new(30.0, 31.0)));

    assert!(point_in_rect(
        Vector2::new(1.0, 1.0),
        Vector2::new(0.0, 0.0),
        Vector2::new(1.0, 1.0)
    ));
    assert!(!point_in_rect(
        Vector2::new(1.0, 1.5),
        Vector2::new(0.0, 0.0),
        Vector2::new(1.0, 1.0)
    ));
}

#[test]
fn set_anchored_position() {
    setup();

    let mut tree = UiTree::new();
    let e1 = tree.create_with(node(100.0, 40.0).with_scale(2.0, 0.5));
    let e2 = tree.create_with(node(-5.0, 12.0).with_scale(1.5, 3.0));
    let e3 = tree.create_with(node(7.0, 9.0).with_size(40, 16).with_scale(0.5, 2.0));
    tree.set_parent(e2, e1).unwrap();
    tree.set_parent(e3, e2).unwrap();

    let resolver = Resolver::new();
    let target = Vector2::new(321.5, -44.25);

    for &anchor in Anchor::ALL.iter() {
        resolver.try_set_anchored_position(&mut tree, e3, anchor, target).unwrap();
        let v = resolver.absolute_anchor_position(&tree, e3, anchor);
        assert_relative_eq!(v, target, epsilon = 1.0e-3);
    }

    // Roots are positioned in screen space directly.
    resolver.set_anchored_position(&mut tree, e1, Anchor::TopLeft, Vector2::new(8.0, 9.0));
    assert_eq!(tree.local_position(e1), Some(Vector2::new(8.0, 9.0)));
}

#[test]
fn set_anchored_position_with_zero_scale() {
    setup();

    let mut tree = UiTree::new();
    let parent = tree.create_with(node(10.0, 10.0).with_scale(0.0, 2.0));
    let child = tree.create_with(node(3.0, 4.0));
    tree.set_parent(child, parent).unwrap();

    let resolver = Resolver::new();
    let result = resolver.try_set_anchored_position(
        &mut tree,
        child,
        Anchor::TopLeft,
        Vector2::new(50.0, 50.0),
    );

    assert_eq!(
        result,
        Err(Error::ZeroScale("set_anchored_position", Axis::X))
    );

    // The solvable axis is still written: (50 - 10) / 2.
    assert_eq!(tree.local_position(child), Some(Vector2::new(3.0, 20.0)));

    // The logging flavour behaves the same without surfacing the error.
    resolver.set_anchored_position(&mut tree, child, Anchor::TopLeft, Vector2::new(20.0, 20.0));
    assert_eq!(tree.local_position(child), Some(Vector2::new(3.0, 5.0)));
}

#[test]
fn random_chains() {
    setup();

    let mut rng = StdRng::seed_from_u64(0x5eed);
    let resolver = Resolver::new();

    for _ in 0..64 {
        let mut tree = UiTree::new();
        let depth = rng.gen_range(1..6);

        let mut expected_scale = Vector2::new(1.0f32, 1.0);
        let mut leaf = tree.create();
        for i in 0..depth {
            let scale = Vector2::new(rng.gen_range(0.5..2.0), rng.gen_range(0.5..2.0));
            let attributes = NodeAttributes::default()
                .with_position(rng.gen_range(-100.0..100.0), rng.gen_range(-100.0..100.0))
                .with_scale(scale.x, scale.y)
                .with_size(rng.gen_range(0..200), rng.gen_range(0..200));

            let v = tree.create_with(attributes);
            if i > 0 {
                tree.set_parent(v, leaf).unwrap();
            } else {
                tree.delete(leaf);
            }

            expected_scale = expected_scale.mul_element_wise(scale);
            leaf = v;
        }

        assert_relative_eq!(resolver.scale(&tree, leaf), expected_scale, max_relative = 1.0e-5);

        let anchor = Anchor::ALL[rng.gen_range(0..9)];
        let target = Vector2::new(rng.gen_range(-1000.0..1000.0), rng.gen_range(-1000.0..1000.0));
        resolver.set_anchored_position(&mut tree, leaf, anchor, target);

        let v = resolver.absolute_anchor_position(&tree, leaf, anchor);
        assert_relative_eq!(v, target, epsilon = 5.0e-2);
    }
}

#[test]
fn null_nodes() {
    setup();

    let mut tree = UiTree::new();
    let resolver = Resolver::new();
    let none: Option<NodeId> = None;

    assert_eq!(resolver.absolute_position(&tree, none), Vector2::new(0.0, 0.0));
    assert_eq!(resolver.scale(&tree, none), Vector2::new(1.0, 1.0));
    assert_eq!(resolver.scaled_size(&tree, none), Vector2::new(1.0, 1.0));
    assert!(!resolver.is_visible(&tree, none));
    assert_eq!(resolver.anchor_offset(&tree, none, Anchor::BottomRight), Vector2::new(0.0, 0.0));
    assert_eq!(
        resolver.absolute_anchor_position(&tree, none, Anchor::CenterCenter),
        Vector2::new(0.0, 0.0)
    );
    assert!(!resolver.point_in_node(&tree, none, Vector2::new(0.0, 0.0)));
    resolver.set_anchored_position(&mut tree, none, Anchor::TopLeft, Vector2::new(1.0, 1.0));

    assert_eq!(
        resolver.try_absolute_position(&tree, none),
        Err(Error::NullNode("absolute_position"))
    );
    assert_eq!(
        resolver.try_set_anchored_position(&mut tree, none, Anchor::TopLeft, Vector2::new(1.0, 1.0)),
        Err(Error::NullNode("set_anchored_position"))
    );

    // A deleted node behaves like a null one.
    let stale = tree.create_with(node(5.0, 5.0));
    tree.delete(stale);
    assert_eq!(resolver.absolute_position(&tree, stale), Vector2::new(0.0, 0.0));
    assert!(!resolver.point_in_node(&tree, stale, Vector2::new(5.0, 5.0)));
    assert_eq!(resolver.try_scale(&tree, stale), Err(Error::NullNode("scale")));

    // Muted null-node warnings still return the defaults.
    let settings = Settings {
        log_null_nodes: false,
        ..Settings::default()
    };
    let quiet = Resolver::with_settings(&settings);
    assert_eq!(quiet.scale(&tree, stale), Vector2::new(1.0, 1.0));
}
