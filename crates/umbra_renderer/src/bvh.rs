//! Bounding Volume Hierarchy (BVH) acceleration structure.
//!
//! A strictly binary tree: every interior node owns exactly two children and
//! a box equal to the union of everything below it. Leaves hold a single
//! primitive and have no node of their own, a child link simply names the
//! primitive.
//!
//! Construction sorts each range by centroid on an axis that cycles
//! X, Y, Z with depth and splits where a cheap surface-area-style cost is
//! lowest: the summed volume of the boxes on each side, weighted by the
//! number of primitives on that side.

use crate::primitive::{Primitive, ShadingRecord, Shape};
use std::time::Instant;
use umbra_core::MeshArena;
use umbra_math::{axis_component, Aabb, Ray};

/// Link from a node to one of its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeRef {
    /// A single primitive, by index into [`Bvh::primitives`].
    Leaf(u32),
    /// Another interior node, by index into [`Bvh::nodes`].
    Interior(u32),
}

/// Interior BVH node.
#[derive(Debug, Clone)]
pub struct BvhNode {
    pub bbox: Aabb,
    pub left: NodeRef,
    pub right: NodeRef,
}

/// Nearest intersection found by [`Bvh::nearest_hit`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Index of the primitive in [`Bvh::primitives`]
    pub primitive: u32,
    /// Ray parameter of the intersection
    pub t: f32,
}

/// BVH over a set of primitives, owning them and the meshes they index.
#[derive(Debug, Clone, Default)]
pub struct Bvh {
    nodes: Vec<BvhNode>,
    primitives: Vec<Primitive>,
    meshes: MeshArena,
    root: Option<NodeRef>,
}

impl Bvh {
    /// Build a BVH, taking ownership of the primitives and their meshes.
    ///
    /// An empty primitive list gives an empty tree that never reports hits.
    pub fn build(mut primitives: Vec<Primitive>, meshes: MeshArena) -> Self {
        let start = Instant::now();

        let mut nodes = Vec::with_capacity(primitives.len().saturating_sub(1));
        let root = if primitives.is_empty() {
            None
        } else {
            let bounds: Vec<Aabb> = primitives.iter().map(Shape::bounds).collect();
            let mut order: Vec<u32> = (0..primitives.len() as u32).collect();
            let root = build_range(&mut nodes, &primitives, &bounds, &mut order, 0);

            // Store primitives in leaf order so neighbours in the tree are
            // neighbours in memory
            let mut slots: Vec<Option<Primitive>> = primitives.drain(..).map(Some).collect();
            let mut remap = vec![0u32; slots.len()];
            for (new_index, &old_index) in order.iter().enumerate() {
                remap[old_index as usize] = new_index as u32;
                if let Some(primitive) = slots[old_index as usize].take() {
                    primitives.push(primitive);
                }
            }
            for node in &mut nodes {
                for child in [&mut node.left, &mut node.right] {
                    if let NodeRef::Leaf(index) = child {
                        *index = remap[*index as usize];
                    }
                }
            }
            Some(match root {
                NodeRef::Leaf(index) => NodeRef::Leaf(remap[index as usize]),
                interior => interior,
            })
        };

        let bvh = Self {
            nodes,
            primitives,
            meshes,
            root,
        };

        log::info!(
            "BVH built: {} primitives, {} nodes, depth {} in {:.2?}",
            bvh.primitives.len(),
            bvh.nodes.len(),
            bvh.depth(),
            start.elapsed()
        );

        bvh
    }

    /// Nearest intersection along `ray` in `(0, t_max]`.
    pub fn nearest_hit(&self, ray: &Ray, t_max: f32) -> Option<Hit> {
        self.hit_node(self.root?, ray, t_max)
    }

    /// Full shading record for a hit returned by [`Bvh::nearest_hit`].
    pub fn shading_record(&self, hit: &Hit, ray: &Ray) -> ShadingRecord {
        self.primitives[hit.primitive as usize].shading_record(&self.meshes, ray, hit.t)
    }

    fn hit_node(&self, node: NodeRef, ray: &Ray, t_max: f32) -> Option<Hit> {
        match node {
            NodeRef::Leaf(index) => self.primitives[index as usize]
                .hit(&self.meshes, ray, t_max)
                .map(|t| Hit {
                    primitive: index,
                    t,
                }),

            NodeRef::Interior(index) => {
                let node = &self.nodes[index as usize];
                if !node.bbox.hit(ray, t_max) {
                    return None;
                }

                let left = self.hit_node(node.left, ray, t_max);

                // Only check right up to closest hit
                let right_max = left.map_or(t_max, |hit| hit.t);
                let right = self.hit_node(node.right, ray, right_max);

                match (left, right) {
                    (Some(l), Some(r)) if r.t < l.t => Some(r),
                    (Some(l), _) => Some(l),
                    (None, r) => r,
                }
            }
        }
    }

    /// Bounding box of the whole tree.
    pub fn bounds(&self) -> Aabb {
        match self.root {
            Some(node) => self.node_bounds(node),
            None => Aabb::EMPTY,
        }
    }

    /// Box of any node or leaf.
    pub fn node_bounds(&self, node: NodeRef) -> Aabb {
        match node {
            NodeRef::Leaf(index) => self.primitives[index as usize].bounds(),
            NodeRef::Interior(index) => self.nodes[index as usize].bbox,
        }
    }

    pub fn root(&self) -> Option<NodeRef> {
        self.root
    }

    pub fn nodes(&self) -> &[BvhNode] {
        &self.nodes
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn primitive(&self, index: u32) -> &Primitive {
        &self.primitives[index as usize]
    }

    pub fn meshes(&self) -> &MeshArena {
        &self.meshes
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of levels, counting leaves. Zero for an empty tree.
    pub fn depth(&self) -> usize {
        fn walk(nodes: &[BvhNode], node: NodeRef) -> usize {
            match node {
                NodeRef::Leaf(_) => 1,
                NodeRef::Interior(index) => {
                    let n = &nodes[index as usize];
                    1 + walk(nodes, n.left).max(walk(nodes, n.right))
                }
            }
        }
        self.root.map_or(0, |root| walk(&self.nodes, root))
    }
}

/// Recursive BVH construction over `order`, a slice of primitive indices.
///
/// Returns the link to the subtree built for the slice.
fn build_range(
    nodes: &mut Vec<BvhNode>,
    primitives: &[Primitive],
    bounds: &[Aabb],
    order: &mut [u32],
    axis: usize,
) -> NodeRef {
    let n = order.len();
    if n == 1 {
        return NodeRef::Leaf(order[0]);
    }

    // Stable sort keeps equal centroids in input order
    order.sort_by(|&a, &b| {
        let ca = axis_component(primitives[a as usize].centroid(), axis);
        let cb = axis_component(primitives[b as usize].centroid(), axis);
        ca.total_cmp(&cb)
    });

    let split = sah_split(bounds, order);
    let bbox = order
        .iter()
        .fold(Aabb::EMPTY, |acc, &i| acc.union(&bounds[i as usize]));

    // Reserve our slot before the children so the root ends up at index 0
    let index = nodes.len();
    nodes.push(BvhNode {
        bbox,
        left: NodeRef::Leaf(0),
        right: NodeRef::Leaf(0),
    });

    let next_axis = (axis + 1) % 3;
    let (left_order, right_order) = order.split_at_mut(split);
    let left = build_range(nodes, primitives, bounds, left_order, next_axis);
    let right = build_range(nodes, primitives, bounds, right_order, next_axis);

    nodes[index].left = left;
    nodes[index].right = right;

    NodeRef::Interior(index as u32)
}

/// Number of primitives going left, in `1..order.len()`.
///
/// The first split with the strictly lowest cost wins.
fn sah_split(bounds: &[Aabb], order: &[u32]) -> usize {
    let n = order.len();

    // prefix[k]: volume sum of the first k boxes, suffix[k]: of the rest
    let mut prefix = vec![0.0_f32; n + 1];
    for (k, &i) in order.iter().enumerate() {
        prefix[k + 1] = prefix[k] + bounds[i as usize].volume();
    }
    let mut suffix = vec![0.0_f32; n + 1];
    for k in (0..n).rev() {
        suffix[k] = suffix[k + 1] + bounds[order[k] as usize].volume();
    }

    let mut best = 1;
    let mut best_cost = f32::INFINITY;
    for k in 1..n {
        let cost = prefix[k] * k as f32 + suffix[k] * (n - k) as f32;
        if cost < best_cost {
            best_cost = cost;
            best = k;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Sphere, Triangle};
    use rand::{Rng, SeedableRng};
    use rand_xoshiro::Xoshiro256PlusPlus;
    use umbra_core::{MaterialId, Mesh};
    use umbra_math::{sampling::uniform_sphere, Vec2, Vec3};

    /// Closed box made of 12 outward-facing triangles.
    fn box_mesh(min: Vec3, max: Vec3, material: MaterialId) -> Mesh {
        let positions = (0..8)
            .map(|i| {
                Vec3::new(
                    if i & 1 == 0 { min.x } else { max.x },
                    if i & 2 == 0 { min.y } else { max.y },
                    if i & 4 == 0 { min.z } else { max.z },
                )
            })
            .collect();
        #[rustfmt::skip]
        let indices = vec![
            0, 4, 6, 0, 6, 2, // -X
            1, 3, 7, 1, 7, 5, // +X
            0, 1, 5, 0, 5, 4, // -Y
            2, 6, 7, 2, 7, 3, // +Y
            0, 2, 3, 0, 3, 1, // -Z
            4, 5, 7, 4, 7, 6, // +Z
        ];
        Mesh::new("box", positions, indices, None, material)
    }

    fn triangles_of(meshes: &MeshArena) -> Vec<Primitive> {
        meshes
            .iter()
            .flat_map(|(id, mesh)| {
                (0..mesh.triangle_count() as u32).map(move |i| Triangle::new(meshes, id, i).into())
            })
            .collect()
    }

    /// Nearest hit by testing every primitive; ties keep the lowest index.
    fn brute_force(bvh: &Bvh, ray: &Ray, t_max: f32) -> Option<Hit> {
        let mut nearest: Option<Hit> = None;
        for (index, p) in bvh.primitives().iter().enumerate() {
            if let Some(t) = p.hit(bvh.meshes(), ray, t_max) {
                if nearest.map_or(true, |hit| t < hit.t) {
                    nearest = Some(Hit {
                        primitive: index as u32,
                        t,
                    });
                }
            }
        }
        nearest
    }

    fn check_boxes(bvh: &Bvh, node: NodeRef) {
        if let NodeRef::Interior(index) = node {
            let n = &bvh.nodes()[index as usize];
            assert!(n.bbox.contains(&bvh.node_bounds(n.left)));
            assert!(n.bbox.contains(&bvh.node_bounds(n.right)));
            check_boxes(bvh, n.left);
            check_boxes(bvh, n.right);
        }
    }

    fn count_leaves(bvh: &Bvh, node: NodeRef, seen: &mut Vec<u32>) {
        match node {
            NodeRef::Leaf(index) => seen.push(index),
            NodeRef::Interior(index) => {
                let n = &bvh.nodes()[index as usize];
                count_leaves(bvh, n.left, seen);
                count_leaves(bvh, n.right, seen);
            }
        }
    }

    fn random_scene(seed: u64, count: usize) -> Bvh {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
        let mut meshes = MeshArena::new();
        let mut spheres = Vec::new();

        for i in 0..count {
            let center = Vec3::new(
                rng.gen_range(-10.0..10.0),
                rng.gen_range(-10.0..10.0),
                rng.gen_range(-10.0..10.0),
            );
            if i % 2 == 0 {
                spheres.push(Primitive::from(Sphere::new(
                    center,
                    rng.gen_range(0.05..1.0),
                    MaterialId(0),
                )));
            } else {
                let mut corner = || {
                    center
                        + Vec3::new(
                            rng.gen_range(-1.0..1.0),
                            rng.gen_range(-1.0..1.0),
                            rng.gen_range(-1.0..1.0),
                        )
                };
                let positions = vec![corner(), corner(), corner()];
                meshes.push(Mesh::new("tri", positions, vec![0, 1, 2], None, MaterialId(0)));
            }
        }

        let mut primitives = triangles_of(&meshes);
        primitives.extend(spheres);
        Bvh::build(primitives, meshes)
    }

    #[test]
    fn test_bvh_empty() {
        let bvh = Bvh::build(Vec::new(), MeshArena::new());
        assert!(bvh.is_empty());
        assert_eq!(bvh.depth(), 0);
        assert!(bvh.bounds().is_empty());

        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        assert!(bvh.nearest_hit(&ray, f32::INFINITY).is_none());
    }

    #[test]
    fn test_bvh_single_sphere() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5, MaterialId(0));
        let bvh = Bvh::build(vec![sphere.into()], MeshArena::new());

        // Should create a leaf
        assert_eq!(bvh.root(), Some(NodeRef::Leaf(0)));
        assert!(bvh.nodes().is_empty());

        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let hit = bvh.nearest_hit(&ray, f32::INFINITY).unwrap();
        assert_eq!(hit.primitive, 0);
        assert!((hit.t - 0.5).abs() < 1e-6);

        let rec = bvh.shading_record(&hit, &ray);
        assert!((rec.geometric_normal - Vec3::Z).length() < 1e-6);
    }

    #[test]
    fn test_bvh_multiple_spheres() {
        let spheres = (0..10)
            .map(|i| Sphere::new(Vec3::new(i as f32, 0.0, -5.0), 0.5, MaterialId(i)).into())
            .collect();
        let bvh = Bvh::build(spheres, MeshArena::new());
        assert_eq!(bvh.nodes().len(), 9);

        // Test ray that hits sphere at x=5
        let ray = Ray::new(Vec3::new(5.0, 0.0, 0.0), Vec3::new(0.0, 0.0, -1.0));
        let hit = bvh.nearest_hit(&ray, f32::INFINITY).unwrap();
        let rec = bvh.shading_record(&hit, &ray);

        // Hit point should be near z = -4.5 (sphere at z=-5, radius 0.5)
        assert!((rec.point.z - (-4.5)).abs() < 0.01);
        assert_eq!(rec.material, MaterialId(5));
    }

    #[test]
    fn test_every_primitive_is_one_leaf() {
        let bvh = random_scene(17, 301);
        let mut seen = Vec::new();
        count_leaves(&bvh, bvh.root().unwrap(), &mut seen);
        seen.sort_unstable();

        let expected: Vec<u32> = (0..bvh.primitives().len() as u32).collect();
        assert_eq!(seen, expected);
        assert_eq!(bvh.nodes().len(), bvh.primitives().len() - 1);
    }

    #[test]
    fn test_node_boxes_contain_children() {
        for seed in 0..5 {
            let bvh = random_scene(seed, 200);
            check_boxes(&bvh, bvh.root().unwrap());
        }
    }

    #[test]
    fn test_nearest_hit_matches_brute_force() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(99);

        for (seed, count) in [(1, 2), (2, 7), (3, 64), (4, 500), (5, 1000)] {
            let bvh = random_scene(seed, count);

            for _ in 0..300 {
                let origin = Vec3::new(
                    rng.gen_range(-15.0..15.0),
                    rng.gen_range(-15.0..15.0),
                    rng.gen_range(-15.0..15.0),
                );
                let dir = uniform_sphere(Vec2::new(rng.gen(), rng.gen()));
                let ray = Ray::new(origin, dir);
                let t_max = if rng.gen_bool(0.5) {
                    f32::INFINITY
                } else {
                    rng.gen_range(1.0..30.0)
                };

                let expected = brute_force(&bvh, &ray, t_max);
                let got = bvh.nearest_hit(&ray, t_max);
                assert_eq!(
                    got.map(|hit| hit.primitive),
                    expected.map(|hit| hit.primitive),
                    "seed {seed}, ray {ray:?}, t_max {t_max}"
                );
                assert_eq!(got, expected, "seed {seed}, ray {ray:?}, t_max {t_max}");
            }
        }
    }

    #[test]
    fn test_boxes_along_x_hit_in_order() {
        const BOXES: u32 = 8;
        let mut meshes = MeshArena::new();
        for k in 0..BOXES {
            let x = 2.0 * k as f32;
            meshes.push(box_mesh(
                Vec3::new(x, 0.0, 0.0),
                Vec3::new(x + 1.0, 1.0, 1.0),
                MaterialId(k),
            ));
        }
        let primitives = triangles_of(&meshes);
        let bvh = Bvh::build(primitives, meshes);
        check_boxes(&bvh, bvh.root().unwrap());

        // Walk down the row: each box is 0.5 ahead of an origin in the gap
        // before it, so growing t_max past 0.5 reveals exactly that box
        for k in 0..BOXES {
            let origin = Vec3::new(2.0 * k as f32 - 0.5, 0.3, 0.6);
            let ray = Ray::new(origin, Vec3::X);

            assert!(bvh.nearest_hit(&ray, 0.25).is_none());

            let hit = bvh.nearest_hit(&ray, 0.75).unwrap();
            assert!((hit.t - 0.5).abs() < 1e-5);
            let rec = bvh.shading_record(&hit, &ray);
            assert_eq!(rec.material, MaterialId(k));
            assert!(rec.front_face);
            assert_eq!(rec.geometric_normal, Vec3::NEG_X);
        }

        // From one fixed origin the nearest hit is always the first box
        let ray = Ray::new(Vec3::new(-1.0, 0.3, 0.6), Vec3::X);
        assert!(bvh.nearest_hit(&ray, 0.9).is_none());
        let mut t_max = 1.5;
        while t_max < 2.0 * BOXES as f32 {
            let hit = bvh.nearest_hit(&ray, t_max).unwrap();
            assert_eq!(bvh.shading_record(&hit, &ray).material, MaterialId(0));
            t_max += 1.0;
        }

        // Box k's near face sits at t = 2k + 1 from that origin. A window
        // ending just past it contains the face, and the reported hit lies
        // in the window no further than the face
        for k in 0..BOXES {
            let face = 2.0 * k as f32 + 1.0;
            let t_max = face + 0.5;
            assert!(bvh.bounds().hit(&ray, t_max));

            let hit = bvh.nearest_hit(&ray, t_max).unwrap();
            assert!(hit.t > 0.0 && hit.t <= t_max);
            assert!(hit.t <= face + 1e-5, "box {k}: {hit:?}");
            assert!(ray.at(face).x >= 2.0 * k as f32 - 1e-5);
        }
    }

    #[test]
    fn test_sah_split_balances_equal_volumes() {
        let unit = |x: f32| Aabb::from_points(Vec3::new(x, 0.0, 0.0), Vec3::new(x + 1.0, 1.0, 1.0));

        let bounds: Vec<Aabb> = (0..8).map(|i| unit(2.0 * i as f32)).collect();
        let order: Vec<u32> = (0..8).collect();
        assert_eq!(sah_split(&bounds, &order), 4);

        // k=3 and k=4 cost the same; the first one wins
        let order: Vec<u32> = (0..7).collect();
        assert_eq!(sah_split(&bounds, &order), 3);
    }

    #[test]
    fn test_sah_split_isolates_large_box() {
        let mut bounds: Vec<Aabb> = (0..3)
            .map(|i| Aabb::from_points(Vec3::new(i as f32, 0.0, 0.0), Vec3::new(i as f32 + 1.0, 1.0, 1.0)))
            .collect();
        bounds.push(Aabb::from_points(Vec3::splat(10.0), Vec3::splat(20.0)));
        let order: Vec<u32> = (0..4).collect();

        assert_eq!(sah_split(&bounds, &order), 3);
    }
}
