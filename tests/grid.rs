#![allow(unused)]

extern crate raygrid;

use raygrid::bbox::HasBounds;
use raygrid::geometry::point::Point;
use raygrid::geometry::vector::Vector;
use raygrid::grid::Grid;
use raygrid::primitive::{GeometricPrimitive, Primitive};
use raygrid::ray::Ray;
use raygrid::shape::Shape;
use raygrid::transform::transform::Transform;

fn sphere_at(center: Vector, radius: f32) -> Box<dyn Primitive> {
    let xf = Transform::translate(&center);
    let shape = Shape::sphere(xf.clone(), xf.inverse(), radius, -radius, radius, 360.0);
    Box::new(GeometricPrimitive::new(shape))
}

#[test]
fn s1_single_voxel_grid_hits_the_sphere_it_contains() {
    let grid = Grid::new(vec![sphere_at(Vector::new(), 1.0)]).unwrap();
    let ray = Ray::new_with(
        &Point::new_with(0.0, 0.0, -5.0), &Vector::new_with(0.0, 0.0, 1.0), 0.0);
    let hit = grid.intersect(&ray, 100.0).unwrap();
    assert!((hit.t_hit - 4.0).abs() < 1e-3);
}

#[test]
fn s2_a_ray_that_clears_the_sphere_is_a_clean_miss() {
    let grid = Grid::new(vec![sphere_at(Vector::new(), 1.0)]).unwrap();
    let ray = Ray::new_with(
        &Point::new_with(0.0, 5.0, -5.0), &Vector::new_with(0.0, 0.0, 1.0), 0.0);
    assert!(grid.intersect(&ray, 100.0).is_none());
    assert!(!grid.intersect_p(&ray, 100.0));
}

#[test]
fn s3_dda_spans_voxels_to_find_the_nearer_sphere() {
    let grid = Grid::new(vec![
        sphere_at(Vector::new_with(-2.0, 0.0, 0.0), 1.0),
        sphere_at(Vector::new_with(2.0, 0.0, 0.0), 1.0)
    ]).unwrap();
    let ray = Ray::new_with(
        &Point::new_with(-10.0, 0.0, 0.0), &Vector::new_with(1.0, 0.0, 0.0), 0.0);
    let hit = grid.intersect(&ray, ::std::f32::MAX).unwrap();
    assert!((hit.t_hit - 7.0).abs() < 1e-3);
}

/// Invariant 1: `intersect_p` agrees with whether `intersect` found a hit
/// within `t_max`, across both a hit and a miss.
#[test]
fn intersect_p_agrees_with_intersect() {
    let grid = Grid::new(vec![
        sphere_at(Vector::new_with(-2.0, 0.0, 0.0), 1.0),
        sphere_at(Vector::new_with(2.0, 0.0, 0.0), 1.0)
    ]).unwrap();

    let hits = Ray::new_with(
        &Point::new_with(-10.0, 0.0, 0.0), &Vector::new_with(1.0, 0.0, 0.0), 0.0);
    let hit = grid.intersect(&hits, 100.0);
    assert_eq!(hit.is_some(), grid.intersect_p(&hits, 100.0));
    assert!(hit.unwrap().t_hit <= 100.0);

    let misses = Ray::new_with(
        &Point::new_with(-10.0, 50.0, 0.0), &Vector::new_with(1.0, 0.0, 0.0), 0.0);
    assert_eq!(grid.intersect(&misses, 100.0).is_some(), grid.intersect_p(&misses, 100.0));
}

/// Invariant 4: every voxel whose box overlaps a primitive's bounds must
/// list that primitive, checked here for a sphere that spans several voxels
/// along the grid's longest axis.
#[test]
fn build_places_a_spanning_primitive_in_every_voxel_it_touches() {
    let grid = Grid::new(vec![sphere_at(Vector::new(), 1.0)]).unwrap();
    let mut hit_count = 0;
    // Probe a lattice of rays from every direction the sphere's bounding box
    // spans; each must hit voxel 0's primitive if traversal is correct.
    for &(ox, oy, oz, dx, dy, dz) in &[
        (0.0, 0.0, -5.0, 0.0, 0.0, 1.0),
        (0.0, -5.0, 0.0, 0.0, 1.0, 0.0),
        (-5.0, 0.0, 0.0, 1.0, 0.0, 0.0),
        (0.0, 0.0, 5.0, 0.0, 0.0, -1.0),
        (0.0, 5.0, 0.0, 0.0, -1.0, 0.0),
        (5.0, 0.0, 0.0, -1.0, 0.0, 0.0)
    ] {
        let ray = Ray::new_with(
            &Point::new_with(ox, oy, oz), &Vector::new_with(dx, dy, dz), 0.0);
        if grid.intersect(&ray, 100.0).is_some() {
            hit_count += 1;
        }
    }
    assert_eq!(hit_count, 6);
}

#[test]
fn a_degenerate_primitive_set_is_rejected_at_construction() {
    let xf = Transform::new();
    let shape = Shape::triangle(xf.clone(), xf.inverse(), Point::new(), Point::new(), Point::new());
    let prim: Box<dyn Primitive> = Box::new(GeometricPrimitive::new(shape));
    assert!(Grid::new(vec![prim]).is_err());
}
