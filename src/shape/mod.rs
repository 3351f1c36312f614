mod cylinder;
mod sphere;
mod triangle;

use std::sync::atomic::AtomicIsize;

use bbox::BBox;
use bbox::HasBounds;
use geometry::Normal;
use geometry::point::Point;
use ray::Ray;
use transform::transform::ApplyTransform;
use transform::transform::Transform;

pub use shape::cylinder::Cylinder;
pub use shape::sphere::Sphere;
pub use shape::triangle::Triangle;

#[derive(Debug, Clone)]
pub struct ShapeBase {
    pub object2world: Transform,
    pub world2object: Transform,
    pub shape_id: isize
}

static NEXT_SHAPE_ID: AtomicIsize = ::std::sync::atomic::ATOMIC_ISIZE_INIT;

impl ShapeBase {
    pub fn new(o2w: Transform, w2o: Transform) -> ShapeBase {
        ShapeBase {
            object2world: o2w,
            world2object: w2o,
            shape_id: NEXT_SHAPE_ID.fetch_add(
                1, ::std::sync::atomic::Ordering::Relaxed)
        }
    }
}

impl ::std::cmp::PartialEq for ShapeBase {
    fn eq(&self, other: &ShapeBase) -> bool {
        self.object2world == other.object2world
            && self.world2object == other.world2object
    }
}

/// A hit against a `Shape`, already expressed in world space.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeIntersection {
    pub t_hit: f32,
    pub hit_point: Point,
    pub normal: Normal
}

impl ShapeIntersection {
    pub fn new(t_hit: f32, hit_point: Point, normal: Normal) -> ShapeIntersection {
        ShapeIntersection { t_hit, hit_point, normal }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Sphere(Sphere),
    Cylinder(Cylinder),
    Triangle(Triangle)
}

impl Shape {
    pub fn sphere(o2w: Transform, w2o: Transform,
                  radius: f32, z0: f32, z1: f32, phi_max: f32) -> Shape {
        Shape::Sphere(Sphere::new(o2w, w2o, radius, z0, z1, phi_max))
    }

    pub fn cylinder(o2w: Transform, w2o: Transform,
                    radius: f32, z0: f32, z1: f32, phi_max: f32) -> Shape {
        Shape::Cylinder(Cylinder::new(o2w, w2o, radius, z0, z1, phi_max))
    }

    pub fn triangle(o2w: Transform, w2o: Transform,
                    p0: Point, p1: Point, p2: Point) -> Shape {
        Shape::Triangle(Triangle::new(o2w, w2o, p0, p1, p2))
    }

    pub fn base<'a>(&'a self) -> &'a ShapeBase {
        match self {
            &Shape::Sphere(ref s) => s.base(),
            &Shape::Cylinder(ref c) => c.base(),
            &Shape::Triangle(ref t) => t.base()
        }
    }

    pub fn object_bound(&self) -> BBox {
        match self {
            &Shape::Sphere(ref s) => s.object_bound(),
            &Shape::Cylinder(ref c) => c.object_bound(),
            &Shape::Triangle(ref t) => t.object_bound()
        }
    }

    pub fn world_bound(&self) -> BBox {
        self.base().object2world.t(&self.object_bound())
    }

    pub fn intersect(&self, ray: &Ray, t_max: f32) -> Option<ShapeIntersection> {
        match self {
            &Shape::Sphere(ref s) => s.intersect(ray, t_max),
            &Shape::Cylinder(ref c) => c.intersect(ray, t_max),
            &Shape::Triangle(ref t) => t.intersect(ray, t_max)
        }
    }
}

impl HasBounds for Shape {
    fn get_bounds(&self) -> BBox { self.world_bound() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use transform::transform::Transform;

    #[test]
    fn it_can_be_created() {
        let some_shape = ShapeBase::new(Transform::new(), Transform::new());
        assert!(some_shape.shape_id >= 0);
        assert_eq!(ShapeBase::new(Transform::new(), Transform::new()),
                   ShapeBase {
                       object2world: Transform::new(),
                       world2object: Transform::new(),
                       shape_id: some_shape.shape_id + 1
                   });
    }

    #[test]
    fn two_shapes_can_be_equal() {
        assert_eq!(ShapeBase::new(Transform::new(), Transform::new()),
                   ShapeBase::new(Transform::new(), Transform::new()));
    }
}
