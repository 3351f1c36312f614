use bbox::BBox;
use bbox::Union;
use geometry::point::Point;
use geometry::vector::{Dot, Vector};
use ray::Ray;
use shape::ShapeBase;
use shape::ShapeIntersection;
use transform::transform::ApplyTransform;
use transform::transform::Transform;

#[derive(Debug, PartialEq, Clone)]
pub struct Triangle {
    base: ShapeBase,
    p0: Point,
    p1: Point,
    p2: Point
}

impl Triangle {
    pub fn new(o2w: Transform, w2o: Transform, p0: Point, p1: Point, p2: Point) -> Triangle {
        Triangle { base: ShapeBase::new(o2w, w2o), p0, p1, p2 }
    }

    pub fn base<'a>(&'a self) -> &'a ShapeBase { &self.base }

    pub fn object_bound(&self) -> BBox {
        BBox::from(self.p0.clone())
            .unioned_with(&self.p1)
            .unioned_with(&self.p2)
    }

    pub fn area(&self) -> f32 {
        0.5 * (&self.p1 - &self.p0).cross(&(&self.p2 - &self.p0)).length()
    }

    /// Moller-Trumbore ray/triangle intersection in object space.
    pub fn intersect(&self, r: &Ray, t_max: f32) -> Option<ShapeIntersection> {
        let ray = self.base.world2object.t(r);

        let e1 = &self.p1 - &self.p0;
        let e2 = &self.p2 - &self.p0;
        let pvec = ray.d.clone().cross(&e2);
        let det = e1.dot(&pvec);
        if det.abs() < 1e-8 {
            return None;
        }
        let inv_det = 1.0 / det;

        let tvec = &ray.o - &self.p0;
        let u = tvec.dot(&pvec) * inv_det;
        if u < 0.0 || u > 1.0 {
            return None;
        }

        let qvec = tvec.cross(&e1);
        let v = ray.d.dot(&qvec) * inv_det;
        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        let t_hit = e2.dot(&qvec) * inv_det;
        if t_hit < ray.mint || t_hit > t_max {
            return None;
        }

        let p_hit = ray.at(t_hit);
        let n_object = e1.clone().cross(&e2).normalize();
        let world_hit = self.base.object2world.t(&p_hit);
        let world_normal = self.base.object2world.t(&n_object).normalize();

        Some(ShapeIntersection::new(t_hit, world_hit, world_normal))
    }
}
