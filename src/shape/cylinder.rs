use bbox::BBox;
use geometry::point::Point;
use geometry::vector::Vector;
use ray::Ray;
use shape::ShapeBase;
use shape::ShapeIntersection;
use transform::transform::ApplyTransform;
use transform::transform::Transform;
use utils::Clamp;
use utils::Degrees;

#[derive(Debug, PartialEq, Clone)]
pub struct Cylinder {
    base: ShapeBase,
    radius: f32,
    z_min: f32,
    z_max: f32,
    phi_max: f32
}

impl Cylinder {
    pub fn new(o2w: Transform, w2o: Transform,
               rad: f32, z0: f32, z1: f32, pm: f32) -> Cylinder {
        Cylinder {
            base: ShapeBase::new(o2w, w2o),
            radius: rad,
            z_min: z0.min(z1),
            z_max: z0.max(z1),
            phi_max: pm.clamp(0.0, 360.0).as_radians()
        }
    }

    pub fn base<'a>(&'a self) -> &'a ShapeBase { &self.base }

    pub fn object_bound(&self) -> BBox {
        BBox::new_with(
            Point::new_with(-self.radius, -self.radius, self.z_min),
            Point::new_with(self.radius, self.radius, self.z_max))
    }

    fn phi_of(&self, p: &Point) -> f32 {
        let phi = p.y.atan2(p.x);
        if phi < 0.0 { phi + 2.0 * ::std::f32::consts::PI } else { phi }
    }

    fn clips(&self, p: &Point) -> bool {
        p.z < self.z_min || p.z > self.z_max || self.phi_of(p) > self.phi_max
    }

    pub fn intersect(&self, r: &Ray, t_max: f32) -> Option<ShapeIntersection> {
        let ray = self.base.world2object.t(r);

        let a = ray.d.x * ray.d.x + ray.d.y * ray.d.y;
        let b = 2.0 * (ray.d.x * ray.o.x + ray.d.y * ray.o.y);
        let c = ray.o.x * ray.o.x + ray.o.y * ray.o.y - self.radius * self.radius;

        let (t0, t1) = match ::utils::quadratic(a, b, c) {
            None => return None,
            Some(ts) => ts
        };

        if t0 > t_max || t1 < ray.mint {
            return None;
        }

        let mut t_hit = t0;
        if t_hit < ray.mint {
            t_hit = t1;
            if t_hit > t_max {
                return None;
            }
        }

        let mut p_hit = ray.at(t_hit);
        if self.clips(&p_hit) {
            if t_hit == t1 {
                return None;
            }
            t_hit = t1;
            if t_hit > t_max {
                return None;
            }
            p_hit = ray.at(t_hit);
            if self.clips(&p_hit) {
                return None;
            }
        }

        let n_object = Vector::new_with(p_hit.x, p_hit.y, 0.0).normalize();
        let world_hit = self.base.object2world.t(&p_hit);
        let world_normal = self.base.object2world.t(&n_object).normalize();

        Some(ShapeIntersection::new(t_hit, world_hit, world_normal))
    }
}
