use bbox::BBox;
use geometry::point::Point;
use geometry::vector::Dot;
use geometry::vector::Vector;
use ray::Ray;
use shape::ShapeBase;
use shape::ShapeIntersection;
use transform::transform::ApplyTransform;
use transform::transform::Transform;
use utils::Clamp;
use utils::Degrees;

#[derive(Debug, PartialEq, Clone)]
pub struct Sphere {
    base: ShapeBase,
    radius: f32,
    phi_max: f32,
    z_min: f32,
    z_max: f32,
    theta_min: f32,
    theta_max: f32
}

impl Sphere {
    pub fn new(o2w: Transform, w2o: Transform,
               rad: f32, z0: f32, z1: f32, pm: f32) -> Sphere {
        debug_assert!(rad > 0f32);
        let zmin = z0.min(z1).clamp(-rad, rad);
        let zmax = z0.max(z1).clamp(-rad, rad);
        Sphere {
            base: ShapeBase::new(o2w, w2o),
            radius: rad,
            z_min: zmin,
            z_max: zmax,
            theta_min: (zmin / rad).clamp(-1.0, 1.0).acos(),
            theta_max: (zmax / rad).clamp(-1.0, 1.0).acos(),
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
        (self.z_min - 1e-4 > p.z) || (p.z > self.z_max + 1e-4) ||
            (self.phi_of(p) > self.phi_max)
    }

    pub fn intersect(&self, r: &Ray, t_max: f32) -> Option<ShapeIntersection> {
        let ray = self.base.world2object.t(r);

        let o = Vector::from(ray.o.clone());
        let a = ray.d.length_squared();
        let b = 2.0 * ray.d.dot(&o);
        let c = o.length_squared() - self.radius * self.radius;

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
        // Refine sphere intersection point, matching the usual quadric
        // correction to keep the hit on the unit sphere under f32 error.
        p_hit = &p_hit * (self.radius / Vector::from(p_hit.clone()).length());
        if p_hit.x == 0.0 && p_hit.y == 0.0 { p_hit.x = 1e-5 * self.radius; }

        if self.clips(&p_hit) {
            if t_hit == t1 {
                return None;
            }
            t_hit = t1;
            if t_hit > t_max {
                return None;
            }
            p_hit = ray.at(t_hit);
            p_hit = &p_hit * (self.radius / Vector::from(p_hit.clone()).length());
            if p_hit.x == 0.0 && p_hit.y == 0.0 { p_hit.x = 1e-5 * self.radius; }
            if self.clips(&p_hit) {
                return None;
            }
        }

        let n_object = Vector::from(p_hit.clone()).normalize();
        let world_hit = self.base.object2world.t(&p_hit);
        let world_normal = self.base.object2world.t(&n_object).normalize();

        Some(ShapeIntersection::new(t_hit, world_hit, world_normal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geometry::point::Point;
    use geometry::vector::Vector;
    use ray::Ray;
    use transform::transform::Transform;

    #[test]
    fn it_can_be_created() {
        let s = Sphere::new(Transform::new(), Transform::new(), 1.0, -1.0, 1.0, 360.0);
        assert_eq!(s.radius, 1.0);
        assert_eq!(s.z_min, -1.0);
        assert_eq!(s.z_max, 1.0);
        assert_eq!(s.phi_max, ::std::f32::consts::PI * 2.0);
    }

    #[test]
    fn it_hits_a_sphere_centered_at_the_origin() {
        let s = Sphere::new(Transform::new(), Transform::new(), 1.0, -1.0, 1.0, 360.0);
        let ray = Ray::new_with(
            &Point::new_with(0.0, 0.0, -5.0), &Vector::new_with(0.0, 0.0, 1.0), 0.0);
        let hit = s.intersect(&ray, ::std::f32::MAX).unwrap();
        assert!((hit.t_hit - 4.0).abs() < 1e-4);
        assert!((hit.hit_point.z - (-1.0)).abs() < 1e-4);
    }

    #[test]
    fn it_picks_the_far_root_when_the_ray_starts_inside() {
        let s = Sphere::new(Transform::new(), Transform::new(), 1.0, -1.0, 1.0, 360.0);
        let ray = Ray::new_with(
            &Point::new_with(0.0, 0.0, 0.0), &Vector::new_with(0.0, 0.0, 1.0), 0.0);
        let hit = s.intersect(&ray, ::std::f32::MAX).unwrap();
        assert!((hit.t_hit - 1.0).abs() < 1e-4);
    }

    #[test]
    fn it_misses_a_sphere_entirely() {
        let s = Sphere::new(Transform::new(), Transform::new(), 1.0, -1.0, 1.0, 360.0);
        let ray = Ray::new_with(
            &Point::new_with(5.0, 5.0, -5.0), &Vector::new_with(0.0, 0.0, 1.0), 0.0);
        assert!(s.intersect(&ray, ::std::f32::MAX).is_none());
    }

    #[test]
    fn it_respects_a_translated_sphere() {
        let xf = Transform::translate(&Vector::new_with(0.0, 0.0, 10.0));
        let s = Sphere::new(xf.clone(), xf.inverse(), 1.0, -1.0, 1.0, 360.0);
        let ray = Ray::new_with(
            &Point::new_with(0.0, 0.0, 0.0), &Vector::new_with(0.0, 0.0, 1.0), 0.0);
        let hit = s.intersect(&ray, ::std::f32::MAX).unwrap();
        assert!((hit.t_hit - 9.0).abs() < 1e-4);
    }

    #[test]
    fn it_clips_a_hemisphere_to_its_z_range() {
        // Upper hemisphere only: z in [0, 1].
        let s = Sphere::new(Transform::new(), Transform::new(), 1.0, 0.0, 1.0, 360.0);
        let ray_through_top = Ray::new_with(
            &Point::new_with(0.0, 0.0, -5.0), &Vector::new_with(0.0, 0.0, 1.0), 0.0);
        assert!(s.intersect(&ray_through_top, ::std::f32::MAX).is_some());

        // A ray confined to the z = -0.5 plane only ever crosses the part of
        // the sphere below the equator, which this hemisphere has clipped away.
        let ray_below_equator = Ray::new_with(
            &Point::new_with(-5.0, 0.0, -0.5), &Vector::new_with(1.0, 0.0, 0.0), 0.0);
        assert!(s.intersect(&ray_below_equator, ::std::f32::MAX).is_none());
    }
}
