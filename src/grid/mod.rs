pub mod error;

use bbox::BBox;
use bbox::Union;
use geometry::point::Point;
use geometry::vector::Vector;
use primitive::GridPrimitive;
use primitive::Primitive;
use ray::Ray;
use shape::ShapeIntersection;
use utils::Clamp;

pub use grid::error::GridError;

#[derive(Debug, Clone)]
struct Voxel {
    primitive_indices: Vec<usize>
}

impl Voxel {
    fn new(idx: usize) -> Voxel { Voxel { primitive_indices: vec![idx] } }
    fn add(&mut self, idx: usize) { self.primitive_indices.push(idx) }
}

/// Branch-free pick of whichever of three next-crossing distances is
/// smallest, indexed by the 3-bit pattern of pairwise comparisons. Avoids a
/// data-dependent branch per DDA step.
const CMP_TO_AXIS: [usize; 8] = [2, 1, 2, 1, 2, 2, 0, 0];

pub struct Grid {
    primitives: Vec<GridPrimitive>,
    num_voxels: [usize; 3],
    bounds: BBox,
    width: Vector,
    inv_width: Vector,
    voxels: Vec<Option<Voxel>>
}

impl Grid {
    pub fn new(primitives: Vec<Box<dyn Primitive>>) -> Result<Grid, GridError> {
        if primitives.is_empty() {
            return Err(GridError::EmptyPrimitiveSet);
        }

        let primitives: Vec<GridPrimitive> =
            primitives.into_iter().map(GridPrimitive::new).collect();

        let bounds = primitives.iter().fold(BBox::new(), |b, p| b.unioned_with(&p.bounds()));
        let delta = bounds.diagonal();

        let max_axis = bounds.max_extent();
        if delta[max_axis] <= 0.0 {
            return Err(GridError::DegenerateBounds);
        }

        let voxels_per_unit_dist = {
            let inv_max_width = 1.0 / delta[max_axis];
            let cube_root = 3.0 * (primitives.len() as f32).powf(1.0 / 3.0);
            cube_root * inv_max_width
        };

        let num_voxels = [
            ((delta.x * voxels_per_unit_dist).round() as usize).clamp(1, 64),
            ((delta.y * voxels_per_unit_dist).round() as usize).clamp(1, 64),
            ((delta.z * voxels_per_unit_dist).round() as usize).clamp(1, 64)
        ];

        let mut width = Vector::new();
        let mut inv_width = Vector::new();
        for axis in 0..3usize {
            let d = delta[axis] / (num_voxels[axis] as f32);
            width[axis] = d;
            inv_width[axis] = if d == 0.0 { 0.0 } else { 1.0 / d };
        }

        let mut grid = Grid {
            primitives,
            num_voxels,
            bounds,
            width,
            inv_width,
            voxels: (0..(num_voxels[0] * num_voxels[1] * num_voxels[2])).map(|_| None).collect()
        };

        for idx in 0..grid.primitives.len() {
            let pb = grid.primitives[idx].bounds();
            let vmin = grid.point_to_voxel(&pb.p_min);
            let vmax = grid.point_to_voxel(
                &(&pb.p_max - &Vector::new_with(1e-6, 1e-6, 1e-6)));

            for z in vmin[2]..(vmax[2] + 1) {
                for y in vmin[1]..(vmax[1] + 1) {
                    for x in vmin[0]..(vmax[0] + 1) {
                        let o = grid.offset(x, y, z);
                        match grid.voxels[o] {
                            Some(ref mut v) => v.add(idx),
                            None => grid.voxels[o] = Some(Voxel::new(idx))
                        }
                    }
                }
            }
        }

        Ok(grid)
    }

    pub fn bounds(&self) -> BBox { self.bounds.clone() }

    fn offset(&self, x: usize, y: usize, z: usize) -> usize {
        z * self.num_voxels[0] * self.num_voxels[1] + y * self.num_voxels[0] + x
    }

    fn point_to_voxel(&self, p: &Point) -> [usize; 3] {
        [self.pos_to_voxel(p, 0), self.pos_to_voxel(p, 1), self.pos_to_voxel(p, 2)]
    }

    fn pos_to_voxel(&self, p: &Point, axis: usize) -> usize {
        (((p[axis as i32] - self.bounds.p_min[axis as i32]) * self.inv_width[axis]) as usize)
            .clamp(0, self.num_voxels[axis] - 1)
    }

    fn voxel_to_pos(&self, v: usize, axis: usize) -> f32 {
        self.bounds.p_min[axis as i32] + (v as f32) * self.width[axis]
    }

    /// Runs a 3D DDA traversal of the voxels a ray passes through, calling
    /// `visit` on each non-empty one with the traversal's current pruning
    /// bound. `visit` returns `Some(tighter_bound)` to narrow that bound (so
    /// the walk stops once no remaining voxel could hold anything closer)
    /// or `None` to leave it unchanged.
    fn walk<F: FnMut(&Voxel, f32) -> Option<f32>>(&self, ray: &Ray, t_max: f32, mut visit: F) {
        let ray_start = ray.at(ray.mint);
        let ray_t = if self.bounds.inside(&ray_start) {
            ray.mint
        } else {
            match self.bounds.intersect_p(ray, t_max) {
                Some((t0, _)) => t0,
                None => return
            }
        };

        let grid_intersect = ray.at(ray_t);

        let mut pos = [0i32; 3];
        let mut next_crossing = [0.0f32; 3];
        let mut delta = [0.0f32; 3];
        let mut step = [0i32; 3];
        let mut out = [0i32; 3];

        for axis in 0..3usize {
            pos[axis] = self.pos_to_voxel(&grid_intersect, axis) as i32;
            if ray.d[axis] >= 0.0 {
                next_crossing[axis] = ray_t +
                    (self.voxel_to_pos((pos[axis] + 1) as usize, axis)
                        - grid_intersect[axis as i32])
                    / ray.d[axis];
                delta[axis] = self.width[axis] / ray.d[axis];
                step[axis] = 1;
                out[axis] = self.num_voxels[axis] as i32;
            } else {
                next_crossing[axis] = ray_t +
                    (self.voxel_to_pos(pos[axis] as usize, axis)
                        - grid_intersect[axis as i32])
                    / ray.d[axis];
                delta[axis] = -self.width[axis] / ray.d[axis];
                step[axis] = -1;
                out[axis] = -1;
            }
        }

        let mut bound = t_max;
        loop {
            let voxel = &self.voxels[self.offset(pos[0] as usize, pos[1] as usize, pos[2] as usize)];
            if let &Some(ref v) = voxel {
                if let Some(tighter) = visit(v, bound) {
                    bound = tighter;
                }
            }

            let bits = ((next_crossing[0] < next_crossing[1]) as usize) << 2
                | ((next_crossing[0] < next_crossing[2]) as usize) << 1
                | ((next_crossing[1] < next_crossing[2]) as usize);
            let axis = CMP_TO_AXIS[bits];

            if bound < next_crossing[axis] {
                break;
            }
            pos[axis] += step[axis];
            if pos[axis] == out[axis] {
                break;
            }
            next_crossing[axis] += delta[axis];
        }
    }

    pub fn intersect(&self, ray: &Ray, t_max: f32) -> Option<ShapeIntersection> {
        let mut best: Option<ShapeIntersection> = None;
        self.walk(ray, t_max, |voxel, bound| {
            let mut tighter = None;
            for &idx in voxel.primitive_indices.iter() {
                if let Some(hit) = self.primitives[idx].intersect(ray) {
                    let current = tighter.unwrap_or(bound);
                    if hit.t_hit >= ray.mint && hit.t_hit <= current {
                        tighter = Some(hit.t_hit);
                        best = Some(hit);
                    }
                }
            }
            tighter
        });
        best
    }

    pub fn intersect_p(&self, ray: &Ray, t_max: f32) -> bool {
        let mut hit_anything = false;
        self.walk(ray, t_max, |voxel, bound| {
            for &idx in voxel.primitive_indices.iter() {
                if self.primitives[idx].intersect_p(ray, bound) {
                    hit_anything = true;
                    return Some(ray.mint);
                }
            }
            None
        });
        hit_anything
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geometry::point::Point;
    use geometry::vector::Vector;
    use primitive::GeometricPrimitive;
    use ray::Ray;
    use shape::Shape;
    use transform::transform::Transform;

    fn sphere_at(center: Vector, radius: f32) -> Box<dyn Primitive> {
        let xf = Transform::translate(&center);
        let shape = Shape::sphere(xf.clone(), xf.inverse(), radius, -radius, radius, 360.0);
        Box::new(GeometricPrimitive::new(shape))
    }

    #[test]
    fn it_rejects_an_empty_primitive_set() {
        assert!(matches!(Grid::new(Vec::new()), Err(GridError::EmptyPrimitiveSet)));
    }

    #[test]
    fn it_sizes_itself_from_the_primitive_count_and_bounds() {
        let mut prims = Vec::new();
        for &x in &[-1.0f32, 1.0] {
            for &y in &[-1.0f32, 1.0] {
                for &z in &[-1.0f32, 1.0] {
                    prims.push(sphere_at(Vector::new_with(x, y, z), 0.2));
                }
            }
        }
        let grid = Grid::new(prims).unwrap();
        assert_eq!(grid.num_voxels, [6, 6, 6]);
        assert!((grid.bounds().p_min - Point::new_with(-1.2, -1.2, -1.2)).length_squared() < 1e-4);
        assert!((grid.bounds().p_max - Point::new_with(1.2, 1.2, 1.2)).length_squared() < 1e-4);
    }

    #[test]
    fn it_rejects_primitives_with_degenerate_bounds() {
        // A single point-like primitive collapses the dominant axis' extent to 0.
        let xf = Transform::translate(&Vector::new());
        let shape = Shape::triangle(xf.clone(), xf.inverse(), Point::new(), Point::new(), Point::new());
        let prim: Box<dyn Primitive> = Box::new(GeometricPrimitive::new(shape));
        assert!(matches!(Grid::new(vec![prim]), Err(GridError::DegenerateBounds)));
    }

    #[test]
    fn a_single_primitive_grid_hits_a_centered_sphere() {
        // S1: unit sphere at the origin, ray fired straight through it.
        let grid = Grid::new(vec![sphere_at(Vector::new(), 1.0)]).unwrap();
        let ray = Ray::new_with(
            &Point::new_with(0.0, 0.0, -5.0), &Vector::new_with(0.0, 0.0, 1.0), 0.0);
        let hit = grid.intersect(&ray, ::std::f32::MAX).unwrap();
        assert!((hit.t_hit - 4.0).abs() < 1e-3);
        assert!(grid.intersect_p(&ray, ::std::f32::MAX));
    }

    #[test]
    fn a_ray_that_passes_alongside_misses() {
        // S2: same sphere, ray offset well clear of it.
        let grid = Grid::new(vec![sphere_at(Vector::new(), 1.0)]).unwrap();
        let ray = Ray::new_with(
            &Point::new_with(0.0, 5.0, -5.0), &Vector::new_with(0.0, 0.0, 1.0), 0.0);
        assert!(grid.intersect(&ray, ::std::f32::MAX).is_none());
        assert!(!grid.intersect_p(&ray, ::std::f32::MAX));
    }

    #[test]
    fn traversal_finds_the_nearer_of_two_spheres_along_the_ray() {
        // S3: spheres at x=-2 and x=+2, ray entering from x=-10 along +x.
        let grid = Grid::new(vec![
            sphere_at(Vector::new_with(-2.0, 0.0, 0.0), 1.0),
            sphere_at(Vector::new_with(2.0, 0.0, 0.0), 1.0)
        ]).unwrap();
        let ray = Ray::new_with(
            &Point::new_with(-10.0, 0.0, 0.0), &Vector::new_with(1.0, 0.0, 0.0), 0.0);
        let hit = grid.intersect(&ray, ::std::f32::MAX).unwrap();
        assert!((hit.t_hit - 7.0).abs() < 1e-3);
    }

    #[test]
    fn a_tmax_before_the_hit_is_reported_as_a_miss() {
        let grid = Grid::new(vec![sphere_at(Vector::new(), 1.0)]).unwrap();
        let ray = Ray::new_with(
            &Point::new_with(0.0, 0.0, -5.0), &Vector::new_with(0.0, 0.0, 1.0), 0.0);
        assert!(grid.intersect(&ray, 3.0).is_none());
        assert!(!grid.intersect_p(&ray, 3.0));
    }

    #[test]
    fn every_voxel_touching_a_primitives_bounds_holds_a_reference_to_it() {
        // Build invariant: a single sphere spanning several voxels must be
        // reachable from every voxel its bounds overlap, not just one.
        let grid = Grid::new(vec![sphere_at(Vector::new(), 1.0)]).unwrap();
        let touched = grid.voxels.iter().filter(|v| v.is_some()).count();
        assert!(touched > 1);
        for v in grid.voxels.iter().filter_map(|v| v.as_ref()) {
            assert_eq!(v.primitive_indices, vec![0]);
        }
    }
}
