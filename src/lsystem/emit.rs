use geometry::vector::Vector;
use lsystem::turtle::{Polygon, Tube};
use shape::Shape;
use transform::transform::Transform;

/// Turns captured tubes and polygons into render-ready shapes under the
/// caller's object<->render transforms. A tube becomes a cylinder plus a
/// hemisphere cap at each end; a polygon becomes its fan-triangulated faces.
pub struct ShapeEmitter;

impl ShapeEmitter {
    pub fn emit(tubes: &[Tube], polygons: &[Polygon],
                render_from_object: &Transform, object_from_render: &Transform) -> Vec<Shape> {
        let mut shapes = Vec::with_capacity(3 * tubes.len());

        for tube in tubes {
            let delta = &tube.p1 - &tube.p0;
            let height = delta.length();
            let dir = delta.normalize();

            let object_from_start =
                Transform::translate(&Vector::from(tube.p0.clone())) *
                Transform::rotate_from_to(&Vector::new_with(0.0, 0.0, 1.0), &dir);
            let object_from_end =
                Transform::translate(&Vector::from(tube.p1.clone())) *
                Transform::rotate_from_to(&Vector::new_with(0.0, 0.0, 1.0), &dir);

            let start_to_render = render_from_object * &object_from_start;
            let end_to_render = render_from_object * &object_from_end;

            shapes.push(Shape::cylinder(
                start_to_render.clone(), start_to_render.inverse(),
                tube.radius, 0.0, height, 360.0));
            shapes.push(Shape::sphere(
                start_to_render.clone(), start_to_render.inverse(),
                tube.radius, -tube.radius, 0.0, 360.0));
            shapes.push(Shape::sphere(
                end_to_render.clone(), end_to_render.inverse(),
                tube.radius, 0.0, tube.radius, 360.0));
        }

        for polygon in polygons {
            for tri in &polygon.triangles {
                shapes.push(Shape::triangle(
                    render_from_object.clone(), object_from_render.clone(),
                    polygon.points[tri[0]].clone(),
                    polygon.points[tri[1]].clone(),
                    polygon.points[tri[2]].clone()));
            }
        }

        shapes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geometry::point::Point;

    #[test]
    fn a_tube_becomes_a_cylinder_and_two_hemisphere_caps() {
        let tubes = vec![Tube {
            p0: Point::new_with(0.0, 0.0, 0.0),
            p1: Point::new_with(0.0, 0.0, 1.0),
            radius: 0.1
        }];
        let shapes = ShapeEmitter::emit(&tubes, &[], &Transform::new(), &Transform::new());
        assert_eq!(shapes.len(), 3);
        assert!(matches!(shapes[0], Shape::Cylinder(_)));
        assert!(matches!(shapes[1], Shape::Sphere(_)));
        assert!(matches!(shapes[2], Shape::Sphere(_)));
    }

    #[test]
    fn a_polygon_emits_one_triangle_per_fan_index() {
        let polygon = Polygon {
            points: vec![
                Point::new_with(0.0, 0.0, 0.0),
                Point::new_with(1.0, 0.0, 0.0),
                Point::new_with(1.0, 1.0, 0.0),
                Point::new_with(0.0, 1.0, 0.0)
            ],
            triangles: vec![[0, 1, 2], [0, 2, 3]]
        };
        let shapes = ShapeEmitter::emit(&[], &[polygon], &Transform::new(), &Transform::new());
        assert_eq!(shapes.len(), 2);
        assert!(matches!(shapes[0], Shape::Triangle(_)));
        assert!(matches!(shapes[1], Shape::Triangle(_)));
    }

    #[test]
    fn no_tubes_or_polygons_emits_nothing() {
        let shapes = ShapeEmitter::emit(&[], &[], &Transform::new(), &Transform::new());
        assert!(shapes.is_empty());
    }
}
