use geometry::point::Point;
use geometry::vector::Vector;

#[derive(Debug, Clone)]
pub struct Ray {
    pub o: Point,
    pub d: Vector,
    pub mint: f32
}

impl Ray {
    pub fn new() -> Ray {
        Ray { o: Point::new(), d: Vector::new(), mint: 0f32 }
    }

    pub fn new_with(origin: &Point, dir: &Vector, start: f32) -> Ray {
        Ray { o: origin.clone(), d: dir.clone(), mint: start }
    }

    pub fn at(&self, t: f32) -> Point {
        &self.o + &self.d * t
    }

    pub fn set_mint(&mut self, t: f32) { self.mint = t }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_can_be_created() {
        let r = Ray::new();
        assert_eq!(r.o, Point::new());
        assert_eq!(r.d, Vector::new());
        assert_eq!(r.mint, 0f32);
    }

    #[test]
    fn it_evaluates_a_point_along_its_direction() {
        let r = Ray::new_with(
            &Point::new_with(0.0, 0.0, 0.0), &Vector::new_with(1.0, 0.0, 0.0), 0.0);
        assert_eq!(r.at(3.0), Point::new_with(3.0, 0.0, 0.0));
    }
}
