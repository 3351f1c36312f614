use geometry::point::Point;
use geometry::vector::Dot;
use geometry::vector::Vector;
use lsystem::error::LSystemError;
use transform::transform::ApplyTransform;
use transform::transform::Transform;

/// A capped cylinder's endpoints and radius, emitted by `>`.
#[derive(Debug, Clone, PartialEq)]
pub struct Tube {
    pub p0: Point,
    pub p1: Point,
    pub radius: f32
}

/// Points captured between `{` and `}`, with a fan triangulation: for every
/// point added at index `i >= 2`, the triangle `{0, i-1, i}`.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub points: Vec<Point>,
    pub triangles: Vec<[usize; 3]>
}

impl Polygon {
    fn new() -> Polygon {
        Polygon { points: Vec::new(), triangles: Vec::new() }
    }

    fn add_point(&mut self, p: Point) {
        self.points.push(p);
        let i = self.points.len() - 1;
        if i >= 2 {
            self.triangles.push([0, i - 1, i]);
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TurtleState {
    pub step_size: f32,
    pub radius: f32,
    pub position: Point,
    pub front: Vector,
    pub right: Vector
}

impl TurtleState {
    fn up(&self) -> Vector { self.front.clone().cross(&self.right) }
}

/// Stack-based virtual machine that consumes a rewritten L-system sequence
/// and produces tubes and polygons. Unrecognized characters are a no-op;
/// stack underflow and mismatched polygon delimiters are fatal, matching the
/// construction-time error handling of the rest of this crate. `@` outside
/// an open polygon is logged and otherwise ignored.
pub struct TurtleInterpreter {
    state: TurtleState,
    angle: f32,
    radius_scale: f32,
    stack: Vec<TurtleState>,
    tubes: Vec<Tube>,
    polygon: Option<Polygon>,
    polygons: Vec<Polygon>
}

impl TurtleInterpreter {
    pub fn new(step_size: f32, radius: f32, angle: f32, radius_scale: f32) -> TurtleInterpreter {
        TurtleInterpreter {
            state: TurtleState {
                step_size,
                radius,
                position: Point::new(),
                front: Vector::new_with(0.0, 0.0, 1.0),
                right: Vector::new_with(1.0, 0.0, 0.0)
            },
            angle,
            radius_scale,
            stack: Vec::new(),
            tubes: Vec::new(),
            polygon: None,
            polygons: Vec::new()
        }
    }

    pub fn tubes(&self) -> &[Tube] { &self.tubes }
    pub fn polygons(&self) -> &[Polygon] { &self.polygons }

    fn rotate_about(&self, axis: &Vector, angle: f32, v: &Vector) -> Vector {
        Transform::rotate(angle, axis).t(v).normalize()
    }

    pub fn run(&mut self, sequence: &str) -> Result<(), LSystemError> {
        for c in sequence.chars() {
            self.step(c)?;
        }
        Ok(())
    }

    fn step(&mut self, c: char) -> Result<(), LSystemError> {
        match c {
            '>' => {
                let old = self.state.position.clone();
                let next = &old + &(self.state.front.clone() * self.state.step_size);
                self.tubes.push(Tube { p0: old, p1: next.clone(), radius: self.state.radius });
                self.state.position = next;
            }
            '~' => {
                self.state.position = &self.state.position +
                    &(self.state.front.clone() * self.state.step_size);
            }
            '+' => {
                let right = self.state.right.clone();
                self.state.front = self.rotate_about(&right, self.angle, &self.state.front);
            }
            '-' => {
                let right = self.state.right.clone();
                self.state.front = self.rotate_about(&right, -self.angle, &self.state.front);
            }
            '&' => {
                let up = self.state.up();
                self.state.front = self.rotate_about(&up, self.angle, &self.state.front);
                self.state.right = self.rotate_about(&up, self.angle, &self.state.right);
            }
            '^' => {
                let up = self.state.up();
                self.state.front = self.rotate_about(&up, -self.angle, &self.state.front);
                self.state.right = self.rotate_about(&up, -self.angle, &self.state.right);
            }
            '`' => {
                let front = self.state.front.clone();
                self.state.right = self.rotate_about(&front, self.angle, &self.state.right);
            }
            '/' => {
                let front = self.state.front.clone();
                self.state.right = self.rotate_about(&front, -self.angle, &self.state.right);
            }
            '|' => {
                let right = self.state.right.clone();
                self.state.front = self.rotate_about(&right, 180.0, &self.state.front);
            }
            '(' => self.stack.push(self.state.clone()),
            ')' => {
                self.state = self.stack.pop().ok_or(LSystemError::PopOnEmptyStack)?;
            }
            '\'' => self.state.radius *= self.radius_scale,
            '{' => {
                if self.polygon.is_some() {
                    return Err(LSystemError::NestedPolygon);
                }
                self.polygon = Some(Polygon::new());
            }
            '}' => {
                match self.polygon.take() {
                    Some(p) => self.polygons.push(p),
                    None => return Err(LSystemError::DanglingPolygonEnd)
                }
            }
            '@' => {
                match self.polygon {
                    Some(ref mut p) => p.add_point(self.state.position.clone()),
                    None => warn!("'@' outside an open polygon, ignoring")
                }
            }
            _ => {}
        }
        Ok(())
    }
}
