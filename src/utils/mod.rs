pub trait Lerp<F = Self> {
    fn lerp(&self, b: &Self, t: F) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, b: &f32, t: f32) -> f32 {
        self * (1f32 - t) + b * t
    }
}

impl Lerp for f64 {
    fn lerp(&self, b: &f64, t: f64) -> f64 {
        self * (1f64 - t) + b * t
    }
}

pub trait Clamp<T = Self> {
    fn clamp(self, a: T, b: T) -> Self;
}

// These need no actual implementation since we can just use the default...
fn clamp_num<T: Copy+PartialOrd>(x: T, a: T, b: T) -> T {
    if x.lt(&a) { a } else if x.gt(&b) { b } else { x }
}

impl Clamp for f32 { fn clamp(self, a: f32, b: f32) -> f32 { clamp_num(self, a, b) } }
impl Clamp for f64 { fn clamp(self, a: f64, b: f64) -> f64 { clamp_num(self, a, b) } }
impl Clamp for i8  { fn clamp(self, a: i8, b: i8) -> i8 { clamp_num(self, a, b) } }
impl Clamp for i16 { fn clamp(self, a: i16, b: i16) -> i16 { clamp_num(self, a, b) } }
impl Clamp for i32 { fn clamp(self, a: i32, b: i32) -> i32 { clamp_num(self, a, b) } }
impl Clamp for i64 { fn clamp(self, a: i64, b: i64) -> i64 { clamp_num(self, a, b) } }
impl Clamp for u8  { fn clamp(self, a: u8, b: u8) -> u8 { clamp_num(self, a, b) } }
impl Clamp for u16 { fn clamp(self, a: u16, b: u16) -> u16 { clamp_num(self, a, b) } }
impl Clamp for u32 { fn clamp(self, a: u32, b: u32) -> u32 { clamp_num(self, a, b) } }
impl Clamp for u64 { fn clamp(self, a: u64, b: u64) -> u64 { clamp_num(self, a, b) } }
impl Clamp for usize { fn clamp(self, a: usize, b: usize) -> usize { clamp_num(self, a, b) } }

pub trait Degrees {
    fn as_radians(self) -> Self;
    fn as_degrees(self) -> Self;
}

impl Degrees for f32 {
    fn as_radians(self) -> f32 {
        self * ::std::f32::consts::PI / 180f32
    }

    fn as_degrees(self) -> f32 {
        self * 180f32 / ::std::f32::consts::PI
    }
}

impl Degrees for f64 {
    fn as_radians(self) -> f64 {
        self * ::std::f64::consts::PI / 180f64
    }

    fn as_degrees(self) -> f64 {
        self * 180f64 / ::std::f64::consts::PI
    }
}

pub fn quadratic(a: f32, b: f32, c: f32) -> Option<(f32, f32)> {
    // Find quadratic discriminant
    let descrim = b * b - 4f32 * a * c;
    if descrim < 0.0 {
        return None;
    } else if descrim.abs() < 1e-6 {
        if a == 0.0 {
            return None;
        } else {
            let t = -b / (2.0 * a);
            return Some((t, t));
        }
    }

    let root_descrim = descrim.sqrt();

    // Compute quadratic t values
    let q = {
        if b < 0.0 {
            -0.5f32 * (b - root_descrim)
        } else {
            -0.5f32 * (b + root_descrim)
        }
    };

    if a == 0.0 {
        return None;
    }

    // Pretty sure this can never happen
    assert!(q != 0.0);

    let t0 = q / a;
    let t1 = c / q;

    if t0 < t1 { Some((t0, t1)) } else { Some((t1, t0)) }
}

pub fn solve_linear_system_2x2(a: [[f32; 2]; 2], b: [f32; 2])
                               -> Option<(f32, f32)> {
    let det = a[0][0] * a[1][1] - a[0][1] * a[1][0];
    if det.abs() < 1e-10 {
        return None;
    }

    let inv_det = 1.0 / det;
    let x0 = (a[1][1] * b[0] - a[0][1] * b[1]) * inv_det;
    let x1 = (a[0][0] * b[1] - a[1][0] * b[0]) * inv_det;

    if x0.is_nan() || x1.is_nan() {
        None
    } else {
        Some((x0, x1))
    }
}

pub fn partition_by<T, F, B>(v: &mut [T], f: F)
    where F: Fn(&T) -> B, B: Copy+PartialOrd
{
    let nv = v.len();
    if nv < 3 {
        if nv == 2 {
            if f(&v[1]) < f(&v[0]) {
                v.swap(0, 1);
            }
        }
        return;
    }

    let pivot = {
        // Median of three...
        let fst = f(&v[0]);
        let mid = f(&v[nv / 2]);
        let lst = f(&v[nv - 1]);

        if fst < mid && mid < lst {
            mid
        } else if mid < fst && fst < lst {
            fst
        } else {
            lst
        }
    };

    let mut last_smaller = 0;
    let mut num_pivots = 0;
    for i in 0..nv {
        let bv = f(&v[i]);
        if bv < pivot {
            v.swap(last_smaller + num_pivots, i);
            v.swap(last_smaller + num_pivots, last_smaller);
            last_smaller += 1;
        } else if bv == pivot {
            v.swap(last_smaller + num_pivots, i);
            num_pivots += 1;
        }
    }
    let mut pivot_idx = last_smaller;

    // We can do this because if pivot_idx == 0, then all
    // of the values are larger than the pivot...
    pivot_idx = ::std::cmp::max(pivot_idx, 1);

    let (left, right) = v.split_at_mut(pivot_idx);

    debug_assert!(right.len() > 0);
    debug_assert!(left.len() > 0);

    if pivot_idx + num_pivots <= (nv / 2) {
        partition_by(right, f);
    } else if pivot_idx >= (nv / 2) {
        partition_by(left, f);
    }
}

fn get_num_subwindows_2d(count: usize, aspect: usize) -> (usize, usize) {
    let mut nx = 1;
    let mut ny = count;
    while (ny % 2) == 0 && 2*aspect*nx < ny {
        ny /= 2;
        nx *= 2;
    }

    (nx, ny)
}

// Aspect is ratio of x to y dimension
pub fn get_crop_window(num: usize, count: usize,
                       aspect: f32) -> (f32, f32, f32, f32) {
    let (nx, ny) = if aspect < 1.0 {
        // Y dimension is larger than X
        let inva = (1.0 / aspect) as usize;
        get_num_subwindows_2d(count, inva)
    } else {
        let (x, y) = get_num_subwindows_2d(count, aspect as usize);
        (y, x)
    };

    // Compute x and y pixel sample range for sub window
    let xo = num % nx;
    let yo = num / nx;

    let tx0 = (xo as f32) / (nx as f32);
    let tx1 = ((xo + 1) as f32) / (nx as f32);

    let ty0 = (yo as f32) / (ny as f32);
    let ty1 = ((yo + 1) as f32) / (ny as f32);

    (tx0, tx1, ty0, ty1)
}

pub fn modulo(a: i32, b: i32) -> i32 {
    let n = a / b;
    let x = a - n * b;
    if x < 0 { x + b } else { x }
}
