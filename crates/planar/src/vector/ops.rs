//! Operator impls. `Vector * Vector` is the dot product; scalars scale.

use super::Vector;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

impl Add for Vector {
    type Output = Vector;
    #[inline]
    fn add(self, rhs: Vector) -> Vector {
        Vector::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Add<&Vector> for &Vector {
    type Output = Vector;
    #[inline]
    fn add(self, rhs: &Vector) -> Vector {
        *self + *rhs
    }
}

impl AddAssign for Vector {
    #[inline]
    fn add_assign(&mut self, rhs: Vector) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vector {
    type Output = Vector;
    #[inline]
    fn sub(self, rhs: Vector) -> Vector {
        Vector::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Sub<&Vector> for &Vector {
    type Output = Vector;
    #[inline]
    fn sub(self, rhs: &Vector) -> Vector {
        *self - *rhs
    }
}

impl SubAssign for Vector {
    #[inline]
    fn sub_assign(&mut self, rhs: Vector) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Neg for Vector {
    type Output = Vector;
    #[inline]
    fn neg(self) -> Vector {
        Vector::new(-self.x, -self.y)
    }
}

impl Mul for Vector {
    type Output = f64;
    #[inline]
    fn mul(self, rhs: Vector) -> f64 {
        self.dot(rhs)
    }
}

impl Mul<&Vector> for &Vector {
    type Output = f64;
    #[inline]
    fn mul(self, rhs: &Vector) -> f64 {
        self.dot(*rhs)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;
    #[inline]
    fn mul(self, s: f64) -> Vector {
        Vector::new(self.x * s, self.y * s)
    }
}

impl Mul<Vector> for f64 {
    type Output = Vector;
    #[inline]
    fn mul(self, v: Vector) -> Vector {
        v.scale(self)
    }
}

impl MulAssign<f64> for Vector {
    #[inline]
    fn mul_assign(&mut self, s: f64) {
        self.x *= s;
        self.y *= s;
    }
}

impl Div<f64> for Vector {
    type Output = Vector;
    #[inline]
    fn div(self, s: f64) -> Vector {
        Vector::new(self.x / s, self.y / s)
    }
}

impl DivAssign<f64> for Vector {
    #[inline]
    fn div_assign(&mut self, s: f64) {
        self.x /= s;
        self.y /= s;
    }
}
