use super::Vector;
use nalgebra::Vector2;

impl From<(f64, f64)> for Vector {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Vector::new(x, y)
    }
}

impl From<[f64; 2]> for Vector {
    #[inline]
    fn from([x, y]: [f64; 2]) -> Self {
        Vector::new(x, y)
    }
}

impl From<Vector> for (f64, f64) {
    #[inline]
    fn from(v: Vector) -> Self {
        (v.x, v.y)
    }
}

impl From<Vector> for [f64; 2] {
    #[inline]
    fn from(v: Vector) -> Self {
        [v.x, v.y]
    }
}

// Interop with nalgebra column vectors.
impl From<Vector2<f64>> for Vector {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Vector::new(v.x, v.y)
    }
}

impl From<Vector> for Vector2<f64> {
    #[inline]
    fn from(v: Vector) -> Self {
        Vector2::new(v.x, v.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn tuples_arrays_and_nalgebra() {
        let v = Vector::from((1.0, -2.0));
        assert_eq!(v, Vector::from([1.0, -2.0]));
        let t: (f64, f64) = v.into();
        assert_eq!(t, (1.0, -2.0));
        let a: [f64; 2] = v.into();
        assert_eq!(a, [1.0, -2.0]);
        let n: Vector2<f64> = v.into();
        assert_eq!(n, vector![1.0, -2.0]);
        assert_eq!(Vector::from(n), v);
        // dot agrees with nalgebra
        let w = Vector::new(3.0, 0.5);
        let nw: Vector2<f64> = w.into();
        assert_eq!(v * w, n.dot(&nw));
    }
}
