#[inline]
#[must_use]
pub fn dot(x: &[f64], y: &[f64]) -> f64 {
    x.iter().zip(y).fold(0.0, |dot, (xi, yi)| dot + xi * yi)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_ok() {
        assert!((dot(&[1.0, 2.0, 3.0], &[3.0, 5.0, 7.0]) - 34.0).abs() < f64::EPSILON);
    }

    #[test]
    fn dot_empty_ok() {
        assert_eq!(dot(&[], &[]), 0.0);
    }
}
