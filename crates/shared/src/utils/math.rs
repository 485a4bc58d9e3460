/// Rounds half away from zero to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::round2;

    #[test]
    fn rounds_to_two_places() {
        assert_eq!(round2(3.7), 3.7);
        assert_eq!(round2(85.666_666), 85.67);
        assert_eq!(round2(2.004), 2.0);
    }
}
