/// Price after taking `percent` off. `None` unless the price is positive and
/// the percentage lies within `0..=100`.
pub fn discounted_price(price: f64, percent: f64) -> Option<f64> {
    if price > 0.0 && (0.0..=100.0).contains(&percent) {
        Some(price - price * percent / 100.0)
    } else {
        None
    }
}

/// Amount saved by the discount, under the same rules as [`discounted_price`].
pub fn savings(price: f64, percent: f64) -> Option<f64> {
    discounted_price(price, percent).map(|final_price| price - final_price)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discounted_price() {
        assert_eq!(discounted_price(200.0, 25.0), Some(150.0));
        assert_eq!(discounted_price(80.0, 0.0), Some(80.0));
        assert_eq!(discounted_price(80.0, 100.0), Some(0.0));
        assert_eq!(savings(200.0, 25.0), Some(50.0));
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert_eq!(discounted_price(0.0, 10.0), None);
        assert_eq!(discounted_price(-5.0, 10.0), None);
        assert_eq!(discounted_price(100.0, -1.0), None);
        assert_eq!(discounted_price(100.0, 100.5), None);
        assert_eq!(discounted_price(100.0, f64::NAN), None);
        assert_eq!(savings(0.0, 10.0), None);
    }
}
