//! Tests for color norms and neighborhood means

#[cfg(test)]
mod tests {
    use image::Rgba;
    use strictwang::math::color::{mean_color, norm, norm_difference, opaque};

    // Tests the norm is the Euclidean RGB length ignoring alpha
    // Verified by including alpha in the sum
    #[test]
    fn test_norm_ignores_alpha() {
        assert!((norm(Rgba([3, 4, 0, 0])) - 5.0).abs() < f64::EPSILON);
        assert!((norm(Rgba([3, 4, 0, 255])) - 5.0).abs() < f64::EPSILON);
        assert!(norm(Rgba([0, 0, 0, 255])).abs() < f64::EPSILON);
    }

    // Tests equally bright colors of different hue have no difference
    // Verified by comparing channels instead of norms
    #[test]
    fn test_norm_difference_of_equal_brightness_is_zero() {
        let red = Rgba([255, 0, 0, 255]);
        let blue = Rgba([0, 0, 255, 255]);

        assert!(norm_difference(red, blue).abs() < f64::EPSILON);
        assert!((norm_difference(red, Rgba([0, 0, 0, 255])) - 255.0).abs() < 1e-9);
    }

    // Tests the mean uses integer division per channel and is opaque
    // Verified by rounding instead of truncating
    #[test]
    fn test_mean_color_truncates() {
        let colors = [
            Rgba([0, 0, 255, 10]),
            Rgba([255, 0, 0, 10]),
            Rgba([255, 1, 0, 10]),
        ];

        assert_eq!(mean_color(&colors), Some(Rgba([170, 0, 85, 255])));
    }

    // Tests empty input has no mean
    // Verified by returning black for empty input
    #[test]
    fn test_mean_color_empty() {
        assert_eq!(mean_color(&[]), None);
    }

    // Tests opaque keeps color channels
    // Verified by clearing the red channel
    #[test]
    fn test_opaque() {
        assert_eq!(opaque(Rgba([1, 2, 3, 0])), Rgba([1, 2, 3, 255]));
    }
}
