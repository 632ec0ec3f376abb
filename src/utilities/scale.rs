// src/utilities/scale.rs
//
// Value-to-pixel and value-to-bucket scales for the sliders and the
// globe overlay fills

/// Maps [0, domain_max] linearly onto a pixel range.
/// Values outside the domain are clamped.
#[derive(Debug, Clone)]
pub struct LinearScale {
    domain_max: f32,
    range: (f32, f32),
}

impl LinearScale {
    pub fn new(domain_max: f32, range: (f32, f32)) -> Self {
        Self { domain_max, range }
    }

    pub fn set_range(&mut self, range: (f32, f32)) {
        self.range = range;
    }

    pub fn domain_max(&self) -> f32 {
        self.domain_max
    }

    pub fn map(&self, value: f32) -> f32 {
        // An empty domain pins everything to the range start
        if self.domain_max <= 0.0 {
            return self.range.0;
        }
        let t = (value / self.domain_max).clamp(0.0, 1.0);
        self.range.0 + (self.range.1 - self.range.0) * t
    }
}

/// Equal-width quantization of [0, domain_max] into `buckets` slices.
/// domain_max itself lands in the last bucket.
pub fn quantize(value: u64, domain_max: u64, buckets: usize) -> usize {
    if domain_max == 0 || buckets == 0 {
        return 0;
    }
    let raw = (value as f64 / domain_max as f64 * buckets as f64).floor() as usize;
    raw.min(buckets - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_map_endpoints() {
        let scale = LinearScale::new(100.0, (8.0, 208.0));
        assert!((scale.map(0.0) - 8.0).abs() < 1e-6);
        assert!((scale.map(100.0) - 208.0).abs() < 1e-6);
        assert!((scale.map(50.0) - 108.0).abs() < 1e-6);
    }

    #[test]
    fn test_linear_map_is_monotonic() {
        let scale = LinearScale::new(100.0, (0.0, 400.0));
        let mut last = scale.map(0.0);
        for v in 1..=100 {
            let x = scale.map(v as f32);
            assert!(x >= last);
            last = x;
        }
    }

    #[test]
    fn test_linear_map_clamps_out_of_domain() {
        let scale = LinearScale::new(100.0, (0.0, 400.0));
        assert_eq!(scale.map(250.0), 400.0);
        assert_eq!(scale.map(-10.0), 0.0);
    }

    #[test]
    fn test_linear_map_empty_domain() {
        let scale = LinearScale::new(0.0, (8.0, 208.0));
        assert_eq!(scale.map(42.0), 8.0);
    }

    #[test]
    fn test_quantize_stays_in_bounds() {
        for v in 0..=1000u64 {
            let bucket = quantize(v, 1000, 8);
            assert!(bucket < 8);
        }
    }

    #[test]
    fn test_quantize_example_buckets() {
        // export values [0, 50, 100] against a max of 100 and 8 buckets
        assert_eq!(quantize(0, 100, 8), 0);
        assert_eq!(quantize(50, 100, 8), 4);
        assert_eq!(quantize(100, 100, 8), 7);
    }

    #[test]
    fn test_quantize_zero_domain() {
        assert_eq!(quantize(0, 0, 8), 0);
        assert_eq!(quantize(17, 0, 7), 0);
    }
}
