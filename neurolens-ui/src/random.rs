//! Browser random source

use neurolens::RandomSource;

/// Draws from `Math.random()`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserRandom;

impl RandomSource for BrowserRandom {
    fn next_unit(&mut self) -> f64 {
        js_sys::Math::random()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use neurolens::Sentiment;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_draws_in_unit_range() {
        let mut rng = BrowserRandom;
        for _ in 0..1000 {
            let draw = rng.next_unit();
            assert!((0.0..1.0).contains(&draw));
        }
        assert!(Sentiment::ALL.contains(&Sentiment::sample(&mut rng)));
    }
}
