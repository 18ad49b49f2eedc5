/// Values a single coordinate may take, from `1.0` down to `0.0`.
///
/// `n_sections + 1` evenly spaced values; `n_sections == 0` gives `[1.0]`.
pub fn generate_grid(n_sections: usize) -> Vec<f64>
{
    if n_sections == 0
    {
        return vec![1.0];
    }

    (0..=n_sections)
        .rev()
        .map(|i| i as f64 / n_sections as f64)
        .collect()
}
