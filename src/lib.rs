use rand::Rng;
use thiserror::Error;

/// Fixed seed so reruns with the same parameters write identical files.
pub const SEED: u64 = 4242;

#[derive(Debug, Error, PartialEq)]
pub enum ParamError {
    #[error("expected two tokens: <size> <sparsity>")]
    MissingToken,
    #[error("bad size: {0:?}")]
    BadSize(String),
    #[error("bad sparsity: {0:?}")]
    BadSparsity(String),
    #[error("size must be at least 3, got {0}")]
    SizeTooSmall(u64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Params {
    pub size: u64,
    pub sparsity: f64,
}

impl Params {
    /// Parse `<size> <sparsity>` from one line of input.
    pub fn parse(line: &str) -> Result<Params, ParamError> {
        let mut tokens = line.split_whitespace();
        let size_token = tokens.next().ok_or(ParamError::MissingToken)?;
        let sparsity_token = tokens.next().ok_or(ParamError::MissingToken)?;

        let size = size_token
            .parse::<u64>()
            .map_err(|_| ParamError::BadSize(size_token.to_string()))?;
        let sparsity = fast_float::parse::<f64, _>(sparsity_token)
            .map_err(|_| ParamError::BadSparsity(sparsity_token.to_string()))?;

        // The sampling interval [1, size-2] is empty below 3.
        if size < 3 {
            return Err(ParamError::SizeTooSmall(size));
        }

        Ok(Params { size, sparsity })
    }

    /// Number of coordinate pairs to generate: size^2 * sparsity, truncated.
    /// A negative product clamps to 0.
    pub fn pair_count(&self) -> u64 {
        (self.size as f64 * self.size as f64 * self.sparsity) as u64
    }

    /// Output file name, e.g. `10_0.5`. The sparsity keeps its fractional
    /// part even when integral (`3 0.0` writes `3_0.0`).
    pub fn file_name(&self) -> String {
        format!("{}_{:?}", self.size, self.sparsity)
    }
}

/// Draw `count` pairs, each coordinate uniform in `[1, size-2]`, x before y.
/// Requires `size >= 3`; `Params::parse` guarantees it.
pub fn generate_pairs<R: Rng>(rng: &mut R, size: u64, count: u64) -> Vec<(u64, u64)> {
    (0..count)
        .map(|_| {
            let x = rng.gen_range(1..=size - 2);
            let y = rng.gen_range(1..=size - 2);
            (x, y)
        })
        .collect()
}

/// File body: pair count, then one `x y` line per pair. No trailing newline.
pub fn render_lines(pairs: &[(u64, u64)]) -> String {
    let mut lines = vec![pairs.len().to_string()];
    lines.extend(pairs.iter().map(|&(x, y)| format!("{} {}", x, y)));
    lines.join("\n")
}
