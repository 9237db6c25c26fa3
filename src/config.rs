use crate::error::{HashError, HashResult};

/// Length of the zero-filled input buffer used by the catalog comparison.
pub const HASH_BUFFER_SIZE: usize = 8;

/// Seed handed to every seeded 32-bit computation.
pub const XXHASH32_SEED: u32 = 1471;

/// Key length of the 64-bit keyed family and of the fallible keyed family.
pub const MAC_KEY_SIZE: usize = 16;

/// Key length of the 32-bit keyed family.
pub const SHORT_KEY_SIZE: usize = 8;

/// Largest digest an [`Output`](crate::Output) can hold.
pub const MAX_OUTPUT_SIZE: usize = 64;

pub const DEFAULT_SWEEP_SIZES: [usize; 6] = [0, 8, 128, 256, 512, 1024];

/// Environment variable overriding the sweep sizes, e.g. `0,64,4096`.
pub const SWEEP_SIZES_ENV: &str = "HASH_COMPARISON_SIZES";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    buffer_size: usize,
    sweep_sizes: Vec<usize>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            buffer_size: HASH_BUFFER_SIZE,
            sweep_sizes: DEFAULT_SWEEP_SIZES.to_vec(),
        }
    }
}

impl BenchConfig {
    pub fn with_sweep_sizes(sweep_sizes: Vec<usize>) -> HashResult<Self> {
        if sweep_sizes.is_empty() {
            return Err(HashError::Config("empty sweep".to_string()));
        }
        Ok(Self {
            sweep_sizes,
            ..Self::default()
        })
    }

    /// Reads sweep sizes from [`SWEEP_SIZES_ENV`]. Unset means defaults.
    pub fn from_env() -> HashResult<Self> {
        match std::env::var(SWEEP_SIZES_ENV) {
            Ok(raw) => Self::with_sweep_sizes(parse_sizes(&raw)?),
            Err(std::env::VarError::NotPresent) => Ok(Self::default()),
            Err(err) => Err(HashError::Config(format!("{}: {}", SWEEP_SIZES_ENV, err))),
        }
    }

    /// Like [`BenchConfig::from_env`], but logs and falls back to defaults.
    pub fn from_env_or_default() -> Self {
        Self::from_env().unwrap_or_else(|err| {
            log::warn!("{}, using default sweep sizes", err);
            Self::default()
        })
    }

    pub fn buffer_size(&self) -> usize {
        self.buffer_size
    }

    pub fn sweep_sizes(&self) -> &[usize] {
        &self.sweep_sizes
    }
}

pub fn parse_sizes(raw: &str) -> HashResult<Vec<usize>> {
    let mut sizes = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<usize>()
                .map_err(|err| HashError::Config(format!("bad size {:?}: {}", s, err)))
        })
        .collect::<HashResult<Vec<usize>>>()?;
    sizes.sort_unstable();
    sizes.dedup();

    Ok(sizes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BenchConfig::default();
        assert_eq!(config.buffer_size(), 8);
        assert_eq!(config.sweep_sizes(), &DEFAULT_SWEEP_SIZES[..]);
    }

    #[test]
    fn test_parse_sizes() {
        assert_eq!(parse_sizes("1024, 0,8,8").unwrap(), vec![0, 8, 1024]);
        assert_eq!(parse_sizes(" 64 ,").unwrap(), vec![64]);
        assert!(parse_sizes("8,-1").is_err());
        assert!(parse_sizes("eight").is_err());
    }

    #[test]
    fn test_empty_sweep_rejected() {
        assert!(BenchConfig::with_sweep_sizes(vec![]).is_err());
        let config = BenchConfig::with_sweep_sizes(vec![16]).unwrap();
        // the catalog buffer size is not affected by the sweep
        assert_eq!(config.buffer_size(), HASH_BUFFER_SIZE);
    }
}
