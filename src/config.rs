/// Fraction des cœurs logiques allouée au pool de workers.
pub const CORE_USAGE_RATIO: f64 = 0.60;

/// Dimensionnement du pool, calculé une seule fois au lancement.
///
/// Le nombre de cœurs est injecté par l'appelant (et non lu via un global)
/// pour rester testable avec des valeurs arbitraires.
#[derive(Clone, Copy, Debug)]
pub struct PoolConfig {
    pub total_cores: usize,
    pub workers: usize,
    pub chunksize: usize,
}

impl PoolConfig {
    pub fn new(total_cores: usize, file_count: usize) -> Self {
        let workers = (total_cores as f64 * CORE_USAGE_RATIO) as usize;
        let workers = workers.max(1);
        Self {
            total_cores,
            workers,
            chunksize: (file_count / workers).max(1),
        }
    }

    /// Pourcentage de cœurs réellement utilisés, pour l'affichage.
    pub fn utilization_percent(&self) -> f64 {
        self.workers as f64 / self.total_cores as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn worker_count_is_sixty_percent_floored() {
        let expected = [(1, 1), (2, 1), (3, 1), (5, 3), (10, 6)];
        for (cores, workers) in expected {
            assert_eq!(PoolConfig::new(cores, 4).workers, workers, "cores={cores}");
        }
    }

    #[test]
    fn worker_count_never_exceeds_total_cores() {
        for cores in 1..=64 {
            let pool = PoolConfig::new(cores, 10);
            assert!(pool.workers >= 1);
            assert!(pool.workers <= pool.total_cores);
        }
    }

    #[test]
    fn chunksize_is_integer_division_with_floor_one() {
        assert_eq!(PoolConfig::new(10, 20).chunksize, 3); // 20 / 6
        assert_eq!(PoolConfig::new(10, 2).chunksize, 1);
        assert_eq!(PoolConfig::new(1, 0).chunksize, 1);
    }
}
