//! Fabricated operating-point metrics for the demo endpoints.
//!
//! Nothing here is measured. The numbers describe a plausible steady state
//! for a service that does not exist.

use serde::Serialize;

/// Aggregate build counters and latency figures.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PerformanceMetrics {
    pub total_builds: u64,
    pub successful_builds: u64,
    pub failed_builds: u64,
    pub success_rate: f64,
    pub average_build_time_seconds: f64,
    pub queue_length: u32,
    pub estimated_wait_time_seconds: u32,
}

/// Host resource utilization percentages.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SystemResources {
    pub cpu_usage_percent: f64,
    pub memory_usage_percent: f64,
    pub disk_usage_percent: f64,
}

/// Intended build limits reported by the health endpoint.
///
/// Documentation of the operating envelope, not enforced constraints.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PerformanceConstraints {
    pub max_build_time_seconds: u64,
    pub max_memory_usage_mb: u64,
    pub max_deploy_time_seconds: u64,
}

/// Figures reported once a simulated build completes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CompletedBuildStats {
    pub build_time_seconds: f64,
    pub memory_usage_mb: u64,
    pub deploy_time_seconds: f64,
}

pub const PERFORMANCE_METRICS: PerformanceMetrics = PerformanceMetrics {
    total_builds: 1247,
    successful_builds: 1198,
    failed_builds: 49,
    success_rate: 96.1,
    average_build_time_seconds: 5.8,
    queue_length: 0,
    estimated_wait_time_seconds: 0,
};

pub const SYSTEM_RESOURCES: SystemResources = SystemResources {
    cpu_usage_percent: 23.5,
    memory_usage_percent: 67.2,
    disk_usage_percent: 45.8,
};

pub const PERFORMANCE_CONSTRAINTS: PerformanceConstraints = PerformanceConstraints {
    max_build_time_seconds: 8,
    max_memory_usage_mb: 512,
    max_deploy_time_seconds: 30,
};

pub const COMPLETED_BUILD_STATS: CompletedBuildStats = CompletedBuildStats {
    build_time_seconds: 6.2,
    memory_usage_mb: 384,
    deploy_time_seconds: 12.5,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_rate_is_a_percentage() {
        assert!((0.0..=100.0).contains(&PERFORMANCE_METRICS.success_rate));
    }

    #[test]
    fn build_counters_add_up() {
        assert_eq!(
            PERFORMANCE_METRICS.successful_builds + PERFORMANCE_METRICS.failed_builds,
            PERFORMANCE_METRICS.total_builds
        );
    }

    #[test]
    fn resource_figures_are_percentages() {
        for v in [
            SYSTEM_RESOURCES.cpu_usage_percent,
            SYSTEM_RESOURCES.memory_usage_percent,
            SYSTEM_RESOURCES.disk_usage_percent,
        ] {
            assert!((0.0..=100.0).contains(&v));
        }
    }
}
