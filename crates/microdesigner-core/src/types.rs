//! Service domain types
//!
//! A [`ServiceRecord`] is display data only: nothing in MicroDesigner
//! starts, stops or measures a real service.

use serde::{Deserialize, Serialize};

/// Display status of a service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Running,
    Stopped,
}

impl ServiceStatus {
    /// Lowercase label used on canvas cards
    pub fn label(&self) -> &'static str {
        match self {
            ServiceStatus::Running => "running",
            ServiceStatus::Stopped => "stopped",
        }
    }

    /// Uppercase label used on the details badge
    pub fn badge(&self) -> &'static str {
        match self {
            ServiceStatus::Running => "RUNNING",
            ServiceStatus::Stopped => "STOPPED",
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self, ServiceStatus::Running)
    }

    /// Label of the start/stop button for a service in this status.
    ///
    /// The button is inert; the label only mirrors the current status.
    pub fn toggle_label(&self) -> &'static str {
        match self {
            ServiceStatus::Running => "Stop Service",
            ServiceStatus::Stopped => "Start Service",
        }
    }
}

impl std::fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Kind of component a record represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceCategory {
    Service,
    Database,
    Gateway,
}

impl ServiceCategory {
    pub fn badge(&self) -> &'static str {
        match self {
            ServiceCategory::Service => "SERVICE",
            ServiceCategory::Database => "DATABASE",
            ServiceCategory::Gateway => "GATEWAY",
        }
    }
}

impl std::fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceCategory::Service => write!(f, "service"),
            ServiceCategory::Database => write!(f, "database"),
            ServiceCategory::Gateway => write!(f, "gateway"),
        }
    }
}

/// Resource figures shown in the details modal. No bounds are enforced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ServiceMetrics {
    /// CPU usage in percent
    pub cpu_percent: f64,
    /// Resident memory in megabytes
    pub memory_mb: u64,
    /// Requests handled per minute
    pub requests_per_minute: u64,
}

impl ServiceMetrics {
    pub fn cpu_display(&self) -> String {
        format!("{}%", self.cpu_percent)
    }

    pub fn memory_display(&self) -> String {
        format!("{} MB", self.memory_mb)
    }

    pub fn requests_display(&self) -> String {
        self.requests_per_minute.to_string()
    }
}

/// A static description of a hypothetical microservice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceRecord {
    /// Unique identifier within the catalog
    pub id: String,
    pub name: String,
    pub status: ServiceStatus,
    pub category: ServiceCategory,
    pub description: String,
    pub metrics: ServiceMetrics,
    /// Endpoint paths, in display order
    pub endpoints: Vec<String>,
}

/// Top-left corner of a card, in cells, relative to the canvas interior
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasPosition {
    pub x: u16,
    pub y: u16,
}

impl CanvasPosition {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_labels() {
        assert_eq!(ServiceStatus::Running.label(), "running");
        assert_eq!(ServiceStatus::Stopped.badge(), "STOPPED");
        assert_eq!(ServiceStatus::Running.to_string(), "running");
    }

    #[test]
    fn test_toggle_label_follows_status() {
        assert_eq!(ServiceStatus::Running.toggle_label(), "Stop Service");
        assert_eq!(ServiceStatus::Stopped.toggle_label(), "Start Service");
    }

    #[test]
    fn test_category_badges() {
        assert_eq!(ServiceCategory::Service.badge(), "SERVICE");
        assert_eq!(ServiceCategory::Database.badge(), "DATABASE");
        assert_eq!(ServiceCategory::Gateway.badge(), "GATEWAY");
    }

    #[test]
    fn test_metrics_display_whole_numbers() {
        let metrics = ServiceMetrics {
            cpu_percent: 25.0,
            memory_mb: 256,
            requests_per_minute: 150,
        };
        assert_eq!(metrics.cpu_display(), "25%");
        assert_eq!(metrics.memory_display(), "256 MB");
        assert_eq!(metrics.requests_display(), "150");
    }

    #[test]
    fn test_metrics_display_fractional_cpu() {
        let metrics = ServiceMetrics {
            cpu_percent: 12.5,
            memory_mb: 0,
            requests_per_minute: 0,
        };
        assert_eq!(metrics.cpu_display(), "12.5%");
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&ServiceStatus::Stopped).unwrap();
        assert_eq!(json, "\"stopped\"");
    }
}
