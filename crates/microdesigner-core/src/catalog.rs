//! The compiled-in service catalog and toolbox entries
//!
//! Records are created once at startup and never mutated, added or removed.

use serde::Serialize;

use crate::types::{
    CanvasPosition, ServiceCategory, ServiceMetrics, ServiceRecord, ServiceStatus,
};

/// Position of the card for service `"1"`
const PRIMARY_CARD_POSITION: CanvasPosition = CanvasPosition::new(4, 1);

/// Position used for every other card
const SECONDARY_CARD_POSITION: CanvasPosition = CanvasPosition::new(24, 7);

/// Fixed canvas coordinate for a card, keyed by service id.
///
/// There is no layout algorithm: id `"1"` sits top-left and anything else
/// sits further down and to the right.
pub fn canvas_position(id: &str) -> CanvasPosition {
    if id == "1" {
        PRIMARY_CARD_POSITION
    } else {
        SECONDARY_CARD_POSITION
    }
}

/// A capability listed in the toolbox panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ToolboxEntry {
    pub label: &'static str,
    pub category: ServiceCategory,
}

/// Toolbox capabilities, in display order
pub const TOOLBOX_ENTRIES: [ToolboxEntry; 3] = [
    ToolboxEntry {
        label: "Microservice",
        category: ServiceCategory::Service,
    },
    ToolboxEntry {
        label: "Database",
        category: ServiceCategory::Database,
    },
    ToolboxEntry {
        label: "API Gateway",
        category: ServiceCategory::Gateway,
    },
];

/// Ordered, immutable list of service records
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceCatalog {
    services: Vec<ServiceRecord>,
}

impl ServiceCatalog {
    /// The two sample services shown on the canvas
    pub fn sample() -> Self {
        Self {
            services: vec![
                ServiceRecord {
                    id: "1".to_string(),
                    name: "Auth Service".to_string(),
                    status: ServiceStatus::Running,
                    category: ServiceCategory::Service,
                    description: "Handles user authentication and authorization".to_string(),
                    metrics: ServiceMetrics {
                        cpu_percent: 25.0,
                        memory_mb: 256,
                        requests_per_minute: 150,
                    },
                    endpoints: vec![
                        "/api/auth/login".to_string(),
                        "/api/auth/register".to_string(),
                        "/api/auth/verify".to_string(),
                    ],
                },
                ServiceRecord {
                    id: "2".to_string(),
                    name: "User Service".to_string(),
                    status: ServiceStatus::Stopped,
                    category: ServiceCategory::Service,
                    description: "Manages user profiles and preferences".to_string(),
                    metrics: ServiceMetrics {
                        cpu_percent: 0.0,
                        memory_mb: 0,
                        requests_per_minute: 0,
                    },
                    endpoints: vec![
                        "/api/users".to_string(),
                        "/api/users/:id".to_string(),
                        "/api/users/profile".to_string(),
                    ],
                },
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ServiceRecord> {
        self.services.iter()
    }

    pub fn get(&self, index: usize) -> Option<&ServiceRecord> {
        self.services.get(index)
    }

    /// Index of the record with the given id
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.services.iter().position(|s| s.id == id)
    }

    pub fn find(&self, id: &str) -> Option<&ServiceRecord> {
        self.services.iter().find(|s| s.id == id)
    }
}
