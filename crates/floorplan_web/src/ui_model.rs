//! UI models that should be available on both wasm and native.
//!
//! Keeping these out of the wasm-only `web` module allows us to unit-test the
//! status line on the host.

/// What the status line under the dropdowns shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PanelStatus {
    #[default]
    Idle,
    Loading {
        floor: String,
    },
    Ready {
        floor: String,
        regions: usize,
    },
    /// The current dropdown value does not match any floor.
    NoFloor,
    Failed(String),
}

impl PanelStatus {
    pub fn text(&self) -> String {
        match self {
            PanelStatus::Idle => String::new(),
            PanelStatus::Loading { floor } => format!("Loading floor {floor}…"),
            PanelStatus::Ready { floor, regions } => match regions {
                0 => format!("Floor {floor}: no clickable regions"),
                1 => format!("Floor {floor}: 1 clickable region"),
                n => format!("Floor {floor}: {n} clickable regions"),
            },
            PanelStatus::NoFloor => "No floor selected".to_string(),
            PanelStatus::Failed(message) => format!("Failed: {message}"),
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            PanelStatus::Failed(_) => "status error",
            PanelStatus::Loading { .. } => "status busy",
            _ => "status",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ready_text_counts_regions() {
        let s = PanelStatus::Ready {
            floor: "4".to_string(),
            regions: 12,
        };
        assert_eq!(s.text(), "Floor 4: 12 clickable regions");

        let s = PanelStatus::Ready {
            floor: "1".to_string(),
            regions: 1,
        };
        assert_eq!(s.text(), "Floor 1: 1 clickable region");
    }

    #[test]
    fn idle_is_blank_and_failures_are_flagged() {
        assert!(PanelStatus::Idle.text().is_empty());
        let failed = PanelStatus::Failed("HTTP 404".to_string());
        assert_eq!(failed.text(), "Failed: HTTP 404");
        assert_eq!(failed.class(), "status error");
    }
}
