//! Buildings, floors and the dropdown options built from them.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BuildingId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FloorId(pub u32);

impl fmt::Display for BuildingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl fmt::Display for FloorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A physical structure grouping floors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Building {
    pub id: BuildingId,
    pub name: String,
}

/// A level within a building with its floor-plan image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Floor {
    pub id: FloorId,
    pub name: String,
    /// URL of the SVG floor plan.
    #[serde(rename = "floorImg")]
    pub floor_img: String,
}

/// One `<option>` of a dropdown: the id as its value, the name as its label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// Anything that can be listed in a dropdown.
pub trait Selectable {
    fn option_value(&self) -> String;
    fn option_label(&self) -> &str;
}

impl Selectable for Building {
    fn option_value(&self) -> String {
        self.id.to_string()
    }

    fn option_label(&self) -> &str {
        &self.name
    }
}

impl Selectable for Floor {
    fn option_value(&self) -> String {
        self.id.to_string()
    }

    fn option_label(&self) -> &str {
        &self.name
    }
}

/// Dropdown options in list order.
pub fn select_options<T: Selectable>(items: &[T]) -> Vec<SelectOption> {
    items
        .iter()
        .map(|item| SelectOption {
            value: item.option_value(),
            label: item.option_label().to_string(),
        })
        .collect()
}

/// Parses a `<select>` value back into an id.
///
/// Option values are decimal ids; surrounding whitespace is tolerated.
pub fn parse_option_id(raw: &str) -> Option<u32> {
    raw.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floor_uses_floor_img_on_the_wire() {
        let floor: Floor =
            serde_json::from_str(r#"{"id": 2, "name": "1", "floorImg": "images/1.svg"}"#).unwrap();
        assert_eq!(floor.id, FloorId(2));
        assert_eq!(floor.floor_img, "images/1.svg");

        let json = serde_json::to_value(&floor).unwrap();
        assert_eq!(json["floorImg"], "images/1.svg");
        assert_eq!(json["id"], 2);
    }

    #[test]
    fn options_keep_order_and_use_ids_as_values() {
        let buildings = vec![
            Building {
                id: BuildingId(7),
                name: "Building 7".to_string(),
            },
            Building {
                id: BuildingId(3),
                name: "Building 3".to_string(),
            },
        ];
        let options = select_options(&buildings);
        assert_eq!(
            options,
            vec![
                SelectOption {
                    value: "7".to_string(),
                    label: "Building 7".to_string()
                },
                SelectOption {
                    value: "3".to_string(),
                    label: "Building 3".to_string()
                },
            ]
        );
    }

    #[test]
    fn option_ids_parse_loosely() {
        assert_eq!(parse_option_id("4"), Some(4));
        assert_eq!(parse_option_id(" 11 "), Some(11));
        assert_eq!(parse_option_id(""), None);
        assert_eq!(parse_option_id("four"), None);
        assert_eq!(parse_option_id("-1"), None);
    }
}
