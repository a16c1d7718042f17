use serde::Serialize;

use gildedrose_inventory::{Item, ItemSnapshot};

/// Banner printed once before the first day in text mode.
pub const BANNER: &str = "OMGHAI!";

/// Render one day as text: header, column line, one line per item, blank line.
pub fn render_text_day(day: u32, items: &[Item]) -> String {
    let mut out = format!("-------- day {day} --------\nname, sellIn, quality\n");
    for item in items {
        out.push_str(&item.to_string());
        out.push('\n');
    }
    out.push('\n');
    out
}

/// One day of the simulation, as emitted in JSON mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayReport {
    pub day: u32,
    pub items: Vec<ItemSnapshot>,
}

impl DayReport {
    pub fn new(day: u32, items: &[Item]) -> Self {
        Self {
            day,
            items: items.iter().map(ItemSnapshot::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_day_layout() {
        let items = vec![Item::new("Aged Brie", 2, 0), Item::new("Conjured Mana Cake", 3, 6)];
        assert_eq!(
            render_text_day(0, &items),
            "-------- day 0 --------\n\
             name, sellIn, quality\n\
             Aged Brie, 2, 0\n\
             Conjured Mana Cake, 3, 6\n\
             \n"
        );
    }

    #[test]
    fn day_report_json() {
        let report = DayReport::new(1, &[Item::new("Aged Brie", 1, 1)]);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "day": 1,
                "items": [{ "name": "Aged Brie", "sell_in": 1, "quality": 1 }]
            })
        );
    }
}
