//! 2026 festival calendar for campaign planning.

use chrono::NaiveDate;

/// One festival date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Festival {
    pub date: NaiveDate,
    pub name: &'static str,
}

impl Festival {
    /// Short date label, e.g. `Jan 14`.
    pub fn label(&self) -> String {
        self.date.format("%b %d").to_string()
    }
}

const FESTIVALS_2026: [(u32, u32, &str); 11] = [
    (1, 14, "Pongal"),
    (1, 26, "Republic Day"),
    (3, 4, "Holi"),
    (3, 20, "Ramzan"),
    (4, 14, "Tamil New Year"),
    (8, 15, "Independence Day"),
    (8, 26, "Onam"),
    (9, 14, "Ganesh Chaturthi"),
    (10, 20, "Ayudha Puja"),
    (11, 8, "Diwali"),
    (12, 25, "Christmas"),
];

/// All 2026 festivals in date order.
pub fn festivals_2026() -> Vec<Festival> {
    FESTIVALS_2026
        .iter()
        .filter_map(|&(month, day, name)| {
            NaiveDate::from_ymd_opt(2026, month, day).map(|date| Festival { date, name })
        })
        .collect()
}

/// Festivals falling on or after `from`.
pub fn upcoming(from: NaiveDate) -> Vec<Festival> {
    festivals_2026()
        .into_iter()
        .filter(|festival| festival.date >= from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_eleven_ordered_rows() {
        let festivals = festivals_2026();
        assert_eq!(festivals.len(), 11);
        assert!(festivals.windows(2).all(|w| w[0].date < w[1].date));
        assert_eq!(festivals[0].label(), "Jan 14");
        assert_eq!(festivals[9].name, "Diwali");
        assert_eq!(festivals[9].label(), "Nov 08");
    }

    #[test]
    fn upcoming_includes_same_day() {
        let from = NaiveDate::from_ymd_opt(2026, 11, 8).unwrap();
        let names: Vec<_> = upcoming(from).iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["Diwali", "Christmas"]);
    }
}
