use serde::Serialize;

/// A day-level archive node: all content published on one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayArchive {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

/// A month-level archive node holding the days that have content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthArchive {
    pub year: i32,
    pub month: u32,
    days: Vec<DayArchive>,
}

impl MonthArchive {
    pub fn new(year: i32, month: u32) -> Self {
        Self {
            year,
            month,
            days: Vec::new(),
        }
    }

    pub fn day(&self, day: u32) -> Option<&DayArchive> {
        self.days.iter().find(|d| d.day == day)
    }

    pub fn days(&self) -> &[DayArchive] {
        &self.days
    }

    fn record_day(&mut self, day: u32) {
        if self.day(day).is_none() {
            let node = DayArchive {
                year: self.year,
                month: self.month,
                day,
            };
            let pos = self
                .days
                .iter()
                .position(|d| d.day > day)
                .unwrap_or(self.days.len());
            self.days.insert(pos, node);
        }
    }
}

/// A year-level archive node holding the months that have content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearArchive {
    pub year: i32,
    months: Vec<MonthArchive>,
}

impl YearArchive {
    pub fn new(year: i32) -> Self {
        Self {
            year,
            months: Vec::new(),
        }
    }

    pub fn month(&self, month: u32) -> Option<&MonthArchive> {
        self.months.iter().find(|m| m.month == month)
    }

    pub fn months(&self) -> &[MonthArchive] {
        &self.months
    }

    /// Record a published date in this year's hierarchy, creating the
    /// month node on first use.
    pub fn record(&mut self, month: u32, day: u32) {
        match self.months.iter_mut().find(|m| m.month == month) {
            Some(node) => node.record_day(day),
            None => {
                let mut node = MonthArchive::new(self.year, month);
                node.record_day(day);
                let pos = self
                    .months
                    .iter()
                    .position(|m| m.month > month)
                    .unwrap_or(self.months.len());
                self.months.insert(pos, node);
            }
        }
    }
}
