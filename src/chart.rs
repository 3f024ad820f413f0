//! Static illustrative series for the savings section and the maths that lays
//! them out as SVG line charts.

use crate::format::{format_decimal, format_fixed, format_with_commas};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartKind {
    #[default]
    Insurance,
    TechFund,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawPoint {
    pub year: &'static str,
    pub value: f64,
}

const fn point(year: &'static str, value: f64) -> RawPoint {
    RawPoint { year, value }
}

/// Projected cash value of a savings plan, 1 March each year.
pub const SAVINGS_SERIES: [RawPoint; 30] = [
    point("2026", 206.0),
    point("2027", 206.0),
    point("2028", 101488.0),
    point("2029", 253320.0),
    point("2030", 472721.0),
    point("2031", 884527.0),
    point("2032", 1016061.0),
    point("2033", 1171978.0),
    point("2034", 1252074.0),
    point("2035", 1323611.0),
    point("2036", 1419295.0),
    point("2037", 1519882.0),
    point("2038", 1627345.0),
    point("2039", 1746275.0),
    point("2040", 1872332.0),
    point("2041", 2014524.0),
    point("2042", 2168158.0),
    point("2043", 2350676.0),
    point("2044", 2535444.0),
    point("2045", 2723872.0),
    point("2046", 2978155.0),
    point("2047", 3247208.0),
    point("2048", 3546902.0),
    point("2049", 3830195.0),
    point("2050", 4137653.0),
    point("2051", 4467238.0),
    point("2052", 4816896.0),
    point("2053", 5150432.0),
    point("2054", 5495148.0),
    point("2055", 5854771.0),
];

/// Technology fund unit price in USD, around the end of February each year.
pub const TECH_FUND_SERIES: [RawPoint; 19] = [
    point("2008", 25.75),
    point("2009", 17.12),
    point("2010", 28.02),
    point("2011", 35.57),
    point("2012", 37.16),
    point("2013", 38.01),
    point("2014", 47.04),
    point("2015", 52.13),
    point("2016", 48.05),
    point("2017", 62.17),
    point("2018", 86.97),
    point("2019", 86.31),
    point("2020", 98.10),
    point("2021", 153.40),
    point("2022", 150.11),
    point("2023", 126.93),
    point("2024", 192.15),
    point("2025", 218.96),
    point("2026", 283.54),
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndexedPoint {
    pub year: &'static str,
    pub value: f64,
    pub indexed: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TooltipContent {
    pub heading: String,
    pub indexed_line: String,
    pub raw_line: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub date: String,
    pub indexed: String,
    pub raw: String,
}

impl ChartKind {
    pub const ALL: [ChartKind; 2] = [ChartKind::Insurance, ChartKind::TechFund];

    pub fn series(self) -> &'static [RawPoint] {
        match self {
            ChartKind::Insurance => &SAVINGS_SERIES,
            ChartKind::TechFund => &TECH_FUND_SERIES,
        }
    }

    pub fn tab_label(self) -> &'static str {
        match self {
            ChartKind::Insurance => "保險儲蓄",
            ChartKind::TechFund => "科技基金",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ChartKind::Insurance => "模擬保險儲蓄計劃回報",
            ChartKind::TechFund => "科技基金過去18年表現",
        }
    }

    pub fn stroke(self) -> &'static str {
        match self {
            ChartKind::Insurance => "#dc2626",
            ChartKind::TechFund => "#059669",
        }
    }

    pub fn shows_dots(self) -> bool {
        matches!(self, ChartKind::TechFund)
    }

    pub fn y_axis_width(self) -> f64 {
        match self {
            ChartKind::Insurance => 50.0,
            ChartKind::TechFund => 40.0,
        }
    }

    /// Every n-th year gets an x-axis label.
    pub fn label_stride(self) -> usize {
        match self {
            ChartKind::Insurance => 5,
            ChartKind::TechFund => 3,
        }
    }

    pub fn table_headers(self) -> [&'static str; 3] {
        match self {
            ChartKind::Insurance => ["年份", "指數 (Base 100)", "預期回報"],
            ChartKind::TechFund => ["年份 (約2月底)", "指數 (Base 100)", "基金價格 (美元)"],
        }
    }

    pub fn points(self) -> Vec<IndexedPoint> {
        let series = self.series();
        let base = series.first().map(|p| p.value).unwrap_or(1.0);
        series
            .iter()
            .map(|p| IndexedPoint {
                year: p.year,
                value: p.value,
                indexed: indexed_value(p.value, base),
            })
            .collect()
    }

    pub fn tick_label(self, tick: f64) -> String {
        match self {
            ChartKind::Insurance if tick >= 1_000_000.0 => {
                format!("{:.1}M", tick / 1_000_000.0)
            }
            ChartKind::Insurance if tick >= 1_000.0 => format!("{:.0}k", tick / 1_000.0),
            _ => format!("{}", tick),
        }
    }

    fn raw_value(self, value: f64) -> String {
        match self {
            ChartKind::Insurance => format!("${}", format_with_commas(value.round() as u64)),
            ChartKind::TechFund => format!("${}", format_fixed(value, 2)),
        }
    }

    pub fn tooltip(self, point: &IndexedPoint) -> TooltipContent {
        let raw_label = match self {
            ChartKind::Insurance => "預期回報",
            ChartKind::TechFund => "基金價格",
        };
        TooltipContent {
            heading: format!("{}年", point.year),
            indexed_line: format!("指數 (Base 100): {}", format_decimal(point.indexed, 3)),
            raw_line: format!("{}: {}", raw_label, self.raw_value(point.value)),
        }
    }

    pub fn table_row(self, point: &IndexedPoint) -> TableRow {
        match self {
            ChartKind::Insurance => TableRow {
                date: format!("1-3-{}", point.year),
                indexed: format_decimal(point.indexed, 3),
                raw: self.raw_value(point.value),
            },
            ChartKind::TechFund => TableRow {
                date: point.year.to_string(),
                indexed: format_fixed(point.indexed, 2),
                raw: self.raw_value(point.value),
            },
        }
    }
}

/// `value` rescaled so `base` maps to 100, rounded to cents.
pub fn indexed_value(value: f64, base: f64) -> f64 {
    (value / base * 100.0 * 100.0).round() / 100.0
}

fn nice_step(raw: f64) -> f64 {
    let magnitude = 10f64.powf(raw.log10().floor());
    let normalized = raw / magnitude;
    let nice = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 2.5 {
        2.5
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Evenly spaced ticks from 0 up to the first round value at or above `max`.
pub fn axis_ticks(max: f64, intervals: usize) -> Vec<f64> {
    if max.is_nan() || max <= 0.0 || intervals == 0 {
        return vec![0.0, 1.0];
    }
    let step = nice_step(max / intervals as f64);
    let count = (max / step).ceil() as usize;
    (0..=count).map(|i| i as f64 * step).collect()
}

/// Plot area inside the SVG viewBox.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartGeometry {
    pub width: f64,
    pub height: f64,
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
    pub ticks: Vec<f64>,
    samples: usize,
}

impl ChartGeometry {
    pub const WIDTH: f64 = 600.0;
    pub const HEIGHT: f64 = 240.0;

    pub fn new(kind: ChartKind, points: &[IndexedPoint]) -> Self {
        let max = points.iter().map(|p| p.indexed).fold(0.0, f64::max);
        Self {
            width: Self::WIDTH,
            height: Self::HEIGHT,
            left: kind.y_axis_width(),
            right: Self::WIDTH - 5.0,
            top: 5.0,
            bottom: Self::HEIGHT - 30.0,
            ticks: axis_ticks(max, 4),
            samples: points.len(),
        }
    }

    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }

    fn y_max(&self) -> f64 {
        self.ticks.last().copied().unwrap_or(1.0)
    }

    pub fn x(&self, index: usize) -> f64 {
        if self.samples < 2 {
            return self.left;
        }
        self.left + (self.right - self.left) * index as f64 / (self.samples - 1) as f64
    }

    pub fn y(&self, value: f64) -> f64 {
        self.bottom - (self.bottom - self.top) * value / self.y_max()
    }

    /// `points` attribute for an SVG polyline through the indexed values.
    pub fn polyline(&self, points: &[IndexedPoint]) -> String {
        points
            .iter()
            .enumerate()
            .map(|(i, p)| format!("{:.1},{:.1}", self.x(i), self.y(p.indexed)))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Horizontal position of a sample as a percentage of the chart width.
    pub fn x_percent(&self, index: usize) -> f64 {
        self.x(index) / self.width * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indexed_series_start_at_100() {
        for kind in ChartKind::ALL {
            assert_eq!(kind.points()[0].indexed, 100.0);
        }
    }

    #[test]
    fn indexed_values_round_to_cents() {
        let last = *ChartKind::Insurance.points().last().unwrap();
        assert_eq!(last.indexed, 2842121.84);
        let last = *ChartKind::TechFund.points().last().unwrap();
        assert_eq!(last.indexed, 1101.13);
    }

    #[test]
    fn ticks_cover_the_maximum() {
        assert_eq!(axis_ticks(1101.13, 4), vec![0.0, 500.0, 1000.0, 1500.0]);
        assert_eq!(
            axis_ticks(2842121.84, 4),
            vec![0.0, 1_000_000.0, 2_000_000.0, 3_000_000.0]
        );
        assert_eq!(axis_ticks(0.0, 4), vec![0.0, 1.0]);
    }

    #[test]
    fn insurance_ticks_are_abbreviated() {
        let kind = ChartKind::Insurance;
        assert_eq!(kind.tick_label(0.0), "0");
        assert_eq!(kind.tick_label(2_400.0), "2k");
        assert_eq!(kind.tick_label(1_500_000.0), "1.5M");
        assert_eq!(ChartKind::TechFund.tick_label(1000.0), "1000");
    }

    #[test]
    fn tooltip_shows_label_index_and_raw_value() {
        let kind = ChartKind::TechFund;
        let points = kind.points();
        let tip = kind.tooltip(&points[12]);
        assert_eq!(tip.heading, "2020年");
        assert_eq!(tip.raw_line, "基金價格: $98.10");
        assert!(tip.indexed_line.starts_with("指數 (Base 100): "));

        let kind = ChartKind::Insurance;
        let tip = kind.tooltip(&kind.points()[29]);
        assert_eq!(tip.indexed_line, "指數 (Base 100): 2,842,121.84");
        assert_eq!(tip.raw_line, "預期回報: $5,854,771");
    }

    #[test]
    fn table_rows_follow_each_chart_format() {
        let row = ChartKind::Insurance.table_row(&ChartKind::Insurance.points()[0]);
        assert_eq!(row.date, "1-3-2026");
        assert_eq!(row.indexed, "100");
        assert_eq!(row.raw, "$206");

        let row = ChartKind::TechFund.table_row(&ChartKind::TechFund.points()[0]);
        assert_eq!(row.date, "2008");
        assert_eq!(row.indexed, "100.00");
        assert_eq!(row.raw, "$25.75");
    }

    #[test]
    fn geometry_maps_ends_of_the_plot() {
        let points = ChartKind::TechFund.points();
        let geometry = ChartGeometry::new(ChartKind::TechFund, &points);
        assert_eq!(geometry.x(0), geometry.left);
        assert_eq!(geometry.x(points.len() - 1), geometry.right);
        assert_eq!(geometry.y(0.0), geometry.bottom);
        assert_eq!(geometry.y(1500.0), geometry.top);
        assert_eq!(geometry.polyline(&points).split(' ').count(), points.len());
    }
}
