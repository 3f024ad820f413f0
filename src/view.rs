//! Screen state: which view is showing and which chart panels are expanded.

use crate::chart::ChartKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Calculator,
    Report,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewAction {
    GenerateReport,
    Back,
}

impl ViewMode {
    /// Next screen for `action`. Generating a report is allowed with a zero total.
    pub fn apply(self, action: ViewAction) -> ViewMode {
        match action {
            ViewAction::GenerateReport => ViewMode::Report,
            ViewAction::Back => ViewMode::Calculator,
        }
    }
}

/// "Show detail table" flag for each chart, flipped independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChartToggles {
    insurance: bool,
    tech_fund: bool,
}

impl ChartToggles {
    pub fn is_shown(&self, kind: ChartKind) -> bool {
        match kind {
            ChartKind::Insurance => self.insurance,
            ChartKind::TechFund => self.tech_fund,
        }
    }

    pub fn toggled(mut self, kind: ChartKind) -> Self {
        match kind {
            ChartKind::Insurance => self.insurance = !self.insurance,
            ChartKind::TechFund => self.tech_fund = !self.tech_fund,
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_calculator() {
        assert_eq!(ViewMode::default(), ViewMode::Calculator);
    }

    #[test]
    fn back_from_calculator_stays_put() {
        assert_eq!(
            ViewMode::Calculator.apply(ViewAction::Back),
            ViewMode::Calculator
        );
    }

    #[test]
    fn toggling_twice_restores() {
        let toggles = ChartToggles::default()
            .toggled(ChartKind::TechFund)
            .toggled(ChartKind::TechFund);
        assert_eq!(toggles, ChartToggles::default());
    }
}
