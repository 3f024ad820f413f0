mod calculator;
mod directory;
mod icons;
mod layout;
mod line_chart;
mod report;
mod savings;

pub use calculator::CalculatorPanel;
pub use directory::{BranchDirectory, CharityLinks};
pub use layout::Layout;
pub use report::ReportPanel;
pub use savings::SavingsSection;
