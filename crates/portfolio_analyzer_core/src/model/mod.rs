mod format;
mod portfolio;
mod results;

pub use format::render_amount;
pub use portfolio::Portfolio;
pub use results::AnalysisResult;
