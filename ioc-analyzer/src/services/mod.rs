pub mod prompt;
pub mod providers;
pub mod report;

pub use prompt::incident_prompt;
pub use providers::{GenerationParams, InferenceProvider, ProviderError};
pub use report::render_report;
