pub mod board;
pub mod config;
pub mod error;
pub mod extraction;
pub mod processor;
pub mod sanitize;
pub mod store;

pub use board::{JobBoard, StageButton, StagePanel};
pub use config::{discover_config, load_config, Config, DiscoveredConfig};
pub use error::{ConfigError, ExtractError, JobtrackError, Result, StoreError};
pub use extraction::{compose_job_name, extract_job_name, Extraction, NO_JOB_NAME};
pub use processor::{is_pdf_path, PdfTextExtractor, TextExtractor};
pub use store::{JobStore, LoadStatus, Stage};
