//! Survey schema normalization and platform export pipeline.
//!
//! Raw model text goes in one end ([`parse_survey_response`]), a validated
//! [`Survey`] comes out, and [`optimize_survey`] turns it into the wire shape
//! of an export destination (currently Google Forms). Both stages are pure
//! and synchronous; the HTTP route handlers around them own all I/O.

pub mod error;
pub mod forms;
pub mod optimize;
pub mod pipeline;
pub mod prompt;
pub mod survey;
pub mod util;

pub use error::{ConvertError, ImportError, PipelineError, ValidateError};
pub use forms::convert::convert_to_google_forms;
pub use forms::import::parse_import_payload;
pub use forms::requests::{create_form_request, create_item_requests, update_description_request};
pub use forms::types::GoogleFormsForm;
pub use optimize::{optimize_survey, Platform, PlatformDocument};
pub use pipeline::generate_and_optimize;
pub use prompt::generation_prompt;
pub use survey::parse::parse_survey_response;
pub use survey::types::{QuestionType, Survey, SurveyQuestion};
