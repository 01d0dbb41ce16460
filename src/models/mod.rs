pub mod acknowledgement;
pub mod submission;

pub use acknowledgement::Acknowledgement;
pub use submission::{Submission, SubmissionFields};
