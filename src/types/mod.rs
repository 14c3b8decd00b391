pub mod job;
pub mod resume;

pub use job::JobData;
pub use resume::{sample_resume, Education, Experience, PersonalInfo, ResumeData};
