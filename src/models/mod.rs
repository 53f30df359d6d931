pub mod common_code;
pub mod resume;

pub use common_code::{CodeCategory, CommonCode, default_codes};
pub use resume::{
    Activity, BasicInfo, Career, Certificate, Education, Resume, ResumeStep, Skill, SkillLevel,
};
