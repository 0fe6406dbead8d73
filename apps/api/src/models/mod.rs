pub mod resume;

pub use resume::{
    Education, Experience, Leadership, PersonalInfo, Project, ResumeData, TechnicalSkills,
};
