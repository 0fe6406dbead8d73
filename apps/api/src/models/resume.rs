use serde::{Deserialize, Serialize};

/// Resume content edited in the Content Builder step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeData {
    #[serde(alias = "personalInfo")]
    pub personal_info: Option<PersonalInfo>,
    pub education: Vec<Education>,
    pub experience: Vec<Experience>,
    pub projects: Vec<Project>,
    pub leadership: Vec<Leadership>,
    #[serde(alias = "technicalSkills")]
    pub technical_skills: TechnicalSkills,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalInfo {
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    pub id: String,
    #[serde(alias = "universityName")]
    pub university_name: String,
    pub degree: String,
    pub location: String,
    #[serde(alias = "datesAttended")]
    pub dates_attended: String,
    pub coursework: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    pub id: String,
    #[serde(alias = "jobTitle")]
    pub job_title: String,
    pub company: String,
    pub location: String,
    pub dates: String,
    /// Stored resumes call this field `description`.
    #[serde(alias = "description")]
    pub achievements: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub id: String,
    #[serde(alias = "projectName")]
    pub project_name: String,
    pub technologies: String,
    pub date: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Leadership {
    pub id: String,
    pub role: String,
    pub organization: String,
    pub dates: String,
    #[serde(alias = "description")]
    pub achievements: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TechnicalSkills {
    pub languages: String,
    #[serde(alias = "developerTools")]
    pub developer_tools: String,
    #[serde(alias = "technologiesFrameworks")]
    pub technologies_frameworks: String,
}

impl ResumeData {
    /// Trimmed personal-info name, if one has been entered.
    pub fn display_name(&self) -> Option<&str> {
        self.personal_info
            .as_ref()
            .map(|info| info.name.trim())
            .filter(|name| !name.is_empty())
    }
}

impl TechnicalSkills {
    pub fn is_empty(&self) -> bool {
        self.languages.trim().is_empty()
            && self.developer_tools.trim().is_empty()
            && self.technologies_frameworks.trim().is_empty()
    }
}
