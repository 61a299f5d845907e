use serde::{Deserialize, Serialize};

use super::catalog;

/// Version of the in-memory survey schema. Bump alongside
/// [`super::profile::PROFILE_SCHEMA_VERSION`] whenever the mapping in
/// [`super::materializer::profile_from_survey`] has to change shape.
pub const SURVEY_SCHEMA_VERSION: u32 = 1;

/// Answers collected across the multi-section skills survey. Wire names are
/// the form's own input names, so payloads recorded by the browser client
/// deserialize unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SurveyRecord {
    pub full_name: String,
    pub email: String,
    pub location: String,
    pub role: String,
    pub experience: String,
    pub skills: Vec<String>,
    pub ai_proficiency: String,
    pub ai_tools: Vec<String>,
    pub languages: String,
    pub has_projects: String,
    pub project_description: String,
    pub client_work: String,
    pub interests: Vec<String>,
    pub learning_style: String,
}

impl SurveyRecord {
    pub fn scalar(&self, field: ScalarField) -> &str {
        match field {
            ScalarField::FullName => &self.full_name,
            ScalarField::Email => &self.email,
            ScalarField::Location => &self.location,
            ScalarField::Role => &self.role,
            ScalarField::Experience => &self.experience,
            ScalarField::AiProficiency => &self.ai_proficiency,
            ScalarField::Languages => &self.languages,
            ScalarField::HasProjects => &self.has_projects,
            ScalarField::ProjectDescription => &self.project_description,
            ScalarField::ClientWork => &self.client_work,
            ScalarField::LearningStyle => &self.learning_style,
        }
    }

    pub(crate) fn scalar_mut(&mut self, field: ScalarField) -> &mut String {
        match field {
            ScalarField::FullName => &mut self.full_name,
            ScalarField::Email => &mut self.email,
            ScalarField::Location => &mut self.location,
            ScalarField::Role => &mut self.role,
            ScalarField::Experience => &mut self.experience,
            ScalarField::AiProficiency => &mut self.ai_proficiency,
            ScalarField::Languages => &mut self.languages,
            ScalarField::HasProjects => &mut self.has_projects,
            ScalarField::ProjectDescription => &mut self.project_description,
            ScalarField::ClientWork => &mut self.client_work,
            ScalarField::LearningStyle => &mut self.learning_style,
        }
    }

    /// Current selections of a multi-valued field, in selection order.
    pub fn members(&self, field: MultiValueField) -> &[String] {
        match field {
            MultiValueField::Skills => &self.skills,
            MultiValueField::AiTools => &self.ai_tools,
            MultiValueField::Interests => &self.interests,
        }
    }

    pub(crate) fn members_mut(&mut self, field: MultiValueField) -> &mut Vec<String> {
        match field {
            MultiValueField::Skills => &mut self.skills,
            MultiValueField::AiTools => &mut self.ai_tools,
            MultiValueField::Interests => &mut self.interests,
        }
    }
}

/// Scalar survey inputs, addressable by form wire name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScalarField {
    FullName,
    Email,
    Location,
    Role,
    Experience,
    AiProficiency,
    Languages,
    HasProjects,
    ProjectDescription,
    ClientWork,
    LearningStyle,
}

impl ScalarField {
    pub const fn wire_name(self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::Email => "email",
            Self::Location => "location",
            Self::Role => "role",
            Self::Experience => "experience",
            Self::AiProficiency => "aiProficiency",
            Self::Languages => "languages",
            Self::HasProjects => "hasProjects",
            Self::ProjectDescription => "projectDescription",
            Self::ClientWork => "clientWork",
            Self::LearningStyle => "learningStyle",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "fullName" => Some(Self::FullName),
            "email" => Some(Self::Email),
            "location" => Some(Self::Location),
            "role" => Some(Self::Role),
            "experience" => Some(Self::Experience),
            "aiProficiency" => Some(Self::AiProficiency),
            "languages" => Some(Self::Languages),
            "hasProjects" => Some(Self::HasProjects),
            "projectDescription" => Some(Self::ProjectDescription),
            "clientWork" => Some(Self::ClientWork),
            "learningStyle" => Some(Self::LearningStyle),
            _ => None,
        }
    }
}

/// Multi-valued (checkbox group) survey inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MultiValueField {
    Skills,
    AiTools,
    Interests,
}

impl MultiValueField {
    pub const fn wire_name(self) -> &'static str {
        match self {
            Self::Skills => "skills",
            Self::AiTools => "aiTools",
            Self::Interests => "interests",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "skills" => Some(Self::Skills),
            "aiTools" => Some(Self::AiTools),
            "interests" => Some(Self::Interests),
            _ => None,
        }
    }

    /// The fixed option list this field draws from.
    pub fn options(self) -> &'static [&'static str] {
        match self {
            Self::Skills => catalog::SKILL_OPTIONS,
            Self::AiTools => catalog::AI_TOOL_OPTIONS,
            Self::Interests => catalog::INTEREST_OPTIONS,
        }
    }
}

/// One named-field update event from the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldMutation {
    /// Replace a scalar input's value outright.
    Scalar { field: ScalarField, value: String },
    /// Toggle membership of one option in a checkbox group.
    Membership {
        field: MultiValueField,
        value: String,
        selected: bool,
    },
}

impl FieldMutation {
    /// Resolve a raw wire event into a typed mutation. Checkbox events only
    /// ever address multi-valued fields; anything that does not resolve is
    /// dropped by returning `None`, matching the form's behavior of ignoring
    /// unrecognized input names.
    pub fn from_wire(field: &str, value: String, selected: Option<bool>) -> Option<Self> {
        match selected {
            Some(selected) => MultiValueField::parse(field).map(|field| Self::Membership {
                field,
                value,
                selected,
            }),
            None => ScalarField::parse(field).map(|field| Self::Scalar { field, value }),
        }
    }
}
