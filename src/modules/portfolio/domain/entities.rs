//! Portfolio content records and the document keys they persist under.
//!
//! Wire format is camelCase JSON, matching the documents already in the
//! store. List sections persist as `{ "items": [...] }`; single sections
//! persist their fields at the document root plus `updatedAt`.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use utoipa::ToSchema;

use super::duration;
use super::validate::{require, require_url_shape, ValidationContext, ValidationError};

/// Every section document lives under this collection.
pub const PORTFOLIO_COLLECTION: &str = "portfolio";

//
// ──────────────────────────────────────────────────────────
// Section kinds
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ListKind {
    Projects,
    Certificates,
    Achievements,
    Skills,
    Educations,
    Experiences,
    SocialWorks,
}

impl ListKind {
    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "projects" => Some(Self::Projects),
            "certificates" => Some(Self::Certificates),
            "achievements" => Some(Self::Achievements),
            "skills" => Some(Self::Skills),
            "educations" => Some(Self::Educations),
            "experiences" => Some(Self::Experiences),
            "socialworks" => Some(Self::SocialWorks),
            _ => None,
        }
    }

    /// Name of the stored document. `experiances` is the legacy spelling the
    /// existing data uses; changing it would orphan every stored experience.
    pub fn document_name(&self) -> &'static str {
        match self {
            Self::Projects => "projects",
            Self::Certificates => "certificates",
            Self::Achievements => "achievements",
            Self::Skills => "skills",
            Self::Educations => "educations",
            Self::Experiences => "experiances",
            Self::SocialWorks => "socialworks",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SingleKind {
    Profile,
    About,
    Contact,
    Footer,
    Settings,
}

impl SingleKind {
    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "profile" => Some(Self::Profile),
            "about" => Some(Self::About),
            "contact" => Some(Self::Contact),
            "footer" => Some(Self::Footer),
            "settings" => Some(Self::Settings),
            _ => None,
        }
    }

    pub fn document_name(&self) -> &'static str {
        match self {
            Self::Profile => "profile",
            Self::About => "about",
            Self::Contact => "contact",
            Self::Footer => "footer",
            Self::Settings => "settings",
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Entity traits
// ──────────────────────────────────────────────────────────
//

/// A record living inside a list document. The editor owns identity: `id`
/// and `createdAt` are assigned once at creation and survive every later
/// edit; `updatedAt` is refreshed on each save.
pub trait ListEntity:
    Clone + PartialEq + Default + Serialize + DeserializeOwned + Send + Sync + 'static
{
    const KIND: ListKind;

    fn id(&self) -> &str;
    fn created_at(&self) -> Option<DateTime<Utc>>;
    fn assign_identity(&mut self, id: String, created_at: Option<DateTime<Utc>>);
    fn touch(&mut self, now: DateTime<Utc>);
    fn validate(&self, ctx: &ValidationContext) -> Result<(), ValidationError>;

    /// Where an uploaded image URL lands; `None` for image-less entities.
    fn image_slot(&mut self) -> Option<&mut String> {
        None
    }
    fn image_url(&self) -> Option<&str> {
        None
    }
    /// Blob path prefix for this entity's uploads.
    fn image_category(&self) -> &'static str {
        "images"
    }

    /// Recompute derived fields from the rest of the draft. Runs after every
    /// draft bind and again at submit.
    fn refresh_derived(&mut self, _today: NaiveDate) {}
}

/// A record persisted as its own document (no list, no delete).
pub trait SingleEntity:
    Clone + PartialEq + Default + Serialize + DeserializeOwned + Send + Sync + 'static
{
    const KIND: SingleKind;

    fn touch(&mut self, now: DateTime<Utc>);
    fn validate(&self, ctx: &ValidationContext) -> Result<(), ValidationError>;

    fn image_slot(&mut self) -> Option<&mut String> {
        None
    }
    fn image_url(&self) -> Option<&str> {
        None
    }
    fn image_category(&self) -> &'static str {
        "images"
    }
}

//
// ──────────────────────────────────────────────────────────
// Field enums
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum SkillCategory {
    Frontend,
    Backend,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum SkillLevel {
    Basic,
    Intermediate,
    Experienced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum EducationLevel {
    #[serde(rename = "Higher Education")]
    HigherEducation,
    #[serde(rename = "School Education")]
    SchoolEducation,
    #[serde(rename = "Professional Qualification")]
    ProfessionalQualification,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ImagePosition {
    #[default]
    Left,
    Right,
}

//
// ──────────────────────────────────────────────────────────
// List records
// ──────────────────────────────────────────────────────────
//

macro_rules! list_identity {
    () => {
        fn id(&self) -> &str {
            &self.id
        }

        fn created_at(&self) -> Option<DateTime<Utc>> {
            self.created_at
        }

        fn assign_identity(&mut self, id: String, created_at: Option<DateTime<Utc>>) {
            self.id = id;
            self.created_at = created_at;
        }

        fn touch(&mut self, now: DateTime<Utc>) {
            self.updated_at = Some(now);
        }
    };
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub id: String,
    pub project_name: String,
    pub about: String,
    pub technologies: String,
    pub github: String,
    pub website: String,
    pub photo_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl ListEntity for Project {
    const KIND: ListKind = ListKind::Projects;

    list_identity!();

    fn validate(&self, ctx: &ValidationContext) -> Result<(), ValidationError> {
        if !ctx.has_image {
            return Err(ValidationError::new("photo", "Project photo is required."));
        }
        require("projectName", &self.project_name, "Project Name is required.")?;
        require("about", &self.about, "About project is required.")?;
        require(
            "technologies",
            &self.technologies,
            "Used technologies are required.",
        )?;
        Ok(())
    }

    fn image_slot(&mut self) -> Option<&mut String> {
        Some(&mut self.photo_url)
    }

    fn image_url(&self) -> Option<&str> {
        Some(&self.photo_url)
    }

    fn image_category(&self) -> &'static str {
        "projects"
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Certificate {
    pub id: String,
    pub course_name: String,
    /// Free-text course length ("6 weeks"); not derived, unlike the
    /// date-ranged sections.
    pub duration: String,
    pub photo_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl ListEntity for Certificate {
    const KIND: ListKind = ListKind::Certificates;

    list_identity!();

    fn validate(&self, ctx: &ValidationContext) -> Result<(), ValidationError> {
        if !ctx.has_image {
            return Err(ValidationError::new(
                "photo",
                "Certificate photo is required.",
            ));
        }
        require(
            "courseName",
            &self.course_name,
            "Completed course name or certificate is required.",
        )?;
        Ok(())
    }

    fn image_slot(&mut self) -> Option<&mut String> {
        Some(&mut self.photo_url)
    }

    fn image_url(&self) -> Option<&str> {
        Some(&self.photo_url)
    }

    fn image_category(&self) -> &'static str {
        "certificates"
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Achievement {
    pub id: String,
    pub achievement_name: String,
    pub year: String,
    pub photo_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl ListEntity for Achievement {
    const KIND: ListKind = ListKind::Achievements;

    list_identity!();

    fn validate(&self, ctx: &ValidationContext) -> Result<(), ValidationError> {
        if !ctx.has_image {
            return Err(ValidationError::new("photo", "Award photo is required."));
        }
        require(
            "achievementName",
            &self.achievement_name,
            "Award or achievement name is required.",
        )?;
        Ok(())
    }

    fn image_slot(&mut self) -> Option<&mut String> {
        Some(&mut self.photo_url)
    }

    fn image_url(&self) -> Option<&str> {
        Some(&self.photo_url)
    }

    fn image_category(&self) -> &'static str {
        "awards"
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub category: Option<SkillCategory>,
    pub level: Option<SkillLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl ListEntity for Skill {
    const KIND: ListKind = ListKind::Skills;

    list_identity!();

    fn validate(&self, _ctx: &ValidationContext) -> Result<(), ValidationError> {
        require("name", &self.name, "Skill name is required.")?;
        if self.category.is_none() {
            return Err(ValidationError::new(
                "category",
                "Skill category is required.",
            ));
        }
        if self.level.is_none() {
            return Err(ValidationError::new("level", "Skill level is required."));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Education {
    pub id: String,
    pub level: Option<EducationLevel>,
    pub education_name: String,
    pub institute_name: String,
    pub grade: String,
    pub address: String,
    pub start_year: String,
    pub end_year: String,
    /// Free text; only the Professional Qualification card shows it.
    pub duration: String,
    pub logo_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl ListEntity for Education {
    const KIND: ListKind = ListKind::Educations;

    list_identity!();

    fn validate(&self, _ctx: &ValidationContext) -> Result<(), ValidationError> {
        require(
            "educationName",
            &self.education_name,
            "Education name is required.",
        )?;
        require("address", &self.address, "Address is required.")?;

        let Some(level) = self.level else {
            return Err(ValidationError::new(
                "level",
                "Education level is required.",
            ));
        };

        if level != EducationLevel::SchoolEducation {
            require(
                "instituteName",
                &self.institute_name,
                "Institute name is required.",
            )?;
        }
        if level == EducationLevel::HigherEducation {
            require("grade", &self.grade, "Grade is required.")?;
        }
        if level == EducationLevel::ProfessionalQualification {
            require("duration", &self.duration, "Duration is required.")?;
        } else {
            require("startYear", &self.start_year, "Start year is required.")?;
            require("endYear", &self.end_year, "End year is required.")?;
        }
        Ok(())
    }

    fn image_slot(&mut self) -> Option<&mut String> {
        Some(&mut self.logo_url)
    }

    fn image_url(&self) -> Option<&str> {
        Some(&self.logo_url)
    }

    fn image_category(&self) -> &'static str {
        "logos"
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Experience {
    pub id: String,
    pub company_name: String,
    pub position: String,
    pub project_involvement: String,
    pub address: String,
    pub start_date: String,
    pub end_date: String,
    /// Derived from the date range; overwritten on every bind/submit.
    pub duration: String,
    pub present: bool,
    pub logo_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl ListEntity for Experience {
    const KIND: ListKind = ListKind::Experiences;

    list_identity!();

    fn validate(&self, ctx: &ValidationContext) -> Result<(), ValidationError> {
        require("companyName", &self.company_name, "Company name is required.")?;
        require("address", &self.address, "Company address is required.")?;
        require("position", &self.position, "Job role or position is required.")?;
        require(
            "projectInvolvement",
            &self.project_involvement,
            "Project involvement is required.",
        )?;
        require("startDate", &self.start_date, "Start date is required.")?;
        if !self.present {
            require("endDate", &self.end_date, "End date is required.")?;
        }
        // Empty after recompute means the range itself is unusable
        // (end precedes start, or a date failed to parse).
        require("duration", &self.duration, "Duration is required.")?;
        if !ctx.has_image && !ctx.is_editing {
            return Err(ValidationError::new("logo", "Company logo is required."));
        }
        Ok(())
    }

    fn image_slot(&mut self) -> Option<&mut String> {
        Some(&mut self.logo_url)
    }

    fn image_url(&self) -> Option<&str> {
        Some(&self.logo_url)
    }

    fn image_category(&self) -> &'static str {
        "logos"
    }

    fn refresh_derived(&mut self, today: NaiveDate) {
        if self.present {
            self.end_date.clear();
        }
        self.duration =
            duration::format_span(&self.start_date, &self.end_date, self.present, today);
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct SocialWork {
    pub id: String,
    pub society_name: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    /// Derived from the date range; overwritten on every bind/submit.
    pub duration: String,
    pub present: bool,
    pub weblink: String,
    pub logo_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl ListEntity for SocialWork {
    const KIND: ListKind = ListKind::SocialWorks;

    list_identity!();

    fn validate(&self, ctx: &ValidationContext) -> Result<(), ValidationError> {
        require("societyName", &self.society_name, "Society name is required.")?;
        require("position", &self.position, "Position is required.")?;
        require("startDate", &self.start_date, "Start date is required.")?;
        if !self.present {
            require("endDate", &self.end_date, "End date is required.")?;
        }
        if !ctx.has_image && !ctx.is_editing {
            return Err(ValidationError::new("logo", "Society logo is required."));
        }
        Ok(())
    }

    fn image_slot(&mut self) -> Option<&mut String> {
        Some(&mut self.logo_url)
    }

    fn image_url(&self) -> Option<&str> {
        Some(&self.logo_url)
    }

    fn image_category(&self) -> &'static str {
        "logos"
    }

    fn refresh_derived(&mut self, today: NaiveDate) {
        if self.present {
            self.end_date.clear();
        }
        self.duration =
            duration::format_span(&self.start_date, &self.end_date, self.present, today);
    }
}

//
// ──────────────────────────────────────────────────────────
// Single records
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    pub name: String,
    pub position: String,
    pub start_note: String,
    pub github: String,
    pub linkedin: String,
    pub photo_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl SingleEntity for Profile {
    const KIND: SingleKind = SingleKind::Profile;

    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = Some(now);
    }

    fn validate(&self, ctx: &ValidationContext) -> Result<(), ValidationError> {
        if !ctx.has_image {
            return Err(ValidationError::new("photo", "Profile photo is required."));
        }
        require("name", &self.name, "Name is required.")?;
        require("position", &self.position, "Position is required.")?;
        require("startNote", &self.start_note, "Start note is required.")?;
        require("github", &self.github, "Github link is required.")?;
        require("linkedin", &self.linkedin, "Linkedin url is required.")?;
        require_url_shape("github", &self.github, "Please enter a valid GitHub URL.")?;
        require_url_shape(
            "linkedin",
            &self.linkedin,
            "Please enter a valid LinkedIn URL.",
        )?;
        Ok(())
    }

    fn image_slot(&mut self) -> Option<&mut String> {
        Some(&mut self.photo_url)
    }

    fn image_url(&self) -> Option<&str> {
        Some(&self.photo_url)
    }

    fn image_category(&self) -> &'static str {
        "photos"
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct About {
    pub about: String,
    pub image_position: ImagePosition,
    pub photo_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl SingleEntity for About {
    const KIND: SingleKind = SingleKind::About;

    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = Some(now);
    }

    fn validate(&self, ctx: &ValidationContext) -> Result<(), ValidationError> {
        require("about", &self.about, "About me details is required.")?;
        if !ctx.has_image {
            return Err(ValidationError::new("photo", "Profile photo is required."));
        }
        Ok(())
    }

    fn image_slot(&mut self) -> Option<&mut String> {
        Some(&mut self.photo_url)
    }

    fn image_url(&self) -> Option<&str> {
        Some(&self.photo_url)
    }

    fn image_category(&self) -> &'static str {
        "photos"
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Contact {
    pub email: String,
    pub phone: String,
    pub address: String,
    pub facebook: String,
    pub whatsapp: String,
    pub instagram: String,
    pub tiktok: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl SingleEntity for Contact {
    const KIND: SingleKind = SingleKind::Contact;

    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = Some(now);
    }

    fn validate(&self, _ctx: &ValidationContext) -> Result<(), ValidationError> {
        require("email", &self.email, "Email address is required.")?;
        require("phone", &self.phone, "Phone number is required.")?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Footer {
    pub copyright: String,
    pub developed_by: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl SingleEntity for Footer {
    const KIND: SingleKind = SingleKind::Footer;

    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = Some(now);
    }

    fn validate(&self, _ctx: &ValidationContext) -> Result<(), ValidationError> {
        require("copyright", &self.copyright, "Copyright notice is required.")?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub app_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl SingleEntity for Settings {
    const KIND: SingleKind = SingleKind::Settings;

    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = Some(now);
    }

    fn validate(&self, _ctx: &ValidationContext) -> Result<(), ValidationError> {
        require("appName", &self.app_name, "App name is required.")?;
        Ok(())
    }
}

//
// ──────────────────────────────────────────────────────────
// Tagged unions over the concrete entity types
// ──────────────────────────────────────────────────────────
//

/// One list record of any section. Serializes untagged: the wire shape is
/// the plain record, the section is always known from context.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(untagged)]
pub enum ListRecord {
    Project(Project),
    Certificate(Certificate),
    Achievement(Achievement),
    Skill(Skill),
    Education(Education),
    Experience(Experience),
    SocialWork(SocialWork),
}

impl ListRecord {
    pub fn kind(&self) -> ListKind {
        match self {
            Self::Project(_) => ListKind::Projects,
            Self::Certificate(_) => ListKind::Certificates,
            Self::Achievement(_) => ListKind::Achievements,
            Self::Skill(_) => ListKind::Skills,
            Self::Education(_) => ListKind::Educations,
            Self::Experience(_) => ListKind::Experiences,
            Self::SocialWork(_) => ListKind::SocialWorks,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Self::Project(r) => &r.id,
            Self::Certificate(r) => &r.id,
            Self::Achievement(r) => &r.id,
            Self::Skill(r) => &r.id,
            Self::Education(r) => &r.id,
            Self::Experience(r) => &r.id,
            Self::SocialWork(r) => &r.id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(untagged)]
pub enum SingleRecord {
    Profile(Profile),
    About(About),
    Contact(Contact),
    Footer(Footer),
    Settings(Settings),
}

impl SingleRecord {
    pub fn kind(&self) -> SingleKind {
        match self {
            Self::Profile(_) => SingleKind::Profile,
            Self::About(_) => SingleKind::About,
            Self::Contact(_) => SingleKind::Contact,
            Self::Footer(_) => SingleKind::Footer,
            Self::Settings(_) => SingleKind::Settings,
        }
    }
}
