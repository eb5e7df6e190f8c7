use std::sync::Arc;

use async_trait::async_trait;
use futures::join;
use serde::Serialize;
use utoipa::ToSchema;

use crate::portfolio::application::ports::outgoing::document_store::DocumentStore;
use crate::portfolio::application::services::{list_editor::ListEditor, single_editor::SingleEditor};
use crate::portfolio::domain::entities::{
    About, Contact, Education, EducationLevel, Experience, Footer, ListEntity, Profile, Project,
    SingleEntity, Skill, SocialWork,
};

/// The home page shows only the newest few projects; the full catalogue
/// lives on its own page.
const RECENT_PROJECT_COUNT: usize = 3;

/// Education levels render in this fixed order.
const LEVEL_ORDER: [EducationLevel; 3] = [
    EducationLevel::HigherEducation,
    EducationLevel::SchoolEducation,
    EducationLevel::ProfessionalQualification,
];

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EducationGroup {
    pub level: EducationLevel,
    pub items: Vec<Education>,
}

/// Everything the public landing page renders, in presentation order. A
/// section whose document is missing (or unreadable) is simply empty;
/// the page never errors on a half-filled portfolio.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HomeView {
    pub profile: Profile,
    pub about: About,
    pub skills: Vec<Skill>,
    pub educations: Vec<EducationGroup>,
    pub experiences: Vec<Experience>,
    pub social_works: Vec<SocialWork>,
    pub recent_projects: Vec<Project>,
    pub contact: Contact,
    pub footer: Footer,
}

/// An interface for assembling the public home payload.
#[async_trait]
pub trait IFetchHomeUseCase: Send + Sync {
    async fn execute(&self) -> HomeView;
}

pub struct FetchHomeUseCase {
    store: Arc<dyn DocumentStore>,
}

impl FetchHomeUseCase {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    async fn list_or_empty<R: ListEntity>(&self) -> Vec<R> {
        let mut editor = ListEditor::<R>::new();
        if let Err(err) = editor.load(self.store.as_ref()).await {
            tracing::warn!(
                "home: failed to load {}: {err}",
                R::KIND.document_name()
            );
            return Vec::new();
        }
        editor.into_items()
    }

    async fn single_or_default<S: SingleEntity>(&self) -> S {
        let mut editor = SingleEditor::<S>::new();
        if let Err(err) = editor.load(self.store.as_ref()).await {
            tracing::warn!(
                "home: failed to load {}: {err}",
                S::KIND.document_name()
            );
            return S::default();
        }
        editor.into_record()
    }
}

fn group_by_level(educations: Vec<Education>) -> Vec<EducationGroup> {
    LEVEL_ORDER
        .iter()
        .filter_map(|&level| {
            let items: Vec<Education> = educations
                .iter()
                .filter(|e| e.level == Some(level))
                .cloned()
                .collect();
            if items.is_empty() {
                None
            } else {
                Some(EducationGroup { level, items })
            }
        })
        .collect()
}

#[async_trait]
impl IFetchHomeUseCase for FetchHomeUseCase {
    async fn execute(&self) -> HomeView {
        let (
            profile,
            about,
            skills,
            educations,
            experiences,
            social_works,
            projects,
            contact,
            footer,
        ) = join!(
            self.single_or_default::<Profile>(),
            self.single_or_default::<About>(),
            self.list_or_empty::<Skill>(),
            self.list_or_empty::<Education>(),
            self.list_or_empty::<Experience>(),
            self.list_or_empty::<SocialWork>(),
            self.list_or_empty::<Project>(),
            self.single_or_default::<Contact>(),
            self.single_or_default::<Footer>(),
        );

        HomeView {
            profile,
            about,
            skills,
            educations: group_by_level(educations),
            // Lists are stored oldest-first; the page shows newest-first.
            experiences: experiences.into_iter().rev().collect(),
            social_works: social_works.into_iter().rev().collect(),
            recent_projects: projects
                .into_iter()
                .rev()
                .take(RECENT_PROJECT_COUNT)
                .collect(),
            contact,
            footer,
        }
    }
}
