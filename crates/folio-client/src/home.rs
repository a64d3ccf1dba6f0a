//! Startup load of the home view.
//!
//! Four independent fetches run concurrently. Whichever settle successfully
//! replace their part of the state; the rest keep what they had, which on a
//! first load is the built-in placeholder content. A failed fetch is logged
//! and otherwise invisible.

use std::fmt::Write;

use tracing::{debug, info};

use folio_shared::models::{Education, Experience, Profile, Project};

use crate::api::ContentSource;
use crate::defaults;
use crate::error::ClientError;
use crate::fallback::{Resource, Vacancy};

/// Which of the four startup fetches succeeded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub profile: bool,
    pub projects: bool,
    pub education: bool,
    pub experience: bool,
}

impl LoadReport {
    pub fn all_ok(&self) -> bool {
        self.profile && self.projects && self.education && self.experience
    }
}

#[derive(Debug, Clone)]
pub struct HomeState {
    pub profile: Resource<Option<Profile>>,
    pub projects: Resource<Vec<Project>>,
    pub education: Resource<Vec<Education>>,
    pub experience: Resource<Vec<Experience>>,
}

impl Default for HomeState {
    fn default() -> Self {
        Self {
            profile: Resource::new(Some(defaults::profile())),
            projects: Resource::new(defaults::projects()),
            education: Resource::new(defaults::education()),
            experience: Resource::new(defaults::experience()),
        }
    }
}

impl HomeState {
    /// Fetch all four resources concurrently and apply each outcome on its
    /// own. Never fails: a resource that cannot be fetched keeps its current
    /// value.
    pub async fn load(&mut self, source: &dyn ContentSource) -> LoadReport {
        let (profile, projects, education, experience) = tokio::join!(
            source.profile(),
            source.projects(),
            source.education(),
            source.experience(),
        );

        let report = LoadReport {
            profile: settle(&mut self.profile, "profile", profile),
            projects: settle(&mut self.projects, "projects", projects),
            education: settle(&mut self.education, "education", education),
            experience: settle(&mut self.experience, "experience", experience),
        };

        info!(
            profile = report.profile,
            projects = report.projects,
            education = report.education,
            experience = report.experience,
            "Home content loaded"
        );

        report
    }

    /// The view as it should be shown right now.
    pub fn view(&self) -> HomeView {
        let default_profile = defaults::profile();
        let profile = match self.profile.resolve() {
            Some(live) if self.profile.is_live() => defaults::fill_profile(live, &default_profile),
            Some(fallback) => fallback.clone(),
            None => default_profile,
        };

        HomeView {
            profile,
            projects: self.projects.resolve().clone(),
            education: self.education.resolve().clone(),
            experience: self.experience.resolve().clone(),
        }
    }
}

fn settle<T: Vacancy>(
    resource: &mut Resource<T>,
    name: &'static str,
    outcome: Result<T, ClientError>,
) -> bool {
    if let Err(e) = &outcome {
        debug!(resource = name, error = %e, "Fetch failed, keeping current content");
    }
    resource.apply(outcome)
}

/// Resolved home content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeView {
    pub profile: Profile,
    pub projects: Vec<Project>,
    pub education: Vec<Education>,
    pub experience: Vec<Experience>,
}

impl HomeView {
    /// Plain-text rendering for the terminal.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let p = &self.profile;

        let _ = writeln!(out, "{}", p.name);
        let _ = writeln!(out, "{}", p.role);
        let _ = writeln!(out, "\n{}", p.about);
        for social in &p.socials {
            let _ = writeln!(out, "  [{}] {}", social.icon, social.link);
        }
        if !p.cv.is_empty() {
            let _ = writeln!(
                out,
                "  CV: {} ({})",
                p.cv,
                p.cv_name.as_deref().unwrap_or("resume.pdf")
            );
        }

        let _ = writeln!(out, "\nEducation");
        for e in &self.education {
            let _ = writeln!(out, "  {} | {} | {}", e.school, e.degree, e.period);
            line_if(&mut out, "    ", &e.location);
            line_if(&mut out, "    ", &e.details);
        }

        let _ = writeln!(out, "\nExperience");
        for e in &self.experience {
            let _ = writeln!(out, "  {} | {} | {}", e.company, e.role, e.period);
            line_if(&mut out, "    ", &e.location);
            line_if(&mut out, "    ", &e.details);
        }

        let _ = writeln!(out, "\nProjects");
        for (i, project) in self.projects.iter().enumerate() {
            let id = if project.id.is_empty() {
                i.to_string()
            } else {
                project.id.clone()
            };
            let _ = writeln!(out, "  [{id}] {}", project.title);
            line_if(&mut out, "    ", &project.description);
        }

        out
    }
}

fn line_if(out: &mut String, indent: &str, text: &str) {
    if !text.is_empty() {
        let _ = writeln!(out, "{indent}{text}");
    }
}
