//! Project detail resolution.
//!
//! A project carried over from the list view is rendered as-is. Otherwise
//! it is fetched by id exactly once; any failure on that path lands on
//! [`ProjectDetail::NotFound`], which is final.

use std::fmt::Write;

use tracing::{debug, info};

use folio_shared::models::Project;

use crate::api::ContentSource;
use crate::curated::{self, CuratedProject, TOP_STACK_WEB};
use crate::defaults::PLACEHOLDER_LONG_DESCRIPTION;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectDetail {
    Found(Box<ProjectPage>),
    NotFound,
}

/// Everything a detail page shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPage {
    pub project: Project,
    pub curated: Option<&'static CuratedProject>,
    /// The project's own repository, or the GitHub profile.
    pub repo_url: String,
    /// Set only when `repo_url` is the project's own repository.
    pub profile_url: Option<String>,
    pub top_stack: [&'static str; 5],
    pub long_description: String,
}

impl ProjectPage {
    pub fn build(project: Project, github_username: &str) -> Self {
        let profile = format!("https://github.com/{github_username}");
        let own_repo = project.github.clone().filter(|g| !g.is_empty());

        let curated = curated::lookup(&project);
        let top_stack = curated.map_or(TOP_STACK_WEB, |c| c.top_stack);
        let long_description = project
            .long_description
            .clone()
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| PLACEHOLDER_LONG_DESCRIPTION.to_string());

        let (repo_url, profile_url) = match own_repo {
            Some(repo) => (repo, Some(profile)),
            None => (profile, None),
        };

        Self {
            project,
            curated,
            repo_url,
            profile_url,
            top_stack,
            long_description,
        }
    }
}

impl ProjectDetail {
    /// Resolve the page for `id`.
    ///
    /// `carried` is the record handed over by the list view, if any; when
    /// present `source` is not consulted at all.
    pub async fn resolve(
        carried: Option<Project>,
        id: &str,
        source: &dyn ContentSource,
        github_username: &str,
    ) -> Self {
        let project = match carried {
            Some(project) => Some(project),
            None => match source.project(id).await {
                Ok(found) => found,
                Err(e) => {
                    debug!(id, error = %e, "Project fetch failed");
                    None
                }
            },
        };

        match project {
            Some(project) => {
                Self::Found(Box::new(ProjectPage::build(project, github_username)))
            }
            None => {
                info!(id, "Project not found");
                Self::NotFound
            }
        }
    }

    pub fn render(&self) -> String {
        match self {
            Self::Found(page) => page.render(),
            Self::NotFound => "Project not found.\n".to_string(),
        }
    }
}

impl ProjectPage {
    /// Plain-text rendering for the terminal.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let p = &self.project;

        let _ = writeln!(out, "{}", p.title);
        if !p.description.is_empty() {
            let _ = writeln!(out, "{}", p.description);
        }
        if !p.image.is_empty() {
            let _ = writeln!(out, "Image: {}", p.image);
        }
        let _ = writeln!(out, "\nTop stack: {}", self.top_stack.join(", "));

        if let Some(c) = self.curated {
            render_curated(&mut out, c);
        }

        if !p.tech.is_empty() {
            let _ = writeln!(out, "\nTech: {}", p.tech.join(", "));
        }
        let _ = writeln!(out, "\n{}", self.long_description);
        for feature in &p.features {
            let _ = writeln!(out, "  - {feature}");
        }

        let _ = writeln!(out, "\nGitHub: {}", self.repo_url);
        if let Some(profile) = &self.profile_url {
            let _ = writeln!(out, "GitHub Profile: {profile}");
        }

        out
    }
}

fn render_curated(out: &mut String, c: &CuratedProject) {
    let _ = writeln!(out, "\n{}\n{}", c.name, c.tagline);
    let _ = writeln!(out, "Stack: {}", c.stack.join(", "));
    let _ = writeln!(out, "\nOverview\n{}", c.overview);
    let _ = writeln!(out, "\nWhat I Built\n{}", c.built);

    if !c.modules.is_empty() {
        let _ = writeln!(out, "\nKey Modules");
        for m in c.modules {
            let _ = writeln!(out, "  - {m}");
        }
    }
    if !c.highlights.is_empty() {
        let _ = writeln!(out, "\nHighlights");
        for h in c.highlights {
            let _ = writeln!(out, "  - {h}");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use folio_shared::models::{Education, Experience, Profile};
    use reqwest::StatusCode;

    use super::*;
    use crate::curated::{TOP_STACK_JAVA, TRAIN, VSMS};
    use crate::error::{ClientError, Result};

    enum Lookup {
        Found(Project),
        Missing,
        Broken,
    }

    struct CountingSource {
        lookup: Lookup,
        calls: AtomicUsize,
    }

    impl CountingSource {
        fn new(lookup: Lookup) -> Self {
            Self {
                lookup,
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ContentSource for CountingSource {
        async fn profile(&self) -> Result<Option<Profile>> {
            unreachable!()
        }

        async fn projects(&self) -> Result<Vec<Project>> {
            unreachable!()
        }

        async fn education(&self) -> Result<Vec<Education>> {
            unreachable!()
        }

        async fn experience(&self) -> Result<Vec<Experience>> {
            unreachable!()
        }

        async fn project(&self, _id: &str) -> Result<Option<Project>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.lookup {
                Lookup::Found(p) => Ok(Some(p.clone())),
                Lookup::Missing => Ok(None),
                Lookup::Broken => Err(ClientError::Status(StatusCode::INTERNAL_SERVER_ERROR)),
            }
        }
    }

    fn plain(id: &str) -> Project {
        Project {
            id: id.into(),
            title: "Plain".into(),
            description: "Nothing curated".into(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn carried_project_renders_without_network() {
        let source = CountingSource::new(Lookup::Broken);
        let carried = Project {
            github: Some("https://github.com/me/vsms".into()),
            ..plain("vsms")
        };

        let first = ProjectDetail::resolve(Some(carried.clone()), "vsms", &source, "me").await;
        let second = ProjectDetail::resolve(Some(carried), "vsms", &source, "me").await;

        assert_eq!(source.calls(), 0);
        assert_eq!(first, second);
        assert_eq!(first.render(), second.render());
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let source = CountingSource::new(Lookup::Missing);
        let detail = ProjectDetail::resolve(None, "nope", &source, "me").await;

        assert_eq!(detail, ProjectDetail::NotFound);
        assert_eq!(detail.render(), "Project not found.\n");
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn fetch_failure_is_not_found() {
        let source = CountingSource::new(Lookup::Broken);
        let detail = ProjectDetail::resolve(None, "vsms", &source, "me").await;
        assert_eq!(detail, ProjectDetail::NotFound);
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn fetched_project_is_found() {
        let source = CountingSource::new(Lookup::Found(plain("p1")));
        let detail = ProjectDetail::resolve(None, "p1", &source, "me").await;

        let ProjectDetail::Found(page) = detail else {
            panic!("expected a page");
        };
        assert_eq!(page.project.id, "p1");
    }

    #[test]
    fn uncurated_project_uses_record_fields_only() {
        let page = ProjectPage::build(plain("p1"), "me");

        assert_eq!(page.curated, None);
        assert_eq!(page.top_stack, TOP_STACK_WEB);
        assert_eq!(page.long_description, PLACEHOLDER_LONG_DESCRIPTION);
        assert_eq!(page.repo_url, "https://github.com/me");
        assert_eq!(page.profile_url, None);

        let text = page.render();
        assert!(!text.contains("Key Modules"));
        assert!(text.contains("GitHub: https://github.com/me\n"));
        assert!(!text.contains("GitHub Profile"));
    }

    #[test]
    fn own_repo_adds_profile_link() {
        let page = ProjectPage::build(
            Project {
                github: Some("https://github.com/me/vsms".into()),
                ..plain("vsms")
            },
            "me",
        );

        assert_eq!(page.curated, Some(&VSMS));
        assert_eq!(page.repo_url, "https://github.com/me/vsms");
        assert_eq!(page.profile_url.as_deref(), Some("https://github.com/me"));
        assert!(page.render().contains("Key Modules\n  - Customer Management"));
    }

    #[test]
    fn curated_by_slug_picks_its_stack() {
        let page = ProjectPage::build(
            Project {
                slug: Some("train-reservation-system".into()),
                long_description: Some("Custom text".into()),
                ..plain("65a1f0c2")
            },
            "me",
        );

        assert_eq!(page.curated, Some(&TRAIN));
        assert_eq!(page.top_stack, TOP_STACK_JAVA);
        assert_eq!(page.long_description, "Custom text");
    }
}
