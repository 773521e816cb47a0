use serde::{Deserialize, Serialize};

/// Every screen the app can show, with its URL path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Page {
    #[default]
    Welcome,
    Profile,
    Quiz,
    Auth,
    Results,
    Dashboard,
    ProfileEdit,
    CollegeFinder,
    CollegeRecommendations,
    StreamColleges,
}

impl Page {
    pub const ALL: [Page; 10] = [
        Page::Welcome,
        Page::Profile,
        Page::Quiz,
        Page::Auth,
        Page::Results,
        Page::Dashboard,
        Page::ProfileEdit,
        Page::CollegeFinder,
        Page::CollegeRecommendations,
        Page::StreamColleges,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Page::Welcome => "welcome",
            Page::Profile => "profile",
            Page::Quiz => "quiz",
            Page::Auth => "auth",
            Page::Results => "results",
            Page::Dashboard => "dashboard",
            Page::ProfileEdit => "profileEdit",
            Page::CollegeFinder => "collegeFinder",
            Page::CollegeRecommendations => "collegeRecommendations",
            Page::StreamColleges => "streamColleges",
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Page::Welcome => "/",
            Page::Profile => "/profile",
            Page::Quiz => "/quiz",
            Page::Auth => "/auth",
            Page::Results => "/results",
            Page::Dashboard => "/dashboard",
            Page::ProfileEdit => "/profile/edit",
            Page::CollegeFinder => "/colleges",
            Page::CollegeRecommendations => "/colleges/recommendations",
            Page::StreamColleges => "/colleges/stream",
        }
    }

    pub fn from_id(id: &str) -> Option<Page> {
        Page::ALL.into_iter().find(|p| p.id() == id)
    }

    /// Resolve a URL path (query and fragment ignored, trailing slash tolerated).
    pub fn from_path(path: &str) -> Option<Page> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        Page::ALL.into_iter().find(|p| p.path() == normalized)
    }
}
