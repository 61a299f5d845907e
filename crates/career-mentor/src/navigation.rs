use serde::Serialize;

/// Logical destinations of the single-page app. The pipeline never renders;
/// it names where the client should go next and the routing layer does the
/// rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigationTarget {
    Landing,
    Survey,
    Profile,
    Login,
    Signup,
    Trends,
}

impl NavigationTarget {
    pub const fn path(self) -> &'static str {
        match self {
            Self::Landing => "/",
            Self::Survey => "/survey",
            Self::Profile => "/profile",
            Self::Login => "/login",
            Self::Signup => "/signup",
            Self::Trends => "/trends",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Landing => "Welcome",
            Self::Survey => "Skills Survey",
            Self::Profile => "Profile Dashboard",
            Self::Login => "Login",
            Self::Signup => "Sign Up",
            Self::Trends => "Career & Skill Trends",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_absolute_and_distinct() {
        let targets = [
            NavigationTarget::Landing,
            NavigationTarget::Survey,
            NavigationTarget::Profile,
            NavigationTarget::Login,
            NavigationTarget::Signup,
            NavigationTarget::Trends,
        ];

        for target in targets {
            assert!(target.path().starts_with('/'), "{:?}", target);
        }

        for (index, target) in targets.iter().enumerate() {
            for other in &targets[index + 1..] {
                assert_ne!(target.path(), other.path());
            }
        }
    }

    #[test]
    fn profile_destination_matches_dashboard_route() {
        assert_eq!(NavigationTarget::Profile.path(), "/profile");
        assert_eq!(NavigationTarget::Login.path(), "/login");
    }
}
