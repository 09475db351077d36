//! # Routing Model
//!
//! The routing table that discovery fills in. An [`ArtifactRouter`] only ever
//! grows: every `add_*` call appends, nothing is replaced or deduplicated.

/// Wildcard accepted in a mirror's `mirror_of` list, matching any repository.
pub const ANY_REPOSITORY: &str = "*";

/// Redirects requests for one or more repositories to an alternate location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MirrorRoute {
    /// Repository ids served by this mirror (may contain [`ANY_REPOSITORY`]).
    pub mirror_of: Vec<String>,
    /// Location of the mirror. Not validated.
    pub url: String,
}

impl MirrorRoute {
    pub fn new(mirror_of: Vec<String>, url: impl Into<String>) -> Self {
        Self {
            mirror_of,
            url: url.into(),
        }
    }

    /// Whether this mirror serves `repository_id`, either by name or through the wildcard.
    pub fn serves(&self, repository_id: &str) -> bool {
        self.mirror_of
            .iter()
            .any(|id| id == repository_id || id == ANY_REPOSITORY)
    }
}

/// Scopes routing behaviour to a named group of repositories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupRoute {
    pub name: String,
    pub members: Vec<String>,
}

impl GroupRoute {
    pub fn new(name: impl Into<String>, members: Vec<String>) -> Self {
        Self {
            name: name.into(),
            members,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtifactRouter {
    mirrors: Vec<MirrorRoute>,
    groups: Vec<GroupRoute>,
}

impl ArtifactRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_mirrors<I>(&mut self, mirrors: I)
    where
        I: IntoIterator<Item = MirrorRoute>,
    {
        self.mirrors.extend(mirrors);
    }

    pub fn add_groups<I>(&mut self, groups: I)
    where
        I: IntoIterator<Item = GroupRoute>,
    {
        self.groups.extend(groups);
    }

    pub fn mirrors(&self) -> &[MirrorRoute] {
        &self.mirrors
    }

    pub fn groups(&self) -> &[GroupRoute] {
        &self.groups
    }

    pub fn is_empty(&self) -> bool {
        self.mirrors.is_empty() && self.groups.is_empty()
    }

    /// Mirrors that serve `repository_id`, in the order they were added.
    pub fn mirrors_for<'a>(
        &'a self,
        repository_id: &'a str,
    ) -> impl Iterator<Item = &'a MirrorRoute> + 'a {
        self.mirrors
            .iter()
            .filter(move |mirror| mirror.serves(repository_id))
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    fn mirror(ids: &[&str], url: &str) -> MirrorRoute {
        MirrorRoute::new(ids.iter().map(|s| s.to_string()).collect(), url)
    }

    #[test]
    fn add_mirrors_appends_instead_of_replacing() {
        let mut router = ArtifactRouter::new();
        router.add_mirrors(vec![mirror(&["central"], "http://a")]);
        router.add_mirrors(vec![mirror(&["central"], "http://b")]);

        let urls: Vec<&str> = router.mirrors().iter().map(|m| m.url.as_str()).collect();
        assert_eq!(urls, vec!["http://a", "http://b"]);
    }

    #[test]
    fn empty_router_reports_empty() {
        let mut router = ArtifactRouter::new();
        assert!(router.is_empty());

        router.add_groups(vec![GroupRoute::new("compile", vec!["g1".into()])]);
        assert!(!router.is_empty());
        assert!(router.mirrors().is_empty());
    }

    #[test]
    fn mirrors_for_honours_wildcard_and_order() {
        let mut router = ArtifactRouter::new();
        router.add_mirrors(vec![
            mirror(&["snapshots"], "http://snap"),
            mirror(&["*"], "http://any"),
            mirror(&["central", "releases"], "http://central"),
        ]);

        let central: Vec<&str> = router
            .mirrors_for("central")
            .map(|m| m.url.as_str())
            .collect();
        assert_eq!(central, vec!["http://any", "http://central"]);

        let other: Vec<&str> = router.mirrors_for("other").map(|m| m.url.as_str()).collect();
        assert_eq!(other, vec!["http://any"]);
    }
}
