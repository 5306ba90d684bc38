//! Static site content.

pub struct Profile {
    pub name: &'static str,
    pub role: &'static str,
    pub short_bio: &'static str,
    pub email: &'static str,
    pub location: &'static str,
    pub github_url: &'static str,
    pub linkedin_url: &'static str,
}

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub github_url: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Nasser Lahlou",
    role: "Software Engineering Student",
    short_bio: "I am a software engineering student interested in web development, \
                Rust, and building clean, maintainable software.",
    email: "nassounadim@gmail.com",
    location: "Barcelona, Spain",
    github_url: "https://github.com/nassounadim-lgtm",
    linkedin_url: "https://www.linkedin.com/in/your-profile",
};

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Portfolio Website",
        description: "A personal portfolio website built with Rust, Poem and Bulma, \
                      including a linear regression grade predictor.",
        technologies: &["Rust", "Poem", "Maud", "Bulma"],
        github_url: "https://github.com/nassounadim-lgtm/personal-portfolio",
    },
    Project {
        title: "Sample CLI Tool",
        description: "A small command-line tool.",
        technologies: &["Rust"],
        github_url: "https://github.com/nassounadim-lgtm/sample-cli-tool",
    },
];

impl Profile {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mailto_ok() {
        assert_eq!(PROFILE.mailto(), "mailto:nassounadim@gmail.com");
    }
}
