use chrono::{Datelike, Utc};
use clap::crate_version;
use itertools::Itertools;
use maud::{html, Markup};

use crate::portfolio::{Project, PROFILE};

mod float;

pub use self::float::*;

#[derive(Copy, Clone, PartialEq, Eq)]
pub enum Page {
    Home,
    Projects,
    About,
    Contact,
    Predictor,
}

impl Page {
    const ALL: [Page; 5] = [
        Page::Home,
        Page::Projects,
        Page::About,
        Page::Contact,
        Page::Predictor,
    ];

    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Projects => "/projects",
            Self::About => "/about",
            Self::Contact => "/contact",
            Self::Predictor => "/predictor",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Projects => "Projects",
            Self::About => "About",
            Self::Contact => "Contact",
            Self::Predictor => "Grade predictor",
        }
    }
}

pub fn headers() -> Markup {
    html! {
        meta name="viewport" content="width=device-width, initial-scale=1";
        meta charset="UTF-8";
        meta name="description" content=(PROFILE.short_bio);
        link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/bulma@0.9.4/css/bulma.min.css" crossorigin="anonymous" referrerpolicy="no-referrer";
        link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/5.15.3/css/all.min.css" crossorigin="anonymous" referrerpolicy="no-referrer";
        link rel="stylesheet" href="/static/theme.css?v1";
    }
}

pub fn title(page: Page) -> String {
    format!("{} – {}", page.title(), PROFILE.name)
}

pub fn navbar(active: Page) -> Markup {
    html! {
        nav.navbar.has-shadow role="navigation" aria-label="main navigation" {
            div.container {
                div.navbar-brand {
                    a.navbar-item href="/" {
                        span.icon-text {
                            span.icon { i.fas.fa-code.has-text-info {} }
                            strong { (PROFILE.name) }
                        }
                    }
                }
                div.navbar-menu.is-active {
                    div.navbar-end {
                        @for page in Page::ALL {
                            a.navbar-item.is-tab.is-active[page == active] href=(page.path()) {
                                (page.title())
                            }
                        }
                    }
                }
            }
        }
    }
}

pub fn project_card(project: &Project) -> Markup {
    html! {
        div.card {
            div.card-content {
                p.title."is-5" { (project.title) }
                p.content { (project.description) }
                div.tags {
                    @for technology in project.technologies {
                        span.tag.is-info.is-light { (technology) }
                    }
                }
            }
            footer.card-footer {
                a.card-footer-item href=(project.github_url) title=(project.technologies.iter().join(", ")) {
                    span.icon-text {
                        span.icon { i.fab.fa-github {} }
                        span { "Source code" }
                    }
                }
            }
        }
    }
}

pub fn footer() -> Markup {
    html! {
        footer.footer {
            div.container {
                div.columns {
                    div.column."is-4" {
                        p.title."is-6" { "About" }
                        p."mt-1" {
                            span.icon-text.is-flex-wrap-nowrap {
                                span.icon { i.fas.fa-home.has-text-info {} }
                                span {
                                    "Portfolio " (crate_version!()) " © " (Utc::now().year()) " "
                                    a href=(PROFILE.github_url) { (PROFILE.name) }
                                }
                            }
                        }
                        p."mt-1" {
                            span.icon-text.is-flex-wrap-nowrap {
                                span.icon { i.fas.fa-heart.has-text-danger {} }
                                span {
                                    "Made with " a href="https://www.rust-lang.org/" { "Rust" }
                                    " and " a href="https://bulma.io/" { "Bulma" }
                                }
                            }
                        }
                    }

                    div.column."is-3" {
                        p.title."is-6" { "Elsewhere" }
                        p."mt-1" {
                            span.icon-text.is-flex-wrap-nowrap {
                                span.icon { i.fab.fa-github.has-text-grey-dark {} }
                                span { a href=(PROFILE.github_url) { "GitHub" } }
                            }
                        }
                        p."mt-1" {
                            span.icon-text.is-flex-wrap-nowrap {
                                span.icon { i.fab.fa-linkedin.has-text-link {} }
                                span { a href=(PROFILE.linkedin_url) { "LinkedIn" } }
                            }
                        }
                        p."mt-1" {
                            span.icon-text.is-flex-wrap-nowrap {
                                span.icon { i.fas.fa-envelope.has-text-success {} }
                                span { a href=(PROFILE.mailto()) { (PROFILE.email) } }
                            }
                        }
                    }
                }
            }
        }
    }
}
