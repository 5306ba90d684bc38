use maud::{html, DOCTYPE};
use poem::web::{Data, Html};
use poem::{handler, IntoResponse};

use crate::portfolio::PROFILE;
use crate::prelude::*;
use crate::web::partials::*;
use crate::web::tracking_code::TrackingCode;

#[instrument(skip_all)]
#[handler]
pub async fn get(tracking_code: Data<&TrackingCode>) -> impl IntoResponse {
    let markup = html! {
        (DOCTYPE)
        html lang="en" {
            head {
                (headers())
                title { (title(Page::About)) }
            }
            body {
                (*tracking_code)
                (navbar(Page::About))

                section.section {
                    div.container {
                        div.columns {
                            div.column."is-8" {
                                h1.title { "About me" }
                                p.subtitle { (PROFILE.role) }
                                div.content {
                                    p { (PROFILE.short_bio) }
                                    p {
                                        "Based in " strong { (PROFILE.location) } ". "
                                        "This site is a small playground: besides the usual pages, it serves a "
                                        a href=(Page::Predictor.path()) { "linear regression model" }
                                        " fitted on startup."
                                    }
                                }
                            }
                            div.column."is-4" {
                                div.box {
                                    p.heading { "Location" }
                                    p."mb-3" {
                                        span.icon-text {
                                            span.icon { i.fas.fa-map-marker-alt.has-text-danger {} }
                                            span { (PROFILE.location) }
                                        }
                                    }
                                    p.heading { "Code" }
                                    p {
                                        span.icon-text {
                                            span.icon { i.fab.fa-github {} }
                                            span { a href=(PROFILE.github_url) { "GitHub" } }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                (footer())
            }
        }
    };
    Html(markup.into_string())
}
