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
                title { (title(Page::Contact)) }
            }
            body {
                (*tracking_code)
                (navbar(Page::Contact))

                section.section {
                    div.container {
                        h1.title { "Contact" }
                        div.box {
                            table.table.is-fullwidth {
                                tbody {
                                    tr {
                                        th { span.icon { i.fas.fa-envelope {} } " Email" }
                                        td { a href=(PROFILE.mailto()) { (PROFILE.email) } }
                                    }
                                    tr {
                                        th { span.icon { i.fas.fa-map-marker-alt {} } " Location" }
                                        td { (PROFILE.location) }
                                    }
                                    tr {
                                        th { span.icon { i.fab.fa-github {} } " GitHub" }
                                        td { a href=(PROFILE.github_url) { (PROFILE.github_url) } }
                                    }
                                    tr {
                                        th { span.icon { i.fab.fa-linkedin {} } " LinkedIn" }
                                        td { a href=(PROFILE.linkedin_url) { (PROFILE.linkedin_url) } }
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
