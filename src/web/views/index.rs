use maud::{html, DOCTYPE};
use poem::web::{Data, Html};
use poem::{handler, IntoResponse};

use crate::portfolio::{PROFILE, PROJECTS};
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
                title { (title(Page::Home)) }
            }
            body {
                (*tracking_code)
                (navbar(Page::Home))

                section.hero.is-info.is-medium {
                    div.hero-body {
                        div.container {
                            p.title { (PROFILE.name) }
                            p.subtitle { (PROFILE.role) }
                            p { (PROFILE.short_bio) }
                            div.buttons."mt-5" {
                                a.button.is-white.is-outlined href=(Page::Projects.path()) {
                                    span.icon { i.fas.fa-folder-open {} }
                                    span { "Projects" }
                                }
                                a.button.is-white.is-outlined href=(Page::Predictor.path()) {
                                    span.icon { i.fas.fa-chart-line {} }
                                    span { "Grade predictor" }
                                }
                                a.button.is-white.is-outlined href=(Page::Contact.path()) {
                                    span.icon { i.fas.fa-envelope {} }
                                    span { "Contact" }
                                }
                            }
                        }
                    }
                }

                section.section {
                    div.container {
                        h2.title."is-4" { "Featured projects" }
                        div.columns.is-multiline {
                            @for project in PROJECTS {
                                div.column."is-6" { (project_card(project)) }
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

#[cfg(test)]
mod tests {
    use crate::web::test::{create_standalone_test_client, read_text};

    #[tokio::test]
    async fn get_ok() -> crate::Result {
        let client = create_standalone_test_client()?;
        let response = client.get("/").send().await;
        response.assert_status_is_ok();
        let body = read_text(response).await?;
        assert!(body.contains("Nasser Lahlou"));
        assert!(body.contains("Portfolio Website"));
        assert!(body.contains("Sample CLI Tool"));
        Ok(())
    }
}
