use maud::{html, DOCTYPE};
use poem::web::{Data, Html};
use poem::{handler, IntoResponse};

use crate::portfolio::PROJECTS;
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
                title { (title(Page::Projects)) }
            }
            body {
                (*tracking_code)
                (navbar(Page::Projects))

                section.section {
                    div.container {
                        h1.title { "Projects" }
                        @for project in PROJECTS {
                            div.block { (project_card(project)) }
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
    use crate::portfolio::PROJECTS;
    use crate::web::test::{create_standalone_test_client, read_text};

    #[tokio::test]
    async fn get_ok() -> crate::Result {
        let client = create_standalone_test_client()?;
        let response = client.get("/projects").send().await;
        response.assert_status_is_ok();
        let body = read_text(response).await?;
        for project in PROJECTS {
            assert!(body.contains(project.title));
            assert!(body.contains(project.github_url));
        }
        Ok(())
    }
}
