use std::fmt::Write;

use maud::{PreEscaped, Render};

use crate::prelude::*;

#[must_use]
#[derive(Clone)]
pub struct TrackingCode(PreEscaped<String>);

impl Default for TrackingCode {
    fn default() -> Self {
        Self(PreEscaped(String::new()))
    }
}

impl TrackingCode {
    pub fn new(gtag: Option<&str>) -> Result<Self> {
        let mut code = String::new();
        if let Some(measurement_id) = gtag {
            if !measurement_id
                .chars()
                .all(|char_| char_.is_ascii_alphanumeric() || char_ == '-')
            {
                return Err(anyhow!("invalid measurement ID: {:?}", measurement_id));
            }
            write!(
                code,
                r#"<!-- Global site tag (gtag.js) - Google Analytics --> <script async src="https://www.googletagmanager.com/gtag/js?id={0}"></script> <script>window.dataLayer = window.dataLayer || []; function gtag(){{dataLayer.push(arguments);}} gtag('js', new Date()); gtag('config', '{0}'); </script>"#,
                measurement_id,
            )?;
        };
        Ok(Self(PreEscaped(code)))
    }
}

impl Render for &TrackingCode {
    fn render_to(&self, buffer: &mut String) {
        self.0.render_to(buffer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gtag_ok() -> crate::Result {
        let code = TrackingCode::new(Some("G-ABC123"))?;
        let markup = (&code).render().into_string();
        assert!(markup.contains("gtag/js?id=G-ABC123"));
        assert!(markup.contains("gtag('config', 'G-ABC123');"));
        Ok(())
    }

    #[test]
    fn empty_ok() -> crate::Result {
        assert_eq!((&TrackingCode::new(None)?).render().into_string(), "");
        Ok(())
    }

    #[test]
    fn invalid_measurement_id_error() {
        assert!(TrackingCode::new(Some("'); alert(1); //")).is_err());
    }
}
