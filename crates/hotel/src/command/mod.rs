use std::{borrow::Cow, ops::Deref};

use validator::ValidationError;

mod create;
mod delete;
mod update;

pub use create::CreateInput;
pub use update::UpdateInput;

#[derive(Clone)]
pub struct Command(pub akkor_shared::State);

impl Deref for Command {
    type Target = akkor_shared::State;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Command {
    pub fn new(state: akkor_shared::State) -> Self {
        Self(state)
    }
}

/// Every picture must be an absolute http(s) URL.
pub(crate) fn validate_picture_list(pictures: &[String]) -> Result<(), ValidationError> {
    for picture in pictures {
        let valid = url::Url::parse(picture)
            .map(|url| matches!(url.scheme(), "http" | "https"))
            .unwrap_or(false);

        if !valid {
            return Err(ValidationError::new("url").with_message(Cow::from(format!(
                "Picture '{picture}' must be a valid URL"
            ))));
        }
    }

    Ok(())
}

pub(crate) fn normalize_pictures(pictures: Vec<String>) -> Vec<String> {
    pictures
        .into_iter()
        .map(|p| p.trim().to_owned())
        .filter(|p| !p.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pictures_must_be_absolute_urls() {
        assert!(validate_picture_list(&[]).is_ok());
        assert!(
            validate_picture_list(&["https://images.example.com/a.jpg".to_owned()]).is_ok()
        );
        assert!(validate_picture_list(&["/static/a.jpg".to_owned()]).is_err());
        assert!(validate_picture_list(&["ftp://example.com/a.jpg".to_owned()]).is_err());
    }

    #[test]
    fn blank_pictures_are_dropped() {
        let pictures = normalize_pictures(vec![
            " https://a.example/1.jpg ".to_owned(),
            "".to_owned(),
            "   ".to_owned(),
        ]);
        assert_eq!(pictures, vec!["https://a.example/1.jpg".to_owned()]);
    }
}
