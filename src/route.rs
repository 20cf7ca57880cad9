//! The two client-side routes of the viewer

use std::fmt;
use std::str::FromStr;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::ViewerError;

/// Page currently shown; doubles as the Bevy state driving scene setup
#[derive(
    States, Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum Page {
    /// `/`: building viewer with ambient auto-rotation
    #[default]
    Home,
    /// `/modelpage`: animated TIPO-B viewer
    Model,
}

impl Page {
    pub const fn path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Model => "/modelpage",
        }
    }
}

impl FromStr for Page {
    type Err = ViewerError;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        match path.trim().trim_end_matches('/') {
            "" => Ok(Page::Home),
            "/modelpage" => Ok(Page::Model),
            _ => Err(ViewerError::UnknownRoute(path.to_owned())),
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_routes() {
        assert_eq!("/".parse::<Page>().unwrap(), Page::Home);
        assert_eq!("".parse::<Page>().unwrap(), Page::Home);
        assert_eq!("/modelpage".parse::<Page>().unwrap(), Page::Model);
        assert_eq!("/modelpage/".parse::<Page>().unwrap(), Page::Model);
    }

    #[test]
    fn rejects_unknown_paths() {
        let err = "/settings".parse::<Page>().unwrap_err();
        assert!(matches!(err, ViewerError::UnknownRoute(path) if path == "/settings"));
    }

    #[test]
    fn path_round_trips_through_parse() {
        for page in [Page::Home, Page::Model] {
            assert_eq!(page.path().parse::<Page>().unwrap(), page);
        }
    }
}
