pub use serde::Deserialize;

/// An entry in the Safe Apps catalog, or one the user added by hand.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct SafeApp {
    pub id: i64,
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub description: String,
    pub icon_url: Option<String>,
    #[serde(default)]
    pub chain_ids: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl SafeApp {
    /// Custom apps are never assigned a positive catalog id.
    pub fn is_custom(&self) -> bool {
        self.id < 1
    }

    /// The name reported to analytics. Custom apps carry user-supplied
    /// names, so their launch URL is used instead.
    pub fn display_name(&self) -> &str {
        if self.is_custom() {
            &self.url
        } else {
            &self.name
        }
    }

    pub fn supports_chain(&self, chain_id: &str) -> bool {
        self.chain_ids.is_empty() || self.chain_ids.iter().any(|id| id == chain_id)
    }
}

#[cfg(test)]
mod test {
    use super::SafeApp;

    fn app(id: i64) -> SafeApp {
        SafeApp {
            id,
            name: "Foo".to_string(),
            url: "https://foo.app".to_string(),
            description: String::new(),
            icon_url: None,
            chain_ids: vec![],
            tags: vec![],
        }
    }

    #[test]
    fn catalog_app_reports_name() {
        assert!(!app(5).is_custom());
        assert_eq!(app(5).display_name(), "Foo");
        assert_eq!(app(1).display_name(), "Foo");
    }

    #[test]
    fn custom_app_reports_url() {
        for id in [0, -1, -42] {
            assert!(app(id).is_custom());
            assert_eq!(app(id).display_name(), "https://foo.app");
        }
    }

    #[test]
    fn empty_chain_list_supports_everything() {
        let mut foo = app(5);
        assert!(foo.supports_chain("137"));

        foo.chain_ids = vec!["1".to_string()];
        assert!(foo.supports_chain("1"));
        assert!(!foo.supports_chain("137"));
    }
}
