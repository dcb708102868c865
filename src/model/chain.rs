pub use serde::Deserialize;

/// The network a share link is scoped to.
#[derive(Debug, Deserialize, PartialEq, Eq, Clone)]
pub struct Chain {
    pub chain_id: String,
    pub short_name: String,
    pub chain_name: Option<String>,
}

impl Chain {
    /// A chain known only by its short name, as given on the command line.
    pub fn with_short_name<S: Into<String>>(short_name: S) -> Self {
        Self {
            chain_id: String::new(),
            short_name: short_name.into(),
            chain_name: None,
        }
    }

    pub fn label(&self) -> &str {
        self.chain_name.as_deref().unwrap_or(&self.short_name)
    }
}

/// The network currently selected in the dashboard, shared through
/// component context. `None` when no network is selected.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct ActiveChain(pub Option<Chain>);
