use std::fmt::Debug;

/// Server-side filter dimension for a search term (`searchBy`)
pub trait SearchField: Copy + Eq + Debug + Send + Sync + 'static {
    /// Every selectable field, in display order
    const ALL: &'static [Self];

    /// Value sent as `searchBy`
    fn query_value(self) -> &'static str;

    /// Label shown in the field selector
    fn label(self) -> &'static str;

    fn from_query_value(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.query_value() == value)
    }
}

/// Search field type for resources that only accept a plain search term
/// (or no search at all).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoSearchField {}

impl SearchField for NoSearchField {
    const ALL: &'static [Self] = &[];

    fn query_value(self) -> &'static str {
        match self {}
    }

    fn label(self) -> &'static str {
        match self {}
    }
}

/// Parameters of one list request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery<F> {
    /// 1-based page number
    pub page: u32,
    pub search_term: String,
    /// `None` means "All Fields"
    pub search_by: Option<F>,
}

impl<F> Default for ListQuery<F> {
    fn default() -> Self {
        Self {
            page: 1,
            search_term: String::new(),
            search_by: None,
        }
    }
}

impl<F: SearchField> ListQuery<F> {
    pub fn first_page() -> Self {
        Self::default()
    }

    /// Query parameters in request order.
    ///
    /// `page` is always present; `searchTerm` and `searchBy` only when set.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("page", self.page.to_string())];
        if !self.search_term.is_empty() {
            pairs.push(("searchTerm", self.search_term.clone()));
        }
        if let Some(field) = self.search_by {
            pairs.push(("searchBy", field.query_value().to_string()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Probe {
        Name,
        Owner,
    }

    impl SearchField for Probe {
        const ALL: &'static [Self] = &[Probe::Name, Probe::Owner];

        fn query_value(self) -> &'static str {
            match self {
                Probe::Name => "name",
                Probe::Owner => "owner",
            }
        }

        fn label(self) -> &'static str {
            match self {
                Probe::Name => "Name",
                Probe::Owner => "Owner",
            }
        }
    }

    #[test]
    fn test_page_only_when_search_empty() {
        let q = ListQuery::<Probe>::first_page();
        assert_eq!(q.query_pairs(), vec![("page", "1".to_string())]);
    }

    #[test]
    fn test_search_params_appended_when_set() {
        let q = ListQuery {
            page: 3,
            search_term: "lap".to_string(),
            search_by: Some(Probe::Owner),
        };
        assert_eq!(
            q.query_pairs(),
            vec![
                ("page", "3".to_string()),
                ("searchTerm", "lap".to_string()),
                ("searchBy", "owner".to_string()),
            ]
        );
    }

    #[test]
    fn test_from_query_value() {
        assert_eq!(Probe::from_query_value("name"), Some(Probe::Name));
        assert_eq!(Probe::from_query_value(""), None);
        assert_eq!(NoSearchField::from_query_value("name"), None);
    }
}
