use std::cmp::Ordering;

use contracts::domain::a002_category::{Category, CategoryResource};
use leptos::prelude::*;

use crate::layout::global_context::EntityKind;
use crate::shared::components::entity_list::{
    active_badge, entity_list, text_cell, Column, ListOptions, LocalTools,
};
use crate::shared::list_utils::{contains_ignore_case, Searchable, Sortable};

impl Searchable for Category {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ignore_case(&self.name, filter)
    }
}

impl Sortable for Category {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
            "createdBy" => self
                .created_by
                .to_lowercase()
                .cmp(&other.created_by.to_lowercase()),
            "kilogram" => self.kilogram.cmp(&other.kilogram),
            "active" => self.active.cmp(&other.active),
            _ => Ordering::Equal,
        }
    }
}

fn columns() -> Vec<Column<Category>> {
    vec![
        Column::new("Name", |c: &Category| text_cell(&c.name)).sortable("name"),
        Column::new("Created By", |c: &Category| text_cell(&c.created_by)).sortable("createdBy"),
        Column::new("Kilogram", |c: &Category| text_cell(&c.kilogram)).sortable("kilogram"),
        Column::new("Active", |c: &Category| active_badge(c.active)).sortable("active"),
    ]
}

#[component]
pub fn CategoryList() -> impl IntoView {
    entity_list::<CategoryResource>(
        columns(),
        ListOptions {
            kind: EntityKind::Category,
            title: "Categories",
            add_label: "Add New Category",
            server_search: false,
            local: Some(LocalTools::new("name")),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_utils::{visible_rows, SortState};

    fn category(name: &str, created_by: &str, kilogram: &str) -> Category {
        Category {
            id: name.to_lowercase(),
            name: name.to_string(),
            created_by: created_by.to_string(),
            kilogram: kilogram.to_string(),
            active: true,
        }
    }

    #[test]
    fn test_filter_and_sort_categories() {
        let rows = vec![
            category("monitors", "bob", "5kg"),
            category("Laptops", "ann", "2kg"),
            category("Desks", "ann", "30kg"),
        ];

        let by_name = visible_rows(&rows, "", &SortState::new("name"));
        let names: Vec<_> = by_name.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Desks", "Laptops", "monitors"]);

        let mut sort = SortState::new("createdBy");
        sort.toggle("createdBy");
        assert_eq!(visible_rows(&rows, "", &sort)[0].created_by, "bob");
        let matching = visible_rows(&rows, "LAP", &sort);
        assert_eq!(matching.len(), 1);
        assert_eq!(matching[0].name, "Laptops");

        // Only the name is searched
        assert!(visible_rows(&rows, "ann", &sort).is_empty());
        assert!(visible_rows(&rows, "30kg", &sort).is_empty());
    }
}
