use chrono::{NaiveDate, Utc};
use contracts::dashboards::d100_overview::{EntityCounts, OverviewSummary};
use contracts::domain::a001_asset::AssetResource;
use contracts::domain::a002_category::CategoryResource;
use contracts::domain::a003_maintainer::MaintainerResource;
use contracts::domain::a004_supplier::SupplierResource;
use contracts::shared::entity::EntityResource;
use contracts::shared::list_query::ListQuery;
use contracts::system::users::UserResource;
use futures::future::join5;

use crate::shared::api::client::EntityClient;
use crate::shared::api::gloo::GlooTransport;
use crate::shared::api::Transport;
use crate::shared::api_utils::api_base;

/// Total count and first-page rows of one collection.
/// A failed request counts as an empty collection.
async fn first_page<E: EntityResource, T: Transport>(
    transport: T,
    base: &str,
) -> (u64, Vec<E::Row>) {
    let client = EntityClient::<E, T>::with_transport(transport, base);
    match client.list(&ListQuery::first_page()).await {
        Ok(page) => (page.total_or_len(), page.items),
        Err(err) => {
            log::error!("overview: failed to load {}: {}", E::PLURAL, err);
            (0, Vec::new())
        }
    }
}

/// Fetch the five collections concurrently and fold them into the summary
pub async fn fetch_overview<T: Transport + Clone>(
    transport: T,
    base: &str,
    today: NaiveDate,
) -> OverviewSummary {
    let (assets, categories, users, maintainers, suppliers) = join5(
        first_page::<AssetResource, T>(transport.clone(), base),
        first_page::<CategoryResource, T>(transport.clone(), base),
        first_page::<UserResource, T>(transport.clone(), base),
        first_page::<MaintainerResource, T>(transport.clone(), base),
        first_page::<SupplierResource, T>(transport, base),
    )
    .await;

    let counts = EntityCounts {
        assets: assets.0,
        categories: categories.0,
        users: users.0,
        maintainers: maintainers.0,
        suppliers: suppliers.0,
    };
    OverviewSummary::build(counts, &categories.1, &assets.1, today)
}

pub async fn load_overview() -> OverviewSummary {
    fetch_overview(GlooTransport, &api_base(), Utc::now().date_naive()).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::ApiError;
    use crate::shared::testing::FakeTransport;
    use futures::executor::block_on;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    #[test]
    fn test_overview_counts_and_charts() {
        let fake = FakeTransport::default();
        fake.push_json(
            200,
            r#"[
                {"id": 1, "name": "Laptop-1", "status": "active", "categoryId": 7, "lastUpdated": "2024-03-02T10:00:00"},
                {"id": 2, "name": "Desk", "status": "Retired", "categoryId": 8, "createdAt": "2024-01-20"}
            ]"#,
            &[("X-Total-Count", "12")],
        );
        fake.push_json(
            200,
            r#"[{"id": 7, "name": "Laptops"}, {"id": 8, "name": "Furniture"}]"#,
            &[],
        );
        fake.push_json(200, r#"[{"id": "u1", "name": "Ann", "email": "a@x.io", "role": "admin"}]"#, &[("X-Total-Count", "3")]);
        fake.push_error(ApiError::Network("offline".to_string()));
        fake.push_json(200, "[]", &[]);

        let summary = block_on(fetch_overview(fake.clone(), "http://api", today()));

        assert_eq!(
            summary.counts,
            EntityCounts {
                assets: 12,
                categories: 2,
                users: 3,
                maintainers: 0,
                suppliers: 0,
            }
        );
        let urls: Vec<_> = fake.requests().into_iter().map(|r| r.url).collect();
        assert_eq!(urls.len(), 5);
        assert!(urls[0].starts_with("http://api/api/assets?"));
        assert!(urls[1].starts_with("http://api/api/Categories?"));

        assert_eq!(summary.by_category.len(), 2);
        assert_eq!(summary.by_category[0].count, 1);
        assert_eq!(summary.recent[0].name, "Laptop-1");
        assert_eq!(summary.monthly.len(), 6);
        assert_eq!(summary.max_month_count(), 1);
    }
}
