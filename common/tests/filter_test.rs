//! フィルタテスト
//!
//! 全セレクタ組み合わせで、表示件数が3条件ANDを満たす件数と一致することを検証

use emaar_common::display::{CATEGORIES, LOCATIONS};
use emaar_common::{Catalog, Project, ProjectFilter, ProjectStatus};

fn catalog() -> Catalog {
    let mut projects = Vec::new();
    let mut id = 1;
    for status in ProjectStatus::ALL {
        for (location, _) in LOCATIONS.iter().step_by(2) {
            for category in CATEGORIES.iter().take(2) {
                projects.push(Project {
                    id,
                    status: status.clone(),
                    location: location.to_string(),
                    category: category.to_string(),
                    ..Default::default()
                });
                id += 1;
            }
        }
    }
    Catalog::new(projects)
}

fn options(values: Vec<String>) -> Vec<String> {
    let mut all = vec!["all".to_string()];
    all.extend(values);
    all
}

#[test]
fn test_every_selector_combination() {
    let catalog = catalog();
    let statuses = options(ProjectStatus::ALL.iter().map(|s| s.as_str().to_string()).collect());
    let locations = options(LOCATIONS.iter().map(|(c, _)| c.to_string()).collect());
    let categories = options(CATEGORIES.iter().map(|c| c.to_string()).collect());

    for status in &statuses {
        for location in &locations {
            for category in &categories {
                let filter = ProjectFilter::new(status, location, category);
                let outcome = filter.apply(catalog.projects());

                let expected = catalog
                    .projects()
                    .iter()
                    .filter(|p| {
                        (status == "all" || p.status.as_str() == status)
                            && (location == "all" || &p.location == location)
                            && (category == "all" || &p.category == category)
                    })
                    .count();

                assert_eq!(
                    outcome.visible_count(),
                    expected,
                    "status={} location={} category={}",
                    status,
                    location,
                    category
                );
                assert_eq!(outcome.total, catalog.len());
                assert_eq!(outcome.is_empty(), expected == 0);
            }
        }
    }
}

#[test]
fn test_filter_does_not_mutate_catalog() {
    let catalog = catalog();
    let before = catalog.clone();
    let _ = ProjectFilter::new("completed", "doha", "commercial").apply(catalog.projects());
    assert_eq!(catalog, before);
}

/// ongoing/all/all → 進行中の1件だけ
#[test]
fn test_ongoing_status_with_open_location_and_category() {
    let catalog = Catalog::new(vec![
        Project {
            id: 1,
            status: ProjectStatus::Ongoing,
            location: "dubai".into(),
            category: "residential".into(),
            ..Default::default()
        },
        Project {
            id: 2,
            status: ProjectStatus::Completed,
            location: "doha".into(),
            category: "commercial".into(),
            ..Default::default()
        },
    ]);

    let outcome = ProjectFilter::new("ongoing", "all", "all").apply(catalog.projects());
    assert_eq!(outcome.visible.len(), 1);
    assert_eq!(outcome.visible[0].id, 1);
}
