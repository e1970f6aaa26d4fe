use super::company::{product_href, quick_link_href};
use super::navigation::{NAV_TREE, NavEntry};
use super::reports::REPORTS;
use super::slides::SLIDES;
use super::*;

#[test]
fn slugify_lowercases_and_joins_words() {
    assert_eq!(slugify("About Us"), "about-us");
    assert_eq!(slugify("  Refined   Sugar "), "refined-sugar");
    assert_eq!(slugify("News & Reports"), "news-&-reports");
}

#[test]
fn footer_hrefs_use_slugs() {
    assert_eq!(quick_link_href("About Us"), "/about-us");
    assert_eq!(product_href("Cube Sugar"), "/products/cube-sugar");
}

#[test]
fn carousel_has_at_least_one_slide() {
    assert!(!SLIDES.is_empty());
}

fn depth(entry: &NavEntry) -> usize {
    1 + entry.children.iter().map(depth).max().unwrap_or(0)
}

#[test]
fn nav_tree_is_at_most_two_levels_deep() {
    for entry in NAV_TREE {
        assert!(depth(entry) <= 2, "{} is too deep", entry.label);
    }
}

#[test]
fn nav_paths_are_absolute() {
    for entry in NAV_TREE {
        assert!(entry.path.starts_with('/'), "{}", entry.label);
        for child in entry.children {
            assert!(child.path.starts_with('/'), "{}", child.label);
        }
    }
}

#[test]
fn nav_labels_are_unique_at_top_level() {
    let mut labels = NAV_TREE.iter().map(|e| e.label).collect::<Vec<_>>();
    labels.sort_unstable();
    labels.dedup();
    assert_eq!(labels.len(), NAV_TREE.len());
}

#[test]
fn leaf_has_no_children_and_depth_one() {
    let leaf = NavEntry::leaf("Careers", "/contact/careers");
    assert!(!leaf.has_children());
    assert_eq!(depth(&leaf), 1);
}

#[test]
fn submenu_id_is_slugged() {
    let entry = NAV_TREE.iter().find(|e| e.label == "Related Links").expect("entry");
    assert_eq!(entry.submenu_id(), "mobile-submenu-related-links");
}

#[test]
fn report_href_points_at_news_detail() {
    assert_eq!(REPORTS[0].href(), "/news/1");
}
