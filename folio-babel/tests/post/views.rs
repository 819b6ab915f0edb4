//! Post views built from stored records

use crate::common::load_json;
use folio_babel::post::{render_feed, PostDefaults, PostRecord, PostStatus};
use folio_babel::HtmlOptions;
use insta::assert_snapshot;

fn record(name: &str) -> PostRecord {
    serde_json::from_value(load_json(name)).unwrap()
}

#[test]
fn test_public_view_of_tree_post() {
    let post = record("post-tree.json").to_public(&PostDefaults::default(), &HtmlOptions::default());
    let json = serde_json::to_string_pretty(&post).unwrap();
    assert_snapshot!(json, @r#"
    {
      "slug": "preview",
      "title": "Learn How to Pre-render Pages",
      "date": "2020-03-16T05:35:07.322Z",
      "coverImage": "/media/preview.jpg",
      "author": {
        "name": "Tim Neutkens",
        "picture": "/assets/blog/authors/tim.jpeg"
      },
      "excerpt": "Static generation and server-side rendering.",
      "ogImage": {
        "url": "/media/preview.jpg"
      },
      "content": "<h2>Two forms</h2><ol><li>Static</li><li>Server</li></ol>"
    }
    "#);
}

#[test]
fn test_public_view_of_legacy_post() {
    let post = record("post-legacy.json").to_public(&PostDefaults::default(), &HtmlOptions::default());
    assert_eq!(post.date, "2020-03-16T00:00:00.000Z");
    assert_eq!(post.cover_image, "/assets/blog/preview/cover.jpg");
    assert_eq!(post.og_image.url, "/assets/blog/preview/cover.jpg");
    assert_eq!(post.author.name, "Unknown");
    assert_eq!(post.author.picture, "/assets/blog/authors/jj.jpeg");
    assert_eq!(post.excerpt, "");
    assert_eq!(
        post.content,
        "<h2>Routing</h2>\n<p>Pages in <code>pages/</code> are routes.</p>\n"
    );
}

#[test]
fn test_admin_view_uses_markdown() {
    let admin = record("post-tree.json").to_admin();
    assert_eq!(admin.id.as_deref(), Some("6650f1c2a1b2c3d4e5f60718"));
    assert_eq!(admin.content, "## Two forms\n\n1. Static\n2. Server\n\n");

    let legacy = record("post-legacy.json").to_admin();
    assert_eq!(legacy.id.as_deref(), Some("legacy-1"));
    assert_eq!(legacy.content, "## Routing\n\nPages in `pages/` are routes.\n");
}

#[test]
fn test_custom_defaults() {
    let defaults = PostDefaults {
        cover_image: "/img/placeholder.png".to_string(),
        author_picture: "/img/anon.png".to_string(),
        author_name: "Staff".to_string(),
    };
    let post = record("post-legacy.json").to_public(&defaults, &HtmlOptions::default());
    assert_eq!(post.cover_image, "/img/placeholder.png");
    assert_eq!(post.author.picture, "/img/anon.png");
    assert_eq!(post.author.name, "Staff");
}

#[test]
fn test_feed_orders_and_filters() {
    let tree = record("post-tree.json");
    let legacy = record("post-legacy.json");
    let mut draft = record("post-tree.json");
    draft.slug = "unpublished".to_string();
    draft.status = PostStatus::Draft;

    let feed = render_feed(
        &[legacy, draft, tree],
        &PostDefaults::default(),
        &HtmlOptions::default(),
    );
    let slugs: Vec<&str> = feed.iter().map(|p| p.slug.as_str()).collect();
    // Same day; the tree post has a later time of day.
    assert_eq!(slugs, vec!["preview", "dynamic-routing"]);
}
