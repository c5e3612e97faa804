//! `folio query`: print facade results as JSON on stdout.

use crate::{cli::QueryTarget, generator::data::to_json};
use anyhow::{Result, anyhow};
use folio_content::{Content, PostDocument};

/// Print the JSON for `target`.
pub fn run_query(content: &Content, target: &QueryTarget) -> Result<()> {
    println!("{}", query_json(content, target)?);
    Ok(())
}

/// JSON for `target`. A post lookup that finds nothing published is an error.
pub fn query_json(content: &Content, target: &QueryTarget) -> Result<String> {
    let json = match target {
        QueryTarget::Hero => to_json(&content.hero()),
        QueryTarget::About => to_json(&content.about()),
        QueryTarget::Experiences => to_json(&content.experiences()),
        QueryTarget::Projects => to_json(&content.projects()),
        QueryTarget::Posts => to_json(&content.all_posts()),
        QueryTarget::Tags => to_json(&content.all_tags()),
        QueryTarget::Post { slug } => to_json(&published(content, slug)?),
        QueryTarget::Adjacent { slug } => to_json(&content.adjacent_posts(slug)),
        QueryTarget::Toc { slug } => {
            let post = published(content, slug)?;
            to_json(&content.table_of_contents(&post.content))
        }
        QueryTarget::Tag { tag } => to_json(&content.posts_by_tag(tag)),
        QueryTarget::Search { query } => to_json(&content.search_posts(query)),
    }?;
    Ok(json)
}

fn published(content: &Content, slug: &str) -> Result<PostDocument> {
    content
        .post_by_slug(slug)
        .ok_or_else(|| anyhow!("post `{slug}` not found"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use std::fs;
    use tempfile::TempDir;

    fn content() -> (TempDir, Content) {
        let dir = TempDir::new().unwrap();
        for (slug, date, published) in [("a", "2024-01-01", true), ("b", "2024-06-01", false), ("c", "2024-03-01", true)] {
            let post = dir.path().join("posts").join(slug);
            fs::create_dir_all(&post).unwrap();
            fs::write(
                post.join("index.mdoc"),
                format!("---\ntitle: Post {slug}\ndate: {date}\npublished: {published}\ntags:\n  - rust\n---\n## Intro\n\n### Detail\n"),
            )
            .unwrap();
        }
        let content = Content::from_files(dir.path());
        (dir, content)
    }

    fn query(content: &Content, target: QueryTarget) -> Value {
        serde_json::from_str(&query_json(content, &target).unwrap()).unwrap()
    }

    #[test]
    fn test_query_posts() {
        let (_dir, content) = content();
        let posts = query(&content, QueryTarget::Posts);
        let slugs: Vec<_> = posts.as_array().unwrap().iter().map(|p| p["slug"].clone()).collect();
        assert_eq!(slugs, vec!["c", "a"]);
    }

    #[test]
    fn test_query_post_and_not_found() {
        let (_dir, content) = content();
        let post = query(&content, QueryTarget::Post { slug: "a".into() });
        assert_eq!(post["title"], "Post a");
        assert_eq!(post["content"], "## Intro\n\n### Detail");

        let err = query_json(&content, &QueryTarget::Post { slug: "b".into() }).unwrap_err();
        assert!(err.to_string().contains("not found"));
        assert!(query_json(&content, &QueryTarget::Toc { slug: "zzz".into() }).is_err());
    }

    #[test]
    fn test_query_toc() {
        let (_dir, content) = content();
        let toc = query(&content, QueryTarget::Toc { slug: "c".into() });
        assert_eq!(toc[0]["id"], "intro");
        assert_eq!(toc[1]["level"], 3);
    }

    #[test]
    fn test_query_adjacent() {
        let (_dir, content) = content();
        let adjacent = query(&content, QueryTarget::Adjacent { slug: "c".into() });
        assert_eq!(adjacent["prev"]["slug"], "a");
        assert!(adjacent["next"].is_null());
    }

    #[test]
    fn test_query_tags_tag_search() {
        let (_dir, content) = content();
        assert_eq!(query(&content, QueryTarget::Tags), serde_json::json!(["rust"]));
        assert_eq!(
            query(&content, QueryTarget::Tag { tag: "RUST".into() }).as_array().unwrap().len(),
            2
        );
        let found = query(&content, QueryTarget::Search { query: "post c".into() });
        assert_eq!(found[0]["slug"], "c");
    }

    #[test]
    fn test_query_singletons_default() {
        let (_dir, content) = content();
        assert_eq!(query(&content, QueryTarget::Hero)["name"], "Jacob");
        assert_eq!(query(&content, QueryTarget::About)["stats"], serde_json::json!([]));
        assert_eq!(query(&content, QueryTarget::Experiences), serde_json::json!([]));
    }
}
