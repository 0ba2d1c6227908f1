use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;

use reel_core::{classify::select, facets, timefmt, Article};

use crate::state::Session;

pub const ATTRIBUTION: &str = "Data provided by The New York Times";
pub const ATTRIBUTION_URL: &str = "https://developer.nytimes.com";

const KICKER_COLOR: &str = "#FFD700";
const PAGE_TITLE: &str = "The NYT Movie Reviews";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Reviews,
    CriticsPick,
    RelatedNews,
    Collage,
}

impl View {
    pub const ALL: [View; 4] = [
        View::Reviews,
        View::CriticsPick,
        View::RelatedNews,
        View::Collage,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            View::Reviews => "reviews",
            View::CriticsPick => "critics-pick",
            View::RelatedNews => "related-news",
            View::Collage => "collage",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            View::Reviews => "Movie Reviews",
            View::CriticsPick => "Critic\u{2019}s Pick",
            View::RelatedNews => "Related News",
            View::Collage => "Collage",
        }
    }

    pub fn from_slug(slug: &str) -> Option<View> {
        View::ALL.into_iter().find(|v| v.slug() == slug)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Detail,
    Grid,
}

/// Render the full dashboard page for one view selection.
///
/// Pure in everything but the collage shuffle, which deliberately uses an
/// unseeded generator: it reorders display only, never classification.
pub fn page(view: View, layout: Layout, session: &Session, now: DateTime<Utc>) -> String {
    let (count, body) = match view {
        View::Collage => {
            let mut order: Vec<usize> = (0..session.articles.len()).collect();
            order.shuffle(&mut rand::rng());
            let articles = select(&order, &session.articles);
            (articles.len(), image_rows(&articles, 5, false))
        }
        _ => {
            let indices = match view {
                View::Reviews => &session.classified.reviews,
                View::CriticsPick => &session.classified.critics_picks,
                View::RelatedNews => &session.classified.related_news,
                View::Collage => unreachable!(),
            };
            let articles = select(indices, &session.articles);
            let body = match layout {
                Layout::Detail => detail_rows(&articles, now),
                Layout::Grid => image_rows(&articles, 3, true),
            };
            (articles.len(), body)
        }
    };

    let notice = if session.fetch_failed {
        r#"<p class="notice">Could not reach the top-stories feed. Showing an empty edition.</p>"#
    } else {
        ""
    };

    format!(
        r#"<!doctype html>
<html>
<head>
<meta charset="utf-8">
<title>{page_title}</title>
<style>{css}</style>
</head>
<body>
<div class="shell">
{sidebar}
<main>
{notice}
<h1>{title} ({count})</h1>
{attribution}
<hr>
{body}
<hr>
{attribution}
</main>
</div>
</body>
</html>
"#,
        page_title = PAGE_TITLE,
        css = CSS,
        sidebar = sidebar(view),
        notice = notice,
        title = view.title(),
        count = count,
        attribution = attribution(),
        body = body,
    )
}

fn sidebar(current: View) -> String {
    let mut items = String::new();
    for view in View::ALL {
        let class = if view == current { r#" class="active""# } else { "" };
        items.push_str(&format!(
            "<li><a{} href=\"/?view={}\">{}</a></li>\n",
            class,
            view.slug(),
            view.title()
        ));
    }
    format!(
        "<nav class=\"sidebar\">\n<h2>{}</h2>\n<ul>\n{}</ul>\n</nav>",
        PAGE_TITLE, items
    )
}

fn attribution() -> String {
    format!(
        "<p class=\"attribution\"><a href=\"{}\">{}</a></p>",
        ATTRIBUTION_URL, ATTRIBUTION
    )
}

/// One article per row, text split 4:1 against the image column.
fn detail_rows(articles: &[&Article], now: DateTime<Utc>) -> String {
    let mut out = String::new();
    for article in articles {
        out.push_str("<section class=\"story\">\n<div class=\"story-text\">\n");
        out.push_str(&format!(
            "<p class=\"when\">{}</p>\n",
            timefmt::how_long_ago(article.published_date, now)
        ));
        out.push_str(&format!(
            "<h3><a href=\"{}\">{}</a></h3>\n",
            escape(&article.url),
            escape(&article.title)
        ));
        out.push_str(&format!("<p>{}</p>\n", escape(&article.abstract_text)));
        out.push_str(&person_line(&article.per_facet));
        if !article.kicker.is_empty() {
            out.push_str(&format!(
                "<p><span class=\"chip kicker\" style=\"background:{}\">{}</span></p>\n",
                KICKER_COLOR,
                escape(&article.kicker)
            ));
        }
        out.push_str("</div>\n<div class=\"story-image\">\n");
        if let Some(image) = article.last_image() {
            out.push_str(&format!(
                "<img src=\"{}\" alt=\"{}\">\n",
                escape(&image.url),
                escape(&image.caption)
            ));
        }
        out.push_str("</div>\n</section>\n<hr>\n");
    }
    out
}

/// Fixed-width image grid; the last row may be partial. With `buttons` set,
/// each cell carries the extracted movie name ("?" when there is none).
fn image_rows(articles: &[&Article], columns: usize, buttons: bool) -> String {
    let mut out = String::new();
    for row in articles.chunks(columns) {
        out.push_str(&format!("<div class=\"row cols-{}\">\n", columns));
        for article in row {
            out.push_str("<figure class=\"cell\">\n");
            if let Some(image) = article.last_image() {
                out.push_str(&format!(
                    "<img src=\"{}\" alt=\"{}\">\n",
                    escape(&image.url),
                    escape(&image.caption)
                ));
            }
            if buttons {
                let label = facets::find_movie_name(&article.des_facet)
                    .map(|name| escape(&name))
                    .unwrap_or_else(|| "?".to_string());
                out.push_str(&format!("<button>{}</button>\n", label));
            }
            out.push_str("</figure>\n");
        }
        out.push_str("</div>\n");
    }
    out
}

/// Person chips in feed order, a separator after every chip.
fn person_line(per_facet: &[String]) -> String {
    if per_facet.is_empty() {
        return String::new();
    }
    let mut out = String::from("<p class=\"people\">");
    for chip in facets::person_chips(per_facet) {
        out.push_str(&format!(
            "<span class=\"chip\">{} <small>{}</small></span> ",
            escape(&chip.name),
            escape(&chip.role)
        ));
    }
    out.push_str("</p>\n");
    out
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

const CSS: &str = r#"
body { margin: 0; font-family: Georgia, 'Times New Roman', serif; color: #121212; }
.shell { display: flex; min-height: 100vh; }
.sidebar { width: 14rem; padding: 1rem; border-right: 1px solid #ddd; }
.sidebar ul { list-style: none; padding: 0; }
.sidebar li { margin: .5rem 0; }
.sidebar a.active { font-weight: bold; }
main { flex: 1; padding: 1rem 2rem; }
.notice { background: #fff3cd; padding: .5rem 1rem; }
.attribution { font-size: .8rem; color: #555; }
.story { display: grid; grid-template-columns: 4fr 1fr; gap: 1rem; }
.when { color: #555; font-size: .85rem; }
.row { display: grid; gap: 1rem; margin-bottom: 1rem; }
.row.cols-3 { grid-template-columns: repeat(3, 1fr); }
.row.cols-5 { grid-template-columns: repeat(5, 1fr); }
.cell { margin: 0; }
img { width: 100%; }
.chip { background: #e8f0fe; border-radius: .5rem; padding: .1rem .4rem; }
.chip small { opacity: .6; }
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use reel_core::{classify, Multimedia};

    fn article(section: &str, title: &str, kicker: &str) -> Article {
        Article {
            title: title.to_string(),
            abstract_text: "An abstract.".to_string(),
            url: "https://example.com/a".to_string(),
            section: section.to_string(),
            kicker: kicker.to_string(),
            published_date: Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap(),
            per_facet: vec!["Jane Doe (Director)".to_string(), "Sam Lee".to_string()],
            des_facet: vec!["Quiet (Movie)".to_string()],
            multimedia: vec![Multimedia {
                url: "https://example.com/img.jpg".to_string(),
                format: "superJumbo".to_string(),
                caption: "A still.".to_string(),
            }],
        }
    }

    fn session(articles: Vec<Article>) -> Session {
        let classified = classify(&articles);
        Session {
            articles,
            classified,
            fetch_failed: false,
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_detail_page_shows_story_furniture() {
        let s = session(vec![article("movies", "Review: Quiet", "Critic's Pick")]);
        let html = page(View::Reviews, Layout::Detail, &s, now());

        assert!(html.contains("Movie Reviews (1)"));
        assert!(html.contains("2 hours ago"));
        assert!(html.contains("<a href=\"https://example.com/a\">Review: Quiet</a>"));
        assert!(html.contains("An abstract."));
        assert!(html.contains("Jane Doe <small>Director</small>"));
        assert!(html.contains("Sam Lee <small>Actor</small>"));
        assert!(html.contains(KICKER_COLOR));
        assert!(html.contains(ATTRIBUTION));
        assert!(html.contains("img.jpg"));
    }

    #[test]
    fn test_empty_kicker_renders_no_kicker_chip() {
        let s = session(vec![article("movies", "Review: Quiet", "")]);
        let html = page(View::Reviews, Layout::Detail, &s, now());
        assert!(!html.contains(KICKER_COLOR));
    }

    #[test]
    fn test_sidebar_lists_all_views() {
        let s = session(vec![]);
        let html = page(View::Reviews, Layout::Detail, &s, now());
        assert!(html.contains("Movie Reviews"));
        assert!(html.contains("Critic\u{2019}s Pick"));
        assert!(html.contains("Related News"));
        assert!(html.contains("Collage"));
    }

    #[test]
    fn test_grid_chunks_in_rows_of_three() {
        let articles: Vec<Article> = (0..7)
            .map(|i| article("movies", &format!("Review: {}", i), ""))
            .collect();
        let s = session(articles);
        let html = page(View::Reviews, Layout::Grid, &s, now());
        assert_eq!(html.matches("row cols-3").count(), 3);
        assert_eq!(html.matches("<figure").count(), 7);
    }

    #[test]
    fn test_grid_button_falls_back_to_question_mark() {
        let mut a = article("movies", "Review: Quiet", "");
        a.des_facet = vec!["Drama".to_string()];
        let s = session(vec![article("movies", "Review: Named", ""), a]);
        let html = page(View::Reviews, Layout::Grid, &s, now());
        assert!(html.contains("<button>Quiet</button>"));
        assert!(html.contains("<button>?</button>"));
    }

    #[test]
    fn test_collage_chunks_in_rows_of_five_over_all_articles() {
        let articles: Vec<Article> = (0..7)
            .map(|i| article(if i % 2 == 0 { "movies" } else { "us" }, &format!("Review: {}", i), ""))
            .collect();
        let s = session(articles);
        let html = page(View::Collage, Layout::Detail, &s, now());
        assert!(html.contains("Collage (7)"));
        assert_eq!(html.matches("row cols-5").count(), 2);
        assert_eq!(html.matches("<img").count(), 7);
        // Images only; no story furniture in the collage
        assert!(!html.contains("<button>"));
        assert!(!html.contains("class=\"story\""));
    }

    #[test]
    fn test_fetch_failed_notice() {
        let s = Session {
            fetch_failed: true,
            ..Session::default()
        };
        let html = page(View::Reviews, Layout::Detail, &s, now());
        assert!(html.contains("Could not reach the top-stories feed"));
        assert!(html.contains("Movie Reviews (0)"));
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("a & <b> \"c\""), "a &amp; &lt;b&gt; &quot;c&quot;");
    }

    #[test]
    fn test_view_slug_round_trip() {
        for view in View::ALL {
            assert_eq!(View::from_slug(view.slug()), Some(view));
        }
        assert_eq!(View::from_slug("nope"), None);
    }

    #[test]
    fn test_relative_time_in_detail_view() {
        let mut a = article("movies", "Review: Old", "");
        a.published_date = now() - Duration::days(8);
        let s = session(vec![a]);
        let html = page(View::Reviews, Layout::Detail, &s, now());
        assert!(html.contains("1 week ago"));
    }
}
