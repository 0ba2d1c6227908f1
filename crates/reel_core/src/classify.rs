use crate::Article;

/// Case-sensitive, unanchored containment, matching the feed's own casing.
pub fn is_movie_review(article: &Article) -> bool {
    article.section == "movies" && article.title.contains("Review")
}

pub fn is_critics_pick(article: &Article) -> bool {
    is_movie_review(article) && article.kicker.contains("Critic")
}

pub fn is_related_news(article: &Article) -> bool {
    !is_movie_review(article)
}

/// Filtered views into a session's article list, stored as indices rather
/// than copies. Order within each view matches feed order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classified {
    pub reviews: Vec<usize>,
    pub critics_picks: Vec<usize>,
    pub related_news: Vec<usize>,
}

/// One stable pass. Every article lands in exactly one of
/// `{reviews, related_news}`; `critics_picks` is a subset of `reviews`.
pub fn classify(articles: &[Article]) -> Classified {
    let mut classified = Classified::default();
    for (index, article) in articles.iter().enumerate() {
        if is_movie_review(article) {
            classified.reviews.push(index);
            if is_critics_pick(article) {
                classified.critics_picks.push(index);
            }
        } else {
            classified.related_news.push(index);
        }
    }
    classified
}

/// Materialize a view against the article list it was built from.
pub fn select<'a>(indices: &[usize], articles: &'a [Article]) -> Vec<&'a Article> {
    indices.iter().map(|&i| &articles[i]).collect()
}
