//! Single-table key generation functions.
//!
//! Pure functions for building partition and sort keys. Every sort-key tag ends
//! with `#` and no tag is a prefix of another, so `begins_with` queries scoped to
//! one tag never match items of a different entity type.

// ============================================================================
// Key prefixes
// ============================================================================

/// Partition marker grouping every park record.
pub const PARK_COLLECTION: &str = "PARK";
pub const PARK_PREFIX: &str = "PARK#";
pub const ARTICLE_PREFIX: &str = "ARTICLE#";
pub const CAMPSITE_PREFIX: &str = "CAMPSITE#";
pub const USER_PREFIX: &str = "USER#";
pub const FAVORITE_PREFIX: &str = "FAV_SITE#";

/// All sort-key tags, used to check that prefixes never overlap.
pub const SORT_KEY_PREFIXES: [&str; 4] = [
    PARK_PREFIX,
    ARTICLE_PREFIX,
    CAMPSITE_PREFIX,
    FAVORITE_PREFIX,
];

// ============================================================================
// Park keys
// ============================================================================

/// Generate the partition key shared by all parks.
///
/// Pattern: `PARK`
pub fn park_partition() -> &'static str {
    PARK_COLLECTION
}

/// Generate sort key for a Park.
///
/// Pattern: `PARK#<park_code>`
pub fn park_sort(park_code: &str) -> String {
    format!("{PARK_PREFIX}{park_code}")
}

/// Generate the partition key for items attached to a park (articles, campsites).
///
/// Pattern: `PARK#<park_code>`
pub fn park_scoped_partition(park_code: &str) -> String {
    format!("{PARK_PREFIX}{park_code}")
}

// ============================================================================
// Article and campsite keys
// ============================================================================

/// Generate sort key for an Article.
///
/// Pattern: `ARTICLE#<article_id>`
pub fn article_sort(article_id: &str) -> String {
    format!("{ARTICLE_PREFIX}{article_id}")
}

/// Generate sort key for a Campsite.
///
/// Pattern: `CAMPSITE#<campsite_id>`
pub fn campsite_sort(campsite_id: &str) -> String {
    format!("{CAMPSITE_PREFIX}{campsite_id}")
}

// ============================================================================
// Favorite keys
// ============================================================================

/// Generate the partition key for items owned by a user.
///
/// Pattern: `USER#<user_id>`
pub fn user_partition(user_id: &str) -> String {
    format!("{USER_PREFIX}{user_id}")
}

/// Generate sort key for a Favorite.
///
/// Pattern: `FAV_SITE#<campground_id>`
pub fn favorite_sort(campground_id: &str) -> String {
    format!("{FAVORITE_PREFIX}{campground_id}")
}

// ============================================================================
// Query prefixes
// ============================================================================

pub fn park_sort_prefix() -> &'static str {
    PARK_PREFIX
}

pub fn article_sort_prefix() -> &'static str {
    ARTICLE_PREFIX
}

pub fn campsite_sort_prefix() -> &'static str {
    CAMPSITE_PREFIX
}

pub fn favorite_sort_prefix() -> &'static str {
    FAVORITE_PREFIX
}

#[cfg(test)]
mod tests {
    use super::*;

    const ID: &str = "0f8fad5b-d9cb-469f-a165-70867728950e";

    #[test]
    fn test_park_keys() {
        assert_eq!(park_partition(), "PARK");
        assert_eq!(park_sort("acad"), "PARK#acad");
    }

    #[test]
    fn test_park_scoped_partition() {
        assert_eq!(park_scoped_partition("yose"), "PARK#yose");
    }

    #[test]
    fn test_article_sort() {
        assert_eq!(
            article_sort(ID),
            "ARTICLE#0f8fad5b-d9cb-469f-a165-70867728950e"
        );
    }

    #[test]
    fn test_campsite_sort() {
        assert_eq!(
            campsite_sort(ID),
            "CAMPSITE#0f8fad5b-d9cb-469f-a165-70867728950e"
        );
    }

    #[test]
    fn test_favorite_keys() {
        assert_eq!(user_partition("auth0|42"), "USER#auth0|42");
        assert_eq!(
            favorite_sort(ID),
            "FAV_SITE#0f8fad5b-d9cb-469f-a165-70867728950e"
        );
    }

    #[test]
    fn test_prefixes() {
        assert_eq!(park_sort_prefix(), "PARK#");
        assert_eq!(article_sort_prefix(), "ARTICLE#");
        assert_eq!(campsite_sort_prefix(), "CAMPSITE#");
        assert_eq!(favorite_sort_prefix(), "FAV_SITE#");
    }

    #[test]
    fn test_sort_prefixes_never_overlap() {
        for a in SORT_KEY_PREFIXES {
            for b in SORT_KEY_PREFIXES {
                if a != b {
                    assert!(!a.starts_with(b), "{a} overlaps {b}");
                }
            }
        }
    }

    #[test]
    fn test_sort_keys_match_only_their_own_prefix() {
        let article = article_sort(ID);
        let campsite = campsite_sort(ID);

        assert!(article.starts_with(article_sort_prefix()));
        assert!(!article.starts_with(campsite_sort_prefix()));
        assert!(campsite.starts_with(campsite_sort_prefix()));
        assert!(!campsite.starts_with(article_sort_prefix()));
    }
}
