use std::{collections::BTreeMap, sync::LazyLock};

const FALLBACK: &str = "home";

static MAPPING: LazyLock<BTreeMap<&'static str, &'static str>> = LazyLock::new(|| {
    BTreeMap::from([
        ("house.fill", "home"),
        ("paperplane.fill", "send"),
        ("chevron.left.forwardslash.chevron.right", "code"),
        ("chevron.right", "chevron-right"),
        ("cube", "widgets"),
        ("square.and.arrow.up", "share"),
        ("ellipsis", "more-horiz"),
        ("trash", "delete"),
        ("dumbbell", "fitness-center"),
        ("figure.run", "directions-run"),
        ("figure.yoga", "self-improvement"),
        ("flame", "local-fire-department"),
    ])
});

/// Resolves an abstract icon symbol to a platform icon name. Unknown
/// symbols fall back to the home icon.
#[must_use]
pub fn material_icon(symbol: &str) -> &'static str {
    MAPPING.get(symbol).copied().unwrap_or(FALLBACK)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use strum::IntoEnumIterator;
    use vigor_domain::Category;

    use super::*;

    #[rstest]
    #[case("house.fill", "home")]
    #[case("trash", "delete")]
    #[case("dumbbell", "fitness-center")]
    #[case("flame", "local-fire-department")]
    fn test_material_icon(#[case] symbol: &str, #[case] name: &str) {
        assert_eq!(material_icon(symbol), name);
    }

    #[rstest]
    #[case("")]
    #[case("no.such.symbol")]
    fn test_material_icon_fallback(#[case] symbol: &str) {
        assert_eq!(material_icon(symbol), "home");
    }

    #[test]
    fn test_all_category_symbols_are_mapped() {
        for category in Category::iter() {
            assert!(MAPPING.contains_key(category.symbol()));
        }
    }
}
